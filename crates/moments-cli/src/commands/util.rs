//! Shared utilities for CLI commands.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset};
use moments_core::{Photo, parse_capture_time};

/// Reads an album of photo records from a file, or stdin for `-`.
///
/// Accepts a JSON array of records or JSONL (one record per line, blank
/// lines skipped).
pub fn read_album(path: &Path) -> Result<Vec<Photo>> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read photos from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    parse_album(&content).with_context(|| format!("invalid photo records in {}", album_name(path)))
}

fn parse_album(content: &str) -> Result<Vec<Photo>> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).context("failed to parse JSON array");
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str::<Photo>(line).with_context(|| format!("failed to parse line {}", i + 1))
        })
        .collect()
}

/// Display name for an album path.
pub fn album_name(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Parses a split time given on the command line.
pub fn parse_split_time(s: &str) -> Result<DateTime<FixedOffset>> {
    parse_capture_time(s).with_context(|| {
        format!("Invalid time: {s}. Use ISO 8601 (e.g., 2024-06-15T14:30:00Z)")
    })
}
