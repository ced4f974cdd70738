//! Split and merge commands for correcting clustered events by hand.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use moments_core::{merge_events, split_event_at};

use super::render::format_events;
use super::util::{album_name, parse_split_time, read_album};

/// Splits an album's photos at `at` and prints the resulting events.
pub fn split<W: Write>(writer: &mut W, album: &Path, at: &str, json: bool) -> Result<()> {
    let split_time = parse_split_time(at)?;
    let photos = read_album(album)?;
    let name = album_name(album);

    let events = split_event_at(&photos, split_time)
        .with_context(|| format!("failed to split {name}"))?;

    if json {
        serde_json::to_writer_pretty(&mut *writer, &events)?;
        writeln!(writer)?;
    } else {
        let heading = format!("{name} split at {}", split_time.to_rfc3339());
        write!(writer, "{}", format_events(&heading, &events))?;
    }
    Ok(())
}

/// Merges all albums into one event and prints it.
pub fn merge<W: Write>(writer: &mut W, albums: &[PathBuf], json: bool) -> Result<()> {
    let groups = albums
        .iter()
        .map(|path| read_album(path))
        .collect::<Result<Vec<_>>>()?;

    let merged = merge_events(&groups).context("failed to merge albums")?;

    if json {
        serde_json::to_writer_pretty(&mut *writer, &merged)?;
        writeln!(writer)?;
    } else {
        let heading = format!("merged {} albums", albums.len());
        let events: Vec<_> = merged.into_iter().collect();
        write!(writer, "{}", format_events(&heading, &events))?;
    }
    Ok(())
}
