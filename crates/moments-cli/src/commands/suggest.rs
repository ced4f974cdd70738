//! Suggest-epsilon command.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use moments_core::suggest_epsilon;

use super::util::{album_name, read_album};

/// Prints the suggested epsilon, in minutes, for an album.
pub fn run<W: Write>(writer: &mut W, album: &Path) -> Result<()> {
    let photos = read_album(album)?;
    let minutes = suggest_epsilon(&photos)
        .with_context(|| format!("failed to suggest epsilon for {}", album_name(album)))?;

    writeln!(writer, "{minutes}")?;
    Ok(())
}
