//! Cluster command: groups each album's photos into events.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use moments_core::{Event, assign_events, cluster_photos_by_time, suggest_epsilon};
use rayon::prelude::*;
use serde::Serialize;

use super::render::format_events;
use super::util::{album_name, read_album};
use crate::Config;

/// Output format for clustered albums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
    Assignments,
}

/// Events found in one album.
#[derive(Debug, Serialize)]
pub struct AlbumEvents {
    pub album: String,
    pub epsilon_minutes: f64,
    pub min_points: usize,
    pub events: Vec<Event>,
}

/// Clusters every album and writes the result.
///
/// Albums share nothing, so they are clustered in parallel; output keeps
/// the order the albums were given in.
pub fn run<W: Write>(
    writer: &mut W,
    albums: &[PathBuf],
    config: &Config,
    output: Output,
) -> Result<()> {
    config
        .cluster_options()
        .validate()
        .context("invalid clustering options")?;

    let results = albums
        .par_iter()
        .map(|path| cluster_album(path, config))
        .collect::<Result<Vec<_>>>()?;

    match output {
        Output::Text => {
            for album in &results {
                let heading = format!(
                    "{} (epsilon {}m, min {} photos)",
                    album.album, album.epsilon_minutes, album.min_points
                );
                write!(writer, "{}", format_events(&heading, &album.events))?;
            }
        }
        Output::Json => {
            serde_json::to_writer_pretty(&mut *writer, &results)?;
            writeln!(writer)?;
        }
        Output::Assignments => {
            for album in &results {
                for assignment in assign_events(&album.events) {
                    writeln!(writer, "{}", serde_json::to_string(&assignment)?)?;
                }
            }
        }
    }

    Ok(())
}

/// Clusters one album, picking epsilon from its gaps when configured to.
pub fn cluster_album(path: &Path, config: &Config) -> Result<AlbumEvents> {
    let name = album_name(path);
    let photos = read_album(path)?;

    let mut options = config.cluster_options();
    if config.auto_epsilon {
        let suggested = suggest_epsilon(&photos)
            .with_context(|| format!("failed to suggest epsilon for {name}"))?;
        options.epsilon_minutes = f64::from(suggested);
    }

    let events = cluster_photos_by_time(&photos, &options)
        .with_context(|| format!("failed to cluster {name}"))?;
    tracing::info!(album = %name, photos = photos.len(), events = events.len(), "clustered album");

    Ok(AlbumEvents {
        album: name,
        epsilon_minutes: options.epsilon_minutes,
        min_points: options.min_points,
        events,
    })
}
