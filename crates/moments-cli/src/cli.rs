//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Photo event clustering.
///
/// Groups photos into events (ceremony, dinner, party, ...) by how densely
/// they were taken in time, and names each event.
#[derive(Debug, Parser)]
#[command(name = "moments", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Cluster each album into events.
    ///
    /// An album is a JSON array or JSONL file of photo records; `-` reads stdin.
    /// Albums are processed independently and in parallel.
    Cluster {
        #[arg(required = true)]
        albums: Vec<PathBuf>,

        /// Largest gap in minutes between photos of one event.
        #[arg(long)]
        epsilon: Option<f64>,

        /// Smallest number of photos that makes an event.
        #[arg(long)]
        min_points: Option<usize>,

        /// Pick epsilon per album from its gap distribution.
        #[arg(long)]
        auto_epsilon: bool,

        /// Output events as JSON.
        #[arg(long, conflicts_with = "assignments")]
        json: bool,

        /// Output photo-to-event assignments as JSONL.
        #[arg(long)]
        assignments: bool,
    },

    /// Suggest an epsilon for an album.
    SuggestEpsilon { album: PathBuf },

    /// Split an album's photos into the part up to a time and the part after.
    Split {
        album: PathBuf,

        /// Split time (ISO 8601, e.g. 2024-06-15T14:30:00Z).
        #[arg(long)]
        at: String,

        /// Output events as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Merge several albums into a single event.
    Merge {
        #[arg(required = true)]
        albums: Vec<PathBuf>,

        /// Output the event as JSON.
        #[arg(long)]
        json: bool,
    },
}
