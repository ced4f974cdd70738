//! Error types surfaced by the clustering pipeline.

use thiserror::Error;

use crate::types::PhotoId;

/// A photo record could not be placed on the timeline.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("photo {photo_id} has no capture timestamp")]
    MissingTimestamp { photo_id: PhotoId },

    #[error("photo {photo_id} has an unparsable capture timestamp: {value:?}")]
    InvalidTimestamp { photo_id: PhotoId, value: String },
}

/// Clustering options were rejected before any work started.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("epsilon must be a positive number of minutes, got {value}")]
    InvalidEpsilon { value: f64 },

    #[error("min_points must be at least 1, got {value}")]
    InvalidMinPoints { value: usize },
}

/// Any failure of [`cluster_photos_by_time`](crate::cluster_photos_by_time).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
