//! Temporal photo-event clustering.
//!
//! This crate contains the logic for:
//! - Timeline extraction: ordering photos and projecting them onto minutes
//! - Clustering: density-based grouping of photos into events
//! - Classification: naming events from their duration, density and hour
//! - Editing: splitting and merging events by hand
//!
//! Everything here is a pure function over borrowed input. Nothing is cached
//! between calls, so independent albums can be processed concurrently.

pub mod classify;
mod cluster;
mod edit;
pub mod epsilon;
mod error;
mod event;
pub mod event_type;
mod photo;
pub mod timeline;
pub mod types;

pub use cluster::{Cluster, ClusterOptions, cluster_photos_by_time, density_clusters};
pub use edit::{merge_events, split_event_at};
pub use epsilon::suggest_epsilon;
pub use error::{ConfigurationError, DataError, Error};
pub use event::{DeviceCount, Event, EventAssignment, assign_events, tally_devices};
pub use event_type::{EventType, UnknownEventType};
pub use photo::{Photo, TimedPhoto, parse_capture_time};
pub use types::{Confidence, EventId, PhotoId, ValidationError};
