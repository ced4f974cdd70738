//! Photo records as handed over by the photo source.

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::types::PhotoId;

/// Naive timestamp layouts accepted besides RFC 3339. The last one is EXIF `DateTimeOriginal`.
const NAIVE_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y:%m:%d %H:%M:%S",
];

/// A photo that can be placed on a timeline.
///
/// This trait lets clustering work with different photo representations
/// (e.g., deserialized [`Photo`] records, or rows from a caller's store).
pub trait TimedPhoto {
    fn photo_id(&self) -> &PhotoId;

    /// Raw capture timestamp, if the source has one.
    fn captured_at(&self) -> Option<&str>;

    fn device_make(&self) -> Option<&str>;

    fn device_model(&self) -> Option<&str>;
}

/// A photo record from the photo source. Read-only to this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,

    #[serde(default, alias = "capturedAt", skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<String>,

    #[serde(default, alias = "deviceMake", skip_serializing_if = "Option::is_none")]
    pub device_make: Option<String>,

    #[serde(default, alias = "deviceModel", skip_serializing_if = "Option::is_none")]
    pub device_model: Option<String>,
}

impl Photo {
    /// Creates a photo with a capture timestamp and no device information.
    pub fn new(id: PhotoId, captured_at: impl Into<String>) -> Self {
        Self {
            id,
            captured_at: Some(captured_at.into()),
            device_make: None,
            device_model: None,
        }
    }

    #[must_use]
    pub fn with_device(mut self, make: Option<&str>, model: &str) -> Self {
        self.device_make = make.map(String::from);
        self.device_model = Some(model.to_string());
        self
    }
}

impl TimedPhoto for Photo {
    fn photo_id(&self) -> &PhotoId {
        &self.id
    }

    fn captured_at(&self) -> Option<&str> {
        self.captured_at.as_deref()
    }

    fn device_make(&self) -> Option<&str> {
        self.device_make.as_deref()
    }

    fn device_model(&self) -> Option<&str> {
        self.device_model.as_deref()
    }
}

impl<P: TimedPhoto> TimedPhoto for &P {
    fn photo_id(&self) -> &PhotoId {
        (**self).photo_id()
    }

    fn captured_at(&self) -> Option<&str> {
        (**self).captured_at()
    }

    fn device_make(&self) -> Option<&str> {
        (**self).device_make()
    }

    fn device_model(&self) -> Option<&str> {
        (**self).device_model()
    }
}

/// Parses a capture timestamp.
///
/// RFC 3339 keeps its offset so the wall-clock hour stays as recorded.
/// Naive forms carry no zone and are pinned to `+00:00`.
pub fn parse_capture_time(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}
