//! Chronological ordering and 1-D temporal projection of a photo set.

use chrono::{DateTime, FixedOffset};

use crate::error::DataError;
use crate::photo::{TimedPhoto, parse_capture_time};

/// A photo paired with its parsed capture time.
#[derive(Debug)]
pub struct TimelineEntry<'a, P> {
    pub photo: &'a P,
    pub captured_at: DateTime<FixedOffset>,
}

impl<P> Clone for TimelineEntry<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for TimelineEntry<'_, P> {}

/// Photos in capture order, plus minutes elapsed since the earliest one.
///
/// `projection[i]` belongs to `entries[i]`, so it is non-decreasing.
#[derive(Debug)]
pub struct Timeline<'a, P> {
    entries: Vec<TimelineEntry<'a, P>>,
    projection: Vec<f64>,
}

impl<'a, P> Timeline<'a, P> {
    pub fn entries(&self) -> &[TimelineEntry<'a, P>] {
        &self.entries
    }

    pub fn projection(&self) -> &[f64] {
        &self.projection
    }
}

/// Sorts photos by capture time and projects them onto a minutes axis.
///
/// The sort is stable: photos with equal timestamps keep their input order.
/// Every photo must carry a parsable timestamp; nothing is defaulted or dropped.
pub fn extract_timeline<P: TimedPhoto>(photos: &[P]) -> Result<Timeline<'_, P>, DataError> {
    let mut entries = photos
        .iter()
        .map(|photo| -> Result<_, DataError> {
            Ok(TimelineEntry {
                photo,
                captured_at: capture_time(photo)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    entries.sort_by_key(|e| e.captured_at);

    let projection = entries.first().map_or_else(Vec::new, |first| {
        entries
            .iter()
            .map(|e| minutes_between(first.captured_at, e.captured_at))
            .collect()
    });

    Ok(Timeline {
        entries,
        projection,
    })
}

/// Parses a photo's capture time, naming the photo on failure.
pub fn capture_time<P: TimedPhoto>(photo: &P) -> Result<DateTime<FixedOffset>, DataError> {
    let raw = photo
        .captured_at()
        .filter(|raw| !raw.trim().is_empty())
        .ok_or_else(|| DataError::MissingTimestamp {
            photo_id: photo.photo_id().clone(),
        })?;

    parse_capture_time(raw).ok_or_else(|| DataError::InvalidTimestamp {
        photo_id: photo.photo_id().clone(),
        value: raw.to_string(),
    })
}

#[allow(clippy::cast_precision_loss)]
fn minutes_between(from: DateTime<FixedOffset>, to: DateTime<FixedOffset>) -> f64 {
    (to - from).num_milliseconds() as f64 / 60_000.0
}
