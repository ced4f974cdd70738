//! Event records built from clusters of photos.

use chrono::{DateTime, Duration, FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::classify::{ClusterProfile, classify};
use crate::event_type::EventType;
use crate::photo::TimedPhoto;
use crate::timeline::TimelineEntry;
use crate::types::{Confidence, EventId, PhotoId};

/// Lower bound on the density denominator, so short bursts don't divide by zero.
const MIN_DENSITY_HOURS: f64 = 0.1;

/// A classified group of photos taken close together in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,

    /// Capture time of the first photo.
    pub start_time: DateTime<FixedOffset>,

    /// Capture time of the last photo.
    pub end_time: DateTime<FixedOffset>,

    pub photo_count: usize,

    /// Photo IDs in capture order.
    pub photo_ids: Vec<PhotoId>,

    /// Minutes from first to last photo, fractions kept.
    pub duration_minutes: f64,

    /// Photos per hour.
    pub photo_density: f64,

    pub devices: Vec<DeviceCount>,

    pub event_type: EventType,

    /// Hex display color for `event_type`.
    pub color: String,

    pub confidence: Confidence,
}

/// Number of photos taken with one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCount {
    pub model: String,
    pub count: usize,
}

/// Links a photo to the event it was placed in.
///
/// Writing these back onto photo records is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAssignment {
    pub photo_id: PhotoId,
    pub event_id: EventId,
}

impl Event {
    /// Builds an event from photos already sorted by capture time.
    ///
    /// Returns `None` for an empty slice. Every derived field (duration,
    /// density, devices, classification) is computed here, so clustering,
    /// splitting and merging all produce identical records for identical photos.
    pub fn from_sorted<P: TimedPhoto>(entries: &[TimelineEntry<'_, P>]) -> Option<Self> {
        let first = entries.first()?;
        let last = entries.last()?;

        let start_time = first.captured_at;
        let end_time = last.captured_at;
        let duration_minutes = span_minutes(end_time - start_time);
        let photo_density = photo_density(entries.len(), duration_minutes);

        let classification = classify(&ClusterProfile {
            duration_minutes,
            photo_density,
            start_hour: start_time.hour(),
        });

        Some(Self {
            name: classification.name,
            start_time,
            end_time,
            photo_count: entries.len(),
            photo_ids: entries
                .iter()
                .map(|e| e.photo.photo_id().clone())
                .collect(),
            duration_minutes,
            photo_density,
            devices: tally_devices(entries.iter().map(|e| e.photo)),
            event_type: classification.event_type,
            color: classification.event_type.color().to_string(),
            confidence: classification.confidence,
        })
    }
}

/// Length of a span in minutes, to the millisecond.
#[allow(clippy::cast_precision_loss)]
fn span_minutes(span: Duration) -> f64 {
    span.num_milliseconds() as f64 / 60_000.0
}

/// Photos per hour, with the span floored at [`MIN_DENSITY_HOURS`].
#[allow(clippy::cast_precision_loss)]
fn photo_density(photo_count: usize, duration_minutes: f64) -> f64 {
    let hours = (duration_minutes / 60.0).max(MIN_DENSITY_HOURS);
    photo_count as f64 / hours
}

/// Counts photos per device, keyed `"{make} {model}"` or just the model.
///
/// Photos without a model are not counted. Order is first occurrence.
pub fn tally_devices<'a, P: TimedPhoto + 'a>(
    photos: impl IntoIterator<Item = &'a P>,
) -> Vec<DeviceCount> {
    let mut devices: Vec<DeviceCount> = Vec::new();

    for photo in photos {
        let Some(model) = photo.device_model() else {
            continue;
        };
        let key = match photo.device_make() {
            Some(make) => format!("{make} {model}"),
            None => model.to_string(),
        };

        match devices.iter_mut().find(|d| d.model == key) {
            Some(device) => device.count += 1,
            None => devices.push(DeviceCount {
                model: key,
                count: 1,
            }),
        }
    }

    devices
}

/// Gives each event a fresh ID and pairs it with every photo it contains.
pub fn assign_events(events: &[Event]) -> Vec<EventAssignment> {
    events
        .iter()
        .flat_map(|event| {
            let event_id = EventId::generate();
            event.photo_ids.iter().map(move |photo_id| EventAssignment {
                photo_id: photo_id.clone(),
                event_id: event_id.clone(),
            })
        })
        .collect()
}
