//! Manual corrections to automatic clustering.

use chrono::{DateTime, FixedOffset};

use crate::error::DataError;
use crate::event::Event;
use crate::photo::TimedPhoto;
use crate::timeline::extract_timeline;

/// Splits an event's photos at `split_time`.
///
/// Photos captured at or before `split_time` go to the first event, later
/// ones to the second. Each non-empty side is rebuilt from scratch, so the
/// result holds zero, one or two events.
pub fn split_event_at<P: TimedPhoto>(
    photos: &[P],
    split_time: DateTime<FixedOffset>,
) -> Result<Vec<Event>, DataError> {
    let timeline = extract_timeline(photos)?;
    let entries = timeline.entries();
    let boundary = entries.partition_point(|e| e.captured_at <= split_time);
    let (before, after) = entries.split_at(boundary);

    tracing::debug!(
        before = before.len(),
        after = after.len(),
        %split_time,
        "split event"
    );

    Ok([before, after]
        .into_iter()
        .filter_map(Event::from_sorted)
        .collect())
}

/// Merges several photo groups into one event.
///
/// Returns `None` when every group is empty.
pub fn merge_events<P: TimedPhoto>(groups: &[Vec<P>]) -> Result<Option<Event>, DataError> {
    let photos: Vec<&P> = groups.iter().flatten().collect();
    let timeline = extract_timeline(&photos)?;

    tracing::debug!(groups = groups.len(), photos = photos.len(), "merged events");

    Ok(Event::from_sorted(timeline.entries()))
}
