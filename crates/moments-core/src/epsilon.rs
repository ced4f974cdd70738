//! Epsilon suggestion from the distribution of gaps between photos.
//!
//! The 75th-percentile gap is long enough that ordinary pauses inside an
//! event stay below it, and short enough that the breaks between events
//! usually sit above it.

use crate::error::DataError;
use crate::photo::TimedPhoto;
use crate::timeline::extract_timeline;

/// Returned when there are fewer than two photos to measure a gap.
pub const DEFAULT_EPSILON_MINUTES: u32 = 60;

pub const MIN_EPSILON_MINUTES: u32 = 30;

pub const MAX_EPSILON_MINUTES: u32 = 180;

const GAP_PERCENTILE: f64 = 0.75;

/// Recommends an epsilon (in minutes) for [`cluster_photos_by_time`](crate::cluster_photos_by_time).
///
/// Gaps are measured in whole minutes between consecutive photos. The value
/// at index `floor(0.75 * gaps)` of the sorted gaps is clamped to
/// \[[`MIN_EPSILON_MINUTES`], [`MAX_EPSILON_MINUTES`]\].
pub fn suggest_epsilon<P: TimedPhoto>(photos: &[P]) -> Result<u32, DataError> {
    let timeline = extract_timeline(photos)?;
    if timeline.entries().len() < 2 {
        return Ok(DEFAULT_EPSILON_MINUTES);
    }

    let mut gaps: Vec<i64> = timeline
        .entries()
        .windows(2)
        .map(|pair| (pair[1].captured_at - pair[0].captured_at).num_minutes())
        .collect();
    gaps.sort_unstable();

    let gap = gaps[percentile_index(gaps.len())];
    let suggested = gap.clamp(
        i64::from(MIN_EPSILON_MINUTES),
        i64::from(MAX_EPSILON_MINUTES),
    );
    tracing::debug!(gaps = gaps.len(), gap, suggested, "suggested epsilon");

    // Clamped into [30, 180] above.
    Ok(u32::try_from(suggested).unwrap_or(DEFAULT_EPSILON_MINUTES))
}

#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn percentile_index(count: usize) -> usize {
    let index = (count as f64 * GAP_PERCENTILE).floor() as usize;
    index.min(count - 1)
}
