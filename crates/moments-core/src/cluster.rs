//! Density-based clustering of photos along the time axis.
//!
//! DBSCAN over a single dimension. Because the projection is sorted, the
//! neighbourhood of every point is a contiguous window, so the whole pass is
//! two linear sweeps instead of a pairwise neighbour search:
//!
//! 1. Count neighbours within epsilon with two pointers; points with at
//!    least `min_points` neighbours (themselves included) are cores.
//! 2. Walk the cores in order. A core within epsilon of the previous core
//!    joins its cluster, otherwise it starts a new one.
//! 3. Non-core points join the cluster of the nearest earlier core within
//!    epsilon, else the nearest later core within epsilon, else they are noise.
//! 4. Clusters smaller than `min_points` are dropped.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationError, Error};
use crate::event::Event;
use crate::photo::TimedPhoto;
use crate::timeline::extract_timeline;

/// Indices into a sorted timeline, ascending.
pub type Cluster = Vec<usize>;

/// Parameters for density clustering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterOptions {
    /// Largest gap, in minutes, at which two photos are still neighbours.
    /// Default: 60.
    pub epsilon_minutes: f64,

    /// Neighbours (including the photo itself) a photo needs to seed a
    /// cluster, and the smallest cluster kept. Default: 3.
    pub min_points: usize,
}

impl Default for ClusterOptions {
    fn default() -> Self {
        Self {
            epsilon_minutes: 60.0,
            min_points: 3,
        }
    }
}

impl ClusterOptions {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.epsilon_minutes.is_finite() && self.epsilon_minutes > 0.0) {
            return Err(ConfigurationError::InvalidEpsilon {
                value: self.epsilon_minutes,
            });
        }
        if self.min_points < 1 {
            return Err(ConfigurationError::InvalidMinPoints {
                value: self.min_points,
            });
        }
        Ok(())
    }
}

/// Groups photos into events by capture-time density.
///
/// Photos that fall in no dense cluster are left out of the result. Events
/// are ordered by start time. Options are validated before anything else.
pub fn cluster_photos_by_time<P: TimedPhoto>(
    photos: &[P],
    options: &ClusterOptions,
) -> Result<Vec<Event>, Error> {
    options.validate()?;

    let timeline = extract_timeline(photos)?;
    let clusters = density_clusters(timeline.projection(), options)?;
    let entries = timeline.entries();

    let mut events: Vec<Event> = clusters
        .iter()
        .filter_map(|cluster| {
            let members: Vec<_> = cluster.iter().map(|&i| entries[i]).collect();
            Event::from_sorted(&members)
        })
        .collect();
    events.sort_by_key(|e| e.start_time);

    let clustered: usize = events.iter().map(|e| e.photo_count).sum();
    tracing::debug!(
        photos = photos.len(),
        events = events.len(),
        noise = photos.len() - clustered,
        epsilon_minutes = options.epsilon_minutes,
        min_points = options.min_points,
        "clustered photos by time"
    );

    Ok(events)
}

/// Runs DBSCAN over a sorted 1-D projection.
///
/// `projection` must be non-decreasing. Returned clusters hold indices into
/// it, ascending, and are ordered by their first index.
pub fn density_clusters(
    projection: &[f64],
    options: &ClusterOptions,
) -> Result<Vec<Cluster>, ConfigurationError> {
    options.validate()?;
    if projection.is_empty() {
        return Ok(Vec::new());
    }

    let eps = options.epsilon_minutes;
    let is_core: Vec<bool> = neighbor_counts(projection, eps)
        .into_iter()
        .map(|count| count >= options.min_points)
        .collect();

    let mut labels: Vec<Option<usize>> = vec![None; projection.len()];
    let mut cluster_count = 0;

    // Cores chain into one cluster while consecutive cores are within eps.
    let mut last_core: Option<(usize, usize)> = None;
    for i in (0..projection.len()).filter(|&i| is_core[i]) {
        let label = match last_core {
            Some((prev, label)) if projection[i] - projection[prev] <= eps => label,
            _ => {
                cluster_count += 1;
                cluster_count - 1
            }
        };
        labels[i] = Some(label);
        last_core = Some((i, label));
    }

    let next_core = next_core_indices(&is_core);
    let mut previous_core: Option<usize> = None;
    for i in 0..projection.len() {
        if is_core[i] {
            previous_core = Some(i);
            continue;
        }
        let owner = previous_core
            .filter(|&p| projection[i] - projection[p] <= eps)
            .or_else(|| next_core[i].filter(|&q| projection[q] - projection[i] <= eps));
        let label = owner.and_then(|core| labels[core]);
        labels[i] = label;
    }

    let mut clusters: Vec<Cluster> = vec![Vec::new(); cluster_count];
    for (i, label) in labels.iter().enumerate() {
        if let Some(label) = label {
            clusters[*label].push(i);
        }
    }

    // A border point claimed by an earlier cluster can leave a later one short.
    let formed = clusters.len();
    clusters.retain(|cluster| cluster.len() >= options.min_points);
    if clusters.len() < formed {
        tracing::debug!(
            dropped = formed - clusters.len(),
            "dropped clusters below min_points"
        );
    }

    Ok(clusters)
}

/// Neighbours of each point within `eps`, the point itself included.
fn neighbor_counts(projection: &[f64], eps: f64) -> Vec<usize> {
    let n = projection.len();
    let mut counts = Vec::with_capacity(n);
    let mut lo = 0;
    let mut hi = 0;

    for i in 0..n {
        while projection[i] - projection[lo] > eps {
            lo += 1;
        }
        hi = hi.max(i);
        while hi + 1 < n && projection[hi + 1] - projection[i] <= eps {
            hi += 1;
        }
        counts.push(hi - lo + 1);
    }

    counts
}

/// For each index, the first core strictly after it.
fn next_core_indices(is_core: &[bool]) -> Vec<Option<usize>> {
    let mut next = vec![None; is_core.len()];
    let mut upcoming = None;
    for i in (0..is_core.len()).rev() {
        next[i] = upcoming;
        if is_core[i] {
            upcoming = Some(i);
        }
    }
    next
}
