//! Flat-list interval index.

use super::OverlapIndex;
use crate::models::Interval;

/// Interval index that scans every stored interval on each query.
///
/// Adequate for small cases and the reference the tree index is checked
/// against.
#[derive(Debug, Clone, Default)]
pub struct LinearIntervalIndex {
    intervals: Vec<Interval>,
}

impl LinearIntervalIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored intervals in insertion order.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }
}

impl OverlapIndex for LinearIntervalIndex {
    fn overlaps(&self, candidate: &Interval) -> bool {
        self.intervals.iter().any(|i| i.overlaps(candidate))
    }

    fn insert(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    fn find_overlapping(&self, candidate: &Interval) -> Vec<Interval> {
        let mut hits: Vec<Interval> = self
            .intervals
            .iter()
            .filter(|i| i.overlaps(candidate))
            .copied()
            .collect();
        hits.sort_by(|a, b| a.start.total_cmp(&b.start));
        hits
    }

    fn len(&self) -> usize {
        self.intervals.len()
    }
}
