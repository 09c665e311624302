//! Busy-interval indexes.
//!
//! One index exists per resource (a field or a team) for the duration of
//! a scheduling run. An index is a mechanical store-and-query structure:
//! it answers "does anything overlap this interval?" and records new
//! bookings. It does **not** reject overlapping inserts; callers check
//! [`OverlapIndex::overlaps`] before [`OverlapIndex::insert`].
//!
//! # Implementations
//!
//! | Type | Query | Notes |
//! |------|-------|-------|
//! | [`IntervalIndex`] | O(log n) | `(week, day)` buckets of augmented AVL interval trees |
//! | [`LinearIntervalIndex`] | O(n) | Flat list, the reference semantics |
//!
//! Both must agree exactly on every query: a missed overlap double-books a
//! resource, a spurious one fails a matchup needlessly.

mod linear;
mod tree;

pub use linear::LinearIntervalIndex;

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::models::{DayKey, Interval};
use tree::IntervalTree;

/// A per-resource set of busy intervals.
pub trait OverlapIndex: Default + Debug {
    /// Whether any stored interval overlaps `candidate`.
    fn overlaps(&self, candidate: &Interval) -> bool;

    /// Adds an interval without checking for overlap.
    fn insert(&mut self, interval: Interval);

    /// Stored intervals overlapping `candidate`.
    fn find_overlapping(&self, candidate: &Interval) -> Vec<Interval>;

    /// Number of stored intervals.
    fn len(&self) -> usize;

    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Interval index keyed by `(week, day)`, then by an augmented interval tree.
///
/// # Example
///
/// ```
/// use u_fixture::index::{IntervalIndex, OverlapIndex};
/// use u_fixture::models::Interval;
///
/// let mut field = IntervalIndex::new();
/// field.insert(Interval::new(1, 1, 9.0, 11.0));
///
/// assert!(field.overlaps(&Interval::new(1, 1, 10.0, 12.0)));
/// assert!(!field.overlaps(&Interval::new(1, 1, 11.0, 13.0)));
/// assert!(!field.overlaps(&Interval::new(1, 2, 9.0, 11.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct IntervalIndex {
    days: BTreeMap<DayKey, IntervalTree>,
}

impl IntervalIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }
}

impl OverlapIndex for IntervalIndex {
    fn overlaps(&self, candidate: &Interval) -> bool {
        self.days
            .get(&candidate.day_key())
            .is_some_and(|tree| tree.any_overlap(candidate.start, candidate.end))
    }

    fn insert(&mut self, interval: Interval) {
        self.days
            .entry(interval.day_key())
            .or_default()
            .insert(interval.start, interval.end);
    }

    fn find_overlapping(&self, candidate: &Interval) -> Vec<Interval> {
        let Some(tree) = self.days.get(&candidate.day_key()) else {
            return Vec::new();
        };
        let mut ranges = Vec::new();
        tree.collect_overlapping(candidate.start, candidate.end, &mut ranges);
        ranges
            .into_iter()
            .map(|(start, end)| Interval::new(candidate.week, candidate.day, start, end))
            .collect()
    }

    fn len(&self) -> usize {
        self.days.values().map(IntervalTree::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_index() {
        let idx = IntervalIndex::new();
        assert!(idx.is_empty());
        assert!(!idx.overlaps(&Interval::new(1, 1, 9.0, 11.0)));
        assert!(idx.find_overlapping(&Interval::new(1, 1, 9.0, 11.0)).is_empty());
    }

    #[test]
    fn test_buckets_are_separate() {
        let mut idx = IntervalIndex::new();
        idx.insert(Interval::new(1, 1, 9.0, 11.0));
        idx.insert(Interval::new(1, 2, 9.0, 11.0));
        idx.insert(Interval::new(2, 1, 9.0, 11.0));

        assert_eq!(idx.len(), 3);
        assert_eq!(idx.days.len(), 3);
        assert_eq!(idx.find_overlapping(&Interval::new(1, 1, 8.0, 18.0)).len(), 1);
        assert!(!idx.overlaps(&Interval::new(1, 3, 9.0, 11.0)));
        assert!(idx.overlaps(&Interval::new(2, 1, 10.0, 10.5)));
    }

    #[test]
    fn test_insert_does_not_reject_overlap() {
        let mut idx = IntervalIndex::new();
        idx.insert(Interval::new(1, 1, 9.0, 11.0));
        idx.insert(Interval::new(1, 1, 10.0, 12.0));
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.find_overlapping(&Interval::new(1, 1, 8.0, 18.0)).len(), 2);
    }

    #[test]
    fn test_find_overlapping() {
        let mut idx = IntervalIndex::new();
        idx.insert(Interval::new(4, 6, 9.0, 11.0));
        idx.insert(Interval::new(4, 6, 14.0, 16.0));
        idx.insert(Interval::new(4, 7, 9.0, 11.0));

        let hits = idx.find_overlapping(&Interval::new(4, 6, 10.0, 15.0));
        assert_eq!(
            hits,
            vec![
                Interval::new(4, 6, 9.0, 11.0),
                Interval::new(4, 6, 14.0, 16.0)
            ]
        );
    }

    #[test]
    fn test_query_is_pure() {
        let mut idx = IntervalIndex::new();
        idx.insert(Interval::new(1, 1, 9.0, 11.0));
        let probe = Interval::new(5, 5, 9.0, 11.0);
        assert!(!idx.overlaps(&probe));
        assert_eq!(idx.days.len(), 1);
        assert_eq!(idx.len(), 1);
    }
}
