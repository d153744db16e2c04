//! Bounded collection of the best candidates seen during a search.

use std::collections::BinaryHeap;

use crate::record::PointRecord;

/// One search result: a stored record and its distance from the query.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Distance from the query coordinate, under the tree's metric.
    pub distance: f64,
    /// The matched record.
    pub record: PointRecord,
}

/// A max-heap of the `n` best candidates seen so far.
///
/// Keeping the current worst candidate on top makes both the eviction
/// target and the pruning bound available in O(1), with O(log n) updates.
pub(crate) struct NeighborCollector<'a> {
    capacity: usize,
    heap: BinaryHeap<Candidate<'a>>,
}

/// A candidate ordered by distance for use in the max-heap.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate<'a> {
    distance: f64,
    record: &'a PointRecord,
}

impl Eq for Candidate<'_> {}

impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // We don't allow NaN. This should only panic on NaN
        self.distance.partial_cmp(&other.distance).unwrap()
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> NeighborCollector<'a> {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity + 1),
        }
    }

    /// Keep `record` if the collector is below capacity or `distance` beats
    /// the current worst kept candidate, evicting that worst entry.
    pub(crate) fn offer(&mut self, distance: f64, record: &'a PointRecord) {
        if self.heap.len() < self.capacity {
            self.heap.push(Candidate { distance, record });
        } else if distance < self.worst() {
            self.heap.pop();
            self.heap.push(Candidate { distance, record });
        }
    }

    /// The largest kept distance, or infinity while below capacity.
    ///
    /// A subtree farther from the query than this cannot contribute.
    pub(crate) fn worst(&self) -> f64 {
        if self.heap.len() < self.capacity {
            f64::INFINITY
        } else {
            self.heap.peek().map(|c| c.distance).unwrap_or(f64::INFINITY)
        }
    }

    /// Consume the collector, returning owned results in ascending distance
    /// order.
    pub(crate) fn into_sorted(self) -> Vec<Neighbor> {
        self.heap
            .into_sorted_vec()
            .into_iter()
            .map(|c| Neighbor {
                distance: c.distance,
                record: c.record.clone(),
            })
            .collect()
    }
}
