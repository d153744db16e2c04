use std::cmp::Ordering;

use geo_traits::CoordTrait;

use crate::coord::{Axis, GeoCoord};
use crate::kdtree::collector::{Neighbor, NeighborCollector};
use crate::kdtree::node::Node;
use crate::metric::{DistanceMetric, SquaredEuclidean};
use crate::record::PointRecord;

/// A point-at-a-time k-d tree over geographic coordinates.
///
/// Points are placed by comparing one axis per level, latitude at even
/// depths and longitude at odd depths. The tree never rebalances: lookup
/// cost depends on insertion order, and adversarial (e.g. sorted) input
/// degrades search toward a linear scan. The intended workload is a
/// bulk-insert phase followed by reads, where this is not a concern.
#[derive(Debug, Clone)]
pub struct KdTree<M: DistanceMetric = SquaredEuclidean> {
    pub(crate) root: Option<Box<Node>>,
    len: usize,
    metric: M,
}

impl KdTree<SquaredEuclidean> {
    /// Create an empty tree using squared Euclidean distance.
    pub fn new() -> Self {
        Self::with_metric(SquaredEuclidean)
    }
}

impl Default for KdTree<SquaredEuclidean> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: DistanceMetric> KdTree<M> {
    /// Create an empty tree using the provided metric.
    ///
    /// The metric is fixed for the tree's lifetime; the partition layout
    /// built by inserts only answers queries correctly under the same
    /// ordering it was built with.
    pub fn with_metric(metric: M) -> Self {
        Self {
            root: None,
            len: 0,
            metric,
        }
    }

    /// The number of records in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no records.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a record as a new leaf.
    ///
    /// Records equal to an existing node on the splitting axis descend
    /// left, so every subtree satisfies left <= node <= right on its axis
    /// and duplicate coordinates are retained. Existing nodes are never
    /// moved.
    pub fn insert(&mut self, record: PointRecord) {
        let Self { root, metric, len } = self;
        let mut slot = root;
        let mut axis = Axis::Lat;
        while let Some(node) = slot {
            slot = match metric.cmp(record.coord(), node.record.coord(), axis) {
                Ordering::Greater => &mut node.right,
                _ => &mut node.left,
            };
            axis = axis.next();
        }
        *slot = Some(Box::new(Node::new(record)));
        *len += 1;
    }

    /// Collect the `n` records nearest to `query`, closest first.
    ///
    /// Returns fewer than `n` results when the tree holds fewer records,
    /// and an empty vector for an empty tree. The returned buffer is owned
    /// by the caller; dropping it releases it.
    ///
    /// ```
    /// use geo_knn::{GeoCoord, KdTree, PointRecord, EMBEDDING_DIM};
    ///
    /// let mut tree = KdTree::new();
    /// for (lat, lon, id) in [(10.0, 10.0, "a"), (20.0, 20.0, "b"), (3.0, 5.0, "c")] {
    ///     let record = PointRecord::new(GeoCoord::new(lat, lon), [0.0; EMBEDDING_DIM], id).unwrap();
    ///     tree.insert(record);
    /// }
    ///
    /// let results = tree.nearest_n(GeoCoord::new(9.0, 11.0), 2);
    /// assert_eq!(results.len(), 2);
    /// assert_eq!(results[0].record.identifier(), "a");
    /// assert_eq!(results[1].record.identifier(), "c");
    /// ```
    pub fn nearest_n(&self, query: GeoCoord, n: usize) -> Vec<Neighbor> {
        if n == 0 {
            return Vec::new();
        }
        let mut collector = NeighborCollector::new(n);
        if let Some(root) = &self.root {
            self.search(root, query, Axis::Lat, &mut collector);
        }
        collector.into_sorted()
    }

    /// Like [`nearest_n`][KdTree::nearest_n], with the query given as any
    /// [`CoordTrait`] implementor (`x` is longitude, `y` is latitude).
    pub fn nearest_n_coord(&self, coord: &impl CoordTrait<T = f64>, n: usize) -> Vec<Neighbor> {
        self.nearest_n(GeoCoord::from_coord(coord), n)
    }

    fn search<'a>(
        &'a self,
        node: &'a Node,
        query: GeoCoord,
        axis: Axis,
        collector: &mut NeighborCollector<'a>,
    ) {
        collector.offer(self.metric.dist(query, node.record.coord()), &node.record);

        // The child on the query's side of the splitting plane is searched
        // first so the pruning bound tightens as early as possible.
        let (near, far) = match self.metric.cmp(query, node.record.coord(), axis) {
            Ordering::Less => (&node.left, &node.right),
            _ => (&node.right, &node.left),
        };

        if let Some(near) = near {
            self.search(near, query, axis.next(), collector);
        }

        // The far subtree can only hold a closer record when the splitting
        // plane itself is closer than the worst kept candidate.
        if let Some(far) = far {
            if self.metric.axis_dist(query, node.record.coord(), axis) < collector.worst() {
                self.search(far, query, axis.next(), collector);
            }
        }
    }
}
