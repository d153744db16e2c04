//! The service-facing holder for the currently active tree.
//!
//! Rather than a process-wide tree behind a getter, the current tree is an
//! explicit value: whatever layer owns the [`IndexStore`] decides its
//! lifetime, and tests can run any number of stores side by side.

use crate::coord::GeoCoord;
use crate::error::{GeoKnnError, Result};
use crate::kdtree::KdTree;
use crate::metric::{DistanceMetric, SquaredEuclidean};
use crate::record::{Embedding, PointRecord};

/// Owns the currently active tree, if any.
///
/// [`initialize`][IndexStore::initialize] must run before the first insert
/// or query; running it again discards the previous tree and every record
/// in it. Queries go through [`tree`][IndexStore::tree], whose `None`
/// return is the "not yet initialized" signal callers check.
///
/// All mutation takes `&mut self`, so interleaving inserts with searches
/// from several threads requires an external lock (for example an
/// `RwLock<IndexStore>`, taken as writer around inserts and as reader
/// around searches).
///
/// ```
/// use geo_knn::{GeoCoord, IndexStore, EMBEDDING_DIM};
///
/// let mut store = IndexStore::new();
/// assert!(store.tree().is_none());
///
/// store.initialize();
/// store.insert(10.0, 10.0, [0.0; EMBEDDING_DIM], "a").unwrap();
/// store.insert(20.0, 20.0, [0.0; EMBEDDING_DIM], "b").unwrap();
///
/// let tree = store.tree().expect("initialized above");
/// let results = tree.nearest_n(GeoCoord::new(11.0, 11.0), 1);
/// assert_eq!(results[0].record.identifier(), "a");
/// ```
#[derive(Debug, Default)]
pub struct IndexStore<M: DistanceMetric = SquaredEuclidean> {
    metric: M,
    tree: Option<KdTree<M>>,
}

impl IndexStore<SquaredEuclidean> {
    /// Create a store with no active tree, using squared Euclidean
    /// distance.
    pub fn new() -> Self {
        Self::with_metric(SquaredEuclidean)
    }
}

impl<M: DistanceMetric + Clone> IndexStore<M> {
    /// Create a store with no active tree, using the provided metric for
    /// every tree it initializes.
    pub fn with_metric(metric: M) -> Self {
        Self { metric, tree: None }
    }

    /// Replace the active tree with a fresh empty one.
    ///
    /// The previous tree and all of its records are dropped.
    pub fn initialize(&mut self) {
        self.tree = Some(KdTree::with_metric(self.metric.clone()));
    }

    /// Build a record from the wire fields and insert it into the active
    /// tree.
    ///
    /// Fails with [`GeoKnnError::IdentifierTooLong`] on an oversized
    /// identifier and [`GeoKnnError::Uninitialized`] when no tree is
    /// active.
    pub fn insert(
        &mut self,
        lat: f64,
        lon: f64,
        embedding: Embedding,
        identifier: &str,
    ) -> Result<()> {
        let record = PointRecord::new(GeoCoord::new(lat, lon), embedding, identifier)?;
        let tree = self.tree.as_mut().ok_or(GeoKnnError::Uninitialized)?;
        tree.insert(record);
        Ok(())
    }

    /// The active tree, or `None` before the first
    /// [`initialize`][IndexStore::initialize].
    pub fn tree(&self) -> Option<&KdTree<M>> {
        self.tree.as_ref()
    }
}
