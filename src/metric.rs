//! Distance metrics for nearest-neighbor queries.
//!
//! A metric supplies everything the tree needs from coordinate space: the
//! distance between two coordinates, the distance from a coordinate to a
//! splitting plane, and the per-axis ordering used to place points during
//! insertion.

#![warn(missing_docs)]

use std::cmp::Ordering;

use crate::coord::{Axis, GeoCoord};

/// A strategy pairing a distance function with a per-axis comparator.
///
/// One metric is fixed at tree construction and used for every insert and
/// query against that tree. Search pruning is exact only when
/// [`axis_dist`][DistanceMetric::axis_dist] never exceeds
/// [`dist`][DistanceMetric::dist] to any point on the far side of the
/// splitting plane; an implementor that violates this will silently drop
/// valid results rather than fail.
pub trait DistanceMetric {
    /// The distance between two coordinates.
    fn dist(&self, a: GeoCoord, b: GeoCoord) -> f64;

    /// The distance from `point` to the splitting plane passing through
    /// `origin` perpendicular to `axis`, in the same scale as
    /// [`dist`][DistanceMetric::dist].
    fn axis_dist(&self, point: GeoCoord, origin: GeoCoord, axis: Axis) -> f64;

    /// Ordering of `a` relative to `b` along `axis`.
    ///
    /// The default compares raw coordinate values, which is correct for any
    /// metric that is monotone along each axis.
    fn cmp(&self, a: GeoCoord, b: GeoCoord, axis: Axis) -> Ordering {
        // We don't allow NaN. This should only panic on NaN
        a.get(axis).partial_cmp(&b.get(axis)).unwrap()
    }
}

/// Squared Euclidean distance over raw latitude/longitude values.
///
/// The default metric. Squaring preserves the ordering of true Euclidean
/// distances while skipping the square root, so nearest-neighbor results
/// are identical to [`Euclidean`] and cheaper to compute. Distances it
/// reports are in squared degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredEuclidean;

impl DistanceMetric for SquaredEuclidean {
    #[inline]
    fn dist(&self, a: GeoCoord, b: GeoCoord) -> f64 {
        let d_lat = a.lat - b.lat;
        let d_lon = a.lon - b.lon;
        d_lat * d_lat + d_lon * d_lon
    }

    #[inline]
    fn axis_dist(&self, point: GeoCoord, origin: GeoCoord, axis: Axis) -> f64 {
        let d = point.get(axis) - origin.get(axis);
        d * d
    }
}

/// Euclidean distance over raw latitude/longitude values, in degrees.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl DistanceMetric for Euclidean {
    #[inline]
    fn dist(&self, a: GeoCoord, b: GeoCoord) -> f64 {
        SquaredEuclidean.dist(a, b).sqrt()
    }

    #[inline]
    fn axis_dist(&self, point: GeoCoord, origin: GeoCoord, axis: Axis) -> f64 {
        (point.get(axis) - origin.get(axis)).abs()
    }
}
