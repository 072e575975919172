//! Core trait for supplying pairwise distances to the optimizer.
//!
//! This is intentionally minimal. The optimizer never computes distances
//! itself; it consumes a matrix through this seam so tests can substitute
//! planar or mocked geometries.

use crate::point::Point;

/// Provides a pairwise distance matrix for a set of points.
///
/// The matrix is indexed by the provided point order. Implementations must
/// return an n×n matrix with a zero diagonal; distances are kilometers.
/// Symmetry is expected for geodesic providers but not enforced here.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, points: &[Point]) -> Vec<Vec<f64>>;
}
