//! Haversine distance metric and matrix provider.
//!
//! Great-circle distance over a spherical Earth. Ignores roads and
//! terrain, but it is symmetric, deterministic, and always available,
//! which is all the exact optimizer needs.

use crate::point::Point;
use crate::traits::DistanceMatrixProvider;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers.
///
/// Standard haversine formula. `a` is clamped to [0, 1] before the square
/// roots: floating-point rounding can push it a hair outside for identical
/// or near-antipodal points, and the clamp guarantees identical points
/// yield exactly 0. Coordinates are not range-checked here; that happens
/// at the optimizer boundary.
pub fn haversine_km(from: &Point, to: &Point) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let a = a.clamp(0.0, 1.0);

    2.0 * EARTH_RADIUS_KM * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Haversine-based distance matrix provider.
///
/// Fills the full symmetric n×n matrix, computing each unordered pair
/// once. This is the production provider; tests substitute planar mocks
/// through the same trait.
#[derive(Debug, Clone, Default)]
pub struct HaversineMatrix;

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, points: &[Point]) -> Vec<Vec<f64>> {
        let n = points.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in (i + 1)..n {
                let km = haversine_km(&points[i], &points[j]);
                matrix[i][j] = km;
                matrix[j][i] = km;
            }
        }

        matrix
    }
}
