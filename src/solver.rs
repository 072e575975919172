//! Exact tour optimizer (Held-Karp subset DP).
//!
//! Finds the minimum-distance closed tour over a small set of stops,
//! starting and ending at the first stop. Exact, not heuristic: the DP
//! explores every subset of stops, so input size is capped at
//! [`MAX_STOPS`] and larger inputs are rejected up front.

use serde::Serialize;
use tracing::debug;

use crate::error::OptimizeError;
use crate::point::Point;
use crate::traits::DistanceMatrixProvider;

/// Largest number of stops accepted by [`optimize`].
///
/// The DP tables hold 2^n · n entries, so 20 stops tops out around
/// twenty million cells per table. Anything past that belongs to an
/// approximate solver, not this one.
pub const MAX_STOPS: usize = 20;

/// An optimized tour.
///
/// `stops` lists every input point exactly once, anchor (input index 0)
/// first, in optimal visiting order. The return leg back to the anchor is
/// counted in `total_distance_km` but the anchor is not repeated at the
/// tail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourResult {
    pub stops: Vec<Point>,
    pub total_distance_km: f64,
}

/// Computes the minimum-distance closed tour over `points`.
///
/// The point at index 0 is the fixed start/return anchor; the remaining
/// points are reordered freely. Distances come from `provider`, queried
/// once per call for the full pairwise matrix.
///
/// Runs in O(n² · 2ⁿ) time and O(n · 2ⁿ) space, which is why inputs
/// beyond [`MAX_STOPS`] are rejected before any table is allocated.
/// Validation also rejects out-of-range coordinates; past validation the
/// computation cannot fail.
pub fn optimize<M>(points: &[Point], provider: &M) -> Result<TourResult, OptimizeError>
where
    M: DistanceMatrixProvider,
{
    validate(points)?;

    let n = points.len();
    if n <= 1 {
        return Ok(TourResult {
            stops: points.to_vec(),
            total_distance_km: 0.0,
        });
    }

    debug!(stops = n, "optimizing tour");

    let matrix = provider.matrix_for(points);
    let (order, total) = held_karp(n, &matrix);

    debug!(total_distance_km = total, "tour optimized");

    Ok(TourResult {
        stops: order.into_iter().map(|i| points[i].clone()).collect(),
        total_distance_km: total,
    })
}

fn validate(points: &[Point]) -> Result<(), OptimizeError> {
    if points.len() > MAX_STOPS {
        return Err(OptimizeError::TooManyStops {
            count: points.len(),
            max: MAX_STOPS,
        });
    }

    for point in points {
        if !point.in_range() {
            return Err(OptimizeError::InvalidCoordinate {
                name: point.name.clone(),
                lat: point.lat,
                lng: point.lng,
            });
        }
    }

    Ok(())
}

/// Held-Karp DP over subsets. Requires n >= 2 and an n×n matrix.
///
/// Returns the optimal visiting order (anchor index 0 first, no repeat at
/// the tail) and the closed-tour cost including the return leg.
fn held_karp(n: usize, matrix: &[Vec<f64>]) -> (Vec<usize>, f64) {
    let full = (1usize << n) - 1;

    // cost[mask][u]: cheapest way to start at 0, visit exactly the stops
    // in mask, and stand at u. prev records the endpoint before u on that
    // cheapest way, usize::MAX meaning none.
    let mut cost = vec![vec![f64::INFINITY; n]; 1 << n];
    let mut prev = vec![vec![usize::MAX; n]; 1 << n];
    cost[1][0] = 0.0;

    // Ascending mask order visits every subset after all its subsets.
    for mask in 1..=full {
        for u in 0..n {
            if mask & (1 << u) == 0 {
                continue;
            }
            let base = cost[mask][u];
            if base.is_infinite() {
                continue;
            }
            for v in 0..n {
                if mask & (1 << v) != 0 {
                    continue;
                }
                let next = mask | (1 << v);
                let candidate = base + matrix[u][v];
                // First strictly-better candidate wins; ties keep the
                // earlier entry.
                if candidate < cost[next][v] {
                    cost[next][v] = candidate;
                    prev[next][v] = u;
                }
            }
        }
    }

    // Close the loop: best full tour ends at the stop whose return leg to
    // the anchor is cheapest on top of its path cost.
    let mut best = f64::INFINITY;
    let mut last = 0;
    for i in 1..n {
        let candidate = cost[full][i] + matrix[i][0];
        if candidate < best {
            best = candidate;
            last = i;
        }
    }

    // Walk predecessors backward from the last stop to the anchor.
    let mut order = Vec::with_capacity(n);
    let mut mask = full;
    let mut at = last;
    while at != usize::MAX {
        order.push(at);
        let before = prev[mask][at];
        mask ^= 1 << at;
        at = before;
    }
    order.reverse();

    (order, best)
}
