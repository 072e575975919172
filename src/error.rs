//! Error taxonomy for the optimizer boundary.
//!
//! Both error kinds are detected synchronously at call entry, before any
//! DP table is allocated. The computation itself is total: once input
//! passes validation there is nothing left to fail.

use thiserror::Error;

/// Errors reported by [`optimize`](crate::solver::optimize).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptimizeError {
    /// A point carries a coordinate outside valid geographic range.
    #[error("stop '{name}' has out-of-range coordinates ({lat}, {lng})")]
    InvalidCoordinate { name: String, lat: f64, lng: f64 },

    /// Too many stops for exact subset DP. Callers that need larger tours
    /// should fall back to an approximate heuristic before calling in.
    #[error("too many stops to optimize exactly: {count} exceeds the limit of {max}")]
    TooManyStops { count: usize, max: usize },
}
