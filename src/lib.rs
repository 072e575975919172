//! tour-planner core
//!
//! Exact route optimization for small sets of waypoints: Held-Karp
//! dynamic programming over subsets, with great-circle distances.

pub mod error;
pub mod haversine;
pub mod point;
pub mod solver;
pub mod traits;
