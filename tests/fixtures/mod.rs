//! Test fixtures for tour-planner.
//!
//! Provides realistic test data: real Hanoi landmarks (from
//! OpenStreetMap) for exercising the optimizer on genuine coordinates.

pub mod hanoi_locations;

pub use hanoi_locations::*;
