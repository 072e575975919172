//! Waypoint value type.
//!
//! A `Point` is a named geographic coordinate. The name is opaque to the
//! optimizer: it is carried through for display and result identity, never
//! used in computation.

use serde::{Deserialize, Serialize};

/// A named waypoint with latitude/longitude in signed degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Display label, opaque to the optimizer.
    pub name: String,
    /// Latitude in degrees, valid range [-90, 90].
    pub lat: f64,
    /// Longitude in degrees, valid range [-180, 180].
    pub lng: f64,
}

impl Point {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }

    /// Whether both coordinates fall within valid geographic range.
    ///
    /// The distance metric tolerates any finite coordinates; range
    /// validation happens at the optimizer boundary instead.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}
