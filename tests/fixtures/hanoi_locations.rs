//! Real Hanoi locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. These are real places a day
//! itinerary in the old quarter would actually string together.

use tour_planner::point::Point;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> Point {
        Point::new(self.name, self.lat, self.lng)
    }
}

// ============================================================================
// Central Hanoi landmarks (Hoan Kiem Lake is the usual day-trip anchor)
// ============================================================================

pub const LANDMARKS: &[Location] = &[
    Location::new("Hoan Kiem Lake", 21.0288, 105.8525),
    Location::new("Ho Chi Minh Mausoleum", 21.0367, 105.8345),
    Location::new("Temple of Literature", 21.0293, 105.8354),
    Location::new("One Pillar Pagoda", 21.0359, 105.8337),
    Location::new("Hanoi Opera House", 21.0245, 105.8576),
    Location::new("Long Bien Bridge", 21.0433, 105.8614),
    Location::new("Tran Quoc Pagoda", 21.0481, 105.8366),
    Location::new("St. Joseph's Cathedral", 21.0287, 105.8490),
    Location::new("Dong Xuan Market", 21.0383, 105.8496),
    Location::new("Imperial Citadel of Thang Long", 21.0340, 105.8399),
];

/// The first `n` landmarks as owned points, anchor first.
pub fn landmarks(n: usize) -> Vec<Point> {
    LANDMARKS.iter().take(n).map(Location::point).collect()
}
