//! Planar coordinates and the minimum pairwise distance.

use std::fmt;

/// A test point position in board units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// X position.
    pub x: f64,
    /// Y position.
    pub y: f64,
}

impl Coordinate {
    /// Creates a coordinate.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another coordinate.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Outcome of the minimum distance calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClearanceResult {
    /// Fewer than two test points, so no pair exists.
    Undefined,
    /// Smallest distance between any two test points.
    Distance(f64),
}

impl ClearanceResult {
    /// Returns the distance, or `None` if undefined.
    #[must_use]
    pub const fn distance(&self) -> Option<f64> {
        match self {
            Self::Undefined => None,
            Self::Distance(d) => Some(*d),
        }
    }
}

/// Returns the minimum distance over all unordered pairs of points.
///
/// Every pair is compared; point counts on real boards are small enough that
/// no spatial index is needed.
#[must_use]
pub fn min_distance(points: &[Coordinate]) -> ClearanceResult {
    let mut min: Option<f64> = None;

    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            let d = a.distance_to(b);
            min = Some(min.map_or(d, |m| m.min(d)));
        }
    }

    min.map_or(ClearanceResult::Undefined, ClearanceResult::Distance)
}
