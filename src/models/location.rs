//! Planar locations.

use serde::{Deserialize, Serialize};

/// A location in the plane.
///
/// Location 0 is conventionally the depot. Coordinates are only needed to
/// derive a distance matrix and to draw the problem; the solver itself works
/// on node indices.
///
/// # Examples
///
/// ```
/// use vrp_plot::models::Location;
///
/// let depot = Location::new(0, 456.0, 320.0);
/// let stop = Location::new(1, 228.0, 0.0);
/// assert_eq!(depot.manhattan_to(&stop), 548.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    id: usize,
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a new location.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Node index of this location.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Coordinates as a tuple.
    pub fn coords(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Taxicab distance: `|x1 - x2| + |y1 - y2|`.
    pub fn manhattan_to(&self, other: &Location) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Euclidean distance to another location.
    pub fn euclidean_to(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
