//! Integer cell coordinates.

use std::fmt;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::Heading;

/// Cell coordinate in a maze grid.
///
/// `x` grows to the east, `y` grows to the north. A coordinate is only a
/// valid cell when `0 <= x < width` and `0 <= y < height` for the grid it
/// indexes; neighbor arithmetic may step outside that range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCoord {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another coordinate
    #[inline]
    pub fn manhattan_distance(&self, other: &GridCoord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Euclidean distance to another coordinate
    #[inline]
    pub fn euclidean_distance(&self, other: &GridCoord) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// The adjacent coordinate one cell towards `heading`
    #[inline]
    pub fn step(&self, heading: Heading) -> GridCoord {
        *self + heading.offset()
    }

    /// Get the 4 cardinal neighbors (N, E, S, W)
    #[inline]
    pub fn neighbors_4(&self) -> [GridCoord; 4] {
        [
            GridCoord::new(self.x, self.y + 1), // North
            GridCoord::new(self.x + 1, self.y), // East
            GridCoord::new(self.x, self.y - 1), // South
            GridCoord::new(self.x - 1, self.y), // West
        ]
    }

    /// Heading that leads from this cell to an adjacent cell.
    ///
    /// Returns `None` when `other` is not a 4-neighbor.
    pub fn heading_to(&self, other: &GridCoord) -> Option<Heading> {
        let delta = *other - *self;
        Heading::ALL.into_iter().find(|h| h.offset() == delta)
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_neighbors_order() {
        let c = GridCoord::new(5, 5);
        let n4 = c.neighbors_4();
        assert_eq!(n4[0], GridCoord::new(5, 6)); // N
        assert_eq!(n4[1], GridCoord::new(6, 5)); // E
        assert_eq!(n4[2], GridCoord::new(5, 4)); // S
        assert_eq!(n4[3], GridCoord::new(4, 5)); // W
    }

    #[test]
    fn test_step_matches_neighbors() {
        let c = GridCoord::new(2, 3);
        let stepped: Vec<_> = Heading::ALL.iter().map(|h| c.step(*h)).collect();
        assert_eq!(stepped, c.neighbors_4().to_vec());
    }

    #[test]
    fn test_heading_to() {
        let c = GridCoord::new(1, 1);
        assert_eq!(c.heading_to(&GridCoord::new(1, 2)), Some(Heading::North));
        assert_eq!(c.heading_to(&GridCoord::new(0, 1)), Some(Heading::West));
        assert_eq!(c.heading_to(&GridCoord::new(2, 2)), None);
        assert_eq!(c.heading_to(&c), None);
    }

    #[test]
    fn test_distances() {
        let a = GridCoord::new(0, 0);
        let b = GridCoord::new(3, 4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_relative_eq!(a.euclidean_distance(&b), 5.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(GridCoord::new(2, 7).to_string(), "(2, 7)");
    }
}
