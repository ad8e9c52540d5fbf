//! Absolute headings and relative turns.
//!
//! Rotation is a lookup in the cyclic table [`Heading::ALL`]: a left turn is
//! the previous entry, a right turn the next one.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::GridCoord;

/// Absolute facing of an agent on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Heading {
    /// Towards `y + 1`
    #[default]
    North,
    /// Towards `x + 1`
    East,
    /// Towards `y - 1`
    South,
    /// Towards `x - 1`
    West,
}

impl Heading {
    /// All headings in clockwise order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    #[inline]
    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    /// Heading after a 90° counter-clockwise rotation.
    #[inline]
    pub fn left(self) -> Heading {
        Self::ALL[(self.index() + 3) % 4]
    }

    /// Heading after a 90° clockwise rotation.
    #[inline]
    pub fn right(self) -> Heading {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Heading after a 180° rotation.
    #[inline]
    pub fn opposite(self) -> Heading {
        Self::ALL[(self.index() + 2) % 4]
    }

    /// Apply a relative turn.
    #[inline]
    pub fn turned(self, turn: Turn) -> Heading {
        match turn {
            Turn::Left => self.left(),
            Turn::Right => self.right(),
        }
    }

    /// Unit offset of one step in this heading.
    #[inline]
    pub fn offset(self) -> GridCoord {
        match self {
            Heading::North => GridCoord::new(0, 1),
            Heading::East => GridCoord::new(1, 0),
            Heading::South => GridCoord::new(0, -1),
            Heading::West => GridCoord::new(-1, 0),
        }
    }

    /// Wall bit for this side of a cell (N=1, E=2, S=4, W=8).
    #[inline]
    pub(crate) fn wall_bit(self) -> u8 {
        1 << self.index()
    }

    /// Headings to the left of, ahead of and to the right of this one.
    #[inline]
    pub fn sensing_order(self) -> [Heading; 3] {
        [self.left(), self, self.right()]
    }

    /// Short name used in logs and renders.
    pub fn name(self) -> &'static str {
        match self {
            Heading::North => "N",
            Heading::East => "E",
            Heading::South => "S",
            Heading::West => "W",
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Relative 90° rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Counter-clockwise
    Left,
    /// Clockwise
    Right,
}

impl Turn {
    /// Action letter recorded in exploration traces.
    pub fn symbol(self) -> char {
        match self {
            Turn::Left => 'L',
            Turn::Right => 'R',
        }
    }
}
