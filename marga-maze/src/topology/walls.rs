//! Per-cell wall flags.

use serde::{Deserialize, Serialize};

use crate::core::Heading;

/// Walls around a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellWalls {
    /// Wall on the `y + 1` side
    pub north: bool,
    /// Wall on the `x + 1` side
    pub east: bool,
    /// Wall on the `y - 1` side
    pub south: bool,
    /// Wall on the `x - 1` side
    pub west: bool,
}

impl CellWalls {
    /// All four sides walled.
    pub const SEALED: CellWalls = CellWalls {
        north: true,
        east: true,
        south: true,
        west: true,
    };

    pub(crate) fn from_bits(bits: u8) -> Self {
        Self {
            north: bits & Heading::North.wall_bit() != 0,
            east: bits & Heading::East.wall_bit() != 0,
            south: bits & Heading::South.wall_bit() != 0,
            west: bits & Heading::West.wall_bit() != 0,
        }
    }

    /// Whether the side facing `heading` is walled.
    #[inline]
    pub fn has(&self, heading: Heading) -> bool {
        match heading {
            Heading::North => self.north,
            Heading::East => self.east,
            Heading::South => self.south,
            Heading::West => self.west,
        }
    }

    /// Number of walled sides.
    pub fn count(&self) -> usize {
        [self.north, self.east, self.south, self.west]
            .iter()
            .filter(|w| **w)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits() {
        let walls = CellWalls::from_bits(Heading::North.wall_bit() | Heading::West.wall_bit());
        assert!(walls.north);
        assert!(!walls.east);
        assert!(!walls.south);
        assert!(walls.west);
        assert_eq!(walls.count(), 2);
    }

    #[test]
    fn test_sealed() {
        assert_eq!(CellWalls::from_bits(0b1111), CellWalls::SEALED);
        for h in Heading::ALL {
            assert!(CellWalls::SEALED.has(h));
            assert!(!CellWalls::default().has(h));
        }
    }
}
