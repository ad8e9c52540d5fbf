//! Cells the agent has physically occupied.

use crate::core::GridCoord;

/// Dense visited flags for a maze of known size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitedSet {
    flags: Vec<bool>,
    width: usize,
    height: usize,
    count: usize,
}

impl VisitedSet {
    /// Empty set for a `width × height` maze.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            flags: vec![false; width * height],
            width,
            height,
            count: 0,
        }
    }

    fn index(&self, coord: GridCoord) -> Option<usize> {
        if coord.x < 0 || coord.y < 0 {
            return None;
        }
        let (x, y) = (coord.x as usize, coord.y as usize);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Mark a cell. Returns `true` the first time.
    pub fn insert(&mut self, coord: GridCoord) -> bool {
        let Some(i) = self.index(coord) else {
            return false;
        };
        if self.flags[i] {
            return false;
        }
        self.flags[i] = true;
        self.count += 1;
        true
    }

    /// Whether a cell was visited.
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.index(coord).is_some_and(|i| self.flags[i])
    }

    /// Number of visited cells
    pub fn len(&self) -> usize {
        self.count
    }

    /// True when no cell was visited
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Visited cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, v)| **v)
            .map(|(i, _)| GridCoord::new((i % self.width) as i32, (i / self.width) as i32))
    }

    /// Cells of the maze never visited, row-major.
    pub fn unvisited(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter(|(_, v)| !**v)
            .map(|(i, _)| GridCoord::new((i % self.width) as i32, (i / self.width) as i32))
    }
}
