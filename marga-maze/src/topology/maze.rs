//! Wall topology of a rectangular maze.

use std::collections::BTreeSet;

use crate::core::{GridCoord, Heading};

use super::CellWalls;

/// Walls of a `width × height` maze.
///
/// Each cell stores four wall bits. Inserting a wall always updates both
/// cells that share the segment, so the two views of an interior wall never
/// disagree. Walls are only ever added.
///
/// ## Edge views
///
/// ```text
///   vertical (x, y):   wall on the west side of column x at row y
///                      (x == width is the east boundary)
///   horizontal (x, y): wall on the south side of row y at column x
///                      (y == height is the north boundary)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeTopology {
    /// Wall bits per cell, row-major (`y * width + x`)
    walls: Vec<u8>,
    width: usize,
    height: usize,
}

impl MazeTopology {
    /// Create a maze with every boundary wall in place and an open interior.
    pub fn new(width: usize, height: usize) -> Self {
        let mut topology = Self {
            walls: vec![0; width * height],
            width,
            height,
        };
        for x in 0..width as i32 {
            topology.add_wall(GridCoord::new(x, 0), Heading::South);
            topology.add_wall(GridCoord::new(x, height as i32 - 1), Heading::North);
        }
        for y in 0..height as i32 {
            topology.add_wall(GridCoord::new(0, y), Heading::West);
            topology.add_wall(GridCoord::new(width as i32 - 1, y), Heading::East);
        }
        topology
    }

    /// Grid width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check if coordinates are a cell of this maze
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert a cell coordinate to its storage index
    #[inline]
    pub fn index_of(&self, coord: GridCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert a storage index back to its coordinate
    #[inline]
    pub fn coord_of(&self, index: usize) -> GridCoord {
        GridCoord::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        (0..self.cell_count()).map(|i| self.coord_of(i))
    }

    /// Walls around a cell. Out-of-range cells report no walls.
    #[inline]
    pub fn walls_at(&self, coord: GridCoord) -> CellWalls {
        self.index_of(coord)
            .map(|i| CellWalls::from_bits(self.walls[i]))
            .unwrap_or_default()
    }

    /// Whether the side of `coord` facing `heading` is walled.
    #[inline]
    pub fn has_wall(&self, coord: GridCoord, heading: Heading) -> bool {
        self.index_of(coord)
            .is_some_and(|i| self.walls[i] & heading.wall_bit() != 0)
    }

    /// Insert the wall on the `heading` side of `coord`, mirrored onto the
    /// neighbor when it exists.
    ///
    /// Returns `true` if the wall was not known before.
    pub fn add_wall(&mut self, coord: GridCoord, heading: Heading) -> bool {
        let Some(idx) = self.index_of(coord) else {
            return false;
        };
        let bit = heading.wall_bit();
        let changed = self.walls[idx] & bit == 0;
        self.walls[idx] |= bit;

        if let Some(n_idx) = self.index_of(coord.step(heading)) {
            self.walls[n_idx] |= heading.opposite().wall_bit();
        }
        changed
    }

    /// Insert the vertical segment on the west side of column `col` at `row`.
    ///
    /// `col == width` addresses the east boundary. Anything outside the grid
    /// is ignored. Returns `true` if the segment was new.
    pub fn add_vertical_wall(&mut self, row: i32, col: i32) -> bool {
        if row < 0 || row as usize >= self.height || col < 0 || col as usize > self.width {
            return false;
        }
        if (col as usize) < self.width {
            self.add_wall(GridCoord::new(col, row), Heading::West)
        } else {
            self.add_wall(GridCoord::new(col - 1, row), Heading::East)
        }
    }

    /// Insert the horizontal segment on the south side of row `row` at `col`.
    ///
    /// `row == height` addresses the north boundary. Anything outside the
    /// grid is ignored. Returns `true` if the segment was new.
    pub fn add_horizontal_wall(&mut self, col: i32, row: i32) -> bool {
        if col < 0 || col as usize >= self.width || row < 0 || row as usize > self.height {
            return false;
        }
        if (row as usize) < self.height {
            self.add_wall(GridCoord::new(col, row), Heading::South)
        } else {
            self.add_wall(GridCoord::new(col, row - 1), Heading::North)
        }
    }

    /// Wall off all four sides of a cell. Returns the number of new walls.
    pub fn seal_cell(&mut self, coord: GridCoord) -> usize {
        Heading::ALL
            .into_iter()
            .filter(|h| self.add_wall(coord, *h))
            .count()
    }

    /// Adjacent cells reachable without crossing a wall, in N, E, S, W order.
    pub fn neighbors_open(&self, coord: GridCoord) -> Vec<GridCoord> {
        let walls = self.walls_at(coord);
        if !self.contains(coord) {
            return Vec::new();
        }
        Heading::ALL
            .into_iter()
            .filter(|h| !walls.has(*h))
            .map(|h| coord.step(h))
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// Vertical wall segments derived from the per-cell flags.
    pub fn vertical_walls(&self) -> BTreeSet<GridCoord> {
        let mut segments = BTreeSet::new();
        for coord in self.cells() {
            let walls = self.walls_at(coord);
            if walls.west {
                segments.insert(coord);
            }
            if walls.east && coord.x as usize == self.width - 1 {
                segments.insert(GridCoord::new(coord.x + 1, coord.y));
            }
        }
        segments
    }

    /// Horizontal wall segments derived from the per-cell flags.
    pub fn horizontal_walls(&self) -> BTreeSet<GridCoord> {
        let mut segments = BTreeSet::new();
        for coord in self.cells() {
            let walls = self.walls_at(coord);
            if walls.south {
                segments.insert(coord);
            }
            if walls.north && coord.y as usize == self.height - 1 {
                segments.insert(GridCoord::new(coord.x, coord.y + 1));
            }
        }
        segments
    }

    /// Number of distinct wall segments, boundary included.
    pub fn wall_count(&self) -> usize {
        self.vertical_walls().len() + self.horizontal_walls().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_walls() {
        let maze = MazeTopology::new(4, 3);
        for coord in maze.cells() {
            let walls = maze.walls_at(coord);
            assert_eq!(walls.west, coord.x == 0, "{coord}");
            assert_eq!(walls.east, coord.x == 3, "{coord}");
            assert_eq!(walls.south, coord.y == 0, "{coord}");
            assert_eq!(walls.north, coord.y == 2, "{coord}");
        }
        // 2 * (4 + 3) boundary segments
        assert_eq!(maze.wall_count(), 14);
    }

    #[test]
    fn test_vertical_wall_mirrored() {
        let mut maze = MazeTopology::new(3, 3);
        assert!(maze.add_vertical_wall(1, 2));
        assert!(maze.walls_at(GridCoord::new(2, 1)).west);
        assert!(maze.walls_at(GridCoord::new(1, 1)).east);
        assert!(!maze.walls_at(GridCoord::new(1, 0)).east);
        assert!(maze.vertical_walls().contains(&GridCoord::new(2, 1)));
    }

    #[test]
    fn test_horizontal_wall_mirrored() {
        let mut maze = MazeTopology::new(3, 3);
        assert!(maze.add_horizontal_wall(0, 2));
        assert!(maze.walls_at(GridCoord::new(0, 2)).south);
        assert!(maze.walls_at(GridCoord::new(0, 1)).north);
        assert!(maze.horizontal_walls().contains(&GridCoord::new(0, 2)));
    }

    #[test]
    fn test_add_wall_idempotent() {
        let mut maze = MazeTopology::new(3, 3);
        assert!(maze.add_wall(GridCoord::new(1, 1), Heading::East));
        let snapshot = maze.clone();
        assert!(!maze.add_wall(GridCoord::new(1, 1), Heading::East));
        assert!(!maze.add_wall(GridCoord::new(2, 1), Heading::West));
        assert!(!maze.add_vertical_wall(1, 2));
        assert_eq!(maze, snapshot);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut maze = MazeTopology::new(2, 2);
        let snapshot = maze.clone();
        assert!(!maze.add_vertical_wall(5, 1));
        assert!(!maze.add_vertical_wall(0, 3));
        assert!(!maze.add_horizontal_wall(-1, 1));
        assert!(!maze.add_horizontal_wall(0, 3));
        assert!(!maze.add_wall(GridCoord::new(9, 9), Heading::North));
        assert_eq!(maze, snapshot);
    }

    #[test]
    fn test_boundary_segments_are_noops() {
        let mut maze = MazeTopology::new(2, 2);
        assert!(!maze.add_vertical_wall(0, 0));
        assert!(!maze.add_vertical_wall(1, 2));
        assert!(!maze.add_horizontal_wall(1, 0));
        assert!(!maze.add_horizontal_wall(0, 2));
    }

    #[test]
    fn test_neighbors_open_order() {
        let maze = MazeTopology::new(3, 3);
        let center = GridCoord::new(1, 1);
        assert_eq!(
            maze.neighbors_open(center),
            vec![
                GridCoord::new(1, 2),
                GridCoord::new(2, 1),
                GridCoord::new(1, 0),
                GridCoord::new(0, 1),
            ]
        );
        assert_eq!(
            maze.neighbors_open(GridCoord::new(0, 0)),
            vec![GridCoord::new(0, 1), GridCoord::new(1, 0)]
        );
        assert!(maze.neighbors_open(GridCoord::new(-1, 0)).is_empty());
    }

    #[test]
    fn test_seal_cell() {
        let mut maze = MazeTopology::new(3, 3);
        let center = GridCoord::new(1, 1);
        assert_eq!(maze.seal_cell(center), 4);
        assert_eq!(maze.walls_at(center), CellWalls::SEALED);
        assert!(maze.walls_at(GridCoord::new(1, 2)).south);
        assert!(maze.walls_at(GridCoord::new(0, 1)).east);
        assert!(maze.neighbors_open(center).is_empty());
        assert_eq!(maze.seal_cell(center), 0);
    }

    #[test]
    fn test_index_roundtrip() {
        let maze = MazeTopology::new(4, 3);
        for (i, coord) in maze.cells().enumerate() {
            assert_eq!(maze.index_of(coord), Some(i));
        }
        assert_eq!(maze.index_of(GridCoord::new(4, 0)), None);
    }
}
