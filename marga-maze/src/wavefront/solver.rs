//! Layered breadth-first flood fill.

use std::collections::VecDeque;

use log::trace;

use crate::core::GridCoord;
use crate::topology::MazeTopology;

use super::{BiasField, WavefrontField};

/// Computes [`WavefrontField`]s over a [`MazeTopology`].
///
/// The target gets value 0. Every other reachable cell gets its breadth-first
/// layer plus the bias offset for that cell. Neighbors are expanded in N, E,
/// S, W order, so the traversal order only depends on the walls.
#[derive(Clone, Copy, Debug, Default)]
pub struct WavefrontSolver;

impl WavefrontSolver {
    /// Flood from `target` across open sides.
    ///
    /// An out-of-range target produces an empty field.
    pub fn compute(
        topology: &MazeTopology,
        target: GridCoord,
        bias: Option<&BiasField>,
    ) -> WavefrontField {
        let mut field = WavefrontField::empty(topology.width(), topology.height());
        if !topology.contains(target) {
            return field;
        }

        field.assign(target, 0, 0.0);
        let mut queue = VecDeque::with_capacity(topology.cell_count());
        queue.push_back((target, 0u32));

        while let Some((cell, layer)) = queue.pop_front() {
            let next_layer = layer + 1;
            for neighbor in topology.neighbors_open(cell) {
                let offset = bias.map_or(0.0, |b| b.get(neighbor));
                if field.assign(neighbor, next_layer, next_layer as f32 + offset) {
                    queue.push_back((neighbor, next_layer));
                }
            }
        }

        trace!(
            "[Wavefront] target {} reached {}/{} cells",
            target,
            field.len(),
            topology.cell_count()
        );
        field
    }

    /// Unbiased convenience wrapper.
    pub fn distances(topology: &MazeTopology, target: GridCoord) -> WavefrontField {
        Self::compute(topology, target, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Heading;
    use approx::assert_relative_eq;

    #[test]
    fn test_open_grid_is_manhattan() {
        let maze = MazeTopology::new(4, 3);
        let target = GridCoord::new(3, 2);
        let field = WavefrontSolver::distances(&maze, target);
        assert_eq!(field.len(), 12);
        for cell in maze.cells() {
            let expected = cell.manhattan_distance(&target) as f32;
            assert_eq!(field.get(cell), Some(expected), "{cell}");
        }
    }

    #[test]
    fn test_wall_forces_detour() {
        // 2x2 with a wall between (0,0) and (1,0)
        let mut maze = MazeTopology::new(2, 2);
        maze.add_wall(GridCoord::new(0, 0), Heading::East);
        let field = WavefrontSolver::distances(&maze, GridCoord::new(1, 0));
        assert_eq!(field.layer(GridCoord::new(1, 1)), Some(1));
        assert_eq!(field.layer(GridCoord::new(0, 1)), Some(2));
        assert_eq!(field.layer(GridCoord::new(0, 0)), Some(3));
    }

    #[test]
    fn test_unreachable_cells_absent() {
        let mut maze = MazeTopology::new(3, 1);
        maze.seal_cell(GridCoord::new(1, 0));
        let field = WavefrontSolver::distances(&maze, GridCoord::new(0, 0));
        assert_eq!(field.len(), 1);
        assert_eq!(field.get(GridCoord::new(2, 0)), None);
    }

    #[test]
    fn test_out_of_range_target() {
        let maze = MazeTopology::new(2, 2);
        let field = WavefrontSolver::distances(&maze, GridCoord::new(2, 0));
        assert!(field.is_empty());
    }

    #[test]
    fn test_bias_adds_offset_not_order() {
        let maze = MazeTopology::new(3, 3);
        let goal = GridCoord::new(2, 2);
        let bias = BiasField::euclidean(3, 3, goal);
        let plain = WavefrontSolver::distances(&maze, goal);
        let biased = WavefrontSolver::compute(&maze, goal, Some(&bias));

        assert_eq!(plain.order(), biased.order());
        assert_eq!(biased.get(goal), Some(0.0));
        let cell = GridCoord::new(0, 0);
        assert_relative_eq!(
            biased.get(cell).unwrap_or_default(),
            4.0 + 8.0_f32.sqrt()
        );
    }
}
