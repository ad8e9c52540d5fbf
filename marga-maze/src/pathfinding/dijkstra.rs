//! Uniform-cost search over open wall sides.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use log::{debug, warn};

use crate::core::GridCoord;
use crate::topology::MazeTopology;

use super::types::{PathFailure, PathResult};

/// Priority queue entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct DijkstraState {
    cost: u32,
    node: usize,
}

impl Ord for DijkstraState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for DijkstraState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra search with unit edge weights.
///
/// Every step between adjacent cells without a wall costs 1. The result
/// always starts with the start cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestPathSolver;

impl ShortestPathSolver {
    /// Find a shortest path from `start` to `goal`.
    ///
    /// An unreachable goal is reported through [`PathResult::failure_reason`]
    /// rather than as an error.
    pub fn find_path(topology: &MazeTopology, start: GridCoord, goal: GridCoord) -> PathResult {
        let (Some(start_idx), Some(goal_idx)) = (topology.index_of(start), topology.index_of(goal))
        else {
            return PathResult::failed(start, PathFailure::OutOfBounds, 0);
        };

        if start_idx == goal_idx {
            return PathResult {
                cells: vec![start],
                nodes_expanded: 0,
                success: true,
                failure_reason: None,
            };
        }

        let n = topology.cell_count();
        let mut dist = vec![u32::MAX; n];
        let mut prev: Vec<Option<usize>> = vec![None; n];
        let mut nodes_expanded = 0;
        dist[start_idx] = 0;

        let mut heap = BinaryHeap::new();
        heap.push(DijkstraState {
            cost: 0,
            node: start_idx,
        });

        while let Some(DijkstraState { cost, node }) = heap.pop() {
            // Skip if we've found a better path
            if cost > dist[node] {
                continue;
            }
            nodes_expanded += 1;

            if node == goal_idx {
                break;
            }

            for neighbor in topology.neighbors_open(topology.coord_of(node)) {
                let Some(n_idx) = topology.index_of(neighbor) else {
                    continue;
                };
                let new_dist = cost + 1;
                if new_dist < dist[n_idx] {
                    dist[n_idx] = new_dist;
                    prev[n_idx] = Some(node);
                    heap.push(DijkstraState {
                        cost: new_dist,
                        node: n_idx,
                    });
                }
            }
        }

        if dist[goal_idx] == u32::MAX {
            debug!("[Dijkstra] {} unreachable from {}", goal, start);
            return PathResult::failed(start, PathFailure::NoPath, nodes_expanded);
        }

        // Walk predecessors back from the goal
        let mut seen_links = HashSet::new();
        let mut reversed = vec![goal];
        let mut current = goal_idx;
        while current != start_idx {
            let Some(p) = prev[current] else {
                return PathResult::failed(start, PathFailure::NoPath, nodes_expanded);
            };
            if !seen_links.insert((current, p)) {
                warn!("[Dijkstra] predecessor cycle at {}", topology.coord_of(current));
                return PathResult::failed(start, PathFailure::PredecessorCycle, nodes_expanded);
            }
            reversed.push(topology.coord_of(p));
            current = p;
        }
        reversed.reverse();

        debug!(
            "[Dijkstra] {} -> {}: {} cells, {} expanded",
            start,
            goal,
            reversed.len(),
            nodes_expanded
        );

        PathResult {
            cells: reversed,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}
