//! Test utilities for maze exploration.
//!
//! Maze builders (fixed layouts and seeded random carving) and an
//! independent breadth-first search used as a reference.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};

use marga_maze::core::{GridCoord, Heading};
use marga_maze::exploration::{
    ExplorationConfig, ExplorationController, ExplorationOutcome, NoopObserver,
};
use marga_maze::io::parse_maze;
use marga_maze::topology::MazeTopology;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Initialize logging once for the test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 3x3 maze with one corridor snaking from (0,0) to (2,2).
///
/// ```text
/// (0,2) → (1,2) → (2,2)
///   ↑
/// (0,1) ← (1,1) ← (2,1)
///                   ↑
/// (0,0) → (1,0) → (2,0)
/// ```
pub fn corridor_3x3() -> MazeTopology {
    parse_maze(
        "#######\n\
         #.....#\n\
         #.#####\n\
         #.....#\n\
         #####.#\n\
         #.....#\n\
         #######\n",
    )
    .expect("valid corridor maze")
}

/// Cells of [`corridor_3x3`] in walking order.
pub fn corridor_cells() -> Vec<GridCoord> {
    [(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1), (0, 2), (1, 2), (2, 2)]
        .into_iter()
        .map(GridCoord::from)
        .collect()
}

/// Carve a perfect maze with a seeded depth-first search, then open
/// `extra_openings` additional random wall sides to create loops.
pub fn carve_maze(width: usize, height: usize, seed: u64, extra_openings: usize) -> MazeTopology {
    let mut rng = StdRng::seed_from_u64(seed);
    let bounds = MazeTopology::new(width, height);
    let mut open: HashSet<(GridCoord, Heading)> = HashSet::new();
    let mut seen = HashSet::from([GridCoord::new(0, 0)]);
    let mut stack = vec![GridCoord::new(0, 0)];

    while let Some(&cell) = stack.last() {
        let options: Vec<Heading> = Heading::ALL
            .into_iter()
            .filter(|h| {
                let n = cell.step(*h);
                bounds.contains(n) && !seen.contains(&n)
            })
            .collect();
        if options.is_empty() {
            stack.pop();
            continue;
        }
        let heading = options[rng.random_range(0..options.len())];
        let next = cell.step(heading);
        open.insert((cell, heading));
        open.insert((next, heading.opposite()));
        seen.insert(next);
        stack.push(next);
    }

    for _ in 0..extra_openings {
        let cell = GridCoord::new(
            rng.random_range(0..width as i32),
            rng.random_range(0..height as i32),
        );
        let heading = Heading::ALL[rng.random_range(0..4)];
        if bounds.contains(cell.step(heading)) {
            open.insert((cell, heading));
            open.insert((cell.step(heading), heading.opposite()));
        }
    }

    let mut maze = MazeTopology::new(width, height);
    for cell in bounds.cells() {
        for heading in Heading::ALL {
            if !open.contains(&(cell, heading)) {
                maze.add_wall(cell, heading);
            }
        }
    }
    maze
}

/// Reference breadth-first hop counts from `target`.
pub fn reference_bfs(maze: &MazeTopology, target: GridCoord) -> HashMap<GridCoord, u32> {
    let mut dist = HashMap::from([(target, 0)]);
    let mut queue = VecDeque::from([target]);
    while let Some(cell) = queue.pop_front() {
        let walls = maze.walls_at(cell);
        for heading in Heading::ALL {
            let next = cell.step(heading);
            if walls.has(heading) || !maze.contains(next) || dist.contains_key(&next) {
                continue;
            }
            dist.insert(next, dist[&cell] + 1);
            queue.push_back(next);
        }
    }
    dist
}

/// Explore with default settings and return the outcome.
pub fn explore(maze: &MazeTopology, start: GridCoord, goal: GridCoord) -> ExplorationOutcome {
    let mut controller =
        ExplorationController::new(maze, start, goal, None, ExplorationConfig::default())
            .expect("valid endpoints");
    controller.run(&mut NoopObserver).expect("exploration completes");
    controller.into_outcome()
}
