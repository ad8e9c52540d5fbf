//! Property tests over randomly carved mazes.

mod common;

use marga_maze::core::{GridCoord, Heading};
use marga_maze::exploration::{ExplorationConfig, ExplorationController, NoopObserver};
use marga_maze::topology::MazeTopology;
use marga_maze::wavefront::{BiasField, BiasMode, StochasticBias, WavefrontSolver};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use common::{carve_maze, reference_bfs};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_exploration_terminates_within_bound(
        width in 1usize..=10,
        height in 2usize..=10,
        seed in any::<u64>(),
        loops in 0usize..8,
        start_x in 0i32..10,
        start_y in 0i32..10,
        mode in 0usize..4,
    ) {
        let maze = carve_maze(width, height, seed, loops);
        let start = GridCoord::new(start_x % width as i32, start_y % height as i32);
        let goal = GridCoord::new(width as i32 - 1, height as i32 - 1);
        let limit = 4 * width * height;

        let bias = match mode {
            0 => BiasMode::None,
            1 => BiasMode::Euclidean,
            2 => BiasMode::Stochastic(StochasticBias::default()),
            _ => BiasMode::Stochastic(StochasticBias::default().with_euclidean_base(true)),
        };
        let field = bias
            .build(width, height, goal, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        let mut controller = ExplorationController::new(
            &maze,
            start,
            goal,
            field,
            ExplorationConfig::new().with_max_steps(limit),
        )
        .unwrap();
        let result = controller.run(&mut NoopObserver);
        prop_assert!(result.is_ok(), "{} bias: {:?}", bias.name(), result);
        prop_assert!(controller.trace().len() <= limit);
        prop_assert_eq!(controller.agent().position(), goal);
    }

    #[test]
    fn prop_unbiased_wavefront_is_bfs(
        width in 1usize..=9,
        height in 1usize..=9,
        seed in any::<u64>(),
        loops in 0usize..10,
        tx in 0i32..9,
        ty in 0i32..9,
    ) {
        let maze = carve_maze(width, height, seed, loops);
        let target = GridCoord::new(tx % width as i32, ty % height as i32);
        let field = WavefrontSolver::distances(&maze, target);
        let reference = reference_bfs(&maze, target);

        prop_assert_eq!(field.len(), reference.len());
        for cell in maze.cells() {
            let expected = reference.get(&cell).map(|d| *d as f32);
            prop_assert_eq!(field.get(cell), expected);
        }
    }

    #[test]
    fn prop_bias_preserves_traversal_order(
        width in 1usize..=8,
        height in 1usize..=8,
        seed in any::<u64>(),
        factor in 0.0f32..1.0,
    ) {
        let maze = carve_maze(width, height, seed, 3);
        let goal = GridCoord::new(width as i32 - 1, height as i32 - 1);
        let plain = WavefrontSolver::distances(&maze, goal);

        let euclid = BiasField::euclidean(width, height, goal);
        let params = StochasticBias::default().with_factor(factor);
        let noisy = BiasField::stochastic(width, height, goal, &params, &mut StdRng::seed_from_u64(seed))
            .unwrap();

        for bias in [euclid, noisy] {
            let biased = WavefrontSolver::compute(&maze, goal, Some(&bias));
            prop_assert_eq!(biased.order(), plain.order());
        }
    }

    #[test]
    fn prop_walls_mirrored(
        width in 1usize..=8,
        height in 1usize..=8,
        walls in proptest::collection::vec((0i32..8, 0i32..8, 0usize..4), 0..40),
    ) {
        let mut maze = MazeTopology::new(width, height);
        for (x, y, h) in walls {
            maze.add_wall(GridCoord::new(x, y), Heading::ALL[h]);
        }
        for cell in maze.cells() {
            let w = maze.walls_at(cell);
            prop_assert_eq!(w.west, cell.x == 0 || maze.walls_at(cell.step(Heading::West)).east);
            prop_assert_eq!(w.south, cell.y == 0 || maze.walls_at(cell.step(Heading::South)).north);
            if cell.x as usize == width - 1 {
                prop_assert!(w.east);
            }
            if cell.y as usize == height - 1 {
                prop_assert!(w.north);
            }
        }
    }

    #[test]
    fn prop_insertion_idempotent(
        row in -2i32..10,
        col in -2i32..10,
        horizontal in any::<bool>(),
    ) {
        let mut maze = MazeTopology::new(6, 6);
        let insert = |m: &mut MazeTopology| {
            if horizontal {
                m.add_horizontal_wall(col, row)
            } else {
                m.add_vertical_wall(row, col)
            }
        };
        insert(&mut maze);
        let once = maze.clone();
        prop_assert!(!insert(&mut maze));
        prop_assert_eq!(maze, once);
    }
}
