//! Episode execution and best-of-N selection.

use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use thiserror::Error;

use crate::core::GridCoord;
use crate::exploration::{
    ExplorationController, ExplorationError, ExplorationObserver, Frame, TraceEntry, VisitedSet,
};
use crate::pathfinding::{PathFailure, ShortestPathSolver};
use crate::topology::MazeTopology;
use crate::wavefront::BiasError;

use super::config::EpisodeConfig;
use super::score::episode_score;

/// Frame index of the first summary frame emitted after exploration.
///
/// `+0` shows visited cells on the mental map, `+1` the final path on the
/// sealed mental map, `+2` the final path on the ground truth.
pub const FINAL_FRAME_BASE: usize = 100_000;

/// Errors that abort an episode.
#[derive(Debug, Error)]
pub enum EpisodeError {
    /// Exploration could not complete.
    #[error("exploration failed: {0}")]
    Exploration(#[from] ExplorationError),

    /// Bias parameters were rejected.
    #[error("invalid bias: {0}")]
    Bias(#[from] BiasError),

    /// Maze has no cells.
    #[error("maze has no cells")]
    EmptyMaze,
}

/// Outcome of one episode.
#[derive(Clone, Debug, Serialize)]
pub struct EpisodeResult {
    /// Attempt index (0-based)
    pub attempt: usize,
    /// Start cell
    pub start: GridCoord,
    /// Goal cell
    pub goal: GridCoord,
    /// One entry per controller step
    pub trace: Vec<TraceEntry>,
    /// Final path from start to goal, both included
    pub path: Vec<GridCoord>,
    /// Why the final path search failed, if it did
    #[serde(skip)]
    pub path_failure: Option<PathFailure>,
    /// Mental map after sealing unvisited cells
    #[serde(skip)]
    pub mental_map: MazeTopology,
    /// Cells the agent stood in
    #[serde(skip)]
    pub visited: VisitedSet,
    /// `exploration_steps / 4 + path_length`
    pub score: f32,
}

impl EpisodeResult {
    /// Number of controller steps
    pub fn exploration_steps(&self) -> usize {
        self.trace.len()
    }

    /// Final path length in cells, start included
    pub fn path_length(&self) -> usize {
        self.path.len()
    }

    /// Whether the final search reached the goal
    pub fn path_found(&self) -> bool {
        self.path_failure.is_none()
    }
}

/// Runs episodes against one ground-truth maze.
pub struct EpisodeRunner<'a> {
    maze: &'a MazeTopology,
    config: EpisodeConfig,
}

impl<'a> EpisodeRunner<'a> {
    /// Create a runner
    pub fn new(maze: &'a MazeTopology, config: EpisodeConfig) -> Self {
        Self { maze, config }
    }

    /// Configuration in use
    pub fn config(&self) -> &EpisodeConfig {
        &self.config
    }

    /// Configured goal, or the north-east corner.
    pub fn goal(&self) -> GridCoord {
        self.config.goal.unwrap_or_else(|| {
            GridCoord::new(
                self.maze.width() as i32 - 1,
                self.maze.height() as i32 - 1,
            )
        })
    }

    fn rng_for(&self, attempt: usize) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(attempt as u64)),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Run a single episode.
    ///
    /// The observer receives one frame per exploration step followed by the
    /// three summary frames at [`FINAL_FRAME_BASE`].
    pub fn run_once(
        &self,
        attempt: usize,
        observer: &mut dyn ExplorationObserver,
    ) -> Result<EpisodeResult, EpisodeError> {
        if self.maze.cell_count() == 0 {
            return Err(EpisodeError::EmptyMaze);
        }
        let start = self.config.start;
        let goal = self.goal();

        let mut rng = self.rng_for(attempt);
        let bias = self
            .config
            .bias
            .build(self.maze.width(), self.maze.height(), goal, &mut rng)?;
        debug!(
            "[Episode] attempt {} {} -> {} bias {}",
            attempt,
            start,
            goal,
            self.config.bias.name()
        );

        let mut controller = ExplorationController::new(
            self.maze,
            start,
            goal,
            bias,
            self.config.exploration.clone(),
        )?;
        controller.run(observer)?;
        let outcome = controller.into_outcome();

        let visited_cells: Vec<GridCoord> = outcome.visited.iter().collect();
        observer.on_frame(&Frame {
            index: FINAL_FRAME_BASE,
            topology: &outcome.mental_map,
            agent: None,
            goal,
            wavefront: None,
            highlight: &visited_cells,
        });

        let mut sealed = outcome.mental_map;
        for cell in outcome.visited.unvisited() {
            sealed.seal_cell(cell);
        }

        let search = ShortestPathSolver::find_path(&sealed, start, goal);
        observer.on_frame(&Frame {
            index: FINAL_FRAME_BASE + 1,
            topology: &sealed,
            agent: None,
            goal,
            wavefront: None,
            highlight: &search.cells,
        });
        observer.on_frame(&Frame {
            index: FINAL_FRAME_BASE + 2,
            topology: self.maze,
            agent: None,
            goal,
            wavefront: None,
            highlight: &search.cells,
        });

        let score = episode_score(outcome.trace.len(), search.cells.len());
        info!(
            "[Episode] attempt {}: {} steps, path {} cells, score {:.2}",
            attempt,
            outcome.trace.len(),
            search.cells.len(),
            score
        );

        Ok(EpisodeResult {
            attempt,
            start,
            goal,
            trace: outcome.trace,
            path: search.cells,
            path_failure: search.failure_reason,
            mental_map: sealed,
            visited: outcome.visited,
            score,
        })
    }

    /// Run every configured attempt and keep the lowest score.
    ///
    /// Without a stochastic bias all attempts would be identical, so only one
    /// is run. Ties keep the earliest attempt.
    pub fn run_best(
        &self,
        observer: &mut dyn ExplorationObserver,
    ) -> Result<EpisodeResult, EpisodeError> {
        let attempts = self.config.effective_attempts();
        let mut best = self.run_once(0, observer)?;
        for attempt in 1..attempts {
            let result = self.run_once(attempt, observer)?;
            if result.score < best.score {
                best = result;
            }
        }
        if attempts > 1 {
            info!(
                "[Episode] best of {} attempts: #{} score {:.2}",
                attempts, best.attempt, best.score
            );
        }
        Ok(best)
    }
}
