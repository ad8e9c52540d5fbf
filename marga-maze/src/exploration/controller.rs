//! Exploration controller state machine.
//!
//! Wavefront-guided exploration of an unknown maze. The agent starts
//! believing only in the boundary walls and descends the goal wavefront of
//! its mental map, which is re-flooded every time sensing reveals a wall.

use log::{debug, info, trace, warn};

use crate::agent::Agent;
use crate::core::{GridCoord, Turn};
use crate::topology::MazeTopology;
use crate::wavefront::{BiasField, WavefrontField, WavefrontSolver};

use super::config::ExplorationConfig;
use super::error::ExplorationError;
use super::observer::{ExplorationObserver, Frame};
use super::trace::{TraceEntry, compose_action};
use super::visited::VisitedSet;

/// Current exploration state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplorationState {
    /// Still searching for the goal.
    Exploring,

    /// The agent stands on the goal cell.
    GoalReached,

    /// The step ceiling was hit first.
    StepLimitReached,
}

impl ExplorationState {
    /// Get a short description of the state.
    pub fn name(&self) -> &'static str {
        match self {
            ExplorationState::Exploring => "Exploring",
            ExplorationState::GoalReached => "GoalReached",
            ExplorationState::StepLimitReached => "StepLimitReached",
        }
    }
}

/// Result of a single exploration step.
#[derive(Clone, Debug)]
pub struct ExplorationStep {
    /// Trace record appended by this step.
    pub entry: TraceEntry,

    /// Walls added to the mental map during this step.
    pub walls_learned: usize,

    /// Whether the wavefront was recomputed before choosing a move.
    pub reflooded: bool,

    /// State after this step.
    pub state: ExplorationState,
}

/// Everything an exploration run leaves behind.
#[derive(Clone, Debug)]
pub struct ExplorationOutcome {
    /// One entry per step
    pub trace: Vec<TraceEntry>,
    /// Walls the agent learned, boundary included
    pub mental_map: MazeTopology,
    /// Cells physically occupied
    pub visited: VisitedSet,
    /// Last wavefront computed
    pub wavefront: Option<WavefrontField>,
    /// Final state
    pub state: ExplorationState,
}

impl ExplorationOutcome {
    /// Number of controller steps taken
    pub fn steps(&self) -> usize {
        self.trace.len()
    }
}

/// Exploration controller.
///
/// Holds the agent, its mental map and the goal wavefront for one episode.
/// The ground-truth maze is only borrowed for sensing and moving.
///
/// # Usage
///
/// ```rust
/// use marga_maze::core::GridCoord;
/// use marga_maze::exploration::{ExplorationConfig, ExplorationController, NoopObserver};
/// use marga_maze::topology::MazeTopology;
///
/// let maze = MazeTopology::new(3, 3);
/// let mut controller = ExplorationController::new(
///     &maze,
///     GridCoord::new(0, 0),
///     GridCoord::new(2, 2),
///     None,
///     ExplorationConfig::default(),
/// )
/// .unwrap();
/// controller.run(&mut NoopObserver).unwrap();
/// assert_eq!(controller.agent().position(), GridCoord::new(2, 2));
/// ```
pub struct ExplorationController<'a> {
    ground_truth: &'a MazeTopology,
    mental_map: MazeTopology,
    agent: Agent,
    goal: GridCoord,
    bias: Option<BiasField>,
    wavefront: Option<WavefrontField>,
    /// Walls were learned since the last flood
    map_dirty: bool,
    visited: VisitedSet,
    trace: Vec<TraceEntry>,
    state: ExplorationState,
    config: ExplorationConfig,
}

impl<'a> ExplorationController<'a> {
    /// Create a controller with the agent on `start`, facing north.
    ///
    /// # Errors
    ///
    /// Start or goal outside the maze.
    pub fn new(
        ground_truth: &'a MazeTopology,
        start: GridCoord,
        goal: GridCoord,
        bias: Option<BiasField>,
        config: ExplorationConfig,
    ) -> Result<Self, ExplorationError> {
        if !ground_truth.contains(start) {
            return Err(ExplorationError::StartOutOfBounds(start));
        }
        if !ground_truth.contains(goal) {
            return Err(ExplorationError::GoalOutOfBounds(goal));
        }

        let (width, height) = (ground_truth.width(), ground_truth.height());
        let mut visited = VisitedSet::new(width, height);
        visited.insert(start);

        let state = if start == goal {
            ExplorationState::GoalReached
        } else {
            ExplorationState::Exploring
        };

        Ok(Self {
            ground_truth,
            mental_map: MazeTopology::new(width, height),
            agent: Agent::new(start),
            goal,
            bias,
            wavefront: None,
            map_dirty: false,
            visited,
            trace: Vec::new(),
            state,
            config,
        })
    }

    /// Current state
    pub fn state(&self) -> ExplorationState {
        self.state
    }

    /// True once the goal is reached.
    pub fn is_complete(&self) -> bool {
        self.state == ExplorationState::GoalReached
    }

    /// Agent pose
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Goal cell
    pub fn goal(&self) -> GridCoord {
        self.goal
    }

    /// Walls learned so far
    pub fn mental_map(&self) -> &MazeTopology {
        &self.mental_map
    }

    /// Most recent wavefront
    pub fn wavefront(&self) -> Option<&WavefrontField> {
        self.wavefront.as_ref()
    }

    /// Cells visited so far
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Steps recorded so far
    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    /// Sense against the ground truth and copy the walls into the mental map.
    fn learn_walls(&mut self) -> usize {
        let position = self.agent.position();
        let heading = self.agent.heading();
        let learned = self
            .agent
            .sense(self.ground_truth)
            .absolute(heading)
            .into_iter()
            .filter(|(side, walled)| *walled && self.mental_map.add_wall(position, *side))
            .count();
        if learned > 0 {
            self.map_dirty = true;
        }
        learned
    }

    fn reflood(&mut self) {
        self.wavefront = Some(WavefrontSolver::compute(
            &self.mental_map,
            self.goal,
            self.bias.as_ref(),
        ));
        self.map_dirty = false;
    }

    /// Open neighbor with the strictly lowest wavefront value among those one
    /// layer closer to the goal.
    ///
    /// The bias only ranks downhill neighbors; an uphill cell is never chosen
    /// however large its offset advantage. Neighbors are scanned N, E, S, W
    /// and the first minimum wins.
    fn choose_next(&self) -> Option<GridCoord> {
        let field = self.wavefront.as_ref()?;
        let mut best: Option<(GridCoord, u32, f32)> = None;
        for neighbor in self.mental_map.neighbors_open(self.agent.position()) {
            let (Some(layer), Some(value)) = (field.layer(neighbor), field.get(neighbor)) else {
                continue;
            };
            if best.is_none_or(|(_, l, v)| layer < l || (layer == l && value < v)) {
                best = Some((neighbor, layer, value));
            }
        }
        best.map(|(cell, _, _)| cell)
    }

    /// Run one sense–plan–act cycle.
    ///
    /// Calling this after the goal is reached is a no-op that records
    /// nothing and reports [`ExplorationState::GoalReached`].
    ///
    /// # Errors
    ///
    /// [`ExplorationError::StepLimitExceeded`] once the configured ceiling is
    /// hit.
    pub fn step(&mut self) -> Result<ExplorationStep, ExplorationError> {
        let before = self.agent.position();

        if let Some(limit) = self.config.max_steps {
            if self.state == ExplorationState::Exploring && self.trace.len() >= limit {
                self.state = ExplorationState::StepLimitReached;
                warn!(
                    "[Explore] {} at {} after {} steps",
                    self.state.name(),
                    before,
                    limit
                );
                return Err(ExplorationError::StepLimitExceeded {
                    limit,
                    position: before,
                });
            }
        }
        if self.state != ExplorationState::Exploring {
            return Ok(ExplorationStep {
                entry: TraceEntry {
                    step: self.trace.len(),
                    position: before,
                    action: String::new(),
                },
                walls_learned: 0,
                reflooded: false,
                state: self.state,
            });
        }

        let mut walls_learned = self.learn_walls();
        let reflooded = self.map_dirty || self.wavefront.is_none();
        if reflooded {
            self.reflood();
        }

        let next = self.choose_next();
        let (turns, moved) = match next.and_then(|cell| before.heading_to(&cell)) {
            Some(heading) => {
                let turns = self.agent.face(heading);
                // The side behind the start heading was never sensed.
                if self.agent.sense(self.ground_truth).forward {
                    walls_learned += self.learn_walls();
                    (turns, false)
                } else {
                    self.agent.advance(self.ground_truth)?;
                    (turns, true)
                }
            }
            None => {
                debug!("[Explore] dead end at {}, turning around", before);
                self.agent.turn(Turn::Left);
                self.agent.turn(Turn::Left);
                (vec![Turn::Left, Turn::Left], false)
            }
        };

        let position = self.agent.position();
        self.visited.insert(position);
        let entry = TraceEntry {
            step: self.trace.len() + 1,
            position: before,
            action: compose_action(&turns, moved),
        };
        trace!(
            "[Explore] step {} {} -> {} '{}' facing {}",
            entry.step,
            before,
            position,
            entry.action,
            self.agent.heading()
        );
        self.trace.push(entry.clone());

        if position == self.goal {
            self.state = ExplorationState::GoalReached;
            info!(
                "[Explore] {}: goal {} after {} steps, {} cells visited",
                self.state.name(),
                self.goal,
                self.trace.len(),
                self.visited.len()
            );
        }

        Ok(ExplorationStep {
            entry,
            walls_learned,
            reflooded,
            state: self.state,
        })
    }

    /// Step until the goal is reached, emitting a frame after every step.
    ///
    /// Returns the number of steps taken by this call.
    pub fn run(
        &mut self,
        observer: &mut dyn ExplorationObserver,
    ) -> Result<usize, ExplorationError> {
        let mut steps = 0;
        while self.state == ExplorationState::Exploring {
            let step = self.step()?;
            steps += 1;
            observer.on_frame(&Frame {
                index: step.entry.step,
                topology: &self.mental_map,
                agent: Some(self.agent),
                goal: self.goal,
                wavefront: self.wavefront.as_ref(),
                highlight: &[],
            });
        }
        Ok(steps)
    }

    /// Consume the controller, keeping what the episode needs afterwards.
    pub fn into_outcome(self) -> ExplorationOutcome {
        ExplorationOutcome {
            trace: self.trace,
            mental_map: self.mental_map,
            visited: self.visited,
            wavefront: self.wavefront,
            state: self.state,
        }
    }
}
