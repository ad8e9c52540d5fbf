//! Agent state machine: turn, sense, advance.

use thiserror::Error;

use crate::core::{GridCoord, Heading, Turn};
use crate::topology::MazeTopology;

/// Walls seen from the agent's current pose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct WallSense {
    /// Wall on the left-hand side
    pub left: bool,
    /// Wall straight ahead
    pub forward: bool,
    /// Wall on the right-hand side
    pub right: bool,
}

impl WallSense {
    /// Sensed walls paired with their absolute side, for a given heading.
    pub fn absolute(&self, heading: Heading) -> [(Heading, bool); 3] {
        let [l, f, r] = heading.sensing_order();
        [(l, self.left), (f, self.forward), (r, self.right)]
    }
}

/// Movement failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Forward step attempted through a wall.
    #[error("blocked moving {heading} from {position}")]
    Blocked {
        /// Cell the agent tried to leave
        position: GridCoord,
        /// Heading of the attempted step
        heading: Heading,
    },
}

/// Position and heading of the maze-solving agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Agent {
    position: GridCoord,
    heading: Heading,
}

impl Agent {
    /// Place an agent at `position` facing north.
    pub fn new(position: GridCoord) -> Self {
        Self::with_heading(position, Heading::North)
    }

    /// Place an agent with an explicit heading.
    pub fn with_heading(position: GridCoord, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// Current cell
    #[inline]
    pub fn position(&self) -> GridCoord {
        self.position
    }

    /// Current facing
    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Rotate 90° in place.
    pub fn turn(&mut self, turn: Turn) {
        self.heading = self.heading.turned(turn);
    }

    /// Turn left until facing `target`, returning the turns performed.
    ///
    /// At most three turns are needed.
    pub fn face(&mut self, target: Heading) -> Vec<Turn> {
        let mut turns = Vec::with_capacity(3);
        while self.heading != target {
            self.turn(Turn::Left);
            turns.push(Turn::Left);
        }
        turns
    }

    /// Read the left, forward and right walls of the current cell.
    pub fn sense(&self, topology: &MazeTopology) -> WallSense {
        let [l, f, r] = self.heading.sensing_order();
        WallSense {
            left: topology.has_wall(self.position, l),
            forward: topology.has_wall(self.position, f),
            right: topology.has_wall(self.position, r),
        }
    }

    /// Move one cell forward.
    ///
    /// # Errors
    ///
    /// [`MoveError::Blocked`] if the forward side is walled. The pose is left
    /// unchanged in that case.
    pub fn advance(&mut self, topology: &MazeTopology) -> Result<GridCoord, MoveError> {
        if topology.has_wall(self.position, self.heading) {
            return Err(MoveError::Blocked {
                position: self.position,
                heading: self.heading,
            });
        }
        self.position = self.position.step(self.heading);
        Ok(self.position)
    }
}
