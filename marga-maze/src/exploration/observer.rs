//! Frame observation hooks.

use crate::agent::Agent;
use crate::core::GridCoord;
use crate::topology::MazeTopology;
use crate::wavefront::WavefrontField;

/// Snapshot handed to observers after each step.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Step index used to name the frame
    pub index: usize,
    /// Topology to draw (mental map or ground truth)
    pub topology: &'a MazeTopology,
    /// Agent pose, if it should be drawn
    pub agent: Option<Agent>,
    /// Goal cell
    pub goal: GridCoord,
    /// Wavefront to annotate cells with
    pub wavefront: Option<&'a WavefrontField>,
    /// Cells to highlight (visited cells, a path)
    pub highlight: &'a [GridCoord],
}

/// Receives frames during an episode. Side effects only.
pub trait ExplorationObserver {
    /// Called once per frame.
    fn on_frame(&mut self, frame: &Frame<'_>);
}

/// Observer that ignores every frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl ExplorationObserver for NoopObserver {
    fn on_frame(&mut self, _frame: &Frame<'_>) {}
}
