//! Exploration trace records.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, Turn};

/// One controller step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEntry {
    /// 1-based step index
    pub step: usize,
    /// Cell the agent occupied before acting
    pub position: GridCoord,
    /// Turns and move, e.g. `"F"`, `"LF"`, `"RF"`, `"LLF"`, `"LL"`
    pub action: String,
}

impl TraceEntry {
    /// Whether the step ended with a forward move.
    pub fn moved(&self) -> bool {
        self.action.ends_with('F')
    }
}

/// Encode executed turns and an optional forward move as an action string.
///
/// Three consecutive left turns are recorded as a single `R`.
pub fn compose_action(turns: &[Turn], moved: bool) -> String {
    let mut action: String = turns.iter().map(|t| t.symbol()).collect();
    action = action.replace("LLL", "R");
    if moved {
        action.push('F');
    }
    action
}
