//! Episode scoring.

/// Score of an episode: a quarter of the exploration steps plus the length
/// of the final path in cells. Lower is better.
#[inline]
pub fn episode_score(exploration_steps: usize, path_length: usize) -> f32 {
    exploration_steps as f32 / 4.0 + path_length as f32
}
