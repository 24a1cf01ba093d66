//! Demo mode controller
//!
//! Plays the game by flapping whenever the bird sinks below an aim point
//! inside the next gap. Good enough for attract screens and headless runs.

use super::config::SimConfig;
use super::state::{GamePhase, GameState};

/// How far below the gap center to aim (a flap carries the bird ~60px up)
const AIM_BELOW_CENTER: f32 = 20.0;

/// Height the bird should hover around right now
pub fn aim_y(state: &GameState, cfg: &SimConfig) -> f32 {
    let back_edge = state.bird.back_edge_x();
    state
        .pipes
        .iter()
        .find(|p| p.right_edge(cfg.pipe_width) >= back_edge)
        .map(|p| p.top_height + cfg.pipe_gap / 2.0 + AIM_BELOW_CENTER)
        .unwrap_or(cfg.ground_y() / 2.0 + AIM_BELOW_CENTER)
}

/// Whether to flap this frame
pub fn should_flap(state: &GameState, cfg: &SimConfig) -> bool {
    match state.phase {
        GamePhase::Ready => true,
        GamePhase::Playing => state.bird.pos.y > aim_y(state, cfg),
        GamePhase::GameOver => false,
    }
}
