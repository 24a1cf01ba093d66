//! Read-only view of a session for renderers
//!
//! Renderers get an owned copy, so nothing they do can reach back into the
//! simulation.

use serde::Serialize;

use super::config::SimConfig;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirdView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// Rotation hint in radians
    pub tilt: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipeView {
    pub x: f32,
    pub width: f32,
    pub top_height: f32,
    pub bottom_y: f32,
    pub bottom_height: f32,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub frame: u64,
    pub bird: BirdView,
    pub pipes: Vec<PipeView>,
    pub field_width: f32,
    pub field_height: f32,
    pub ground_y: f32,
    pub ground_offset: f32,
    pub score: u32,
    pub best: u32,
}

impl Snapshot {
    pub fn capture(state: &GameState, cfg: &SimConfig) -> Self {
        let ground_y = cfg.ground_y();
        Self {
            phase: state.phase,
            frame: state.frame,
            bird: BirdView {
                x: state.bird.pos.x,
                y: state.bird.pos.y,
                radius: state.bird.radius,
                tilt: state.bird.tilt(),
            },
            pipes: state
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    width: cfg.pipe_width,
                    top_height: p.top_height,
                    bottom_y: p.bottom_y,
                    bottom_height: ground_y - p.bottom_y,
                })
                .collect(),
            field_width: cfg.field_width,
            field_height: cfg.field_height,
            ground_y,
            ground_offset: state.ground_offset,
            score: state.score,
            best: state.best,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Pipe;

    #[test]
    fn test_capture_reflects_state() {
        let cfg = SimConfig::default();
        let mut state = GameState::new(&cfg, 12);
        state.score = 3;
        state.bird.vy = 10.0;
        state.pipes.push(Pipe {
            x: 120.0,
            top_height: 100.0,
            bottom_y: 240.0,
            passed: false,
        });

        let snap = Snapshot::capture(&state, &cfg);
        assert_eq!(snap.phase, GamePhase::Ready);
        assert_eq!(snap.score, 3);
        assert_eq!(snap.best, 12);
        assert_eq!(snap.bird.x, 80.0);
        assert!((snap.bird.tilt - 0.3).abs() < 0.0001);
        assert_eq!(snap.pipes.len(), 1);
        assert_eq!(snap.pipes[0].bottom_height, 320.0);
        assert_eq!(snap.ground_y, 560.0);
    }

    #[test]
    fn test_json_shape() {
        let cfg = SimConfig::default();
        let state = GameState::new(&cfg, 0);
        let json = Snapshot::capture(&state, &cfg).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Ready");
        assert_eq!(value["bird"]["radius"], 14.0);
        assert!(value["pipes"].as_array().unwrap().is_empty());
    }
}
