//! Game state and core simulation types
//!
//! Everything a session needs lives in `GameState`; there is no ambient state.

use glam::Vec2;
use serde::Serialize;

use super::config::SimConfig;
use crate::consts::{TILT_MAX, TILT_MIN, TILT_PER_VELOCITY};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GamePhase {
    /// Waiting for the first flap
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended, snapshot frozen until the next flap
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    Pipe,
    Ground,
    Ceiling,
}

/// Things that happened during a flap or tick, drained by the session owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ready -> Playing
    Started,
    /// Impulse applied
    Flapped,
    /// A pipe was cleared
    Scored { score: u32 },
    /// Best score raised (needs persisting)
    NewBest { best: u32 },
    /// Playing -> GameOver
    Crashed { cause: CrashCause },
    /// GameOver -> Ready
    Reset,
}

/// The player-controlled bird
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    /// Center position; `x` never changes during a session
    pub pos: Vec2,
    /// Vertical velocity (positive = down)
    pub vy: f32,
    pub radius: f32,
}

impl Bird {
    pub fn new(cfg: &SimConfig) -> Self {
        Self {
            pos: Vec2::new(cfg.bird_x, cfg.bird_start_y()),
            vy: 0.0,
            radius: cfg.bird_radius,
        }
    }

    /// Left edge of the circle; a pipe scores once its center is behind this
    #[inline]
    pub fn back_edge_x(&self) -> f32 {
        self.pos.x - self.radius
    }

    /// Rotation hint for renderers (radians, nose down is positive)
    pub fn tilt(&self) -> f32 {
        (self.vy * TILT_PER_VELOCITY).clamp(TILT_MIN, TILT_MAX)
    }
}

/// A gated pipe pair
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    /// Height of the upper segment (the split point)
    pub top_height: f32,
    /// Where the lower segment starts
    pub bottom_y: f32,
    /// Already counted toward the score
    pub passed: bool,
}

impl Pipe {
    #[inline]
    pub fn center_x(&self, width: f32) -> f32 {
        self.x + width / 2.0
    }

    #[inline]
    pub fn right_edge(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Playing ticks elapsed this session
    pub frame: u64,
    pub score: u32,
    /// Highest score ever seen (survives resets)
    pub best: u32,
    /// Current horizontal pipe speed
    pub speed: f32,
    /// Ground scroll offset in `(-tile, 0]` (presentation only)
    pub ground_offset: f32,
    pub bird: Bird,
    /// Active pipes in creation order
    pub pipes: Vec<Pipe>,
    /// Pending events since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh session in `Ready`, carrying over a known best score
    pub fn new(cfg: &SimConfig, best: u32) -> Self {
        Self {
            phase: GamePhase::Ready,
            frame: 0,
            score: 0,
            best,
            speed: cfg.base_speed,
            ground_offset: 0.0,
            bird: Bird::new(cfg),
            pipes: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Restore every per-session value; `best` is kept
    pub fn reset(&mut self, cfg: &SimConfig) {
        *self = Self::new(cfg, self.best);
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Credit one point, raising the best score if needed
    pub(crate) fn award_point(&mut self) {
        self.score += 1;
        self.push_event(GameEvent::Scored { score: self.score });
        if self.score > self.best {
            self.best = self.score;
            self.push_event(GameEvent::NewBest { best: self.best });
        }
    }

    /// End the run (no-op if it already ended)
    pub(crate) fn crash(&mut self, cause: CrashCause) {
        if self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
            self.push_event(GameEvent::Crashed { cause });
        }
    }
}
