//! Flappy - a gated-obstacle arcade flyer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `game`: Session owner that wires the simulation to its collaborators
//! - `persistence`: Best-score storage (file on native, LocalStorage on web)
//! - `audio`: Fire-and-forget sound cues

pub mod audio;
pub mod game;
pub mod persistence;
pub mod sim;

pub use audio::{AudioError, AudioSink, SilentAudio, SoundCue};
pub use game::Game;
pub use persistence::{BEST_SCORE_KEY, MemoryStore, ScoreStore, StoreError};
pub use sim::{GamePhase, SimConfig, Snapshot};

/// Game configuration constants
///
/// Units are logical pixels and ticks (one tick per display refresh).
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 360.0;
    pub const FIELD_HEIGHT: f32 = 640.0;
    /// Height of the ground strip at the bottom of the field
    pub const GROUND_HEIGHT: f32 = 80.0;
    /// Ground tile width (scroll offset wraps at this)
    pub const GROUND_TILE_WIDTH: f32 = 48.0;

    /// Bird defaults
    pub const BIRD_X: f32 = 80.0;
    pub const BIRD_RADIUS: f32 = 14.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.45;
    /// Vertical velocity set by a flap (negative = up)
    pub const FLAP_VELOCITY: f32 = -7.6;

    /// Pipe geometry
    pub const PIPE_GAP: f32 = 140.0;
    pub const PIPE_WIDTH: f32 = 60.0;
    /// Minimum distance between the split point and the field top/ground
    pub const PIPE_SPLIT_MARGIN: f32 = 60.0;
    /// Pipes spawn this far past the right edge
    pub const PIPE_SPAWN_OFFSET: f32 = 10.0;
    /// Pipes are dropped once their right edge is this far past the left edge
    pub const PIPE_DESPAWN_MARGIN: f32 = 40.0;
    /// Ticks between spawns
    pub const PIPE_SPAWN_INTERVAL: u64 = 110;

    /// Horizontal speed ramp
    pub const BASE_SPEED: f32 = 2.2;
    pub const SPEED_STEP: f32 = 0.2;
    pub const MAX_SPEED: f32 = 4.2;
    pub const SPEED_RAMP_INTERVAL: u64 = 600;

    /// Tilt hint bounds (radians) and velocity scale
    pub const TILT_PER_VELOCITY: f32 = 0.03;
    pub const TILT_MIN: f32 = -0.6;
    pub const TILT_MAX: f32 = 0.8;
}
