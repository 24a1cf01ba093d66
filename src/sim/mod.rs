//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick()` call
//! - Injected random source only
//! - Stable iteration order (pipes in creation order)
//! - No rendering, storage or audio dependencies

pub mod autopilot;
pub mod collision;
pub mod config;
pub mod physics;
pub mod rng;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, boundary_violation, circle_rect_overlap, pipe_rects};
pub use config::{ConfigError, SimConfig};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use snapshot::{BirdView, PipeView, Snapshot};
pub use state::{Bird, CrashCause, GameEvent, GamePhase, GameState, Pipe};
pub use tick::{flap, tick};
