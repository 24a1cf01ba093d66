//! Fixed-step simulation tick
//!
//! Core game loop that advances simulation deterministically. The driver owns
//! cadence: call `tick` once per displayed frame and `flap` on each input.

use super::collision::{bird_hits_pipe, boundary_violation};
use super::config::SimConfig;
use super::physics::{apply_impulse, integrate};
use super::rng::RandomSource;
use super::spawn::{ramp_speed, should_spawn, spawn_pipe};
use super::state::{CrashCause, GameEvent, GamePhase, GameState};

/// Handle one control input
pub fn flap(state: &mut GameState, cfg: &SimConfig) {
    match state.phase {
        GamePhase::Ready => {
            state.phase = GamePhase::Playing;
            state.push_event(GameEvent::Started);
            apply_impulse(&mut state.bird, cfg.flap_velocity);
            state.push_event(GameEvent::Flapped);
        }
        GamePhase::Playing => {
            apply_impulse(&mut state.bird, cfg.flap_velocity);
            state.push_event(GameEvent::Flapped);
        }
        GamePhase::GameOver => {
            state.reset(cfg);
            state.push_event(GameEvent::Reset);
        }
    }
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, cfg: &SimConfig, rng: &mut dyn RandomSource) {
    // Ground keeps scrolling in every phase
    state.ground_offset -= state.speed;
    if state.ground_offset <= -cfg.ground_tile_width {
        state.ground_offset += cfg.ground_tile_width;
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.frame += 1;
    if should_spawn(state.frame, cfg) {
        if let Some(pipe) = spawn_pipe(cfg, rng) {
            log::trace!("Spawned pipe at frame {}: split {}", state.frame, pipe.top_height);
            state.pipes.push(pipe);
        }
    }
    state.speed = ramp_speed(state.speed, state.frame, cfg);

    integrate(&mut state.bird, cfg.gravity);

    // Single pass in creation order: move, score, then collide
    let speed = state.speed;
    let back_edge = state.bird.back_edge_x();
    let mut points = 0;
    let mut hit = false;
    for pipe in &mut state.pipes {
        pipe.x -= speed;

        if !pipe.passed && pipe.center_x(cfg.pipe_width) < back_edge {
            pipe.passed = true;
            points += 1;
        }

        if bird_hits_pipe(&state.bird, pipe, cfg) {
            hit = true;
        }
    }
    // Points are credited before the crash so a same-tick pass still counts
    for _ in 0..points {
        state.award_point();
    }
    if hit {
        state.crash(CrashCause::Pipe);
    }

    state.pipes.retain(|p| p.right_edge(cfg.pipe_width) >= -cfg.despawn_margin);

    if state.phase == GamePhase::Playing {
        if let Some(cause) = boundary_violation(&state.bird, cfg) {
            state.crash(cause);
        }
    }
}
