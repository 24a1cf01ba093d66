//! Collision detection for the bird
//!
//! The bird is a circle; pipe segments are axis-aligned rectangles. The
//! closest point on a rectangle is the circle center clamped into it, so a
//! hit is just a squared-distance compare against the radius.

use glam::Vec2;

use super::config::SimConfig;
use super::state::{Bird, CrashCause, Pipe};

/// Axis-aligned rectangle (screen space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Rectangle from its top-left corner and size
    pub fn from_origin_size(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    /// Point on or inside the rectangle nearest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.max(self.min).min(self.max)
    }
}

/// Circle vs rectangle overlap; touching counts as a hit
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// Upper and lower segments of a pipe
pub fn pipe_rects(pipe: &Pipe, cfg: &SimConfig) -> (Rect, Rect) {
    let upper = Rect::from_origin_size(pipe.x, 0.0, cfg.pipe_width, pipe.top_height);
    let lower = Rect::from_origin_size(
        pipe.x,
        pipe.bottom_y,
        cfg.pipe_width,
        cfg.ground_y() - pipe.bottom_y,
    );
    (upper, lower)
}

/// Whether the bird overlaps either segment of a pipe
pub fn bird_hits_pipe(bird: &Bird, pipe: &Pipe, cfg: &SimConfig) -> bool {
    let (upper, lower) = pipe_rects(pipe, cfg);
    circle_rect_overlap(bird.pos, bird.radius, &upper)
        || circle_rect_overlap(bird.pos, bird.radius, &lower)
}

/// Ground or ceiling contact (touching counts)
pub fn boundary_violation(bird: &Bird, cfg: &SimConfig) -> Option<CrashCause> {
    if bird.pos.y + bird.radius >= cfg.ground_y() {
        Some(CrashCause::Ground)
    } else if bird.pos.y - bird.radius <= 0.0 {
        Some(CrashCause::Ceiling)
    } else {
        None
    }
}
