//! Simulation configuration
//!
//! Every tunable lives in `crate::consts`; `SimConfig::default()` gathers them
//! so tests can build variants without touching the constants.

use thiserror::Error;

use crate::consts::*;

/// Misconfiguration detected at startup
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be non-zero")]
    ZeroInterval { field: &'static str },
    #[error("flap velocity must point up (got {0})")]
    FlapNotUpward(f32),
    #[error("max speed {max} is below base speed {base}")]
    SpeedCapBelowBase { base: f32, max: f32 },
    #[error("pipe gap {gap} plus margins {margins} does not fit in {available} of open field")]
    GapDoesNotFit { gap: f32, margins: f32, available: f32 },
}

/// Fixed simulation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub field_width: f32,
    pub field_height: f32,
    pub ground_height: f32,
    pub ground_tile_width: f32,

    pub bird_x: f32,
    pub bird_radius: f32,
    pub gravity: f32,
    pub flap_velocity: f32,

    pub pipe_gap: f32,
    pub pipe_width: f32,
    pub split_margin: f32,
    pub spawn_offset: f32,
    pub despawn_margin: f32,
    pub spawn_interval: u64,

    pub base_speed: f32,
    pub speed_step: f32,
    pub max_speed: f32,
    pub ramp_interval: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            ground_tile_width: GROUND_TILE_WIDTH,

            bird_x: BIRD_X,
            bird_radius: BIRD_RADIUS,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,

            pipe_gap: PIPE_GAP,
            pipe_width: PIPE_WIDTH,
            split_margin: PIPE_SPLIT_MARGIN,
            spawn_offset: PIPE_SPAWN_OFFSET,
            despawn_margin: PIPE_DESPAWN_MARGIN,
            spawn_interval: PIPE_SPAWN_INTERVAL,

            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            max_speed: MAX_SPEED,
            ramp_interval: SPEED_RAMP_INTERVAL,
        }
    }
}

impl SimConfig {
    /// Y coordinate of the top of the ground strip
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.field_height - self.ground_height
    }

    /// Starting height of the bird (middle of the field)
    #[inline]
    pub fn bird_start_y(&self) -> f32 {
        self.field_height / 2.0
    }

    /// Inclusive bounds for the pipe split point (bottom of the upper segment)
    pub fn split_range(&self) -> (f32, f32) {
        let min = self.split_margin;
        let max = self.ground_y() - self.pipe_gap - self.split_margin;
        (min, max)
    }

    /// Check the constants describe a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ground_tile_width", self.ground_tile_width),
            ("bird_radius", self.bird_radius),
            ("gravity", self.gravity),
            ("pipe_gap", self.pipe_gap),
            ("pipe_width", self.pipe_width),
            ("base_speed", self.base_speed),
            ("max_speed", self.max_speed),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("ground_height", self.ground_height),
            ("speed_step", self.speed_step),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        if self.spawn_interval == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "spawn_interval",
            });
        }
        if self.ramp_interval == 0 {
            return Err(ConfigError::ZeroInterval {
                field: "ramp_interval",
            });
        }

        if self.flap_velocity.is_nan() || self.flap_velocity >= 0.0 {
            return Err(ConfigError::FlapNotUpward(self.flap_velocity));
        }

        if self.max_speed < self.base_speed {
            return Err(ConfigError::SpeedCapBelowBase {
                base: self.base_speed,
                max: self.max_speed,
            });
        }

        let available = self.ground_y();
        let margins = 2.0 * self.split_margin;
        if self.split_margin < 0.0 || available - self.pipe_gap - margins < 0.0 {
            return Err(ConfigError::GapDoesNotFit {
                gap: self.pipe_gap,
                margins,
                available,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.ground_y(), 560.0);
        assert_eq!(cfg.bird_start_y(), 320.0);
    }

    #[test]
    fn test_split_range_matches_field() {
        let cfg = SimConfig {
            field_height: 640.0,
            ground_height: 80.0,
            pipe_gap: 140.0,
            split_margin: 60.0,
            ..Default::default()
        };
        // 640 - 80 - 140 - 60
        assert_eq!(cfg.split_range(), (60.0, 360.0));
    }

    #[test]
    fn test_gap_too_large_rejected() {
        let cfg = SimConfig {
            pipe_gap: 450.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_gap_exactly_fitting_accepted() {
        // 560 - 440 - 2*60 == 0: a single legal split point
        let cfg = SimConfig {
            pipe_gap: 440.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
        assert_eq!(cfg.split_range(), (60.0, 60.0));
    }

    #[test]
    fn test_downward_flap_rejected() {
        let cfg = SimConfig {
            flap_velocity: 3.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::FlapNotUpward(3.0)));
    }

    #[test]
    fn test_zero_spawn_interval_rejected() {
        let cfg = SimConfig {
            spawn_interval: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ZeroInterval { field: "spawn_interval" })
        ));
    }

    #[test]
    fn test_nan_speed_cap_rejected() {
        let cfg = SimConfig {
            max_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::NotPositive { field: "max_speed", .. })
        ));

        let cfg = SimConfig {
            max_speed: -1.0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NotPositive {
                field: "max_speed",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_negative_step_and_ground_rejected() {
        let cfg = SimConfig {
            speed_step: -0.2,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Negative {
                field: "speed_step",
                value: -0.2
            })
        );

        let cfg = SimConfig {
            ground_height: -10.0,
            ..Default::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::Negative {
                field: "ground_height",
                value: -10.0
            })
        );

        // A flat speed and no ground strip are still playable
        let cfg = SimConfig {
            speed_step: 0.0,
            ground_height: 0.0,
            ..Default::default()
        };
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn test_speed_cap_below_base_rejected() {
        let cfg = SimConfig {
            max_speed: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::SpeedCapBelowBase { .. })
        ));
    }
}
