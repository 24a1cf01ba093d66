//! Pipe generation and difficulty ramp

use super::config::SimConfig;
use super::rng::RandomSource;
use super::state::Pipe;

/// Whether a pipe is due on this frame
#[inline]
pub fn should_spawn(frame: u64, cfg: &SimConfig) -> bool {
    frame.is_multiple_of(cfg.spawn_interval)
}

/// Build a new pipe just past the right edge of the field
///
/// The split point is a whole number drawn uniformly from `split_range()`.
/// Returns `None` when the range is empty, which only happens with a
/// configuration that failed `SimConfig::validate`.
pub fn spawn_pipe(cfg: &SimConfig, rng: &mut dyn RandomSource) -> Option<Pipe> {
    let (min, max) = cfg.split_range();
    if max < min {
        log::error!(
            "Refusing to spawn pipe: split range [{}, {}] is empty",
            min,
            max
        );
        return None;
    }

    let span = (max - min).floor() + 1.0;
    let top_height = (min + (rng.next_f32() * span).floor()).min(max);

    Some(Pipe {
        x: cfg.field_width + cfg.spawn_offset,
        top_height,
        bottom_y: top_height + cfg.pipe_gap,
        passed: false,
    })
}

/// Step the pipe speed up on ramp frames, never past the cap
pub fn ramp_speed(speed: f32, frame: u64, cfg: &SimConfig) -> f32 {
    if frame > 0 && frame.is_multiple_of(cfg.ramp_interval) {
        let next = (speed + cfg.speed_step).min(cfg.max_speed);
        log::debug!("Speed ramp at frame {}: {} -> {}", frame, speed, next);
        next
    } else {
        speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ScriptedRandom, SeededRandom};
    use proptest::prelude::*;

    #[test]
    fn test_spawn_cadence() {
        let cfg = SimConfig::default();
        assert!(!should_spawn(1, &cfg));
        assert!(!should_spawn(109, &cfg));
        assert!(should_spawn(110, &cfg));
        assert!(should_spawn(220, &cfg));
    }

    #[test]
    fn test_spawn_position_and_gap() {
        let cfg = SimConfig::default();
        let mut rng = ScriptedRandom::new(vec![0.5]);
        let pipe = spawn_pipe(&cfg, &mut rng).unwrap();
        assert_eq!(pipe.x, 370.0);
        assert_eq!(pipe.bottom_y - pipe.top_height, cfg.pipe_gap);
        assert!(!pipe.passed);
    }

    #[test]
    fn test_split_extremes() {
        let cfg = SimConfig::default();

        let mut low = ScriptedRandom::new(vec![0.0]);
        let pipe = spawn_pipe(&cfg, &mut low).unwrap();
        assert_eq!(pipe.top_height, 60.0);

        let mut high = ScriptedRandom::new(vec![0.99999]);
        let pipe = spawn_pipe(&cfg, &mut high).unwrap();
        assert_eq!(pipe.top_height, 360.0);
        assert_eq!(pipe.bottom_y, 500.0);
        // Lower segment keeps exactly the margin above the ground
        assert_eq!(cfg.ground_y() - pipe.bottom_y, cfg.split_margin);
    }

    #[test]
    fn test_refuses_empty_range() {
        let cfg = SimConfig {
            pipe_gap: 500.0,
            ..Default::default()
        };
        let mut rng = ScriptedRandom::new(vec![0.3]);
        assert!(spawn_pipe(&cfg, &mut rng).is_none());
    }

    #[test]
    fn test_ramp_only_on_interval() {
        let cfg = SimConfig::default();
        assert_eq!(ramp_speed(2.2, 599, &cfg), 2.2);
        assert!((ramp_speed(2.2, 600, &cfg) - 2.4).abs() < 0.0001);
        assert_eq!(ramp_speed(2.2, 0, &cfg), 2.2);
    }

    #[test]
    fn test_ramp_caps_at_max() {
        let cfg = SimConfig::default();
        let mut speed = cfg.base_speed;
        for frame in 1..=6000 {
            speed = ramp_speed(speed, frame, &cfg);
        }
        assert!(speed <= cfg.max_speed);
        assert!((speed - 4.2).abs() < 0.0001);

        for frame in 6001..=7200 {
            speed = ramp_speed(speed, frame, &cfg);
        }
        assert_eq!(speed, cfg.max_speed);
    }

    proptest! {
        #[test]
        fn split_points_stay_in_bounds(seed in any::<u64>()) {
            let cfg = SimConfig::default();
            let mut rng = SeededRandom::new(seed);
            for _ in 0..64 {
                let pipe = spawn_pipe(&cfg, &mut rng).unwrap();
                prop_assert!(pipe.top_height >= 60.0);
                prop_assert!(pipe.top_height <= 360.0);
                prop_assert_eq!(pipe.top_height.fract(), 0.0);
                prop_assert!(pipe.bottom_y <= cfg.ground_y());
            }
        }
    }
}
