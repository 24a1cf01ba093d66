//! Sound cues
//!
//! The simulation reports three moments worth hearing. Playback is
//! fire-and-forget: a failed cue is logged and dropped, never retried.

use thiserror::Error;

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Impulse applied
    Flap,
    /// Pipe cleared
    Score,
    /// Pipe, ground or ceiling contact
    Hit,
}

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output unavailable")]
    Unavailable,
    #[error("failed to schedule {cue:?}: {reason}")]
    Playback { cue: SoundCue, reason: String },
}

/// Anything that can play a cue
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError>;
}

/// No-op sink for native and headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, cue: SoundCue) -> Result<(), AudioError> {
        log::trace!("Sound cue {:?}", cue);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioError, AudioSink, SoundCue};

    /// Master volume for every cue
    const VOLUME: f32 = 0.8;

    /// Procedural tones through the Web Audio API
    pub struct WebAudio {
        ctx: Option<AudioContext>,
    }

    impl Default for WebAudio {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudio {
        pub fn new() -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// One enveloped tone, optionally sweeping to `end_freq`
        fn tone(
            ctx: &AudioContext,
            start_freq: f32,
            end_freq: f32,
            osc_type: OscillatorType,
            vol: f32,
            delay: f64,
            duration: f64,
        ) -> Option<()> {
            let (osc, gain) = Self::create_osc(ctx, start_freq, osc_type)?;
            let t = ctx.current_time() + delay;

            gain.gain().set_value_at_time(vol, t).ok()?;
            gain.gain().exponential_ramp_to_value_at_time(0.01, t + duration).ok()?;
            if end_freq != start_freq {
                osc.frequency().set_value_at_time(start_freq, t).ok()?;
                osc.frequency()
                    .exponential_ramp_to_value_at_time(end_freq, t + duration * 0.8)
                    .ok()?;
            }

            osc.start_with_when(t).ok()?;
            osc.stop_with_when(t + duration + 0.05).ok()?;
            Some(())
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, cue: SoundCue) -> Result<(), AudioError> {
            let Some(ctx) = &self.ctx else {
                return Err(AudioError::Unavailable);
            };

            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let vol = VOLUME;
            let scheduled = match cue {
                // Quick upward chirp
                SoundCue::Flap => {
                    Self::tone(ctx, 300.0, 700.0, OscillatorType::Triangle, vol * 0.3, 0.0, 0.12)
                }
                // Two-note ding
                SoundCue::Score => {
                    let sine = OscillatorType::Sine;
                    let low = Self::tone(ctx, 880.0, 880.0, sine, vol * 0.3, 0.0, 0.08);
                    let high = Self::tone(ctx, 1320.0, 1320.0, sine, vol * 0.3, 0.08, 0.12);
                    low.and(high)
                }
                // Low thud
                SoundCue::Hit => {
                    Self::tone(ctx, 160.0, 50.0, OscillatorType::Square, vol * 0.4, 0.0, 0.25)
                }
            };

            scheduled.ok_or(AudioError::Playback {
                cue,
                reason: "web audio node setup failed".into(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_audio_never_fails() {
        let mut audio = SilentAudio;
        for cue in [SoundCue::Flap, SoundCue::Score, SoundCue::Hit] {
            assert!(audio.play(cue).is_ok());
        }
    }

    #[test]
    fn test_error_messages() {
        let err = AudioError::Playback {
            cue: SoundCue::Hit,
            reason: "boom".into(),
        };
        assert_eq!(err.to_string(), "failed to schedule Hit: boom");
        assert_eq!(AudioError::Unavailable.to_string(), "audio output unavailable");
    }
}
