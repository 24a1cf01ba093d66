//! Session owner
//!
//! `Game` holds the simulation state together with its collaborators and
//! forwards simulation events to them. Collaborator failures are logged and
//! otherwise ignored; they never feed back into the simulation.

use crate::audio::{AudioSink, SoundCue};
use crate::persistence::ScoreStore;
use crate::sim::{
    ConfigError, GameEvent, GameState, RandomSource, SimConfig, Snapshot, flap, tick,
};

pub struct Game {
    state: GameState,
    config: SimConfig,
    rng: Box<dyn RandomSource>,
    store: Box<dyn ScoreStore>,
    audio: Box<dyn AudioSink>,
}

impl Game {
    /// Validate the configuration, read the stored best once and start in `Ready`
    pub fn new(
        config: SimConfig,
        rng: Box<dyn RandomSource>,
        store: Box<dyn ScoreStore>,
        audio: Box<dyn AudioSink>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let best = match store.load_best() {
            Ok(best) => best,
            Err(e) => {
                log::warn!("Could not read best score, starting from 0: {}", e);
                0
            }
        };
        log::info!("Game ready (best {})", best);

        Ok(Self {
            state: GameState::new(&config, best),
            config,
            rng,
            store,
            audio,
        })
    }

    /// Control input: start, flap or restart depending on phase
    pub fn flap(&mut self) {
        flap(&mut self.state, &self.config);
        self.dispatch_events();
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        tick(&mut self.state, &self.config, self.rng.as_mut());
        self.dispatch_events();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.config)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Started => log::info!("Run started"),
                GameEvent::Flapped => self.cue(SoundCue::Flap),
                GameEvent::Scored { score } => {
                    log::debug!("Scored {}", score);
                    self.cue(SoundCue::Score);
                }
                GameEvent::NewBest { best } => {
                    if let Err(e) = self.store.save_best(best) {
                        log::warn!("Could not save best score {}: {}", best, e);
                    }
                }
                GameEvent::Crashed { cause } => {
                    log::info!(
                        "Run over: {:?} at frame {} (score {}, best {})",
                        cause,
                        self.state.frame,
                        self.state.score,
                        self.state.best
                    );
                    self.cue(SoundCue::Hit);
                }
                GameEvent::Reset => log::info!("Reset to ready"),
            }
        }
    }

    fn cue(&mut self, cue: SoundCue) {
        if let Err(e) = self.audio.play(cue) {
            log::debug!("Dropped sound cue: {}", e);
        }
    }
}
