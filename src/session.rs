//! A play session: one `GameState` plus the collaborators around it
//!
//! The session is what a host loop owns. It loads progress from the store,
//! consults the continuity flag on every load, forwards simulation events to
//! audio and the store, and implements restart.

use rand::RngCore;

use crate::audio::{AudioManager, AudioSink};
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::persistence::PersistentStore;
use crate::records::Records;
use crate::settings::Settings;
use crate::sim::{CollisionProbe, GameEvent, GamePhase, GameState, LevelProbe, Outcome, TickInput, tick};
use crate::ui::Hud;

/// Scene reload collaborator: remembers whether a reload should skip the
/// title screen.
pub trait SessionLoader {
    fn has_scene_started(&self) -> bool;
    fn set_scene_started(&mut self, started: bool);
}

/// In-process continuity flag
#[derive(Debug, Clone, Copy, Default)]
pub struct ContinuityFlag {
    pub started: bool,
}

impl SessionLoader for ContinuityFlag {
    fn has_scene_started(&self) -> bool {
        self.started
    }

    fn set_scene_started(&mut self, started: bool) {
        self.started = started;
    }
}

pub struct Session {
    config: GameConfig,
    state: GameState,
    settings: Settings,
    store: Box<dyn PersistentStore>,
    loader: Box<dyn SessionLoader>,
    probe: Option<Box<dyn CollisionProbe>>,
    audio: AudioManager,
    /// Events already handled here, waiting for the host
    outbox: Vec<GameEvent>,
}

impl Session {
    /// Validate `config` and load the first scene
    pub fn new(
        config: GameConfig,
        store: Box<dyn PersistentStore>,
        loader: Box<dyn SessionLoader>,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let settings = Settings::load(&*store);
        let state = GameState::new(config.clone(), seed, Records::default());
        let mut session = Self {
            config,
            state,
            audio: AudioManager::new(settings.effective_volume()),
            settings,
            store,
            loader,
            probe: None,
            outbox: Vec::new(),
        };
        session.load(seed);
        Ok(session)
    }

    /// Use an engine collision service instead of the built-in level probe
    pub fn with_probe(mut self, probe: Box<dyn CollisionProbe>) -> Self {
        self.probe = Some(probe);
        self
    }

    pub fn attach_audio(&mut self, sink: Box<dyn AudioSink>) {
        self.audio.attach(sink);
    }

    /// (Re)build the scene from the store, resuming play if the continuity
    /// flag is set
    fn load(&mut self, seed: u64) {
        let records = Records::load(&*self.store);
        self.state = GameState::new(self.config.clone(), seed, records);
        self.state.shake_enabled = self.settings.effective_screen_shake();
        self.outbox.clear();
        if self.loader.has_scene_started() {
            self.state.start();
        }
        self.dispatch_events();
    }

    fn reload(&mut self) {
        let seed = self.state.rng.next_u64();
        log::info!("Reloading session (resume: {})", self.loader.has_scene_started());
        self.load(seed);
    }

    /// Title screen -> play. Ignored outside the Start phase.
    pub fn game_start(&mut self) -> bool {
        let started = self.state.start();
        self.dispatch_events();
        started
    }

    /// Full restart back to the title screen
    pub fn game_restart(&mut self) {
        self.loader.set_scene_started(false);
        self.reload();
    }

    /// Restart straight into a new run
    pub fn scene_restart(&mut self) {
        self.loader.set_scene_started(true);
        self.reload();
    }

    /// Advance one fixed step
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Option<Outcome> {
        let outcome = match self.probe.as_deref() {
            Some(probe) => tick(&mut self.state, input, dt, probe),
            None => {
                let probe = LevelProbe::new(self.state.platforms(), self.state.config.stick_y);
                tick(&mut self.state, input, dt, &probe)
            }
        };
        self.dispatch_events();
        outcome
    }

    pub fn pause(&mut self) -> bool {
        let paused = self.state.pause();
        self.dispatch_events();
        paused
    }

    pub fn resume(&mut self) -> bool {
        let resumed = self.state.resume();
        self.dispatch_events();
        resumed
    }

    pub fn toggle_pause(&mut self) -> bool {
        let toggled = self.state.toggle_pause();
        self.dispatch_events();
        toggled
    }

    /// Count a collected diamond and persist the total
    pub fn update_diamonds(&mut self) {
        self.state.add_diamond();
        self.dispatch_events();
    }

    /// Apply and persist new preferences
    pub fn set_settings(&mut self, settings: Settings) {
        if let Err(e) = settings.save(&mut *self.store) {
            log::warn!("Failed to save settings: {}", e);
        }
        self.audio.set_volume(settings.effective_volume());
        self.state.shake_enabled = settings.effective_screen_shake();
        self.settings = settings;
    }

    /// Route pending simulation events to audio and the store
    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            self.audio.handle(&event);
            match event {
                GameEvent::GameOver {
                    new_high_score: true,
                    ..
                } => {
                    if let Err(e) = self.state.records.save_high_score(&mut *self.store) {
                        log::warn!("Failed to save high score: {}", e);
                    }
                }
                GameEvent::DiamondsChanged(_) => {
                    if let Err(e) = self.state.records.save_diamonds(&mut *self.store) {
                        log::warn!("Failed to save diamonds: {}", e);
                    }
                }
                _ => {}
            }
            self.outbox.push(event);
        }
    }

    /// Events raised since the last call, already routed to audio/store
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.outbox)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn records(&self) -> Records {
        self.state.records
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }
}
