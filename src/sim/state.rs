//! Game state and core simulation types
//!
//! Everything a run needs to continue deterministically lives here, including
//! the RNG and any in-flight pipeline or camera shake.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{LevelGenerator, Platform};
use super::pipeline::Pipeline;
use super::shake::CameraShake;
use crate::config::GameConfig;
use crate::records::Records;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for `start`
    Start,
    /// Waiting for the player to press
    Input,
    /// Stick growing while the press is held
    Growing,
    /// Fall pipeline running; input ignored
    Resolving,
    /// Time frozen
    Paused,
    /// Run ended
    GameOver,
}

impl GamePhase {
    /// Phases pause may be entered from
    pub fn can_pause(&self) -> bool {
        matches!(self, GamePhase::Input | GamePhase::Growing)
    }
}

/// The bridge for the current turn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stick {
    pub x: f32,
    pub y: f32,
    pub length: f32,
    /// Degrees: 0 upright, -90 lying flat toward the next platform
    pub angle: f32,
}

impl Stick {
    /// Fresh upright stick standing at `platform`'s right edge
    pub fn anchored(platform: &Platform, config: &GameConfig) -> Self {
        Self {
            x: platform.right() - config.stick_edge_margin,
            y: config.stick_y,
            length: 0.0,
            angle: 0.0,
        }
    }

    /// Grow by `rate * dt`, never past `max`
    pub fn grow(&mut self, rate: f32, dt: f32, max: f32) {
        self.length = (self.length + rate * dt).min(max);
    }

    /// X of the far end once the stick lies flat
    #[inline]
    pub fn tip_x(&self) -> f32 {
        self.x + self.length
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    /// Drives the walk animation
    pub is_moving: bool,
    /// Set once the player has stepped off into the gap
    pub falling: bool,
    /// Downward speed while falling
    pub fall_speed: f32,
}

impl Player {
    /// Player standing at `platform`'s right edge
    pub fn on_platform(platform: &Platform, config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(platform.right() - config.player_edge_margin, config.player_y),
            is_moving: false,
            falling: false,
            fall_speed: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub pos: Vec2,
    /// Horizontal distance kept between camera and player
    pub offset_x: f32,
}

/// Lifecycle notifications for audio, animation and UI collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    GameStarted,
    /// Press registered (once per press)
    Tap,
    /// Stick released and starting to fall
    BridgeFall,
    MoveStarted,
    MoveStopped,
    /// Player missed and is falling to their death
    FallToDeath,
    ScoreChanged(u32),
    PlatformSpawned(Platform),
    StickSpawned(Stick),
    Paused,
    Resumed,
    GameOver {
        score: u32,
        high_score: u32,
        new_high_score: bool,
    },
    DiamondsChanged(u32),
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub config: GameConfig,
    pub phase: GamePhase,
    /// Crossings this run
    pub score: u32,
    /// Diamonds and high score (persisted by the session)
    pub records: Records,
    pub level: LevelGenerator,
    /// Platform the player stands on
    pub current: Platform,
    /// Platform to reach; `None` only before the run starts
    pub next: Option<Platform>,
    pub stick: Stick,
    pub player: Player,
    pub camera: Camera,
    /// In-flight fall pipeline (only while Resolving)
    pub pipeline: Option<Pipeline>,
    /// In-flight camera shake, independent of phase
    pub camera_shake: Option<CameraShake>,
    /// Settings gate for camera shake
    pub shake_enabled: bool,
    /// Simulation tick counter (frozen while paused)
    pub time_ticks: u64,
    /// Events raised since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build the title-screen state: first platform, player and stick in place.
    /// Config is expected to be validated already.
    pub fn new(config: GameConfig, seed: u64, records: Records) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut level = LevelGenerator::new(&config);
        let current = level.create_next(&mut rng);
        let player = Player::on_platform(&current, &config);
        let stick = Stick::anchored(&current, &config);
        let camera = Camera {
            pos: config.camera_start,
            offset_x: config.camera_start.x - player.pos.x,
        };

        Self {
            seed,
            rng,
            phase: GamePhase::Start,
            score: 0,
            records,
            level,
            current,
            next: None,
            stick,
            player,
            camera,
            pipeline: None,
            camera_shake: None,
            shake_enabled: true,
            time_ticks: 0,
            events: vec![GameEvent::PlatformSpawned(current), GameEvent::StickSpawned(stick)],
            config,
        }
    }

    /// Start -> Input: spawn and size the platform to reach.
    /// Returns false (and changes nothing) outside the Start phase.
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Start {
            log::warn!("start ignored in phase {:?}", self.phase);
            return false;
        }
        let raw = self.level.create_next(&mut self.rng);
        let next = self.level.resize_latest(&self.current, &raw, &mut self.rng);
        self.next = Some(next);
        self.phase = GamePhase::Input;
        self.events.push(GameEvent::PlatformSpawned(next));
        self.events.push(GameEvent::GameStarted);
        log::info!("Run started (seed {})", self.seed);
        true
    }

    /// Freeze the run. Only allowed while waiting for or holding a press.
    pub fn pause(&mut self) -> bool {
        if !self.phase.can_pause() {
            return false;
        }
        self.phase = GamePhase::Paused;
        self.player.is_moving = false;
        self.events.push(GameEvent::Paused);
        true
    }

    /// Back to Input. The stick keeps its length, so the next tap grows it
    /// further instead of laying it down.
    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Input;
        self.events.push(GameEvent::Resumed);
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.phase == GamePhase::Paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Count a collected diamond
    pub fn add_diamond(&mut self) {
        let total = self.records.add_diamond();
        self.events.push(GameEvent::DiamondsChanged(total));
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Platforms currently in play
    pub fn platforms(&self) -> impl Iterator<Item = Platform> + '_ {
        std::iter::once(self.current).chain(self.next)
    }
}
