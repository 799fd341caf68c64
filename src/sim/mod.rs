//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering, audio or storage dependencies (collaborators sit behind traits)

pub mod level;
pub mod pipeline;
pub mod probe;
pub mod shake;
pub mod state;
pub mod tick;
pub mod tween;

pub use level::{LevelGenerator, Platform};
pub use pipeline::{Outcome, Pipeline};
pub use probe::{CollisionProbe, LevelProbe, SurfaceHit, SurfaceKind, has_support, support_below};
pub use shake::CameraShake;
pub use state::{Camera, GameEvent, GamePhase, GameState, Player, Stick};
pub use tick::{TickInput, tick};
pub use tween::{Angle, Lerp, Step, Tween};
