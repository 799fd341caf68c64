//! Support queries below the player
//!
//! The simulation never does collision itself. It asks a `CollisionProbe`
//! what lies straight down from a point and only cares whether one of the
//! answers is a platform top.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::Platform;

/// What a downward cast hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Top of a platform the player can stand on
    Platform,
    /// Anything else (scenery, pickups, the stick itself)
    Other,
}

/// One result of a downward cast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    pub kind: SurfaceKind,
    pub point: Vec2,
}

/// Downward raycast service (engine physics, or `LevelProbe` below)
pub trait CollisionProbe {
    /// Every surface straight below `origin`, nearest first. Empty if none.
    fn cast_down(&self, origin: Vec2) -> Vec<SurfaceHit>;
}

/// Pick the hit that decides support: a platform wins over anything else.
pub fn support_below(hits: &[SurfaceHit]) -> Option<SurfaceHit> {
    hits.iter()
        .copied()
        .find(|h| h.kind == SurfaceKind::Platform)
        .or_else(|| hits.first().copied())
}

/// True if the probe reports a platform surface under `origin`
pub fn has_support(probe: &dyn CollisionProbe, origin: Vec2) -> bool {
    let hits = probe.cast_down(origin);
    match support_below(&hits) {
        Some(hit) => hit.kind == SurfaceKind::Platform,
        None => false,
    }
}

/// Probe over the live platforms, used when no engine probe is attached
#[derive(Debug, Clone, Default)]
pub struct LevelProbe {
    platforms: Vec<Platform>,
    surface_y: f32,
}

impl LevelProbe {
    pub fn new(platforms: impl IntoIterator<Item = Platform>, surface_y: f32) -> Self {
        Self {
            platforms: platforms.into_iter().collect(),
            surface_y,
        }
    }
}

impl CollisionProbe for LevelProbe {
    fn cast_down(&self, origin: Vec2) -> Vec<SurfaceHit> {
        if origin.y < self.surface_y {
            return Vec::new();
        }
        self.platforms
            .iter()
            .filter(|p| p.contains_x(origin.x))
            .map(|_| SurfaceHit {
                kind: SurfaceKind::Platform,
                point: Vec2::new(origin.x, self.surface_y),
            })
            .collect()
    }
}
