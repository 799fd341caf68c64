//! Camera shake
//!
//! Jitters around a captured base position for a fixed duration, then hands
//! back exactly the base. If the owner drops a shake early the camera keeps
//! whatever offset it was last given.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::tween::Step;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraShake {
    pub base: Vec2,
    pub duration: f32,
    pub magnitude: f32,
    pub elapsed: f32,
}

impl CameraShake {
    pub fn new(base: Vec2, duration: f32, magnitude: f32) -> Self {
        Self {
            base,
            duration: duration.max(0.0),
            magnitude: magnitude.abs(),
            elapsed: 0.0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Next camera position. `Done(base)` once the duration has run out.
    pub fn advance<R: Rng>(&mut self, dt: f32, rng: &mut R) -> Step<Vec2> {
        if self.is_finished() {
            return Step::Done(self.base);
        }
        let offset = if self.magnitude > 0.0 {
            Vec2::new(
                rng.random_range(-1.0_f32..=1.0) * self.magnitude,
                rng.random_range(-1.0_f32..=1.0) * self.magnitude,
            )
        } else {
            Vec2::ZERO
        };
        self.elapsed += dt.max(0.0);
        Step::Running(self.base + offset)
    }
}
