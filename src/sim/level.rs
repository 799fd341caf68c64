//! Procedural platform placement
//!
//! Platforms are placed left to right at a forward-only spawn cursor. Width is
//! randomized separately, once the platform's neighbour is known, so it never
//! outgrows the gap the player has to bridge.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// A platform the player can stand on (centre x and full width)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub width: f32,
}

impl Platform {
    #[inline]
    pub fn left(&self) -> f32 {
        self.x - self.width * 0.5
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width * 0.5
    }

    #[inline]
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }
}

/// Bounds copied out of `GameConfig` plus the spawn cursor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelGenerator {
    cursor: f32,
    default_width: f32,
    min_width: f32,
    max_width: f32,
    gap_min: f32,
    gap_max: f32,
    clearance_margin: f32,
}

impl LevelGenerator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            cursor: config.start_x,
            default_width: config.default_width,
            min_width: config.min_width,
            max_width: config.max_width,
            gap_min: config.gap_min,
            gap_max: config.gap_max,
            clearance_margin: config.clearance_margin,
        }
    }

    /// Where the next platform will be placed
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    /// Place a default-width platform at the cursor, then advance the cursor
    /// by a random gap plus half a default width.
    pub fn create_next<R: Rng>(&mut self, rng: &mut R) -> Platform {
        let platform = Platform {
            x: self.cursor,
            width: self.default_width,
        };
        let gap = if self.gap_max > self.gap_min {
            rng.random_range(self.gap_min..self.gap_max)
        } else {
            self.gap_min
        };
        self.cursor += gap + self.default_width * 0.5;
        log::debug!("Platform at {:.2}, cursor -> {:.2}", platform.x, self.cursor);
        platform
    }

    /// Room left for `next` once the current platform and clearance are taken out
    pub fn available_gap(&self, current: &Platform, next: &Platform) -> f32 {
        next.x - current.x - current.width * 0.5 - self.clearance_margin
    }

    /// Randomize `next`'s width inside [min_width, min(max_width, available gap)]
    pub fn resize_latest<R: Rng>(&self, current: &Platform, next: &Platform, rng: &mut R) -> Platform {
        let upper = self.available_gap(current, next).min(self.max_width);
        let width = if upper > self.min_width {
            rng.random_range(self.min_width..upper)
        } else {
            self.min_width
        };
        Platform {
            x: next.x,
            width: width.max(self.min_width),
        }
    }
}
