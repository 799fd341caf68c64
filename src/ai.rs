//! Idle/demo mode - a bot that plays the game
//!
//! Aims for the centre of the next platform with a seeded aiming error, so
//! a demo run scores for a while and eventually misses.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GamePhase, GameState, TickInput};

pub struct AutoPlayer {
    rng: Pcg32,
    /// Largest aiming error in world units (0 = perfect play)
    max_error: f32,
    /// Stick length being aimed for this turn
    target: Option<f32>,
}

impl AutoPlayer {
    pub fn new(seed: u64, max_error: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            max_error: max_error.abs(),
            target: None,
        }
    }

    /// Stick length that would land on the next platform's centre
    pub fn ideal_length(state: &GameState) -> Option<f32> {
        state.next.map(|next| (next.x - state.stick.x).max(0.0))
    }

    /// Input for the coming tick
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        match state.phase {
            GamePhase::Input => {
                let Some(ideal) = Self::ideal_length(state) else {
                    return TickInput::default();
                };
                let error = if self.max_error > 0.0 {
                    self.rng.random_range(-self.max_error..=self.max_error)
                } else {
                    0.0
                };
                let target = (ideal + error).clamp(0.0, state.config.max_stick_length);
                log::debug!("Aiming for {:.2} (ideal {:.2})", target, ideal);
                self.target = Some(target);
                TickInput::press()
            }
            GamePhase::Growing => match self.target {
                Some(target) if state.stick.length < target => TickInput::hold(),
                _ => {
                    self.target = None;
                    TickInput::default()
                }
            },
            _ => TickInput::default(),
        }
    }
}
