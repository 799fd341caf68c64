//! Platform abstraction layer
//!
//! Handles the host-side plumbing between raw frames/events and the fixed
//! step simulation:
//! - Frame time accumulation into fixed ticks
//! - Input latching (one-shot edges vs held state)
//! - Browser entry point (wasm32 only)

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::session::Session;
use crate::sim::TickInput;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Collects raw press/release/pause events between ticks
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    pressed: bool,
    press_edge: bool,
    pause_edge: bool,
}

impl InputLatch {
    pub fn press(&mut self) {
        if !self.pressed {
            self.press_edge = true;
        }
        self.pressed = true;
    }

    pub fn release(&mut self) {
        self.pressed = false;
    }

    pub fn request_pause(&mut self) {
        self.pause_edge = true;
    }

    /// Input for the next tick. One-shot edges are cleared; a press that was
    /// released before the tick still counts as a tap.
    pub fn take(&mut self) -> TickInput {
        let input = TickInput {
            press: self.press_edge,
            held: self.pressed || self.press_edge,
            pause: self.pause_edge,
        };
        self.press_edge = false;
        self.pause_edge = false;
        input
    }
}

/// Turns variable frame times into fixed `SIM_DT` ticks
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame. Returns how many ticks were run.
    pub fn advance(&mut self, frame_dt: f32, session: &mut Session, input: &mut InputLatch) -> u32 {
        let dt = frame_dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let tick_input = input.take();
            session.tick(&tick_input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop backlog we couldn't catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }
}
