//! Browser entry point
//!
//! JS owns the canvas and the requestAnimationFrame loop; it forwards pointer
//! events and frame times here and reads back what to draw.

use wasm_bindgen::prelude::*;

use super::{FixedStep, InputLatch};
use crate::config::GameConfig;
use crate::persistence::{LocalStorageStore, MemoryStore, PersistentStore};
use crate::session::{ContinuityFlag, Session};
use crate::ui::Panel;

const STORAGE_PREFIX: &str = "stick_hero";

#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Stick Hero starting...");
}

#[wasm_bindgen]
pub struct WebGame {
    session: Session,
    step: FixedStep,
    input: InputLatch,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WebGame, JsValue> {
        let store: Box<dyn PersistentStore> = match LocalStorageStore::open(STORAGE_PREFIX) {
            Ok(store) => Box::new(store),
            Err(e) => {
                log::warn!("{} - progress will not be saved", e);
                Box::new(MemoryStore::new())
            }
        };
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(
            GameConfig::default(),
            store,
            Box::new(ContinuityFlag::default()),
            seed,
        )
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            session,
            step: FixedStep::new(),
            input: InputLatch::default(),
        })
    }

    pub fn start(&mut self) {
        self.session.game_start();
    }

    pub fn pointer_down(&mut self) {
        self.input.press();
    }

    pub fn pointer_up(&mut self) {
        self.input.release();
    }

    pub fn toggle_pause(&mut self) {
        self.input.request_pause();
    }

    pub fn restart(&mut self) {
        self.session.game_restart();
    }

    pub fn play_again(&mut self) {
        self.session.scene_restart();
    }

    pub fn collect_diamond(&mut self) {
        self.session.update_diamonds();
    }

    /// Advance by one animation frame (seconds). Returns ticks run.
    pub fn frame(&mut self, dt: f32) -> u32 {
        let ticks = self.step.advance(dt, &mut self.session, &mut self.input);
        // Events were already routed to the store; JS polls state instead
        self.session.drain_events();
        ticks
    }

    pub fn phase(&self) -> String {
        format!("{:?}", self.session.phase())
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn high_score(&self) -> u32 {
        self.session.records().high_score
    }

    pub fn diamonds(&self) -> u32 {
        self.session.records().diamonds
    }

    pub fn paused(&self) -> bool {
        self.session.hud().shows(Panel::Pause)
    }

    /// [player x, player y, camera x, camera y, stick x, stick y, stick length, stick angle]
    pub fn actors(&self) -> Vec<f32> {
        let state = self.session.state();
        vec![
            state.player.pos.x,
            state.player.pos.y,
            state.camera.pos.x,
            state.camera.pos.y,
            state.stick.x,
            state.stick.y,
            state.stick.length,
            state.stick.angle,
        ]
    }

    /// [x, width] per live platform
    pub fn platforms(&self) -> Vec<f32> {
        self.session
            .state()
            .platforms()
            .flat_map(|p| [p.x, p.width])
            .collect()
    }
}
