//! Fixed timestep simulation tick
//!
//! One call per frame: handles pause, samples the press, grows the stick and
//! advances whatever timed sequences are in flight.

use super::pipeline::{self, Outcome};
use super::probe::CollisionProbe;
use super::state::{GameEvent, GamePhase, GameState};
use super::tween::Step;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Press began this tick (mouse down / touch start / space)
    pub press: bool,
    /// Press is being held
    pub held: bool,
    /// Pause toggle
    pub pause: bool,
}

impl TickInput {
    /// First tick of a press
    pub fn press() -> Self {
        Self {
            press: true,
            held: true,
            ..Default::default()
        }
    }

    /// Holding an earlier press
    pub fn hold() -> Self {
        Self {
            held: true,
            ..Default::default()
        }
    }

    pub fn pause() -> Self {
        Self {
            pause: true,
            ..Default::default()
        }
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, probe: &dyn CollisionProbe) -> Option<Outcome> {
    // Handle pause toggle
    if input.pause {
        state.toggle_pause();
    }

    // Frozen: nothing moves, nothing is sampled
    if state.phase == GamePhase::Paused {
        return None;
    }

    state.time_ticks += 1;
    advance_effects(state, dt);

    match state.phase {
        GamePhase::Start | GamePhase::GameOver | GamePhase::Paused => None,
        GamePhase::Input => {
            state.player.is_moving = false;
            if input.press {
                state.events.push(GameEvent::Tap);
                state.phase = GamePhase::Growing;
                grow_stick(state, dt);
            }
            None
        }
        GamePhase::Growing => {
            state.player.is_moving = false;
            if input.held {
                grow_stick(state, dt);
            } else {
                pipeline::begin(state);
            }
            None
        }
        GamePhase::Resolving => pipeline::advance(state, dt, probe),
    }
}

fn grow_stick(state: &mut GameState, dt: f32) {
    let config = &state.config;
    state
        .stick
        .grow(config.stick_growth_rate, dt, config.max_stick_length);
}

/// Camera shake and the falling player run alongside the phase logic and
/// outlive the pipeline that started them.
fn advance_effects(state: &mut GameState, dt: f32) {
    if let Some(shake) = state.camera_shake.as_mut() {
        let step = shake.advance(dt, &mut state.rng);
        state.camera.pos = step.value();
        if let Step::Done(_) = step {
            state.camera_shake = None;
        }
    }

    if state.player.falling {
        state.player.fall_speed += state.config.fall_gravity * dt;
        state.player.pos.y -= state.player.fall_speed * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::consts::SIM_DT;
    use crate::records::Records;
    use crate::sim::probe::LevelProbe;

    fn started(config: GameConfig, seed: u64) -> GameState {
        let mut state = GameState::new(config, seed, Records::default());
        state.start();
        state
    }

    fn probe_for(state: &GameState) -> LevelProbe {
        LevelProbe::new(state.platforms(), state.config.stick_y)
    }

    #[test]
    fn test_start_phase_ignores_input() {
        let mut state = GameState::new(GameConfig::default(), 1, Records::default());
        let probe = probe_for(&state);
        tick(&mut state, &TickInput::press(), SIM_DT, &probe);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.stick.length, 0.0);
    }

    #[test]
    fn test_growth_clamps_at_max() {
        let config = GameConfig {
            stick_growth_rate: 2.0,
            max_stick_length: 5.0,
            ..Default::default()
        };
        let mut state = started(config, 1);
        let probe = probe_for(&state);

        tick(&mut state, &TickInput::press(), 1.0, &probe);
        assert_eq!(state.phase, GamePhase::Growing);
        assert_eq!(state.stick.length, 2.0);
        tick(&mut state, &TickInput::hold(), 1.0, &probe);
        tick(&mut state, &TickInput::hold(), 1.0, &probe);
        assert_eq!(state.stick.length, 5.0);
        assert!(state.drain_events().contains(&GameEvent::Tap));
    }

    #[test]
    fn test_release_starts_pipeline_and_ignores_taps() {
        let mut state = started(GameConfig::default(), 2);
        let probe = probe_for(&state);
        tick(&mut state, &TickInput::press(), SIM_DT, &probe);
        tick(&mut state, &TickInput::default(), SIM_DT, &probe);
        assert_eq!(state.phase, GamePhase::Resolving);
        assert!(state.pipeline.is_some());

        let length = state.stick.length;
        tick(&mut state, &TickInput::press(), SIM_DT, &probe);
        assert_eq!(state.phase, GamePhase::Resolving);
        assert_eq!(state.stick.length, length);

        // Pause is refused mid-pipeline
        tick(&mut state, &TickInput::pause(), SIM_DT, &probe);
        assert_eq!(state.phase, GamePhase::Resolving);
    }

    #[test]
    fn test_pause_is_lossless() {
        let mut state = started(GameConfig::default(), 5);
        let probe = probe_for(&state);
        tick(&mut state, &TickInput::press(), SIM_DT, &probe);
        tick(&mut state, &TickInput::hold(), SIM_DT, &probe);

        tick(&mut state, &TickInput::pause(), SIM_DT, &probe);
        assert_eq!(state.phase, GamePhase::Paused);
        let frozen = (state.stick, state.player, state.camera, state.score, state.time_ticks);
        for _ in 0..30 {
            tick(&mut state, &TickInput::hold(), SIM_DT, &probe);
        }
        assert_eq!(
            (state.stick, state.player, state.camera, state.score, state.time_ticks),
            frozen
        );

        // Resume waits for a fresh tap, then grows from the stored length
        tick(&mut state, &TickInput { pause: true, held: true, press: false }, SIM_DT, &probe);
        assert_eq!(state.phase, GamePhase::Input);
        assert_eq!(state.stick.length, frozen.0.length);
        tick(&mut state, &TickInput::press(), SIM_DT, &probe);
        assert_eq!(state.phase, GamePhase::Growing);
        assert!(state.stick.length > frozen.0.length);
    }

    #[test]
    fn test_release_during_pause_does_not_lay_bridge() {
        let mut state = started(GameConfig::default(), 5);
        let probe = probe_for(&state);
        tick(&mut state, &TickInput::press(), SIM_DT, &probe);
        tick(&mut state, &TickInput::hold(), SIM_DT, &probe);
        tick(&mut state, &TickInput::pause(), SIM_DT, &probe);
        let length = state.stick.length;

        // Pointer came up on the pause button; nothing is held on resume
        tick(&mut state, &TickInput::pause(), SIM_DT, &probe);
        assert_ne!(state.phase, GamePhase::Resolving);
        assert_eq!(state.phase, GamePhase::Input);
        assert!(state.pipeline.is_none());
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), SIM_DT, &probe);
        }
        assert_eq!(state.phase, GamePhase::Input);
        assert_eq!(state.stick.length, length);

        tick(&mut state, &TickInput::press(), SIM_DT, &probe);
        tick(&mut state, &TickInput::hold(), SIM_DT, &probe);
        assert!(state.stick.length > length);
        tick(&mut state, &TickInput::default(), SIM_DT, &probe);
        assert_eq!(state.phase, GamePhase::Resolving);
    }

    #[test]
    fn test_full_turn_success() {
        let mut state = started(GameConfig::default(), 8);
        let probe = probe_for(&state);
        let next = state.next.unwrap();
        let needed = next.x - state.stick.x;

        tick(&mut state, &TickInput::press(), SIM_DT, &probe);
        while state.stick.length < needed {
            tick(&mut state, &TickInput::hold(), SIM_DT, &probe);
        }
        let mut outcome = None;
        for _ in 0..1000 {
            outcome = tick(&mut state, &TickInput::default(), SIM_DT, &probe);
            if outcome.is_some() {
                break;
            }
        }
        assert_eq!(outcome, Some(Outcome::Crossed));
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::Input);
    }

    #[test]
    fn test_miss_ends_game_and_shake_settles() {
        let mut state = started(GameConfig::default(), 8);
        let probe = probe_for(&state);
        let camera_before = state.camera.pos;

        tick(&mut state, &TickInput::press(), SIM_DT, &probe);
        let mut outcome = None;
        for _ in 0..1000 {
            outcome = tick(&mut state, &TickInput::default(), SIM_DT, &probe);
            if outcome.is_some() {
                break;
            }
        }
        assert_eq!(outcome, Some(Outcome::Fell));
        assert_eq!(state.phase, GamePhase::GameOver);

        let y_at_game_over = state.player.pos.y;
        for _ in 0..120 {
            tick(&mut state, &TickInput::press(), SIM_DT, &probe);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.camera_shake.is_none());
        assert_eq!(state.camera.pos, camera_before);
        assert!(state.player.pos.y < y_at_game_over);
    }

    #[test]
    fn test_determinism() {
        let run = |seed| {
            let mut state = started(GameConfig::default(), seed);
            for _ in 0..3 {
                let probe = probe_for(&state);
                tick(&mut state, &TickInput::press(), SIM_DT, &probe);
                for _ in 0..40 {
                    tick(&mut state, &TickInput::hold(), SIM_DT, &probe);
                }
                for _ in 0..200 {
                    tick(&mut state, &TickInput::default(), SIM_DT, &probe);
                }
            }
            state
        };
        let a = run(99);
        let b = run(99);
        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.score, b.score);
        assert_eq!(a.current, b.current);
        assert_eq!(a.next, b.next);
        assert_eq!(a.player, b.player);
    }
}
