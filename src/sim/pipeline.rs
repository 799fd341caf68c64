//! Turn resolution pipeline
//!
//! Once the press is released the turn plays out as a fixed sequence:
//!
//! ```text
//! LayBridge -> CrossBridge -> probe -+-> WalkToEdge -> PanCamera -> (Input)
//!                                    +-> Collapse -> (GameOver)
//! ```
//!
//! Each step owns its tween and is advanced once per tick. A step's target is
//! computed from the state the previous step left behind, so the steps can't
//! overlap. The probe is instantaneous and runs on the tick the crossing ends.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::probe::{CollisionProbe, has_support};
use super::shake::CameraShake;
use super::state::{GameEvent, GamePhase, GameState, Stick};
use super::tween::{Angle, Tween};

/// How a resolved turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Crossed,
    Fell,
}

/// The step currently in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Pipeline {
    /// Stick rotating from upright to flat
    LayBridge(Tween<Angle>),
    /// Player walking to the stick's tip
    CrossBridge(Tween<Vec2>),
    /// Missed: stick tipping into the gap
    Collapse(Tween<Angle>),
    /// Made it: player walking to the far edge of the new platform
    WalkToEdge(Tween<Vec2>),
    /// Camera re-centring on the player
    PanCamera(Tween<Vec2>),
}

/// Growing -> Resolving: start laying the bridge
pub fn begin(state: &mut GameState) {
    let config = &state.config;
    let tween = Tween::new(
        Angle(state.stick.angle),
        Angle(config.fall_angle),
        config.stick_fall_duration,
    );
    log::debug!("Stick released at length {:.2}", state.stick.length);
    state.pipeline = Some(Pipeline::LayBridge(tween));
    state.phase = GamePhase::Resolving;
    state.events.push(GameEvent::BridgeFall);
}

/// Advance the in-flight step by `dt`. Returns the outcome on the tick the
/// pipeline finishes.
pub fn advance(state: &mut GameState, dt: f32, probe: &dyn CollisionProbe) -> Option<Outcome> {
    let step = state.pipeline.take()?;

    match step {
        Pipeline::LayBridge(mut tween) => {
            let step = tween.advance(dt);
            state.stick.angle = step.value().0;
            state.pipeline = Some(if step.is_done() {
                start_crossing(state)
            } else {
                Pipeline::LayBridge(tween)
            });
            None
        }
        Pipeline::CrossBridge(mut tween) => {
            let step = tween.advance(dt);
            state.player.pos = step.value();
            if !step.is_done() {
                state.pipeline = Some(Pipeline::CrossBridge(tween));
                return None;
            }
            stop_moving(state);
            if has_support(probe, state.player.pos) {
                state.pipeline = Some(start_walk(state));
            } else {
                state.pipeline = Some(start_fall(state));
            }
            None
        }
        Pipeline::Collapse(mut tween) => {
            let step = tween.advance(dt);
            state.stick.angle = step.value().0;
            if step.is_done() {
                game_over(state);
                Some(Outcome::Fell)
            } else {
                state.pipeline = Some(Pipeline::Collapse(tween));
                None
            }
        }
        Pipeline::WalkToEdge(mut tween) => {
            let step = tween.advance(dt);
            state.player.pos = step.value();
            state.pipeline = Some(if step.is_done() {
                stop_moving(state);
                let target = Vec2::new(
                    state.player.pos.x + state.camera.offset_x,
                    state.camera.pos.y,
                );
                Pipeline::PanCamera(Tween::new(
                    state.camera.pos,
                    target,
                    state.config.camera_pan_duration,
                ))
            } else {
                Pipeline::WalkToEdge(tween)
            });
            None
        }
        Pipeline::PanCamera(mut tween) => {
            let step = tween.advance(dt);
            state.camera.pos = step.value();
            if step.is_done() {
                finish_turn(state);
                Some(Outcome::Crossed)
            } else {
                state.pipeline = Some(Pipeline::PanCamera(tween));
                None
            }
        }
    }
}

fn start_crossing(state: &mut GameState) -> Pipeline {
    let target = Vec2::new(state.stick.tip_x(), state.player.pos.y);
    state.player.is_moving = true;
    state.events.push(GameEvent::MoveStarted);
    Pipeline::CrossBridge(Tween::new(
        state.player.pos,
        target,
        state.config.move_duration,
    ))
}

fn stop_moving(state: &mut GameState) {
    state.player.is_moving = false;
    state.events.push(GameEvent::MoveStopped);
}

fn start_walk(state: &mut GameState) -> Pipeline {
    let Some(next) = state.next else {
        log::warn!("Support found but no next platform; treating as a miss");
        return start_fall(state);
    };
    state.score = state.score.saturating_add(1);
    state.events.push(GameEvent::ScoreChanged(state.score));
    log::debug!("Crossed to platform at {:.2}, score {}", next.x, state.score);

    let target = Vec2::new(
        next.right() - state.config.player_edge_margin,
        state.player.pos.y,
    );
    state.player.is_moving = true;
    state.events.push(GameEvent::MoveStarted);
    Pipeline::WalkToEdge(Tween::new(
        state.player.pos,
        target,
        state.config.move_duration,
    ))
}

fn start_fall(state: &mut GameState) -> Pipeline {
    log::debug!("No platform under x={:.2}", state.player.pos.x);
    state.events.push(GameEvent::FallToDeath);
    state.player.falling = true;
    state.player.fall_speed = 0.0;

    if state.shake_enabled {
        state.camera_shake = Some(CameraShake::new(
            state.camera.pos,
            state.config.shake_duration,
            state.config.shake_magnitude,
        ));
    }

    Pipeline::Collapse(Tween::new(
        Angle(state.stick.angle),
        Angle(state.config.collapse_angle),
        state.config.stick_collapse_duration,
    ))
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    let new_high_score = state.records.record_score(state.score);
    log::info!(
        "Game over: score {} (best {}{})",
        state.score,
        state.records.high_score,
        if new_high_score { ", new record" } else { "" }
    );
    state.events.push(GameEvent::GameOver {
        score: state.score,
        high_score: state.records.high_score,
        new_high_score,
    });
}

/// Promote `next`, spawn the following platform and a fresh stick
fn finish_turn(state: &mut GameState) {
    if let Some(next) = state.next {
        state.current = next;
    }
    let raw = state.level.create_next(&mut state.rng);
    let next = state.level.resize_latest(&state.current, &raw, &mut state.rng);
    state.next = Some(next);
    state.stick = Stick::anchored(&state.current, &state.config);
    state.phase = GamePhase::Input;
    state.events.push(GameEvent::PlatformSpawned(next));
    state.events.push(GameEvent::StickSpawned(state.stick));
}
