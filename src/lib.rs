//! Stick Hero - A one-button bridge building arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, fall pipeline, level generation)
//! - `session`: Owns a run, its collaborators and restart semantics
//! - `persistence`: Integer key/value stores for diamonds and high score
//! - `platform`: Fixed timestep driver, input latching, web entry point
//! - `config`: Data-driven game tuning

pub mod ai;
pub mod audio;
pub mod config;
pub mod error;
pub mod persistence;
pub mod platform;
pub mod records;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use config::GameConfig;
pub use error::{ConfigError, StoreError};
pub use records::Records;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz is plenty for tweened motion)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the driver will accept (seconds)
    pub const MAX_FRAME_DT: f32 = 0.25;

    /// Persistent store keys
    pub const DIAMONDS_KEY: &str = "Diamonds";
    pub const HIGH_SCORE_KEY: &str = "HighScore";
    pub const SETTINGS_KEY: &str = "Settings";
}

/// Normalize an angle in degrees to (-180, 180]. Non-finite input is
/// returned unchanged.
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    if !angle.is_finite() {
        return angle;
    }
    while angle > 180.0 {
        angle -= 360.0;
    }
    while angle <= -180.0 {
        angle += 360.0;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(190.0), -170.0);
        assert_eq!(normalize_degrees(-190.0), 170.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(540.0), 180.0);
    }

    #[test]
    fn test_normalize_degrees_non_finite_terminates() {
        assert_eq!(normalize_degrees(f32::INFINITY), f32::INFINITY);
        assert_eq!(normalize_degrees(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert!(normalize_degrees(f32::NAN).is_nan());
    }
}
