//! Data-driven game tuning
//!
//! Every number the simulation uses lives here so a run can be rebalanced
//! from JSON without touching code. Validated once at session construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Game balance and layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Level layout ===
    /// X of the first platform (spawn cursor origin)
    pub start_x: f32,
    /// Width of a freshly created platform (first platform keeps it)
    pub default_width: f32,
    /// Lower bound for randomized platform width
    pub min_width: f32,
    /// Upper bound for randomized platform width
    pub max_width: f32,
    /// Lower bound for the random gap added to the spawn cursor
    pub gap_min: f32,
    /// Upper bound for the random gap added to the spawn cursor
    pub gap_max: f32,
    /// Clearance subtracted from the gap before sizing the next platform
    pub clearance_margin: f32,
    /// Distance between the player and the right edge of its platform
    pub player_edge_margin: f32,
    /// Distance between the stick base and the right edge of its platform
    pub stick_edge_margin: f32,

    // === Actors ===
    /// Player standing height
    pub player_y: f32,
    /// Stick base height
    pub stick_y: f32,
    /// Camera start position (its x offset from the player is fixed from here)
    pub camera_start: Vec2,

    // === Stick ===
    /// Length gained per second of holding
    pub stick_growth_rate: f32,
    /// Hard cap on stick length
    pub max_stick_length: f32,
    /// Stick angle when lying flat as a bridge (degrees)
    pub fall_angle: f32,
    /// Stick angle after it collapses into the gap (degrees)
    pub collapse_angle: f32,

    // === Timings (seconds) ===
    pub stick_fall_duration: f32,
    pub move_duration: f32,
    pub camera_pan_duration: f32,
    pub stick_collapse_duration: f32,

    // === Effects ===
    pub shake_duration: f32,
    pub shake_magnitude: f32,
    /// Downward acceleration applied to a player that missed (units/s²)
    pub fall_gravity: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_x: 0.0,
            default_width: 1.5,
            min_width: 0.5,
            max_width: 1.5,
            gap_min: 2.0,
            gap_max: 4.0,
            clearance_margin: 0.4,
            player_edge_margin: 0.35,
            stick_edge_margin: 0.05,

            player_y: -1.5,
            stick_y: -2.0,
            camera_start: Vec2::new(2.5, 0.0),

            stick_growth_rate: 5.0,
            max_stick_length: 10.0,
            fall_angle: -90.0,
            collapse_angle: -180.0,

            stick_fall_duration: 0.4,
            move_duration: 0.6,
            camera_pan_duration: 0.6,
            stick_collapse_duration: 0.5,

            shake_duration: 0.5,
            shake_magnitude: 0.2,
            fall_gravity: 9.81,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Smallest gap `resize_latest` can ever see.
    ///
    /// Consecutive platforms are `gap + default_width / 2` apart and the
    /// current platform is at most `max(default_width, max_width)` wide.
    pub fn min_available_gap(&self) -> f32 {
        self.gap_min + self.default_width * 0.5
            - self.default_width.max(self.max_width) * 0.5
            - self.clearance_margin
    }

    fn fields(&self) -> [(&'static str, f32); 24] {
        [
            ("start_x", self.start_x),
            ("default_width", self.default_width),
            ("min_width", self.min_width),
            ("max_width", self.max_width),
            ("gap_min", self.gap_min),
            ("gap_max", self.gap_max),
            ("clearance_margin", self.clearance_margin),
            ("player_edge_margin", self.player_edge_margin),
            ("stick_edge_margin", self.stick_edge_margin),
            ("player_y", self.player_y),
            ("stick_y", self.stick_y),
            ("camera_start.x", self.camera_start.x),
            ("camera_start.y", self.camera_start.y),
            ("stick_growth_rate", self.stick_growth_rate),
            ("max_stick_length", self.max_stick_length),
            ("fall_angle", self.fall_angle),
            ("collapse_angle", self.collapse_angle),
            ("stick_fall_duration", self.stick_fall_duration),
            ("move_duration", self.move_duration),
            ("camera_pan_duration", self.camera_pan_duration),
            ("stick_collapse_duration", self.stick_collapse_duration),
            ("shake_duration", self.shake_duration),
            ("shake_magnitude", self.shake_magnitude),
            ("fall_gravity", self.fall_gravity),
        ]
    }

    /// Reject tuning that would silently break gameplay
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some((name, value)) = self.fields().into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite(name, value));
        }
        if !(self.stick_growth_rate > 0.0) {
            return Err(ConfigError::NonPositiveGrowthRate(self.stick_growth_rate));
        }
        if !(self.max_stick_length > 0.0) {
            return Err(ConfigError::NonPositiveMaxStick(self.max_stick_length));
        }
        for (name, value) in [
            ("default_width", self.default_width),
            ("min_width", self.min_width),
            ("max_width", self.max_width),
        ] {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveWidth(name, value));
            }
        }
        if self.min_width > self.max_width {
            return Err(ConfigError::WidthRangeInverted {
                min: self.min_width,
                max: self.max_width,
            });
        }
        if self.gap_min < 0.0 || self.gap_min > self.gap_max {
            return Err(ConfigError::GapRangeInverted {
                min: self.gap_min,
                max: self.gap_max,
            });
        }
        for (name, value) in [
            ("clearance_margin", self.clearance_margin),
            ("player_edge_margin", self.player_edge_margin),
            ("stick_edge_margin", self.stick_edge_margin),
            ("stick_fall_duration", self.stick_fall_duration),
            ("move_duration", self.move_duration),
            ("camera_pan_duration", self.camera_pan_duration),
            ("stick_collapse_duration", self.stick_collapse_duration),
            ("shake_duration", self.shake_duration),
            ("shake_magnitude", self.shake_magnitude),
            ("fall_gravity", self.fall_gravity),
        ] {
            if value < 0.0 {
                return Err(ConfigError::Negative(name, value));
            }
        }
        let available = self.min_available_gap();
        if available < self.min_width {
            return Err(ConfigError::UnreachableGap {
                available,
                min_width: self.min_width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_rejects_inverted_widths() {
        let config = GameConfig {
            min_width: 2.0,
            max_width: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WidthRangeInverted { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_growth() {
        for rate in [0.0, -1.0] {
            let config = GameConfig {
                stick_growth_rate: rate,
                ..Default::default()
            };
            assert!(matches!(
                config.validate(),
                Err(ConfigError::NonPositiveGrowthRate(_))
            ));
        }
    }

    #[test]
    fn test_rejects_non_finite_fields() {
        let cases = [
            GameConfig {
                gap_min: f32::NAN,
                ..Default::default()
            },
            GameConfig {
                fall_angle: f32::INFINITY,
                ..Default::default()
            },
            GameConfig {
                collapse_angle: f32::NEG_INFINITY,
                ..Default::default()
            },
            GameConfig {
                camera_start: Vec2::new(f32::NAN, 0.0),
                ..Default::default()
            },
            GameConfig {
                player_y: f32::INFINITY,
                ..Default::default()
            },
            GameConfig {
                stick_y: f32::NAN,
                ..Default::default()
            },
            GameConfig {
                start_x: f32::NAN,
                ..Default::default()
            },
            GameConfig {
                stick_growth_rate: f32::NAN,
                ..Default::default()
            },
        ];
        for config in cases {
            assert!(
                matches!(config.validate(), Err(ConfigError::NonFinite(..))),
                "{:?} passed validation",
                config
            );
        }
    }

    #[test]
    fn test_non_finite_error_names_field() {
        let config = GameConfig {
            fall_angle: f32::INFINITY,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite("fall_angle", _)));
        assert!(err.to_string().contains("fall_angle"));
    }

    #[test]
    fn test_rejects_unreachable_gap() {
        let config = GameConfig {
            gap_min: 0.5,
            gap_max: 1.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnreachableGap { .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json_str(r#"{ "stick_growth_rate": 7.5 }"#).unwrap();
        assert_eq!(config.stick_growth_rate, 7.5);
        assert_eq!(config.max_stick_length, GameConfig::default().max_stick_length);
    }

    #[test]
    fn test_json_is_validated() {
        let err = GameConfig::from_json_str(r#"{ "max_stick_length": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveMaxStick(_)));
        let err = GameConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
