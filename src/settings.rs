//! Player preferences
//!
//! Persisted separately from records, as one JSON string in the store.

use serde::{Deserialize, Serialize};

use crate::consts::SETTINGS_KEY;
use crate::error::StoreError;
use crate::persistence::PersistentStore;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master switch for sound cues
    pub sound: bool,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,

    // === Visual Effects ===
    /// Camera shake when the player falls
    pub screen_shake: bool,

    // === Accessibility ===
    /// Reduced motion (no shake)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            sfx_volume: 1.0,
            screen_shake: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective screen shake (respects reduced_motion)
    pub fn effective_screen_shake(&self) -> bool {
        self.screen_shake && !self.reduced_motion
    }

    /// Volume to play cues at, 0 when sound is off
    pub fn effective_volume(&self) -> f32 {
        if self.sound {
            self.sfx_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Load settings from the store, falling back to defaults
    pub fn load(store: &dyn PersistentStore) -> Self {
        match store.get_string(SETTINGS_KEY) {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable settings: {}", e);
                    Self::default()
                }
            },
            Ok(None) => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Settings unavailable, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut dyn PersistentStore) -> Result<(), StoreError> {
        let json = serde_json::to_string(self)?;
        store.set_string(SETTINGS_KEY, &json)?;
        log::info!("Settings saved");
        Ok(())
    }
}
