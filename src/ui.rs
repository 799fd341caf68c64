//! HUD model
//!
//! Which panels are up and what they show. Rendering them is the host's job.

use crate::sim::{GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Title / tap to start
    Start,
    /// In-run score counter
    Score,
    /// Run summary
    End,
    Pause,
}

/// Panels visible in `phase`
pub fn visible_panels(phase: GamePhase) -> &'static [Panel] {
    match phase {
        GamePhase::Start => &[Panel::Start],
        GamePhase::Input | GamePhase::Growing | GamePhase::Resolving => &[Panel::Score],
        GamePhase::Paused => &[Panel::Pause],
        GamePhase::GameOver => &[Panel::End],
    }
}

/// Everything the HUD displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    pub panels: &'static [Panel],
    pub score: u32,
    pub diamonds: u32,
    pub high_score: u32,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            panels: visible_panels(state.phase),
            score: state.score,
            diamonds: state.records.diamonds,
            high_score: state.records.high_score,
        }
    }

    pub fn shows(&self, panel: Panel) -> bool {
        self.panels.contains(&panel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::records::Records;

    #[test]
    fn test_panels_follow_phase() {
        let mut state = GameState::new(GameConfig::default(), 1, Records::default());
        assert!(Hud::from_state(&state).shows(Panel::Start));
        state.start();
        let hud = Hud::from_state(&state);
        assert!(hud.shows(Panel::Score));
        assert!(!hud.shows(Panel::Start));
        state.pause();
        assert_eq!(Hud::from_state(&state).panels, &[Panel::Pause]);
    }

    #[test]
    fn test_end_panel_after_game_over() {
        assert_eq!(visible_panels(GamePhase::GameOver), &[Panel::End]);
    }
}
