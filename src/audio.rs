//! Sound cues
//!
//! The simulation only raises events; this maps the interesting ones to cues
//! and hands them to whatever sink the host attached. No sink, no sound.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Press registered
    Tap,
    /// Stick starts tipping over
    Bridge,
    /// Player drops into the gap
    Fall,
}

impl SoundCue {
    /// Cue for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Tap => Some(SoundCue::Tap),
            GameEvent::BridgeFall => Some(SoundCue::Bridge),
            GameEvent::FallToDeath => Some(SoundCue::Fall),
            _ => None,
        }
    }
}

/// Host audio device
pub trait AudioSink {
    /// Fire-and-forget playback at `volume` (0.0 - 1.0)
    fn play(&mut self, cue: SoundCue, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    volume: f32,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl AudioManager {
    pub fn new(volume: f32) -> Self {
        Self {
            sink: None,
            volume: volume.clamp(0.0, 1.0),
        }
    }

    pub fn attach(&mut self, sink: Box<dyn AudioSink>) {
        self.sink = Some(sink);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    pub fn is_attached(&self) -> bool {
        self.sink.is_some()
    }

    /// Play the cue for `event`, skipping silently when muted or detached
    pub fn handle(&mut self, event: &GameEvent) {
        let Some(cue) = SoundCue::for_event(event) else {
            return;
        };
        self.play(cue);
    }

    pub fn play(&mut self, cue: SoundCue) {
        if self.volume <= 0.0 {
            return;
        }
        match self.sink.as_mut() {
            Some(sink) => sink.play(cue, self.volume),
            None => log::debug!("No audio sink, skipping {:?}", cue),
        }
    }
}
