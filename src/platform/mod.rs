//! Narrow presentation boundary
//!
//! The simulation knows nothing about windows, audio devices, or input
//! hardware. Whatever presents the game implements [`Frontend`]:
//! - discrete key down/up events plus pointer clicks and window close
//! - one draw-and-present call per frame (the scene is the game state)
//! - fire-and-forget sound cues, each with its own fixed gain
//! - a cursor visibility toggle
//!
//! [`HeadlessFrontend`] replays a scripted event stream and records every
//! outbound call; the demo binary and the app tests run against it.

use std::collections::VecDeque;

use crate::settings::Settings;
use crate::sim::GameState;

/// Semantic keys the game cares about. The frontend maps physical keys or
/// buttons onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
    Start,
    Quit,
}

/// One input event from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontendEvent {
    /// Window close request
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer button pressed at screen coordinates
    MouseDown { x: i32, y: i32 },
}

/// Fire-and-forget sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// A bullet left the ship
    Fire,
    /// One or more aliens exploded
    Explosion,
}

/// The presentation layer contract. One implementation per platform;
/// everything is called from the single loop thread at frame boundaries.
pub trait Frontend {
    /// Drain all input events that arrived since the last frame
    fn poll_events(&mut self) -> Vec<FrontendEvent>;

    /// Draw the frame and present it. The frontend reads whatever it needs
    /// from the state (entity boxes, stats numbers, phase).
    fn draw(&mut self, state: &GameState, settings: &Settings);

    /// Trigger a sound cue at the given gain
    fn play_sound(&mut self, cue: SoundCue, gain: f32);

    /// Show or hide the pointer cursor
    fn set_cursor_visible(&mut self, visible: bool);
}

/// A frontend with no window: replays a scripted event stream and records
/// sound and cursor calls. Used by the demo binary and in tests.
#[derive(Debug, Default)]
pub struct HeadlessFrontend {
    /// Per-frame event batches, popped front on each poll
    script: VecDeque<Vec<FrontendEvent>>,
    /// Every sound cue played, with its gain
    pub sounds: Vec<(SoundCue, f32)>,
    /// History of cursor visibility changes
    pub cursor_changes: Vec<bool>,
    /// Frames drawn
    pub frames_drawn: u64,
}

impl HeadlessFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frontend that replays the given per-frame event batches,
    /// then reports no further input.
    pub fn with_script<I>(script: I) -> Self
    where
        I: IntoIterator<Item = Vec<FrontendEvent>>,
    {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Queue one more frame of scripted events
    pub fn push_frame(&mut self, events: Vec<FrontendEvent>) {
        self.script.push_back(events);
    }
}

impl Frontend for HeadlessFrontend {
    fn poll_events(&mut self) -> Vec<FrontendEvent> {
        self.script.pop_front().unwrap_or_default()
    }

    fn draw(&mut self, _state: &GameState, _settings: &Settings) {
        self.frames_drawn += 1;
    }

    fn play_sound(&mut self, cue: SoundCue, gain: f32) {
        self.sounds.push((cue, gain));
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_changes.push(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_replays_then_goes_quiet() {
        let mut frontend = HeadlessFrontend::with_script([
            vec![FrontendEvent::KeyDown(Key::Fire)],
            vec![],
            vec![FrontendEvent::Quit],
        ]);

        assert_eq!(
            frontend.poll_events(),
            vec![FrontendEvent::KeyDown(Key::Fire)]
        );
        assert!(frontend.poll_events().is_empty());
        assert_eq!(frontend.poll_events(), vec![FrontendEvent::Quit]);
        assert!(frontend.poll_events().is_empty());
    }

    #[test]
    fn test_records_sounds_and_cursor() {
        let mut frontend = HeadlessFrontend::new();
        frontend.play_sound(SoundCue::Fire, 0.02);
        frontend.set_cursor_visible(false);
        assert_eq!(frontend.sounds, vec![(SoundCue::Fire, 0.02)]);
        assert_eq!(frontend.cursor_changes, vec![false]);
    }
}
