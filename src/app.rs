//! Frame driver
//!
//! One logical frame = poll all pending input, advance the simulation one
//! tick, apply side effects (sound cues, cursor visibility), draw. [`App::run`]
//! repeats that at a fixed 60 Hz; [`App::frame`] is one iteration and is
//! what the tests drive directly.

use std::time::{Duration, Instant};

use crate::consts::FRAME_DT;
use crate::platform::{Frontend, FrontendEvent, Key, SoundCue};
use crate::settings::{Settings, SettingsError};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
use crate::ui::PlayButton;

/// Owns the game state, the settings, and the frontend for one session
pub struct App<F: Frontend> {
    pub settings: Settings,
    pub state: GameState,
    pub frontend: F,
    pub play_button: PlayButton,
    input: TickInput,
    /// Cursor visibility last pushed to the frontend
    cursor_applied: bool,
}

impl<F: Frontend> App<F> {
    /// Validate the configuration and set up a session on the menu
    pub fn new(settings: Settings, mut frontend: F) -> Result<Self, SettingsError> {
        settings.validate()?;
        let state = GameState::new(&settings);
        let play_button = PlayButton::new(&settings);
        frontend.set_cursor_visible(state.cursor_visible);
        let cursor_applied = state.cursor_visible;
        Ok(Self {
            settings,
            state,
            frontend,
            play_button,
            input: TickInput::default(),
            cursor_applied,
        })
    }

    /// Run one frame. Returns false when quit was requested; the caller
    /// must stop without any further frame processing.
    pub fn frame(&mut self) -> bool {
        for event in self.frontend.poll_events() {
            match event {
                FrontendEvent::Quit | FrontendEvent::KeyDown(Key::Quit) => return false,
                FrontendEvent::KeyDown(Key::Left) => self.input.left = true,
                FrontendEvent::KeyUp(Key::Left) => self.input.left = false,
                FrontendEvent::KeyDown(Key::Right) => self.input.right = true,
                FrontendEvent::KeyUp(Key::Right) => self.input.right = false,
                // One bullet per key press, not per held frame
                FrontendEvent::KeyDown(Key::Fire) => self.input.fire = true,
                FrontendEvent::KeyDown(Key::Start) => self.input.start = true,
                FrontendEvent::MouseDown { x, y } => {
                    if self.state.phase == GamePhase::Menu && self.play_button.clicked(x, y) {
                        self.input.start = true;
                    }
                }
                FrontendEvent::KeyUp(_) => {}
            }
        }

        tick(&mut self.state, &self.input, &self.settings);
        // One-shot inputs are consumed by the tick
        self.input.fire = false;
        self.input.start = false;

        for event in self.state.take_events() {
            match event {
                GameEvent::BulletFired => {
                    self.frontend
                        .play_sound(SoundCue::Fire, self.settings.fire_gain);
                }
                GameEvent::AliensDestroyed { .. } => {
                    self.frontend
                        .play_sound(SoundCue::Explosion, self.settings.explosion_gain);
                }
                GameEvent::GameStarted => log::info!("new run started"),
                GameEvent::NewLevel { level } => log::info!("level {level}"),
                GameEvent::ShipHit => {
                    log::info!("ship lost, {} remaining", self.state.stats.ships_left)
                }
                GameEvent::GameOver => log::info!(
                    "game over at level {} with score {}",
                    self.state.stats.level,
                    self.state.stats.score
                ),
            }
        }

        if self.state.cursor_visible != self.cursor_applied {
            self.frontend.set_cursor_visible(self.state.cursor_visible);
            self.cursor_applied = self.state.cursor_visible;
        }

        self.frontend.draw(&self.state, &self.settings);
        true
    }

    /// Run frames at the fixed rate until quit
    pub fn run(&mut self) {
        let frame_time = Duration::from_secs_f32(FRAME_DT);
        loop {
            let frame_start = Instant::now();
            if !self.frame() {
                break;
            }
            let elapsed = frame_start.elapsed();
            if elapsed < frame_time {
                std::thread::sleep(frame_time - elapsed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessFrontend;

    fn app_with_script(script: Vec<Vec<FrontendEvent>>) -> App<HeadlessFrontend> {
        App::new(Settings::default(), HeadlessFrontend::with_script(script))
            .expect("default settings are valid")
    }

    fn play_button_center(settings: &Settings) -> (i32, i32) {
        let rect = PlayButton::new(settings).rect;
        (rect.center_x(), rect.y + rect.h / 2)
    }

    #[test]
    fn test_invalid_settings_abort_startup() {
        let mut settings = Settings::default();
        settings.screen_width = -1;
        assert!(App::new(settings, HeadlessFrontend::new()).is_err());
    }

    #[test]
    fn test_play_button_click_starts_game_and_hides_cursor() {
        let (x, y) = play_button_center(&Settings::default());
        let mut app = app_with_script(vec![vec![FrontendEvent::MouseDown { x, y }]]);
        assert_eq!(app.state.phase, GamePhase::Menu);

        assert!(app.frame());

        assert_eq!(app.state.phase, GamePhase::Playing);
        // Cursor shown at startup, hidden once the run begins
        assert_eq!(app.frontend.cursor_changes, vec![true, false]);
    }

    #[test]
    fn test_click_outside_button_does_not_start() {
        let mut app = app_with_script(vec![vec![FrontendEvent::MouseDown { x: 5, y: 5 }]]);
        assert!(app.frame());
        assert_eq!(app.state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_click_during_play_is_ignored() {
        let (x, y) = play_button_center(&Settings::default());
        let mut app = app_with_script(vec![
            vec![FrontendEvent::KeyDown(Key::Start)],
            vec![FrontendEvent::MouseDown { x, y }],
        ]);
        assert!(app.frame());
        assert_eq!(app.state.phase, GamePhase::Playing);
        let level = app.state.stats.level;

        assert!(app.frame());
        // No restart: stats untouched
        assert_eq!(app.state.stats.level, level);
        assert_eq!(app.state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_fire_key_is_edge_triggered_and_cued() {
        let settings = Settings::default();
        let mut app = app_with_script(vec![
            vec![FrontendEvent::KeyDown(Key::Start)],
            vec![FrontendEvent::KeyDown(Key::Fire)],
            // Key held: no new KeyDown, no new bullet
            vec![],
            vec![],
        ]);
        for _ in 0..4 {
            assert!(app.frame());
        }

        assert_eq!(app.state.bullets.len(), 1);
        let fire_cues: Vec<_> = app
            .frontend
            .sounds
            .iter()
            .filter(|(cue, _)| *cue == SoundCue::Fire)
            .collect();
        assert_eq!(fire_cues.len(), 1);
        assert_eq!(fire_cues[0].1, settings.fire_gain);
    }

    #[test]
    fn test_movement_keys_are_held_until_keyup() {
        let settings = Settings::default();
        let mut app = app_with_script(vec![
            vec![FrontendEvent::KeyDown(Key::Start)],
            vec![FrontendEvent::KeyDown(Key::Right)],
            vec![],
            vec![FrontendEvent::KeyUp(Key::Right)],
            vec![],
        ]);
        assert!(app.frame());
        let x0 = app.state.ship.body.pos.x;
        for _ in 0..4 {
            assert!(app.frame());
        }
        // Release is polled before the tick, so only the two held frames moved
        assert_eq!(app.state.ship.body.pos.x, x0 + 2.0 * settings.ship_speed);
    }

    #[test]
    fn test_quit_stops_frame_processing_immediately() {
        let mut app = app_with_script(vec![
            vec![],
            vec![FrontendEvent::Quit],
            vec![FrontendEvent::KeyDown(Key::Start)],
        ]);
        assert!(app.frame());
        let drawn = app.frontend.frames_drawn;

        // Quit frame: no tick, no draw
        assert!(!app.frame());
        assert_eq!(app.frontend.frames_drawn, drawn);
        assert_eq!(app.state.phase, GamePhase::Menu);
    }

    #[test]
    fn test_quit_key_works_during_respawn_pause() {
        let mut app = app_with_script(vec![vec![FrontendEvent::KeyDown(Key::Start)]]);
        assert!(app.frame());

        // Force a ship loss to enter the pause
        let ship_rect = app.state.ship.body.rect();
        app.state.aliens[0].body.pos = glam::Vec2::new(ship_rect.x as f32, ship_rect.y as f32);
        app.frontend.push_frame(vec![]);
        assert!(app.frame());
        assert_eq!(app.state.phase, GamePhase::Respawning);

        // The loop still polls during the pause, so quit lands
        app.frontend.push_frame(vec![FrontendEvent::KeyDown(Key::Quit)]);
        assert!(!app.frame());
    }

    #[test]
    fn test_explosion_cue_uses_its_own_gain() {
        let settings = Settings::default();
        let mut app = app_with_script(vec![vec![FrontendEvent::KeyDown(Key::Start)]]);
        assert!(app.frame());

        // Park an alien on a hand-placed bullet
        app.state.aliens[0].body.pos = glam::Vec2::new(300.0, 400.0);
        app.state.bullets.push(crate::sim::Bullet {
            body: crate::sim::Body::new(
                310.0,
                420.0,
                settings.bullet_width,
                settings.bullet_height,
            ),
        });
        app.frontend.push_frame(vec![]);
        assert!(app.frame());

        assert!(
            app.frontend
                .sounds
                .contains(&(SoundCue::Explosion, settings.explosion_gain))
        );
    }

    #[test]
    fn test_game_over_reveals_cursor() {
        let mut app = app_with_script(vec![vec![FrontendEvent::KeyDown(Key::Start)]]);
        assert!(app.frame());

        app.state.stats.ships_left = 0;
        let ship_rect = app.state.ship.body.rect();
        app.state.aliens[0].body.pos = glam::Vec2::new(ship_rect.x as f32, ship_rect.y as f32);
        app.frontend.push_frame(vec![]);
        assert!(app.frame());

        assert_eq!(app.state.phase, GamePhase::Menu);
        assert_eq!(app.frontend.cursor_changes, vec![true, false, true]);
    }
}
