//! Play button and scoreboard text
//!
//! The core does not draw anything; it supplies the button rectangle, the
//! pointer hit-test, and the formatted numbers a frontend renders.

use crate::consts::{PLAY_BUTTON_HEIGHT, PLAY_BUTTON_WIDTH};
use crate::settings::Settings;
use crate::sim::{GameState, Rect};

/// The Play button shown while the game is inactive
#[derive(Debug, Clone, Copy)]
pub struct PlayButton {
    pub rect: Rect,
}

impl PlayButton {
    /// Centered on the screen
    pub fn new(settings: &Settings) -> Self {
        Self {
            rect: Rect::new(
                (settings.screen_width - PLAY_BUTTON_WIDTH) / 2,
                (settings.screen_height - PLAY_BUTTON_HEIGHT) / 2,
                PLAY_BUTTON_WIDTH,
                PLAY_BUTTON_HEIGHT,
            ),
        }
    }

    pub fn label(&self) -> &'static str {
        "Play"
    }

    /// Was this pointer position inside the button?
    pub fn clicked(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point(x, y)
    }
}

/// Group digits with commas: 1234567 -> "1,234,567"
pub fn format_score(score: u64) -> String {
    let digits = score.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Scoreboard text lines for the frontend to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scoreboard {
    pub score: String,
    pub high_score: String,
    pub level: String,
    pub ships_left: String,
}

impl Scoreboard {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: format_score(state.stats.score),
            high_score: format_score(state.stats.high_score),
            level: state.stats.level.to_string(),
            ships_left: state.stats.ships_left.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_is_centered() {
        let settings = Settings::default();
        let button = PlayButton::new(&settings);
        assert_eq!(button.rect.center_x(), settings.screen_width / 2);
        assert_eq!(button.rect.w, PLAY_BUTTON_WIDTH);
        assert_eq!(button.rect.h, PLAY_BUTTON_HEIGHT);
    }

    #[test]
    fn test_hit_test() {
        let settings = Settings::default();
        let button = PlayButton::new(&settings);
        let r = button.rect;
        assert!(button.clicked(r.x + 1, r.y + 1));
        assert!(button.clicked(r.center_x(), r.y + r.h / 2));
        assert!(!button.clicked(r.x - 1, r.y));
        assert!(!button.clicked(r.right() + 5, r.y));
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0), "0");
        assert_eq!(format_score(950), "950");
        assert_eq!(format_score(1_000), "1,000");
        assert_eq!(format_score(1_234_567), "1,234,567");
    }

    #[test]
    fn test_scoreboard_from_state() {
        let settings = Settings::default();
        let mut state = GameState::new(&settings);
        state.stats.score = 12_500;
        state.stats.high_score = 99_000;
        state.stats.level = 3;
        state.stats.ships_left = 2;

        let board = Scoreboard::from_state(&state);
        assert_eq!(board.score, "12,500");
        assert_eq!(board.high_score, "99,000");
        assert_eq!(board.level, "3");
        assert_eq!(board.ships_left, "2");
    }
}
