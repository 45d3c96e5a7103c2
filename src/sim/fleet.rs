//! Fleet manager
//!
//! Builds the alien grid and moves it as one unit: every alien shares the
//! same horizontal speed and one direction sign, and when any alien touches
//! a screen edge the whole fleet flips direction and drops one step.

use super::state::{Alien, GameState};
use crate::settings::Settings;

/// Build a fresh fleet. The layout is deterministic: starting at
/// `(alien_w, alien_h)`, columns are placed at a pitch of two alien widths
/// while they fit inside `screen_w - 2 * alien_w`, and rows at a pitch of
/// two alien heights while they fit inside `screen_h - 3 * alien_h`. Row and
/// column counts therefore follow from screen and sprite dimensions alone.
pub fn create_fleet(settings: &Settings) -> Vec<Alien> {
    let alien_w = settings.alien_width;
    let alien_h = settings.alien_height;

    let mut aliens = Vec::new();
    let mut current_y = alien_h;
    while current_y < settings.screen_height - 3 * alien_h {
        let mut current_x = alien_w;
        while current_x < settings.screen_width - 2 * alien_w {
            aliens.push(Alien::new(current_x as f32, current_y as f32, settings));
            current_x += 2 * alien_w;
        }
        current_y += 2 * alien_h;
    }
    aliens
}

/// Rows and columns the layout produces for these settings
pub fn grid_size(settings: &Settings) -> (u32, u32) {
    let mut rows = 0;
    let mut current_y = settings.alien_height;
    while current_y < settings.screen_height - 3 * settings.alien_height {
        rows += 1;
        current_y += 2 * settings.alien_height;
    }

    let mut cols = 0;
    let mut current_x = settings.alien_width;
    while current_x < settings.screen_width - 2 * settings.alien_width {
        cols += 1;
        current_x += 2 * settings.alien_width;
    }

    (rows, cols)
}

/// If any alien has reached a screen edge, flip the fleet once. The scan
/// short-circuits on the first match: no matter how many aliens sit on the
/// edge simultaneously, the fleet flips and drops exactly once per frame.
pub fn check_fleet_edges(state: &mut GameState, settings: &Settings) {
    let at_edge = state
        .aliens
        .iter()
        .any(|alien| alien.check_edges(settings.screen_width));
    if at_edge {
        change_fleet_direction(state, settings);
    }
}

/// Drop the entire fleet one step and reverse its direction. Atomic: runs
/// before the frame's horizontal advance, never interleaved with it.
pub fn change_fleet_direction(state: &mut GameState, settings: &Settings) {
    for alien in &mut state.aliens {
        alien.body.pos.y += settings.fleet_drop_speed;
    }
    state.fleet_direction = -state.fleet_direction;
}

/// Advance every alien by the shared horizontal step for this frame
pub fn advance_fleet(state: &mut GameState) {
    let dx = state.fleet_direction * state.tuning.alien_speed;
    for alien in &mut state.aliens {
        alien.advance(dx);
    }
}
