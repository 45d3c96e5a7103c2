//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the game by exactly one frame. The update
//! order inside the active phase is fixed: ship motion, then bullets
//! (advance, cull, collide), then the fleet (edge check, advance, ship and
//! bottom checks).

use crate::consts::RESPAWN_PAUSE_TICKS;
use crate::settings::Settings;

use super::collision::{fleet_reached_bottom, resolve_bullet_alien, ship_struck};
use super::fleet::{advance_fleet, check_fleet_edges, create_fleet};
use super::state::{Bullet, GameEvent, GamePhase, GameState, Tuning};

/// Input commands for a single tick. Movement flags reflect held keys;
/// `fire` and `start` are one-shot and cleared by the frame driver after
/// each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Left movement key held
    pub left: bool,
    /// Right movement key held
    pub right: bool,
    /// Fire a bullet this tick
    pub fire: bool,
    /// Start a run (play button or its key equivalent)
    pub start: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, settings: &Settings) {
    state.time_ticks += 1;

    match state.phase {
        GamePhase::Menu => {
            if input.start {
                start_game(state, settings);
            }
        }

        GamePhase::Respawning => {
            // Entities freeze during the pause; the surrounding loop keeps
            // polling so quit stays responsive.
            state.respawn_ticks = state.respawn_ticks.saturating_sub(1);
            if state.respawn_ticks == 0 {
                state.phase = GamePhase::Playing;
            }
        }

        GamePhase::Playing => {
            state.ship.moving_left = input.left;
            state.ship.moving_right = input.right;
            state
                .ship
                .update(state.tuning.ship_speed, settings.screen_width);

            if input.fire {
                fire_bullet(state, settings);
            }

            update_bullets(state, settings);
            update_fleet(state, settings);
        }
    }
}

/// Reset everything for a fresh run and go active
fn start_game(state: &mut GameState, settings: &Settings) {
    state.tuning = Tuning::initial(settings);
    state.stats.reset(settings);

    state.bullets.clear();
    state.aliens = create_fleet(settings);
    state.fleet_direction = 1.0;
    state.ship.center(settings);

    state.phase = GamePhase::Playing;
    state.cursor_visible = false;
    state.push_event(GameEvent::GameStarted);
}

/// Spawn a bullet at the ship, unless the in-flight cap is reached
/// (in which case nothing changes).
fn fire_bullet(state: &mut GameState, settings: &Settings) {
    if state.bullets.len() < settings.bullets_allowed {
        state.bullets.push(Bullet::new(&state.ship, settings));
        state.push_event(GameEvent::BulletFired);
    }
}

/// Advance bullets, drop the ones that left the top of the screen, and
/// resolve the batched bullet-alien query.
fn update_bullets(state: &mut GameState, settings: &Settings) {
    let speed = state.tuning.bullet_speed;
    for bullet in &mut state.bullets {
        bullet.advance(speed);
    }
    state.bullets.retain(|bullet| bullet.body.rect().bottom() > 0);

    let destroyed = resolve_bullet_alien(&mut state.bullets, &mut state.aliens);
    if destroyed > 0 {
        state.stats.score += state.tuning.alien_points * destroyed as u64;
        state.stats.high_score = state.stats.high_score.max(state.stats.score);
        state.push_event(GameEvent::AliensDestroyed { count: destroyed });
    }

    if state.aliens.is_empty() {
        start_new_level(state, settings);
    }
}

/// Clear the board and rebuild a faster fleet for the next level
fn start_new_level(state: &mut GameState, settings: &Settings) {
    state.bullets.clear();
    state.aliens = create_fleet(settings);
    state.tuning.increase(settings);
    state.stats.level += 1;
    state.push_event(GameEvent::NewLevel {
        level: state.stats.level,
    });
}

/// Fleet motion and the two losing collision checks
fn update_fleet(state: &mut GameState, settings: &Settings) {
    check_fleet_edges(state, settings);
    advance_fleet(state);

    if ship_struck(&state.ship, &state.aliens) {
        ship_hit(state, settings);
        // The fleet was just rebuilt at the top; skip the bottom scan
        return;
    }

    if fleet_reached_bottom(&state.aliens, settings.screen_height) {
        ship_hit(state, settings);
    }
}

/// Lose a ship: with lives to spare, reset the board and enter the timed
/// respawn pause; on the last ship, return to the menu and reveal the
/// cursor.
fn ship_hit(state: &mut GameState, settings: &Settings) {
    if state.stats.ships_left > 0 {
        state.stats.ships_left -= 1;

        state.bullets.clear();
        state.aliens = create_fleet(settings);
        state.ship.center(settings);

        state.phase = GamePhase::Respawning;
        state.respawn_ticks = RESPAWN_PAUSE_TICKS;
        state.push_event(GameEvent::ShipHit);
    } else {
        state.phase = GamePhase::Menu;
        state.cursor_visible = true;
        state.push_event(GameEvent::GameOver);
    }
}
