//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one tick = one 60 Hz frame)
//! - Stable iteration order (plain `Vec`s, removal via filtering)
//! - No rendering or platform dependencies

pub mod collision;
pub mod fleet;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{fleet_reached_bottom, resolve_bullet_alien, ship_struck};
pub use fleet::{advance_fleet, change_fleet_direction, check_fleet_edges, create_fleet, grid_size};
pub use rect::Rect;
pub use state::{Alien, Body, Bullet, GameEvent, GamePhase, GameState, GameStats, Ship, Tuning};
pub use tick::{TickInput, tick};
