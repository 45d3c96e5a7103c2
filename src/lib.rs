//! Alien Invasion - a fixed-timestep arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, fleet, collisions, game state)
//! - `platform`: Narrow presentation boundary (events, draw, sound cues)
//! - `app`: Frame driver that runs the authoritative 60 Hz loop
//! - `settings`: Static configuration with fail-fast validation
//! - `ui`: Play button hit-testing and scoreboard text

pub mod app;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::{Settings, SettingsError};

/// Game loop constants
pub mod consts {
    /// Fixed frame rate of the authoritative loop
    pub const FRAME_RATE: u32 = 60;
    /// Fixed timestep in seconds
    pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;
    /// Respawn pause after losing a ship (0.5 s at 60 Hz)
    pub const RESPAWN_PAUSE_TICKS: u32 = 30;
    /// Play button dimensions
    pub const PLAY_BUTTON_WIDTH: i32 = 200;
    pub const PLAY_BUTTON_HEIGHT: i32 = 50;
}
