//! Static game configuration
//!
//! Every tunable the game reads lives here: screen geometry, sprite sizes,
//! base speeds, point values, colors, and sound gains. Defaults are
//! compile-time; a JSON file can override any subset (missing keys fall back
//! to the defaults). Validation is fail-fast at startup: a configuration
//! that cannot produce a playable layout is a descriptive error, never a
//! partial game.
//!
//! Speeds and point values here are the *base* values. The per-run dynamic
//! copies that scale up with each level live in [`crate::sim::Tuning`].

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// An RGB color triple, handed to the frontend as-is.
pub type Color = (u8, u8, u8);

/// Game configuration. All speeds are in pixels per frame at 60 Hz.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Screen ===
    pub screen_width: i32,
    pub screen_height: i32,
    pub bg_color: Color,

    // === Ship ===
    pub ship_speed: f32,
    /// Lives per run
    pub ship_limit: u32,
    pub ship_width: i32,
    pub ship_height: i32,

    // === Bullets ===
    pub bullet_speed: f32,
    pub bullet_width: i32,
    pub bullet_height: i32,
    pub bullet_color: Color,
    /// Maximum bullets in flight; firing at the cap is a no-op
    pub bullets_allowed: usize,

    // === Aliens ===
    pub alien_speed: f32,
    pub alien_width: i32,
    pub alien_height: i32,
    /// Vertical step the whole fleet takes when it reaches a screen edge
    pub fleet_drop_speed: f32,
    /// Score for one alien at level 1
    pub alien_points: u64,

    // === Progression ===
    /// Multiplier applied to ship/bullet/alien speeds on each new level
    pub speedup_scale: f32,
    /// Multiplier applied to the per-alien point value on each new level
    pub score_scale: f32,

    // === Audio ===
    /// Playback gain for the fire cue (0.0 - 1.0)
    pub fire_gain: f32,
    /// Playback gain for the explosion cue (0.0 - 1.0)
    pub explosion_gain: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200,
            screen_height: 800,
            bg_color: (230, 230, 230),

            ship_speed: 1.5,
            ship_limit: 3,
            ship_width: 60,
            ship_height: 48,

            bullet_speed: 2.5,
            bullet_width: 3,
            bullet_height: 15,
            bullet_color: (60, 60, 60),
            bullets_allowed: 3,

            alien_speed: 1.0,
            alien_width: 60,
            alien_height: 58,
            fleet_drop_speed: 10.0,
            alien_points: 50,

            speedup_scale: 1.1,
            score_scale: 1.5,

            fire_gain: 0.02,
            explosion_gain: 0.009,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string. Missing keys use defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file, validating the result.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Fail-fast sanity check. There is no recovery path for a malformed
    /// configuration: callers should abort startup on error.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let dims: [(&str, i32); 8] = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
        ];
        for (name, value) in dims {
            if value <= 0 {
                return Err(SettingsError::NonPositive {
                    name,
                    value: value as f32,
                });
            }
        }

        let speeds: [(&str, f32); 4] = [
            ("ship_speed", self.ship_speed),
            ("bullet_speed", self.bullet_speed),
            ("alien_speed", self.alien_speed),
            ("fleet_drop_speed", self.fleet_drop_speed),
        ];
        for (name, value) in speeds {
            if !(value > 0.0) {
                return Err(SettingsError::NonPositive { name, value });
            }
        }

        let scales: [(&str, f32); 2] = [
            ("speedup_scale", self.speedup_scale),
            ("score_scale", self.score_scale),
        ];
        for (name, value) in scales {
            if !(value >= 1.0) {
                return Err(SettingsError::NonPositive { name, value });
            }
        }

        // The fleet layout must fit at least one column and one row,
        // otherwise every level starts already cleared.
        if self.alien_width >= self.screen_width - 2 * self.alien_width
            || self.alien_height >= self.screen_height - 3 * self.alien_height
        {
            return Err(SettingsError::FleetDoesNotFit {
                screen: (self.screen_width, self.screen_height),
                alien: (self.alien_width, self.alien_height),
            });
        }

        if self.ship_width > self.screen_width || self.ship_height >= self.screen_height {
            return Err(SettingsError::ShipDoesNotFit {
                screen: (self.screen_width, self.screen_height),
                ship: (self.ship_width, self.ship_height),
            });
        }

        Ok(())
    }
}

/// Configuration errors. These abort startup; the game never attempts a
/// partial layout.
#[derive(Debug)]
pub enum SettingsError {
    /// A dimension, speed, or scale is outside its legal range.
    NonPositive { name: &'static str, value: f32 },
    /// The screen is too small to hold even one row and column of aliens.
    FleetDoesNotFit { screen: (i32, i32), alien: (i32, i32) },
    /// The ship sprite does not fit on the screen.
    ShipDoesNotFit { screen: (i32, i32), ship: (i32, i32) },
    /// The settings file could not be read.
    Io(std::io::Error),
    /// The settings file is not valid JSON.
    Parse(serde_json::Error),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::NonPositive { name, value } => {
                write!(f, "setting `{name}` = {value} is outside its legal range")
            }
            SettingsError::FleetDoesNotFit { screen, alien } => write!(
                f,
                "screen {}x{} cannot fit a fleet of {}x{} aliens (need one row and one column)",
                screen.0, screen.1, alien.0, alien.1
            ),
            SettingsError::ShipDoesNotFit { screen, ship } => write!(
                f,
                "screen {}x{} cannot fit a {}x{} ship",
                screen.0, screen.1, ship.0, ship.1
            ),
            SettingsError::Io(e) => write!(f, "failed to read settings file: {e}"),
            SettingsError::Parse(e) => write!(f, "failed to parse settings file: {e}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}
