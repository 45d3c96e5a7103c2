//! Game state and entity types
//!
//! The whole game is one [`GameState`] owned by the frame driver and passed
//! by reference into the fleet and collision functions. There is no hidden
//! global object graph: the ship, the bullet collection, and the alien
//! collection have exactly one owner.

use glam::Vec2;

use super::fleet;
use super::rect::Rect;
use crate::settings::Settings;

/// Current phase of the game loop state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Inactive: initial state and post-game-over. Only the start trigger
    /// and quit are honored; entities do not update.
    Menu,
    /// Active gameplay: full update every tick.
    Playing,
    /// Timed pause after losing a ship. Entities freeze but the loop keeps
    /// polling, so quit stays live during the pause.
    Respawning,
}

/// Events emitted by the simulation for the frontend to act on
/// (sound cues, cursor changes, logging). Purely informational; the
/// authoritative state is already updated when an event is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new run started from the menu
    GameStarted,
    /// A bullet left the ship
    BulletFired,
    /// Aliens destroyed by the batched bullet collision pass this tick
    AliensDestroyed { count: u32 },
    /// The fleet was cleared and a new one built
    NewLevel { level: u32 },
    /// The ship was hit (or an alien reached the bottom) with lives to spare
    ShipHit,
    /// The last ship was lost; back to the menu
    GameOver,
}

/// Shared position/box fields, composed into each entity type.
///
/// `pos` is the exact float position; the integer bounding box used for
/// rendering and collision is derived from it by truncation so sub-pixel
/// movement accumulates instead of being rounded away each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub w: i32,
    pub h: i32,
}

impl Body {
    pub fn new(x: f32, y: f32, w: i32, h: i32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            w,
            h,
        }
    }

    /// The integer bounding box at the current position
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x as i32, self.pos.y as i32, self.w, self.h)
    }
}

/// The player's ship. One instance per session, recentered on respawn and
/// game start rather than recreated.
#[derive(Debug, Clone)]
pub struct Ship {
    pub body: Body,
    /// Movement flags, held while the matching key is down
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            body: Body::new(0.0, 0.0, settings.ship_width, settings.ship_height),
            moving_left: false,
            moving_right: false,
        };
        ship.center(settings);
        ship
    }

    /// Place the ship centered at the bottom of the screen
    pub fn center(&mut self, settings: &Settings) {
        self.body.pos = Vec2::new(
            ((settings.screen_width - settings.ship_width) / 2) as f32,
            (settings.screen_height - settings.ship_height) as f32,
        );
    }

    /// Advance one frame. The left and right clamps are independent: both
    /// flags may be set, and each side only moves while the matching edge is
    /// inside the screen. The final clamp keeps the exact position inside
    /// `[0, screen_width - ship_width]`.
    pub fn update(&mut self, speed: f32, screen_width: i32) {
        if self.moving_right && self.body.rect().right() < screen_width {
            self.body.pos.x += speed;
        }
        if self.moving_left && self.body.rect().left() > 0 {
            self.body.pos.x -= speed;
        }
        let max_x = (screen_width - self.body.w) as f32;
        self.body.pos.x = self.body.pos.x.clamp(0.0, max_x);
    }
}

/// A bullet in flight. Moves straight up; culled by the bullet-management
/// step once its box leaves the top of the screen.
#[derive(Debug, Clone)]
pub struct Bullet {
    pub body: Body,
}

impl Bullet {
    /// Spawn a bullet at the ship's mid-top
    pub fn new(ship: &Ship, settings: &Settings) -> Self {
        let ship_rect = ship.body.rect();
        Self {
            body: Body::new(
                (ship_rect.center_x() - settings.bullet_width / 2) as f32,
                ship_rect.top() as f32,
                settings.bullet_width,
                settings.bullet_height,
            ),
        }
    }

    /// Advance one frame (upward; no horizontal motion, no clamp)
    pub fn advance(&mut self, speed: f32) {
        self.body.pos.y -= speed;
    }
}

/// One alien in the fleet
#[derive(Debug, Clone, PartialEq)]
pub struct Alien {
    pub body: Body,
}

impl Alien {
    pub fn new(x: f32, y: f32, settings: &Settings) -> Self {
        Self {
            body: Body::new(x, y, settings.alien_width, settings.alien_height),
        }
    }

    /// Read-only edge predicate: true once the box touches either side of
    /// the screen. Does not mutate the fleet direction itself.
    pub fn check_edges(&self, screen_width: i32) -> bool {
        let rect = self.body.rect();
        rect.right() >= screen_width || rect.left() <= 0
    }

    /// Advance one frame by the fleet's shared horizontal step
    pub fn advance(&mut self, dx: f32) {
        self.body.pos.x += dx;
    }
}

/// Run statistics. `score` is monotonic within a run; `high_score` is
/// monotonic across runs (session scope, no persistence).
#[derive(Debug, Clone, Default)]
pub struct GameStats {
    pub ships_left: u32,
    pub score: u64,
    pub high_score: u64,
    pub level: u32,
}

impl GameStats {
    /// Reset per-run statistics. The high score survives.
    pub fn reset(&mut self, settings: &Settings) {
        self.ships_left = settings.ship_limit;
        self.score = 0;
        self.level = 1;
    }
}

/// Dynamic speed and score values, reset from [`Settings`] on game start and
/// scaled up on every new level. Bullet speed is read from here each tick,
/// so a mid-run speedup also affects bullets already in flight.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    pub ship_speed: f32,
    pub bullet_speed: f32,
    pub alien_speed: f32,
    pub alien_points: u64,
}

impl Tuning {
    /// Base values from the static configuration
    pub fn initial(settings: &Settings) -> Self {
        Self {
            ship_speed: settings.ship_speed,
            bullet_speed: settings.bullet_speed,
            alien_speed: settings.alien_speed,
            alien_points: settings.alien_points,
        }
    }

    /// Scale everything up for the next level
    pub fn increase(&mut self, settings: &Settings) {
        self.ship_speed *= settings.speedup_scale;
        self.bullet_speed *= settings.speedup_scale;
        self.alien_speed *= settings.speedup_scale;
        self.alien_points = (self.alien_points as f32 * settings.score_scale).round() as u64;
    }
}

/// Complete game state. The fleet and collision functions borrow into the
/// entity collections; nothing here is shared between owners.
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub stats: GameStats,
    pub tuning: Tuning,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    /// Shared horizontal direction of the whole fleet: +1 right, -1 left
    pub fleet_direction: f32,
    /// Ticks left in the respawn pause (meaningful in `Respawning`)
    pub respawn_ticks: u32,
    /// Cursor visibility the frontend should apply: shown on the menu,
    /// hidden during play
    pub cursor_visible: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events emitted since the last drain
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state on the menu, with a fleet already on screen
    /// behind the play button.
    pub fn new(settings: &Settings) -> Self {
        let mut stats = GameStats::default();
        stats.reset(settings);
        Self {
            phase: GamePhase::Menu,
            stats,
            tuning: Tuning::initial(settings),
            ship: Ship::new(settings),
            bullets: Vec::new(),
            aliens: fleet::create_fleet(settings),
            fleet_direction: 1.0,
            respawn_ticks: 0,
            cursor_visible: true,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Record an event for the frontend
    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events emitted since the last drain
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
