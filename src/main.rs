//! Alien Invasion entry point
//!
//! Initializes logging, loads and validates the configuration (fail fast on
//! a malformed settings file), then runs a scripted session against the
//! headless frontend: click Play, sweep the ship left and right while
//! firing, and quit. A graphical frontend plugs in by implementing
//! [`alien_invasion::platform::Frontend`] and handing it to `App` instead.

use std::path::Path;
use std::process::ExitCode;

use alien_invasion::app::App;
use alien_invasion::platform::{FrontendEvent, HeadlessFrontend, Key};
use alien_invasion::settings::Settings;
use alien_invasion::ui::{PlayButton, Scoreboard};

fn main() -> ExitCode {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Ok(Settings::default()),
    };
    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };

    log::info!(
        "Alien Invasion starting ({}x{} screen, {} lives)",
        settings.screen_width,
        settings.screen_height,
        settings.ship_limit
    );
    log::info!("no graphical frontend wired in; running the scripted headless demo");

    let frontend = HeadlessFrontend::with_script(demo_script(&settings));
    let mut app = match App::new(settings, frontend) {
        Ok(app) => app,
        Err(e) => {
            log::error!("invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };

    // Unpaced: the demo has no display to sync with
    while app.frame() {}

    let board = Scoreboard::from_state(&app.state);
    log::info!(
        "demo finished after {} ticks: score {}, high score {}, level {}, ships left {}, {} sound cues",
        app.state.time_ticks,
        board.score,
        board.high_score,
        board.level,
        board.ships_left,
        app.frontend.sounds.len()
    );
    ExitCode::SUCCESS
}

/// Click Play, then sweep left and right across the screen firing as we go
fn demo_script(settings: &Settings) -> Vec<Vec<FrontendEvent>> {
    let button = PlayButton::new(settings).rect;
    let mut frames = vec![vec![FrontendEvent::MouseDown {
        x: button.center_x(),
        y: button.y + button.h / 2,
    }]];

    let mut direction = Key::Right;
    for _ in 0..24 {
        frames.push(vec![FrontendEvent::KeyDown(direction)]);
        for i in 0..150 {
            if i % 12 == 0 {
                frames.push(vec![
                    FrontendEvent::KeyDown(Key::Fire),
                    FrontendEvent::KeyUp(Key::Fire),
                ]);
            } else {
                frames.push(vec![]);
            }
        }
        frames.push(vec![FrontendEvent::KeyUp(direction)]);
        direction = if direction == Key::Right {
            Key::Left
        } else {
            Key::Right
        };
    }

    frames.push(vec![FrontendEvent::Quit]);
    frames
}
