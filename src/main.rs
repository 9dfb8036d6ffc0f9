//! Space Escape entry point
//!
//! Native headless driver: runs the simulation with a simple autopilot and
//! prints the final frame as JSON. Rendering and audio backends plug in by
//! consuming the same `RenderSnapshot` and `GameEvent` stream.

use std::path::Path;
use std::process::ExitCode;

use space_escape::Settings;
use space_escape::consts::*;
use space_escape::sim::{
    GameEvent, GameMode, GameState, InputEvent, Key, RenderSnapshot, TickInput, tick,
};

/// Ten minutes of play at the fixed tick rate
const MAX_TICKS: u64 = 10 * 60 * TICKS_PER_SECOND as u64;

fn load_settings() -> Result<Settings, space_escape::ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => Settings::load(Path::new(&path)),
        None => {
            let seed = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            Ok(Settings::with_seed(seed))
        }
    }
}

/// Steer away from the closest hazard bearing down on the ship, fire always
fn autopilot(state: &GameState) -> TickInput {
    let ship = state.player.rect;
    let threat = state
        .meteors
        .iter()
        .filter(|m| m.rect.bottom() > 0 && m.rect.top() < ship.top())
        .filter(|m| m.rect.right() > ship.left() - 20 && m.rect.left() < ship.right() + 20)
        .max_by_key(|m| m.rect.bottom());

    let (left, right) = match threat {
        Some(m) if m.rect.center().x >= ship.center().x => (ship.left() > 0, ship.left() <= 0),
        Some(_) => (ship.right() >= FIELD_WIDTH, ship.right() < FIELD_WIDTH),
        None => (false, false),
    };

    TickInput {
        left,
        right,
        fire: true,
        ..Default::default()
    }
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Space Escape (headless) starting...");

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut state = match GameState::new(settings) {
        Ok(state) => state,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    tick(
        &mut state,
        &TickInput::with_event(InputEvent::KeyDown(Key::Enter)),
    );

    let mut ticks = 0;
    while ticks < MAX_TICKS && state.mode != GameMode::GameOver {
        let input = autopilot(&state);
        let out = tick(&mut state, &input);
        for event in &out.events {
            match event {
                GameEvent::PlaySound(_) => log::trace!("{event:?}"),
                _ => log::debug!("{event:?}"),
            }
        }
        if out.quit {
            break;
        }
        ticks += 1;
    }

    log::info!(
        "Finished after {} ticks: score {}, phase {}, lives {}",
        ticks,
        state.score,
        state.current_phase,
        state.lives()
    );

    match serde_json::to_string_pretty(&RenderSnapshot::capture(&state)) {
        Ok(json) => println!("{json}"),
        Err(err) => log::warn!("Could not serialize snapshot: {err}"),
    }

    ExitCode::SUCCESS
}
