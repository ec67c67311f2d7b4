//! Pipe Dash entry point
//!
//! Headless driver: runs an autopilot session at one tick per loop pass and
//! dumps the final snapshot as JSON. Rendering, pacing, and input devices
//! are host concerns; this binary stands in for such a host.

use pipe_dash::{Config, GamePhase, GameState, TickInput, tick};

/// Ticks to simulate before calling the session done.
const SESSION_TICKS: u64 = 6_000;

fn main() {
    env_logger::init();

    let config = Config::default();
    let mut state = match GameState::new(config, 0xC0FFEE) {
        Ok(state) => state,
        Err(err) => {
            log::error!("invalid config: {err}");
            std::process::exit(1);
        }
    };

    log::info!(
        "pipe-dash starting: {}x{} field, autopilot for {} ticks",
        config.width,
        config.height,
        SESSION_TICKS
    );

    // Confirm out of the menu
    tick(&mut state, &TickInput { flap: true });

    let mut flaps = 0u64;
    while state.time_ticks < SESSION_TICKS {
        let input = TickInput {
            flap: autopilot(&state),
        };
        if input.flap {
            flaps += 1;
        }
        tick(&mut state, &input);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let snapshot = state.snapshot();
    log::info!(
        "session over: {} ticks, {} flaps, score {}",
        snapshot.time_ticks,
        flaps,
        snapshot.score
    );

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}

/// Demo pilot: aim for the centre of the nearest gap still ahead of the
/// player, or mid-field when the course is clear, and flap whenever the
/// player's centre sinks below the target line.
fn autopilot(state: &GameState) -> bool {
    let player = &state.player.rect;
    let target = state
        .obstacles
        .iter()
        .find(|o| o.is_top && o.rect.right() >= player.left())
        .map(|top| top.rect.bottom() + state.config.gap / 2.0)
        .unwrap_or(state.config.height / 2.0);

    player.center().y > target
}
