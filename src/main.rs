//! Lane Hopper entry point
//!
//! Runs a headless session: the autopilot plays for the configured number
//! of ticks, events are logged, and the final frame is printed as JSON.

use std::time::{SystemTime, UNIX_EPOCH};

use lane_hopper::Settings;
use lane_hopper::driver::{Autopilot, FixedStep};
use lane_hopper::sim::{Direction, GameEvent, GameState, Snapshot, handle_move, tick};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    log::info!("Lane Hopper (native) starting...");

    let settings = std::env::args()
        .nth(1)
        .map(Settings::load_or_default)
        .unwrap_or_default();

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    let mut state = GameState::new(seed);
    let mut clock = FixedStep::new(settings.tick_dt());
    let mut pilot = Autopilot::new(settings.autopilot_interval);

    // Headless: feed the clock 60 Hz frames instead of sleeping
    let frame_dt = 1.0 / 60.0;
    let mut ticks = 0u64;
    let mut best = 0u64;

    'run: while ticks < settings.max_ticks {
        for _ in 0..clock.advance(frame_dt) {
            if state.is_game_over() {
                if !settings.restart_on_game_over {
                    break 'run;
                }
                // Any key restarts
                handle_move(&mut state, Direction::Up);
            }

            if settings.autopilot {
                if let Some(direction) = pilot.decide(&state) {
                    handle_move(&mut state, direction);
                }
            }
            tick(&mut state);
            ticks += 1;

            for event in state.drain_events() {
                match event {
                    GameEvent::GameOver { reason, score } => {
                        best = best.max(score);
                        log::info!("{} Final score: {}", reason, score);
                    }
                    GameEvent::TrainWarning { lane } => log::debug!("Lane {}: train coming", lane),
                    other => log::trace!("{:?}", other),
                }
            }
        }
    }

    best = best.max(state.score);
    log::info!("Simulated {} ticks, best score {}", ticks, best);
    println!("{}", Snapshot::capture(&state).to_json()?);
    Ok(())
}
