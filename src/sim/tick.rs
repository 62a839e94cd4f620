//! Logical tick and move commands
//!
//! One tick is: advance every lane (hazards, trains), then check the
//! player against the advanced lanes, then reconcile the lane window.
//! Move commands are applied between ticks, in whatever order the host
//! delivers them.

use super::collision;
use super::player::Direction;
use super::rng::RandomSource;
use super::state::{GameEvent, GameState};
use super::train::TrainTransition;
use crate::consts::*;

/// Advance the game state by one logical frame
pub fn tick<R: RandomSource>(state: &mut GameState<R>) {
    // Game over is terminal until the next input
    if state.is_game_over() {
        return;
    }

    state.time_ticks += 1;
    state.loiter_ticks += 1;

    // Update pass
    for lane in &mut state.world.lanes {
        let Some(transition) = lane.advance(&mut state.rng) else {
            continue;
        };
        let event = match transition {
            TrainTransition::Warning => GameEvent::TrainWarning { lane: lane.id },
            TrainTransition::Arrived => GameEvent::TrainArrived { lane: lane.id },
            TrainTransition::Departed => GameEvent::TrainDeparted { lane: lane.id },
        };
        log::debug!("Lane {}: {:?}", lane.id, transition);
        state.events.push(event);
    }

    // Read pass
    if let Some(reason) =
        collision::evaluate(&state.world, &mut state.player, state.loiter_ticks)
    {
        state.end_game(reason);
    }

    state.world.scroll(&mut state.rng, &mut state.events);

    log::trace!(
        "Tick {}: offset={} x={} lanes={}",
        state.time_ticks,
        state.world.offset,
        state.player.pos.x,
        state.world.lanes.len()
    );
}

/// Apply one discrete move command
///
/// Any command while the game is over restarts the run instead.
pub fn handle_move<R: RandomSource>(state: &mut GameState<R>, direction: Direction) {
    if state.is_game_over() {
        state.restart();
        return;
    }

    match direction {
        Direction::Up => {
            state.world.offset += CELL_SIZE;
            state.score += 1;
            state.player.steps_forward += 1;
            state.loiter_ticks = 0;
            state.events.push(GameEvent::Hopped { score: state.score });
        }
        Direction::Down => {
            if state.player.steps_forward > 0 {
                state.world.offset -= CELL_SIZE;
                state.player.steps_forward -= 1;
                state.events.push(GameEvent::Retreated);
            }
        }
        Direction::Left | Direction::Right => {
            if state.player.strafe(direction) {
                state.events.push(GameEvent::Strafed {
                    x: state.player.pos.x,
                });
            }
        }
    }
}
