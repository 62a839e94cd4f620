//! Host-side driving helpers
//!
//! The simulation only knows logical ticks and move commands. `FixedStep`
//! turns wall-clock frame time into ticks; `Autopilot` plays the demo.

use crate::consts::*;
use crate::sim::{Direction, GameState, Lane, LaneKind, RandomSource};

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FixedStep {
    tick_dt: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(tick_dt: f32) -> Self {
        Self {
            tick_dt,
            accumulator: 0.0,
        }
    }

    /// Feed one frame's elapsed time; returns how many ticks to run
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= self.tick_dt && substeps < MAX_SUBSTEPS {
            self.accumulator -= self.tick_dt;
            substeps += 1;
        }
        substeps
    }
}

/// Safety margin kept around the player when judging road lanes
const ROAD_MARGIN: f32 = CELL_SIZE;
/// Minimum log overlap on each side before hopping onto it
const LOG_MARGIN: f32 = 10.0;
/// Hop regardless of danger once this close to being snatched
const LOITER_PANIC: u32 = LOITER_LIMIT - 20;

/// Demo player: hops forward when the next lane looks safe
#[derive(Debug, Clone)]
pub struct Autopilot {
    interval: u32,
    countdown: u32,
}

impl Autopilot {
    pub fn new(interval: u32) -> Self {
        let interval = interval.max(1);
        Self {
            interval,
            countdown: interval,
        }
    }

    /// Decide the next move, if any; call once per tick
    pub fn decide<R: RandomSource>(&mut self, state: &GameState<R>) -> Option<Direction> {
        if state.is_game_over() {
            return None;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return None;
        }
        self.countdown = self.interval;

        let x = state.player.pos.x;
        let ahead = state.world.lane_at(PLAYER_Y - CELL_SIZE);
        let current = state.world.lane_at(PLAYER_Y);

        if lane_is_safe(ahead, x) {
            return Some(Direction::Up);
        }

        // Sidestep toward a column where the next lane is open
        for (direction, dx) in [(Direction::Left, -CELL_SIZE), (Direction::Right, CELL_SIZE)] {
            let target = x + dx;
            if !(CELL_SIZE..=SCREEN_WIDTH - CELL_SIZE).contains(&target) {
                continue;
            }
            if lane_is_safe(ahead, target) && lane_is_safe(current, target) {
                return Some(direction);
            }
        }

        (state.loiter_ticks >= LOITER_PANIC).then_some(Direction::Up)
    }
}

/// Whether standing at `x` in `lane` looks survivable for a moment
fn lane_is_safe(lane: Option<&Lane>, x: f32) -> bool {
    let Some(lane) = lane else {
        return true;
    };
    let half = PLAYER_SIZE / 2.0;
    match lane.kind {
        LaneKind::Grass => true,
        LaneKind::Road => !lane
            .hazards
            .iter()
            .any(|car| car.overlaps(x - half - ROAD_MARGIN, x + half + ROAD_MARGIN)),
        LaneKind::Water => lane
            .hazards
            .iter()
            .any(|log| log.x + LOG_MARGIN < x && x < log.right() - LOG_MARGIN),
        LaneKind::Rail => lane
            .train
            .as_ref()
            .is_none_or(|train| !train.active && !train.warning()),
    }
}
