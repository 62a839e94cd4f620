//! Rail lane train timer
//!
//! A train sits dormant while its timer counts down, sweeps across the lane
//! once the timer runs out, then goes dormant again with a fresh timer.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::*;
use crate::spans_overlap;

/// Observable train state changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrainTransition {
    /// Timer dropped under the warning threshold
    Warning,
    /// Dormant -> active
    Arrived,
    /// Active -> dormant
    Departed,
}

/// Per rail lane train state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    /// Ticks until the next arrival (keeps counting while active)
    pub timer: i32,
    pub active: bool,
    /// Left edge of the train
    pub x: f32,
}

fn roll_timer(rng: &mut impl RandomSource) -> i32 {
    rng.int_inclusive(TRAIN_TIMER_MIN, TRAIN_TIMER_MAX)
}

impl Train {
    pub fn new(rng: &mut impl RandomSource) -> Self {
        Self {
            timer: roll_timer(rng),
            active: false,
            x: TRAIN_START_X,
        }
    }

    /// Dormant and about to arrive
    pub fn warning(&self) -> bool {
        !self.active && self.timer < TRAIN_WARNING_TICKS
    }

    /// Advance one tick
    pub fn step(&mut self, rng: &mut impl RandomSource) -> Option<TrainTransition> {
        let was_warning = self.warning();
        self.timer -= 1;

        if self.active {
            self.x += TRAIN_SPEED;
            if self.x > TRAIN_EXIT_X {
                self.active = false;
                self.timer = roll_timer(rng);
                return Some(TrainTransition::Departed);
            }
            None
        } else if self.timer <= 0 {
            self.active = true;
            self.x = TRAIN_START_X;
            Some(TrainTransition::Arrived)
        } else if self.warning() && !was_warning {
            Some(TrainTransition::Warning)
        } else {
            None
        }
    }

    /// Whether an active train covers the horizontal span
    pub fn strikes(&self, left: f32, right: f32) -> bool {
        self.active && spans_overlap(self.x, self.x + TRAIN_WIDTH, left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::ScriptedRng;

    fn dormant(timer: i32) -> Train {
        Train {
            timer,
            active: false,
            x: TRAIN_START_X,
        }
    }

    #[test]
    fn test_countdown_then_arrival() {
        let mut rng = ScriptedRng::constant(0.0);
        let mut train = dormant(2);

        assert_eq!(train.step(&mut rng), None);
        assert_eq!(train.timer, 1);
        assert!(!train.active);

        assert_eq!(train.step(&mut rng), Some(TrainTransition::Arrived));
        assert!(train.active);
        assert_eq!(train.x, TRAIN_START_X);
    }

    #[test]
    fn test_sweep_then_departure() {
        let mut rng = ScriptedRng::constant(1.0);
        let mut train = dormant(1);
        assert_eq!(train.step(&mut rng), Some(TrainTransition::Arrived));

        // -500 + 25n > 600 first holds at n = 45
        let mut ticks = 0;
        let transition = loop {
            ticks += 1;
            if let Some(t) = train.step(&mut rng) {
                break t;
            }
        };
        assert_eq!(transition, TrainTransition::Departed);
        assert_eq!(ticks, 45);
        assert!(!train.active);
        assert_eq!(train.timer, TRAIN_TIMER_MAX);
    }

    #[test]
    fn test_warning_fires_once() {
        let mut rng = ScriptedRng::constant(0.0);
        let mut train = dormant(TRAIN_WARNING_TICKS + 1);

        assert_eq!(train.step(&mut rng), None);
        assert!(!train.warning());
        assert_eq!(train.step(&mut rng), Some(TrainTransition::Warning));
        assert!(train.warning());
        assert_eq!(train.step(&mut rng), None);
    }

    #[test]
    fn test_strikes_only_while_active() {
        let mut train = dormant(10);
        train.x = 0.0;
        assert!(!train.strikes(188.0, 212.0));

        train.active = true;
        assert!(train.strikes(188.0, 212.0));
        assert!(!train.strikes(350.0, 374.0));
    }
}
