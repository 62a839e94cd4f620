//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical tick per call, no wall-clock time
//! - Every random draw goes through the session's `RandomSource`
//! - Stable iteration order (lane creation order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod lane;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod train;
pub mod world;

pub use collision::{LaneContact, evaluate, lane_contact};
pub use lane::{Hazard, HazardColor, Lane, LaneKind};
pub use player::{Direction, Player};
pub use rng::{RandomSource, ScriptedRng, seeded};
pub use snapshot::{HazardView, LaneView, PlayerView, Snapshot};
pub use state::{EventQueue, GameEvent, GameOverReason, GamePhase, GameState, MAX_PENDING_EVENTS};
pub use tick::{handle_move, tick};
pub use train::{Train, TrainTransition};
pub use world::World;

/// Build a fresh session from a seed
pub fn initialize(seed: u64) -> GameState {
    GameState::new(seed)
}
