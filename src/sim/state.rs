//! Game state and core simulation types
//!
//! The session owns everything: the lane window, the player, the score and
//! the random source. A restart rebuilds all of it at once.

use std::collections::VecDeque;
use std::fmt;

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::lane::LaneKind;
use super::player::Player;
use super::rng::{RandomSource, seeded};
use super::world::World;

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Hit by a vehicle
    Splat,
    /// Hit by a train
    Trained,
    /// In the water without a log underneath
    Drowned,
    /// Loitered too long without hopping forward
    Snatched,
    /// Carried off the playfield
    Lost,
}

impl GameOverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameOverReason::Splat => "SPLAT!",
            GameOverReason::Trained => "TRAINED!",
            GameOverReason::Drowned => "DROWNED!",
            GameOverReason::Snatched => "SNATCHED!",
            GameOverReason::Lost => "LOST!",
        }
    }
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Running,
    /// Terminal until the next input restarts the run
    GameOver(GameOverReason),
}

/// Observable things that happened, for audio/visual collaborators
///
/// Events never feed back into the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Hopped { score: u64 },
    Retreated,
    Strafed { x: f32 },
    LaneSpawned { lane: u32, kind: LaneKind },
    LaneRetired { lane: u32 },
    TrainWarning { lane: u32 },
    TrainArrived { lane: u32 },
    TrainDeparted { lane: u32 },
    GameOver { reason: GameOverReason, score: u64 },
    Restarted,
}

/// Most events kept when the host never drains the queue
pub const MAX_PENDING_EVENTS: usize = 256;

/// Bounded event queue; the oldest entry is dropped once full
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventQueue {
    pending: VecDeque<GameEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: GameEvent) {
        if self.pending.len() == MAX_PENDING_EVENTS {
            self.pending.pop_front();
        }
        self.pending.push_back(event);
    }

    /// Take all pending events, oldest first
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.pending.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn contains(&self, event: &GameEvent) -> bool {
        self.pending.contains(event)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.pending.iter()
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = Pcg32> {
    /// Source for every random draw of the run
    pub rng: R,
    pub world: World,
    pub player: Player,
    pub score: u64,
    /// Ticks since the last forward hop
    pub loiter_ticks: u32,
    pub phase: GamePhase,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Number of restarts since construction
    pub runs: u32,
    /// Pending events, drained by the host
    pub events: EventQueue,
}

impl GameState<Pcg32> {
    /// Create a new session from a seed
    pub fn new(seed: u64) -> Self {
        log::info!("New session with seed: {}", seed);
        Self::with_rng(seeded(seed))
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new session drawing from the given source
    pub fn with_rng(mut rng: R) -> Self {
        let world = World::bootstrap(&mut rng);
        Self {
            rng,
            world,
            player: Player::default(),
            score: 0,
            loiter_ticks: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            runs: 0,
            events: EventQueue::default(),
        }
    }

    /// Rebuild world, player and score from scratch, keeping the random source
    pub fn restart(&mut self) {
        self.world = World::bootstrap(&mut self.rng);
        self.player = Player::default();
        self.score = 0;
        self.loiter_ticks = 0;
        self.phase = GamePhase::Running;
        self.time_ticks = 0;
        self.runs += 1;
        self.events.push(GameEvent::Restarted);
        log::info!("Run {} started", self.runs);
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver(_))
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.phase {
            GamePhase::GameOver(reason) => Some(reason),
            GamePhase::Running => None,
        }
    }

    /// Enter the terminal phase; the first reason sticks
    pub fn end_game(&mut self, reason: GameOverReason) {
        if self.is_game_over() {
            return;
        }
        log::info!("Game over: {} (score {})", reason, self.score);
        self.phase = GamePhase::GameOver(reason);
        self.events.push(GameEvent::GameOver {
            reason,
            score: self.score,
        });
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }
}
