//! Lane Hopper - An endless road/river/rail crossing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, hazards, trains, collisions, game state)
//! - `driver`: Host-side helpers (fixed timestep clock, demo autopilot)
//! - `settings`: Host configuration loaded from JSON

pub mod driver;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    /// One grid cell: lane height and the distance covered by a single move
    pub const CELL_SIZE: f32 = 40.0;

    /// Player defaults (x/y are the centre of the token)
    pub const PLAYER_SIZE: f32 = 24.0;
    pub const PLAYER_START_X: f32 = 200.0;
    pub const PLAYER_Y: f32 = 340.0;

    /// Bootstrap world: lanes stacked upward from the baseline anchor
    pub const BOOTSTRAP_LANES: usize = 15;
    pub const SAFE_LANES: usize = 4;
    pub const BASELINE_Y: f32 = 400.0;

    /// Road and water lanes always carry exactly this many hazards
    pub const HAZARDS_PER_LANE: usize = 2;
    pub const HAZARD_MIN_SPEED: f32 = 1.5;
    pub const HAZARD_MAX_SPEED: f32 = 3.5;
    pub const VEHICLE_WIDTH: f32 = 60.0;
    pub const LOG_WIDTH: f32 = 100.0;

    /// Hazard wrap bounds
    pub const WRAP_RIGHT: f32 = 450.0;
    pub const WRAP_LEFT_MARGIN: f32 = -50.0;

    /// Train timings (ticks) and geometry
    pub const TRAIN_TIMER_MIN: i32 = 100;
    pub const TRAIN_TIMER_MAX: i32 = 300;
    pub const TRAIN_WARNING_TICKS: i32 = 40;
    pub const TRAIN_START_X: f32 = -500.0;
    pub const TRAIN_SPEED: f32 = 25.0;
    pub const TRAIN_EXIT_X: f32 = 600.0;
    pub const TRAIN_WIDTH: f32 = 350.0;

    /// Ticks without a forward hop before the player is snatched
    pub const LOITER_LIMIT: u32 = 150;

    /// Lanes whose visual top reaches this are retired
    pub const RETIRE_Y: f32 = 500.0;
    /// New lanes are spawned while the topmost visual top is below this
    pub const SPAWN_HORIZON_Y: f32 = -100.0;

    /// Host fixed timestep defaults
    pub const DEFAULT_TICK_HZ: u32 = 30;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Horizontal overlap test between two open spans `[a_left, a_right)` and
/// `[b_left, b_right)`. Touching edges do not overlap.
#[inline]
pub fn spans_overlap(a_left: f32, a_right: f32, b_left: f32, b_right: f32) -> bool {
    a_left < b_right && a_right > b_left
}
