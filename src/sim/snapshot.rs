//! Read-only render snapshot
//!
//! Everything a renderer needs for one frame, with lanes already shifted
//! into screen space.

use serde::{Deserialize, Serialize};

use super::lane::{HazardColor, Lane, LaneKind};
use super::rng::RandomSource;
use super::state::GameState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardView {
    pub x: f32,
    pub width: f32,
    pub speed: f32,
    pub color: HazardColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneView {
    pub id: u32,
    pub kind: LaneKind,
    /// Visual top edge on screen
    pub y: f32,
    pub hazards: Vec<HazardView>,
    pub train_active: bool,
    pub train_x: f32,
    /// Rail countdown (0 for non-rail lanes)
    pub train_timer: i32,
    /// Crossing lights should flash
    pub warning: bool,
}

impl LaneView {
    fn capture(lane: &Lane, world_offset: f32) -> Self {
        let train = lane.train.as_ref();
        Self {
            id: lane.id,
            kind: lane.kind,
            y: lane.visual_top(world_offset),
            hazards: lane
                .hazards
                .iter()
                .map(|h| HazardView {
                    x: h.x,
                    width: h.width,
                    speed: h.speed,
                    color: h.color,
                })
                .collect(),
            train_active: train.is_some_and(|t| t.active),
            train_x: train.map_or(0.0, |t| t.x),
            train_timer: train.map_or(0, |t| t.timer),
            warning: train.is_some_and(|t| t.warning()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// One frame of observable state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Lanes in world order
    pub lanes: Vec<LaneView>,
    pub player: PlayerView,
    pub score: u64,
    pub steps_forward: u32,
    pub loiter_ticks: u32,
    pub game_over: bool,
    pub game_over_reason: Option<String>,
    pub time_ticks: u64,
}

impl Snapshot {
    pub fn capture<R: RandomSource>(state: &GameState<R>) -> Self {
        let offset = state.world.offset;
        Self {
            lanes: state
                .world
                .lanes
                .iter()
                .map(|lane| LaneView::capture(lane, offset))
                .collect(),
            player: PlayerView {
                x: state.player.pos.x,
                y: state.player.pos.y,
                size: state.player.size,
            },
            score: state.score,
            steps_forward: state.player.steps_forward,
            loiter_ticks: state.loiter_ticks,
            game_over: state.is_game_over(),
            game_over_reason: state.game_over_reason().map(|r| r.to_string()),
            time_ticks: state.time_ticks,
        }
    }

    /// Serialize for an out-of-process renderer
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
