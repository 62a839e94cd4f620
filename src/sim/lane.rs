//! Lanes, hazards and procedural lane generation
//!
//! A lane is one grid row of the world. Its anchor `y` is fixed at creation;
//! the world offset shifts every lane uniformly when drawn.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::train::{Train, TrainTransition};
use crate::consts::*;
use crate::spans_overlap;

/// Lane type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LaneKind {
    Grass,
    Road,
    Water,
    Rail,
}

/// Weighted draw table: out of 7 equally likely slots, 2 grass, 3 road,
/// 1 water and 1 rail.
const LANE_TABLE: [LaneKind; 7] = [
    LaneKind::Grass,
    LaneKind::Grass,
    LaneKind::Road,
    LaneKind::Road,
    LaneKind::Road,
    LaneKind::Water,
    LaneKind::Rail,
];

impl LaneKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaneKind::Grass => "grass",
            LaneKind::Road => "road",
            LaneKind::Water => "water",
            LaneKind::Rail => "rail",
        }
    }

    /// Draw an unforced lane type
    pub fn random(rng: &mut impl RandomSource) -> Self {
        LANE_TABLE[rng.index(LANE_TABLE.len())]
    }

    /// Whether lanes of this kind carry vehicles or logs
    pub fn has_hazards(&self) -> bool {
        matches!(self, LaneKind::Road | LaneKind::Water)
    }
}

/// Display colour of a hazard (render-only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardColor {
    Red,
    DodgerBlue,
    Orange,
    White,
    SaddleBrown,
}

const VEHICLE_PALETTE: [HazardColor; 4] = [
    HazardColor::Red,
    HazardColor::DodgerBlue,
    HazardColor::Orange,
    HazardColor::White,
];

/// A vehicle (road) or log (water)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Signed speed in pixels per tick; the sign is the direction
    pub speed: f32,
    pub color: HazardColor,
}

impl Hazard {
    /// Spawn a hazard for a road or water lane
    pub fn spawn(kind: LaneKind, rng: &mut impl RandomSource) -> Self {
        debug_assert!(kind.has_hazards(), "{kind:?} lanes carry no hazards");
        let direction = if rng.coin() { -1.0 } else { 1.0 };
        let speed = rng.float_range(HAZARD_MIN_SPEED, HAZARD_MAX_SPEED) * direction;
        let (width, color) = match kind {
            LaneKind::Road => (VEHICLE_WIDTH, VEHICLE_PALETTE[rng.index(VEHICLE_PALETTE.len())]),
            _ => (LOG_WIDTH, HazardColor::SaddleBrown),
        };
        let x = rng.int_inclusive(0, SCREEN_WIDTH as i32) as f32;
        Self {
            x,
            width,
            speed,
            color,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Advance one tick and wrap around the playfield
    pub fn advance(&mut self) {
        self.x += self.speed;
        if self.speed > 0.0 && self.x > WRAP_RIGHT {
            self.x = -self.width;
        }
        if self.speed < 0.0 && self.right() < WRAP_LEFT_MARGIN {
            self.x = WRAP_RIGHT;
        }
    }

    /// Open-interval overlap with a horizontal span
    pub fn overlaps(&self, left: f32, right: f32) -> bool {
        spans_overlap(self.x, self.right(), left, right)
    }

    /// Whether a point lies strictly inside the hazard
    pub fn supports(&self, x: f32) -> bool {
        self.x < x && x < self.right()
    }
}

/// One row of the world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lane {
    pub id: u32,
    /// Anchor position (top edge, before the world offset is applied)
    y: f32,
    pub kind: LaneKind,
    /// Vehicles or logs; empty for grass and rail
    pub hazards: Vec<Hazard>,
    /// Rail state; `None` for every other kind
    pub train: Option<Train>,
}

impl Lane {
    /// Create a lane at `y`, drawing its type unless one is forced
    pub fn create(
        id: u32,
        y: f32,
        forced: Option<LaneKind>,
        rng: &mut impl RandomSource,
    ) -> Self {
        let kind = forced.unwrap_or_else(|| LaneKind::random(rng));

        let train = (kind == LaneKind::Rail).then(|| Train::new(rng));
        let hazards = if kind.has_hazards() {
            (0..HAZARDS_PER_LANE)
                .map(|_| Hazard::spawn(kind, rng))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            id,
            y,
            kind,
            hazards,
            train,
        }
    }

    /// Anchor position
    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Visual top edge for the given world offset
    #[inline]
    pub fn visual_top(&self, world_offset: f32) -> f32 {
        self.y + world_offset
    }

    /// Visual bottom edge for the given world offset
    #[inline]
    pub fn visual_bottom(&self, world_offset: f32) -> f32 {
        self.visual_top(world_offset) + CELL_SIZE
    }

    /// Advance hazards and the train by one tick
    ///
    /// Returns the train transition, if any, so the caller can report it.
    pub fn advance(&mut self, rng: &mut impl RandomSource) -> Option<TrainTransition> {
        for hazard in &mut self.hazards {
            hazard.advance();
        }
        self.train.as_mut().and_then(|train| train.step(rng))
    }
}
