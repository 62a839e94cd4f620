//! Scrolling lane window
//!
//! Lanes are kept in creation order. Only lanes near the visible band are
//! held: lanes that scroll off the bottom are retired and new ones are
//! materialized above the topmost lane.

use serde::{Deserialize, Serialize};

use super::lane::{Lane, LaneKind};
use super::rng::RandomSource;
use super::state::{EventQueue, GameEvent};
use crate::consts::*;

/// All live lanes plus the cumulative vertical shift
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub lanes: Vec<Lane>,
    /// Forward progress as a visual shift applied to every lane
    pub offset: f32,
    /// Smallest anchor ever generated
    top_y: f32,
    next_id: u32,
}

impl World {
    /// Build the starting window: a run of lanes stacked upward from the
    /// baseline, the first few forced to grass.
    pub fn bootstrap(rng: &mut impl RandomSource) -> Self {
        let mut world = Self {
            lanes: Vec::with_capacity(BOOTSTRAP_LANES + 2),
            offset: 0.0,
            top_y: BASELINE_Y + CELL_SIZE,
            next_id: 1,
        };
        for i in 0..BOOTSTRAP_LANES {
            let forced = (i < SAFE_LANES).then_some(LaneKind::Grass);
            world.push_lane(BASELINE_Y - i as f32 * CELL_SIZE, forced, rng);
        }
        world
    }

    fn push_lane(&mut self, y: f32, forced: Option<LaneKind>, rng: &mut impl RandomSource) -> &Lane {
        let id = self.next_id;
        self.next_id += 1;
        self.top_y = self.top_y.min(y);
        self.lanes.push(Lane::create(id, y, forced, rng));
        &self.lanes[self.lanes.len() - 1]
    }

    /// Lane whose visual band strictly contains `screen_y`
    pub fn lane_at(&self, screen_y: f32) -> Option<&Lane> {
        self.lanes.iter().find(|lane| {
            lane.visual_top(self.offset) < screen_y && screen_y < lane.visual_bottom(self.offset)
        })
    }

    /// Topmost lane (smallest anchor)
    pub fn topmost(&self) -> Option<&Lane> {
        self.lanes.iter().min_by(|a, b| a.y().total_cmp(&b.y()))
    }

    /// Bottommost lane (largest anchor)
    pub fn bottommost(&self) -> Option<&Lane> {
        self.lanes.iter().max_by(|a, b| a.y().total_cmp(&b.y()))
    }

    /// Retire lanes that fell below the screen and fill in new ones
    ///
    /// Normally at most one lane is added per call. Several are added when
    /// the offset jumped by more than a cell since the last call. Lanes
    /// uncovered at the bottom by retreating are refilled with grass.
    pub fn scroll(&mut self, rng: &mut impl RandomSource, events: &mut EventQueue) {
        let offset = self.offset;
        self.lanes.retain(|lane| {
            let keep = lane.visual_top(offset) < RETIRE_Y;
            if !keep {
                log::debug!("Retiring lane {} ({})", lane.id, lane.kind.as_str());
                events.push(GameEvent::LaneRetired { lane: lane.id });
            }
            keep
        });

        while self.top_y + self.offset > SPAWN_HORIZON_Y {
            let y = self.top_y - CELL_SIZE;
            let lane = self.push_lane(y, None, rng);
            log::debug!("Spawned lane {} ({}) at y={}", lane.id, lane.kind.as_str(), y);
            events.push(GameEvent::LaneSpawned {
                lane: lane.id,
                kind: lane.kind,
            });
        }

        while let Some(bottom) = self.bottommost().map(Lane::y) {
            if bottom + CELL_SIZE + self.offset >= SCREEN_HEIGHT {
                break;
            }
            let lane = self.push_lane(bottom + CELL_SIZE, Some(LaneKind::Grass), rng);
            log::debug!("Backfilled lane {} at y={}", lane.id, lane.y());
            events.push(GameEvent::LaneSpawned {
                lane: lane.id,
                kind: lane.kind,
            });
        }
    }

    /// Whether every screen row in `[0, SCREEN_HEIGHT)` is covered by a lane
    pub fn covers_screen(&self) -> bool {
        let mut tops: Vec<f32> = self
            .lanes
            .iter()
            .map(|lane| lane.visual_top(self.offset))
            .collect();
        tops.sort_by(f32::total_cmp);

        let mut covered_to = match tops.first() {
            Some(&first) if first <= 0.0 => first,
            _ => return false,
        };
        for top in tops {
            if top > covered_to {
                return false;
            }
            covered_to = covered_to.max(top + CELL_SIZE);
        }
        covered_to >= SCREEN_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::{ScriptedRng, seeded};

    #[test]
    fn test_bootstrap_layout() {
        let mut rng = seeded(7);
        let world = World::bootstrap(&mut rng);

        assert_eq!(world.lanes.len(), BOOTSTRAP_LANES);
        for (i, lane) in world.lanes.iter().enumerate() {
            assert_eq!(lane.y(), BASELINE_Y - i as f32 * CELL_SIZE);
            if i < SAFE_LANES {
                assert_eq!(lane.kind, LaneKind::Grass);
            }
        }
        assert!(world.covers_screen());
    }

    #[test]
    fn test_scroll_is_stable_without_progress() {
        let mut rng = seeded(7);
        let mut world = World::bootstrap(&mut rng);
        let before = world.lanes.len();
        let mut events = EventQueue::default();

        world.scroll(&mut rng, &mut events);
        assert_eq!(world.lanes.len(), before);
        assert!(events.is_empty());
    }

    #[test]
    fn test_scroll_spawns_one_lane_per_hop() {
        let mut rng = ScriptedRng::constant(0.0); // always grass
        let mut world = World::bootstrap(&mut rng);
        let mut events = EventQueue::default();

        // First hop keeps the top at -120, second brings it to -80
        world.offset += CELL_SIZE;
        world.scroll(&mut rng, &mut events);
        assert!(events.is_empty());

        world.offset += CELL_SIZE;
        world.scroll(&mut rng, &mut events);
        assert_eq!(
            events.drain(),
            vec![GameEvent::LaneSpawned {
                lane: 16,
                kind: LaneKind::Grass
            }]
        );
        let top = world.topmost().expect("window is never empty");
        assert_eq!(top.y(), BASELINE_Y - BOOTSTRAP_LANES as f32 * CELL_SIZE);
    }

    #[test]
    fn test_scroll_retires_lanes_below_screen() {
        let mut rng = ScriptedRng::constant(0.0);
        let mut world = World::bootstrap(&mut rng);
        let mut events = EventQueue::default();

        // Lane 1 sits at 400; three hops push it to 520
        world.offset = 3.0 * CELL_SIZE;
        world.scroll(&mut rng, &mut events);
        assert!(events.contains(&GameEvent::LaneRetired { lane: 1 }));
        assert!(!events.contains(&GameEvent::LaneRetired { lane: 2 }));
        assert!(world.lanes.iter().all(|l| l.visual_top(world.offset) < RETIRE_Y));
        assert!(world.covers_screen());
    }

    #[test]
    fn test_large_jump_refills_window() {
        let mut rng = seeded(3);
        let mut world = World::bootstrap(&mut rng);
        let mut events = EventQueue::default();

        world.offset = 40.0 * CELL_SIZE;
        world.scroll(&mut rng, &mut events);
        assert!(world.covers_screen());
        let top = world.topmost().expect("window is never empty");
        assert!(top.visual_top(world.offset) <= SPAWN_HORIZON_Y);
    }

    #[test]
    fn test_retreat_backfills_with_grass() {
        let mut rng = seeded(11);
        let mut world = World::bootstrap(&mut rng);
        let mut events = EventQueue::default();

        world.offset = 10.0 * CELL_SIZE;
        world.scroll(&mut rng, &mut events);
        world.offset = 4.0 * CELL_SIZE;
        events.clear();
        world.scroll(&mut rng, &mut events);

        assert!(world.covers_screen());
        assert!(events.iter().all(|e| matches!(
            e,
            GameEvent::LaneSpawned {
                kind: LaneKind::Grass,
                ..
            }
        )));
        assert!(!events.is_empty());
    }
}
