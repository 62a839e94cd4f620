//! Player vs lane interaction checks
//!
//! Runs after every lane has been advanced for the tick. Lanes are visited
//! in world order and the pass stops at the first fatal contact; the
//! session-wide loiter and boundary checks run last, after any log carry.

use super::lane::{Lane, LaneKind};
use super::player::Player;
use super::state::GameOverReason;
use super::world::World;
use crate::consts::LOITER_LIMIT;

/// Result of checking the player against one lane
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaneContact {
    /// Nothing happens
    Clear,
    /// Standing on a log: carry the player by this many pixels
    Carried(f32),
    /// The run ends
    Fatal(GameOverReason),
}

/// Check the player against a single lane
pub fn lane_contact(lane: &Lane, world_offset: f32, player: &Player) -> LaneContact {
    let top = lane.visual_top(world_offset);
    let bottom = lane.visual_bottom(world_offset);
    let overlaps_row = top < player.bottom() && bottom > player.top();

    match lane.kind {
        LaneKind::Grass => LaneContact::Clear,
        LaneKind::Road => {
            let hit = overlaps_row
                && lane
                    .hazards
                    .iter()
                    .any(|car| car.overlaps(player.left(), player.right()));
            if hit {
                LaneContact::Fatal(GameOverReason::Splat)
            } else {
                LaneContact::Clear
            }
        }
        LaneKind::Rail => {
            let hit = overlaps_row
                && lane
                    .train
                    .as_ref()
                    .is_some_and(|train| train.strikes(player.left(), player.right()));
            if hit {
                LaneContact::Fatal(GameOverReason::Trained)
            } else {
                LaneContact::Clear
            }
        }
        LaneKind::Water => {
            // Only the lane the player's centre is standing in matters
            let standing = top < player.pos.y && player.pos.y < bottom;
            if !standing {
                return LaneContact::Clear;
            }
            match lane.hazards.iter().find(|log| log.supports(player.pos.x)) {
                Some(log) => LaneContact::Carried(log.speed),
                None => LaneContact::Fatal(GameOverReason::Drowned),
            }
        }
    }
}

/// Run every check for one tick, applying log carry to the player
///
/// Returns the first detected game-over reason.
pub fn evaluate(world: &World, player: &mut Player, loiter_ticks: u32) -> Option<GameOverReason> {
    for lane in &world.lanes {
        match lane_contact(lane, world.offset, player) {
            LaneContact::Clear => {}
            LaneContact::Carried(dx) => player.pos.x += dx,
            LaneContact::Fatal(reason) => return Some(reason),
        }
    }

    if loiter_ticks > LOITER_LIMIT {
        return Some(GameOverReason::Snatched);
    }
    if !player.in_bounds() {
        return Some(GameOverReason::Lost);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::lane::{Hazard, HazardColor};
    use crate::sim::rng::ScriptedRng;

    /// Lane whose visual band (offset 0) holds the player row
    const PLAYER_ROW_Y: f32 = 320.0;

    fn lane(kind: LaneKind, y: f32, hazards: Vec<Hazard>) -> Lane {
        let mut rng = ScriptedRng::constant(0.5);
        let mut lane = Lane::create(1, y, Some(kind), &mut rng);
        lane.hazards = hazards;
        lane
    }

    fn hazard(x: f32, width: f32, speed: f32) -> Hazard {
        Hazard {
            x,
            width,
            speed,
            color: HazardColor::Red,
        }
    }

    #[test]
    fn test_vehicle_strike() {
        let player = Player::default();
        let road = lane(
            LaneKind::Road,
            PLAYER_ROW_Y,
            vec![hazard(170.0, VEHICLE_WIDTH, 2.0)],
        );
        assert_eq!(
            lane_contact(&road, 0.0, &player),
            LaneContact::Fatal(GameOverReason::Splat)
        );
    }

    #[test]
    fn test_vehicle_touching_edge_misses() {
        let player = Player::default();
        // Car ends exactly at the player's left edge
        let road = lane(
            LaneKind::Road,
            PLAYER_ROW_Y,
            vec![hazard(188.0 - VEHICLE_WIDTH, VEHICLE_WIDTH, 2.0)],
        );
        assert_eq!(lane_contact(&road, 0.0, &player), LaneContact::Clear);
    }

    #[test]
    fn test_vehicle_in_other_row_misses() {
        let player = Player::default();
        let road = lane(
            LaneKind::Road,
            PLAYER_ROW_Y - CELL_SIZE,
            vec![hazard(170.0, VEHICLE_WIDTH, 2.0)],
        );
        assert_eq!(lane_contact(&road, 0.0, &player), LaneContact::Clear);
        // One hop later the same lane is the player's row
        assert_eq!(
            lane_contact(&road, CELL_SIZE, &player),
            LaneContact::Fatal(GameOverReason::Splat)
        );
    }

    #[test]
    fn test_train_strike_only_when_active() {
        let player = Player::default();
        let mut rail = lane(LaneKind::Rail, PLAYER_ROW_Y, Vec::new());
        if let Some(train) = rail.train.as_mut() {
            train.x = 0.0;
        }
        assert_eq!(lane_contact(&rail, 0.0, &player), LaneContact::Clear);

        if let Some(train) = rail.train.as_mut() {
            train.active = true;
        }
        assert_eq!(
            lane_contact(&rail, 0.0, &player),
            LaneContact::Fatal(GameOverReason::Trained)
        );
    }

    #[test]
    fn test_log_carries_player() {
        let player = Player::default();
        let water = lane(
            LaneKind::Water,
            PLAYER_ROW_Y,
            vec![hazard(150.0, LOG_WIDTH, -2.5)],
        );
        assert_eq!(
            lane_contact(&water, 0.0, &player),
            LaneContact::Carried(-2.5)
        );
    }

    #[test]
    fn test_first_supporting_log_wins() {
        let player = Player::default();
        let water = lane(
            LaneKind::Water,
            PLAYER_ROW_Y,
            vec![hazard(150.0, LOG_WIDTH, 1.5), hazard(160.0, LOG_WIDTH, 3.0)],
        );
        assert_eq!(lane_contact(&water, 0.0, &player), LaneContact::Carried(1.5));
    }

    #[test]
    fn test_drowning() {
        let player = Player::default();
        let water = lane(
            LaneKind::Water,
            PLAYER_ROW_Y,
            vec![hazard(0.0, LOG_WIDTH, 2.0), hazard(300.0, LOG_WIDTH, 2.0)],
        );
        assert_eq!(
            lane_contact(&water, 0.0, &player),
            LaneContact::Fatal(GameOverReason::Drowned)
        );
    }

    #[test]
    fn test_water_elsewhere_is_harmless() {
        let player = Player::default();
        let water = lane(LaneKind::Water, PLAYER_ROW_Y - CELL_SIZE, Vec::new());
        assert_eq!(lane_contact(&water, 0.0, &player), LaneContact::Clear);
    }

    #[test]
    fn test_evaluate_carry_then_boundary() {
        let mut rng = ScriptedRng::constant(0.0);
        let mut world = World::bootstrap(&mut rng);
        world.lanes = vec![lane(
            LaneKind::Water,
            PLAYER_ROW_Y,
            vec![hazard(350.0, LOG_WIDTH, 3.0)],
        )];
        let mut player = Player::default();
        player.pos.x = 398.0;

        assert_eq!(evaluate(&world, &mut player, 0), Some(GameOverReason::Lost));
        assert_eq!(player.pos.x, 401.0);
    }

    #[test]
    fn test_evaluate_loiter_limit() {
        let mut rng = ScriptedRng::constant(0.0);
        let world = World::bootstrap(&mut rng);
        let mut player = Player::default();

        assert_eq!(evaluate(&world, &mut player, LOITER_LIMIT), None);
        assert_eq!(
            evaluate(&world, &mut player, LOITER_LIMIT + 1),
            Some(GameOverReason::Snatched)
        );
    }

    #[test]
    fn test_evaluate_lane_failure_beats_loiter() {
        let mut rng = ScriptedRng::constant(0.0);
        let mut world = World::bootstrap(&mut rng);
        world.lanes.push(lane(LaneKind::Water, PLAYER_ROW_Y, Vec::new()));
        let mut player = Player::default();

        assert_eq!(
            evaluate(&world, &mut player, LOITER_LIMIT + 1),
            Some(GameOverReason::Drowned)
        );
    }
}
