//! The player token and grid-snapped movement

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Discrete move command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a host key name to a direction (arrow keys and WASD)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "up" | "arrowup" | "w" => Some(Direction::Up),
            "down" | "arrowdown" | "s" => Some(Direction::Down),
            "left" | "arrowleft" | "a" => Some(Direction::Left),
            "right" | "arrowright" | "d" => Some(Direction::Right),
            _ => None,
        }
    }
}

/// The player token
///
/// The token never moves vertically on screen: forward progress is
/// expressed through the world offset instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Centre of the token
    pub pos: Vec2,
    pub size: f32,
    /// Net forward hops, never negative
    pub steps_forward: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYER_START_X, PLAYER_Y),
            size: PLAYER_SIZE,
            steps_forward: 0,
        }
    }
}

impl Player {
    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.size / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Sidestep one cell, staying inside `[CELL_SIZE, SCREEN_WIDTH - CELL_SIZE]`
    ///
    /// Returns false when the move was blocked by the margin.
    pub fn strafe(&mut self, direction: Direction) -> bool {
        let x = self.pos.x;
        match direction {
            Direction::Left if x > CELL_SIZE => {
                self.pos.x = (x - CELL_SIZE).max(CELL_SIZE);
                true
            }
            Direction::Right if x < SCREEN_WIDTH - CELL_SIZE => {
                self.pos.x = (x + CELL_SIZE).min(SCREEN_WIDTH - CELL_SIZE);
                true
            }
            _ => false,
        }
    }

    /// Whether the token centre is still on the playfield
    pub fn in_bounds(&self) -> bool {
        (0.0..=SCREEN_WIDTH).contains(&self.pos.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_player() {
        let player = Player::default();
        assert_eq!(player.pos, Vec2::new(200.0, 340.0));
        assert_eq!(player.left(), 188.0);
        assert_eq!(player.bottom(), 352.0);
        assert_eq!(player.steps_forward, 0);
    }

    #[test]
    fn test_strafe_clamped_at_margins() {
        let mut player = Player::default();
        for _ in 0..10 {
            player.strafe(Direction::Left);
        }
        assert_eq!(player.pos.x, CELL_SIZE);
        assert!(!player.strafe(Direction::Left));
        assert_eq!(player.pos.x, CELL_SIZE);

        for _ in 0..10 {
            player.strafe(Direction::Right);
        }
        assert_eq!(player.pos.x, SCREEN_WIDTH - CELL_SIZE);
        assert!(!player.strafe(Direction::Right));
    }

    #[test]
    fn test_strafe_from_off_grid_position() {
        let mut player = Player::default();
        player.pos.x = 45.0;
        assert!(player.strafe(Direction::Left));
        assert_eq!(player.pos.x, CELL_SIZE);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
        assert_eq!(Direction::from_key("a"), Some(Direction::Left));
        assert_eq!(Direction::from_key("space"), None);
    }
}
