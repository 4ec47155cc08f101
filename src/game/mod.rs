//! # Game Module
//!
//! Core simulation state, world representation, and entity systems.
//!
//! This module contains the fundamental building blocks of Wildgrove:
//! - The tile grid produced by the generators
//! - Enemy, player and NPC components with the systems that update them
//! - The progression store and dialogue graphs
//! - The outbound event queue and the simulation root

pub mod content;
pub mod dialogue;
pub mod enemy;
pub mod events;
pub mod npc;
pub mod player;
pub mod progression;
pub mod state;
pub mod world;

pub use content::*;
pub use dialogue::*;
pub use enemy::*;
pub use events::*;
pub use npc::*;
pub use player::*;
pub use progression::*;
pub use state::*;
pub use world::*;

use crate::Vec2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a cell coordinate in a tile grid.
///
/// # Examples
///
/// ```
/// use wildgrove::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
///
/// let adjacent = pos.adjacent_positions();
/// assert_eq!(adjacent.len(), 8); // All 8 surrounding positions
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Calculates the Manhattan distance to another position.
    pub fn manhattan_distance(self, other: Position) -> u32 {
        ((self.x - other.x).abs() + (self.y - other.y).abs()) as u32
    }

    /// Returns all 8 adjacent positions (including diagonals).
    pub fn adjacent_positions(self) -> Vec<Position> {
        vec![
            Position::new(self.x - 1, self.y - 1), // NW
            Position::new(self.x, self.y - 1),     // N
            Position::new(self.x + 1, self.y - 1), // NE
            Position::new(self.x - 1, self.y),     // W
            Position::new(self.x + 1, self.y),     // E
            Position::new(self.x - 1, self.y + 1), // SW
            Position::new(self.x, self.y + 1),     // S
            Position::new(self.x + 1, self.y + 1), // SE
        ]
    }

    /// Returns only the 4 cardinal adjacent positions (no diagonals).
    pub fn cardinal_adjacent_positions(self) -> Vec<Position> {
        vec![
            Position::new(self.x, self.y - 1), // N
            Position::new(self.x - 1, self.y), // W
            Position::new(self.x + 1, self.y), // E
            Position::new(self.x, self.y + 1), // S
        ]
    }

    /// World-space centre of this cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::{Position, Vec2};
    ///
    /// assert_eq!(Position::new(2, 0).world_center(32), Vec2::new(80.0, 16.0));
    /// ```
    pub fn world_center(self, tile_size: u32) -> Vec2 {
        let ts = tile_size as f32;
        Vec2::new(self.x as f32 * ts + ts / 2.0, self.y as f32 * ts + ts / 2.0)
    }

    /// The cell containing a world-space point.
    pub fn from_world(point: Vec2, tile_size: u32) -> Self {
        let ts = tile_size.max(1) as f32;
        Self::new((point.x / ts).floor() as i32, (point.y / ts).floor() as i32)
    }
}

/// Unique identifier for enemies and NPCs.
pub type EntityId = Uuid;

/// Creates a new unique entity ID.
pub fn new_entity_id() -> EntityId {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(5, 10);
        assert_eq!(pos.x, 5);
        assert_eq!(pos.y, 10);
    }

    #[test]
    fn test_position_manhattan_distance() {
        let pos1 = Position::new(0, 0);
        let pos2 = Position::new(3, 4);
        assert_eq!(pos1.manhattan_distance(pos2), 7);
    }

    #[test]
    fn test_position_adjacent() {
        let pos = Position::new(5, 5);
        let adjacent = pos.adjacent_positions();
        assert_eq!(adjacent.len(), 8);
        assert!(adjacent.contains(&Position::new(4, 4)));
        assert!(adjacent.contains(&Position::new(6, 6)));
        assert!(!adjacent.contains(&pos));
    }

    #[test]
    fn test_position_cardinal_adjacent() {
        let pos = Position::new(5, 5);
        let adjacent = pos.cardinal_adjacent_positions();
        assert_eq!(adjacent.len(), 4);
        assert!(adjacent.contains(&Position::new(5, 4))); // North
        assert!(adjacent.contains(&Position::new(4, 5))); // West
        assert!(!adjacent.contains(&Position::new(4, 4))); // No diagonal
    }

    #[test]
    fn test_world_conversion() {
        let cell = Position::new(3, 7);
        let center = cell.world_center(32);
        assert_eq!(Position::from_world(center, 32), cell);
        assert_eq!(Position::from_world(Vec2::new(-1.0, 0.0), 32), Position::new(-1, 0));
    }

    #[test]
    fn test_entity_id_uniqueness() {
        let id1 = new_entity_id();
        let id2 = new_entity_id();
        assert_ne!(id1, id2);
    }
}
