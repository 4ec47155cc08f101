//! # Input Module
//!
//! What the host hands the simulation each tick.
//!
//! The host owns the keyboard and the physics body, so it reports the player's position
//! and the actions pressed this frame; the core never polls devices itself.

pub mod commands;

pub use commands::*;

use crate::Vec2;
use serde::{Deserialize, Serialize};

/// Directional keys currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveIntent {
    /// No keys held.
    pub fn none() -> Self {
        Self::default()
    }

    /// Horizontal axis in -1..=1. Left wins when both are held.
    pub fn horizontal(&self) -> i8 {
        if self.left {
            -1
        } else if self.right {
            1
        } else {
            0
        }
    }

    /// Vertical axis in -1..=1 (down is positive). Up wins when both are held.
    pub fn vertical(&self) -> i8 {
        if self.up {
            -1
        } else if self.down {
            1
        } else {
            0
        }
    }

    /// Whether any direction is held.
    pub fn is_moving(&self) -> bool {
        self.horizontal() != 0 || self.vertical() != 0
    }
}

/// Everything the host reports for one tick.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TickInput {
    /// Milliseconds since the previous tick
    pub delta_ms: u64,
    /// Where the host's physics body put the player
    pub player_position: Vec2,
    /// Held movement keys
    pub movement: MoveIntent,
    /// Attack pressed this frame
    pub attack: bool,
    /// Interact pressed this frame
    pub interact: bool,
    /// Potion pressed this frame
    pub use_potion: bool,
    /// Inventory toggle pressed this frame
    pub toggle_inventory: bool,
    /// Dialogue choice picked this frame
    pub dialogue_choice: Option<usize>,
}

impl TickInput {
    /// A tick with no input.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::{TickInput, Vec2};
    ///
    /// let input = TickInput::idle(16, Vec2::new(640.0, 360.0));
    /// assert!(!input.attack);
    /// assert!(!input.movement.is_moving());
    /// ```
    pub fn idle(delta_ms: u64, player_position: Vec2) -> Self {
        Self {
            delta_ms,
            player_position,
            ..Self::default()
        }
    }

    /// Folds a command into this tick's input.
    pub fn apply(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Move(intent) => self.movement = intent,
            PlayerCommand::Attack => self.attack = true,
            PlayerCommand::Interact => self.interact = true,
            PlayerCommand::UsePotion => self.use_potion = true,
            PlayerCommand::ToggleInventory => self.toggle_inventory = true,
            PlayerCommand::ChooseDialogue(index) => self.dialogue_choice = Some(index),
        }
    }
}
