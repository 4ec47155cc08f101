//! # Wildgrove
//!
//! Headless simulation core for a top-down action RPG.
//!
//! ## Architecture Overview
//!
//! Wildgrove owns the gameplay logic and leaves drawing, physics and audio to the host.
//! The core architecture revolves around several key concepts:
//!
//! - **Game State**: the simulation root that owns every component and runs one tick per frame
//! - **Generation System**: seeded overworld painting, cellular-automaton caves and encounters
//! - **Enemy AI**: distance-driven state machines updated by free functions
//! - **Progression**: player stats, inventory and quests, passed around by reference
//! - **Dialogue**: NPC conversation graphs whose choices mutate progression
//!
//! ## Host Contract
//!
//! Each frame the host hands a [`TickInput`] to [`GameState::tick`], applies the returned
//! player velocity, and drains the outbound [`GameEvent`] queue with
//! [`GameState::drain_events`].

pub mod game;
pub mod generation;
pub mod input;
pub mod utils;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use input::*;
pub use utils::*;

/// Core error type for the Wildgrove simulation.
#[derive(thiserror::Error, Debug)]
pub enum WildgroveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generation parameters are unusable
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Not enough of something the player needs (gold, potions)
    #[error("Insufficient {resource}: needed {needed}, have {available}")]
    InsufficientResource {
        resource: String,
        needed: u32,
        available: u32,
    },

    /// Unknown quest, item, NPC or dialogue id
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    /// Generated content failed validation
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
}

impl WildgroveError {
    /// Shorthand for a [`WildgroveError::NotFound`].
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        WildgroveError::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// Whether the simulation can carry on after this error.
    ///
    /// Missing ids and shortfalls are reported to the player or logged;
    /// everything else is a setup failure.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WildgroveError::InsufficientResource { .. } | WildgroveError::NotFound { .. }
        )
    }
}

/// Result type used throughout the Wildgrove codebase.
pub type WildgroveResult<T> = Result<T, WildgroveError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation configuration constants.
pub mod config {
    /// Edge length of one tile in world units
    pub const TILE_SIZE: u32 = 32;

    /// Default overworld width in world units
    pub const DEFAULT_WORLD_WIDTH: u32 = 3200;

    /// Default overworld height in world units
    pub const DEFAULT_WORLD_HEIGHT: u32 = 2400;

    /// Where the player starts and respawns
    pub const PLAYER_START: (f32, f32) = (640.0, 360.0);

    /// Default player starting health
    pub const DEFAULT_PLAYER_HEALTH: u32 = 100;

    /// Delay between the player dying and respawning
    pub const RESPAWN_DELAY_MS: u64 = 2000;

    /// Frames per second assumed by the headless runner
    pub const TARGET_FPS: u64 = 60;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_recoverability() {
        assert!(WildgroveError::not_found("quest", "nope").is_recoverable());
        assert!(WildgroveError::InsufficientResource {
            resource: "gold".to_string(),
            needed: 100,
            available: 3,
        }
        .is_recoverable());
        assert!(!WildgroveError::Configuration("tile size is zero".to_string()).is_recoverable());
        assert!(!WildgroveError::GenerationFailed("empty".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = WildgroveError::not_found("quest", "main_quest_9");
        assert_eq!(err.to_string(), "quest not found: main_quest_9");

        let err = WildgroveError::InsufficientResource {
            resource: "gold".to_string(),
            needed: 20,
            available: 5,
        };
        assert_eq!(err.to_string(), "Insufficient gold: needed 20, have 5");
    }
}
