//! # Game Events
//!
//! Outbound notifications from the simulation to the host. Events are queued in
//! emission order and drained by the host once per tick.

use crate::{EnemyKind, EntityId, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// How prominently the host should surface a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageImportance {
    Info,
    Success,
    Warning,
    Critical,
}

/// Everything the core tells the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// An enemy struck at the player
    EnemyAttack { enemy_id: EntityId, damage: u32 },
    /// The player swung their weapon
    PlayerAttack {
        origin: Vec2,
        damage: u32,
        radius: f32,
    },
    /// An enemy took a hit; `health` is what it has left
    EnemyDamaged {
        enemy_id: EntityId,
        damage: u32,
        health: u32,
    },
    /// An enemy died and dropped its reward
    EnemyKilled {
        enemy_id: EntityId,
        kind: EnemyKind,
        position: Vec2,
        gold: u32,
        exp: u32,
    },
    /// The player lost health
    PlayerDamaged { damage: u32, health: u32 },
    /// The player drank a potion
    PlayerHealed { amount: u32, health: u32 },
    /// The player's health reached zero
    PlayerDied,
    /// The player is back at the village with full health
    PlayerRespawned { position: Vec2 },
    /// The player reached a new level
    LevelUp { level: u32, max_health: u32 },
    /// A quest became active
    QuestActivated { quest_id: String },
    /// A quest was completed and its gold paid out
    QuestCompleted { quest_id: String, gold: u32 },
    /// An item was bought from a merchant
    ItemPurchased { item_id: String, cost: u32 },
    /// A dialogue node should be shown
    DialogueOpened {
        npc_id: EntityId,
        node_id: String,
        speaker: String,
        text: String,
        choices: Vec<String>,
    },
    /// The conversation ended
    DialogueClosed { npc_id: EntityId },
    /// The inventory panel should open or close
    InventoryToggled,
    /// Free-form notification for the player
    Message {
        text: String,
        importance: MessageImportance,
    },
}

impl GameEvent {
    /// Convenience constructor for a [`GameEvent::Message`].
    pub fn message(text: impl Into<String>, importance: MessageImportance) -> Self {
        GameEvent::Message {
            text: text.into(),
            importance,
        }
    }

    /// Variant name, for logs and summaries.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::EnemyAttack { .. } => "EnemyAttack",
            GameEvent::PlayerAttack { .. } => "PlayerAttack",
            GameEvent::EnemyDamaged { .. } => "EnemyDamaged",
            GameEvent::EnemyKilled { .. } => "EnemyKilled",
            GameEvent::PlayerDamaged { .. } => "PlayerDamaged",
            GameEvent::PlayerHealed { .. } => "PlayerHealed",
            GameEvent::PlayerDied => "PlayerDied",
            GameEvent::PlayerRespawned { .. } => "PlayerRespawned",
            GameEvent::LevelUp { .. } => "LevelUp",
            GameEvent::QuestActivated { .. } => "QuestActivated",
            GameEvent::QuestCompleted { .. } => "QuestCompleted",
            GameEvent::ItemPurchased { .. } => "ItemPurchased",
            GameEvent::DialogueOpened { .. } => "DialogueOpened",
            GameEvent::DialogueClosed { .. } => "DialogueClosed",
            GameEvent::InventoryToggled => "InventoryToggled",
            GameEvent::Message { .. } => "Message",
        }
    }
}

/// FIFO queue of outbound events.
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }

    /// Appends several events, keeping their order.
    pub fn extend(&mut self, events: impl IntoIterator<Item = GameEvent>) {
        self.events.extend(events);
    }

    /// Removes and returns every queued event in emission order.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates over queued events without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }
}
