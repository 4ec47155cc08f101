//! # NPCs
//!
//! Stationary characters the player can talk to.

use crate::{
    elder_dialogue, guard_dialogue, merchant_dialogue, new_entity_id, DialogueGraph,
    DialogueNode, EntityId, Vec2, WildgroveError, WildgroveResult,
};
use serde::{Deserialize, Serialize};

/// Distance within which the player can start a conversation.
pub const INTERACTION_RADIUS: f32 = 60.0;

/// Kinds of NPC, doubling as texture keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpcKind {
    Villager,
    Merchant,
    Guard,
}

/// A non-player character with a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Npc {
    pub id: EntityId,
    pub kind: NpcKind,
    pub name: String,
    pub position: Vec2,
    pub dialogue: DialogueGraph,
    current_node: String,
}

impl Npc {
    /// Creates an NPC positioned at the dialogue's entry node.
    ///
    /// Fails with a configuration error if the dialogue graph is malformed.
    pub fn new(
        kind: NpcKind,
        name: impl Into<String>,
        position: Vec2,
        dialogue: DialogueGraph,
    ) -> WildgroveResult<Self> {
        dialogue.validate()?;
        let current_node = dialogue.start_id().unwrap_or_default().to_string();

        Ok(Self {
            id: new_entity_id(),
            kind,
            name: name.into(),
            position,
            dialogue,
            current_node,
        })
    }

    /// Whether the player stands close enough to talk.
    pub fn can_interact(&self, player: Vec2) -> bool {
        self.position.distance(player) < INTERACTION_RADIUS
    }

    /// The node the conversation is currently on.
    pub fn interact(&self) -> Option<&DialogueNode> {
        self.dialogue.node(&self.current_node)
    }

    /// Id of the current node.
    pub fn current_node_id(&self) -> &str {
        &self.current_node
    }

    /// Moves the conversation pointer to another node.
    pub fn set_dialogue_node(&mut self, node_id: &str) -> WildgroveResult<()> {
        if self.dialogue.node(node_id).is_none() {
            return Err(WildgroveError::not_found("dialogue node", node_id));
        }
        self.current_node = node_id.to_string();
        Ok(())
    }
}

/// The NPCs living in the starting village.
pub fn village_npcs() -> WildgroveResult<Vec<Npc>> {
    Ok(vec![
        Npc::new(
            NpcKind::Villager,
            "Village Elder",
            Vec2::new(500.0, 600.0),
            elder_dialogue(),
        )?,
        Npc::new(
            NpcKind::Merchant,
            "Wandering Merchant",
            Vec2::new(800.0, 600.0),
            merchant_dialogue(),
        )?,
        Npc::new(
            NpcKind::Guard,
            "Village Guard",
            Vec2::new(650.0, 600.0),
            guard_dialogue(),
        )?,
    ])
}
