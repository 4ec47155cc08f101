//! # Dialogue Graphs
//!
//! NPC conversations as directed graphs of text nodes. Choices lead to another node or
//! end the conversation, and may carry an action that mutates the progression store.

use crate::{
    GameEvent, InventoryItem, MessageImportance, ProgressionStore, WildgroveError,
    WildgroveResult,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Side effect attached to a dialogue choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogueAction {
    /// Activates a quest and announces it under `title`
    ActivateQuest { quest_id: String, title: String },
    /// Buys an item for gold
    Purchase { item: InventoryItem, cost: u32 },
}

impl DialogueAction {
    /// Runs the action against the store and returns the events it produced.
    ///
    /// A purchase the player cannot afford fails with
    /// [`WildgroveError::InsufficientResource`] and changes nothing.
    pub fn execute(&self, store: &mut ProgressionStore) -> WildgroveResult<Vec<GameEvent>> {
        match self {
            DialogueAction::ActivateQuest { quest_id, title } => {
                store.activate_quest(quest_id)?;
                Ok(vec![
                    GameEvent::QuestActivated {
                        quest_id: quest_id.clone(),
                    },
                    GameEvent::message(format!("Quest Accepted: {}", title), MessageImportance::Info),
                ])
            }
            DialogueAction::Purchase { item, cost } => {
                store.spend_gold(*cost)?;
                store.add_item(item.clone());
                Ok(vec![
                    GameEvent::ItemPurchased {
                        item_id: item.id.clone(),
                        cost: *cost,
                    },
                    GameEvent::message(format!("Purchased: {}", item.name), MessageImportance::Success),
                ])
            }
        }
    }
}

/// One selectable reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueChoice {
    pub text: String,
    /// Node to continue with; `None` ends the conversation
    pub next: Option<String>,
    pub action: Option<DialogueAction>,
}

impl DialogueChoice {
    /// A choice leading to `next` with no side effect.
    pub fn goto(text: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next: Some(next.into()),
            action: None,
        }
    }

    /// A choice that ends the conversation.
    pub fn end(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next: None,
            action: None,
        }
    }

    /// Attaches an action.
    pub fn with_action(mut self, action: DialogueAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// One conversation turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueNode {
    pub id: String,
    pub speaker: String,
    pub text: String,
    pub choices: Vec<DialogueChoice>,
}

impl DialogueNode {
    /// Creates a node.
    pub fn new(
        id: impl Into<String>,
        speaker: impl Into<String>,
        text: impl Into<String>,
        choices: Vec<DialogueChoice>,
    ) -> Self {
        Self {
            id: id.into(),
            speaker: speaker.into(),
            text: text.into(),
            choices,
        }
    }

    /// Choice texts in display order.
    pub fn choice_texts(&self) -> Vec<String> {
        self.choices.iter().map(|c| c.text.clone()).collect()
    }
}

/// What selecting a choice produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceOutcome {
    /// Node to show next, or `None` when the conversation is over
    pub next: Option<String>,
    /// Events raised by the choice's action
    pub events: Vec<GameEvent>,
}

/// An NPC's full conversation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DialogueGraph {
    pub nodes: Vec<DialogueNode>,
}

impl DialogueGraph {
    /// Builds a graph from nodes; the first node is the entry point.
    pub fn new(nodes: Vec<DialogueNode>) -> Self {
        Self { nodes }
    }

    /// Id of the entry node.
    pub fn start_id(&self) -> Option<&str> {
        self.nodes.first().map(|n| n.id.as_str())
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&DialogueNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Checks that node ids are unique and every `next` resolves.
    pub fn validate(&self) -> WildgroveResult<()> {
        let mut ids = HashSet::new();
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(WildgroveError::Configuration(format!(
                    "duplicate dialogue node id '{}'",
                    node.id
                )));
            }
        }

        for node in &self.nodes {
            for choice in &node.choices {
                if let Some(next) = &choice.next {
                    if !ids.contains(next.as_str()) {
                        return Err(WildgroveError::Configuration(format!(
                            "dialogue node '{}' points at unknown node '{}'",
                            node.id, next
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Selects a choice on a node, running its action.
    ///
    /// Unknown nodes and out-of-range choices are [`WildgroveError::NotFound`]. An action
    /// the player cannot afford turns into a player-facing message and the choice still
    /// follows its edge.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::{elder_dialogue, ProgressionStore};
    ///
    /// let graph = elder_dialogue();
    /// let mut store = ProgressionStore::new();
    /// let outcome = graph.select("elder_greeting", 2, &mut store).unwrap();
    /// assert_eq!(outcome.next, None);
    /// ```
    pub fn select(
        &self,
        node_id: &str,
        choice_index: usize,
        store: &mut ProgressionStore,
    ) -> WildgroveResult<ChoiceOutcome> {
        let node = self
            .node(node_id)
            .ok_or_else(|| WildgroveError::not_found("dialogue node", node_id))?;
        let choice = node.choices.get(choice_index).ok_or_else(|| {
            WildgroveError::not_found("dialogue choice", format!("{}#{}", node_id, choice_index))
        })?;

        debug!("Dialogue {} -> '{}'", node_id, choice.text);

        let events = match &choice.action {
            Some(action) => match action.execute(store) {
                Ok(events) => events,
                Err(WildgroveError::InsufficientResource { resource, .. }) => {
                    vec![GameEvent::message(
                        format!("Not enough {}!", resource),
                        MessageImportance::Warning,
                    )]
                }
                Err(err) => return Err(err),
            },
            None => Vec::new(),
        };

        Ok(ChoiceOutcome {
            next: choice.next.clone(),
            events,
        })
    }
}
