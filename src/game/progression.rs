//! # Progression Store
//!
//! Player stats, inventory, quests and progress flags.
//!
//! The store is constructed explicitly by the simulation root and handed by reference
//! to whatever needs it: combat rewards, potions, dialogue actions.

use crate::{config, WildgroveError, WildgroveResult};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Health restored by one potion.
pub const POTION_HEAL_AMOUNT: u32 = 50;

/// Max health gained per level.
pub const MAX_HEALTH_PER_LEVEL: u32 = 10;

/// Experience needed per level; the threshold for the next level is `level * EXP_PER_LEVEL`.
pub const EXP_PER_LEVEL: u32 = 100;

/// Categories of inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Potion,
    Key,
    Misc,
}

/// A stack of items in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    /// Texture key the host draws this item with
    pub sprite: String,
    pub quantity: u32,
    pub equipped: bool,
}

impl InventoryItem {
    /// Creates an unequipped item stack.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: ItemKind,
        sprite: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            sprite: sprite.into(),
            quantity,
            equipped: false,
        }
    }
}

/// What completing a quest pays out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QuestReward {
    pub gold: Option<u32>,
    pub item: Option<String>,
}

/// A quest the player can take on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub objectives: Vec<String>,
    pub active: bool,
    pub completed: bool,
    pub rewards: QuestReward,
}

/// Result of completing a quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestCompletion {
    /// Gold added to the player's purse
    pub gold_granted: u32,
    /// Item reward that was not added to the inventory
    pub ungranted_item: Option<String>,
}

/// Player progression state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionStore {
    pub health: u32,
    pub max_health: u32,
    pub gold: u32,
    pub level: u32,
    pub experience: u32,
    pub inventory: Vec<InventoryItem>,
    pub quests: Vec<Quest>,
    pub equipped_weapon: String,
    progress: HashMap<String, bool>,
}

impl ProgressionStore {
    /// Creates a store with the starting loadout and quest log.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::ProgressionStore;
    ///
    /// let store = ProgressionStore::new();
    /// assert_eq!(store.level, 1);
    /// assert_eq!(store.item_quantity("potion1"), 3);
    /// assert!(store.quest("main_quest_1").unwrap().active);
    /// ```
    pub fn new() -> Self {
        Self {
            health: config::DEFAULT_PLAYER_HEALTH,
            max_health: config::DEFAULT_PLAYER_HEALTH,
            gold: 0,
            level: 1,
            experience: 0,
            inventory: crate::content::starting_inventory(),
            quests: crate::content::starting_quests(),
            equipped_weapon: "sword".to_string(),
            progress: HashMap::new(),
        }
    }

    /// Creates a store with nothing in the inventory and no quests.
    pub fn empty() -> Self {
        Self {
            inventory: Vec::new(),
            quests: Vec::new(),
            ..Self::new()
        }
    }

    // Inventory

    /// Adds an item, merging with an existing stack of the same id.
    ///
    /// Empty stacks are ignored so the inventory never holds a zero-quantity entry.
    pub fn add_item(&mut self, item: InventoryItem) {
        if item.quantity == 0 {
            return;
        }
        match self.inventory.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => self.inventory.push(item),
        }
    }

    /// Removes `quantity` of an item, dropping the stack once it runs out.
    pub fn remove_item(&mut self, item_id: &str, quantity: u32) -> WildgroveResult<()> {
        let index = self
            .inventory
            .iter()
            .position(|i| i.id == item_id)
            .ok_or_else(|| WildgroveError::not_found("item", item_id))?;

        let item = &mut self.inventory[index];
        item.quantity = item.quantity.saturating_sub(quantity);
        if item.quantity == 0 {
            self.inventory.remove(index);
        }
        Ok(())
    }

    /// Looks up an inventory stack.
    pub fn item(&self, item_id: &str) -> Option<&InventoryItem> {
        self.inventory.iter().find(|i| i.id == item_id)
    }

    /// How many of an item the player holds.
    pub fn item_quantity(&self, item_id: &str) -> u32 {
        self.item(item_id).map(|i| i.quantity).unwrap_or(0)
    }

    /// Total potions across all potion stacks.
    pub fn potion_count(&self) -> u32 {
        self.inventory
            .iter()
            .filter(|i| i.kind == ItemKind::Potion)
            .map(|i| i.quantity)
            .sum()
    }

    /// Equips a weapon by id, unequipping every other weapon.
    pub fn equip_weapon(&mut self, weapon_id: &str) {
        for item in self.inventory.iter_mut() {
            if item.kind == ItemKind::Weapon {
                item.equipped = item.id == weapon_id;
            }
        }
        self.equipped_weapon = weapon_id.to_string();
    }

    /// Drinks one potion, returning the health actually restored.
    ///
    /// Fails with [`WildgroveError::InsufficientResource`] and changes nothing when no
    /// potion is held.
    pub fn use_potion(&mut self) -> WildgroveResult<u32> {
        let potion_id = self
            .inventory
            .iter()
            .find(|i| i.kind == ItemKind::Potion && i.quantity > 0)
            .map(|i| i.id.clone())
            .ok_or(WildgroveError::InsufficientResource {
                resource: "potions".to_string(),
                needed: 1,
                available: 0,
            })?;

        let before = self.health;
        self.health = (self.health + POTION_HEAL_AMOUNT).min(self.max_health);
        self.remove_item(&potion_id, 1)?;

        let healed = self.health - before;
        debug!("Potion restored {} health ({}/{})", healed, self.health, self.max_health);
        Ok(healed)
    }

    // Health

    /// Subtracts health, clamping at zero. Returns the remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Whether the player has run out of health.
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }

    /// Heals to full.
    pub fn restore_full_health(&mut self) {
        self.health = self.max_health;
    }

    /// Damage dealt by one player swing.
    pub fn player_attack_damage(&self) -> u32 {
        10 + self.level * 2
    }

    // Gold and experience

    /// Adds gold, saturating at `u32::MAX`.
    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Removes gold if the player can afford it.
    pub fn spend_gold(&mut self, amount: u32) -> WildgroveResult<()> {
        if self.gold < amount {
            return Err(WildgroveError::InsufficientResource {
                resource: "gold".to_string(),
                needed: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    /// Experience required to reach the next level.
    pub fn exp_for_next_level(&self) -> u32 {
        self.level.saturating_mul(EXP_PER_LEVEL)
    }

    /// Adds experience, levelling up as many times as the total allows.
    ///
    /// Each level-up carries the leftover experience over, raises max health and heals
    /// fully. Returns the number of levels gained.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::ProgressionStore;
    ///
    /// let mut store = ProgressionStore::new();
    /// assert_eq!(store.add_exp(300), 2);
    /// assert_eq!(store.level, 3);
    /// assert_eq!(store.experience, 0);
    /// ```
    pub fn add_exp(&mut self, amount: u32) -> u32 {
        self.experience = self.experience.saturating_add(amount);
        let mut gained = 0;
        while self.experience >= self.exp_for_next_level() {
            self.experience -= self.exp_for_next_level();
            self.level_up();
            gained += 1;
        }
        gained
    }

    fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
        self.max_health = self.max_health.saturating_add(MAX_HEALTH_PER_LEVEL);
        self.health = self.max_health;
        info!("Player reached level {} ({} max health)", self.level, self.max_health);
    }

    // Quests

    /// Looks up a quest.
    pub fn quest(&self, quest_id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == quest_id)
    }

    fn quest_mut(&mut self, quest_id: &str) -> WildgroveResult<&mut Quest> {
        self.quests
            .iter_mut()
            .find(|q| q.id == quest_id)
            .ok_or_else(|| WildgroveError::not_found("quest", quest_id))
    }

    /// Quests currently in progress.
    pub fn active_quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| q.active)
    }

    /// Marks a quest active.
    pub fn activate_quest(&mut self, quest_id: &str) -> WildgroveResult<()> {
        self.quest_mut(quest_id)?.active = true;
        Ok(())
    }

    /// Completes a quest and pays its gold reward.
    ///
    /// Item rewards are not added to the inventory; they are reported back in
    /// [`QuestCompletion::ungranted_item`].
    pub fn complete_quest(&mut self, quest_id: &str) -> WildgroveResult<QuestCompletion> {
        let quest = self.quest_mut(quest_id)?;
        quest.completed = true;
        quest.active = false;
        let rewards = quest.rewards.clone();

        let gold_granted = rewards.gold.unwrap_or(0);
        self.add_gold(gold_granted);

        if let Some(item) = &rewards.item {
            warn!("Quest {} item reward '{}' was not granted", quest_id, item);
        }

        Ok(QuestCompletion {
            gold_granted,
            ungranted_item: rewards.item,
        })
    }

    // Progress flags

    /// Sets a progress flag.
    pub fn set_progress(&mut self, key: impl Into<String>, value: bool) {
        self.progress.insert(key.into(), value);
    }

    /// Reads a progress flag; unset flags are false.
    pub fn progress(&self, key: &str) -> bool {
        self.progress.get(key).copied().unwrap_or(false)
    }
}

impl Default for ProgressionStore {
    fn default() -> Self {
        Self::new()
    }
}
