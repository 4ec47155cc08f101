//! # Built-in Content
//!
//! Starting loadout, quest log, item templates and the village NPCs' conversations.

use crate::{
    DialogueAction, DialogueChoice, DialogueGraph, DialogueNode, InventoryItem, ItemKind, Quest,
    QuestReward,
};

/// Price of a health potion at the merchant.
pub const POTION_PRICE: u32 = 20;
/// Price of the steel sword at the merchant.
pub const STEEL_SWORD_PRICE: u32 = 100;

/// One health potion.
pub fn health_potion() -> InventoryItem {
    InventoryItem::new("potion1", "Health Potion", ItemKind::Potion, "potion", 1)
}

/// The merchant's steel sword.
pub fn steel_sword() -> InventoryItem {
    InventoryItem::new("steel_sword", "Steel Sword", ItemKind::Weapon, "sword", 1)
}

/// Inventory the player starts with.
pub fn starting_inventory() -> Vec<InventoryItem> {
    let mut sword = InventoryItem::new("sword1", "Iron Sword", ItemKind::Weapon, "sword", 1);
    sword.equipped = true;

    let mut potions = health_potion();
    potions.quantity = 3;

    vec![sword, potions]
}

/// Quest log the player starts with.
pub fn starting_quests() -> Vec<Quest> {
    vec![
        Quest {
            id: "main_quest_1".to_string(),
            title: "The Dark Forest".to_string(),
            description: "Investigate the strange creatures appearing in the forest".to_string(),
            objectives: vec![
                "Defeat 5 slimes".to_string(),
                "Talk to the village elder".to_string(),
            ],
            active: true,
            completed: false,
            rewards: QuestReward {
                gold: Some(50),
                item: Some("key".to_string()),
            },
        },
        Quest {
            id: "side_quest_1".to_string(),
            title: "Lost Merchant".to_string(),
            description: "Find the merchant's lost goods".to_string(),
            objectives: vec![
                "Search the ruins".to_string(),
                "Return items to merchant".to_string(),
            ],
            active: false,
            completed: false,
            rewards: QuestReward {
                gold: Some(30),
                item: None,
            },
        },
    ]
}

fn accept_main_quest() -> DialogueAction {
    DialogueAction::ActivateQuest {
        quest_id: "main_quest_1".to_string(),
        title: "The Dark Forest".to_string(),
    }
}

/// The village elder, who hands out the main quest.
pub fn elder_dialogue() -> DialogueGraph {
    const SPEAKER: &str = "Village Elder";
    DialogueGraph::new(vec![
        DialogueNode::new(
            "elder_greeting",
            SPEAKER,
            "Greetings, traveler! Dark forces have been stirring in the forest. We need someone brave to investigate.",
            vec![
                DialogueChoice::goto("Tell me more about these dark forces.", "elder_explain"),
                DialogueChoice::goto("I will help you.", "elder_accept").with_action(accept_main_quest()),
                DialogueChoice::end("I must go."),
            ],
        ),
        DialogueNode::new(
            "elder_explain",
            SPEAKER,
            "Strange creatures have been appearing near the old ruins. They attack anyone who ventures too close. We fear something ancient has awakened.",
            vec![
                DialogueChoice::goto("I will investigate.", "elder_accept").with_action(accept_main_quest()),
                DialogueChoice::end("That sounds dangerous. Farewell."),
            ],
        ),
        DialogueNode::new(
            "elder_accept",
            SPEAKER,
            "Thank you, brave one. May the spirits guide you. Return to me when you have defeated the creatures.",
            vec![DialogueChoice::end("I will return.")],
        ),
    ])
}

/// The wandering merchant, who sells weapons and potions.
pub fn merchant_dialogue() -> DialogueGraph {
    const SPEAKER: &str = "Wandering Merchant";
    DialogueGraph::new(vec![
        DialogueNode::new(
            "merchant_greeting",
            SPEAKER,
            "Ah, a customer! I have rare wares from distant lands. Looking for anything specific?",
            vec![
                DialogueChoice::goto("Show me your weapons.", "merchant_weapons"),
                DialogueChoice::goto("Do you have any potions?", "merchant_potions"),
                DialogueChoice::end("Just browsing."),
            ],
        ),
        DialogueNode::new(
            "merchant_weapons",
            SPEAKER,
            "I have a fine steel sword for 100 gold. Sharper than anything you will find elsewhere!",
            vec![
                DialogueChoice::end("I will take it.").with_action(DialogueAction::Purchase {
                    item: steel_sword(),
                    cost: STEEL_SWORD_PRICE,
                }),
                DialogueChoice::end("Too expensive. Maybe later."),
            ],
        ),
        DialogueNode::new(
            "merchant_potions",
            SPEAKER,
            "Health potions are 20 gold each. They will restore your vitality in battle.",
            vec![
                DialogueChoice::end("Buy a potion.").with_action(DialogueAction::Purchase {
                    item: health_potion(),
                    cost: POTION_PRICE,
                }),
                DialogueChoice::end("Not right now."),
            ],
        ),
    ])
}

/// The village guard, who only offers warnings.
pub fn guard_dialogue() -> DialogueGraph {
    const SPEAKER: &str = "Village Guard";
    DialogueGraph::new(vec![
        DialogueNode::new(
            "guard_greeting",
            SPEAKER,
            "Stay vigilant, traveler. The roads are not safe these days.",
            vec![
                DialogueChoice::goto("What dangers lurk out there?", "guard_warning"),
                DialogueChoice::end("I can handle myself."),
            ],
        ),
        DialogueNode::new(
            "guard_warning",
            SPEAKER,
            "Goblins and worse roam the forests. Keep your weapon ready and trust no one in the ruins.",
            vec![DialogueChoice::end("Thank you for the warning.")],
        ),
    ])
}
