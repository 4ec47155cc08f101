//! # Player Commands
//!
//! Discrete player actions and the default key bindings that produce them.

use crate::MoveIntent;
use serde::{Deserialize, Serialize};

/// A single player action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCommand {
    Move(MoveIntent),
    Attack,
    Interact,
    UsePotion,
    ToggleInventory,
    /// Pick the dialogue choice at this zero-based index
    ChooseDialogue(usize),
}

/// Maps a key to a command using the default bindings.
///
/// WASD move, space attacks, E interacts, I toggles the inventory, P drinks a potion and
/// digits 1-9 pick dialogue choices.
///
/// # Examples
///
/// ```
/// use wildgrove::{command_for_key, PlayerCommand};
///
/// assert_eq!(command_for_key(' '), Some(PlayerCommand::Attack));
/// assert_eq!(command_for_key('2'), Some(PlayerCommand::ChooseDialogue(1)));
/// assert_eq!(command_for_key('z'), None);
/// ```
pub fn command_for_key(key: char) -> Option<PlayerCommand> {
    let held = MoveIntent::none();
    match key.to_ascii_lowercase() {
        'w' => Some(PlayerCommand::Move(MoveIntent { up: true, ..held })),
        'a' => Some(PlayerCommand::Move(MoveIntent { left: true, ..held })),
        's' => Some(PlayerCommand::Move(MoveIntent { down: true, ..held })),
        'd' => Some(PlayerCommand::Move(MoveIntent { right: true, ..held })),
        ' ' => Some(PlayerCommand::Attack),
        'e' => Some(PlayerCommand::Interact),
        'i' => Some(PlayerCommand::ToggleInventory),
        'p' => Some(PlayerCommand::UsePotion),
        c @ '1'..='9' => c
            .to_digit(10)
            .map(|d| PlayerCommand::ChooseDialogue(d as usize - 1)),
        _ => None,
    }
}
