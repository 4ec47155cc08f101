//! # Player
//!
//! The player's transient combat and movement state. Health, gold and level live in the
//! [`ProgressionStore`](crate::ProgressionStore).

use crate::{GameEvent, MoveIntent, Vec2};
use serde::{Deserialize, Serialize};

/// Walking speed in world units per second.
pub const PLAYER_SPEED: f32 = 160.0;
/// Per-axis factor applied when moving diagonally.
pub const DIAGONAL_FACTOR: f32 = 0.707;
/// How far in front of the player a swing lands.
pub const ATTACK_REACH: f32 = 40.0;
/// Radius around the swing point that gets hit.
pub const ATTACK_RADIUS: f32 = 40.0;
/// How long a swing locks out movement and further swings.
pub const ATTACK_DURATION_MS: u64 = 300;

/// Which way the player is looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Horizontal sign of this facing.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Velocity for a set of held movement keys.
///
/// # Examples
///
/// ```
/// use wildgrove::{movement_velocity, MoveIntent};
///
/// let v = movement_velocity(&MoveIntent { right: true, down: true, ..MoveIntent::none() });
/// assert!((v.x - 160.0 * 0.707).abs() < 1e-3);
/// assert!((v.y - 160.0 * 0.707).abs() < 1e-3);
/// ```
pub fn movement_velocity(intent: &MoveIntent) -> Vec2 {
    let mut vx = intent.horizontal() as f32 * PLAYER_SPEED;
    let mut vy = intent.vertical() as f32 * PLAYER_SPEED;

    if vx != 0.0 && vy != 0.0 {
        vx *= DIAGONAL_FACTOR;
        vy *= DIAGONAL_FACTOR;
    }

    Vec2::new(vx, vy)
}

/// Player component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    attack_locked_until_ms: Option<u64>,
}

impl Player {
    /// Creates a player at a position, facing right.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::zero(),
            facing: Facing::Right,
            attack_locked_until_ms: None,
        }
    }

    /// Whether a swing is still in progress.
    pub fn is_attacking(&self, now_ms: u64) -> bool {
        self.attack_locked_until_ms
            .map(|until| now_ms < until)
            .unwrap_or(false)
    }

    /// Updates velocity and facing from held keys. A swing in progress freezes the player.
    pub fn update_movement(&mut self, intent: &MoveIntent, now_ms: u64) -> Vec2 {
        if self.is_attacking(now_ms) {
            self.velocity = Vec2::zero();
            return self.velocity;
        }

        match intent.horizontal() {
            -1 => self.facing = Facing::Left,
            1 => self.facing = Facing::Right,
            _ => {}
        }
        self.velocity = movement_velocity(intent);
        self.velocity
    }

    /// Starts a swing if none is in progress.
    pub fn try_attack(&mut self, damage: u32, now_ms: u64) -> Option<GameEvent> {
        if self.is_attacking(now_ms) {
            return None;
        }

        self.attack_locked_until_ms = Some(now_ms + ATTACK_DURATION_MS);
        Some(GameEvent::PlayerAttack {
            origin: self.attack_origin(),
            damage,
            radius: ATTACK_RADIUS,
        })
    }

    /// Point a swing lands on.
    pub fn attack_origin(&self) -> Vec2 {
        Vec2::new(self.position.x + self.facing.sign() * ATTACK_REACH, self.position.y)
    }

    /// Stops any motion and clears the swing lock.
    pub fn halt(&mut self) {
        self.velocity = Vec2::zero();
        self.attack_locked_until_ms = None;
    }
}
