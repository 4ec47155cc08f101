//! # Enemy AI
//!
//! Enemy components and the per-tick state machine that drives them.
//!
//! Each tick an enemy picks one of four states purely from its distance to the player,
//! then sets its velocity for the host to apply. Attacks are rate-limited by a cooldown
//! measured against the simulation clock.

use crate::{new_entity_id, EntityId, GameEvent, Vec2, WildgroveError, WildgroveResult};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Below this distance an enemy attacks.
pub const ATTACK_RANGE: f32 = 50.0;
/// Below this distance an enemy chases.
pub const DETECTION_RADIUS: f32 = 200.0;
/// Width of the patrol band beyond the detection radius.
pub const PATROL_BAND: f32 = 100.0;
/// How far from spawn patrol targets are picked, per axis.
pub const PATROL_SPREAD: i32 = 100;
/// Distance at which a target counts as reached.
pub const ARRIVAL_DISTANCE: f32 = 10.0;
/// Minimum time between two attacks from the same enemy.
pub const ATTACK_COOLDOWN_MS: u64 = 1000;
/// Patrol walking speed.
pub const PATROL_SPEED: f32 = 40.0;
/// Speed when heading home.
pub const RETURN_SPEED: f32 = 60.0;

/// Kinds of enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Slime,
    Skeleton,
    Goblin,
}

impl EnemyKind {
    /// Starting and maximum health.
    pub fn max_health(self) -> u32 {
        match self {
            EnemyKind::Slime => 30,
            EnemyKind::Skeleton => 50,
            EnemyKind::Goblin => 40,
        }
    }

    /// Damage per attack.
    pub fn damage(self) -> u32 {
        match self {
            EnemyKind::Slime => 5,
            EnemyKind::Skeleton => 10,
            EnemyKind::Goblin => 8,
        }
    }

    /// Speed while chasing the player.
    pub fn chase_speed(self) -> f32 {
        match self {
            EnemyKind::Slime => 60.0,
            EnemyKind::Skeleton | EnemyKind::Goblin => 80.0,
        }
    }

    /// Texture key and config name.
    pub fn name(self) -> &'static str {
        match self {
            EnemyKind::Slime => "slime",
            EnemyKind::Skeleton => "skeleton",
            EnemyKind::Goblin => "goblin",
        }
    }
}

impl fmt::Display for EnemyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EnemyKind {
    type Err = WildgroveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slime" => Ok(EnemyKind::Slime),
            "skeleton" => Ok(EnemyKind::Skeleton),
            "goblin" => Ok(EnemyKind::Goblin),
            other => Err(WildgroveError::not_found("enemy kind", other)),
        }
    }
}

/// Discrete AI states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiState {
    Idle,
    Patrol,
    Chase,
    Attack,
}

/// Picks the AI state for a given distance to the player.
///
/// Total over every `f32`: distances that fail all comparisons (NaN) fall through to idle.
///
/// # Examples
///
/// ```
/// use wildgrove::{classify_state, AiState};
///
/// assert_eq!(classify_state(10.0), AiState::Attack);
/// assert_eq!(classify_state(50.0), AiState::Chase);
/// assert_eq!(classify_state(200.0), AiState::Patrol);
/// assert_eq!(classify_state(300.0), AiState::Idle);
/// ```
pub fn classify_state(distance: f32) -> AiState {
    if distance < ATTACK_RANGE {
        AiState::Attack
    } else if distance < DETECTION_RADIUS {
        AiState::Chase
    } else if distance < DETECTION_RADIUS + PATROL_BAND {
        AiState::Patrol
    } else {
        AiState::Idle
    }
}

/// What an enemy drops when it dies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyReward {
    pub gold: u32,
    pub exp: u32,
}

/// A live enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub position: Vec2,
    pub velocity: Vec2,
    pub health: u32,
    pub max_health: u32,
    pub damage: u32,
    pub spawn_point: Vec2,
    pub state: AiState,
    pub patrol_target: Option<Vec2>,
    pub last_attack_ms: u64,
}

impl Enemy {
    /// Spawns an enemy with its kind's stats.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::{AiState, Enemy, EnemyKind, Vec2};
    ///
    /// let goblin = Enemy::new(EnemyKind::Goblin, Vec2::new(800.0, 500.0));
    /// assert_eq!(goblin.health, 40);
    /// assert_eq!(goblin.damage, 8);
    /// assert_eq!(goblin.state, AiState::Idle);
    /// ```
    pub fn new(kind: EnemyKind, position: Vec2) -> Self {
        Self {
            id: new_entity_id(),
            kind,
            position,
            velocity: Vec2::zero(),
            health: kind.max_health(),
            max_health: kind.max_health(),
            damage: kind.damage(),
            spawn_point: position,
            state: AiState::Idle,
            patrol_target: None,
            last_attack_ms: 0,
        }
    }

    /// Whether the enemy still has health.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Applies damage. Returns the reward if this hit killed the enemy.
    ///
    /// Dead enemies ignore further damage.
    pub fn take_damage<R: Rng>(&mut self, amount: u32, rng: &mut R) -> Option<EnemyReward> {
        if !self.is_alive() {
            return None;
        }

        self.health = self.health.saturating_sub(amount);
        if self.is_alive() {
            return None;
        }

        self.velocity = Vec2::zero();
        Some(EnemyReward {
            gold: rng.gen_range(5..=15),
            exp: self.max_health * 2,
        })
    }
}

/// Runs one AI tick for an enemy.
///
/// Sets the enemy's state and velocity and returns an attack event when the enemy strikes.
pub fn update_enemy<R: Rng>(
    enemy: &mut Enemy,
    player: Vec2,
    now_ms: u64,
    rng: &mut R,
) -> Option<GameEvent> {
    if !enemy.is_alive() {
        return None;
    }

    let distance = enemy.position.distance(player);
    let state = classify_state(distance);
    if state != enemy.state {
        debug!("{} {} {:?} -> {:?} at distance {:.1}", enemy.kind, enemy.id, enemy.state, state, distance);
    }
    enemy.state = state;

    match state {
        AiState::Attack => attack(enemy, now_ms),
        AiState::Chase => {
            enemy.velocity = enemy.position.velocity_toward(player, enemy.kind.chase_speed());
            None
        }
        AiState::Patrol => {
            patrol(enemy, rng);
            None
        }
        AiState::Idle => {
            return_to_spawn(enemy);
            None
        }
    }
}

fn attack(enemy: &mut Enemy, now_ms: u64) -> Option<GameEvent> {
    enemy.velocity = Vec2::zero();

    if now_ms < enemy.last_attack_ms + ATTACK_COOLDOWN_MS {
        return None;
    }

    enemy.last_attack_ms = now_ms;
    Some(GameEvent::EnemyAttack {
        enemy_id: enemy.id,
        damage: enemy.damage,
    })
}

fn patrol<R: Rng>(enemy: &mut Enemy, rng: &mut R) {
    let spawn = enemy.spawn_point;
    let target = *enemy.patrol_target.get_or_insert_with(|| {
        Vec2::new(
            spawn.x + rng.gen_range(-PATROL_SPREAD..=PATROL_SPREAD) as f32,
            spawn.y + rng.gen_range(-PATROL_SPREAD..=PATROL_SPREAD) as f32,
        )
    });

    if enemy.position.distance(target) < ARRIVAL_DISTANCE {
        enemy.patrol_target = None;
        enemy.velocity = Vec2::zero();
    } else {
        enemy.velocity = enemy.position.velocity_toward(target, PATROL_SPEED);
    }
}

fn return_to_spawn(enemy: &mut Enemy) {
    if enemy.position.distance(enemy.spawn_point) < ARRIVAL_DISTANCE {
        enemy.velocity = Vec2::zero();
        enemy.health = enemy.max_health;
    } else {
        enemy.velocity = enemy.position.velocity_toward(enemy.spawn_point, RETURN_SPEED);
    }
}

/// Parses a list of enemy kind names.
pub fn parse_enemy_kinds(names: &[String]) -> WildgroveResult<Vec<EnemyKind>> {
    names.iter().map(|name| name.parse()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_kind_stats() {
        assert_eq!(EnemyKind::Slime.max_health(), 30);
        assert_eq!(EnemyKind::Skeleton.damage(), 10);
        assert_eq!(EnemyKind::Goblin.damage(), 8);
        assert_eq!(EnemyKind::Slime.chase_speed(), 60.0);
        assert_eq!(EnemyKind::Skeleton.chase_speed(), 80.0);
        assert_eq!("goblin".parse::<EnemyKind>().unwrap(), EnemyKind::Goblin);
        assert!("dragon".parse::<EnemyKind>().is_err());
    }

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(classify_state(0.0), AiState::Attack);
        assert_eq!(classify_state(49.99), AiState::Attack);
        assert_eq!(classify_state(50.0), AiState::Chase);
        assert_eq!(classify_state(199.9), AiState::Chase);
        assert_eq!(classify_state(200.0), AiState::Patrol);
        assert_eq!(classify_state(299.9), AiState::Patrol);
        assert_eq!(classify_state(300.0), AiState::Idle);
        assert_eq!(classify_state(f32::INFINITY), AiState::Idle);
        assert_eq!(classify_state(f32::NAN), AiState::Idle);
    }

    #[test]
    fn test_attack_respects_cooldown() {
        let mut rng = rng();
        let mut enemy = Enemy::new(EnemyKind::Skeleton, Vec2::new(100.0, 100.0));
        enemy.velocity = Vec2::new(5.0, 5.0);
        let player = Vec2::new(120.0, 100.0);

        let event = update_enemy(&mut enemy, player, 1000, &mut rng);
        assert_eq!(
            event,
            Some(GameEvent::EnemyAttack {
                enemy_id: enemy.id,
                damage: 10
            })
        );
        assert_eq!(enemy.state, AiState::Attack);
        assert_eq!(enemy.velocity, Vec2::zero());

        assert!(update_enemy(&mut enemy, player, 1500, &mut rng).is_none());
        assert!(update_enemy(&mut enemy, player, 1999, &mut rng).is_none());
        assert!(update_enemy(&mut enemy, player, 2000, &mut rng).is_some());
    }

    #[test]
    fn test_first_attack_waits_for_cooldown_from_clock_start() {
        let mut rng = rng();
        let mut enemy = Enemy::new(EnemyKind::Slime, Vec2::new(0.0, 0.0));
        assert!(update_enemy(&mut enemy, Vec2::new(10.0, 0.0), 500, &mut rng).is_none());
        assert_eq!(enemy.state, AiState::Attack);
    }

    #[test]
    fn test_chase_moves_toward_player() {
        let mut rng = rng();
        let mut slime = Enemy::new(EnemyKind::Slime, Vec2::new(0.0, 0.0));
        update_enemy(&mut slime, Vec2::new(100.0, 0.0), 0, &mut rng);
        assert_eq!(slime.state, AiState::Chase);
        assert!((slime.velocity.x - 60.0).abs() < 1e-3);

        let mut goblin = Enemy::new(EnemyKind::Goblin, Vec2::new(0.0, 0.0));
        update_enemy(&mut goblin, Vec2::new(0.0, -150.0), 0, &mut rng);
        assert!((goblin.velocity.y + 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_patrol_picks_target_near_spawn() {
        let mut rng = rng();
        let mut enemy = Enemy::new(EnemyKind::Goblin, Vec2::new(500.0, 500.0));
        update_enemy(&mut enemy, Vec2::new(750.0, 500.0), 0, &mut rng);

        assert_eq!(enemy.state, AiState::Patrol);
        let target = enemy.patrol_target.expect("patrol target");
        assert!((target.x - 500.0).abs() <= 100.0);
        assert!((target.y - 500.0).abs() <= 100.0);
    }

    #[test]
    fn test_patrol_clears_target_on_arrival() {
        let mut rng = rng();
        let mut enemy = Enemy::new(EnemyKind::Goblin, Vec2::new(500.0, 500.0));
        enemy.patrol_target = Some(Vec2::new(505.0, 500.0));
        enemy.velocity = Vec2::new(40.0, 0.0);

        update_enemy(&mut enemy, Vec2::new(750.0, 500.0), 0, &mut rng);
        assert!(enemy.patrol_target.is_none());
        assert_eq!(enemy.velocity, Vec2::zero());
    }

    #[test]
    fn test_idle_returns_home_and_regenerates() {
        let mut rng = rng();
        let mut enemy = Enemy::new(EnemyKind::Skeleton, Vec2::new(0.0, 0.0));
        enemy.position = Vec2::new(100.0, 0.0);
        enemy.health = 10;
        let far = Vec2::new(1000.0, 1000.0);

        update_enemy(&mut enemy, far, 0, &mut rng);
        assert_eq!(enemy.state, AiState::Idle);
        assert!((enemy.velocity.x + 60.0).abs() < 1e-3);
        assert_eq!(enemy.health, 10);

        enemy.position = Vec2::new(4.0, 3.0);
        update_enemy(&mut enemy, far, 0, &mut rng);
        assert_eq!(enemy.velocity, Vec2::zero());
        assert_eq!(enemy.health, 50);
    }

    #[test]
    fn test_take_damage_and_reward() {
        let mut rng = rng();
        let mut enemy = Enemy::new(EnemyKind::Goblin, Vec2::zero());

        assert!(enemy.take_damage(25, &mut rng).is_none());
        assert_eq!(enemy.health, 15);

        let reward = enemy.take_damage(25, &mut rng).expect("enemy should die");
        assert!(!enemy.is_alive());
        assert!((5..=15).contains(&reward.gold));
        assert_eq!(reward.exp, 80);

        assert!(enemy.take_damage(5, &mut rng).is_none());
    }

    #[test]
    fn test_dead_enemy_does_nothing() {
        let mut rng = rng();
        let mut enemy = Enemy::new(EnemyKind::Slime, Vec2::zero());
        enemy.health = 0;
        assert!(update_enemy(&mut enemy, Vec2::new(1.0, 0.0), 5000, &mut rng).is_none());
        assert_eq!(enemy.state, AiState::Idle);
    }

    #[test]
    fn test_parse_enemy_kinds() {
        let names = vec!["slime".to_string(), "goblin".to_string()];
        assert_eq!(
            parse_enemy_kinds(&names).unwrap(),
            vec![EnemyKind::Slime, EnemyKind::Goblin]
        );
        assert!(parse_enemy_kinds(&["bat".to_string()]).is_err());
    }
}
