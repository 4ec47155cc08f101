//! Tick-level behaviour of the simulation root: combat, death and respawn, potions and
//! level-ups.

use wildgrove::{
    AiState, Enemy, EnemyKind, GameEvent, GameState, MessageImportance, MoveIntent, TickInput,
    TileMap, TileType, Vec2, WildgroveResult,
};

fn arena() -> GameState {
    GameState::new_with_world(TileMap::new(60, 40, 32, TileType::Grass), 4242)
}

fn idle(state: &GameState, delta_ms: u64) -> TickInput {
    TickInput::idle(delta_ms, state.player.position)
}

fn attack(state: &GameState, delta_ms: u64) -> TickInput {
    TickInput {
        attack: true,
        ..idle(state, delta_ms)
    }
}

#[test]
fn test_enemy_states_follow_distance() -> WildgroveResult<()> {
    let mut state = arena();
    let p = state.player.position;
    let near = state.add_enemy(Enemy::new(EnemyKind::Slime, Vec2::new(p.x + 30.0, p.y)));
    let chasing = state.add_enemy(Enemy::new(EnemyKind::Goblin, Vec2::new(p.x + 120.0, p.y)));
    let patrolling = state.add_enemy(Enemy::new(EnemyKind::Goblin, Vec2::new(p.x, p.y + 250.0)));
    let idle_id = state.add_enemy(Enemy::new(EnemyKind::Skeleton, Vec2::new(p.x + 400.0, p.y)));

    state.tick(&idle(&state, 16))?;

    assert_eq!(state.enemy(near).unwrap().state, AiState::Attack);
    let chaser = state.enemy(chasing).unwrap();
    assert_eq!(chaser.state, AiState::Chase);
    assert!((chaser.velocity.x + 80.0).abs() < 1e-3);
    assert_eq!(state.enemy(patrolling).unwrap().state, AiState::Patrol);
    assert_eq!(state.enemy(idle_id).unwrap().state, AiState::Idle);
    Ok(())
}

#[test]
fn test_swing_damage_scales_with_level() -> WildgroveResult<()> {
    let mut state = arena();
    let p = state.player.position;
    state.progression.level = 3;
    let id = state.add_enemy(Enemy::new(EnemyKind::Skeleton, Vec2::new(p.x + 40.0, p.y)));

    state.tick(&attack(&state, 16))?;

    assert_eq!(state.enemy(id).unwrap().health, 50 - 16);
    let events = state.drain_events();
    assert!(events.contains(&GameEvent::PlayerAttack {
        origin: Vec2::new(p.x + 40.0, p.y),
        damage: 16,
        radius: 40.0,
    }));
    Ok(())
}

#[test]
fn test_swing_lock_blocks_second_attack() -> WildgroveResult<()> {
    let mut state = arena();
    let p = state.player.position;
    let id = state.add_enemy(Enemy::new(EnemyKind::Skeleton, Vec2::new(p.x + 200.0, p.y + 200.0)));

    state.tick(&attack(&state, 16))?;
    state.tick(&attack(&state, 100))?;
    assert_eq!(state.statistics.attacks_made, 1);

    state.tick(&attack(&state, 200))?;
    assert_eq!(state.statistics.attacks_made, 2);
    assert!(state.enemy(id).is_some());
    Ok(())
}

#[test]
fn test_kill_rewards_and_level_up() -> WildgroveResult<()> {
    let mut state = arena();
    let p = state.player.position;
    state.progression.experience = 90;

    let mut skeleton = Enemy::new(EnemyKind::Skeleton, Vec2::new(p.x + 40.0, p.y));
    skeleton.health = 1;
    state.add_enemy(skeleton);

    state.tick(&attack(&state, 16))?;

    // 90 + 100 exp: one level (100) with 90 carried over
    assert_eq!(state.progression.level, 2);
    assert_eq!(state.progression.experience, 90);
    assert_eq!(state.progression.max_health, 110);
    assert_eq!(state.progression.health, 110);
    assert!(state.enemies.is_empty());

    let events = state.drain_events();
    let names: Vec<&str> = events.iter().map(|e| e.name()).collect();
    assert_eq!(
        names,
        vec!["PlayerAttack", "EnemyDamaged", "EnemyKilled", "Message", "LevelUp", "Message"]
    );
    assert!(events.contains(&GameEvent::LevelUp {
        level: 2,
        max_health: 110
    }));
    Ok(())
}

#[test]
fn test_enemy_hits_only_within_range() -> WildgroveResult<()> {
    let mut state = arena();
    let p = state.player.position;
    state.add_enemy(Enemy::new(EnemyKind::Goblin, Vec2::new(p.x + 45.0, p.y)));

    state.tick(&idle(&state, 1000))?;
    assert_eq!(state.progression.health, 92);

    // Cooldown is over, but the host moved the player out of reach
    let mut input = idle(&state, 1000);
    input.player_position = Vec2::new(p.x - 100.0, p.y);
    state.tick(&input)?;
    assert_eq!(state.progression.health, 92);
    assert_eq!(state.statistics.damage_taken, 8);
    Ok(())
}

#[test]
fn test_death_short_circuits_and_respawns() -> WildgroveResult<()> {
    let mut state = arena();
    let p = state.player.position;
    state.progression.health = 10;
    state.add_enemy(Enemy::new(EnemyKind::Skeleton, Vec2::new(p.x + 5.0, p.y)));
    state.add_enemy(Enemy::new(EnemyKind::Skeleton, Vec2::new(p.x - 5.0, p.y)));

    state.tick(&idle(&state, 1000))?;
    assert!(state.is_player_dead());

    let events = state.drain_events();
    let attacks = events
        .iter()
        .filter(|e| matches!(e, GameEvent::EnemyAttack { .. }))
        .count();
    assert_eq!(attacks, 1, "second skeleton must not act after the player died");
    assert!(events.contains(&GameEvent::message(
        "You have died...",
        MessageImportance::Critical
    )));

    let mut moving = idle(&state, 1999);
    moving.movement = MoveIntent {
        left: true,
        ..MoveIntent::none()
    };
    assert_eq!(state.tick(&moving)?, Vec2::zero());
    assert!(state.is_player_dead());

    state.tick(&idle(&state, 1))?;
    assert!(!state.is_player_dead());
    assert_eq!(state.progression.health, 100);
    assert_eq!(state.player.position, Vec2::new(640.0, 360.0));
    Ok(())
}

#[test]
fn test_potion_then_inventory_order() -> WildgroveResult<()> {
    let mut state = arena();
    state.progression.health = 80;

    let input = TickInput {
        use_potion: true,
        toggle_inventory: true,
        ..idle(&state, 16)
    };
    state.tick(&input)?;

    assert_eq!(state.progression.health, 100);
    let events = state.drain_events();
    assert_eq!(
        events,
        vec![
            GameEvent::PlayerHealed {
                amount: 20,
                health: 100
            },
            GameEvent::message("Health Restored!", MessageImportance::Success),
            GameEvent::InventoryToggled,
        ]
    );
    Ok(())
}

#[test]
fn test_headless_motion_moves_enemies() -> WildgroveResult<()> {
    let mut state = arena();
    let p = state.player.position;
    let id = state.add_enemy(Enemy::new(EnemyKind::Goblin, Vec2::new(p.x + 150.0, p.y)));

    state.tick(&idle(&state, 16))?;
    state.apply_motion(500);

    let goblin = state.enemy(id).unwrap();
    assert!((goblin.position.x - (p.x + 110.0)).abs() < 1e-2);
    Ok(())
}
