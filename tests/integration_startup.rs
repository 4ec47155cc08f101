//! Integration test to ensure a session can start up without errors.

use wildgrove::{
    GameState, GenerationConfig, MapKind, NpcKind, Position, TickInput, TileType, Vec2,
    WildgroveResult,
};

#[test]
fn test_basic_startup() -> WildgroveResult<()> {
    let mut state = GameState::new(GenerationConfig::new(12345))?;

    assert_eq!(state.tick_number, 0);
    assert_eq!(state.world.width, 100);
    assert_eq!(state.world.height, 75);
    assert_eq!(state.player.position, Vec2::new(640.0, 360.0));
    assert_eq!(state.progression.health, 100);
    assert_eq!(state.pending_events(), 0);

    let kinds: Vec<NpcKind> = state.npcs.iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![NpcKind::Villager, NpcKind::Merchant, NpcKind::Guard]
    );

    state.tick(&TickInput::idle(16, state.player.position))?;
    assert_eq!(state.tick_number, 1);

    Ok(())
}

#[test]
fn test_player_start_cell() -> WildgroveResult<()> {
    let state = GameState::new(GenerationConfig::new(7))?;
    let cell = Position::from_world(state.player.position, state.world.tile_size);

    // 640 / 32 = 20, 360 / 32 = 11.25
    assert_eq!(cell, Position::new(20, 11));
    assert!(state.world.in_bounds(cell));
    Ok(())
}

#[test]
fn test_cave_startup() -> WildgroveResult<()> {
    let config = GenerationConfig::for_cave(99);
    assert_eq!(config.map_kind, MapKind::Cave);

    let state = GameState::new(config)?;
    let cell = Position::from_world(state.spawn_point, state.world.tile_size);

    assert!(state.npcs.is_empty());
    assert!(state.world.is_walkable(cell));
    assert_eq!(state.world.ground_at(cell), Some(TileType::Dirt));
    for enemy in &state.enemies {
        let cell = Position::from_world(enemy.position, state.world.tile_size);
        assert!(state.world.is_walkable(cell));
    }
    Ok(())
}

#[test]
fn test_same_seed_same_session() -> WildgroveResult<()> {
    let a = GameState::new(GenerationConfig::new(2024))?;
    let b = GameState::new(GenerationConfig::new(2024))?;

    assert_eq!(a.world, b.world);
    let positions = |s: &GameState| s.enemies.iter().map(|e| e.position).collect::<Vec<_>>();
    assert_eq!(positions(&a), positions(&b));
    Ok(())
}
