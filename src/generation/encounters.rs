//! # Encounter Generation
//!
//! Decides where enemies start. A biome either carries a fixed spawn table, filtered to
//! the map bounds, or gets a random scattering over walkable cells proportional to its
//! enemy density.

use crate::{
    parse_enemy_kinds, EnemyKind, GenerationConfig, Generator, Position, TileMap, Vec2,
    WildgroveError, WildgroveResult,
};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Where and what to spawn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub kind: EnemyKind,
    /// World position
    pub position: Vec2,
}

impl SpawnPoint {
    pub fn new(kind: EnemyKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: Vec2::new(x, y),
        }
    }
}

/// Hand-placed enemies of the starting forest.
pub fn forest_spawn_table() -> Vec<SpawnPoint> {
    vec![
        SpawnPoint::new(EnemyKind::Slime, 400.0, 300.0),
        SpawnPoint::new(EnemyKind::Slime, 1200.0, 400.0),
        SpawnPoint::new(EnemyKind::Slime, 2400.0, 800.0),
        SpawnPoint::new(EnemyKind::Slime, 2200.0, 1600.0),
        SpawnPoint::new(EnemyKind::Goblin, 800.0, 500.0),
        SpawnPoint::new(EnemyKind::Goblin, 2000.0, 600.0),
        SpawnPoint::new(EnemyKind::Goblin, 1000.0, 1200.0),
        SpawnPoint::new(EnemyKind::Skeleton, 1600.0, 700.0),
        SpawnPoint::new(EnemyKind::Skeleton, 2800.0, 500.0),
        SpawnPoint::new(EnemyKind::Skeleton, 1800.0, 1400.0),
    ]
}

/// Places enemies on a generated map.
#[derive(Debug, Clone)]
pub struct EncounterGenerator<'a> {
    pub map: &'a TileMap,
}

impl<'a> EncounterGenerator<'a> {
    pub fn new(map: &'a TileMap) -> Self {
        Self { map }
    }

    fn in_world(&self, point: Vec2) -> bool {
        let size = self.map.world_size();
        point.x >= 0.0 && point.y >= 0.0 && point.x < size.x && point.y < size.y
    }

    fn scatter(
        &self,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> WildgroveResult<Vec<SpawnPoint>> {
        let kinds = parse_enemy_kinds(&config.biome.enemy_kinds)?;
        if kinds.is_empty() {
            return Ok(Vec::new());
        }

        let open: Vec<Position> = self
            .map
            .cells()
            .map(|(pos, _)| pos)
            .filter(|&pos| self.map.is_walkable(pos))
            .collect();
        let count = (open.len() as f64 * config.biome.enemy_density).floor() as usize;

        let cells: Vec<Position> = open.choose_multiple(rng, count).copied().collect();
        let mut spawns = Vec::with_capacity(cells.len());
        for cell in cells {
            if let Some(&kind) = kinds.choose(rng) {
                spawns.push(SpawnPoint {
                    kind,
                    position: cell.world_center(self.map.tile_size),
                });
            }
        }
        Ok(spawns)
    }
}

impl Generator<Vec<SpawnPoint>> for EncounterGenerator<'_> {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WildgroveResult<Vec<SpawnPoint>> {
        let spawns = if config.biome.spawn_points.is_empty() {
            self.scatter(config, rng)?
        } else {
            config
                .biome
                .spawn_points
                .iter()
                .copied()
                .filter(|spawn| self.in_world(spawn.position))
                .collect()
        };

        debug!(
            "Placed {} encounters in biome '{}'",
            spawns.len(),
            config.biome.name
        );
        Ok(spawns)
    }

    fn validate(&self, spawns: &Vec<SpawnPoint>, _config: &GenerationConfig) -> WildgroveResult<()> {
        match spawns.iter().find(|spawn| !self.in_world(spawn.position)) {
            Some(spawn) => Err(WildgroveError::GenerationFailed(format!(
                "{} spawn at ({}, {}) lies outside the map",
                spawn.kind, spawn.position.x, spawn.position.y
            ))),
            None => Ok(()),
        }
    }

    fn generator_type(&self) -> &'static str {
        "EncounterGenerator"
    }
}
