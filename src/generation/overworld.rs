//! # Overworld Generation
//!
//! Paints the surface map in four passes:
//! 1. Hash-noise terrain bands with scattered trees
//! 2. A horizontal and a vertical dirt path through the middle
//! 3. The village: a cleared grass square with three building outlines
//! 4. The ruins: a stone square strewn with rubble
//!
//! Terrain noise is a pure function of the cell coordinates; everything else draws from
//! the seeded generator.

use crate::{
    GenerationConfig, Generator, Position, Region, TileMap, TileType, WildgroveError,
    WildgroveResult,
};
use log::debug;
use rand::{rngs::StdRng, Rng};

/// Half the side of the village square.
const VILLAGE_HALF_EXTENT: i32 = 5;
/// Half the side of the ruins square.
const RUINS_HALF_EXTENT: i32 = 4;

/// Deterministic pseudo-noise in `[0, 1)` from world coordinates.
///
/// # Examples
///
/// ```
/// use wildgrove::terrain_noise;
///
/// let n = terrain_noise(1.2, 3.4);
/// assert!((0.0..1.0).contains(&n));
/// assert_eq!(n, terrain_noise(1.2, 3.4));
/// ```
pub fn terrain_noise(x: f64, y: f64) -> f64 {
    let n = (x * 12.9898 + y * 78.233).sin() * 43758.5453123;
    n - n.floor()
}

/// Ground type for a noise value under the configured bands.
pub fn ground_for_noise(noise: f64, config: &GenerationConfig) -> TileType {
    if noise < config.grass_threshold {
        TileType::Grass
    } else if noise < config.dirt_threshold {
        TileType::Dirt
    } else if noise < config.stone_threshold {
        TileType::Stone
    } else {
        TileType::Water
    }
}

/// Centre cell of the village for a map of the given size.
pub fn village_center(map_width: u32, map_height: u32) -> Position {
    Position::new((map_width / 4) as i32, (map_height / 4) as i32)
}

/// Centre cell of the ruins for a map of the given size.
pub fn ruins_center(map_width: u32, map_height: u32) -> Position {
    Position::new((map_width * 3 / 4) as i32, (map_height * 3 / 4) as i32)
}

/// The cleared village square.
pub fn village_region(map_width: u32, map_height: u32) -> Region {
    Region::centered(village_center(map_width, map_height), VILLAGE_HALF_EXTENT)
}

/// The stone ruins square.
pub fn ruins_region(map_width: u32, map_height: u32) -> Region {
    Region::centered(ruins_center(map_width, map_height), RUINS_HALF_EXTENT)
}

/// Building outlines inside the village.
pub fn village_buildings(center: Position) -> [Region; 3] {
    [
        Region::new(Position::new(center.x - 3, center.y - 3), 4, 4),
        Region::new(Position::new(center.x + 1, center.y - 3), 4, 4),
        Region::new(Position::new(center.x - 3, center.y + 1), 4, 3),
    ]
}

/// Surface map generator.
#[derive(Debug, Clone)]
pub struct OverworldGenerator {
    /// Whether to paint the crossing paths
    pub paint_paths: bool,
    /// Whether to carve the village
    pub carve_village: bool,
    /// Whether to carve the ruins
    pub carve_ruins: bool,
}

impl OverworldGenerator {
    /// Creates a generator running every pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::{generation::utils, Generator, GenerationConfig, OverworldGenerator};
    ///
    /// let config = GenerationConfig::for_testing(7);
    /// let map = OverworldGenerator::new()
    ///     .generate(&config, &mut utils::create_rng(&config))
    ///     .unwrap();
    /// assert_eq!(map.width, 40);
    /// assert_eq!(map.height, 30);
    /// ```
    pub fn new() -> Self {
        Self {
            paint_paths: true,
            carve_village: true,
            carve_ruins: true,
        }
    }

    /// Creates a generator that only paints noise terrain and trees.
    pub fn terrain_only() -> Self {
        Self {
            paint_paths: false,
            carve_village: false,
            carve_ruins: false,
        }
    }

    /// Noise bands and trees.
    fn paint_terrain(&self, map: &mut TileMap, config: &GenerationConfig, rng: &mut StdRng) {
        let mut trees = 0;
        for y in 0..map.height as i32 {
            for x in 0..map.width as i32 {
                let pos = Position::new(x, y);
                let noise = terrain_noise(x as f64 * config.noise_scale, y as f64 * config.noise_scale);
                map.set_ground(pos, ground_for_noise(noise, config));

                if noise > config.tree_noise_threshold && rng.gen_bool(config.tree_chance) {
                    map.place_object(pos, TileType::Tree, true);
                    trees += 1;
                }
            }
        }
        debug!("Painted {}x{} terrain with {} trees", map.width, map.height, trees);
    }

    /// Dirt paths crossing at the map centre, each randomly one or two cells wide.
    fn paint_paths(&self, map: &mut TileMap, config: &GenerationConfig, rng: &mut StdRng) {
        let path_y = (map.height / 2) as i32;
        for x in 0..map.width as i32 {
            map.set_ground(Position::new(x, path_y), TileType::Dirt);
            if rng.gen_bool(config.path_widen_chance) {
                map.set_ground(Position::new(x, path_y + 1), TileType::Dirt);
            }
        }

        let path_x = (map.width / 2) as i32;
        for y in 0..map.height as i32 {
            map.set_ground(Position::new(path_x, y), TileType::Dirt);
            if rng.gen_bool(config.path_widen_chance) {
                map.set_ground(Position::new(path_x + 1, y), TileType::Dirt);
            }
        }
    }

    fn carve_village(&self, map: &mut TileMap) {
        let center = village_center(map.width, map.height);
        for pos in village_region(map.width, map.height).all_positions() {
            map.set_ground(pos, TileType::Grass);
            map.clear_object(pos);
        }

        for building in village_buildings(center) {
            for pos in building.wall_positions() {
                map.place_object(pos, TileType::Wall, true);
            }
        }
        debug!("Carved village at {:?}", center);
    }

    fn carve_ruins(&self, map: &mut TileMap, config: &GenerationConfig, rng: &mut StdRng) {
        let center = ruins_center(map.width, map.height);
        for pos in ruins_region(map.width, map.height).all_positions() {
            map.set_ground(pos, TileType::Stone);
            map.clear_object(pos);
        }

        let mut rubble = 0;
        for _ in 0..config.rubble_attempts {
            let pos = Position::new(
                center.x + rng.gen_range(-RUINS_HALF_EXTENT..RUINS_HALF_EXTENT),
                center.y + rng.gen_range(-RUINS_HALF_EXTENT..RUINS_HALF_EXTENT),
            );
            if rng.gen_bool(config.rubble_chance) && map.place_object(pos, TileType::Wall, true) {
                rubble += 1;
            }
        }
        debug!("Carved ruins at {:?} with {} rubble", center, rubble);
    }
}

impl Generator<TileMap> for OverworldGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WildgroveResult<TileMap> {
        config.validate()?;

        let mut map = TileMap::new(
            config.map_width(),
            config.map_height(),
            config.tile_size,
            TileType::Grass,
        );

        self.paint_terrain(&mut map, config, rng);
        if self.paint_paths {
            self.paint_paths(&mut map, config, rng);
        }
        if self.carve_village {
            self.carve_village(&mut map);
        }
        if self.carve_ruins {
            self.carve_ruins(&mut map, config, rng);
        }

        Ok(map)
    }

    fn validate(&self, map: &TileMap, config: &GenerationConfig) -> WildgroveResult<()> {
        if map.width != config.map_width() || map.height != config.map_height() {
            return Err(WildgroveError::GenerationFailed(format!(
                "expected {}x{} cells, got {}x{}",
                config.map_width(),
                config.map_height(),
                map.width,
                map.height
            )));
        }

        let ruins = ruins_region(map.width, map.height);
        if self.carve_ruins {
            check_region(map, &ruins, "ruins", &[TileType::Stone, TileType::Wall])?;
        }

        if self.carve_village {
            let village = village_region(map.width, map.height);
            for pos in village.all_positions() {
                if self.carve_ruins && ruins.contains(pos) {
                    continue;
                }
                check_cell(map, pos, "village", &[TileType::Grass, TileType::Wall])?;
            }
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "OverworldGenerator"
    }
}

impl Default for OverworldGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_region(
    map: &TileMap,
    region: &Region,
    name: &str,
    allowed: &[TileType],
) -> WildgroveResult<()> {
    region
        .all_positions()
        .into_iter()
        .try_for_each(|pos| check_cell(map, pos, name, allowed))
}

fn check_cell(map: &TileMap, pos: Position, name: &str, allowed: &[TileType]) -> WildgroveResult<()> {
    match map.tile_at(pos) {
        Some(tile) if !allowed.contains(&tile) => Err(WildgroveError::GenerationFailed(format!(
            "{} cell {:?} holds {:?}",
            name, pos, tile
        ))),
        _ => Ok(()),
    }
}
