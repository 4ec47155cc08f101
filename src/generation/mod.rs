//! # Generation Module
//!
//! Procedural content generation for overworlds, caves, and encounters.
//!
//! Every generator draws its randomness from a single `StdRng` seeded from
//! [`GenerationConfig::seed`], so a seed and a configuration fully determine the output.

pub mod cave;
pub mod encounters;
pub mod overworld;

pub use cave::*;
pub use encounters::*;
pub use overworld::*;

use crate::game::Position;
use crate::{config, parse_enemy_kinds, WildgroveError, WildgroveResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest grid, in cells, a configuration may request.
pub const MAX_MAP_CELLS: u32 = 4_000_000;

/// Which kind of map to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MapKind {
    /// Noise terrain with paths, a village and ruins
    Overworld,
    /// Cellular-automaton cave
    Cave,
}

/// Named terrain theme with its enemy composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Biome {
    pub name: String,
    /// Tileset key the host renders with
    pub tile_key: String,
    /// Enemy kinds that roam this biome, by name
    pub enemy_kinds: Vec<String>,
    /// Random spawns per walkable cell when no fixed spawn table is given
    pub enemy_density: f64,
    /// Fixed spawns; when non-empty these replace density-based placement
    #[serde(default)]
    pub spawn_points: Vec<SpawnPoint>,
}

impl Biome {
    /// The starting forest with its hand-placed enemies.
    pub fn forest() -> Self {
        Self {
            name: "forest".to_string(),
            tile_key: "forest_tiles".to_string(),
            enemy_kinds: vec!["slime".to_string(), "goblin".to_string()],
            enemy_density: 0.01,
            spawn_points: forest_spawn_table(),
        }
    }

    /// The ruins below the forest, populated at random.
    pub fn ruins() -> Self {
        Self {
            name: "ruins".to_string(),
            tile_key: "ruins_tiles".to_string(),
            enemy_kinds: vec!["skeleton".to_string(), "goblin".to_string()],
            enemy_density: 0.01,
            spawn_points: Vec::new(),
        }
    }
}

/// Configuration for procedural generation.
///
/// Dimensions are in world units; the grid is `width / tile_size` by `height / tile_size`
/// cells. Fields missing from a JSON file take their values from [`GenerationConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Map width in world units
    pub width: u32,
    /// Map height in world units
    pub height: u32,
    /// Cell edge length in world units
    pub tile_size: u32,
    /// Overworld or cave
    pub map_kind: MapKind,
    /// Terrain theme and enemies
    pub biome: Biome,
    /// Coordinate scale fed into the terrain noise
    pub noise_scale: f64,
    /// Noise below this is grass
    pub grass_threshold: f64,
    /// Noise below this is dirt
    pub dirt_threshold: f64,
    /// Noise below this is stone; anything above is water
    pub stone_threshold: f64,
    /// Noise above this may grow a tree
    pub tree_noise_threshold: f64,
    /// Probability (0.0 to 1.0) of a tree where the noise allows one
    pub tree_chance: f64,
    /// Probability (0.0 to 1.0) that a path cell widens by one
    pub path_widen_chance: f64,
    /// Rubble placement attempts in the ruins
    pub rubble_attempts: u32,
    /// Probability (0.0 to 1.0) that a rubble attempt places a wall
    pub rubble_chance: f64,
    /// Initial wall probability (0.0 to 1.0) for caves
    pub cave_fill_probability: f64,
    /// Smoothing rounds for caves
    pub cave_iterations: u32,
}

impl GenerationConfig {
    /// Creates the default forest overworld configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.seed, 12345);
    /// assert_eq!(config.width / config.tile_size, 100);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: config::DEFAULT_WORLD_WIDTH,
            height: config::DEFAULT_WORLD_HEIGHT,
            tile_size: config::TILE_SIZE,
            map_kind: MapKind::Overworld,
            biome: Biome::forest(),
            noise_scale: 0.1,
            grass_threshold: 0.3,
            dirt_threshold: 0.5,
            stone_threshold: 0.7,
            tree_noise_threshold: 0.8,
            tree_chance: 0.7,
            path_widen_chance: 0.5,
            rubble_attempts: 10,
            rubble_chance: 0.5,
            cave_fill_probability: 0.45,
            cave_iterations: 4,
        }
    }

    /// Creates a configuration for testing with a small map.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            width: 1280,
            height: 960,
            ..Self::new(seed)
        }
    }

    /// Creates a cave configuration in the ruins biome.
    pub fn for_cave(seed: u64) -> Self {
        Self {
            width: 1600,
            height: 1280,
            map_kind: MapKind::Cave,
            biome: Biome::ruins(),
            ..Self::new(seed)
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> WildgroveResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Grid width in cells.
    pub fn map_width(&self) -> u32 {
        self.width / self.tile_size.max(1)
    }

    /// Grid height in cells.
    pub fn map_height(&self) -> u32 {
        self.height / self.tile_size.max(1)
    }

    /// Rejects parameters that cannot produce a sensible map.
    pub fn validate(&self) -> WildgroveResult<()> {
        if self.tile_size == 0 {
            return Err(WildgroveError::Configuration(
                "tile_size must be positive".to_string(),
            ));
        }

        match self.map_width().checked_mul(self.map_height()) {
            Some(cells) if cells <= MAX_MAP_CELLS => {}
            _ => {
                return Err(WildgroveError::Configuration(format!(
                    "{}x{} cells exceeds the {} cell limit",
                    self.map_width(),
                    self.map_height(),
                    MAX_MAP_CELLS
                )));
            }
        }

        let probabilities = [
            ("tree_chance", self.tree_chance),
            ("path_widen_chance", self.path_widen_chance),
            ("rubble_chance", self.rubble_chance),
            ("cave_fill_probability", self.cave_fill_probability),
        ];
        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(WildgroveError::Configuration(format!(
                    "{} must be within 0.0..=1.0, got {}",
                    name, value
                )));
            }
        }

        let bands = [
            self.grass_threshold,
            self.dirt_threshold,
            self.stone_threshold,
        ];
        if !bands.iter().all(|t| (0.0..=1.0).contains(t)) || !bands.windows(2).all(|w| w[0] < w[1])
        {
            return Err(WildgroveError::Configuration(format!(
                "terrain thresholds must be increasing within 0.0..=1.0, got {:?}",
                bands
            )));
        }

        if !self.noise_scale.is_finite() || !self.tree_noise_threshold.is_finite() {
            return Err(WildgroveError::Configuration(
                "noise parameters must be finite".to_string(),
            ));
        }

        if !self.biome.enemy_density.is_finite() || self.biome.enemy_density < 0.0 {
            return Err(WildgroveError::Configuration(format!(
                "enemy_density must be a non-negative number, got {}",
                self.biome.enemy_density
            )));
        }

        parse_enemy_kinds(&self.biome.enemy_kinds).map_err(|err| {
            WildgroveError::Configuration(format!("biome '{}': {}", self.biome.name, err))
        })?;

        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// A rectangular block of cells, used for carved areas and buildings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Top-left corner of the region
    pub top_left: Position,
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
}

impl Region {
    /// Creates a new region.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::{Position, Region};
    ///
    /// let region = Region::new(Position::new(5, 5), 10, 8);
    /// assert!(region.contains(Position::new(7, 7)));
    /// assert!(!region.contains(Position::new(15, 5)));
    /// ```
    pub fn new(top_left: Position, width: u32, height: u32) -> Self {
        Self {
            top_left,
            width,
            height,
        }
    }

    /// A square of side `2 * half_extent` covering `[center - half, center + half)`.
    pub fn centered(center: Position, half_extent: i32) -> Self {
        Self::new(
            Position::new(center.x - half_extent, center.y - half_extent),
            (half_extent * 2) as u32,
            (half_extent * 2) as u32,
        )
    }

    /// Checks if a position is inside this region.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.top_left.x
            && pos.y >= self.top_left.y
            && pos.x < self.top_left.x + self.width as i32
            && pos.y < self.top_left.y + self.height as i32
    }

    /// Checks if a position is on the border of this region.
    pub fn is_border(&self, pos: Position) -> bool {
        if !self.contains(pos) {
            return false;
        }

        pos.x == self.top_left.x
            || pos.y == self.top_left.y
            || pos.x == self.top_left.x + self.width as i32 - 1
            || pos.y == self.top_left.y + self.height as i32 - 1
    }

    /// Gets all border positions (the outline) of this region.
    pub fn wall_positions(&self) -> Vec<Position> {
        self.all_positions()
            .into_iter()
            .filter(|&pos| self.is_border(pos))
            .collect()
    }

    /// Gets all positions within this region.
    pub fn all_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();

        for y in self.top_left.y..(self.top_left.y + self.height as i32) {
            for x in self.top_left.x..(self.top_left.x + self.width as i32) {
                positions.push(Position::new(x, y));
            }
        }

        positions
    }
}

/// Trait for procedural generators.
///
/// All generation systems in Wildgrove implement this trait, giving a consistent
/// generate-then-validate interface.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WildgroveResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> WildgroveResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Runs a generator and rejects its output if validation fails.
    pub fn generate_validated<T, G: Generator<T>>(
        generator: &G,
        config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> WildgroveResult<T> {
        let content = generator.generate(config, rng)?;
        generator.validate(&content, config)?;
        log::debug!("{} produced valid content", generator.generator_type());
        Ok(content)
    }
}
