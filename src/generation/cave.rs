//! # Cave Generation
//!
//! Cellular-automaton caves. The grid starts as random noise and is smoothed by a
//! majority rule: a cell becomes rock when more than four of its eight neighbours are
//! rock, with cells past the edge counting as rock. Rock becomes a colliding wall over a
//! dirt floor.

use crate::{GenerationConfig, Generator, Position, TileMap, TileType, WildgroveError, WildgroveResult};
use log::debug;
use rand::{rngs::StdRng, Rng};

/// Neighbour count above which a cell turns to rock.
const WALL_NEIGHBOUR_THRESHOLD: usize = 4;

/// Runs the automaton and returns a row-major grid where `true` is rock.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use wildgrove::cellular_automata;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(1);
/// let grid = cellular_automata(20, 10, 0.45, 4, &mut rng);
/// assert_eq!(grid.len(), 10);
/// assert!(grid.iter().all(|row| row.len() == 20));
/// ```
pub fn cellular_automata(
    width: u32,
    height: u32,
    fill_probability: f64,
    iterations: u32,
    rng: &mut StdRng,
) -> Vec<Vec<bool>> {
    let mut grid: Vec<Vec<bool>> = (0..height)
        .map(|_| (0..width).map(|_| rng.gen_bool(fill_probability)).collect())
        .collect();

    for _ in 0..iterations {
        grid = (0..height as i32)
            .map(|y| {
                (0..width as i32)
                    .map(|x| wall_neighbours(&grid, Position::new(x, y)) > WALL_NEIGHBOUR_THRESHOLD)
                    .collect()
            })
            .collect();
    }

    grid
}

/// Rock cells among the eight neighbours of `pos`.
fn wall_neighbours(grid: &[Vec<bool>], pos: Position) -> usize {
    pos.adjacent_positions()
        .into_iter()
        .filter(|n| {
            if n.x < 0 || n.y < 0 {
                return true;
            }
            grid.get(n.y as usize)
                .and_then(|row| row.get(n.x as usize))
                .copied()
                .unwrap_or(true)
        })
        .count()
}

/// The cell of the largest open region closest to the map centre.
///
/// Returns `None` when the map has no walkable cell.
pub fn find_entrance(map: &TileMap) -> Option<Position> {
    let center = Position::new((map.width / 2) as i32, (map.height / 2) as i32);
    map.largest_open_region()
        .into_iter()
        .min_by_key(|pos| (pos.manhattan_distance(center), pos.y, pos.x))
}

/// Cave map generator.
#[derive(Debug, Clone, Default)]
pub struct CaveGenerator;

impl CaveGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl Generator<TileMap> for CaveGenerator {
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> WildgroveResult<TileMap> {
        config.validate()?;

        let width = config.map_width();
        let height = config.map_height();
        let grid = cellular_automata(
            width,
            height,
            config.cave_fill_probability,
            config.cave_iterations,
            rng,
        );

        let mut map = TileMap::new(width, height, config.tile_size, TileType::Dirt);
        for (y, row) in grid.iter().enumerate() {
            for (x, &rock) in row.iter().enumerate() {
                if rock {
                    map.place_object(Position::new(x as i32, y as i32), TileType::Wall, true);
                }
            }
        }

        debug!(
            "Generated {}x{} cave with {} wall cells",
            width,
            height,
            map.collision_count()
        );
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

        if map.collision_count() == map.cell_count() {
            return Err(WildgroveError::GenerationFailed(
                "cave has no open cells".to_string(),
            ));
        }

        Ok(())
    }

    fn generator_type(&self) -> &'static str {
        "CaveGenerator"
    }
}
