//! # World Representation
//!
//! The tile grid produced once per session by the generators and consumed by the
//! host's physics and rendering layers.

use crate::utils::largest_region;
use crate::{Position, Vec2};
use serde::{Deserialize, Serialize};

/// Terrain and object types a cell can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileType {
    Grass,
    Dirt,
    Stone,
    Water,
    Tree,
    Wall,
}

impl TileType {
    /// Single-character glyph for text dumps.
    pub fn symbol(self) -> char {
        match self {
            TileType::Grass => '.',
            TileType::Dirt => ':',
            TileType::Stone => '_',
            TileType::Water => '~',
            TileType::Tree => 'T',
            TileType::Wall => '#',
        }
    }
}

/// A generated map: ground layer, object layer and collision mask.
///
/// The effective tile of a cell is its object when one is placed, otherwise its ground.
/// Writes outside the grid are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMap {
    /// Width in cells
    pub width: u32,
    /// Height in cells
    pub height: u32,
    /// Edge length of a cell in world units
    pub tile_size: u32,
    ground: Vec<TileType>,
    objects: Vec<Option<TileType>>,
    collision: Vec<bool>,
}

impl TileMap {
    /// Creates a map with every cell set to `ground`, no objects and no collision.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::{Position, TileMap, TileType};
    ///
    /// let map = TileMap::new(4, 3, 32, TileType::Grass);
    /// assert_eq!(map.cell_count(), 12);
    /// assert_eq!(map.tile_at(Position::new(3, 2)), Some(TileType::Grass));
    /// assert_eq!(map.tile_at(Position::new(4, 0)), None);
    /// ```
    pub fn new(width: u32, height: u32, tile_size: u32, ground: TileType) -> Self {
        let cells = width as usize * height as usize;
        Self {
            width,
            height,
            tile_size,
            ground: vec![ground; cells],
            objects: vec![None; cells],
            collision: vec![false; cells],
        }
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.ground.len()
    }

    /// Size of the map in world units.
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            self.width as f32 * self.tile_size as f32,
            self.height as f32 * self.tile_size as f32,
        )
    }

    /// Checks whether a position lies inside the grid.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.in_bounds(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// Ground-layer type at a cell.
    pub fn ground_at(&self, pos: Position) -> Option<TileType> {
        self.index(pos).map(|i| self.ground[i])
    }

    /// Object-layer type at a cell, if an object is placed there.
    pub fn object_at(&self, pos: Position) -> Option<TileType> {
        self.index(pos).and_then(|i| self.objects[i])
    }

    /// Effective tile type at a cell.
    pub fn tile_at(&self, pos: Position) -> Option<TileType> {
        self.index(pos).map(|i| self.objects[i].unwrap_or(self.ground[i]))
    }

    /// Whether the cell is flagged in the collision mask. Out-of-bounds cells collide.
    pub fn is_collision(&self, pos: Position) -> bool {
        self.index(pos).map(|i| self.collision[i]).unwrap_or(true)
    }

    /// Whether an entity may stand in the cell.
    pub fn is_walkable(&self, pos: Position) -> bool {
        !self.is_collision(pos)
    }

    /// Paints the ground layer. Returns false if the cell is outside the grid.
    pub fn set_ground(&mut self, pos: Position, tile: TileType) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.ground[i] = tile;
                true
            }
            None => false,
        }
    }

    /// Places an object, optionally flagging the cell as colliding.
    pub fn place_object(&mut self, pos: Position, tile: TileType, collides: bool) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.objects[i] = Some(tile);
                if collides {
                    self.collision[i] = true;
                }
                true
            }
            None => false,
        }
    }

    /// Removes any object and collision flag from a cell.
    pub fn clear_object(&mut self, pos: Position) -> bool {
        match self.index(pos) {
            Some(i) => {
                self.objects[i] = None;
                self.collision[i] = false;
                true
            }
            None => false,
        }
    }

    /// Iterates over every cell with its effective tile type, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (Position, TileType)> + '_ {
        (0..self.height as i32).flat_map(move |y| {
            (0..self.width as i32).map(move |x| {
                let pos = Position::new(x, y);
                let i = y as usize * self.width as usize + x as usize;
                (pos, self.objects[i].unwrap_or(self.ground[i]))
            })
        })
    }

    /// Counts cells whose effective type is `tile`.
    pub fn count(&self, tile: TileType) -> usize {
        self.cells().filter(|&(_, t)| t == tile).count()
    }

    /// Number of colliding cells.
    pub fn collision_count(&self) -> usize {
        self.collision.iter().filter(|&&c| c).count()
    }

    /// Largest 4-connected set of walkable cells.
    pub fn largest_open_region(&self) -> Vec<Position> {
        largest_region(self.width, self.height, |pos| self.is_walkable(pos))
    }

    /// Renders the effective tiles as text, one line per row.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cell_count() + self.height as usize);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if let Some(tile) = self.tile_at(Position::new(x, y)) {
                    out.push(tile.symbol());
                }
            }
            out.push('\n');
        }
        out
    }
}
