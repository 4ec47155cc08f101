//! # Region Analysis
//!
//! Connectivity queries over tile grids, used to find usable open space in caves.

use crate::game::Position;
use ::pathfinding::prelude::bfs_reach;
use std::collections::HashSet;

/// Collects every cell 4-connected to `start` for which `walkable` holds.
///
/// Returns an empty region when `start` itself is not walkable.
pub fn flood_region<F>(start: Position, walkable: F) -> Vec<Position>
where
    F: Fn(Position) -> bool,
{
    if !walkable(start) {
        return Vec::new();
    }

    bfs_reach(start, |pos: &Position| {
        pos.cardinal_adjacent_positions()
            .into_iter()
            .filter(|&next| walkable(next))
            .collect::<Vec<_>>()
    })
    .collect()
}

/// Finds the largest 4-connected walkable region in a `width × height` grid.
///
/// Ties keep the region discovered first in row-major order.
pub fn largest_region<F>(width: u32, height: u32, walkable: F) -> Vec<Position>
where
    F: Fn(Position) -> bool,
{
    let mut visited: HashSet<Position> = HashSet::new();
    let mut best: Vec<Position> = Vec::new();

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let pos = Position::new(x, y);
            if visited.contains(&pos) || !walkable(pos) {
                continue;
            }

            let region = flood_region(pos, &walkable);
            visited.extend(region.iter().copied());
            if region.len() > best.len() {
                best = region;
            }
        }
    }

    best
}
