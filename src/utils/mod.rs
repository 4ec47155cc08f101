//! # Utilities Module
//!
//! World-space mathematics and grid region analysis.

pub mod math;
pub mod pathfinding;

pub use self::math::*;
pub use self::pathfinding::*;
