//! # Game Mathematics
//!
//! Continuous world-space vectors used for positions and velocities.

use serde::{Deserialize, Serialize};

/// A point or velocity in world units (pixels at 1x zoom).
///
/// # Examples
///
/// ```
/// use wildgrove::Vec2;
///
/// let a = Vec2::new(0.0, 0.0);
/// let b = Vec2::new(3.0, 4.0);
/// assert_eq!(a.distance(b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Creates a new vector.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Vec2) -> f32 {
        (other - self).length()
    }

    /// Angle in radians from this point towards `other`.
    pub fn angle_to(self, other: Vec2) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Velocity of magnitude `speed` pointing from this point at `target`.
    ///
    /// Returns zero when the points coincide.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildgrove::Vec2;
    ///
    /// let v = Vec2::new(0.0, 0.0).velocity_toward(Vec2::new(10.0, 0.0), 80.0);
    /// assert!((v.x - 80.0).abs() < 1e-4);
    /// assert!(v.y.abs() < 1e-4);
    /// ```
    pub fn velocity_toward(self, target: Vec2, speed: f32) -> Vec2 {
        if self == target {
            return Vec2::zero();
        }
        let angle = self.angle_to(target);
        Vec2::new(angle.cos() * speed, angle.sin() * speed)
    }

    /// Scales both components.
    pub fn scale(self, factor: f32) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }

    /// Advances a position by a velocity (units per second) over `delta_ms`.
    pub fn integrate(self, velocity: Vec2, delta_ms: u64) -> Vec2 {
        self + velocity.scale(delta_ms as f32 / 1000.0)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f32, f32)> for Vec2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn test_velocity_toward_has_requested_speed() {
        let from = Vec2::new(100.0, 100.0);
        let to = Vec2::new(40.0, 180.0);
        let v = from.velocity_toward(to, 60.0);
        assert!((v.length() - 60.0).abs() < 1e-3);
        assert!(v.x < 0.0 && v.y > 0.0);
    }

    #[test]
    fn test_velocity_toward_same_point() {
        let p = Vec2::new(7.0, 7.0);
        assert_eq!(p.velocity_toward(p, 80.0), Vec2::zero());
    }

    #[test]
    fn test_integrate() {
        let p = Vec2::new(0.0, 0.0).integrate(Vec2::new(100.0, -50.0), 500);
        assert_eq!(p, Vec2::new(50.0, -25.0));
    }

    #[test]
    fn test_arithmetic() {
        let a = Vec2::new(5.0, 10.0);
        let b = Vec2::new(3.0, 2.0);
        assert_eq!(a + b, Vec2::new(8.0, 12.0));
        assert_eq!(a - b, Vec2::new(2.0, 8.0));
    }
}
