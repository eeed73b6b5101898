//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// 2D position on the playfield (pixels).
/// x grows to the right, y grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity (pixels per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks the world has advanced.
    pub tick: u64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn from_vec(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.as_vec().distance(other.as_vec())
    }

    /// Shortest distance from this point to the segment `a`–`b`.
    pub fn distance_to_segment(&self, a: &Position, b: &Position) -> f64 {
        let p = self.as_vec();
        let a = a.as_vec();
        let ab = b.as_vec() - a;
        let len_sq = ab.length_squared();
        if len_sq == 0.0 {
            return p.distance(a);
        }
        let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
        p.distance(a + ab * t)
    }

    /// Whether the point lies inside the axis-aligned rectangle `[0,w]×[0,h]`.
    pub fn within_bounds(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.x <= width && self.y >= 0.0 && self.y <= height
    }
}

impl Velocity {
    /// Velocity of magnitude `speed` pointing from `from` toward `to`.
    /// Degenerate aims (zero distance) fire along +x.
    pub fn toward(from: &Position, to: &Position, speed: f64) -> Self {
        let dir = (to.as_vec() - from.as_vec())
            .try_normalize()
            .unwrap_or(DVec2::X);
        let v = dir * speed;
        Self { x: v.x, y: v.y }
    }

    /// Speed magnitude (pixels per tick).
    pub fn speed(&self) -> f64 {
        DVec2::new(self.x, self.y).length()
    }
}

impl SimTime {
    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
    }
}
