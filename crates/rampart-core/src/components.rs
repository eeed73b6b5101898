//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems, with the
//! exception of tiny accessors that keep invariants in one place.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// An enemy walking the level path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Unique id (spawn order).
    pub id: u32,
    pub kind: EnemyKind,
    /// Index of the waypoint most recently reached.
    pub path_index: usize,
    pub reached_end: bool,
    /// Speed in pixels per tick before status effects.
    pub speed: f64,
    pub radius: f64,
    pub points: u32,
    pub money: u32,
    pub color: String,
    pub traits: Vec<EnemyTrait>,
}

/// Hit points. `current` may go negative; that is the death signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub fn new(max: f64) -> Self {
        Self { current: max, max }
    }

    /// Subtract damage exactly; no clamping.
    pub fn take_damage(&mut self, amount: f64) {
        self.current -= amount;
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            (self.current / self.max).clamp(0.0, 1.0)
        }
    }
}

/// Transient modifiers on an enemy. Timers count down in ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusEffects {
    pub slow: u32,
    pub freeze: u32,
    pub burn: u32,
    pub burn_damage: f64,
    pub poison: u32,
    pub poison_damage: f64,
}

/// A placed tower.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    /// Unique id (placement order).
    pub id: u32,
    /// Tower type tag in the configuration table.
    pub tower_type: String,
    pub ability: Ability,
    pub base_range: f64,
    pub base_damage: f64,
    /// Ticks between shots before boosts.
    pub base_fire_rate: u32,
    /// Ticks until the tower may fire again.
    pub cooldown: i32,
    /// Enemy id chosen this tick, if any.
    pub target: Option<u32>,
    pub color: String,
    pub border_color: String,
    pub projectile_color: String,
}

/// Multipliers applied by support towers. Overwritten, never stacked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TowerBoosts {
    pub range: f64,
    pub damage: f64,
    pub fire_rate: f64,
}

impl Default for TowerBoosts {
    fn default() -> Self {
        Self {
            range: 1.0,
            damage: 1.0,
            fire_rate: 1.0,
        }
    }
}

/// A projectile in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    /// Unique id (fire order).
    pub id: u32,
    pub ability: Ability,
    pub damage: f64,
    /// Target location captured at fire time.
    pub target_point: Position,
    pub radius: f64,
    /// Hits allowed before removal; 0 means a single hit.
    pub pierce_budget: u32,
    pub hits: u32,
    /// Enemies this projectile already struck.
    pub struck: Vec<u32>,
    pub remove: bool,
    pub color: String,
}

impl Projectile {
    /// Record a hit and flag for removal once the budget is spent.
    pub fn register_hit(&mut self, enemy_id: u32) {
        self.hits += 1;
        self.struck.push(enemy_id);
        if self.hits >= self.pierce_budget.max(1) {
            self.remove = true;
        }
    }
}
