//! Aggregate game state and the snapshot sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_HEALTH, STARTING_MONEY};
use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Session-wide player state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub score: u32,
    /// 0..=100; 0 means game over.
    pub health: i32,
    pub money: u32,
    /// 1-based wave within the current level.
    pub wave: u32,
    /// 1-based level; exceeds the level count after victory.
    pub level: u32,
    pub running: bool,
    pub level_transition: bool,
    /// Ticks left in the level transition.
    pub transition_timer: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(MAX_HEALTH, STARTING_MONEY)
    }
}

impl GameState {
    pub fn new(health: i32, money: u32) -> Self {
        Self {
            score: 0,
            health,
            money,
            wave: 1,
            level: 1,
            running: true,
            level_transition: false,
            transition_timer: 0,
        }
    }

    /// Top-level phase. Victory is told apart from game over by the level
    /// counter having run past the last level.
    pub fn phase(&self, level_count: usize, paused: bool) -> GamePhase {
        if self.level_transition {
            GamePhase::LevelTransition
        } else if !self.running {
            if self.level as usize > level_count {
                GamePhase::Victory
            } else {
                GamePhase::GameOver
            }
        } else if paused {
            GamePhase::Paused
        } else {
            GamePhase::Active
        }
    }
}

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub level: LevelView,
    pub enemies: Vec<EnemyView>,
    pub towers: Vec<TowerView>,
    pub projectiles: Vec<ProjectileView>,
    pub events: Vec<GameEvent>,
}

/// Numbers for the text fields around the canvas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub score: u32,
    pub health: i32,
    pub money: u32,
    pub level: u32,
    pub wave: u32,
    pub level_count: u32,
    pub max_waves: u32,
    pub selected_tower: String,
    pub transition_remaining: u32,
}

/// The level being played.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LevelView {
    pub id: u32,
    pub name: String,
    pub background: String,
    pub path: Vec<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub kind: EnemyKind,
    pub position: Position,
    pub radius: f64,
    pub color: String,
    pub traits: Vec<EnemyTrait>,
    /// current / max, clamped to 0..=1.
    pub health_fraction: f64,
    pub slowed: bool,
    pub frozen: bool,
    pub burning: bool,
    pub poisoned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: u32,
    pub tower_type: String,
    pub ability: Ability,
    pub position: Position,
    pub size: f64,
    /// Effective range after boosts.
    pub range: f64,
    pub color: String,
    pub border_color: String,
    pub target: Option<u32>,
    pub boosted: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub ability: Ability,
    pub position: Position,
    pub radius: f64,
    pub color: String,
}
