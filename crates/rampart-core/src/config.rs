//! Static configuration consumed by the simulation.
//!
//! Levels, tower types and the ruleset are loaded once, validated, and then
//! never mutated. `GameConfig::default()` is the built-in catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog;
use crate::constants::*;
use crate::enums::{Ability, EnemyKind};
use crate::types::Position;

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration has no levels")]
    NoLevels,
    #[error("level {level}: path needs at least 2 waypoints, found {found}")]
    PathTooShort { level: u32, found: usize },
    #[error("level {level}: no enemy types")]
    NoEnemyTypes { level: u32 },
    #[error("level {level}: spawn interval and enemies per wave must be positive")]
    EmptyWave { level: u32 },
    #[error("configuration has no tower types")]
    NoTowerTypes,
    #[error("default tower type `{0}` is not in the tower table")]
    UnknownDefaultTower(String),
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One level: geometry, spawn cadence and roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub id: u32,
    pub name: String,
    /// Background color id for the renderer.
    pub background: String,
    /// Waypoints; enemies enter at the first and leak at the last.
    pub path: Vec<Position>,
    /// Ticks between spawns at wave 1.
    pub spawn_interval: u32,
    /// Enemies in wave 1.
    pub enemies_per_wave: u32,
    pub enemy_types: Vec<EnemyKind>,
}

/// Stats for one tower type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerTypeSpec {
    pub name: String,
    pub cost: u32,
    pub damage: f64,
    pub range: f64,
    /// Ticks between shots; 0 fires every tick a target is available.
    pub fire_rate: u32,
    #[serde(rename = "special")]
    pub ability: Ability,
    pub color: String,
    pub border_color: String,
    #[serde(default = "default_projectile_color")]
    pub projectile_color: String,
}

fn default_projectile_color() -> String {
    DEFAULT_PROJECTILE_COLOR.to_string()
}

/// Tunable rules. Missing JSON fields take the defaults in `constants`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    pub starting_health: i32,
    pub max_health: i32,
    pub starting_money: u32,
    pub leak_penalty: i32,
    pub level_multiplier_step: f64,
    pub wave_multiplier_step: f64,
    pub max_waves_per_level: u32,
    pub spawn_interval_step: u32,
    pub min_spawn_interval: u32,
    pub enemies_per_wave_step: u32,
    pub level_transition_ticks: u32,
    pub level_bonus_money: u32,
    pub level_bonus_health: i32,
    pub path_clearance: f64,
    pub tower_spacing: f64,
    pub playfield_width: f64,
    pub playfield_height: f64,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            starting_health: MAX_HEALTH,
            max_health: MAX_HEALTH,
            starting_money: STARTING_MONEY,
            leak_penalty: LEAK_PENALTY,
            level_multiplier_step: LEVEL_MULTIPLIER_STEP,
            wave_multiplier_step: WAVE_MULTIPLIER_STEP,
            max_waves_per_level: MAX_WAVES_PER_LEVEL,
            spawn_interval_step: SPAWN_INTERVAL_STEP,
            min_spawn_interval: MIN_SPAWN_INTERVAL,
            enemies_per_wave_step: ENEMIES_PER_WAVE_STEP,
            level_transition_ticks: LEVEL_TRANSITION_TICKS,
            level_bonus_money: LEVEL_BONUS_MONEY,
            level_bonus_health: LEVEL_BONUS_HEALTH,
            path_clearance: PATH_CLEARANCE,
            tower_spacing: TOWER_SPACING,
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
        }
    }
}

/// Everything the simulation needs besides a seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub levels: Vec<LevelDefinition>,
    /// Tower table keyed by tag. Ordered for deterministic iteration.
    pub towers: BTreeMap<String, TowerTypeSpec>,
    /// Tag selected when a game starts.
    pub default_tower: String,
    #[serde(default)]
    pub ruleset: Ruleset,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            levels: catalog::levels(),
            towers: catalog::tower_types(),
            default_tower: catalog::DEFAULT_TOWER.to_string(),
            ruleset: Ruleset::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the load-time contract. The simulation assumes it holds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.levels.is_empty() {
            return Err(ConfigError::NoLevels);
        }
        for level in &self.levels {
            if level.path.len() < 2 {
                return Err(ConfigError::PathTooShort {
                    level: level.id,
                    found: level.path.len(),
                });
            }
            if level.enemy_types.is_empty() {
                return Err(ConfigError::NoEnemyTypes { level: level.id });
            }
            if level.spawn_interval == 0 || level.enemies_per_wave == 0 {
                return Err(ConfigError::EmptyWave { level: level.id });
            }
        }
        if self.towers.is_empty() {
            return Err(ConfigError::NoTowerTypes);
        }
        if !self.towers.contains_key(&self.default_tower) {
            return Err(ConfigError::UnknownDefaultTower(self.default_tower.clone()));
        }
        Ok(())
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Level by 1-based number.
    pub fn level(&self, number: u32) -> Option<&LevelDefinition> {
        (number as usize)
            .checked_sub(1)
            .and_then(|idx| self.levels.get(idx))
    }

    pub fn tower(&self, tag: &str) -> Option<&TowerTypeSpec> {
        self.towers.get(tag)
    }
}
