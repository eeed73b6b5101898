//! Enemy stat derivation: a pure function of kind, wave and level.

use rampart_core::config::Ruleset;
use rampart_core::enums::{EnemyKind, EnemyTrait};

use crate::profiles::get_profile;

/// Stats for one spawned enemy.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyStats {
    pub kind: EnemyKind,
    pub health: f64,
    pub speed: f64,
    pub radius: f64,
    pub points: u32,
    pub money: u32,
    pub color: &'static str,
    pub traits: &'static [EnemyTrait],
}

/// `1 + (level - 1) * step`. Scales health and speed.
pub fn level_multiplier(level: u32, ruleset: &Ruleset) -> f64 {
    1.0 + f64::from(level.saturating_sub(1)) * ruleset.level_multiplier_step
}

/// `1 + (wave - 1) * step`. Scales health only.
pub fn wave_multiplier(wave: u32, ruleset: &Ruleset) -> f64 {
    1.0 + f64::from(wave.saturating_sub(1)) * ruleset.wave_multiplier_step
}

/// Derive the stats an enemy of `kind` spawns with.
pub fn derive_stats(kind: EnemyKind, wave: u32, level: u32, ruleset: &Ruleset) -> EnemyStats {
    let profile = get_profile(kind);
    let lm = level_multiplier(level, ruleset);
    let wm = wave_multiplier(wave, ruleset);

    EnemyStats {
        kind,
        health: (profile.base_health * lm * wm).floor(),
        speed: profile.base_speed * lm,
        radius: profile.radius,
        points: profile.points_per_level * level,
        money: profile.money_base + profile.money_per_level * level,
        color: profile.color,
        traits: profile.traits,
    }
}
