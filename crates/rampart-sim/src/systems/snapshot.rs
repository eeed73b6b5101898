//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use rampart_core::components::*;
use rampart_core::config::GameConfig;
use rampart_core::constants::TOWER_SIZE;
use rampart_core::enums::GamePhase;
use rampart_core::events::GameEvent;
use rampart_core::state::*;
use rampart_core::types::{Position, SimTime};

use crate::systems::towers::effective_stats;

/// Everything outside the world that the snapshot reports.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub state: &'a GameState,
    pub config: &'a GameConfig,
    pub selected_tower: &'a str,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &SnapshotContext<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        hud: build_hud(ctx),
        level: build_level(ctx),
        enemies: build_enemies(world),
        towers: build_towers(world),
        projectiles: build_projectiles(world),
        events,
    }
}

fn build_hud(ctx: &SnapshotContext<'_>) -> HudView {
    let state = ctx.state;
    HudView {
        score: state.score,
        health: state.health,
        money: state.money,
        level: state.level,
        wave: state.wave,
        level_count: ctx.config.level_count() as u32,
        max_waves: ctx.config.ruleset.max_waves_per_level,
        selected_tower: ctx.selected_tower.to_string(),
        transition_remaining: if state.level_transition {
            state.transition_timer
        } else {
            0
        },
    }
}

/// After victory the level counter runs past the table; show the last level.
fn build_level(ctx: &SnapshotContext<'_>) -> LevelView {
    let number = ctx.state.level.min(ctx.config.level_count() as u32);
    ctx.config
        .level(number)
        .map(|level| LevelView {
            id: level.id,
            name: level.name.clone(),
            background: level.background.clone(),
            path: level.path.clone(),
        })
        .unwrap_or_default()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Health, &StatusEffects)>()
        .iter()
        .map(|(_, (enemy, pos, health, status))| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            position: *pos,
            radius: enemy.radius,
            color: enemy.color.clone(),
            traits: enemy.traits.clone(),
            health_fraction: health.fraction(),
            slowed: status.slow > 0,
            frozen: status.freeze > 0,
            burning: status.burn > 0,
            poisoned: status.poison > 0,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &Position, &TowerBoosts)>()
        .iter()
        .map(|(_, (tower, pos, boosts))| TowerView {
            id: tower.id,
            tower_type: tower.tower_type.clone(),
            ability: tower.ability,
            position: *pos,
            size: TOWER_SIZE,
            range: effective_stats(tower, boosts).range,
            color: tower.color.clone(),
            border_color: tower.border_color.clone(),
            target: tower.target,
            boosted: *boosts != TowerBoosts::default(),
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .map(|(_, (projectile, pos))| ProjectileView {
            id: projectile.id,
            ability: projectile.ability,
            position: *pos,
            radius: projectile.radius,
            color: projectile.color.clone(),
        })
        .collect();

    projectiles.sort_by_key(|p| p.id);
    projectiles
}
