//! Entity spawn factories.
//!
//! Enemies, towers and projectiles get their component bundles here. Ids
//! are handed out in spawn order and drive every deterministic iteration.

use hecs::{Entity, World};

use rampart_core::components::*;
use rampart_core::config::{Ruleset, TowerTypeSpec};
use rampart_core::enums::{Ability, EnemyKind};
use rampart_core::types::{Position, Velocity};
use rampart_roster::{abilities, stats};

/// Monotonic id counters, one per entity family.
#[derive(Debug, Clone, Default)]
pub struct EntityIds {
    next_enemy: u32,
    next_tower: u32,
    next_projectile: u32,
}

impl EntityIds {
    pub fn enemy(&mut self) -> u32 {
        let id = self.next_enemy;
        self.next_enemy += 1;
        id
    }

    pub fn tower(&mut self) -> u32 {
        let id = self.next_tower;
        self.next_tower += 1;
        id
    }

    pub fn projectile(&mut self) -> u32 {
        let id = self.next_projectile;
        self.next_projectile += 1;
        id
    }
}

/// A projectile requested by a tower, spawned once the tower stage ends.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSpawn {
    pub ability: Ability,
    pub damage: f64,
    pub origin: Position,
    pub target_point: Position,
    pub color: String,
}

/// Spawn an enemy of `kind` at `position` with stats for the given wave
/// and level. Returns the entity and its id.
pub fn spawn_enemy(
    world: &mut World,
    ids: &mut EntityIds,
    kind: EnemyKind,
    wave: u32,
    level: u32,
    position: Position,
    ruleset: &Ruleset,
) -> (Entity, u32) {
    let stats = stats::derive_stats(kind, wave, level, ruleset);
    let id = ids.enemy();

    let enemy = Enemy {
        id,
        kind,
        path_index: 0,
        reached_end: false,
        speed: stats.speed,
        radius: stats.radius,
        points: stats.points,
        money: stats.money,
        color: stats.color.to_string(),
        traits: stats.traits.to_vec(),
    };

    let entity = world.spawn((
        enemy,
        position,
        Health::new(stats.health),
        StatusEffects::default(),
    ));
    (entity, id)
}

/// Spawn a tower of type `tag` at `position`. Returns its id.
pub fn spawn_tower(
    world: &mut World,
    ids: &mut EntityIds,
    tag: &str,
    spec: &TowerTypeSpec,
    position: Position,
) -> u32 {
    let id = ids.tower();
    let tower = Tower {
        id,
        tower_type: tag.to_string(),
        ability: spec.ability,
        base_range: spec.range,
        base_damage: spec.damage,
        base_fire_rate: spec.fire_rate,
        cooldown: 0,
        target: None,
        color: spec.color.clone(),
        border_color: spec.border_color.clone(),
        projectile_color: spec.projectile_color.clone(),
    };
    world.spawn((tower, position, TowerBoosts::default()));
    id
}

/// Spawn a projectile flying from its origin toward the captured point.
pub fn spawn_projectile(world: &mut World, ids: &mut EntityIds, spawn: ProjectileSpawn) -> u32 {
    let profile = abilities::get_profile(spawn.ability);
    let id = ids.projectile();
    let velocity = Velocity::toward(&spawn.origin, &spawn.target_point, profile.projectile_speed);

    let projectile = Projectile {
        id,
        ability: spawn.ability,
        damage: spawn.damage,
        target_point: spawn.target_point,
        radius: profile.projectile_radius,
        pierce_budget: profile.pierce_budget,
        hits: 0,
        struck: Vec::new(),
        remove: false,
        color: spawn.color,
    };
    world.spawn((projectile, spawn.origin, velocity));
    id
}

/// Remove every enemy, tower and projectile. Used when a new level loads.
pub fn clear_level(world: &mut World) {
    let mut doomed: Vec<Entity> = Vec::new();
    doomed.extend(world.query::<&Enemy>().iter().map(|(e, _)| e));
    doomed.extend(world.query::<&Tower>().iter().map(|(e, _)| e));
    doomed.extend(world.query::<&Projectile>().iter().map(|(e, _)| e));
    for entity in doomed {
        let _ = world.despawn(entity);
    }
}
