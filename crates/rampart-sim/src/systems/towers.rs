//! Tower stage: cooldown, retargeting and firing, in placement order.

use hecs::{Entity, World};

use rampart_core::components::{Tower, TowerBoosts};
use rampart_core::enums::Ability;
use rampart_core::events::GameEvent;
use rampart_core::types::Position;

use crate::systems::abilities::{self, Shot};
use crate::systems::targeting;
use crate::world_setup::ProjectileSpawn;

/// Effective stats after boosts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveStats {
    pub range: f64,
    pub damage: f64,
    /// Ticks between shots.
    pub fire_rate: i32,
}

pub fn effective_stats(tower: &Tower, boosts: &TowerBoosts) -> EffectiveStats {
    EffectiveStats {
        range: tower.base_range * boosts.range,
        damage: tower.base_damage * boosts.damage,
        fire_rate: (f64::from(tower.base_fire_rate) * boosts.fire_rate).round() as i32,
    }
}

/// Run every tower once. Projectiles go into `sink`; the caller spawns
/// them after the stage.
pub fn run(world: &mut World, sink: &mut Vec<ProjectileSpawn>, events: &mut Vec<GameEvent>) {
    let mut order: Vec<(u32, Entity)> = world
        .query::<&Tower>()
        .iter()
        .map(|(entity, tower)| (tower.id, entity))
        .collect();
    order.sort_by_key(|(id, _)| *id);

    for (_, entity) in order {
        update_tower(world, entity, sink, events);
    }
}

fn update_tower(
    world: &mut World,
    entity: Entity,
    sink: &mut Vec<ProjectileSpawn>,
    events: &mut Vec<GameEvent>,
) {
    let probes = targeting::live_enemies(world);

    let (shot, fire_rate, ready) = {
        let Ok((tower, pos, boosts)) =
            world.query_one_mut::<(&mut Tower, &Position, &TowerBoosts)>(entity)
        else {
            return;
        };

        tower.cooldown = (tower.cooldown - 1).max(0);
        let stats = effective_stats(tower, boosts);
        let target = targeting::find_target(&probes, pos, stats.range);
        tower.target = target.map(|t| t.id);

        let Some(target) = target else {
            return;
        };

        let shot = Shot {
            tower_id: tower.id,
            origin: *pos,
            ability: tower.ability,
            damage: stats.damage,
            range: stats.range,
            projectile_color: tower.projectile_color.clone(),
            target,
        };
        (shot, stats.fire_rate, tower.cooldown <= 0)
    };

    if shot.ability == Ability::Beam {
        let per_tick = abilities::beam_damage_per_tick(shot.damage, fire_rate);
        abilities::damage(world, shot.target.entity, per_tick);
    }

    if !ready {
        return;
    }

    abilities::execute(world, &shot, &probes, sink, events);
    if !shot.ability.is_support() {
        events.push(GameEvent::TowerFired {
            tower_id: shot.tower_id,
            ability: shot.ability,
            target_id: shot.target.id,
        });
    }

    if let Ok(mut tower) = world.get::<&mut Tower>(entity) {
        tower.cooldown = fire_rate;
    }
}
