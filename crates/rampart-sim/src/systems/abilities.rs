//! Tower ability execution.
//!
//! `execute` runs once per shot. It queues projectiles into the tower
//! stage's sink and applies fire-time effects (status timers, chain
//! lightning, the nuclear blast, support boosts) directly to the world.

use hecs::{Entity, World};

use rampart_core::components::{Health, StatusEffects, Tower, TowerBoosts};
use rampart_core::constants::*;
use rampart_core::enums::Ability;
use rampart_core::events::GameEvent;
use rampart_core::types::Position;
use rampart_roster::abilities::{self, Boost, BoostStat};

use crate::systems::targeting::{self, EnemyProbe};
use crate::world_setup::ProjectileSpawn;

/// The firing tower's effective stats for one shot.
#[derive(Debug, Clone)]
pub struct Shot {
    pub tower_id: u32,
    pub origin: Position,
    pub ability: Ability,
    pub damage: f64,
    pub range: f64,
    pub projectile_color: String,
    pub target: EnemyProbe,
}

/// Execute the shot's ability against its target.
pub fn execute(
    world: &mut World,
    shot: &Shot,
    probes: &[EnemyProbe],
    sink: &mut Vec<ProjectileSpawn>,
    events: &mut Vec<GameEvent>,
) {
    let profile = abilities::get_profile(shot.ability);
    if let Some(boost) = profile.boost {
        apply_boost(world, shot, boost);
        return;
    }

    let projectile_damage = if shot.ability == Ability::Beam {
        0.0
    } else {
        shot.damage
    };
    sink.push(ProjectileSpawn {
        ability: shot.ability,
        damage: projectile_damage,
        origin: shot.origin,
        target_point: shot.target.position,
        color: shot.projectile_color.clone(),
    });

    let target = shot.target;
    match shot.ability {
        Ability::Slow => with_status(world, target.entity, |s| s.slow = SLOW_DURATION),
        Ability::Freeze => with_status(world, target.entity, |s| s.freeze = FREEZE_DURATION),
        Ability::Burn => {
            let per_tick = shot.damage * BURN_DAMAGE_FRACTION;
            ignite(world, target.entity, BURN_DURATION, per_tick);
        }
        Ability::BurnSpread => {
            ignite(world, target.entity, BURN_DURATION, shot.damage * BURN_DAMAGE_FRACTION);
            let spread = shot.damage * SPREAD_BURN_DAMAGE_FRACTION;
            let nearby = targeting::within_radius(probes, &target.position, BURN_SPREAD_RADIUS);
            for (probe, _) in nearby {
                if probe.id != target.id {
                    ignite(world, probe.entity, SPREAD_BURN_DURATION, spread);
                }
            }
        }
        Ability::PoisonThorns => with_status(world, target.entity, |s| {
            s.poison = POISON_DURATION;
            s.poison_damage = shot.damage * POISON_DAMAGE_FRACTION;
        }),
        Ability::AoeFreeze => {
            let nearby = targeting::within_radius(probes, &target.position, AOE_FREEZE_RADIUS);
            for (probe, _) in nearby {
                with_status(world, probe.entity, |s| s.freeze = AOE_FREEZE_DURATION);
            }
        }
        Ability::Chain => {
            chain_lightning(world, probes, target, shot.damage * CHAIN_INITIAL_FACTOR);
        }
        Ability::Nuclear => {
            for (probe, distance) in
                targeting::within_radius(probes, &target.position, NUCLEAR_BLAST_RADIUS)
            {
                damage(world, probe.entity, shot.damage * (1.0 - distance / NUCLEAR_BLAST_RADIUS));
            }
            events.push(GameEvent::Explosion {
                position: target.position,
                radius: NUCLEAR_BLAST_RADIUS,
            });
        }
        _ => {}
    }
}

/// Direct beam damage for one tick: a third of the damage spread over the
/// fire interval.
pub fn beam_damage_per_tick(damage: f64, fire_rate: i32) -> f64 {
    damage * BEAM_DAMAGE_FRACTION / f64::from(fire_rate.max(1))
}

pub fn damage(world: &World, entity: Entity, amount: f64) {
    if let Ok(mut health) = world.get::<&mut Health>(entity) {
        health.take_damage(amount);
    }
}

fn with_status(world: &World, entity: Entity, f: impl FnOnce(&mut StatusEffects)) {
    if let Ok(mut status) = world.get::<&mut StatusEffects>(entity) {
        f(&mut *status);
    }
}

fn ignite(world: &World, entity: Entity, duration: u32, per_tick: f64) {
    with_status(world, entity, |s| {
        s.burn = duration;
        s.burn_damage = per_tick;
    });
}

/// Hop from the primary target to the nearest enemy not yet struck,
/// losing strength at each hop. Hit markers live only for this call.
fn chain_lightning(world: &World, probes: &[EnemyProbe], start: EnemyProbe, initial: f64) {
    let mut struck = vec![start.id];
    let mut from = start.position;
    let mut amount = initial;

    for _ in 0..CHAIN_MAX_HOPS {
        let Some(next) = targeting::nearest_within(probes, &from, CHAIN_RADIUS, |id| {
            struck.contains(&id)
        }) else {
            break;
        };
        damage(world, next.entity, amount);
        struck.push(next.id);
        from = next.position;
        amount *= CHAIN_FALLOFF;
    }
}

/// Overwrite the boosted stat on every other tower strictly in range.
fn apply_boost(world: &mut World, shot: &Shot, boost: Boost) {
    for (_entity, (tower, pos, boosts)) in
        world.query_mut::<(&Tower, &Position, &mut TowerBoosts)>()
    {
        if tower.id == shot.tower_id || pos.distance_to(&shot.origin) >= shot.range {
            continue;
        }
        match boost.stat {
            BoostStat::Range => boosts.range = boost.factor,
            BoostStat::Damage => boosts.damage = boost.factor,
            BoostStat::FireRate => boosts.fire_rate = boost.factor,
        }
    }
}
