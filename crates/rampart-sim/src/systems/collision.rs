//! Projectile/enemy collision and impact effects.

use hecs::{Entity, World};

use rampart_core::components::{Health, Projectile};
use rampart_core::constants::SPLASH_DAMAGE_FACTOR;
use rampart_core::events::GameEvent;
use rampart_core::types::Position;
use rampart_roster::abilities;

use crate::systems::abilities::damage;
use crate::systems::targeting::{self, EnemyProbe};

/// Whether a projectile at `pos` with radius `radius` touches the enemy.
pub fn touches(pos: &Position, radius: f64, enemy: &EnemyProbe) -> bool {
    pos.distance_to(&enemy.position) <= radius + enemy.radius
}

/// Test one projectile against every live enemy in spawn order, applying
/// hits until the projectile is spent.
pub fn resolve(world: &mut World, entity: Entity, events: &mut Vec<GameEvent>) {
    let (pos, radius, ability) = match world.query_one_mut::<(&Projectile, &Position)>(entity) {
        Ok((projectile, pos)) if !projectile.remove => {
            (*pos, projectile.radius, projectile.ability)
        }
        _ => return,
    };
    let splash_radius = abilities::get_profile(ability).splash_radius;

    for enemy in targeting::live_enemies(world) {
        if !touches(&pos, radius, &enemy) || !is_alive(world, enemy.entity) {
            continue;
        }

        let hit_damage = {
            let Ok(mut projectile) = world.get::<&mut Projectile>(entity) else {
                return;
            };
            if projectile.remove {
                break;
            }
            if projectile.struck.contains(&enemy.id) {
                continue;
            }
            projectile.register_hit(enemy.id);
            projectile.damage
        };

        damage(world, enemy.entity, hit_damage);

        if let Some(splash) = splash_radius {
            explode(world, &enemy, hit_damage, splash);
            events.push(GameEvent::Explosion {
                position: enemy.position,
                radius: splash,
            });
        }
    }
}

/// Falloff splash around the struck enemy. The struck enemy is excluded.
fn explode(world: &World, center: &EnemyProbe, amount: f64, radius: f64) {
    let probes = targeting::live_enemies(world);
    for (probe, distance) in targeting::within_radius(&probes, &center.position, radius) {
        if probe.id == center.id {
            continue;
        }
        damage(
            world,
            probe.entity,
            amount * (1.0 - distance / radius) * SPLASH_DAMAGE_FACTOR,
        );
    }
}

fn is_alive(world: &World, entity: Entity) -> bool {
    world
        .get::<&Health>(entity)
        .map(|health| health.is_alive())
        .unwrap_or(false)
}
