//! Reap stage: removes dead enemies and spent projectiles.
//!
//! Runs once at the end of the tick, so every kill is rewarded exactly once
//! no matter how many sources damaged the enemy.

use hecs::{Entity, World};
use log::debug;

use rampart_core::components::{Enemy, Health, Projectile, Tower};
use rampart_core::events::GameEvent;
use rampart_core::state::GameState;

/// Remove enemies with health <= 0 (awarding their points and money) and
/// projectiles flagged for removal. Towers aiming at a reaped enemy lose
/// their target.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    state: &mut GameState,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();

    let mut dead: Vec<(u32, u32, u32, Entity)> = world
        .query::<(&Enemy, &Health)>()
        .iter()
        .filter(|(_, (_, health))| !health.is_alive())
        .map(|(entity, (enemy, _))| (enemy.id, enemy.points, enemy.money, entity))
        .collect();
    dead.sort_by_key(|(id, ..)| *id);
    let reaped: Vec<u32> = dead.iter().map(|(id, ..)| *id).collect();

    for (enemy_id, points, money, entity) in dead {
        state.score += points;
        state.money += money;
        debug!("enemy {enemy_id} killed: +{points} points, +{money} money");
        events.push(GameEvent::EnemyKilled {
            enemy_id,
            points,
            money,
        });
        despawn_buffer.push(entity);
    }

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.remove {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    if !reaped.is_empty() {
        for (_, tower) in world.query_mut::<&mut Tower>() {
            if tower.target.is_some_and(|id| reaped.contains(&id)) {
                tower.target = None;
            }
        }
    }
}
