//! Enemy update: status effects, then path following, then leaks.

use hecs::{Entity, World};
use log::{debug, info};

use rampart_core::components::{Enemy, Health, StatusEffects};
use rampart_core::config::Ruleset;
use rampart_core::constants::SLOW_SPEED_FACTOR;
use rampart_core::events::GameEvent;
use rampart_core::state::GameState;
use rampart_core::types::Position;

/// Count down status timers and apply damage over time.
pub fn tick_status(status: &mut StatusEffects, health: &mut Health) {
    status.slow = status.slow.saturating_sub(1);
    status.freeze = status.freeze.saturating_sub(1);

    if status.burn > 0 {
        status.burn -= 1;
        health.take_damage(status.burn_damage);
    }
    if status.poison > 0 {
        status.poison -= 1;
        health.take_damage(status.poison_damage);
    }
}

/// Speed this tick after slow and freeze. Freeze wins.
pub fn effective_speed(base: f64, status: &StatusEffects) -> f64 {
    if status.freeze > 0 {
        0.0
    } else if status.slow > 0 {
        base * SLOW_SPEED_FACTOR
    } else {
        base
    }
}

/// Move one step along the path. Snaps to the next waypoint when it is
/// closer than one step; reaching the last waypoint sets `reached_end`.
pub fn advance_along_path(enemy: &mut Enemy, pos: &mut Position, speed: f64, path: &[Position]) {
    let last = path.len().saturating_sub(1);
    if enemy.path_index >= last {
        enemy.path_index = last;
        enemy.reached_end = true;
        return;
    }

    let target = path[enemy.path_index + 1];
    let distance = pos.distance_to(&target);

    if distance < speed {
        *pos = target;
        enemy.path_index += 1;
        if enemy.path_index >= last {
            enemy.reached_end = true;
        }
    } else if speed > 0.0 {
        let step = (target.as_vec() - pos.as_vec()) / distance * speed;
        *pos = Position::from_vec(pos.as_vec() + step);
    }
}

/// Update every enemy in spawn order, then remove the ones that leaked
/// and charge the leak penalty.
pub fn run(
    world: &mut World,
    path: &[Position],
    state: &mut GameState,
    ruleset: &Ruleset,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    let mut order: Vec<(u32, Entity)> = world
        .query::<&Enemy>()
        .iter()
        .map(|(entity, enemy)| (enemy.id, entity))
        .collect();
    order.sort_by_key(|(id, _)| *id);

    despawn_buffer.clear();
    let mut leaked: Vec<u32> = Vec::new();

    for (id, entity) in order {
        let Ok((enemy, pos, health, status)) = world
            .query_one_mut::<(&mut Enemy, &mut Position, &mut Health, &mut StatusEffects)>(entity)
        else {
            continue;
        };

        tick_status(status, health);
        if !health.is_alive() {
            // Killed by damage over time; reaped at the end of the tick.
            continue;
        }

        let speed = effective_speed(enemy.speed, status);
        advance_along_path(enemy, pos, speed, path);

        if enemy.reached_end {
            despawn_buffer.push(entity);
            leaked.push(id);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for enemy_id in leaked {
        state.health = (state.health - ruleset.leak_penalty).max(0);
        debug!("enemy {enemy_id} leaked, health now {}", state.health);
        events.push(GameEvent::EnemyLeaked {
            enemy_id,
            penalty: ruleset.leak_penalty,
        });

        if state.health <= 0 && state.running {
            state.running = false;
            info!("game over at level {} wave {}", state.level, state.wave);
            events.push(GameEvent::GameOver {
                level: state.level,
                wave: state.wave,
            });
        }
    }
}
