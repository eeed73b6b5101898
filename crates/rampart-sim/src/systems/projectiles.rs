//! Projectile stage: integrate motion, flag exits, then resolve hits in
//! fire order.

use hecs::{Entity, World};

use rampart_core::components::Projectile;
use rampart_core::config::Ruleset;
use rampart_core::events::GameEvent;
use rampart_core::types::{Position, Velocity};

use crate::systems::collision;

/// position += velocity; anything outside the playfield is flagged.
pub fn integrate(world: &mut World, ruleset: &Ruleset) {
    for (_entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Position, &Velocity)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
        if !pos.within_bounds(ruleset.playfield_width, ruleset.playfield_height) {
            projectile.remove = true;
        }
    }
}

pub fn run(world: &mut World, ruleset: &Ruleset, events: &mut Vec<GameEvent>) {
    integrate(world, ruleset);

    let mut order: Vec<(u32, Entity)> = world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, projectile)| !projectile.remove)
        .map(|(entity, projectile)| (projectile.id, entity))
        .collect();
    order.sort_by_key(|(id, _)| *id);

    for (_, entity) in order {
        collision::resolve(world, entity, events);
    }
}
