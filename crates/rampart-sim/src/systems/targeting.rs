//! Enemy probes and nearest-enemy queries.
//!
//! A probe is a cheap copy of the parts of a live enemy that targeting and
//! area effects need. Probes are rebuilt whenever health may have changed.

use hecs::{Entity, World};

use rampart_core::components::{Enemy, Health};
use rampart_core::types::Position;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProbe {
    pub entity: Entity,
    pub id: u32,
    pub position: Position,
    pub radius: f64,
}

/// All live enemies (health > 0), in spawn order.
pub fn live_enemies(world: &World) -> Vec<EnemyProbe> {
    let mut probes: Vec<EnemyProbe> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.is_alive())
        .map(|(entity, (enemy, pos, _))| EnemyProbe {
            entity,
            id: enemy.id,
            position: *pos,
            radius: enemy.radius,
        })
        .collect();
    probes.sort_by_key(|p| p.id);
    probes
}

/// Closest probe within `range` (inclusive). Ties go to the first in order.
pub fn find_target(probes: &[EnemyProbe], origin: &Position, range: f64) -> Option<EnemyProbe> {
    let mut best: Option<(EnemyProbe, f64)> = None;
    for probe in probes {
        let distance = origin.distance_to(&probe.position);
        if distance > range {
            continue;
        }
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((*probe, distance)),
        }
    }
    best.map(|(probe, _)| probe)
}

/// Closest probe strictly within `radius` of `from` that `skip` does not
/// exclude. Ties go to the first in order.
pub fn nearest_within(
    probes: &[EnemyProbe],
    from: &Position,
    radius: f64,
    skip: impl Fn(u32) -> bool,
) -> Option<EnemyProbe> {
    let mut best = None;
    let mut limit = radius;
    for probe in probes.iter().filter(|p| !skip(p.id)) {
        let distance = from.distance_to(&probe.position);
        if distance < limit {
            limit = distance;
            best = Some(*probe);
        }
    }
    best
}

/// Probes strictly within `radius` of `center`, with their distances.
pub fn within_radius<'a>(
    probes: &'a [EnemyProbe],
    center: &'a Position,
    radius: f64,
) -> impl Iterator<Item = (EnemyProbe, f64)> + 'a {
    probes.iter().filter_map(move |probe| {
        let distance = center.distance_to(&probe.position);
        (distance < radius).then_some((*probe, distance))
    })
}
