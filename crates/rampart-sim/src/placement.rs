//! Tower placement validation.

use hecs::World;
use thiserror::Error;

use rampart_core::components::Tower;
use rampart_core::config::{GameConfig, TowerTypeSpec};
use rampart_core::state::GameState;
use rampart_core::types::Position;

/// Why a placement was refused. State is never changed on refusal.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    #[error("placement is closed while the game is over or between levels")]
    NotAccepting,
    #[error("unknown tower type `{0}`")]
    UnknownTowerType(String),
    #[error("({x}, {y}) is outside the playfield")]
    OutOfBounds { x: f64, y: f64 },
    #[error("not enough money: need {cost}, have {money}")]
    InsufficientFunds { cost: u32, money: u32 },
    #[error("too close to the path: {distance:.1} < {required}")]
    TooCloseToPath { distance: f64, required: f64 },
    #[error("too close to tower {tower_id}: {distance:.1} < {required}")]
    TooCloseToTower {
        tower_id: u32,
        distance: f64,
        required: f64,
    },
}

/// Validate a placement against the current world. Returns the tower spec
/// on success.
pub fn validate<'a>(
    world: &World,
    state: &GameState,
    config: &'a GameConfig,
    path: &[Position],
    position: Position,
    tag: &str,
) -> Result<&'a TowerTypeSpec, PlacementError> {
    if !state.running || state.level_transition {
        return Err(PlacementError::NotAccepting);
    }

    let spec = config
        .tower(tag)
        .ok_or_else(|| PlacementError::UnknownTowerType(tag.to_string()))?;

    let ruleset = &config.ruleset;
    if !position.within_bounds(ruleset.playfield_width, ruleset.playfield_height) {
        return Err(PlacementError::OutOfBounds {
            x: position.x,
            y: position.y,
        });
    }

    if state.money < spec.cost {
        return Err(PlacementError::InsufficientFunds {
            cost: spec.cost,
            money: state.money,
        });
    }

    let path_distance = path
        .windows(2)
        .map(|seg| position.distance_to_segment(&seg[0], &seg[1]))
        .fold(f64::INFINITY, f64::min);
    if path_distance < ruleset.path_clearance {
        return Err(PlacementError::TooCloseToPath {
            distance: path_distance,
            required: ruleset.path_clearance,
        });
    }

    let mut towers: Vec<(u32, Position)> = world
        .query::<(&Tower, &Position)>()
        .iter()
        .map(|(_, (tower, pos))| (tower.id, *pos))
        .collect();
    towers.sort_by_key(|(id, _)| *id);

    for (tower_id, tower_pos) in towers {
        let distance = position.distance_to(&tower_pos);
        if distance < ruleset.tower_spacing {
            return Err(PlacementError::TooCloseToTower {
                tower_id,
                distance,
                required: ruleset.tower_spacing,
            });
        }
    }

    Ok(spec)
}
