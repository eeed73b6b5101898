//! Deterministic greedy tower builder.
//!
//! Reads only the snapshot and the static configuration, so it behaves the
//! same whether it runs inside the loop thread or beside it.

use rampart_core::commands::PlayerCommand;
use rampart_core::config::GameConfig;
use rampart_core::enums::GamePhase;
use rampart_core::state::GameStateSnapshot;
use rampart_core::types::Position;

/// Grid spacing for candidate sites (pixels).
const GRID_STEP: f64 = 20.0;

/// Ticks between build decisions.
const DECISION_INTERVAL: u64 = 30;

/// Builds one tower type on the legal site closest to the path whenever it
/// can afford one.
#[derive(Debug, Clone)]
pub struct Autoplayer {
    tower_type: String,
}

impl Autoplayer {
    pub fn new(tower_type: impl Into<String>) -> Self {
        Self {
            tower_type: tower_type.into(),
        }
    }

    /// Pick at most one placement for the state in `snapshot`.
    pub fn plan(&self, snapshot: &GameStateSnapshot, config: &GameConfig) -> Option<PlayerCommand> {
        if snapshot.phase != GamePhase::Active || snapshot.time.tick % DECISION_INTERVAL != 0 {
            return None;
        }
        let spec = config.tower(&self.tower_type)?;
        if snapshot.hud.money < spec.cost {
            return None;
        }

        let site = best_site(snapshot, config)?;
        Some(PlayerCommand::PlaceTower {
            x: site.x,
            y: site.y,
            tower_type: Some(self.tower_type.clone()),
        })
    }
}

/// Legal grid site nearest the path; row-major order breaks ties.
fn best_site(snapshot: &GameStateSnapshot, config: &GameConfig) -> Option<Position> {
    let rules = &config.ruleset;
    let path = &snapshot.level.path;
    let mut best: Option<(f64, Position)> = None;

    let mut y = GRID_STEP;
    while y < rules.playfield_height {
        let mut x = GRID_STEP;
        while x < rules.playfield_width {
            let site = Position::new(x, y);
            let clearance = path_distance(&site, path);
            let spaced = snapshot
                .towers
                .iter()
                .all(|tower| site.distance_to(&tower.position) >= rules.tower_spacing);
            if clearance >= rules.path_clearance
                && spaced
                && best.map_or(true, |(d, _)| clearance < d)
            {
                best = Some((clearance, site));
            }
            x += GRID_STEP;
        }
        y += GRID_STEP;
    }
    best.map(|(_, site)| site)
}

fn path_distance(site: &Position, path: &[Position]) -> f64 {
    path.windows(2)
        .map(|seg| site.distance_to_segment(&seg[0], &seg[1]))
        .fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_sim::{SimConfig, SimulationEngine};

    fn engine() -> SimulationEngine {
        SimulationEngine::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn test_plans_a_legal_site() {
        let mut engine = engine();
        let config = engine.config().clone();
        let autoplayer = Autoplayer::new(config.default_tower.clone());

        let mut planned = None;
        for _ in 0..DECISION_INTERVAL {
            let snapshot = engine.tick();
            if let Some(command) = autoplayer.plan(&snapshot, &config) {
                planned = Some(command);
                break;
            }
        }

        let Some(PlayerCommand::PlaceTower { x, y, tower_type }) = planned else {
            panic!("expected a placement within one decision interval");
        };
        let tag = tower_type.unwrap();
        assert!(engine.check_placement(x, y, &tag).is_ok());
        assert!(engine.place_tower(x, y, &tag).is_ok());
    }

    #[test]
    fn test_respects_funds() {
        let mut engine = engine();
        let config = engine.config().clone();
        // Costliest tower in the catalog.
        let (tag, _) = config
            .towers
            .iter()
            .max_by_key(|(_, spec)| spec.cost)
            .unwrap();
        let autoplayer = Autoplayer::new(tag.clone());

        for _ in 0..(DECISION_INTERVAL * 2) {
            let snapshot = engine.tick();
            assert!(autoplayer.plan(&snapshot, &config).is_none());
        }
    }

    #[test]
    fn test_unknown_tower_never_plans() {
        let mut engine = engine();
        let config = engine.config().clone();
        let autoplayer = Autoplayer::new("catapult");
        for _ in 0..DECISION_INTERVAL {
            let snapshot = engine.tick();
            assert!(autoplayer.plan(&snapshot, &config).is_none());
        }
    }

    #[test]
    fn test_second_site_respects_spacing() {
        let mut game = GameConfig::default();
        game.ruleset.starting_money = 10_000;
        let mut engine = SimulationEngine::new(SimConfig { seed: 1, game }).unwrap();
        let config = engine.config().clone();
        let autoplayer = Autoplayer::new(config.default_tower.clone());

        let mut placed = Vec::new();
        while placed.len() < 2 {
            let snapshot = engine.tick();
            if let Some(PlayerCommand::PlaceTower { x, y, tower_type }) =
                autoplayer.plan(&snapshot, &config)
            {
                engine.place_tower(x, y, &tower_type.unwrap()).unwrap();
                placed.push(Position::new(x, y));
            }
        }
        assert!(placed[0].distance_to(&placed[1]) >= config.ruleset.tower_spacing);
    }
}
