//! Events emitted by the simulation for UI and audio feedback.
//!
//! Events accumulate during a tick and are drained into that tick's snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    EnemySpawned { enemy_id: u32, kind: EnemyKind },
    /// Enemy reached the end of the path.
    EnemyLeaked { enemy_id: u32, penalty: i32 },
    EnemyKilled { enemy_id: u32, points: u32, money: u32 },
    TowerPlaced { tower_id: u32, tower_type: String, position: Position },
    TowerFired { tower_id: u32, ability: Ability, target_id: u32 },
    /// Splash or fire-time blast centered on a point.
    Explosion { position: Position, radius: f64 },
    WaveStarted { level: u32, wave: u32 },
    LevelCompleted { level: u32 },
    GameOver { level: u32, wave: u32 },
    Victory { score: u32 },
}
