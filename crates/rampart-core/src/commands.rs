//! Player commands sent from the frontend to the simulation.
//!
//! Commands are applied between ticks, never in the middle of one.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Place a tower at a playfield position.
    /// `tower_type: None` uses the currently selected type.
    PlaceTower {
        x: f64,
        y: f64,
        #[serde(default)]
        tower_type: Option<String>,
    },
    /// Change the tower type used by subsequent placements.
    SelectTowerType { tower_type: String },
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
