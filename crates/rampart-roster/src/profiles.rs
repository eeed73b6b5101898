//! Enemy archetype profiles.
//!
//! One row per enemy kind. Stats scale with level and wave in `stats`.

use rampart_core::enums::{EnemyKind, EnemyTrait};

/// Static profile for an enemy kind.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyProfile {
    /// Pixels per tick at level 1.
    pub base_speed: f64,
    /// Hit points at level 1, wave 1.
    pub base_health: f64,
    /// Collision radius (pixels).
    pub radius: f64,
    /// Score awarded per level number.
    pub points_per_level: u32,
    pub money_base: u32,
    pub money_per_level: u32,
    pub color: &'static str,
    pub traits: &'static [EnemyTrait],
}

#[allow(clippy::too_many_arguments)]
fn profile(
    base_speed: f64,
    base_health: f64,
    radius: f64,
    points_per_level: u32,
    money_base: u32,
    money_per_level: u32,
    color: &'static str,
    traits: &'static [EnemyTrait],
) -> EnemyProfile {
    EnemyProfile {
        base_speed,
        base_health,
        radius,
        points_per_level,
        money_base,
        money_per_level,
        color,
        traits,
    }
}

/// Get the profile for a given enemy kind.
pub fn get_profile(kind: EnemyKind) -> EnemyProfile {
    use EnemyTrait::*;

    match kind {
        EnemyKind::Basic => profile(1.2, 60.0, 12.0, 15, 18, 3, "#e74c3c", &[]),
        EnemyKind::Fast => profile(2.5, 40.0, 10.0, 20, 22, 3, "#3498db", &[]),
        EnemyKind::Armored => profile(0.8, 180.0, 14.0, 30, 35, 5, "#95a5a6", &[Armored]),
        EnemyKind::Crystal => profile(1.0, 120.0, 13.0, 35, 40, 6, "#9b59b6", &[Reflective]),
        EnemyKind::Desert => profile(1.3, 90.0, 12.0, 25, 28, 4, "#f39c12", &[Sandstorm]),
        EnemyKind::Burrower => profile(0.7, 200.0, 15.0, 40, 45, 6, "#8b4513", &[Underground]),
        EnemyKind::Mirage => profile(2.0, 70.0, 11.0, 45, 50, 7, "#f1c40f", &[Illusion]),
        EnemyKind::Ice => profile(1.1, 100.0, 12.0, 30, 32, 4, "#85c1e9", &[Freezing]),
        EnemyKind::Frozen => profile(0.6, 250.0, 16.0, 50, 55, 8, "#aed6f1", &[IceArmor]),
        EnemyKind::Avalanche => profile(0.5, 400.0, 20.0, 70, 80, 10, "#d5dbdb", &[Massive]),
        EnemyKind::Fire => profile(1.4, 85.0, 12.0, 35, 38, 5, "#e74c3c", &[Burning]),
        EnemyKind::Lava => profile(0.9, 180.0, 15.0, 55, 62, 8, "#cb4335", &[Molten]),
        EnemyKind::Phoenix => profile(1.8, 120.0, 14.0, 65, 75, 9, "#ff6b35", &[Rebirth, Flying]),
        EnemyKind::Inferno => profile(1.0, 300.0, 18.0, 80, 95, 12, "#922b21", &[FireAura]),
        EnemyKind::Storm => profile(1.5, 95.0, 13.0, 40, 42, 5, "#5d6d7e", &[Electric]),
        EnemyKind::Lightning => profile(3.0, 60.0, 10.0, 50, 55, 6, "#f7dc6f", &[Chaining]),
        EnemyKind::Thunder => profile(0.8, 220.0, 16.0, 60, 68, 8, "#48c9b0", &[Shockwave]),
        EnemyKind::Electro => {
            profile(1.2, 150.0, 14.0, 70, 82, 10, "#52be80", &[Electromagnetic])
        }
        EnemyKind::Shadow => profile(1.3, 110.0, 12.0, 45, 48, 6, "#2c3e50", &[Stealth]),
        EnemyKind::Void => profile(1.1, 160.0, 15.0, 65, 75, 9, "#1b2631", &[Absorbing]),
        EnemyKind::Phantom => profile(2.2, 80.0, 11.0, 55, 62, 7, "#34495e", &[Phasing]),
        EnemyKind::Wraith => profile(1.6, 200.0, 13.0, 75, 88, 11, "#17202a", &[Soul]),
        EnemyKind::Cosmic => profile(1.4, 250.0, 16.0, 90, 105, 13, "#7d3c98", &[Cosmic]),
        EnemyKind::Dimensional => {
            profile(1.8, 180.0, 14.0, 100, 120, 15, "#6c3483", &[Portal])
        }
        EnemyKind::Ultimate => profile(1.0, 500.0, 22.0, 150, 180, 20, "#4a148c", &[Ultimate]),
    }
}
