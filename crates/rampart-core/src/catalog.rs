//! Built-in level and tower tables.
//!
//! These are the tables the game ships with; a JSON configuration can
//! replace them wholesale.

use std::collections::BTreeMap;

use crate::config::{LevelDefinition, TowerTypeSpec};
use crate::enums::{Ability, EnemyKind};
use crate::types::Position;

/// Tower type selected when a game starts.
pub const DEFAULT_TOWER: &str = "cannon";

fn path(points: &[(f64, f64)]) -> Vec<Position> {
    points.iter().map(|&(x, y)| Position::new(x, y)).collect()
}

fn level(
    id: u32,
    name: &str,
    background: &str,
    points: &[(f64, f64)],
    spawn_interval: u32,
    enemies_per_wave: u32,
    enemy_types: &[EnemyKind],
) -> LevelDefinition {
    LevelDefinition {
        id,
        name: name.to_string(),
        background: background.to_string(),
        path: path(points),
        spawn_interval,
        enemies_per_wave,
        enemy_types: enemy_types.to_vec(),
    }
}

/// The fifteen campaign levels.
#[rustfmt::skip]
pub fn levels() -> Vec<LevelDefinition> {
    use EnemyKind::*;

    vec![
        level(
            1,
            "Peaceful Meadows",
            "#58d68d",
            &[(0.0, 300.0), (200.0, 300.0), (200.0, 150.0), (600.0, 150.0), (600.0, 450.0), (800.0, 450.0)],
            150,
            6,
            &[Basic],
        ),
        level(
            2,
            "Rolling Hills",
            "#82e5aa",
            &[(0.0, 200.0), (150.0, 200.0), (150.0, 400.0), (300.0, 400.0), (300.0, 100.0), (500.0, 100.0), (500.0, 350.0), (800.0, 350.0)],
            130,
            8,
            &[Basic, Fast],
        ),
        level(
            3,
            "Dark Forest",
            "#239b56",
            &[(0.0, 300.0), (100.0, 300.0), (100.0, 100.0), (400.0, 100.0), (400.0, 500.0), (700.0, 500.0), (700.0, 200.0), (800.0, 200.0)],
            110,
            10,
            &[Basic, Fast, Armored],
        ),
        level(
            4,
            "Crystal Caves",
            "#a569bd",
            &[(0.0, 150.0), (200.0, 150.0), (200.0, 450.0), (400.0, 450.0), (400.0, 250.0), (600.0, 250.0), (600.0, 500.0), (800.0, 500.0)],
            100,
            12,
            &[Basic, Fast, Armored, Crystal],
        ),
        level(
            5,
            "Sandy Dunes",
            "#f7dc6f",
            &[(0.0, 400.0), (120.0, 400.0), (120.0, 150.0), (300.0, 150.0), (300.0, 450.0), (500.0, 450.0), (500.0, 100.0), (680.0, 100.0), (680.0, 350.0), (800.0, 350.0)],
            90,
            14,
            &[Basic, Fast, Armored, Desert, Burrower],
        ),
        level(
            6,
            "Scorching Desert",
            "#f4d03f",
            &[(0.0, 250.0), (150.0, 250.0), (150.0, 500.0), (350.0, 500.0), (350.0, 150.0), (550.0, 150.0), (550.0, 400.0), (800.0, 400.0)],
            85,
            16,
            &[Basic, Fast, Armored, Desert, Burrower, Mirage],
        ),
        level(
            7,
            "Frozen Lake",
            "#aed6f1",
            &[(0.0, 300.0), (200.0, 300.0), (200.0, 100.0), (600.0, 100.0), (600.0, 500.0), (800.0, 500.0)],
            80,
            18,
            &[Basic, Fast, Armored, Ice, Frozen],
        ),
        level(
            8,
            "Icy Mountains",
            "#85c1e9",
            &[(0.0, 400.0), (100.0, 400.0), (100.0, 200.0), (250.0, 200.0), (250.0, 450.0), (400.0, 450.0), (400.0, 100.0), (600.0, 100.0), (600.0, 350.0), (800.0, 350.0)],
            75,
            20,
            &[Basic, Fast, Armored, Ice, Frozen, Avalanche],
        ),
        level(
            9,
            "Lava Fields",
            "#ec7063",
            &[(0.0, 200.0), (150.0, 200.0), (150.0, 450.0), (300.0, 450.0), (300.0, 150.0), (500.0, 150.0), (500.0, 400.0), (650.0, 400.0), (650.0, 250.0), (800.0, 250.0)],
            70,
            22,
            &[Basic, Fast, Armored, Fire, Lava, Phoenix],
        ),
        level(
            10,
            "Volcanic Core",
            "#cb4335",
            &[(0.0, 300.0), (120.0, 300.0), (120.0, 100.0), (280.0, 100.0), (280.0, 500.0), (440.0, 500.0), (440.0, 200.0), (600.0, 200.0), (600.0, 450.0), (800.0, 450.0)],
            65,
            25,
            &[Basic, Fast, Armored, Fire, Lava, Phoenix, Inferno],
        ),
        level(
            11,
            "Storm Plains",
            "#5d6d7e",
            &[(0.0, 350.0), (100.0, 350.0), (100.0, 150.0), (300.0, 150.0), (300.0, 500.0), (500.0, 500.0), (500.0, 250.0), (700.0, 250.0), (700.0, 400.0), (800.0, 400.0)],
            60,
            28,
            &[Basic, Fast, Armored, Storm, Lightning, Thunder],
        ),
        level(
            12,
            "Lightning Valley",
            "#48c9b0",
            &[(0.0, 250.0), (150.0, 250.0), (150.0, 450.0), (350.0, 450.0), (350.0, 100.0), (550.0, 100.0), (550.0, 350.0), (800.0, 350.0)],
            55,
            30,
            &[Basic, Fast, Armored, Storm, Lightning, Thunder, Electro],
        ),
        level(
            13,
            "Void Entrance",
            "#2c3e50",
            &[(0.0, 300.0), (200.0, 300.0), (200.0, 150.0), (400.0, 150.0), (400.0, 450.0), (600.0, 450.0), (600.0, 250.0), (800.0, 250.0)],
            50,
            32,
            &[Basic, Fast, Armored, Shadow, Void, Phantom],
        ),
        level(
            14,
            "Shadow Realm",
            "#1b2631",
            &[(0.0, 200.0), (100.0, 200.0), (100.0, 400.0), (250.0, 400.0), (250.0, 100.0), (400.0, 100.0), (400.0, 350.0), (550.0, 350.0), (550.0, 180.0), (700.0, 180.0), (700.0, 480.0), (800.0, 480.0)],
            45,
            35,
            &[Basic, Fast, Armored, Shadow, Void, Phantom, Wraith],
        ),
        level(
            15,
            "Cosmic Nexus",
            "#7d3c98",
            &[(0.0, 300.0), (80.0, 300.0), (80.0, 150.0), (200.0, 150.0), (200.0, 450.0), (320.0, 450.0), (320.0, 200.0), (440.0, 200.0), (440.0, 500.0), (560.0, 500.0), (560.0, 250.0), (680.0, 250.0), (680.0, 100.0), (800.0, 100.0)],
            40,
            40,
            &[Basic, Fast, Armored, Shadow, Void, Phantom, Wraith, Cosmic, Dimensional, Ultimate],
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn tower(
    name: &str,
    cost: u32,
    damage: f64,
    range: f64,
    fire_rate: u32,
    special: &str,
    color: &str,
    border_color: &str,
    projectile_color: &str,
) -> TowerTypeSpec {
    TowerTypeSpec {
        name: name.to_string(),
        cost,
        damage,
        range,
        fire_rate,
        ability: Ability::from_tag(special),
        color: color.to_string(),
        border_color: border_color.to_string(),
        projectile_color: projectile_color.to_string(),
    }
}

/// The tower table, keyed by tag. Specials without dedicated behavior
/// resolve to `basic`.
#[rustfmt::skip]
pub fn tower_types() -> BTreeMap<String, TowerTypeSpec> {
    let entries = [
        // Basic
        ("cannon", tower("Cannon Tower", 50, 35.0, 100.0, 50, "basic", "#34495e", "#2c3e50", "#2c3e50")),
        ("archer", tower("Archer Tower", 40, 20.0, 140.0, 25, "fast", "#27ae60", "#229954", "#8b4513")),
        ("ballista", tower("Ballista Tower", 80, 60.0, 180.0, 80, "pierce", "#8d6e63", "#6d4c41", "#3e2723")),
        // Ice
        ("ice", tower("Ice Tower", 70, 25.0, 110.0, 45, "slow", "#81d4fa", "#4fc3f7", "#b3e5fc")),
        ("frost", tower("Frost Tower", 120, 40.0, 120.0, 60, "freeze", "#4fc3f7", "#29b6f6", "#81d4fa")),
        ("blizzard", tower("Blizzard Tower", 200, 30.0, 150.0, 30, "aoe_freeze", "#0277bd", "#01579b", "#b3e5fc")),
        ("glacier", tower("Glacier Tower", 350, 80.0, 130.0, 90, "permafrost", "#0d47a1", "#01579b", "#e3f2fd")),
        // Fire
        ("fire", tower("Fire Tower", 75, 35.0, 90.0, 35, "burn", "#ff5722", "#d84315", "#ff8a65")),
        ("inferno", tower("Inferno Tower", 140, 50.0, 100.0, 50, "burn_spread", "#d84315", "#bf360c", "#ff5722")),
        ("volcano", tower("Volcano Tower", 250, 35.0, 160.0, 40, "lava_pool", "#bf360c", "#870000", "#ff3d00")),
        ("phoenix", tower("Phoenix Tower", 400, 90.0, 140.0, 70, "rebirth", "#ff6d00", "#e65100", "#ff8f00")),
        // Lightning
        ("lightning", tower("Lightning Tower", 90, 45.0, 120.0, 60, "chain", "#ffd54f", "#ffc107", "#ffeb3b")),
        ("tesla", tower("Tesla Tower", 160, 55.0, 130.0, 75, "electric_field", "#03a9f4", "#0277bd", "#40c4ff")),
        ("storm", tower("Storm Tower", 280, 70.0, 150.0, 80, "tornado", "#3f51b5", "#303f9f", "#7986cb")),
        ("thunder", tower("Thunder Tower", 450, 120.0, 170.0, 100, "shockwave", "#1a237e", "#0d1461", "#3f51b5")),
        // Nature
        ("nature", tower("Nature Tower", 60, 30.0, 100.0, 40, "root", "#4caf50", "#388e3c", "#66bb6a")),
        ("thorn", tower("Thorn Tower", 100, 25.0, 80.0, 25, "poison_thorns", "#689f38", "#558b2f", "#8bc34a")),
        ("vine", tower("Vine Tower", 150, 20.0, 140.0, 35, "entangle", "#558b2f", "#33691e", "#7cb342")),
        ("earth", tower("Earth Tower", 300, 100.0, 110.0, 80, "earthquake", "#5d4037", "#3e2723", "#8d6e63")),
        // Shadow
        ("shadow", tower("Shadow Tower", 180, 70.0, 110.0, 45, "stealth", "#424242", "#212121", "#616161")),
        ("void", tower("Void Tower", 320, 85.0, 130.0, 65, "absorb", "#1a1a1a", "#000000", "#424242")),
        ("nightmare", tower("Nightmare Tower", 500, 110.0, 150.0, 70, "fear", "#4a148c", "#311b92", "#7b1fa2")),
        ("demon", tower("Demon Tower", 700, 150.0, 120.0, 60, "soul_steal", "#880e4f", "#560027", "#ad1457")),
        // Tech
        ("laser", tower("Laser Tower", 200, 60.0, 160.0, 20, "beam", "#e91e63", "#c2185b", "#ff1744")),
        ("plasma", tower("Plasma Tower", 350, 90.0, 140.0, 45, "melt", "#9c27b0", "#7b1fa2", "#e91e63")),
        ("ion", tower("Ion Tower", 500, 120.0, 150.0, 55, "disintegrate", "#673ab7", "#512da8", "#9c27b0")),
        ("quantum", tower("Quantum Tower", 650, 100.0, 200.0, 75, "quantum_split", "#3f51b5", "#303f9f", "#5c6bc0")),
        // Artillery
        ("mortar", tower("Mortar Tower", 130, 80.0, 180.0, 90, "explosive", "#795548", "#5d4037", "#8d6e63")),
        ("howitzer", tower("Howitzer Tower", 250, 120.0, 200.0, 120, "mega_explosive", "#607d8b", "#455a64", "#78909c")),
        ("railgun", tower("Railgun Tower", 400, 200.0, 250.0, 150, "railgun_pierce", "#37474f", "#263238", "#546e7a")),
        ("nuke", tower("Nuclear Tower", 800, 300.0, 160.0, 200, "nuclear", "#ff9800", "#f57c00", "#ffc107")),
        // Support
        ("radar", tower("Radar Tower", 120, 0.0, 200.0, 0, "boost_range", "#00acc1", "#00838f", "#26c6da")),
        ("amplifier", tower("Amplifier Tower", 150, 0.0, 120.0, 0, "boost_damage", "#26a69a", "#00695c", "#4db6ac")),
        ("battery", tower("Battery Tower", 180, 0.0, 130.0, 0, "boost_speed", "#66bb6a", "#388e3c", "#81c784")),
        ("shield", tower("Shield Tower", 200, 0.0, 100.0, 0, "shield", "#42a5f5", "#1976d2", "#64b5f6")),
        // Ultimate
        ("cosmic", tower("Cosmic Tower", 900, 200.0, 180.0, 60, "cosmic_ray", "#7c4dff", "#651fff", "#b388ff")),
        ("dimensional", tower("Dimensional Tower", 1200, 250.0, 190.0, 70, "dimension_rift", "#e040fb", "#d500f9", "#ea80fc")),
        ("ultimate", tower("Ultimate Tower", 1500, 400.0, 220.0, 80, "omnipotent", "#ff6ec7", "#ff1744", "#ff80ab")),
        ("godlike", tower("Godlike Tower", 2000, 600.0, 250.0, 50, "divine_wrath", "#ffd700", "#ffb300", "#fff176")),
    ];

    entries
        .into_iter()
        .map(|(tag, spec)| (tag.to_string(), spec))
        .collect()
}
