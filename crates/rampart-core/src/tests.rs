//! Tests for core vocabulary, configuration loading and state helpers.

use crate::catalog;
use crate::commands::PlayerCommand;
use crate::components::{Health, Projectile};
use crate::config::{ConfigError, GameConfig};
use crate::constants::*;
use crate::enums::*;
use crate::state::GameState;
use crate::types::{Position, SimTime, Velocity};

// ---- Tags ----

#[test]
fn test_enemy_kind_tags_parse_back() {
    for kind in EnemyKind::ALL {
        assert_eq!(EnemyKind::from_tag(kind.tag()), kind);
    }
}

#[test]
fn test_unknown_tags_fall_back_to_basic() {
    assert_eq!(EnemyKind::from_tag("dragon"), EnemyKind::Basic);
    assert_eq!(Ability::from_tag("divine_wrath"), Ability::Basic);
    assert_eq!(Ability::from_tag(""), Ability::Basic);

    let kind: EnemyKind = serde_json::from_str("\"not_a_kind\"").unwrap();
    assert_eq!(kind, EnemyKind::Basic);
}

#[test]
fn test_ability_serializes_as_tag() {
    let json = serde_json::to_string(&Ability::RailgunPierce).unwrap();
    assert_eq!(json, "\"railgun_pierce\"");
    let back: Ability = serde_json::from_str("\"aoe_freeze\"").unwrap();
    assert_eq!(back, Ability::AoeFreeze);
}

#[test]
fn test_support_abilities() {
    let support: Vec<_> = Ability::ALL.iter().filter(|a| a.is_support()).collect();
    assert_eq!(support.len(), 4);
    assert!(!Ability::Beam.is_support());
}

// ---- Commands ----

#[test]
fn test_place_tower_command_without_type() {
    let json = r#"{"type":"PlaceTower","x":10.0,"y":20.0}"#;
    let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
    assert_eq!(
        cmd,
        PlayerCommand::PlaceTower {
            x: 10.0,
            y: 20.0,
            tower_type: None
        }
    );
}

// ---- Geometry ----

#[test]
fn test_distance_to_segment() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(100.0, 0.0);

    // Perpendicular foot inside the segment.
    assert!((Position::new(50.0, 30.0).distance_to_segment(&a, &b) - 30.0).abs() < 1e-10);
    // Beyond the end: distance to the endpoint.
    assert!((Position::new(103.0, 4.0).distance_to_segment(&a, &b) - 5.0).abs() < 1e-10);
    // Degenerate segment.
    assert!((Position::new(3.0, 4.0).distance_to_segment(&a, &a) - 5.0).abs() < 1e-10);
}

#[test]
fn test_velocity_toward() {
    let v = Velocity::toward(&Position::new(0.0, 0.0), &Position::new(30.0, 40.0), 10.0);
    assert!((v.x - 6.0).abs() < 1e-10);
    assert!((v.y - 8.0).abs() < 1e-10);

    let same = Position::new(5.0, 5.0);
    let v = Velocity::toward(&same, &same, 4.0);
    assert!((v.speed() - 4.0).abs() < 1e-10);
}

#[test]
fn test_within_bounds_is_inclusive() {
    assert!(Position::new(0.0, 0.0).within_bounds(800.0, 600.0));
    assert!(Position::new(800.0, 600.0).within_bounds(800.0, 600.0));
    assert!(!Position::new(800.1, 10.0).within_bounds(800.0, 600.0));
    assert!(!Position::new(10.0, -0.1).within_bounds(800.0, 600.0));
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..30 {
        time.advance();
    }
    assert_eq!(time.tick, 30);
}

// ---- Components ----

#[test]
fn test_take_damage_is_exact() {
    let mut health = Health::new(60.0);
    health.take_damage(17.5);
    assert_eq!(health.current, 60.0 - 17.5);
    health.take_damage(100.0);
    assert_eq!(health.current, 60.0 - 17.5 - 100.0);
    assert!(!health.is_alive());
    assert_eq!(health.fraction(), 0.0);
}

#[test]
fn test_projectile_hit_budget() {
    let mut single = Projectile {
        id: 0,
        ability: Ability::Basic,
        damage: 10.0,
        target_point: Position::default(),
        radius: PROJECTILE_RADIUS,
        pierce_budget: 0,
        hits: 0,
        struck: Vec::new(),
        remove: false,
        color: DEFAULT_PROJECTILE_COLOR.to_string(),
    };
    single.register_hit(7);
    assert!(single.remove);

    let mut pierce = Projectile {
        pierce_budget: PIERCE_BUDGET,
        remove: false,
        hits: 0,
        struck: Vec::new(),
        ..single
    };
    pierce.register_hit(1);
    pierce.register_hit(2);
    assert!(!pierce.remove);
    pierce.register_hit(3);
    assert!(pierce.remove);
    assert_eq!(pierce.struck, vec![1, 2, 3]);
}

// ---- State ----

#[test]
fn test_phase_derivation() {
    let mut state = GameState::default();
    assert_eq!(state.phase(15, false), GamePhase::Active);
    assert_eq!(state.phase(15, true), GamePhase::Paused);

    state.level_transition = true;
    assert_eq!(state.phase(15, true), GamePhase::LevelTransition);

    state.level_transition = false;
    state.running = false;
    assert_eq!(state.phase(15, false), GamePhase::GameOver);

    state.level = 16;
    assert_eq!(state.phase(15, false), GamePhase::Victory);
}

// ---- Configuration ----

#[test]
fn test_builtin_catalog_is_valid() {
    let config = GameConfig::default();
    config.validate().unwrap();
    assert_eq!(config.level_count(), 15);
    assert_eq!(config.towers.len(), 39);
    assert_eq!(config.default_tower, catalog::DEFAULT_TOWER);

    let first = config.level(1).unwrap();
    assert_eq!(first.enemies_per_wave, 6);
    assert_eq!(first.spawn_interval, 150);
    assert_eq!(first.enemy_types, vec![EnemyKind::Basic]);
    assert!(config.level(0).is_none());
    assert!(config.level(16).is_none());
}

#[test]
fn test_catalog_maps_specials() {
    let config = GameConfig::default();
    assert_eq!(config.tower("laser").unwrap().ability, Ability::Beam);
    assert_eq!(config.tower("nuke").unwrap().ability, Ability::Nuclear);
    assert_eq!(config.tower("battery").unwrap().ability, Ability::BoostSpeed);
    // Specials without dedicated behavior behave as basic.
    assert_eq!(config.tower("godlike").unwrap().ability, Ability::Basic);
    assert_eq!(config.tower("tesla").unwrap().ability, Ability::Basic);
}

#[test]
fn test_config_json_round_trip_keeps_catalog() {
    let config = GameConfig::default();
    let json = config.to_json().unwrap();
    let back = GameConfig::from_json(&json).unwrap();
    assert_eq!(config, back);
}

#[test]
fn test_config_json_ruleset_defaults() {
    let json = r##"{
        "levels": [{
            "id": 1, "name": "Test", "background": "#000000",
            "path": [{"x": 0.0, "y": 300.0}, {"x": 800.0, "y": 300.0}],
            "spawn_interval": 100, "enemies_per_wave": 3,
            "enemy_types": ["basic", "mystery"]
        }],
        "towers": {
            "cannon": {
                "name": "Cannon", "cost": 50, "damage": 35.0, "range": 100.0,
                "fire_rate": 50, "special": "basic",
                "color": "#34495e", "border_color": "#2c3e50"
            }
        },
        "default_tower": "cannon",
        "ruleset": { "leak_penalty": 25 }
    }"##;
    let config = GameConfig::from_json(json).unwrap();
    assert_eq!(config.ruleset.leak_penalty, 25);
    assert_eq!(config.ruleset.max_waves_per_level, MAX_WAVES_PER_LEVEL);
    assert_eq!(
        config.levels[0].enemy_types,
        vec![EnemyKind::Basic, EnemyKind::Basic]
    );
    assert_eq!(
        config.tower("cannon").unwrap().projectile_color,
        DEFAULT_PROJECTILE_COLOR
    );
}

#[test]
fn test_config_validation_errors() {
    let mut config = GameConfig::default();
    config.levels[2].path.truncate(1);
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathTooShort { level: 3, found: 1 })
    ));

    let mut config = GameConfig::default();
    config.levels[0].enemy_types.clear();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::NoEnemyTypes { level: 1 })
    ));

    let mut config = GameConfig::default();
    config.levels[4].spawn_interval = 0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::EmptyWave { level: 5 })
    ));

    let mut config = GameConfig::default();
    config.default_tower = "trebuchet".to_string();
    assert!(matches!(
        config.validate(),
        Err(ConfigError::UnknownDefaultTower(_))
    ));

    let mut config = GameConfig::default();
    config.levels.clear();
    assert!(matches!(config.validate(), Err(ConfigError::NoLevels)));

    assert!(matches!(
        GameConfig::from_json("{ not json"),
        Err(ConfigError::Json(_))
    ));
}
