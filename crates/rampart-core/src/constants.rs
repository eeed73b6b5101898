//! Simulation constants and tuning parameters.
//!
//! Ruleset-level values here are the defaults for `config::Ruleset`; the
//! ability and status-effect values are fixed game rules.

/// Nominal tick rate used by real-time runners (Hz).
pub const TICK_RATE: u32 = 60;

// --- Playfield ---

/// Playfield width in pixels.
pub const PLAYFIELD_WIDTH: f64 = 800.0;

/// Playfield height in pixels.
pub const PLAYFIELD_HEIGHT: f64 = 600.0;

// --- Player economy ---

/// Health at the start of a game, and the cap for level bonuses.
pub const MAX_HEALTH: i32 = 100;

/// Money at the start of a game.
pub const STARTING_MONEY: u32 = 100;

/// Health lost per enemy reaching the end of the path.
pub const LEAK_PENALTY: i32 = 10;

/// Money granted on level completion.
pub const LEVEL_BONUS_MONEY: u32 = 100;

/// Health restored on level completion (capped at MAX_HEALTH).
pub const LEVEL_BONUS_HEALTH: i32 = 50;

// --- Difficulty curve ---

/// Per-level increment of the enemy stat multiplier.
pub const LEVEL_MULTIPLIER_STEP: f64 = 0.2;

/// Per-wave increment of the enemy health multiplier.
pub const WAVE_MULTIPLIER_STEP: f64 = 0.15;

/// Waves per level before the level completes.
pub const MAX_WAVES_PER_LEVEL: u32 = 5;

/// Spawn interval reduction per wave (ticks).
pub const SPAWN_INTERVAL_STEP: u32 = 5;

/// Spawn interval floor (ticks).
pub const MIN_SPAWN_INTERVAL: u32 = 60;

/// Extra enemies per wave.
pub const ENEMIES_PER_WAVE_STEP: u32 = 1;

/// Duration of the between-level pause (ticks).
pub const LEVEL_TRANSITION_TICKS: u32 = 180;

// --- Placement ---

/// Minimum distance between a tower and the path centerline.
pub const PATH_CLEARANCE: f64 = 40.0;

/// Minimum distance between two towers.
pub const TOWER_SPACING: f64 = 60.0;

/// Tower footprint (pixels, square side).
pub const TOWER_SIZE: f64 = 22.0;

// --- Status effects (ticks) ---

pub const SLOW_DURATION: u32 = 180;
pub const FREEZE_DURATION: u32 = 120;
pub const BURN_DURATION: u32 = 300;
pub const SPREAD_BURN_DURATION: u32 = 180;
pub const POISON_DURATION: u32 = 240;
pub const AOE_FREEZE_DURATION: u32 = 90;

/// Speed factor while slowed.
pub const SLOW_SPEED_FACTOR: f64 = 0.5;

/// Burn damage per tick as a fraction of tower damage.
pub const BURN_DAMAGE_FRACTION: f64 = 1.0 / 4.0;

/// Spread-burn damage per tick as a fraction of tower damage.
pub const SPREAD_BURN_DAMAGE_FRACTION: f64 = 1.0 / 6.0;

/// Poison damage per tick as a fraction of tower damage.
pub const POISON_DAMAGE_FRACTION: f64 = 1.0 / 3.0;

/// Radius around the target that catches spread burn.
pub const BURN_SPREAD_RADIUS: f64 = 40.0;

/// Radius around the target that an area freeze covers.
pub const AOE_FREEZE_RADIUS: f64 = 60.0;

// --- Chain lightning ---

/// First hop damage as a fraction of tower damage.
pub const CHAIN_INITIAL_FACTOR: f64 = 0.7;

/// Damage retained from one hop to the next.
pub const CHAIN_FALLOFF: f64 = 0.8;

/// Maximum number of hops.
pub const CHAIN_MAX_HOPS: u32 = 3;

/// Maximum hop distance.
pub const CHAIN_RADIUS: f64 = 80.0;

// --- Beam ---

/// Fraction of tower damage a beam deals per fire interval.
pub const BEAM_DAMAGE_FRACTION: f64 = 1.0 / 3.0;

// --- Explosions ---

pub const EXPLOSIVE_RADIUS: f64 = 30.0;
pub const MEGA_EXPLOSIVE_RADIUS: f64 = 50.0;
pub const NUCLEAR_SPLASH_RADIUS: f64 = 80.0;

/// Radius of the nuclear blast applied when the tower fires.
pub const NUCLEAR_BLAST_RADIUS: f64 = 100.0;

/// Splash damage scale applied on top of linear falloff.
pub const SPLASH_DAMAGE_FACTOR: f64 = 0.7;

// --- Boosts ---

pub const RANGE_BOOST: f64 = 1.5;
pub const DAMAGE_BOOST: f64 = 1.8;
pub const FIRE_RATE_BOOST: f64 = 0.7;
pub const SHIELD_DAMAGE_BOOST: f64 = 1.25;

// --- Projectiles ---

pub const PROJECTILE_SPEED: f64 = 8.0;
pub const FAST_PROJECTILE_SPEED: f64 = 12.0;
pub const BEAM_PROJECTILE_SPEED: f64 = 15.0;
pub const CHAIN_PROJECTILE_SPEED: f64 = 10.0;
pub const RAILGUN_PROJECTILE_SPEED: f64 = 20.0;

pub const PROJECTILE_RADIUS: f64 = 4.0;
pub const BEAM_PROJECTILE_RADIUS: f64 = 2.0;

pub const PIERCE_BUDGET: u32 = 3;
pub const RAILGUN_PIERCE_BUDGET: u32 = 10;

/// Projectile color when the tower type does not supply one.
pub const DEFAULT_PROJECTILE_COLOR: &str = "#f39c12";
