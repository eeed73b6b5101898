//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use log::{debug, info};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rampart_core::commands::PlayerCommand;
use rampart_core::config::{ConfigError, GameConfig};
use rampart_core::enums::GamePhase;
use rampart_core::events::GameEvent;
use rampart_core::state::{GameState, GameStateSnapshot};
use rampart_core::types::{Position, SimTime};

use crate::placement::{self, PlacementError};
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::systems::wave_director::WaveDirector;
use crate::world_setup::{self, EntityIds, ProjectileSpawn};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Levels, tower table and ruleset.
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: GameConfig,
    state: GameState,
    director: WaveDirector,
    paused: bool,
    selected_tower: String,
    rng: ChaCha8Rng,
    ids: EntityIds,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    projectile_sink: Vec<ProjectileSpawn>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config.game, ChaCha8Rng::seed_from_u64(config.seed))
    }

    /// Create an engine drawing enemy kinds from the supplied RNG.
    pub fn with_rng(game: GameConfig, rng: ChaCha8Rng) -> Result<Self, ConfigError> {
        game.validate()?;

        let ruleset = &game.ruleset;
        let state = GameState::new(ruleset.starting_health, ruleset.starting_money);
        let director = game
            .level(state.level)
            .map(WaveDirector::for_level)
            .ok_or(ConfigError::NoLevels)?;
        let selected_tower = game.default_tower.clone();

        info!(
            "simulation ready: {} levels, {} tower types",
            game.level_count(),
            game.towers.len()
        );

        Ok(Self {
            world: World::new(),
            time: SimTime::default(),
            config: game,
            state,
            director,
            paused: false,
            selected_tower,
            rng,
            ids: EntityIds::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            projectile_sink: Vec::new(),
            events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if !self.paused {
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        let ctx = SnapshotContext {
            time: self.time,
            phase: self.phase(),
            state: &self.state,
            config: &self.config,
            selected_tower: &self.selected_tower,
        };
        systems::snapshot::build_snapshot(&self.world, &ctx, events)
    }

    /// Apply a command immediately instead of at the next tick boundary.
    pub fn apply_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTower { x, y, tower_type } => {
                let tag = tower_type.unwrap_or_else(|| self.selected_tower.clone());
                // Refusals are logged in `place_tower`; a command has no caller to report to.
                let _ = self.place_tower(x, y, &tag);
            }
            PlayerCommand::SelectTowerType { tower_type } => {
                self.select_tower_type(&tower_type);
            }
            PlayerCommand::Pause => {
                if self.state.running && !self.state.level_transition {
                    self.paused = true;
                }
            }
            PlayerCommand::Resume => {
                self.paused = false;
            }
        }
    }

    /// Place a tower, spending its cost. Returns the new tower's id.
    pub fn place_tower(&mut self, x: f64, y: f64, tag: &str) -> Result<u32, PlacementError> {
        let position = Position::new(x, y);
        let path = current_path(&self.config, self.state.level);
        let spec =
            match placement::validate(&self.world, &self.state, &self.config, path, position, tag) {
                Ok(spec) => spec,
                Err(err) => {
                    debug!("placement of {tag} at ({x}, {y}) rejected: {err}");
                    return Err(err);
                }
            };

        self.state.money -= spec.cost;
        let tower_id =
            world_setup::spawn_tower(&mut self.world, &mut self.ids, tag, spec, position);
        info!("placed {} {tower_id} at ({x}, {y}) for {}", spec.name, spec.cost);
        self.events.push(GameEvent::TowerPlaced {
            tower_id,
            tower_type: tag.to_string(),
            position,
        });
        Ok(tower_id)
    }

    /// Validate a placement without changing anything.
    pub fn check_placement(&self, x: f64, y: f64, tag: &str) -> Result<(), PlacementError> {
        let path = current_path(&self.config, self.state.level);
        placement::validate(
            &self.world,
            &self.state,
            &self.config,
            path,
            Position::new(x, y),
            tag,
        )
        .map(|_| ())
    }

    /// Change the tower type used by `PlaceTower` commands without a type.
    /// Unknown tags leave the selection unchanged.
    pub fn select_tower_type(&mut self, tag: &str) -> bool {
        if self.config.tower(tag).is_some() {
            self.selected_tower = tag.to_string();
            true
        } else {
            false
        }
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.state.phase(self.config.level_count(), self.paused)
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn wave_director(&self) -> &WaveDirector {
        &self.director
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn selected_tower_type(&self) -> &str {
        &self.selected_tower
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Waypoints of the level being played.
    pub fn current_path(&self) -> &[Position] {
        current_path(&self.config, self.state.level)
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[cfg(test)]
    pub fn wave_director_mut(&mut self) -> &mut WaveDirector {
        &mut self.director
    }

    /// Spawn an enemy at an arbitrary point (for tests needing exact layouts).
    #[cfg(test)]
    pub fn spawn_test_enemy(
        &mut self,
        kind: rampart_core::enums::EnemyKind,
        position: Position,
    ) -> hecs::Entity {
        let (entity, _) = world_setup::spawn_enemy(
            &mut self.world,
            &mut self.ids,
            kind,
            self.state.wave,
            self.state.level,
            position,
            &self.config.ruleset,
        );
        entity
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.apply_command(command);
        }
    }

    /// Run all stages in order.
    fn run_systems(&mut self) {
        // 1. Level transition countdown
        if self.state.level_transition {
            self.time.advance();
            self.state.transition_timer = self.state.transition_timer.saturating_sub(1);
            if self.state.transition_timer == 0 {
                self.state.level_transition = false;
                info!("level {} begins", self.state.level);
            }
            return;
        }

        // 2. Nothing moves once the game has ended
        if !self.state.running {
            return;
        }
        self.time.advance();

        // 3. Wave director
        systems::wave_director::run(
            &mut self.world,
            &mut self.rng,
            &mut self.director,
            &mut self.state,
            &self.config,
            &mut self.ids,
            &mut self.events,
        );
        // 4. Enemies: status effects, movement, leaks
        systems::enemies::run(
            &mut self.world,
            current_path(&self.config, self.state.level),
            &mut self.state,
            &self.config.ruleset,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 5. Towers: retarget and fire
        systems::towers::run(&mut self.world, &mut self.projectile_sink, &mut self.events);
        for spawn in self.projectile_sink.drain(..) {
            world_setup::spawn_projectile(&mut self.world, &mut self.ids, spawn);
        }
        // 6. Projectiles: motion and collisions
        systems::projectiles::run(&mut self.world, &self.config.ruleset, &mut self.events);
        // 7. Reap dead enemies and spent projectiles
        systems::cleanup::run(
            &mut self.world,
            &mut self.state,
            &mut self.despawn_buffer,
            &mut self.events,
        );
    }
}

fn current_path(config: &GameConfig, level: u32) -> &[Position] {
    config
        .level(level)
        .map(|level| level.path.as_slice())
        .unwrap_or(&[])
}
