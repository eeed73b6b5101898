//! Wave director: spawn cadence, wave completion and level progression.
//!
//! Level and wave counters in `GameState` only ever advance here.

use hecs::World;
use log::{debug, info};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use rampart_core::components::Enemy;
use rampart_core::config::{GameConfig, LevelDefinition, Ruleset};
use rampart_core::events::GameEvent;
use rampart_core::state::GameState;

use crate::world_setup::{self, EntityIds};

/// Spawn bookkeeping for the wave in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaveDirector {
    /// Ticks until the next spawn; a spawn happens when it is <= 0.
    pub spawn_timer: i32,
    pub spawn_interval: u32,
    pub enemies_per_wave: u32,
    /// Enemies spawned so far this wave.
    pub spawned: u32,
}

impl WaveDirector {
    /// Fresh director for the first wave of `level`.
    pub fn for_level(level: &LevelDefinition) -> Self {
        Self {
            spawn_timer: 0,
            spawn_interval: level.spawn_interval,
            enemies_per_wave: level.enemies_per_wave,
            spawned: 0,
        }
    }

    pub fn wave_spawned_out(&self) -> bool {
        self.spawned >= self.enemies_per_wave
    }

    /// Shorter interval (floored) and one more enemy.
    pub fn next_wave(&mut self, ruleset: &Ruleset) {
        self.spawned = 0;
        self.spawn_interval = self
            .spawn_interval
            .saturating_sub(ruleset.spawn_interval_step)
            .max(ruleset.min_spawn_interval);
        self.enemies_per_wave += ruleset.enemies_per_wave_step;
    }
}

/// Spawn if due, then check for wave or level completion.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    director: &mut WaveDirector,
    state: &mut GameState,
    config: &GameConfig,
    ids: &mut EntityIds,
    events: &mut Vec<GameEvent>,
) {
    let Some(level) = config.level(state.level) else {
        return;
    };

    if director.spawn_timer <= 0 && !director.wave_spawned_out() {
        let kind = level.enemy_types[rng.gen_range(0..level.enemy_types.len())];
        let (_, enemy_id) = world_setup::spawn_enemy(
            world,
            ids,
            kind,
            state.wave,
            state.level,
            level.path[0],
            &config.ruleset,
        );
        debug!(
            "spawned {} enemy {enemy_id} (level {} wave {})",
            kind.tag(),
            state.level,
            state.wave
        );
        events.push(GameEvent::EnemySpawned { enemy_id, kind });
        director.spawn_timer = director.spawn_interval as i32;
        director.spawned += 1;
    } else {
        director.spawn_timer -= 1;
    }

    let enemies_alive = world.query::<&Enemy>().iter().count();
    if director.wave_spawned_out() && enemies_alive == 0 {
        if state.wave >= config.ruleset.max_waves_per_level {
            complete_level(world, director, state, config, events);
        } else {
            state.wave += 1;
            director.next_wave(&config.ruleset);
            info!("level {} wave {} started", state.level, state.wave);
            events.push(GameEvent::WaveStarted {
                level: state.level,
                wave: state.wave,
            });
        }
    }
}

/// Finish the current level: load the next one behind a transition, or
/// end the game in victory after the last.
pub fn complete_level(
    world: &mut World,
    director: &mut WaveDirector,
    state: &mut GameState,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) {
    let ruleset = &config.ruleset;
    let finished = state.level;
    events.push(GameEvent::LevelCompleted { level: finished });

    state.level += 1;

    let Some(level) = config.level(state.level) else {
        state.running = false;
        info!("victory after level {finished} with score {}", state.score);
        events.push(GameEvent::Victory { score: state.score });
        return;
    };

    state.level_transition = true;
    state.transition_timer = ruleset.level_transition_ticks;
    state.wave = 1;
    state.money += ruleset.level_bonus_money;
    state.health = (state.health + ruleset.level_bonus_health).min(ruleset.max_health);

    *director = WaveDirector::for_level(level);
    world_setup::clear_level(world);

    info!(
        "level {finished} complete, loading level {} ({})",
        state.level, level.name
    );
    events.push(GameEvent::WaveStarted {
        level: state.level,
        wave: state.wave,
    });
}
