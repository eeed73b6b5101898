//! Game loop thread: owns the engine, ticks it and publishes snapshots.
//!
//! Commands arrive via an `mpsc` channel and are queued before each tick.
//! The latest snapshot is stored in shared state for polling. In realtime
//! mode ticks are paced at `TICK_RATE`; otherwise the loop runs flat out.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::info;

use rampart_core::constants::TICK_RATE;
use rampart_core::enums::GamePhase;
use rampart_core::events::GameEvent;
use rampart_core::state::GameStateSnapshot;
use rampart_sim::SimulationEngine;

use crate::autoplay::Autoplayer;
use crate::state::{AppState, GameLoopCommand};

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the loop runs.
#[derive(Debug, Clone)]
pub struct LoopOptions {
    /// Upper bound on ticks; the loop also stops at game over or victory.
    pub max_ticks: u64,
    /// Sleep between ticks to hold the nominal tick rate.
    pub realtime: bool,
    /// Time scale applied to realtime pacing.
    pub speed: f64,
    pub autoplay: Option<Autoplayer>,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            max_ticks: 36_000,
            realtime: false,
            speed: 1.0,
            autoplay: None,
        }
    }
}

/// What the loop hands back when it exits.
#[derive(Debug, Clone)]
pub struct LoopSummary {
    pub ticks: u64,
    pub towers_built: u32,
    pub final_snapshot: GameStateSnapshot,
}

/// Spawns the game loop in a new thread.
///
/// Returns the shared handles for command sources and the join handle
/// yielding the summary.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    options: LoopOptions,
) -> std::io::Result<(AppState, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let handle = std::thread::Builder::new()
        .name("rampart-game-loop".into())
        .spawn(move || run_game_loop(engine, options, cmd_rx, &shared))?;

    Ok((
        AppState {
            command_tx: cmd_tx,
            latest_snapshot,
        },
        handle,
    ))
}

/// The game loop. Runs until the game ends, the tick bound is reached, or a
/// Shutdown command arrives.
pub fn run_game_loop(
    mut engine: SimulationEngine,
    options: LoopOptions,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) -> LoopSummary {
    let tick_duration = if options.speed > 0.001 {
        TICK_DURATION.div_f64(options.speed)
    } else {
        TICK_DURATION
    };
    let mut next_tick_time = Instant::now();
    let mut ticks = 0;
    let mut towers_built = 0;
    let mut shutdown = false;

    let final_snapshot = loop {
        // 1. Drain pending commands. A disconnected channel only means no
        //    more external input.
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    shutdown = true;
                    break;
                }
                Err(_) => break,
            }
        }

        // 2. Advance one tick.
        let snapshot = engine.tick();
        ticks += 1;
        towers_built += snapshot
            .events
            .iter()
            .filter(|event| matches!(event, GameEvent::TowerPlaced { .. }))
            .count() as u32;

        // 3. Let the autoplayer react to what it sees.
        if let Some(autoplayer) = &options.autoplay {
            if let Some(cmd) = autoplayer.plan(&snapshot, engine.config()) {
                engine.queue_command(cmd);
            }
        }

        // 4. Publish for polling.
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }

        let finished = matches!(snapshot.phase, GamePhase::GameOver | GamePhase::Victory);
        if shutdown || finished || ticks >= options.max_ticks {
            info!("game loop stopped after {ticks} ticks ({:?})", snapshot.phase);
            break snapshot;
        }

        // 5. Sleep until the next tick.
        if options.realtime {
            next_tick_time += tick_duration;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > tick_duration * 2 {
                // Too far behind; reset to avoid a catch-up spiral.
                next_tick_time = now;
            }
        }
    };

    LoopSummary {
        ticks,
        towers_built,
        final_snapshot,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::commands::PlayerCommand;
    use rampart_sim::SimConfig;

    fn engine(seed: u64) -> SimulationEngine {
        SimulationEngine::new(SimConfig {
            seed,
            ..SimConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::Pause)).unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Resume)).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(commands.len(), 3);
        assert!(matches!(
            commands[0],
            GameLoopCommand::Player(PlayerCommand::Pause)
        ));
        assert!(matches!(
            commands[1],
            GameLoopCommand::Player(PlayerCommand::Resume)
        ));
        assert!(matches!(commands[2], GameLoopCommand::Shutdown));
    }

    #[test]
    fn test_stops_at_tick_bound() {
        let (_tx, rx) = mpsc::channel();
        let slot = Mutex::new(None);
        let options = LoopOptions {
            max_ticks: 120,
            ..LoopOptions::default()
        };

        let summary = run_game_loop(engine(42), options, rx, &slot);
        assert_eq!(summary.ticks, 120);
        assert_eq!(summary.final_snapshot.time.tick, 120);
        assert_eq!(slot.lock().unwrap().as_ref().unwrap().time.tick, 120);
    }

    #[test]
    fn test_shutdown_stops_after_one_tick() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        let slot = Mutex::new(None);

        let summary = run_game_loop(engine(42), LoopOptions::default(), rx, &slot);
        assert_eq!(summary.ticks, 1);
    }

    #[test]
    fn test_commands_reach_engine() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Player(PlayerCommand::PlaceTower {
            x: 120.0,
            y: 200.0,
            tower_type: None,
        }))
        .unwrap();
        let slot = Mutex::new(None);
        let options = LoopOptions {
            max_ticks: 2,
            ..LoopOptions::default()
        };

        let summary = run_game_loop(engine(42), options, rx, &slot);
        assert_eq!(summary.towers_built, 1);
        assert_eq!(summary.final_snapshot.towers.len(), 1);
    }

    #[test]
    fn test_autoplay_runs_are_deterministic() {
        let run = || {
            let (_tx, rx) = mpsc::channel();
            let slot = Mutex::new(None);
            let options = LoopOptions {
                max_ticks: 3_000,
                autoplay: Some(Autoplayer::new("cannon")),
                ..LoopOptions::default()
            };
            run_game_loop(engine(9), options, rx, &slot)
        };

        let a = run();
        let b = run();
        assert!(a.towers_built > 0);
        assert_eq!(a.ticks, b.ticks);
        assert_eq!(a.towers_built, b.towers_built);
        assert_eq!(
            serde_json::to_string(&a.final_snapshot).unwrap(),
            serde_json::to_string(&b.final_snapshot).unwrap()
        );
    }

    #[test]
    fn test_spawned_loop_publishes_snapshots() {
        let options = LoopOptions {
            max_ticks: 10,
            ..LoopOptions::default()
        };
        let (state, handle) = spawn_game_loop(engine(42), options).unwrap();
        let summary = handle.join().unwrap();

        assert_eq!(summary.ticks, 10);
        assert_eq!(state.snapshot().unwrap().time.tick, 10);
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.666ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
