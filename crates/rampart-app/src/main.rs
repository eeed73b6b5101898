use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};
use log::warn;

use rampart_app::autoplay::Autoplayer;
use rampart_app::cli;
use rampart_app::game_loop::{self, LoopOptions};
use rampart_app::state::{AppState, GameLoopCommand};
use rampart_core::commands::PlayerCommand;
use rampart_core::config::GameConfig;
use rampart_sim::{SimConfig, SimulationEngine};

fn main() -> Result<()> {
    // Info by default; RUST_LOG overrides.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args = cli::parse_args();
    let game = load_config(args.config.as_deref())?;
    if args.dump_config {
        println!("{}", game.to_json()?);
        return Ok(());
    }

    let autoplay = if args.autoplay {
        let tag = args.tower.clone().unwrap_or_else(|| game.default_tower.clone());
        if game.tower(&tag).is_none() {
            anyhow::bail!("unknown tower type `{tag}`");
        }
        Some(Autoplayer::new(tag))
    } else {
        None
    };

    let engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        game,
    })
    .context("starting simulation")?;
    let options = LoopOptions {
        max_ticks: args.ticks,
        realtime: args.realtime,
        speed: args.speed,
        autoplay,
    };

    let (state, handle) =
        game_loop::spawn_game_loop(engine, options).context("spawning game loop thread")?;
    if args.realtime {
        spawn_stdin_reader(&state)?;
    }
    let summary = handle
        .join()
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;

    let snapshot = &summary.final_snapshot;
    if args.json {
        println!("{}", serde_json::to_string_pretty(snapshot)?);
    } else {
        let hud = &snapshot.hud;
        println!(
            "{:?} after {} ticks: level {}/{} wave {}, score {}, health {}, money {}, towers {}",
            snapshot.phase,
            summary.ticks,
            hud.level,
            hud.level_count,
            hud.wave,
            hud.score,
            hud.health,
            hud.money,
            summary.towers_built,
        );
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    GameConfig::from_json(&json).with_context(|| format!("loading config {}", path.display()))
}

/// Forward one JSON `PlayerCommand` per stdin line to the game loop;
/// `quit` stops it.
fn spawn_stdin_reader(state: &AppState) -> Result<()> {
    let tx = state.command_tx.clone();
    std::thread::Builder::new()
        .name("rampart-stdin".into())
        .spawn(move || {
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let cmd = if line == "quit" {
                    GameLoopCommand::Shutdown
                } else {
                    match serde_json::from_str::<PlayerCommand>(line) {
                        Ok(cmd) => GameLoopCommand::Player(cmd),
                        Err(err) => {
                            warn!("ignoring command {line:?}: {err}");
                            continue;
                        }
                    }
                };
                if tx.send(cmd).is_err() {
                    break;
                }
            }
        })
        .context("spawning stdin reader")?;
    Ok(())
}
