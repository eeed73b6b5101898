//! Command-line interface for the headless runner.

use std::path::PathBuf;

use clap::Parser;

/// Headless tower-defense simulation runner
#[derive(Parser, Debug)]
#[command(name = "rampart")]
#[command(about = "Headless tower-defense simulation runner")]
#[command(version)]
pub struct Args {
    /// RNG seed; the same seed and commands replay the same game
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Stop after this many ticks even if the game is still running
    #[arg(long, default_value = "36000")]
    pub ticks: u64,

    /// JSON file replacing the built-in levels, towers and ruleset
    #[arg(long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Print the active configuration as JSON and exit
    #[arg(long)]
    pub dump_config: bool,

    /// Pace ticks at the nominal tick rate and read JSON commands from stdin
    #[arg(long)]
    pub realtime: bool,

    /// Time scale for realtime pacing
    #[arg(long, default_value = "1.0")]
    pub speed: f64,

    /// Let the autoplayer place towers
    #[arg(long)]
    pub autoplay: bool,

    /// Tower type the autoplayer builds (defaults to the configured default)
    #[arg(long, value_name = "TAG")]
    pub tower: Option<String>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn parse_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["rampart"]);
        assert_eq!(args.seed, 42);
        assert_eq!(args.ticks, 36000);
        assert!(args.config.is_none());
        assert!(!args.realtime && !args.autoplay && !args.json);
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "rampart",
            "--seed",
            "7",
            "--autoplay",
            "--tower",
            "laser",
            "--config",
            "levels.json",
        ]);
        assert_eq!(args.seed, 7);
        assert!(args.autoplay);
        assert_eq!(args.tower.as_deref(), Some("laser"));
        assert_eq!(args.config, Some(PathBuf::from("levels.json")));
    }
}
