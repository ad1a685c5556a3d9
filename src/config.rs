//! Command line configuration for the Reversi binary

use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

use reversi::{MatchConfig, SearchConfig};

#[derive(Parser, Debug, Clone)]
#[command(name = "reversi")]
#[command(about = "Reversi with an alpha-beta engine")]
#[command(
    long_about = "Play Reversi in a desktop window (default) or on the terminal.

On the terminal each side is played by the AI, a human typing moves such as
e5, or a baseline that always plays its first legal move."
)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play a match on the terminal
    Play(PlayArgs),
    /// Open the desktop window
    Gui,
}

/// Who plays a side
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    /// Alpha-beta search
    Ai,
    /// Moves typed on standard input
    Human,
    /// First legal move
    First,
}

#[derive(Args, Debug, Clone)]
pub struct PlayArgs {
    /// Actor playing dark
    #[arg(long, value_enum, default_value_t = ActorKind::Human)]
    pub dark: ActorKind,

    /// Actor playing light
    #[arg(long, value_enum, default_value_t = ActorKind::Ai)]
    pub light: ActorKind,

    /// Total time for dark in seconds (unlimited if omitted)
    #[arg(long)]
    pub dark_time: Option<f64>,

    /// Total time for light in seconds (unlimited if omitted)
    #[arg(long)]
    pub light_time: Option<f64>,

    /// Maximum iterative deepening depth for AI players
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Do not print the board after every move
    #[arg(long)]
    pub quiet: bool,
}

fn check_budget(name: &str, seconds: Option<f64>) -> Result<()> {
    match seconds {
        Some(s) if !s.is_finite() || s <= 0.0 => Err(anyhow!(
            "{} must be a positive number of seconds, got {}",
            name,
            s
        )),
        _ => Ok(()),
    }
}

impl Cli {
    pub fn validate(&self) -> Result<()> {
        if self.log_level.parse::<LevelFilter>().is_err() {
            return Err(anyhow!(
                "invalid log level '{}', expected one of trace, debug, info, warn, error",
                self.log_level
            ));
        }

        if let Some(Command::Play(args)) = &self.command {
            args.validate()?;
        }

        Ok(())
    }
}

impl PlayArgs {
    pub fn validate(&self) -> Result<()> {
        check_budget("dark_time", self.dark_time)?;
        check_budget("light_time", self.light_time)?;

        if self.max_depth == Some(0) {
            return Err(anyhow!("max_depth must be greater than 0"));
        }

        Ok(())
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            dark_budget: self.dark_time.map(Duration::from_secs_f64),
            light_budget: self.light_time.map(Duration::from_secs_f64),
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_depth: self.max_depth,
            ..SearchConfig::default()
        }
    }
}
