//! Reversi front end
//!
//! Opens the desktop window by default; `reversi play` runs a match on the
//! terminal between any two of the AI, a human and the first-move baseline.

use anyhow::{anyhow, Result};
use clap::Parser;

use reversi::ui::ReversiApp;
use reversi::{
    play_match, AIEngine, Actor, FirstMoveActor, HumanActor, MatchEvent, MatchOutcome, Player,
    SearchConfig, Termination,
};

mod config;

use crate::config::{ActorKind, Cli, Command, PlayArgs};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.validate()?;
    init_tracing(&cli.log_level)?;

    match cli.command.unwrap_or(Command::Gui) {
        Command::Gui => run_gui(),
        Command::Play(args) => run_match(&args),
    }
}

fn run_gui() -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 700.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Reversi"),
        ..Default::default()
    };

    eframe::run_native(
        "Reversi",
        options,
        Box::new(|cc| Ok(Box::new(ReversiApp::new(cc)))),
    )
    .map_err(|e| anyhow!("GUI failed: {}", e))
}

fn make_actor(kind: ActorKind, search: &SearchConfig) -> Box<dyn Actor> {
    match kind {
        ActorKind::Ai => Box::new(AIEngine::with_config(search.clone())),
        ActorKind::Human => Box::new(HumanActor::stdio()),
        ActorKind::First => Box::new(FirstMoveActor),
    }
}

fn run_match(args: &PlayArgs) -> Result<()> {
    let search = args.search_config();
    let mut dark = make_actor(args.dark, &search);
    let mut light = make_actor(args.light, &search);
    let verbose = !args.quiet;

    let outcome = play_match(dark.as_mut(), light.as_mut(), &args.match_config(), |event| {
        if verbose {
            print_event(event);
        }
    });

    report(&outcome);
    Ok(())
}

fn print_event(event: &MatchEvent) {
    match event {
        MatchEvent::Started { board } => println!("{}", board),
        MatchEvent::Moved {
            player,
            mv,
            board,
            remaining,
            ..
        } => {
            println!("{} plays {}", player, mv);
            if let Some(left) = remaining {
                println!("remaining time: {} s", left.as_secs());
            }
            println!("{}", board);
        }
        MatchEvent::Passed { player } => println!("{} has no legal move and passes", player),
    }
}

fn report(outcome: &MatchOutcome) {
    let dark = outcome.board.count(Player::Dark.disk());
    let light = outcome.board.count(Player::Light.disk());

    match &outcome.termination {
        Termination::Completed => {}
        Termination::IllegalMove { player, mv } => {
            println!("{} played the illegal move {} and forfeits", player, mv)
        }
        Termination::Timeout { player } => println!("{} ran out of time", player),
        Termination::ActorFailed { player, error } => println!("{} forfeits: {}", player, error),
    }

    match outcome.winner {
        Some(winner) => println!("{} wins ({} - {})", winner, dark, light),
        None => println!("Draw ({} - {})", dark, light),
    }
}
