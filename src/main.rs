//! Master Mind - CLI
//!
//! Guess the secret four-colour sequence in eight attempts.

use anyhow::{Context, Result};
use clap::Parser;
use mastermind::{
    commands::{GameEnd, run_play},
    game::{GameState, SequenceGenerator},
    output::Presentation,
};
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Break the secret colour sequence: 4 pegs, 5 colours (R G B Y O), 8 attempts",
    version,
    author
)]
struct Cli {
    /// Print letters only, with ASCII markers instead of emoji
    #[arg(long)]
    plain: bool,

    /// Draw the secret from a fixed seed for a reproducible game
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let presentation = if cli.plain {
        Presentation::Plain
    } else {
        Presentation::Glyphs
    };

    // Seeded games are for testing; normal play seeds from the OS
    let mut generator = match cli.seed {
        Some(seed) => SequenceGenerator::seeded(seed),
        None => SequenceGenerator::from_entropy().context("cannot generate a secret sequence")?,
    };
    let game = GameState::start(&mut generator);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let end = run_play(game, stdin.lock(), &mut stdout, presentation)
        .context("game session failed")?;

    log::debug!("Session finished: {end:?}");
    if end == GameEnd::InputClosed {
        log::info!("Exiting before the game was decided");
    }

    Ok(())
}
