//! Console tic-tac-toe.
//!
//! Reads one `<x> <y>` move per line from standard input and prints
//! the board after every placement. The process exits successfully as
//! soon as the game concludes.

use anyhow::Result;
use clap::Parser;
use tictactoe::{Cli, GameSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries the game protocol.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tic-tac-toe");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = GameSession::new();
    let outcome = session.play(stdin.lock(), &mut stdout.lock())?;

    match outcome {
        Some(status) => info!(?status, moves = session.moves(), "game over"),
        None => info!("session ended without a result"),
    }

    Ok(())
}
