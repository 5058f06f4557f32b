//! Command-line interface.

use clap::Parser;

/// Two-player tic-tac-toe on a 3x3 grid.
///
/// The game takes no options: moves are read from standard input, one
/// `<x> <y>` pair per line, and the board is printed to standard
/// output after every placement.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {}
