//! Console tic-tac-toe library.
//!
//! A two-player 3x3 board game driven by a line-oriented text
//! protocol.
//!
//! # Architecture
//!
//! - **Engine**: board state, move validation, win/draw detection
//! - **Session**: the blocking input/output loop around one game
//! - **Cli**: the (argument-free) command-line surface
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameSession, GameStatus, Player};
//! use std::io::Cursor;
//!
//! # fn example() -> std::io::Result<()> {
//! let mut session = GameSession::new();
//! let input = Cursor::new("0 0\n1 0\n0 1\n1 1\n0 2\n");
//! let mut output = Vec::new();
//!
//! let status = session.play(input, &mut output)?;
//! assert_eq!(status, Some(GameStatus::Won(Player::X)));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod cli;
mod game;
mod rules;
mod session;
mod types;

// Crate-level exports - move events
pub use action::{Move, MoveError};

// Crate-level exports - command line
pub use cli::Cli;

// Crate-level exports - engine
pub use game::{Game, GameStatus};

// Crate-level exports - rules
pub use rules::{check_winner, is_full};

// Crate-level exports - session loop
pub use session::GameSession;

// Crate-level exports - domain types
pub use types::{Board, Player, Position, Square};
