//! Game session: the blocking input/output loop.
//!
//! The session owns one [`Game`] and drives it over a line-oriented
//! text protocol: read a move request, validate it, apply it through
//! the engine, render the board, report the outcome. Input and output
//! are generic so tests can run a whole game over in-memory buffers.

use crate::action::Move;
use crate::game::{Game, GameStatus};
use crate::types::Position;
use derive_getters::Getters;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// A single game of tic-tac-toe driven by external move requests.
#[derive(Debug, Getters)]
pub struct GameSession {
    /// The game state.
    game: Game,
    /// Successful placements so far (0..=9).
    moves: usize,
}

impl GameSession {
    /// Creates a new session with an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            moves: 0,
        }
    }

    /// Runs the game to completion over the given input and output.
    ///
    /// Blocks on each input line and processes it fully before reading
    /// the next. Returns the terminal status, or `None` when the input
    /// source is exhausted before the game concludes (the session shuts
    /// down gracefully rather than re-prompting forever).
    ///
    /// # Errors
    ///
    /// Only I/O errors on the input source or output sink escape; every
    /// malformed or illegal move request is reported as a diagnostic
    /// and recovered locally.
    #[instrument(skip_all)]
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> std::io::Result<Option<GameStatus>> {
        writeln!(output, "Game started!")?;
        writeln!(output)?;

        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output, "Input your move.")?;
                warn!(moves = self.moves, "input closed before the game finished");
                return Ok(None);
            }
            writeln!(output)?;

            if let Some(status) = self.submit(&line, output)? {
                if status.is_terminal() {
                    return Ok(Some(status));
                }
            }
        }
    }

    /// Handles one line of input.
    ///
    /// Returns the engine status if a piece was placed, `None` if the
    /// request was rejected (a diagnostic has been written).
    #[instrument(skip(self, line, output), fields(moves = self.moves))]
    fn submit<W: Write>(
        &mut self,
        line: &str,
        output: &mut W,
    ) -> std::io::Result<Option<GameStatus>> {
        let Some((x, y)) = parse_coordinates(line) else {
            debug!(line = line.trim(), "malformed move request");
            writeln!(output, "Specify the x and y position of your play.")?;
            return Ok(None);
        };

        if !self.game.can_place(x, y) {
            debug!(x, y, "move rejected");
            writeln!(output, "Invalid move.")?;
            return Ok(None);
        }

        // can_place held, so the coordinates name an empty square.
        let Some(position) = Position::new(x, y) else {
            writeln!(output, "Invalid move.")?;
            return Ok(None);
        };
        let player = self.game.to_move();
        let status = match self.game.make_move(Move::new(player, position)) {
            Ok(status) => status,
            Err(err) => {
                warn!(%err, "engine rejected a guarded move");
                writeln!(output, "Invalid move.")?;
                return Ok(None);
            }
        };
        self.moves += 1;

        writeln!(output, "Placed {} at {}.", player, position)?;
        writeln!(output)?;
        writeln!(output, "{}", self.game.board())?;

        match status {
            GameStatus::Won(winner) => {
                info!(%winner, moves = self.moves, "game won");
                writeln!(output, "Player {} won!", winner)?;
            }
            GameStatus::Draw => {
                info!(moves = self.moves, "game drawn");
                writeln!(output, "It's a tie!")?;
            }
            GameStatus::InProgress => {}
        }

        Ok(Some(status))
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts the move coordinates from a line of input.
///
/// Tokens that do not parse as integers are discarded; the request is
/// well-formed iff exactly two integer tokens remain. Range checking
/// is the engine's job, not the parser's.
fn parse_coordinates(line: &str) -> Option<(i64, i64)> {
    let numbers: Vec<i64> = line
        .split_whitespace()
        .filter_map(|token| token.parse().ok())
        .collect();

    match numbers[..] {
        [x, y] => Some((x, y)),
        _ => None,
    }
}
