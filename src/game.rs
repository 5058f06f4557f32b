//! Game engine: move validation, placement, and outcome tracking.

use crate::action::{Move, MoveError};
use crate::rules;
use crate::types::{Board, Player, Position, Square};
use tracing::{debug, instrument};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the game has concluded (`Won` or `Draw`).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// The board engine.
///
/// Owns the board, the player to move, the status, and the in-memory
/// move history. The session drives it one move at a time; a test
/// harness can drive it directly.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game. X moves first.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Checks whether a mark can be placed at untrusted coordinates.
    ///
    /// True iff both axes are in 0..=2 and the square there is empty.
    /// Out-of-range coordinates are an ordinary `false`, not an error:
    /// this is the bounds/occupancy gate the caller consults before
    /// building a [`Move`].
    #[instrument(skip(self))]
    pub fn can_place(&self, x: i64, y: i64) -> bool {
        match Position::new(x, y) {
            Some(pos) => self.board.is_empty(pos),
            None => false,
        }
    }

    /// Applies a move and returns the resulting status.
    ///
    /// The square is set, the move is recorded, and the status is
    /// re-evaluated: win first, then full board, otherwise the turn
    /// passes to the opponent. The turn does not pass on a concluding
    /// move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the game has concluded,
    /// [`MoveError::WrongPlayer`] when the move's player is not the
    /// player to move, and [`MoveError::SquareOccupied`] when the
    /// square is taken.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, action: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if action.player != self.to_move {
            return Err(MoveError::WrongPlayer(action.player));
        }
        if !self.board.is_empty(action.position) {
            return Err(MoveError::SquareOccupied(action.position));
        }

        self.board.set(action.position, Square::Occupied(action.player));
        self.history.push(action);

        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.to_move = self.to_move.opponent();
        }

        debug!(status = ?self.status, "move applied");
        Ok(self.status)
    }

    /// Replays a move sequence from the initial state.
    ///
    /// Returns the reconstructed game. A move list that continues past
    /// a concluded game surfaces [`MoveError::GameOver`].
    #[instrument]
    pub fn replay(moves: &[Move]) -> Result<Game, MoveError> {
        let mut game = Game::new();
        for action in moves {
            game.make_move(*action)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
