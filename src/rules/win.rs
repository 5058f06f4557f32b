//! Win detection logic.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines as row-major board indices.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // columns
    [0, 4, 8], [2, 4, 6],            // diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player holds three in a row,
/// `None` otherwise. Line order is irrelevant: at most one player can
/// have a completed line, so the first match is the answer.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    let squares = board.squares();

    for [a, b, c] in LINES {
        let sq = squares[a];
        if sq != Square::Empty && sq == squares[b] && sq == squares[c] {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}
