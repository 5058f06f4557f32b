//! Tests for the validated board coordinate.

use tictactoe::{Board, Player, Position, Square};

#[test]
fn test_position_accepts_in_range_coordinates() {
    assert!(Position::new(0, 0).is_some());
    assert!(Position::new(2, 2).is_some());
    assert!(Position::new(1, 2).is_some());
}

#[test]
fn test_position_rejects_out_of_range_coordinates() {
    assert_eq!(Position::new(3, 0), None);
    assert_eq!(Position::new(0, 3), None);
    assert_eq!(Position::new(-1, 2), None);
    assert_eq!(Position::new(5, 5), None);
}

#[test]
fn test_position_axes() {
    let pos = Position::new(2, 1).unwrap();
    assert_eq!(pos.x(), 2);
    assert_eq!(pos.y(), 1);
}

#[test]
fn test_position_display() {
    let pos = Position::new(0, 2).unwrap();
    assert_eq!(pos.to_string(), "0, 2");
}

#[test]
fn test_valid_moves_empty_board() {
    let board = Board::new();
    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 9); // All positions valid on empty board
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut board = Board::new();
    let top_left = Position::new(0, 0).unwrap();
    let center = Position::new(1, 1).unwrap();
    board.set(top_left, Square::Occupied(Player::X));
    board.set(center, Square::Occupied(Player::O));

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7); // 2 occupied, 7 free
    assert!(!valid.contains(&top_left));
    assert!(!valid.contains(&center));
    assert!(valid.contains(&Position::new(2, 2).unwrap()));
}

#[test]
fn test_board_rendering() {
    let mut board = Board::new();
    board.set(Position::new(0, 0).unwrap(), Square::Occupied(Player::X));
    board.set(Position::new(1, 1).unwrap(), Square::Occupied(Player::O));

    let expected = "\
 ------------------
| X  |     |     |
 ------------------
|    |  O  |     |
 ------------------
|    |     |     |
 ------------------";
    assert_eq!(board.to_string(), expected);
}
