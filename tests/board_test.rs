//! Tests for the board's move primitives and terminal checks.

use unbeatable::{Board, Cell, Marker};
use unbeatable_core::Line;
use unbeatable_core::rules::winning_line;

fn board_with(marker: Marker, indices: &[usize]) -> Board {
    let mut board = Board::new();
    for &index in indices {
        assert!(board.apply_move(index, marker));
    }
    board
}

#[test]
fn test_empty_board_has_no_winner() {
    let board = Board::new();
    assert!(!board.has_winner());
    assert!(!board.is_full());
    assert_eq!(board.legal_moves(), (0..9).collect::<Vec<_>>());
}

#[test]
fn test_all_eight_lines_win() {
    let lines: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
    for line in lines {
        let board = board_with(Marker::X, &line);
        assert!(board.has_winner(), "line {line:?} should win");
    }
}

#[test]
fn test_non_line_triple_does_not_win() {
    let board = board_with(Marker::O, &[0, 1, 5]);
    assert!(!board.has_winner());
}

#[test]
fn test_winner_is_marker_agnostic() {
    let x_wins = board_with(Marker::X, &[2, 4, 6]);
    let o_wins = board_with(Marker::O, &[2, 4, 6]);
    assert_eq!(winning_line(&x_wins), Some(Line::AntiDiagonal));
    assert_eq!(winning_line(&o_wins), Some(Line::AntiDiagonal));
}

#[test]
fn test_full_only_when_every_cell_set() {
    let mut board = Board::new();
    for index in 0..8 {
        board.apply_move(index, if index % 2 == 0 { Marker::X } else { Marker::O });
        assert!(!board.is_full());
    }
    board.apply_move(8, Marker::X);
    assert!(board.is_full());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn test_full_board_with_winner_is_still_full() {
    let board = board_with(Marker::X, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert!(board.has_winner());
    assert!(board.is_full());
}

#[test]
fn test_apply_then_undo_touches_only_that_cell() {
    let mut board = Board::new();
    board.apply_move(0, Marker::X);
    board.apply_move(4, Marker::O);
    let before = board.clone();

    for index in board.legal_moves() {
        assert!(board.apply_move(index, Marker::X));
        assert_eq!(board.cell(index), Some(Cell::Occupied(Marker::X)));
        for other in (0..9).filter(|&i| i != index) {
            assert_eq!(board.cell(other), before.cell(other));
        }
        board.undo_move(index);
        assert_eq!(board, before);
    }
}

#[test]
fn test_invalid_moves_do_not_mutate() {
    let mut board = board_with(Marker::X, &[4]);
    let before = board.clone();
    assert!(!board.apply_move(4, Marker::O));
    assert!(!board.apply_move(9, Marker::O));
    assert!(!board.apply_move(usize::MAX, Marker::O));
    assert_eq!(board, before);
}

#[test]
fn test_cell_out_of_range() {
    assert_eq!(Board::new().cell(9), None);
    assert_eq!(Board::new().cell(0), Some(Cell::Empty));
}
