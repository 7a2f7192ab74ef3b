//! Full-board detection for tic-tac-toe.

use crate::Board;

/// Checks if every cell is occupied.
///
/// Says nothing about a winner: a full board with a completed line is
/// still full.
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Marker;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.apply_move(4, Marker::X);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_full() {
        let mut board = Board::new();
        for index in 0..9 {
            board.apply_move(index, Marker::X);
        }
        assert!(is_full(&board));
    }
}
