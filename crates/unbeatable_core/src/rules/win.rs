//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

/// One of the eight fixed lines that win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Line {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// Board indices covered by this line.
    pub const fn cells(self) -> [usize; 3] {
        match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::CenterColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::MainDiagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }
}

/// Returns the first line holding three identical markers.
///
/// Marker-agnostic: a line completed by either player counts, and the
/// board is not checked for legality (parity, several lines at once).
pub fn winning_line(board: &Board) -> Option<Line> {
    Line::iter().find(|line| {
        let [a, b, c] = line.cells();
        let first = board.cells()[a];
        first != Cell::Empty && first == board.cells()[b] && first == board.cells()[c]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Marker;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winning_line(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in Line::iter() {
            let mut board = Board::new();
            for index in line.cells() {
                assert!(board.apply_move(index, Marker::O));
            }
            assert_eq!(winning_line(&board), Some(line), "{line}");
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new();
        board.apply_move(0, Marker::X);
        board.apply_move(1, Marker::O);
        board.apply_move(2, Marker::X);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_bent_triple_does_not_win() {
        let mut board = Board::new();
        for index in [0, 1, 5] {
            board.apply_move(index, Marker::X);
        }
        assert_eq!(winning_line(&board), None);
    }
}
