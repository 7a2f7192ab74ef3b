//! The 3x3 board with apply/undo backtracking primitives.

use crate::rules::{self, Line};
use crate::{Cell, Marker};
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored in row-major order (0-8). The board never records move
/// order: search mutates it in place with [`Board::apply_move`] and restores
/// it with [`Board::undo_move`] in reverse order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from a row-major snapshot.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Places `marker` at `index`.
    ///
    /// Returns `false` without touching the board when the index is out of
    /// range or the cell is already occupied.
    pub fn apply_move(&mut self, index: usize, marker: Marker) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Occupied(marker);
                true
            }
            _ => false,
        }
    }

    /// Clears the cell at `index`.
    ///
    /// Only undo moves you made, most recent first. Out-of-range indices are
    /// ignored.
    pub fn undo_move(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Returns every empty index in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Checks if no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Checks if any row, column or diagonal holds three identical markers.
    pub fn has_winner(&self) -> bool {
        self.winning_line().is_some()
    }

    /// Returns the first completed line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        rules::winning_line(self)
    }

    /// Gets the cell at `index` (0-8).
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }
}

impl std::fmt::Display for Board {
    /// Renders the grid with cell numbers (1-9) standing in for empty cells.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(marker) => write!(f, "{marker}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
