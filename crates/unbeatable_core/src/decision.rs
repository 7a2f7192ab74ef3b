//! The engine's answer for one request: the move plus the resulting state.

use crate::{Board, Engine, Marker, SearchError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of a game after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves remain and nobody has won.
    InProgress,
    /// The given marker completed a line.
    Won(Marker),
    /// The board is full without a winner.
    Draw,
}

/// A chosen move applied to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    index: usize,
    board: Board,
    has_winner: bool,
    is_full: bool,
    winner: Option<Marker>,
}

impl Decision {
    /// Builds a decision from a board on which `mover` just played `index`.
    ///
    /// The winner is the mover: the board itself cannot tell who completed
    /// a line, so the caller must say who moved last.
    #[instrument(skip(board))]
    pub fn after_move(board: Board, index: usize, mover: Marker) -> Self {
        let has_winner = board.has_winner();
        let is_full = board.is_full();
        Self {
            index,
            board,
            has_winner,
            is_full,
            winner: has_winner.then_some(mover),
        }
    }

    /// The chosen cell index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The board after the move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the decision, returning the board after the move.
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Whether the move completed a line.
    pub fn has_winner(&self) -> bool {
        self.has_winner
    }

    /// Whether the move filled the board.
    pub fn is_full(&self) -> bool {
        self.is_full
    }

    /// The winning marker, if the move won.
    pub fn winner(&self) -> Option<Marker> {
        self.winner
    }

    /// Game status after the move. A win on the last cell is a win.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(marker) => GameStatus::Won(marker),
            None if self.is_full => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

impl Engine {
    /// Chooses a move on `board`, plays it for the agent and reports the
    /// resulting state.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Engine::choose_move`].
    #[instrument(skip(self, board), fields(agent = %self.agent()))]
    pub fn decide(&self, mut board: Board) -> Result<Decision, SearchError> {
        let index = self.choose_move(&mut board)?;
        // choose_move only returns empty cells
        board.apply_move(index, self.agent());
        Ok(Decision::after_move(board, index, self.agent()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winning_decision_reports_mover() {
        let mut board = Board::new();
        for (index, marker) in [(0, Marker::O), (1, Marker::O), (3, Marker::X), (4, Marker::X)] {
            board.apply_move(index, marker);
        }
        let engine = Engine::new(Marker::O, Marker::X).unwrap();
        let decision = engine.decide(board).unwrap();
        assert_eq!(decision.index(), 2);
        assert!(decision.has_winner());
        assert_eq!(decision.winner(), Some(Marker::O));
        assert_eq!(decision.status(), GameStatus::Won(Marker::O));
    }

    #[test]
    fn test_last_cell_draw() {
        // X O X / X O O / O X _
        let mut board = Board::new();
        for (index, symbol) in "XOXXOOOX".chars().enumerate() {
            board.apply_move(index, Marker::new(symbol).unwrap());
        }
        let engine = Engine::new(Marker::X, Marker::O).unwrap();
        let decision = engine.decide(board).unwrap();
        assert_eq!(decision.index(), 8);
        assert!(decision.is_full());
        assert!(!decision.has_winner());
        assert_eq!(decision.winner(), None);
        assert_eq!(decision.status(), GameStatus::Draw);
    }

    #[test]
    fn test_opening_is_in_progress() {
        let engine = Engine::new(Marker::X, Marker::O).unwrap();
        let decision = engine.decide(Board::new()).unwrap();
        assert_eq!(decision.status(), GameStatus::InProgress);
        assert_eq!(decision.board().legal_moves().len(), 8);
    }
}
