//! Engine-versus-engine games.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use unbeatable_core::{Board, Engine, GameStatus, Marker, SearchError};

/// One move of a recorded game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    /// Who moved.
    pub marker: Marker,
    /// Where.
    pub index: usize,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Outcome {
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Marker),
    /// The board filled up.
    #[display("draw")]
    Draw,
}

/// A complete game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// Moves in the order they were played.
    moves: Vec<PlayedMove>,
    /// Final position.
    board: Board,
    /// Result of the game.
    outcome: Outcome,
}

/// Plays a full game from the empty board, `first` moving first, with the
/// engine choosing for both sides.
#[instrument]
pub fn self_play(first: Marker, second: Marker) -> Result<GameRecord, SearchError> {
    let engine = Engine::new(first, second)?;
    play_out(Board::new(), engine)
}

/// Plays `board` to the end, `engine`'s agent moving next and the sides
/// alternating after each move.
///
/// # Errors
///
/// [`SearchError::GameOver`] or [`SearchError::NoLegalMoves`] if `board`
/// is already finished.
#[instrument(skip(board), fields(start = ?board.legal_moves()))]
pub fn play_out(mut board: Board, mut engine: Engine) -> Result<GameRecord, SearchError> {
    let mut moves = Vec::new();
    loop {
        let decision = engine.decide(board)?;
        let status = decision.status();
        moves.push(PlayedMove {
            marker: engine.agent(),
            index: decision.index(),
        });
        debug!(marker = %engine.agent(), index = decision.index(), ?status, "Played");
        board = decision.into_board();

        let outcome = match status {
            GameStatus::InProgress => {
                engine = engine.swapped();
                continue;
            }
            GameStatus::Won(marker) => Outcome::Won(marker),
            GameStatus::Draw => Outcome::Draw,
        };
        info!(%outcome, plies = moves.len(), "Game finished");
        return Ok(GameRecord {
            moves,
            board,
            outcome,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_play_fills_board() {
        let record = self_play(Marker::X, Marker::O).unwrap();
        assert_eq!(*record.outcome(), Outcome::Draw);
        assert_eq!(record.moves().len(), 9);
        assert!(record.board().is_full());
    }

    #[test]
    fn test_play_out_rejects_finished_board() {
        let mut board = Board::new();
        for index in [0, 1, 2] {
            board.apply_move(index, Marker::X);
        }
        let engine = Engine::new(Marker::O, Marker::X).unwrap();
        assert_eq!(play_out(board, engine), Err(SearchError::GameOver));
    }
}
