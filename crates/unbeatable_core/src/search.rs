//! Minimax search with alpha-beta pruning.
//!
//! The engine explores the full game tree from the given position. Scores
//! are from the agent's point of view: a win is worth [`WIN_SCORE`] minus
//! the number of plies needed to reach it, a loss is worth `-WIN_SCORE`
//! plus the plies it took, and a draw is [`DRAW_SCORE`]. Shorter wins and
//! longer losses are therefore preferred.

use crate::{Board, Marker};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Base score of a won position.
pub const WIN_SCORE: i32 = 100;

/// Score of a full board without a winner.
pub const DRAW_SCORE: i32 = 0;

/// Errors reported by the search engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SearchError {
    /// Every cell is occupied.
    #[display("no legal moves: the board is full")]
    NoLegalMoves,
    /// The position already contains a completed line.
    #[display("game is already over")]
    GameOver,
    /// Agent and opponent were given the same marker.
    #[display("agent and opponent both use marker '{_0}'")]
    SameMarker(#[error(not(source))] Marker),
}

/// Whose turn a node of the search tree represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    /// The agent moves and picks the highest score.
    Maximizing,
    /// The opponent moves and picks the lowest score.
    Minimizing,
}

/// Root score of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveScore {
    /// Cell index of the move.
    pub index: usize,
    /// Minimax value of the position after the move.
    pub score: i32,
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited below the root.
    pub nodes: u64,
}

/// Root scores of a position together with the work it took.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Score of every legal move, ascending by index.
    pub scores: Vec<MoveScore>,
    /// Search counters.
    pub stats: SearchStats,
}

/// Perfect-play move picker for one pair of markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    agent: Marker,
    opponent: Marker,
}

impl Engine {
    /// Creates an engine playing `agent` against `opponent`.
    #[instrument]
    pub fn new(agent: Marker, opponent: Marker) -> Result<Self, SearchError> {
        if agent == opponent {
            return Err(SearchError::SameMarker(agent));
        }
        Ok(Self { agent, opponent })
    }

    /// The searching player's marker.
    pub fn agent(&self) -> Marker {
        self.agent
    }

    /// The opponent's marker.
    pub fn opponent(&self) -> Marker {
        self.opponent
    }

    /// Returns the engine for the other side of the same game.
    pub fn swapped(&self) -> Self {
        Self {
            agent: self.opponent,
            opponent: self.agent,
        }
    }

    /// Picks the best move for the agent.
    ///
    /// Moves are tried in ascending index order and only a strictly better
    /// score replaces the current pick, so ties go to the lowest index. The
    /// board is restored before returning.
    ///
    /// # Errors
    ///
    /// [`SearchError::GameOver`] if a line is already complete,
    /// [`SearchError::NoLegalMoves`] if the board is full.
    #[instrument(skip(self, board), fields(agent = %self.agent))]
    pub fn choose_move(&self, board: &mut Board) -> Result<usize, SearchError> {
        let mut best: Option<MoveScore> = None;
        for candidate in self.evaluate(board)? {
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        let best = best.ok_or(SearchError::NoLegalMoves)?;
        debug!(index = best.index, score = best.score, "Chose move");
        Ok(best.index)
    }

    /// Scores every legal move for the agent, in ascending index order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Engine::choose_move`].
    pub fn evaluate(&self, board: &mut Board) -> Result<Vec<MoveScore>, SearchError> {
        self.analyze(board).map(|analysis| analysis.scores)
    }

    /// Like [`Engine::evaluate`], also reporting how many nodes were visited.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Engine::choose_move`].
    #[instrument(skip(self, board), fields(agent = %self.agent))]
    pub fn analyze(&self, board: &mut Board) -> Result<Analysis, SearchError> {
        if board.has_winner() {
            return Err(SearchError::GameOver);
        }
        let moves = board.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let mut stats = SearchStats::default();
        let scores = moves
            .into_iter()
            .map(|index| {
                board.apply_move(index, self.agent);
                let score =
                    self.minimax(board, Turn::Minimizing, i32::MIN, i32::MAX, 0, &mut stats.nodes);
                board.undo_move(index);
                trace!(index, score, "Scored root move");
                MoveScore { index, score }
            })
            .collect();

        debug!(nodes = stats.nodes, "Search complete");
        Ok(Analysis { scores, stats })
    }

    /// Minimax value of `board` with `turn` to move.
    ///
    /// A winner found here was created by the previous mover: in a
    /// maximizing node that is the opponent, in a minimizing node the agent.
    fn minimax(
        &self,
        board: &mut Board,
        turn: Turn,
        mut alpha: i32,
        mut beta: i32,
        depth: i32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        if board.has_winner() {
            return match turn {
                Turn::Maximizing => -WIN_SCORE + depth,
                Turn::Minimizing => WIN_SCORE - depth,
            };
        }
        if board.is_full() {
            return DRAW_SCORE;
        }

        match turn {
            Turn::Maximizing => {
                let mut best = i32::MIN;
                for index in board.legal_moves() {
                    board.apply_move(index, self.agent);
                    best = best.max(self.minimax(board, Turn::Minimizing, alpha, beta, depth + 1, nodes));
                    board.undo_move(index);
                    alpha = alpha.max(best);
                    if alpha >= beta {
                        break;
                    }
                }
                best
            }
            Turn::Minimizing => {
                let mut best = i32::MAX;
                for index in board.legal_moves() {
                    board.apply_move(index, self.opponent);
                    best = best.min(self.minimax(board, Turn::Maximizing, alpha, beta, depth + 1, nodes));
                    board.undo_move(index);
                    beta = beta.min(best);
                    if alpha >= beta {
                        break;
                    }
                }
                best
            }
        }
    }
}
