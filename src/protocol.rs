//! JSON request/response contract for a single engine decision.
//!
//! A request carries the board as nine one-character strings (`"_"` for an
//! empty cell) plus the engine's and the human's symbols. The response
//! echoes the board after the engine's move together with the game status.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use unbeatable_core::{
    Analysis, Board, CELL_COUNT, Cell, Decision, EMPTY_SYMBOL, Engine, Marker, SearchError,
};

/// Request for the engine's next move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Nine cells in row-major order, each `"_"` or one of the two symbols.
    pub board: Vec<String>,
    /// Symbol the engine plays.
    pub ai_symbol: String,
    /// Symbol the opponent plays.
    pub human_symbol: String,
}

impl MoveRequest {
    /// Creates a request from explicit cells and symbols.
    pub fn new(board: Vec<String>, ai_symbol: impl Into<String>, human_symbol: impl Into<String>) -> Self {
        Self {
            board,
            ai_symbol: ai_symbol.into(),
            human_symbol: human_symbol.into(),
        }
    }

    /// Creates a request from a compact layout such as `"XX_O_____"`.
    pub fn from_layout(layout: &str, ai_symbol: impl Into<String>, human_symbol: impl Into<String>) -> Self {
        Self::new(
            layout.chars().map(String::from).collect(),
            ai_symbol,
            human_symbol,
        )
    }

    /// Validates the request and builds the board and engine it describes.
    ///
    /// # Errors
    ///
    /// Fails when a symbol is not a single visible character, both symbols
    /// are equal, the board does not have nine cells, or a cell holds a
    /// symbol belonging to neither player.
    #[instrument(skip(self), fields(ai = %self.ai_symbol, human = %self.human_symbol))]
    pub fn parse(&self) -> Result<(Board, Engine), ProtocolError> {
        let ai = Marker::parse(&self.ai_symbol).map_err(|e| {
            ProtocolError::new(ProtocolErrorKind::InvalidSymbol(format!("aiSymbol: {e}")))
        })?;
        let human = Marker::parse(&self.human_symbol).map_err(|e| {
            ProtocolError::new(ProtocolErrorKind::InvalidSymbol(format!("humanSymbol: {e}")))
        })?;
        let engine = Engine::new(ai, human).map_err(|e| {
            ProtocolError::new(ProtocolErrorKind::InvalidSymbol(e.to_string()))
        })?;

        if self.board.len() != CELL_COUNT {
            warn!(len = self.board.len(), "Board has wrong number of cells");
            return Err(ProtocolError::new(ProtocolErrorKind::BoardLength(self.board.len())));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, (cell, symbol)) in cells.iter_mut().zip(&self.board).enumerate() {
            *cell = parse_cell(symbol, ai, human).ok_or_else(|| {
                warn!(index, symbol = %symbol, "Unknown cell symbol");
                ProtocolError::new(ProtocolErrorKind::UnknownSymbol {
                    index,
                    symbol: symbol.clone(),
                })
            })?;
        }

        Ok((Board::from_cells(cells), engine))
    }
}

fn parse_cell(symbol: &str, ai: Marker, human: Marker) -> Option<Cell> {
    let mut chars = symbol.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    if c == EMPTY_SYMBOL {
        Some(Cell::Empty)
    } else if c == ai.symbol() {
        Some(Cell::Occupied(ai))
    } else if c == human.symbol() {
        Some(Cell::Occupied(human))
    } else {
        None
    }
}

/// The engine's move and the game state after it.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    /// Cell index the engine played.
    #[serde(rename = "move")]
    index: usize,
    /// Board after the move, same encoding as the request.
    board: Vec<String>,
    /// Whether the move completed a line.
    has_winner: bool,
    /// Whether the board is now full.
    is_full: bool,
    /// Symbol of the winner, if any.
    winner: Option<String>,
}

impl From<&Decision> for MoveResponse {
    fn from(decision: &Decision) -> Self {
        Self {
            index: decision.index(),
            board: encode_board(decision.board()),
            has_winner: decision.has_winner(),
            is_full: decision.is_full(),
            winner: decision.winner().map(|m| m.to_string()),
        }
    }
}

/// Encodes a board as nine one-character strings.
pub fn encode_board(board: &Board) -> Vec<String> {
    board.cells().iter().map(|cell| cell.to_string()).collect()
}

/// Answers one move request.
///
/// # Errors
///
/// Invalid requests (see [`MoveRequest::parse`]) and positions without a
/// move to make (already won or full).
#[instrument(skip(request), fields(ai = %request.ai_symbol))]
pub fn respond(request: &MoveRequest) -> Result<MoveResponse, ProtocolError> {
    let (board, engine) = request.parse()?;
    let decision = engine.decide(board)?;
    info!(index = decision.index(), status = ?decision.status(), "Engine moved");
    Ok(MoveResponse::from(&decision))
}

/// Answers a request given as JSON text, returning the response as JSON.
///
/// # Errors
///
/// Malformed JSON plus everything [`respond`] rejects.
#[instrument(skip(input), fields(len = input.len()))]
pub fn respond_json(input: &str) -> Result<String, ProtocolError> {
    let request: MoveRequest = serde_json::from_str(input)?;
    let response = respond(&request)?;
    Ok(serde_json::to_string(&response)?)
}

/// Scores every legal move of the request's position for the engine and
/// reports the search effort.
///
/// # Errors
///
/// Same conditions as [`respond`].
#[instrument(skip(request), fields(ai = %request.ai_symbol))]
pub fn analyze(request: &MoveRequest) -> Result<Analysis, ProtocolError> {
    let (mut board, engine) = request.parse()?;
    Ok(engine.analyze(&mut board)?)
}

/// Kinds of request failure.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ProtocolErrorKind {
    /// A player symbol is unusable.
    #[display("invalid symbol: {_0}")]
    InvalidSymbol(String),
    /// The board does not have nine cells.
    #[display("board must have 9 cells, got {_0}")]
    BoardLength(usize),
    /// A cell holds something other than `_` or a player symbol.
    #[display("cell {index} holds unknown symbol {symbol:?}")]
    UnknownSymbol {
        /// Cell index.
        index: usize,
        /// Offending value.
        symbol: String,
    },
    /// The position has no move to make.
    #[display("{_0}")]
    Search(SearchError),
    /// The request body is not valid JSON.
    #[display("malformed request: {_0}")]
    Json(String),
}

/// Request error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Protocol error: {} at {}:{}", kind, file, line)]
pub struct ProtocolError {
    /// What went wrong.
    pub kind: ProtocolErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ProtocolError {
    /// Creates a new protocol error with caller location tracking.
    #[track_caller]
    pub fn new(kind: ProtocolErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<SearchError> for ProtocolError {
    #[track_caller]
    fn from(err: SearchError) -> Self {
        Self::new(ProtocolErrorKind::Search(err))
    }
}

impl From<serde_json::Error> for ProtocolError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(ProtocolErrorKind::Json(err.to_string()))
    }
}
