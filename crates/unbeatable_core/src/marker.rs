//! Player markers and cell values.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Symbol used for an empty cell on the wire and in board renderings.
pub const EMPTY_SYMBOL: char = '_';

/// A player's marker: one visible character, never the empty symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Marker(char);

impl Marker {
    /// Marker `X`.
    pub const X: Marker = Marker('X');
    /// Marker `O`.
    pub const O: Marker = Marker('O');

    /// Creates a marker from a character.
    #[instrument]
    pub fn new(symbol: char) -> Result<Self, MarkerError> {
        if symbol == EMPTY_SYMBOL {
            return Err(MarkerError::EmptySymbol);
        }
        if symbol.is_whitespace() || symbol.is_control() {
            return Err(MarkerError::NotVisible(symbol));
        }
        Ok(Self(symbol))
    }

    /// Parses a marker from a string holding exactly one character.
    #[instrument]
    pub fn parse(s: &str) -> Result<Self, MarkerError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(MarkerError::NotSingleChar(s.to_string())),
        }
    }

    /// Returns the marker's character.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Marker {
    type Error = MarkerError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::new(symbol)
    }
}

impl From<Marker> for char {
    fn from(marker: Marker) -> Self {
        marker.0
    }
}

/// Reasons a character cannot be used as a marker.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MarkerError {
    /// `_` is reserved for empty cells.
    #[display("'_' is reserved for empty cells")]
    EmptySymbol,
    /// Whitespace and control characters are not markers.
    #[display("{_0:?} is not a visible character")]
    NotVisible(#[error(not(source))] char),
    /// Markers are exactly one character long.
    #[display("marker must be a single character, got {_0:?}")]
    NotSingleChar(#[error(not(source))] String),
}

/// Value of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds a player's marker.
    Occupied(Marker),
}

impl Cell {
    /// Returns true for [`Cell::Empty`].
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }

    /// Character used to render this cell.
    pub fn symbol(self) -> char {
        self.marker().map_or(EMPTY_SYMBOL, Marker::symbol)
    }
}

impl TryFrom<char> for Cell {
    type Error = MarkerError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        if symbol == EMPTY_SYMBOL {
            Ok(Cell::Empty)
        } else {
            Marker::new(symbol).map(Cell::Occupied)
        }
    }
}

impl From<Cell> for char {
    fn from(cell: Cell) -> Self {
        cell.symbol()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
