//! Unbeatable core - perfect-play tic-tac-toe.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, apply/undo backtracking, legality checks
//! - **Rules**: win lines and full-board detection
//! - **Search**: minimax with alpha-beta pruning over the board
//! - **Decision**: a chosen move applied, with the resulting game status
//!
//! # Example
//!
//! ```
//! use unbeatable_core::{Board, Engine, Marker};
//!
//! let mut board = Board::new();
//! board.apply_move(0, Marker::X);
//! board.apply_move(1, Marker::X);
//!
//! let engine = Engine::new(Marker::O, Marker::X).unwrap();
//! assert_eq!(engine.choose_move(&mut board), Ok(2));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod decision;
mod marker;
pub mod rules;
mod search;

pub use board::{Board, CELL_COUNT};
pub use decision::{Decision, GameStatus};
pub use marker::{Cell, EMPTY_SYMBOL, Marker, MarkerError};
pub use rules::Line;
pub use search::{Analysis, DRAW_SCORE, Engine, MoveScore, SearchError, SearchStats, WIN_SCORE};
