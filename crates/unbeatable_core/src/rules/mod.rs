//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot. The board's
//! own `has_winner`/`is_full` delegate here so the search and the
//! response builder share one definition of a finished game.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, winning_line};
