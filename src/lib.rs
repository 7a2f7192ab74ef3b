//! Unbeatable - perfect-play tic-tac-toe as a service
//!
//! Wraps the [`unbeatable_core`] search engine with the surfaces a game
//! front end needs.
//!
//! # Architecture
//!
//! - **Protocol**: JSON move request/response and their validation
//! - **Server**: axum HTTP endpoints over the protocol
//! - **Self-play**: engine-versus-engine games
//! - **Config**: TOML configuration with defaults
//!
//! # Example
//!
//! ```
//! use unbeatable::{MoveRequest, respond};
//!
//! let request = MoveRequest::from_layout("XX__O____", "O", "X");
//! let response = respond(&request).unwrap();
//! assert_eq!(*response.index(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod protocol;
mod selfplay;
mod server;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Protocol
pub use protocol::{
    MoveRequest, MoveResponse, ProtocolError, ProtocolErrorKind, analyze, encode_board, respond,
    respond_json,
};

// Crate-level exports - Self-play
pub use selfplay::{GameRecord, Outcome, PlayedMove, play_out, self_play};

// Crate-level exports - Server
pub use server::{ErrorResponse, HealthResponse, router, serve};

// Crate-level exports - Core engine
pub use unbeatable_core::{
    Analysis, Board, Cell, Decision, Engine, GameStatus, Marker, MoveScore, SearchError, SearchStats,
};
