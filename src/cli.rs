//! Command-line interface for unbeatable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Unbeatable - perfect-play tic-tac-toe engine
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Perfect-play tic-tac-toe move engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(long, global = true, default_value = "unbeatable.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer one JSON move request and print the JSON response
    Move {
        /// File holding the request (reads stdin if not provided)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Run the HTTP move server
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the score of every legal move for a position
    Analyze {
        /// Board as nine characters in row-major order, `_` for empty
        layout: String,

        /// Symbol the engine plays
        #[arg(long, default_value = "O")]
        ai: String,

        /// Symbol the opponent plays
        #[arg(long, default_value = "X")]
        human: String,
    },

    /// Let the engine play both sides of a game
    SelfPlay {
        /// Symbol of the opening side (overrides config)
        #[arg(long)]
        first: Option<String>,

        /// Symbol of the replying side (overrides config)
        #[arg(long)]
        second: Option<String>,
    },
}
