//! Unbeatable - Unified CLI
//!
//! Perfect-play tic-tac-toe engine with several modes of operation.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable::{Board, EngineConfig, Marker, MoveRequest, analyze, respond_json, self_play, serve};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = EngineConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    match cli.command {
        Command::Move { input } => run_move(input),
        Command::Serve { host, port } => {
            let config = config.with_address(host, port);
            run_server(config.host(), *config.port()).await
        }
        Command::Analyze { layout, ai, human } => run_analyze(&layout, ai, human),
        Command::SelfPlay { first, second } => {
            let first = first.unwrap_or_else(|| config.first_symbol().clone());
            let second = second.unwrap_or_else(|| config.second_symbol().clone());
            run_self_play(&first, &second)
        }
    }
}

/// Logs to stderr so stdout carries only command output.
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Answer one request read from a file or stdin
#[instrument(skip_all)]
fn run_move(input: Option<PathBuf>) -> Result<()> {
    let request = match input {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    println!("{}", respond_json(&request)?);
    Ok(())
}

/// Run the HTTP move server
async fn run_server(host: &str, port: u16) -> Result<()> {
    info!("Starting unbeatable HTTP server");
    serve(host, port).await
}

/// Print the score of every legal move
fn run_analyze(layout: &str, ai: String, human: String) -> Result<()> {
    let analysis = analyze(&MoveRequest::from_layout(layout, ai, human))?;
    for score in &analysis.scores {
        println!("{}: {}", score.index, score.score);
    }
    println!("nodes: {}", analysis.stats.nodes);
    Ok(())
}

/// Play the engine against itself and print every position
fn run_self_play(first: &str, second: &str) -> Result<()> {
    let record = self_play(Marker::parse(first)?, Marker::parse(second)?)?;
    let mut board = Board::new();
    for played in record.moves() {
        board.apply_move(played.index, played.marker);
        println!("{} -> {}\n{}\n", played.marker, played.index, board);
    }
    println!("{}", record.outcome());
    Ok(())
}
