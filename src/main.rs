//! Hint tic-tac-toe - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, OpponentArgs};
use hint_tictactoe::{
    Board, ComputerPlayer, FirstPlayer, OpponentConfig, Session, evaluate,
};
use std::io;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            opponent,
            computer_first,
        } => run_play(opponent, computer_first),
        Command::Suggest {
            board,
            opponent,
            json,
        } => run_suggest(&board, opponent, json),
        Command::Evaluate {
            board,
            human_to_move,
        } => run_evaluate(&board, human_to_move),
    }
}

/// Merges the config file (if any) with command-line overrides.
#[instrument]
fn load_config(args: OpponentArgs) -> Result<OpponentConfig> {
    let mut config = match &args.config {
        Some(path) => OpponentConfig::from_file(path)?,
        None => OpponentConfig::default(),
    };

    if let Some(probability) = args.random_move_probability {
        config = config.with_random_move_probability(probability);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    config.validate()?;
    debug!(?config, "Opponent configuration");
    Ok(config)
}

fn parse_board(board: &str) -> Result<Board> {
    board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))
}

/// Run an interactive session on stdin/stdout
fn run_play(args: OpponentArgs, computer_first: bool) -> Result<()> {
    let mut config = load_config(args)?;
    if computer_first {
        config = config.with_first_player(FirstPlayer::Computer);
    }

    let computer = ComputerPlayer::new("Computer", config.build_selector()?);
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), computer)
        .with_first_player(config.first_player().cell());

    info!("Starting hint session");
    let hint_awarded = session.run()?;
    if hint_awarded {
        println!("You earned a hint.");
    } else {
        println!("No hint this time.");
    }
    Ok(())
}

/// Print the opponent's move for a board
fn run_suggest(board: &str, args: OpponentArgs, json: bool) -> Result<()> {
    let board = parse_board(board)?;
    let config = load_config(args)?;
    let mut selector = config.build_selector()?;

    let choice = selector.choose(&board)?;
    if json {
        let value = serde_json::json!({
            "board": board.to_string(),
            "index": choice.position().to_index(),
            "position": choice.position().label(),
            "strategy": choice.strategy().to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!(
            "{} ({}) via {}",
            choice.position().human_number(),
            choice.position(),
            choice.strategy()
        );
    }
    Ok(())
}

/// Print the minimax value of a board
fn run_evaluate(board: &str, human_to_move: bool) -> Result<()> {
    let board = parse_board(board)?;
    let outcome = evaluate(&board, !human_to_move);
    println!("{}", board.display());
    println!("{}", outcome);
    Ok(())
}
