//! Pentago - console front end.
//!
//! Thin I/O layer over the rules engine: reads textual moves, renders
//! the board, and reports rejections and the final outcome.

#![warn(missing_docs)]

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use pentago::{Game, Move, MoveError, MoveOutcome, Player, Position, Quadrant, Spin};
use std::io::{BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => run_play(),
        Command::Demo { json } => run_demo(json),
    }
}

/// Parses a textual move like `b3 q1 cw` for the given player.
fn parse_move(line: &str, player: Player) -> Result<Move> {
    let mut tokens = line.split_whitespace();
    let (Some(coord), Some(quad), Some(spin), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        bail!("expected POSITION QUADRANT SPIN, e.g. `b3 q1 cw`");
    };
    let position = Position::parse(coord)?;
    let quadrant: Quadrant = quad
        .parse()
        .with_context(|| format!("unknown quadrant {quad:?}, expected q1-q4"))?;
    let spin: Spin = spin
        .parse()
        .with_context(|| format!("unknown spin {spin:?}, expected cw or ccw"))?;
    Ok(Move::new(player, position, quadrant, spin))
}

/// Run an interactive game on stdin/stdout.
fn run_play() -> Result<()> {
    info!("Starting interactive pentago game");

    let mut game = Game::new();
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", game.board().display());
        print!("{:?} to move (POSITION QUADRANT SPIN, or quit)> ", game.to_move());
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!();
            return Ok(());
        };
        let line = line?;
        if line.trim().eq_ignore_ascii_case("quit") {
            return Ok(());
        }

        let mv = match parse_move(&line, game.to_move()) {
            Ok(mv) => mv,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match game.make_move(mv) {
            Ok(MoveOutcome::Continue) => {}
            Ok(MoveOutcome::Finished(status)) => {
                println!("{}", game.board().display());
                println!("Game over: {status:?}");
                return Ok(());
            }
            Err(err) => println!("Move rejected: {err}"),
        }
    }
}

/// Run a short scripted game, demonstrating acceptance and rejection.
fn run_demo(json: bool) -> Result<()> {
    let mut game = Game::new();
    let script = [
        (Player::Black, "a2", Quadrant::Q1, Spin::Clockwise),
        (Player::White, "c3", Quadrant::Q2, Spin::CounterClockwise),
        (Player::Black, "f5", Quadrant::Q4, Spin::Clockwise),
        (Player::White, "d2", Quadrant::Q3, Spin::Clockwise),
        // The first placement rotated into c2, so this is rejected.
        (Player::Black, "c2", Quadrant::Q1, Spin::Clockwise),
    ];

    for (player, coord, quadrant, spin) in script {
        let mv = Move::new(player, Position::parse(coord)?, quadrant, spin);
        match game.make_move(mv) {
            Ok(outcome) => println!("{mv}: {outcome:?}"),
            Err(err @ MoveError::InvalidPosition(_)) => println!("{mv}: rejected ({err})"),
            Err(err) => bail!("demo script rejected unexpectedly: {err}"),
        }
    }

    println!();
    println!("{}", game.board().display());
    if json {
        println!("{}", serde_json::to_string_pretty(&game.status())?);
    } else {
        println!("Status: {:?}", game.status());
        println!("Next to move: {:?}", game.to_move());
    }
    Ok(())
}
