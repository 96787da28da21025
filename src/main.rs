//! Strictly Referee - CLI
//!
//! Judges single xiangqi moves or whole scenario suites.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_referee::{
    Board, Color, MoveValidator, PieceKind, Placement, Position, ProposedMove, ScenarioSuite,
    build_board, render_verdict, run_suite,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check {
            color,
            piece,
            from,
            to,
            board,
        } => run_check(color, piece, from, to, board),
        Command::Run { path, json } => run_scenarios(path, json),
    }
}

/// Judge a single move and print the verdict
#[instrument(skip(board))]
fn run_check(
    color: Color,
    piece: PieceKind,
    from: Position,
    to: Position,
    board: Vec<Placement>,
) -> Result<()> {
    let snapshot: Board = build_board("check", &board)?;
    let mv = ProposedMove::new(color, piece, from, to).to_move("check")?;
    debug!(pieces = snapshot.len(), "Judging move");

    let judgement = MoveValidator::judge(&mv, &snapshot);
    print!("{}", render_verdict(&mv, &judgement));
    Ok(())
}

/// Run a scenario suite and print the report
#[instrument]
fn run_scenarios(path: std::path::PathBuf, json: bool) -> Result<()> {
    let suite = ScenarioSuite::from_file(&path)?;
    let report = run_suite(&suite)?;

    if json {
        println!("{}", report.render_json()?);
    } else {
        print!("{}", report.render_text());
    }

    info!(passed = report.passed(), failed = report.failed(), "Report printed");
    if !report.all_passed() {
        anyhow::bail!("{} of {} scenarios failed", report.failed(), report.outcomes().len());
    }
    Ok(())
}
