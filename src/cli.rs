//! Command-line interface for strictly_referee.

use clap::{Parser, Subcommand};
use strictly_referee::Placement;
use strictly_xiangqi::{Color, PieceKind, Position};

/// Strictly Referee - xiangqi move-legality checker
#[derive(Parser, Debug)]
#[command(name = "strictly_referee")]
#[command(about = "Judge xiangqi moves against a board snapshot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Judge a single move
    Check {
        /// Side making the move (Red or Black)
        #[arg(long)]
        color: Color,

        /// Kind of the moving piece (General, Guard, Rook, ...)
        #[arg(long)]
        piece: PieceKind,

        /// Origin square, e.g. "(2, 5)"
        #[arg(long)]
        from: Position,

        /// Destination square, e.g. "(3, 5)"
        #[arg(long)]
        to: Position,

        /// Occupied square, e.g. "Red General@(2, 5)"; repeat for each piece
        #[arg(long = "board")]
        board: Vec<Placement>,
    },

    /// Run a TOML scenario suite
    Run {
        /// Path to the scenario file
        path: std::path::PathBuf,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
