//! Strictly Referee library - scenario tables for the xiangqi validator
//!
//! Wraps [`strictly_xiangqi`] with the harness that feeds it: scenario
//! files describing a board, a move and the expected verdicts, and a runner
//! that reports which scenarios hold.
//!
//! # Architecture
//!
//! - **Scenario**: TOML suite loading and caller-side coordinate validation
//! - **Runner**: judges each scenario and aggregates a report
//!
//! # Example
//!
//! ```
//! use strictly_referee::{ScenarioSuite, run_suite};
//!
//! # fn example() -> Result<(), strictly_referee::ScenarioError> {
//! let suite = ScenarioSuite::from_toml(r#"
//! [[scenario]]
//! name = "Rook slides along an open row"
//! board = [{ piece = "Red Rook", position = "(4, 1)" }]
//! move = { color = "Red", piece = "Rook", from = "(4, 1)", to = "(4, 9)" }
//! legal = true
//! "#)?;
//! let report = run_suite(&suite)?;
//! assert!(report.all_passed());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod runner;
mod scenario;

// Crate-level exports - Scenario tables
pub use scenario::{Placement, ProposedMove, Scenario, ScenarioError, ScenarioSuite, build_board};

// Crate-level exports - Runner
pub use runner::{ScenarioOutcome, SuiteReport, render_verdict, run_scenario, run_suite};

// Crate-level exports - Rules
pub use strictly_xiangqi::{
    Board, Color, GameStatus, IllegalMove, Judgement, Move, MoveValidator, Piece, PieceKind,
    Position, rule_for,
};
