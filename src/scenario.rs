//! Scenario tables: board setups, a proposed move, and expected verdicts.
//!
//! A suite is a TOML file of `[[scenario]]` entries:
//!
//! ```toml
//! [[scenario]]
//! name = "Red General steps forward inside the palace"
//! board = [{ piece = "Red General", position = "(2, 5)" }]
//! move = { color = "Red", piece = "General", from = "(2, 5)", to = "(3, 5)" }
//! legal = true
//! wins = false
//! ```
//!
//! Coordinates are validated here, before anything reaches the validator.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use strictly_xiangqi::{
    Board, Color, Move, ParsePieceError, ParsePositionError, Piece, PieceKind, Position,
};
use tracing::{debug, info, instrument};

/// A collection of scenarios loaded from one file.
#[derive(Debug, Clone, Default, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioSuite {
    /// Scenarios in file order.
    #[serde(rename = "scenario", default)]
    scenarios: Vec<Scenario>,
}

impl ScenarioSuite {
    /// Loads and validates a suite from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScenarioError> {
        debug!("Loading scenarios from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ScenarioError::new(format!("Failed to read scenario file: {}", e))
        })?;

        let suite = Self::from_toml(&content)?;
        info!(count = suite.scenarios.len(), "Scenarios loaded successfully");
        Ok(suite)
    }

    /// Parses and validates a suite from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ScenarioError> {
        let suite: Self = toml::from_str(content).map_err(|e| {
            ScenarioError::new(format!("Failed to parse scenarios: {}", e))
        })?;

        for scenario in &suite.scenarios {
            scenario.snapshot()?;
            scenario.proposal()?;
        }
        Ok(suite)
    }
}

/// One row of a board setup.
#[derive(Debug, Clone, Copy, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Placement {
    /// Piece label, e.g. `"Black Rook"`.
    piece: Piece,
    /// Square label, e.g. `"(4, 1)"`.
    position: Position,
}

impl Placement {
    /// Creates a placement.
    pub fn new(piece: Piece, position: Position) -> Self {
        Self { piece, position }
    }
}

/// The move a scenario proposes.
#[derive(Debug, Clone, Copy, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProposedMove {
    /// Side making the move.
    color: Color,
    /// Kind of the moving piece.
    piece: PieceKind,
    /// Origin square.
    from: Position,
    /// Destination square.
    to: Position,
}

/// A single board setup, move, and expected outcome.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    /// Scenario title.
    name: String,

    /// Occupied squares before the move.
    #[serde(default)]
    board: Vec<Placement>,

    /// Move under test.
    #[serde(rename = "move")]
    proposed: ProposedMove,

    /// Whether the move should be judged legal.
    legal: bool,

    /// Whether the move should win immediately, if the scenario cares.
    #[serde(default)]
    wins: Option<bool>,
}

impl Scenario {
    /// Builds the board snapshot, rejecting off-grid or doubly occupied
    /// squares.
    #[instrument(skip(self), fields(scenario = %self.name))]
    pub fn snapshot(&self) -> Result<Board, ScenarioError> {
        build_board(&self.name, &self.board)
    }

    /// Builds the proposed move, rejecting off-grid coordinates.
    #[instrument(skip(self), fields(scenario = %self.name))]
    pub fn proposal(&self) -> Result<Move, ScenarioError> {
        self.proposed.to_move(&self.name)
    }
}

impl ProposedMove {
    /// Creates a proposed move.
    pub fn new(color: Color, piece: PieceKind, from: Position, to: Position) -> Self {
        Self {
            color,
            piece,
            from,
            to,
        }
    }

    /// Converts to a validator move, rejecting off-grid coordinates.
    ///
    /// `label` names the scenario in error messages.
    pub fn to_move(&self, label: &str) -> Result<Move, ScenarioError> {
        for pos in [self.from, self.to] {
            if !pos.is_on_board() {
                return Err(ScenarioError::new(format!(
                    "Scenario '{}': move square {} is off the board",
                    label, pos
                )));
            }
        }
        Ok(Move::new(self.piece, self.color, self.from, self.to))
    }
}

/// Builds a board snapshot from placements, rejecting off-grid or doubly
/// occupied squares.
///
/// `label` names the scenario in error messages.
#[instrument(skip(placements), fields(count = placements.len()))]
pub fn build_board(label: &str, placements: &[Placement]) -> Result<Board, ScenarioError> {
    let mut seen = HashSet::new();
    for placement in placements {
        let pos = placement.position;
        if !pos.is_on_board() {
            return Err(ScenarioError::new(format!(
                "Scenario '{}': {} at {} is off the board",
                label, placement.piece, pos
            )));
        }
        if !seen.insert(pos) {
            return Err(ScenarioError::new(format!(
                "Scenario '{}': {} is occupied twice",
                label, pos
            )));
        }
    }
    debug!("Board snapshot built");
    Ok(placements
        .iter()
        .map(|placement| (placement.position, placement.piece))
        .collect())
}

/// Parses a `"<piece>@<position>"` label such as `"Red General@(2, 5)"`.
impl std::str::FromStr for Placement {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (piece, position) = s.split_once('@').ok_or_else(|| {
            ScenarioError::new(format!(
                "Invalid placement {:?}: expected \"<piece>@(row, col)\"",
                s
            ))
        })?;
        let piece = piece
            .parse()
            .map_err(|e: ParsePieceError| ScenarioError::new(e.to_string()))?;
        let position = position
            .parse()
            .map_err(|e: ParsePositionError| ScenarioError::new(e.to_string()))?;
        Ok(Self { piece, position })
    }
}

/// Scenario loading or validation error.
#[derive(Debug, Clone, Display, Error)]
#[display("Scenario error: {} at {}:{}", message, file, line)]
pub struct ScenarioError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScenarioError {
    /// Creates a new scenario error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
