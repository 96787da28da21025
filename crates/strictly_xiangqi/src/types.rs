//! Core domain types for xiangqi move validation.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of ranks on the board.
pub const ROWS: u8 = 10;

/// Number of files on the board.
pub const COLS: u8 = 9;

/// Side of the board a piece belongs to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Color {
    /// Red, whose palace occupies rows 1-3.
    Red,
    /// Black, whose palace occupies rows 8-10.
    Black,
}

impl Color {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// Kind of piece.
///
/// Only [`PieceKind::General`], [`PieceKind::Guard`] and [`PieceKind::Rook`]
/// have movement rules; the rest are rejected by the validator.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum PieceKind {
    /// The command piece; capturing it ends the game.
    General,
    /// Palace advisor, moves one step diagonally.
    Guard,
    /// Slides any distance along a row or column.
    Rook,
    /// Not yet implemented.
    Horse,
    /// Not yet implemented.
    Cannon,
    /// Not yet implemented.
    Elephant,
    /// Not yet implemented.
    Soldier,
}

/// A square on the board, 1-based: rows 1-10, columns 1-9.
///
/// Serializes as its `"(row, col)"` label.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Position {
    /// Row (rank), 1-10.
    pub row: u8,
    /// Column (file), 1-9.
    pub col: u8,
}

impl Position {
    /// Creates a position. No bounds check is made.
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether the position lies on the 10x9 grid.
    pub fn is_on_board(self) -> bool {
        (1..=ROWS).contains(&self.row) && (1..=COLS).contains(&self.col)
    }

    /// Absolute row and column distance to `other`.
    pub fn displacement(self, other: Position) -> (u8, u8) {
        (self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Failure to parse a `"(row, col)"` label.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid position {:?}: expected \"(row, col)\"", input)]
pub struct ParsePositionError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Position {
    type Err = ParsePositionError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePositionError {
            input: s.to_string(),
        };
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let (row, col) = inner.split_once(',').ok_or_else(err)?;
        let row = row.trim().parse().map_err(|_| err())?;
        let col = col.trim().parse().map_err(|_| err())?;
        Ok(Self { row, col })
    }
}

impl TryFrom<String> for Position {
    type Error = ParsePositionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Position> for String {
    fn from(pos: Position) -> Self {
        pos.to_string()
    }
}

/// A piece: its kind and the side it belongs to.
///
/// Serializes as a label such as `"Red General"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Piece {
    /// Kind of piece.
    pub kind: PieceKind,
    /// Owning side.
    pub color: Color,
}

impl Piece {
    /// Creates a piece.
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Whether this is `color`'s General.
    pub fn is_general_of(self, color: Color) -> bool {
        self.kind == PieceKind::General && self.color == color
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// Failure to parse a piece label such as `"Black Rook"`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid piece {:?}: expected \"<Red|Black> <kind>\"", input)]
pub struct ParsePieceError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParsePieceError {
            input: s.to_string(),
        };
        let (color, kind) = s.trim().split_once(char::is_whitespace).ok_or_else(err)?;
        let color = color.parse::<Color>().map_err(|_| err())?;
        let kind = kind.trim().parse::<PieceKind>().map_err(|_| err())?;
        Ok(Self { kind, color })
    }
}

impl TryFrom<String> for Piece {
    type Error = ParsePieceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Piece> for String {
    fn from(piece: Piece) -> Self {
        piece.to_string()
    }
}
