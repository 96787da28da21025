//! First-class move proposals and the reasons they can be rejected.
//!
//! A move is a domain event: the caller's intent, judged against a board
//! snapshot without ever being applied to it.

use super::types::{Color, PieceKind, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A proposed move: which piece, whose side, from where, to where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Kind of the moving piece.
    pub kind: PieceKind,
    /// Side making the move.
    pub color: Color,
    /// Origin square.
    pub from: Position,
    /// Destination square.
    pub to: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(kind: PieceKind, color: Color, from: Position, to: Position) -> Self {
        Self {
            kind,
            color,
            from,
            to,
        }
    }

    /// Absolute `(rows, cols)` travelled.
    pub fn displacement(&self) -> (u8, u8) {
        self.from.displacement(self.to)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} -> {}", self.color, self.kind, self.from, self.to)
    }
}

/// Why a move was judged illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IllegalMove {
    /// Destination lies outside the mover's palace.
    #[display("{} is outside the {} palace", _0, _1)]
    OutsidePalace(Position, Color),

    /// General must step exactly one square along a row or column.
    #[display("General must move one step orthogonally, not {}x{}", _0, _1)]
    NotOrthogonalStep(u8, u8),

    /// Guard must step exactly one square diagonally.
    #[display("Guard must move one step diagonally, not {}x{}", _0, _1)]
    NotDiagonalStep(u8, u8),

    /// Rook must travel along a single row or column, and actually move.
    #[display("Rook must move along a single row or column")]
    NotStraightLine,

    /// A piece stands between origin and destination.
    #[display("Path is blocked at {}", _0)]
    PathBlocked(Position),

    /// The two Generals would face each other down an open column.
    #[display("Generals would face each other on column {}", _0)]
    GeneralsFacing(u8),

    /// No movement rule exists for this kind of piece yet.
    #[display("{} moves are not implemented", _0)]
    Unimplemented(PieceKind),
}

impl std::error::Error for IllegalMove {}
