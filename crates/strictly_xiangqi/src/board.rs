//! Board snapshot: occupancy at the instant a move is judged.

use super::types::{Color, Piece, Position};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// Every occupied square, keyed by position.
///
/// A snapshot reflects the board *before* the move being validated: the
/// moving piece is still on its origin and the destination holds whatever
/// currently occupies it. The validator only ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: BTreeMap<Position, Piece>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Places a piece, returning whatever previously stood there.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        self.squares.insert(pos, piece)
    }

    /// Builder form of [`Board::place`].
    pub fn with(mut self, pos: Position, piece: Piece) -> Self {
        self.place(pos, piece);
        self
    }

    /// Gets the piece at the given position.
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares.get(&pos).copied()
    }

    /// Checks if a square is occupied.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.squares.contains_key(&pos)
    }

    /// Number of pieces on the board.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Whether the board has no pieces.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Iterates occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().map(|(pos, piece)| (*pos, *piece))
    }

    /// Locates `color`'s General.
    ///
    /// Linear scan over at most 32 pieces; no index is kept. On a malformed
    /// board holding two Generals of one color, the first in row-major order
    /// (lowest row, then lowest column) is returned.
    #[instrument(skip(self))]
    pub fn general(&self, color: Color) -> Option<Position> {
        self.pieces()
            .find(|(_, piece)| piece.is_general_of(color))
            .map(|(pos, _)| pos)
    }
}

impl FromIterator<(Position, Piece)> for Board {
    fn from_iter<I: IntoIterator<Item = (Position, Piece)>>(iter: I) -> Self {
        Self {
            squares: iter.into_iter().collect(),
        }
    }
}
