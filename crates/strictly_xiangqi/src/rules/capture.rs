//! Immediate win detection.

use super::super::{Board, Move};
use tracing::instrument;

/// Whether the move lands on the opposing General's square.
///
/// Only the snapshot is consulted; legality of the move is judged
/// separately.
#[instrument(skip_all, fields(mv = %mv))]
pub fn captures_general(mv: &Move, board: &Board) -> bool {
    board
        .get(mv.to)
        .is_some_and(|piece| piece.is_general_of(mv.color.opponent()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Piece, PieceKind, Position};

    #[test]
    fn test_capture_opposing_general() {
        let board = Board::new()
            .with(Position::new(9, 1), Piece::new(PieceKind::Rook, Color::Red))
            .with(Position::new(9, 5), Piece::new(PieceKind::General, Color::Black));
        let mv = Move::new(
            PieceKind::Rook,
            Color::Red,
            Position::new(9, 1),
            Position::new(9, 5),
        );
        assert!(captures_general(&mv, &board));
    }

    #[test]
    fn test_own_general_or_other_piece_is_not_a_win() {
        let board = Board::new()
            .with(Position::new(2, 5), Piece::new(PieceKind::General, Color::Red))
            .with(Position::new(9, 5), Piece::new(PieceKind::Guard, Color::Black));
        let onto_own = Move::new(
            PieceKind::Rook,
            Color::Red,
            Position::new(2, 1),
            Position::new(2, 5),
        );
        let onto_guard = Move::new(
            PieceKind::Rook,
            Color::Red,
            Position::new(9, 1),
            Position::new(9, 5),
        );
        assert!(!captures_general(&onto_own, &board));
        assert!(!captures_general(&onto_guard, &board));
    }
}
