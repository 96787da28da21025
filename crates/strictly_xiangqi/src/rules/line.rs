//! Line-of-sight scanning along a row or column.

use super::super::{Board, Position};

/// Squares strictly between `a` and `b`, exclusive of both ends.
///
/// Empty unless the two positions share a row or a column. Scan order is
/// ascending and independent of which end is the origin.
pub fn squares_between(a: Position, b: Position) -> Vec<Position> {
    if a.row == b.row {
        let (lo, hi) = (a.col.min(b.col), a.col.max(b.col));
        (lo + 1..hi).map(|col| Position::new(a.row, col)).collect()
    } else if a.col == b.col {
        let (lo, hi) = (a.row.min(b.row), a.row.max(b.row));
        (lo + 1..hi).map(|row| Position::new(row, a.col)).collect()
    } else {
        Vec::new()
    }
}

/// First occupied square strictly between `a` and `b`, if any.
pub fn first_blocker(board: &Board, a: Position, b: Position) -> Option<Position> {
    squares_between(a, b)
        .into_iter()
        .find(|pos| board.is_occupied(*pos))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Piece, PieceKind};

    #[test]
    fn test_between_on_row_excludes_ends() {
        let squares = squares_between(Position::new(4, 1), Position::new(4, 4));
        assert_eq!(squares, vec![Position::new(4, 2), Position::new(4, 3)]);
    }

    #[test]
    fn test_between_is_direction_independent() {
        let down = squares_between(Position::new(2, 5), Position::new(6, 5));
        let up = squares_between(Position::new(6, 5), Position::new(2, 5));
        assert_eq!(down, up);
        assert_eq!(down.len(), 3);
    }

    #[test]
    fn test_between_adjacent_or_unaligned_is_empty() {
        assert!(squares_between(Position::new(4, 1), Position::new(4, 2)).is_empty());
        assert!(squares_between(Position::new(4, 1), Position::new(5, 2)).is_empty());
    }

    #[test]
    fn test_first_blocker() {
        let soldier = Piece::new(PieceKind::Soldier, Color::Black);
        let board = Board::new()
            .with(Position::new(4, 7), soldier)
            .with(Position::new(4, 3), soldier);
        assert_eq!(
            first_blocker(&board, Position::new(4, 9), Position::new(4, 1)),
            Some(Position::new(4, 3))
        );
        assert_eq!(
            first_blocker(&board, Position::new(4, 1), Position::new(4, 3)),
            None
        );
    }
}
