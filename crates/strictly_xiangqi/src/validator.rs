//! Stateless move validator.
//!
//! [`MoveValidator`] answers two questions about a proposed move against a
//! board snapshot: is it legal for that piece, and does it end the game by
//! capturing the opposing General. Every call is pure; the snapshot is
//! borrowed immutably and never copied, so one board may be shared across
//! threads while callers hold off on mutating it.

use super::action::{IllegalMove, Move};
use super::rules::{captures_general, rule_for};
use super::{Board, Color, PieceKind, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Status of the game after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game continues.
    InProgress,
    /// The given side captured the opposing General.
    Won(Color),
}

/// Both verdicts on a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judgement {
    /// `Ok` when legal, otherwise the first rule violated.
    pub legality: Result<(), IllegalMove>,
    /// Whether the move ends the game.
    pub status: GameStatus,
}

impl Judgement {
    /// Whether the move was judged legal.
    pub fn is_legal(&self) -> bool {
        self.legality.is_ok()
    }

    /// Whether the move wins immediately.
    pub fn is_win(&self) -> bool {
        matches!(self.status, GameStatus::Won(_))
    }
}

/// Rules engine for xiangqi moves. Holds no state.
pub struct MoveValidator;

impl MoveValidator {
    /// Whether a `kind` piece of `color` may move from `from` to `to`.
    ///
    /// Kinds without a rule are always illegal.
    #[instrument(skip(board))]
    pub fn is_legal_move(
        kind: PieceKind,
        color: Color,
        from: Position,
        to: Position,
        board: &Board,
    ) -> bool {
        Self::is_legal(&Move::new(kind, color, from, to), board)
    }

    /// Whether the move captures the opposing General.
    #[instrument(skip(board))]
    pub fn check_game_over(
        kind: PieceKind,
        color: Color,
        from: Position,
        to: Position,
        board: &Board,
    ) -> bool {
        captures_general(&Move::new(kind, color, from, to), board)
    }

    /// Whether the move is legal.
    pub fn is_legal(mv: &Move, board: &Board) -> bool {
        Self::explain(mv, board).is_ok()
    }

    /// Checks the move, returning the reason when it is illegal.
    #[instrument(skip_all, fields(mv = %mv))]
    pub fn explain(mv: &Move, board: &Board) -> Result<(), IllegalMove> {
        let Some(rule) = rule_for(mv.kind) else {
            debug!(kind = %mv.kind, "no rule for piece kind");
            return Err(IllegalMove::Unimplemented(mv.kind));
        };
        debug!(rule = rule.description, "checking move");
        (rule.check)(mv, board)
    }

    /// Judges legality and game status together.
    #[instrument(skip_all, fields(mv = %mv))]
    pub fn judge(mv: &Move, board: &Board) -> Judgement {
        let status = if captures_general(mv, board) {
            GameStatus::Won(mv.color)
        } else {
            GameStatus::InProgress
        };
        Judgement {
            legality: Self::explain(mv, board),
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    #[test]
    fn test_unimplemented_kinds_fail_closed() {
        let board = Board::new();
        for kind in [
            PieceKind::Horse,
            PieceKind::Cannon,
            PieceKind::Elephant,
            PieceKind::Soldier,
        ] {
            let mv = Move::new(kind, Color::Red, Position::new(4, 1), Position::new(5, 1));
            assert_eq!(
                MoveValidator::explain(&mv, &board),
                Err(IllegalMove::Unimplemented(kind))
            );
        }
    }

    #[test]
    fn test_judge_reports_win_and_legality() {
        let board = Board::new()
            .with(Position::new(9, 1), Piece::new(PieceKind::Rook, Color::Red))
            .with(Position::new(9, 5), Piece::new(PieceKind::General, Color::Black));
        let mv = Move::new(
            PieceKind::Rook,
            Color::Red,
            Position::new(9, 1),
            Position::new(9, 5),
        );
        let judgement = MoveValidator::judge(&mv, &board);
        assert!(judgement.is_legal());
        assert_eq!(judgement.status, GameStatus::Won(Color::Red));
    }
}
