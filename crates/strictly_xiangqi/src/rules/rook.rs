//! Rook movement.

use super::super::{Board, IllegalMove, Move};
use super::line::first_blocker;
use super::MovementRule;
use tracing::{debug, instrument};

/// Any distance along one row or column, with a clear path.
///
/// The destination itself is not inspected; whether a capture there is
/// allowed is the caller's concern.
pub struct RookRule;

impl MovementRule for RookRule {
    #[instrument(skip_all, fields(mv = %mv))]
    fn check(mv: &Move, board: &Board) -> Result<(), IllegalMove> {
        let (rows, cols) = mv.displacement();
        let straight = (rows == 0) != (cols == 0);
        if !straight {
            debug!(rows, cols, "not a straight line");
            return Err(IllegalMove::NotStraightLine);
        }

        if let Some(blocker) = first_blocker(board, mv.from, mv.to) {
            debug!(%blocker, "path blocked");
            return Err(IllegalMove::PathBlocked(blocker));
        }

        Ok(())
    }

    fn description() -> &'static str {
        "Rook moves any distance along a row or column without jumping"
    }
}
