//! General (command piece) movement and the face-off rule.

use super::super::{Board, Color, IllegalMove, Move, Position};
use super::line::first_blocker;
use super::palace::in_palace;
use super::MovementRule;
use tracing::{debug, instrument};

/// One orthogonal step inside the palace, never exposing an open column
/// to the opposing General.
pub struct GeneralRule;

impl MovementRule for GeneralRule {
    #[instrument(skip_all, fields(mv = %mv))]
    fn check(mv: &Move, board: &Board) -> Result<(), IllegalMove> {
        if !in_palace(mv.color, mv.to) {
            debug!("destination outside palace");
            return Err(IllegalMove::OutsidePalace(mv.to, mv.color));
        }

        let (rows, cols) = mv.displacement();
        if !matches!((rows, cols), (1, 0) | (0, 1)) {
            debug!(rows, cols, "not a single orthogonal step");
            return Err(IllegalMove::NotOrthogonalStep(rows, cols));
        }

        if generals_facing(mv.color, mv.to, board) {
            debug!(column = mv.to.col, "generals would face each other");
            return Err(IllegalMove::GeneralsFacing(mv.to.col));
        }

        Ok(())
    }

    fn description() -> &'static str {
        "General moves one step orthogonally in its palace, never facing the enemy General"
    }
}

/// Whether `color`'s General standing on `to` would face the opposing
/// General down an open column.
///
/// The opponent is read from the snapshot as-is. The mover's origin is not
/// vacated first, so a General stepping away along the column still counts
/// its own origin square as a blocker.
#[instrument(skip(board))]
pub fn generals_facing(color: Color, to: Position, board: &Board) -> bool {
    let Some(opponent) = board.general(color.opponent()) else {
        return false;
    };
    if opponent.col != to.col {
        return false;
    }
    first_blocker(board, to, opponent).is_none()
}
