//! Guard movement.

use super::super::{Board, IllegalMove, Move};
use super::palace::in_palace;
use super::MovementRule;
use tracing::{debug, instrument};

/// One diagonal step inside the palace.
pub struct GuardRule;

impl MovementRule for GuardRule {
    #[instrument(skip_all, fields(mv = %mv))]
    fn check(mv: &Move, _board: &Board) -> Result<(), IllegalMove> {
        if !in_palace(mv.color, mv.to) {
            debug!("destination outside palace");
            return Err(IllegalMove::OutsidePalace(mv.to, mv.color));
        }

        let (rows, cols) = mv.displacement();
        if (rows, cols) != (1, 1) {
            debug!(rows, cols, "not a single diagonal step");
            return Err(IllegalMove::NotDiagonalStep(rows, cols));
        }

        Ok(())
    }

    fn description() -> &'static str {
        "Guard moves one step diagonally within its palace"
    }
}
