//! Movement rules for xiangqi pieces.
//!
//! Each rule is a unit type implementing [`MovementRule`]: a pure check of a
//! [`Move`] against a [`Board`] snapshot. Rules never mutate the board and
//! hold no state, so they compose freely and may run on any thread.
//!
//! [`rule_for`] is the single dispatch table from piece kind to rule. Giving
//! a new kind a rule means writing one more `MovementRule` and changing its
//! entry in that table; existing rules are untouched.

pub mod capture;
pub mod general;
pub mod guard;
pub mod line;
pub mod palace;
pub mod rook;

pub use capture::captures_general;
pub use general::{GeneralRule, generals_facing};
pub use guard::GuardRule;
pub use line::{first_blocker, squares_between};
pub use palace::{in_palace, palace_bounds};
pub use rook::RookRule;

use super::{Board, IllegalMove, Move, PieceKind};

/// A geometric movement rule for one kind of piece.
pub trait MovementRule {
    /// Checks the move, returning the first reason it is illegal.
    fn check(mv: &Move, board: &Board) -> Result<(), IllegalMove>;

    /// Human-readable summary of the rule.
    fn description() -> &'static str;
}

/// Signature shared by every rule's check.
pub type RuleCheck = fn(&Move, &Board) -> Result<(), IllegalMove>;

/// A rule entry in the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// The rule's check.
    pub check: RuleCheck,
    /// The rule's summary.
    pub description: &'static str,
}

impl Rule {
    /// Builds the table entry for a rule type.
    pub fn of<R: MovementRule>() -> Self {
        Self {
            check: R::check,
            description: R::description(),
        }
    }
}

/// Looks up the rule for a piece kind.
///
/// `None` means the kind has no rule yet; the validator treats such moves
/// as illegal.
pub fn rule_for(kind: PieceKind) -> Option<Rule> {
    match kind {
        PieceKind::General => Some(Rule::of::<GeneralRule>()),
        PieceKind::Guard => Some(Rule::of::<GuardRule>()),
        PieceKind::Rook => Some(Rule::of::<RookRule>()),
        PieceKind::Horse | PieceKind::Cannon | PieceKind::Elephant | PieceKind::Soldier => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_rule_table_covers_implemented_kinds() {
        let implemented: Vec<_> = PieceKind::iter()
            .filter(|kind| rule_for(*kind).is_some())
            .collect();
        assert_eq!(
            implemented,
            vec![PieceKind::General, PieceKind::Guard, PieceKind::Rook]
        );
    }

    #[test]
    fn test_rule_entry_carries_description() {
        let rule = rule_for(PieceKind::Guard).unwrap();
        assert!(rule.description.contains("diagonally"));
    }
}
