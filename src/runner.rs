//! Runs scenarios through the validator and tallies the results.

use crate::scenario::{Scenario, ScenarioError, ScenarioSuite};
use derive_getters::Getters;
use derive_new::new;
use serde::Serialize;
use strictly_xiangqi::{Judgement, Move, MoveValidator, rule_for};
use tracing::{info, instrument, warn};

/// Result of running one scenario.
#[derive(Debug, Clone, Serialize, Getters, new)]
pub struct ScenarioOutcome {
    /// Scenario title.
    name: String,
    /// The move as judged, e.g. `"Red Rook (4, 1) -> (4, 9)"`.
    move_label: String,
    /// Expected legality.
    expected_legal: bool,
    /// Judged legality.
    legal: bool,
    /// Rejection reason when judged illegal.
    reason: Option<String>,
    /// Expected win, when the scenario specifies one.
    expected_win: Option<bool>,
    /// Whether the move captured the opposing General.
    win: bool,
}

impl ScenarioOutcome {
    /// Whether both verdicts matched expectations.
    pub fn passed(&self) -> bool {
        self.legal == self.expected_legal && self.expected_win.is_none_or(|win| win == self.win)
    }
}

/// Aggregated results for a suite.
#[derive(Debug, Clone, Default, Serialize, Getters)]
pub struct SuiteReport {
    /// Outcomes in suite order.
    outcomes: Vec<ScenarioOutcome>,
}

impl SuiteReport {
    /// Number of scenarios that passed.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of scenarios that failed.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Whether every scenario passed.
    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Renders one line per scenario and a summary.
    #[instrument(skip(self))]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for outcome in &self.outcomes {
            let mark = if outcome.passed() { "PASS" } else { "FAIL" };
            out.push_str(&format!("[{}] {}: {}", mark, outcome.name, outcome.move_label));
            out.push_str(&format!(
                " => {}",
                if outcome.legal { "legal" } else { "illegal" }
            ));
            if let Some(reason) = &outcome.reason {
                out.push_str(&format!(" ({})", reason));
            }
            if outcome.win {
                out.push_str(", wins");
            }
            if !outcome.passed() {
                out.push_str(&format!(
                    "; expected {}",
                    if outcome.expected_legal { "legal" } else { "illegal" }
                ));
                if let Some(win) = outcome.expected_win {
                    out.push_str(if win { ", win" } else { ", no win" });
                }
            }
            out.push('\n');
        }
        out.push_str(&format!(
            "{} scenarios: {} passed, {} failed\n",
            self.outcomes.len(),
            self.passed(),
            self.failed()
        ));
        out
    }

    /// Renders the report as pretty-printed JSON.
    #[instrument(skip(self))]
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Renders the verdict on a single move, one line per fact.
///
/// Illegal moves carry their reason and the description of the rule that
/// rejected them; a capture of the opposing General adds a final line.
#[instrument(skip(judgement), fields(mv = %mv))]
pub fn render_verdict(mv: &Move, judgement: &Judgement) -> String {
    let mut out = String::new();
    match judgement.legality {
        Ok(()) => out.push_str(&format!("{}: legal\n", mv)),
        Err(reason) => {
            out.push_str(&format!("{}: illegal ({})\n", mv, reason));
            if let Some(rule) = rule_for(mv.kind) {
                out.push_str(&format!("rule: {}\n", rule.description));
            }
        }
    }
    if judgement.is_win() {
        out.push_str(&format!("{} wins immediately\n", mv.color));
    }
    out
}

/// Runs a single scenario.
///
/// Both questions are asked of every scenario, as in the fixture suite the
/// tables come from.
#[instrument(skip(scenario), fields(scenario = %scenario.name()))]
pub fn run_scenario(scenario: &Scenario) -> Result<ScenarioOutcome, ScenarioError> {
    let board = scenario.snapshot()?;
    let mv = scenario.proposal()?;
    let judgement = MoveValidator::judge(&mv, &board);

    let outcome = ScenarioOutcome::new(
        scenario.name().clone(),
        mv.to_string(),
        *scenario.legal(),
        judgement.is_legal(),
        judgement.legality.err().map(|reason| reason.to_string()),
        *scenario.wins(),
        judgement.is_win(),
    );
    if outcome.passed() {
        info!("Scenario passed");
    } else {
        warn!(
            expected_legal = outcome.expected_legal,
            legal = outcome.legal,
            win = outcome.win,
            "Scenario failed"
        );
    }
    Ok(outcome)
}

/// Runs every scenario in a suite.
#[instrument(skip(suite), fields(count = suite.scenarios().len()))]
pub fn run_suite(suite: &ScenarioSuite) -> Result<SuiteReport, ScenarioError> {
    let outcomes = suite
        .scenarios()
        .iter()
        .map(run_scenario)
        .collect::<Result<Vec<_>, _>>()?;
    let report = SuiteReport { outcomes };
    info!(
        passed = report.passed(),
        failed = report.failed(),
        "Suite finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_xiangqi::{Board, Color, Piece, PieceKind, Position};

    const RED_GENERAL: Piece = Piece::new(PieceKind::General, Color::Red);
    const BLACK_GENERAL: Piece = Piece::new(PieceKind::General, Color::Black);

    fn verdict(mv: Move, board: &Board) -> String {
        render_verdict(&mv, &MoveValidator::judge(&mv, board))
    }

    #[test]
    fn test_verdict_for_facing_generals() {
        let board = Board::new()
            .with(Position::new(1, 5), RED_GENERAL)
            .with(Position::new(10, 5), BLACK_GENERAL);
        let mv = Move::new(
            PieceKind::General,
            Color::Red,
            Position::new(1, 5),
            Position::new(2, 5),
        );
        let text = verdict(mv, &board);
        assert_eq!(
            text.lines().next(),
            Some(
                "Red General (1, 5) -> (2, 5): illegal \
                 (Generals would face each other on column 5)"
            )
        );
        assert!(text.contains("rule: General moves one step"), "{text}");
        assert!(!text.contains("wins"), "{text}");
    }

    #[test]
    fn test_verdict_for_legal_move() {
        let board = Board::new().with(Position::new(2, 5), RED_GENERAL);
        let mv = Move::new(
            PieceKind::General,
            Color::Red,
            Position::new(2, 5),
            Position::new(3, 5),
        );
        assert_eq!(verdict(mv, &board), "Red General (2, 5) -> (3, 5): legal\n");
    }

    #[test]
    fn test_verdict_for_capturing_general() {
        let board = Board::new()
            .with(Position::new(9, 1), Piece::new(PieceKind::Rook, Color::Red))
            .with(Position::new(9, 5), BLACK_GENERAL);
        let mv = Move::new(
            PieceKind::Rook,
            Color::Red,
            Position::new(9, 1),
            Position::new(9, 5),
        );
        assert_eq!(
            verdict(mv, &board),
            "Red Rook (9, 1) -> (9, 5): legal\nRed wins immediately\n"
        );
    }

    #[test]
    fn test_verdict_for_unimplemented_piece_has_no_rule_line() {
        let board =
            Board::new().with(Position::new(1, 2), Piece::new(PieceKind::Horse, Color::Red));
        let mv = Move::new(
            PieceKind::Horse,
            Color::Red,
            Position::new(1, 2),
            Position::new(3, 3),
        );
        assert_eq!(
            verdict(mv, &board),
            "Red Horse (1, 2) -> (3, 3): illegal (Horse moves are not implemented)\n"
        );
    }

    #[test]
    fn test_failed_expectation_is_reported() {
        let outcome = ScenarioOutcome::new(
            "wrong".to_string(),
            "Red Rook (4, 1) -> (4, 9)".to_string(),
            false,
            true,
            None,
            None,
            false,
        );
        assert!(!outcome.passed());
        let report = SuiteReport {
            outcomes: vec![outcome],
        };
        assert_eq!(report.failed(), 1);
        assert!(report.render_text().contains("[FAIL] wrong"));
    }

    #[test]
    fn test_unspecified_win_is_not_checked() {
        let outcome = ScenarioOutcome::new(
            "capture".to_string(),
            "Red Rook (9, 1) -> (9, 5)".to_string(),
            true,
            true,
            None,
            None,
            true,
        );
        assert!(outcome.passed());
    }
}
