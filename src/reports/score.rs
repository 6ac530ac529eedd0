//! Budget health score
//!
//! The score starts at 100 and runs through a fixed, ordered list of rules.
//! Each rule is a pure function of [`ScoreInputs`] returning a deduction and
//! at most one reason. The total is clamped to 0..=100 and bucketed into a
//! letter grade.

use serde::Serialize;
use std::fmt;

use super::aggregate::CategoryAggregate;
use super::ranking::Goal;
use crate::models::{consumption_percentage, Money};

/// Score every dashboard starts from
pub const BASELINE_SCORE: i32 = 100;

/// Most reasons shown with a score
pub const MAX_REASONS: usize = 3;

/// Letter grade bucket of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    /// Inclusive lower bounds, evaluated high to low
    const THRESHOLDS: [(u8, Grade); 4] = [(80, Grade::A), (65, Grade::B), (50, Grade::C), (35, Grade::D)];

    pub fn from_score(score: u8) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::E)
    }

    /// A or B
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::A | Self::B)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        };
        f.write_str(letter)
    }
}

/// Everything the rules look at
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs<'a> {
    /// Goal of the primary group
    pub primary_goal: &'a Goal,
    pub total_spent: Money,
    pub total_budget: Money,
    /// The category highlight set
    pub highlights: &'a [CategoryAggregate],
}

/// What one rule contributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub deduction: u32,
    pub reason: Option<String>,
}

impl RuleOutcome {
    fn deduct(deduction: u32, reason: impl Into<String>) -> Self {
        Self {
            deduction,
            reason: Some(reason.into()),
        }
    }

    fn note(reason: impl Into<String>) -> Self {
        Self::deduct(0, reason)
    }
}

/// A scoring rule
pub type ScoreRule = fn(&ScoreInputs<'_>) -> RuleOutcome;

/// The rules in evaluation order
pub const RULES: &[ScoreRule] = &[primary_group_rule, total_spend_rule, overspend_count_rule];

/// Primary group consumption: over budget, running hot, or fine
pub fn primary_group_rule(inputs: &ScoreInputs<'_>) -> RuleOutcome {
    let goal = inputs.primary_goal;
    let percentage = goal.percentage();

    if percentage > 100.0 {
        RuleOutcome::deduct(15, format!("{} spending is over budget", goal.label))
    } else if percentage > 80.0 {
        RuleOutcome::deduct(8, format!("{} spending is running ahead of pace", goal.label))
    } else {
        RuleOutcome::note(format!("{} spending is within budget", goal.label))
    }
}

/// Total spend against the sum of all budgets
pub fn total_spend_rule(inputs: &ScoreInputs<'_>) -> RuleOutcome {
    let percentage = consumption_percentage(inputs.total_spent, inputs.total_budget);

    if percentage > 70.0 {
        RuleOutcome::deduct(10, "Overall spending is running high")
    } else {
        RuleOutcome::note("Savings are on track")
    }
}

/// Categories of the highlight set that are over budget
///
/// Only the highlight set is considered, so categories ranked below it do
/// not count even when overspent.
pub fn overspend_count_rule(inputs: &ScoreInputs<'_>) -> RuleOutcome {
    let count = inputs
        .highlights
        .iter()
        .filter(|c| c.is_over_budget())
        .count() as u32;

    match count {
        0 => RuleOutcome::note("Fixed costs are under control"),
        1 => RuleOutcome::deduct(5, "1 category is over budget"),
        n => RuleOutcome::deduct(5 * n, format!("{} categories are over budget", n)),
    }
}

/// Score, grade and the reasons behind them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub grade: Grade,
    pub reasons: Vec<String>,
}

impl ScoreResult {
    /// Run `rules` in order against `inputs`
    pub fn evaluate_with(inputs: &ScoreInputs<'_>, rules: &[ScoreRule]) -> Self {
        let mut score = BASELINE_SCORE;
        let mut reasons = Vec::new();

        for rule in rules {
            let outcome = rule(inputs);
            score -= outcome.deduction as i32;
            if let Some(reason) = outcome.reason {
                reasons.push(reason);
            }
        }

        let score = score.clamp(0, 100) as u8;
        reasons.truncate(MAX_REASONS);

        Self {
            score,
            grade: Grade::from_score(score),
            reasons,
        }
    }

    /// Run the standard rule list
    pub fn evaluate(inputs: &ScoreInputs<'_>) -> Self {
        Self::evaluate_with(inputs, RULES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, GoalGroupId, IconTag};

    fn goal(current: i64, target: i64) -> Goal {
        Goal {
            group_id: GoalGroupId::from("food"),
            label: "Food".into(),
            current: Money::from_units(current),
            target: Money::from_units(target),
            days_remaining: 12,
        }
    }

    fn highlight(id: &str, spent: i64, budget: i64) -> CategoryAggregate {
        CategoryAggregate {
            category_id: CategoryId::from(id),
            display_name: id.to_string(),
            icon: IconTag::Other,
            total_spent: Money::from_units(spent),
            budget: Money::from_units(budget),
            percentage: consumption_percentage(Money::from_units(spent), Money::from_units(budget)),
            transaction_count: 1,
            recent_transactions: Vec::new(),
        }
    }

    fn inputs<'a>(goal: &'a Goal, spent: i64, highlights: &'a [CategoryAggregate]) -> ScoreInputs<'a> {
        ScoreInputs {
            primary_goal: goal,
            total_spent: Money::from_units(spent),
            total_budget: Money::from_units(210_000),
            highlights,
        }
    }

    #[test]
    fn test_grade_thresholds() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::A);
        assert_eq!(Grade::from_score(79), Grade::B);
        assert_eq!(Grade::from_score(65), Grade::B);
        assert_eq!(Grade::from_score(64), Grade::C);
        assert_eq!(Grade::from_score(50), Grade::C);
        assert_eq!(Grade::from_score(49), Grade::D);
        assert_eq!(Grade::from_score(35), Grade::D);
        assert_eq!(Grade::from_score(34), Grade::E);
        assert_eq!(Grade::from_score(0), Grade::E);
    }

    #[test]
    fn test_grade_is_monotonic() {
        let mut previous = Grade::E;
        for score in 0..=100u8 {
            let grade = Grade::from_score(score);
            assert!(grade <= previous, "grade rose when score fell at {}", score);
            previous = grade;
        }
    }

    #[test]
    fn test_primary_group_rule_bands() {
        let over = goal(61_000, 60_000);
        let hot = goal(50_000, 60_000);
        let fine = goal(15_350, 60_000);

        assert_eq!(primary_group_rule(&inputs(&over, 0, &[])).deduction, 15);
        assert_eq!(primary_group_rule(&inputs(&hot, 0, &[])).deduction, 8);

        let outcome = primary_group_rule(&inputs(&fine, 0, &[]));
        assert_eq!(outcome.deduction, 0);
        assert_eq!(outcome.reason.as_deref(), Some("Food spending is within budget"));
    }

    #[test]
    fn test_primary_group_rule_boundaries_are_exclusive() {
        // exactly 100% is "running ahead", exactly 80% is still fine
        assert_eq!(primary_group_rule(&inputs(&goal(60_000, 60_000), 0, &[])).deduction, 8);
        assert_eq!(primary_group_rule(&inputs(&goal(48_000, 60_000), 0, &[])).deduction, 0);
    }

    #[test]
    fn test_total_spend_rule() {
        let g = goal(0, 60_000);
        assert_eq!(total_spend_rule(&inputs(&g, 147_000, &[])).deduction, 0);
        assert_eq!(total_spend_rule(&inputs(&g, 147_001, &[])).deduction, 10);
    }

    #[test]
    fn test_overspend_count_rule() {
        let g = goal(0, 60_000);
        let highlights = vec![
            highlight("transport", 18_000, 15_000),
            highlight("entertainment", 30_000, 25_000),
            highlight("food", 100, 50_000),
        ];

        let outcome = overspend_count_rule(&inputs(&g, 0, &highlights));
        assert_eq!(outcome.deduction, 10);
        assert_eq!(outcome.reason.as_deref(), Some("2 categories are over budget"));

        let outcome = overspend_count_rule(&inputs(&g, 0, &highlights[2..]));
        assert_eq!(outcome.deduction, 0);
    }

    #[test]
    fn test_score_is_clamped() {
        let g = goal(100_000, 60_000);
        let highlights: Vec<_> = (0..20)
            .map(|i| highlight(&format!("c{}", i), 200, 100))
            .collect();

        let result = ScoreResult::evaluate(&inputs(&g, 300_000, &highlights));
        assert_eq!(result.score, 0);
        assert_eq!(result.grade, Grade::E);
    }

    #[test]
    fn test_reasons_follow_rule_order_and_are_capped() {
        let g = goal(15_350, 60_000);
        let extra: ScoreRule = |_| RuleOutcome::deduct(1, "extra");
        let rules: Vec<ScoreRule> = vec![
            primary_group_rule,
            total_spend_rule,
            overspend_count_rule,
            extra,
        ];

        let result = ScoreResult::evaluate_with(&inputs(&g, 43_350, &[]), &rules);
        assert_eq!(result.score, 99);
        assert_eq!(
            result.reasons,
            vec![
                "Food spending is within budget",
                "Savings are on track",
                "Fixed costs are under control",
            ]
        );
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(Grade::C.to_string(), "C");
        assert!(Grade::B.is_healthy());
        assert!(!Grade::D.is_healthy());
    }
}
