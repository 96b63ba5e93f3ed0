//! Dimension scorers.
//!
//! A scorer turns one dimension's detector signals into a bounded point value
//! plus explanations. Every scorer follows the same shape:
//!
//! 1. Call each relevant detector once.
//! 2. Walk a [`Ladder`] per core check. Tiers are listed most specific first
//!    and the first qualifying tier wins; `otherwise` closes the ladder so
//!    every signal combination lands on exactly one tier.
//! 3. Subtract anti-pattern penalties.
//! 4. Add small, individually capped secondary bonuses.
//! 5. Clamp to `0..=max_points`.
//!
//! Scorers are independent: none reads another's result.

pub mod adr;
pub mod power;

pub use adr::{
    score_consequences, score_context, score_decision, score_status, ConsequencesDimension,
    ContextDimension, DecisionDimension, StatusDimension,
};
pub use power::{
    score_action, score_clarity, score_impact, score_specificity, ActionDimension,
    ClarityDimension, ImpactDimension, SpecificityDimension,
};

use serde::Serialize;

use crate::patterns::PatternRegistry;
use crate::types::DimensionResult;

/// Static description of one rubric dimension.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DimensionSpec {
    pub name: &'static str,
    pub max_points: u32,
    pub description: &'static str,
}

/// Trait implemented by every dimension scorer.
pub trait Dimension: Send + Sync {
    fn spec(&self) -> DimensionSpec;

    fn name(&self) -> &'static str {
        self.spec().name
    }

    fn max_points(&self) -> u32 {
        self.spec().max_points
    }

    /// Score the text. Never fails; the result is within `0..=max_points`.
    fn score(&self, text: &str, patterns: &PatternRegistry) -> DimensionResult;

    /// Indicator strings for the signals this dimension reads.
    fn explain(&self, text: &str, patterns: &PatternRegistry) -> Vec<String>;
}

/// Accumulates points and messages for one dimension.
#[derive(Debug)]
pub struct ScoreCard {
    max_points: u32,
    points: i64,
    issues: Vec<String>,
    strengths: Vec<String>,
}

impl ScoreCard {
    pub fn new(max_points: u32) -> Self {
        Self {
            max_points,
            points: 0,
            issues: Vec::new(),
            strengths: Vec::new(),
        }
    }

    /// Start a threshold ladder for one core check.
    pub fn ladder(&mut self) -> Ladder<'_> {
        Ladder {
            card: self,
            chosen: None,
        }
    }

    /// Subtract `min(amount, cap)` when `amount` is non-zero.
    pub fn penalty(&mut self, amount: u32, cap: u32, issue: impl Into<String>) {
        if amount == 0 {
            return;
        }
        self.points -= i64::from(amount.min(cap));
        self.issues.push(issue.into());
    }

    pub fn bonus(&mut self, earned: bool, points: u32, strength: impl Into<String>) {
        if earned {
            self.points += i64::from(points);
            self.strengths.push(strength.into());
        }
    }

    pub fn issue(&mut self, message: impl Into<String>) {
        self.issues.push(message.into());
    }

    fn apply(&mut self, points: u32, note: Note) {
        self.points += i64::from(points);
        match note {
            Note::Strength(message) => self.strengths.push(message),
            Note::Issue(message) => self.issues.push(message),
            Note::Silent => {}
        }
    }

    /// Clamp to `0..=max_points`.
    pub fn finish(self) -> DimensionResult {
        let score = self.points.clamp(0, i64::from(self.max_points)) as u32;
        DimensionResult {
            score,
            max_score: self.max_points,
            issues: self.issues,
            strengths: self.strengths,
        }
    }
}

/// Message attached to a tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    Strength(String),
    Issue(String),
    Silent,
}

impl Note {
    pub fn strength(message: impl Into<String>) -> Self {
        Note::Strength(message.into())
    }

    pub fn issue(message: impl Into<String>) -> Self {
        Note::Issue(message.into())
    }
}

/// A descending tier table. The first qualifying tier wins.
#[must_use = "a ladder awards nothing until `otherwise` closes it"]
pub struct Ladder<'a> {
    card: &'a mut ScoreCard,
    chosen: Option<(u32, Note)>,
}

impl<'a> Ladder<'a> {
    pub fn tier(mut self, qualifies: bool, points: u32, note: Note) -> Self {
        if self.chosen.is_none() && qualifies {
            self.chosen = Some((points, note));
        }
        self
    }

    /// Close the ladder with the zero-point fallback tier.
    pub fn otherwise(self, note: Note) -> u32 {
        let (points, note) = self.chosen.unwrap_or((0, note));
        self.card.apply(points, note);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_qualifying_tier_wins() {
        let mut card = ScoreCard::new(10);
        let awarded = card
            .ladder()
            .tier(false, 10, Note::strength("top"))
            .tier(true, 6, Note::strength("middle"))
            .tier(true, 3, Note::strength("low"))
            .otherwise(Note::issue("none"));
        assert_eq!(awarded, 6);

        let result = card.finish();
        assert_eq!(result.score, 6);
        assert_eq!(result.strengths, vec!["middle"]);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_otherwise_awards_zero() {
        let mut card = ScoreCard::new(10);
        let awarded = card
            .ladder()
            .tier(false, 10, Note::strength("top"))
            .otherwise(Note::issue("Add something"));
        assert_eq!(awarded, 0);
        assert_eq!(card.finish().issues, vec!["Add something"]);
    }

    #[test]
    fn test_penalty_is_capped_and_score_clamped_at_zero() {
        let mut card = ScoreCard::new(10);
        card.bonus(true, 2, "bonus");
        card.penalty(9, 6, "too vague");
        let result = card.finish();
        assert_eq!(result.score, 0);
        assert_eq!(result.issues, vec!["too vague"]);
    }

    #[test]
    fn test_zero_penalty_adds_no_issue() {
        let mut card = ScoreCard::new(10);
        card.penalty(0, 6, "never shown");
        assert!(card.finish().issues.is_empty());
    }

    #[test]
    fn test_score_clamped_at_max() {
        let mut card = ScoreCard::new(5);
        card.bonus(true, 4, "a");
        card.bonus(true, 4, "b");
        card.bonus(false, 4, "c");
        let result = card.finish();
        assert_eq!(result.score, 5);
        assert_eq!(result.strengths.len(), 2);
    }
}
