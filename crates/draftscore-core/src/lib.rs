//! # draftscore-core
//!
//! Deterministic, rule-based scoring engine for structured document drafts.
//!
//! This crate scores a draft against a rubric and answers:
//! - How complete is this draft, dimension by dimension?
//! - What exactly should the author fix next?
//! - Does it read like generic filler?
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same output
//! 2. **No LLM calls**: All scoring is lexical and structural
//! 3. **Bounded**: Every dimension stays within `0..=max`, every total within `0..=100`
//! 4. **Total**: No text input makes scoring fail
//!
//! ## Example
//!
//! ```rust,ignore
//! use draftscore_core::{validate_adr, grade};
//!
//! let result = validate_adr("## Status\nAccepted\n\n## Context\n...");
//! println!("{} ({})", result.total_score, grade(result.total_score));
//! for issue in result.top_issues(5) {
//!     println!("- {}", issue);
//! }
//! ```

pub mod aggregator;
pub mod detectors;
pub mod explain;
pub mod patterns;
pub mod presentation;
pub mod rubric;
pub mod scoring;
pub mod slop;
pub mod text;
pub mod types;

// Re-export main types at crate root
pub use aggregator::{explain_dimensions, validate, DimensionExplanation};
pub use explain::Explain;
pub use patterns::{Pattern, PatternError, PatternRegistry};
pub use presentation::{grade, score_color, score_label, Grade, ScoreColor};
pub use rubric::{BonusFn, Rubric, RubricError};
pub use scoring::{Dimension, DimensionSpec};
pub use slop::{detect_slop, slop_deduction, SlopReport};
pub use types::{
    DimensionResult, DimensionScore, DocumentBonus, RubricId, SlopPenalty, SlopSeverity,
    ValidationReport, ValidationResult, NO_CONTENT_ISSUE,
};

/// Score a draft against a built-in rubric with the shared pattern registry.
pub fn validate_with(id: RubricId, text: &str) -> ValidationResult {
    validate(Some(text), Rubric::shared(id), PatternRegistry::shared())
}

/// Score an Architecture Decision Record.
pub fn validate_adr(text: &str) -> ValidationResult {
    validate_with(RubricId::Adr, text)
}

/// Score a power statement.
pub fn validate_power_statement(text: &str) -> ValidationResult {
    validate_with(RubricId::PowerStatement, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_ADR: &str = r#"# ADR-7: Use PostgreSQL for the order service

## Status
Accepted

Date: 2024-03-14
Deciders: platform team, payments lead

## Context
Our customers report checkout failures during peak sales, and every failure costs revenue.
The current datastore handles 500 requests per second and must scale to 2000 requests per second.
We have budget constraints and a legacy schema.

## Considered Options
- PostgreSQL
- MongoDB
- DynamoDB

## Decision
We will migrate the order service to PostgreSQL because it supports transactions, and since the team already operates it.

## Consequences
- Faster checkout and simpler reporting
- Better data integrity
- Risk of downtime during the cutover
- Migration effort for two sprints and a learning curve for tuning
"#;

    #[test]
    fn test_full_adr_scores_well() {
        let result = validate_adr(FULL_ADR);
        assert!(result.total_score > 60, "got {}", result.total_score);
        assert_eq!(result.slop_penalty.amount, 0);
        for d in &result.dimensions {
            assert!(d.result.score <= d.result.max_score);
        }
    }

    #[test]
    fn test_strong_power_statement() {
        let result = validate_power_statement(
            "Led a team of 12 engineers to rebuild the Checkout service on AWS, resulting in a \
             35% lift in conversion and $2M in new revenue within six months. Cut page latency \
             from 900 ms to 250 ms across 4 regions.",
        );
        assert!(result.total_score >= 70, "got {}", result.total_score);
        assert_eq!(result.grade(), grade(result.total_score));
    }

    #[test]
    fn test_empty_input_for_every_entry_point() {
        for result in [validate_adr(""), validate_power_statement("  \n")] {
            assert_eq!(result.total_score, 0);
            assert!(result.is_empty_input());
        }
    }

    #[test]
    fn test_punctuation_only_statement_scores_zero() {
        let result = validate_power_statement("...");
        assert_eq!(result.total_score, 0);
        assert!(result.strengths.is_empty());
    }

    #[test]
    fn test_report_has_positional_aliases() {
        let result = validate_adr(FULL_ADR);
        let json = serde_json::to_value(result.report()).unwrap();
        assert_eq!(json["dimension1"], json["per_dimension"]["Context"]);
        assert_eq!(json["dimension4"], json["per_dimension"]["Status"]);
        assert_eq!(json["rubric"], "adr");
        assert!(json["grade"].is_string());
    }

    #[test]
    fn test_results_are_deterministic() {
        assert_eq!(validate_adr(FULL_ADR), validate_adr(FULL_ADR));
    }
}
