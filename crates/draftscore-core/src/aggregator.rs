//! Aggregator: turns raw text into a bounded, explainable score.
//!
//! The aggregator applies the same policy to every rubric:
//! 1. Missing or blank text → every dimension 0 with "No content to validate"
//! 2. Otherwise score every dimension independently, in rubric order
//! 3. Subtract the slop deduction, add the rubric's document bonus
//! 4. Clamp the total to `0..=score_ceiling`
//!
//! Adding a rubric never requires changing this module.

use serde::Serialize;

use crate::patterns::PatternRegistry;
use crate::rubric::Rubric;
use crate::slop::detect_slop;
use crate::types::{
    DimensionResult, DimensionScore, SlopPenalty, ValidationResult, NO_CONTENT_ISSUE,
};

/// Indicators for one dimension, as shown by `--explain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionExplanation {
    pub name: &'static str,
    pub indicators: Vec<String>,
}

/// Score `text` against `rubric`.
///
/// Never fails: any input, including `None`, yields a result whose total is
/// within `0..=rubric.score_ceiling()`.
pub fn validate(
    text: Option<&str>,
    rubric: &Rubric,
    patterns: &PatternRegistry,
) -> ValidationResult {
    let text = match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return no_content(rubric),
    };

    let dimensions: Vec<DimensionScore> = rubric
        .dimensions()
        .iter()
        .enumerate()
        .map(|(index, dimension)| DimensionScore {
            name: dimension.name().to_string(),
            position: index + 1,
            result: dimension.score(text, patterns),
        })
        .collect();

    let slop_penalty = detect_slop(text, patterns).into_penalty();
    let document_bonus = rubric.document_bonus(text, patterns);

    let sum: i64 = dimensions.iter().map(|d| i64::from(d.result.score)).sum();
    let bonus = document_bonus.as_ref().map_or(0, |b| b.points);
    let total = sum - i64::from(slop_penalty.amount) + i64::from(bonus);
    let total_score = total.clamp(0, i64::from(rubric.score_ceiling())) as u32;

    let mut issues: Vec<String> = dimensions
        .iter()
        .flat_map(|d| d.result.issues.iter().cloned())
        .collect();
    issues.extend(slop_penalty.issues.iter().cloned());

    let mut strengths: Vec<String> = dimensions
        .iter()
        .flat_map(|d| d.result.strengths.iter().cloned())
        .collect();
    if let Some(bonus) = &document_bonus {
        strengths.push(bonus.reason.clone());
    }

    tracing::debug!(
        rubric = %rubric.id(),
        total_score,
        dimension_sum = sum,
        slop_deduction = slop_penalty.amount,
        bonus,
        "Validated draft"
    );

    ValidationResult {
        rubric: rubric.id().to_string(),
        total_score,
        total_max: rubric.total_max(),
        dimensions,
        slop_penalty,
        document_bonus,
        issues,
        strengths,
    }
}

fn no_content(rubric: &Rubric) -> ValidationResult {
    tracing::debug!(rubric = %rubric.id(), "No content to validate");

    ValidationResult {
        rubric: rubric.id().to_string(),
        total_score: 0,
        total_max: rubric.total_max(),
        dimensions: rubric
            .dimensions()
            .iter()
            .enumerate()
            .map(|(index, dimension)| DimensionScore {
                name: dimension.name().to_string(),
                position: index + 1,
                result: DimensionResult::no_content(dimension.max_points()),
            })
            .collect(),
        slop_penalty: SlopPenalty::default(),
        document_bonus: None,
        issues: vec![NO_CONTENT_ISSUE.to_string()],
        strengths: Vec::new(),
    }
}

/// Indicator strings for every dimension in rubric order.
pub fn explain_dimensions(
    text: &str,
    rubric: &Rubric,
    patterns: &PatternRegistry,
) -> Vec<DimensionExplanation> {
    rubric
        .dimensions()
        .iter()
        .map(|dimension| DimensionExplanation {
            name: dimension.name(),
            indicators: dimension.explain(text, patterns),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RubricId, SlopSeverity};

    fn registry() -> &'static PatternRegistry {
        PatternRegistry::shared()
    }

    #[test]
    fn test_none_and_blank_are_degenerate() {
        for text in [None, Some(""), Some("   \n\t ")] {
            for id in RubricId::ALL {
                let result = validate(text, Rubric::shared(id), registry());
                assert_eq!(result.total_score, 0);
                assert_eq!(result.total_max, 100);
                assert!(result.is_empty_input());
                assert_eq!(result.dimensions.len(), 4);
                for d in &result.dimensions {
                    assert_eq!(d.result.score, 0);
                    assert_eq!(d.result.issues, vec![NO_CONTENT_ISSUE]);
                }
            }
        }
    }

    #[test]
    fn test_total_is_sum_minus_slop() {
        let text = "## Context\nOur customers wait 9 seconds for search. It is important to \
            note that we need a robust, seamless fix.\n\n## Decision\nWe will adopt \
            Elasticsearch because it scales.";
        let result = validate(Some(text), Rubric::shared(RubricId::Adr), registry());

        let sum: u32 = result.dimensions.iter().map(|d| d.result.score).sum();
        assert!(result.slop_penalty.amount > 0);
        assert_eq!(result.total_score, sum.saturating_sub(result.slop_penalty.amount));
        assert_eq!(result.slop_penalty.severity, SlopSeverity::Low);
    }

    #[test]
    fn test_issue_order_is_rubric_then_slop() {
        let text = "We should perhaps leverage synergy.";
        let result = validate(Some(text), Rubric::shared(RubricId::Adr), registry());
        let last = result.issues.last().unwrap();
        assert!(result.slop_penalty.issues.contains(last));
        assert_eq!(result.issues[0], result.dimensions[0].result.issues[0]);
    }

    #[test]
    fn test_positions_are_one_based() {
        let result = validate(
            Some("Led the launch."),
            Rubric::shared(RubricId::PowerStatement),
            registry(),
        );
        assert_eq!(result.dimensions[0].position, 1);
        assert_eq!(result.dimension_at(3), result.dimension("action"));
        assert!(result.dimension_at(0).is_none());
    }

    #[test]
    fn test_dual_format_bonus_is_added() {
        let concise = "Led a team of 8 engineers to rebuild checkout, resulting in a 20% lift in conversion.";
        let dual = format!(
            "## Concise Version\n{}\n\n## Structured Version\n- Challenge: checkout conversion lagged\n- Action: rebuilt checkout\n- Result: 20% lift in conversion\n",
            concise
        );
        let rubric = Rubric::shared(RubricId::PowerStatement);
        let result = validate(Some(&dual), rubric, registry());
        let bonus = result.document_bonus.as_ref().unwrap();
        assert_eq!(bonus.points, 5);
        assert!(result.strengths.contains(&bonus.reason));

        let sum: u32 = result.dimensions.iter().map(|d| d.result.score).sum();
        let expected = (sum + bonus.points).saturating_sub(result.slop_penalty.amount).min(100);
        assert_eq!(result.total_score, expected);
        assert!(validate(Some(concise), rubric, registry()).document_bonus.is_none());
    }

    #[test]
    fn test_bonus_total_is_clamped_to_ceiling() {
        let dual = "## Concise Version\n\
            Led a team of 12 engineers to rebuild the Checkout service on AWS, resulting in a 35% \
            lift in conversion and $2M in new revenue within six months.\n\n\
            ## Structured Version\n\
            - Challenge: checkout latency hurt sales for 40,000 customers across 4 regions.\n\
            - Action: owned the rollout, built a new Stripe flow and cut latency from 900 ms to 250 ms.\n\
            - Result: grew revenue by $2M and cut costs by 18%.\n";
        let result = validate(Some(dual), Rubric::shared(RubricId::PowerStatement), registry());

        let sum: u32 = result.dimensions.iter().map(|d| d.result.score).sum();
        assert!(sum > 95, "dimension sum {}", sum);
        assert_eq!(result.slop_penalty.amount, 0);
        assert_eq!(result.document_bonus.as_ref().map(|b| b.points), Some(5));
        assert_eq!(result.total_score, 100);
    }

    #[test]
    fn test_custom_rubric_needs_no_builtin_id() {
        use crate::scoring::{ClarityDimension, ImpactDimension};

        let rubric = Rubric::new(
            "brief",
            "Brief",
            vec![Box::new(ClarityDimension), Box::new(ImpactDimension)],
            50,
        )
        .unwrap();
        let result = validate(Some("Cut costs by 20% in Q3."), &rubric, registry());
        assert_eq!(result.rubric, "brief");
        assert_eq!(result.total_max, 50);
        assert!(result.total_score <= 50);
        assert_eq!(result.report().rubric, "brief");
    }

    #[test]
    fn test_explain_lists_every_dimension() {
        let explanations = explain_dimensions(
            "## Status\nAccepted",
            Rubric::shared(RubricId::Adr),
            registry(),
        );
        let names: Vec<&str> = explanations.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Context", "Decision", "Consequences", "Status"]);
        assert!(explanations[3].indicators.contains(&"Status heading".to_string()));
    }
}
