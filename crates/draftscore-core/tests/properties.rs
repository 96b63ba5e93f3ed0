use draftscore_core::scoring::{score_impact, score_status};
use draftscore_core::{
    detect_slop, validate, PatternRegistry, Rubric, RubricId, SlopSeverity, NO_CONTENT_ISSUE,
};
use proptest::prelude::*;

fn rubric_id() -> impl Strategy<Value = RubricId> {
    prop_oneof![Just(RubricId::Adr), Just(RubricId::PowerStatement)]
}

proptest! {
    #[test]
    fn dimension_scores_stay_in_range(text in ".{0,400}", id in rubric_id()) {
        let result = validate(Some(&text), Rubric::shared(id), PatternRegistry::shared());
        for d in &result.dimensions {
            prop_assert!(
                d.result.score <= d.result.max_score,
                "{} scored {} of {}", d.name, d.result.score, d.result.max_score
            );
        }
    }

    #[test]
    fn total_never_exceeds_one_hundred(text in ".{0,400}", id in rubric_id()) {
        let result = validate(Some(&text), Rubric::shared(id), PatternRegistry::shared());
        prop_assert!(result.total_score <= 100);
        prop_assert!(result.slop_penalty.amount <= 5);
    }

    #[test]
    fn validation_is_deterministic(text in ".{0,300}", id in rubric_id()) {
        let rubric = Rubric::shared(id);
        let patterns = PatternRegistry::shared();
        prop_assert_eq!(
            validate(Some(&text), rubric, patterns),
            validate(Some(&text), rubric, patterns)
        );
    }

    #[test]
    fn blank_text_is_empty_input(text in "[ \t\r\n]{0,20}", id in rubric_id()) {
        let result = validate(Some(&text), Rubric::shared(id), PatternRegistry::shared());
        prop_assert_eq!(result.total_score, 0);
        prop_assert_eq!(result.issues.clone(), vec![NO_CONTENT_ISSUE.to_string()]);
        prop_assert!(result.dimensions.iter().all(|d| d.result.score == 0));
    }

    #[test]
    fn adding_a_status_section_never_lowers_status(text in "[a-zA-Z ,.\n]{0,300}") {
        let patterns = PatternRegistry::shared();
        let before = score_status(&text, patterns).score;
        let after = score_status(&format!("{}\n\n## Status\nAccepted\n", text), patterns).score;
        prop_assert!(after >= before, "{} -> {}", before, after);
    }

    #[test]
    fn adding_metrics_never_lowers_impact(text in "[a-zA-Z ,.]{0,300}") {
        let patterns = PatternRegistry::shared();
        let before = score_impact(&text, patterns).score;
        let after = score_impact(&format!("{} 40% faster for 3 users", text), patterns).score;
        prop_assert!(after >= before, "{} -> {}", before, after);
    }

    #[test]
    fn slop_severity_tracks_penalty(text in ".{0,300}") {
        let report = detect_slop(&text, PatternRegistry::shared());
        prop_assert_eq!(report.severity, SlopSeverity::from_penalty(report.penalty));
        prop_assert!(report.deduction() <= 5);
        prop_assert_eq!(report.penalty == 0, report.issues.is_empty());
    }
}
