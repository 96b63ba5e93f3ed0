//! Indicator text derived from detector signals.
//!
//! Indicators are the audit trail shown to the author ("Found 3 business
//! terms"). They are never read by a scorer.

use crate::detectors::{
    ActionSignal, ClaritySignal, ConsequencesSignal, ContextSignal, DecisionSignal, FormatSignal,
    ImpactSignal, SpecificitySignal, StatusSignal,
};

/// Derive human-readable indicators from a signal.
pub trait Explain {
    fn indicators(&self) -> Vec<String>;
}

/// Keep the messages whose condition holds.
fn collect(pairs: Vec<(bool, String)>) -> Vec<String> {
    pairs
        .into_iter()
        .filter_map(|(condition, message)| condition.then_some(message))
        .collect()
}

impl Explain for ContextSignal {
    fn indicators(&self) -> Vec<String> {
        collect(vec![
            (self.has_context_heading, "Context heading".to_string()),
            (self.has_context_lead, "Context lead-in label".to_string()),
            (
                self.context_term_count > 0,
                format!("{} problem-framing terms", self.context_term_count),
            ),
            (
                self.business_term_count > 0,
                format!("{} business-focus terms", self.business_term_count),
            ),
            (self.constraint_count > 0, format!("{} constraints", self.constraint_count)),
            (self.requirement_count > 0, format!("{} requirements", self.requirement_count)),
            (
                self.quantified_count > 0,
                format!("{} quantified facts", self.quantified_count),
            ),
            (self.has_cross_reference, "Cross-references to related records".to_string()),
        ])
    }
}

impl Explain for DecisionSignal {
    fn indicators(&self) -> Vec<String> {
        collect(vec![
            (self.has_decision_heading, "Decision heading".to_string()),
            (
                self.has_decision_language(),
                format!("{} decision statements", self.decision_phrase_count),
            ),
            (
                !self.vague_phrases.is_empty(),
                format!("Vague phrasing: {}", self.vague_phrases.join(", ")),
            ),
            (self.has_options_heading, "Options heading".to_string()),
            (
                self.alternative_count > 0,
                format!("{} alternative references", self.alternative_count),
            ),
            (
                self.rationale_count > 0,
                format!("{} rationale markers", self.rationale_count),
            ),
            (self.has_tradeoff, "Trade-offs discussed".to_string()),
            (self.has_y_statement, "MADR Y-statement".to_string()),
        ])
    }
}

impl Explain for ConsequencesSignal {
    fn indicators(&self) -> Vec<String> {
        collect(vec![
            (self.has_consequences_heading, "Consequences heading".to_string()),
            (
                self.positive_count > 0,
                format!("{} positive consequences", self.positive_count),
            ),
            (
                self.negative_count > 0,
                format!("{} negative consequences", self.negative_count),
            ),
            (self.has_both_polarities(), "Balanced positive and negative".to_string()),
            (
                !self.vague_terms.is_empty(),
                format!("{} vague consequence terms", self.vague_terms.len()),
            ),
            (
                self.operational_count > 0,
                format!("{} operational-impact terms", self.operational_count),
            ),
            (self.has_subsections, "Positive/negative subsections".to_string()),
            (self.has_mitigation, "Mitigations described".to_string()),
        ])
    }
}

impl Explain for StatusSignal {
    fn indicators(&self) -> Vec<String> {
        collect(vec![
            (self.has_status_heading, "Status heading".to_string()),
            (self.has_status_lead, "Status label".to_string()),
            (
                self.has_status_value(),
                format!("Status: {}", self.status_values.join(", ")),
            ),
            (self.has_date, "Dated".to_string()),
            (self.has_deciders, "Deciders named".to_string()),
            (self.has_supersession, "Links to related records".to_string()),
            (
                self.section_count > 0,
                format!("{} standard sections", self.section_count),
            ),
        ])
    }
}

impl Explain for ClaritySignal {
    fn indicators(&self) -> Vec<String> {
        collect(vec![
            (self.word_count > 0, format!("{} words", self.word_count)),
            (
                self.sentence_count > 0,
                format!("{:.1} words per sentence", self.average_sentence_words),
            ),
            (
                self.long_sentence_count > 0,
                format!("{} long sentences", self.long_sentence_count),
            ),
            (
                !self.jargon_terms.is_empty(),
                format!("Jargon: {}", self.jargon_terms.join(", ")),
            ),
            (self.filler_count > 0, format!("{} filler words", self.filler_count)),
        ])
    }
}

impl Explain for ImpactSignal {
    fn indicators(&self) -> Vec<String> {
        collect(vec![
            (self.metric_count > 0, format!("{} metrics", self.metric_count)),
            (
                self.impact_term_count > 0,
                format!("{} business-outcome terms", self.impact_term_count),
            ),
            (
                self.outcome_connector_count > 0,
                "Actions linked to results".to_string(),
            ),
            (self.has_timeframe, "Timeframe given".to_string()),
        ])
    }
}

impl Explain for ActionSignal {
    fn indicators(&self) -> Vec<String> {
        collect(vec![
            (self.starts_with_strong_verb, "Opens with a strong verb".to_string()),
            (
                self.strong_verb_count > 0,
                format!("{} strong verbs", self.strong_verb_count),
            ),
            (
                !self.weak_verbs.is_empty(),
                format!("Weak verbs: {}", self.weak_verbs.join(", ")),
            ),
            (
                self.passive_count > 0,
                format!("{} passive constructions", self.passive_count),
            ),
            (self.has_ownership, "Ownership language".to_string()),
        ])
    }
}

impl Explain for SpecificitySignal {
    fn indicators(&self) -> Vec<String> {
        collect(vec![
            (self.number_count > 0, format!("{} numbers", self.number_count)),
            (
                !self.named_entities.is_empty(),
                format!("Named: {}", self.named_entities.join(", ")),
            ),
            (self.scope_count > 0, format!("{} scope markers", self.scope_count)),
            (
                self.vague_quantifier_count > 0,
                format!("{} vague quantifiers", self.vague_quantifier_count),
            ),
            (self.has_from_to, "Before/after comparison".to_string()),
            (self.has_timeframe, "Timeframe given".to_string()),
        ])
    }
}

impl Explain for FormatSignal {
    fn indicators(&self) -> Vec<String> {
        collect(vec![
            (self.has_concise_version, "Concise version".to_string()),
            (self.has_structured_version, "Structured version".to_string()),
            (self.bullet_count > 0, format!("{} bullet lines", self.bullet_count)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detectors::{detect_consequences, detect_context};
    use crate::patterns::PatternRegistry;

    #[test]
    fn test_default_signals_have_no_indicators() {
        assert!(ContextSignal::default().indicators().is_empty());
        assert!(DecisionSignal::default().indicators().is_empty());
        assert!(ClaritySignal::default().indicators().is_empty());
        assert!(FormatSignal::default().indicators().is_empty());
    }

    #[test]
    fn test_indicators_follow_signal() {
        let signal = detect_consequences(
            "## Consequences\nFaster builds, but a steeper learning curve.",
            PatternRegistry::shared(),
        );
        let indicators = signal.indicators();
        assert!(indicators.contains(&"Consequences heading".to_string()));
        assert!(indicators.contains(&"Balanced positive and negative".to_string()));
    }

    #[test]
    fn test_context_indicator_counts() {
        let signal = detect_context("Context: customers churn.", PatternRegistry::shared());
        let indicators = signal.indicators();
        assert_eq!(indicators[0], "Context lead-in label");
        assert!(indicators.contains(&"1 business-focus terms".to_string()));
    }
}
