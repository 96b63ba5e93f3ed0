//! Power statement dimensions: Clarity, Impact, Action, Specificity (25 points each).

use crate::detectors::{
    detect_action_verbs, detect_clarity, detect_format, detect_impact, detect_specificity,
};
use crate::explain::Explain;
use crate::patterns::PatternRegistry;
use crate::text;
use crate::types::{DimensionResult, DocumentBonus};

use super::{Dimension, DimensionSpec, Note, ScoreCard};

pub const CLARITY: DimensionSpec = DimensionSpec {
    name: "Clarity",
    max_points: 25,
    description: "Readable length, short sentences, no jargon",
};

pub const IMPACT: DimensionSpec = DimensionSpec {
    name: "Impact",
    max_points: 25,
    description: "Quantified results tied to business outcomes",
};

pub const ACTION: DimensionSpec = DimensionSpec {
    name: "Action",
    max_points: 25,
    description: "Strong, active verbs with clear ownership",
};

pub const SPECIFICITY: DimensionSpec = DimensionSpec {
    name: "Specificity",
    max_points: 25,
    description: "Numbers, names and scope instead of generalities",
};

/// Points for carrying both a concise and a structured rendition.
pub const DUAL_FORMAT_BONUS: u32 = 5;

pub fn score_clarity(text: &str, patterns: &PatternRegistry) -> DimensionResult {
    let s = detect_clarity(text, patterns);
    let mut card = ScoreCard::new(CLARITY.max_points);
    let words = s.word_count;

    card.ladder()
        .tier((20..=150).contains(&words), 8, Note::strength("Concise length"))
        .tier(
            (10..20).contains(&words),
            5,
            Note::issue("A little short; add the result and its scale"),
        )
        .tier(
            (151..=300).contains(&words),
            5,
            Note::issue("A little long; tighten to under 150 words"),
        )
        .tier(
            words > 0,
            2,
            Note::issue("Length is far outside the 20-150 word range"),
        )
        .otherwise(Note::issue("No readable text"));

    card.ladder()
        .tier(
            s.sentence_count > 0 && s.average_sentence_words <= 20.0 && s.long_sentence_count == 0,
            8,
            Note::strength("Sentences are easy to read"),
        )
        .tier(
            s.sentence_count > 0 && s.average_sentence_words <= 25.0,
            5,
            Note::issue("Shorten sentences to about 20 words"),
        )
        .tier(
            s.sentence_count > 0,
            2,
            Note::issue(format!(
                "Break up long sentences (average {:.0} words)",
                s.average_sentence_words
            )),
        )
        .otherwise(Note::issue("No complete sentences"));

    let jargon = s.jargon_terms.len();
    card.ladder()
        .tier(words == 0, 0, Note::Silent)
        .tier(jargon == 0, 9, Note::strength("Plain language, no jargon"))
        .tier(
            jargon == 1,
            6,
            Note::issue(format!("Replace jargon: {}", s.jargon_terms.join(", "))),
        )
        .tier(
            jargon <= 3,
            3,
            Note::issue(format!("Replace jargon: {}", s.jargon_terms.join(", "))),
        )
        .otherwise(Note::issue(format!(
            "Heavy jargon ({} terms); use plain words",
            jargon
        )));

    let filler_penalty = match s.filler_count {
        0..=2 => 0,
        3..=4 => 1,
        _ => 3,
    };
    card.penalty(
        filler_penalty,
        3,
        format!("Cut filler words ({} found)", s.filler_count),
    );

    card.finish()
}

pub fn score_impact(text: &str, patterns: &PatternRegistry) -> DimensionResult {
    let s = detect_impact(text, patterns);
    let mut card = ScoreCard::new(IMPACT.max_points);

    card.ladder()
        .tier(s.metric_count >= 3, 10, Note::strength("Impact is well quantified"))
        .tier(
            s.metric_count == 2,
            8,
            Note::strength("Impact is quantified"),
        )
        .tier(
            s.metric_count == 1,
            5,
            Note::issue("Add another metric to show the size of the result"),
        )
        .otherwise(Note::issue(
            "Quantify the impact (%, $, time saved, users reached)",
        ));

    card.ladder()
        .tier(
            s.impact_term_count >= 3,
            8,
            Note::strength("Tied to business outcomes"),
        )
        .tier(
            s.impact_term_count >= 1,
            5,
            Note::issue("Tie the result to more business outcomes (revenue, cost, customers)"),
        )
        .otherwise(Note::issue(
            "No business outcome: say what changed for customers or the business",
        ));

    card.ladder()
        .tier(
            s.outcome_connector_count > 0,
            5,
            Note::strength("Actions connected to results"),
        )
        .otherwise(Note::issue(
            "Connect the action to its result ('resulting in ...', 'which cut ...')",
        ));

    card.bonus(s.has_timeframe, 2, "Timeframe given");

    card.finish()
}

const WEAK_VERB_PENALTY: u32 = 2;
const WEAK_VERB_CAP: u32 = 6;

pub fn score_action(text: &str, patterns: &PatternRegistry) -> DimensionResult {
    let s = detect_action_verbs(text, patterns);
    let mut card = ScoreCard::new(ACTION.max_points);
    let has_words = text::word_count(text) > 0;

    card.ladder()
        .tier(
            s.starts_with_strong_verb,
            8,
            Note::strength("Opens with a strong action verb"),
        )
        .tier(
            s.strong_verb_in_first_sentence,
            5,
            Note::issue("Lead with the action verb instead of burying it"),
        )
        .otherwise(Note::issue(
            "Open with a strong action verb (Led, Built, Delivered)",
        ));

    card.ladder()
        .tier(s.strong_verb_count >= 4, 10, Note::strength("Consistently strong verbs"))
        .tier(s.strong_verb_count >= 2, 7, Note::strength("Strong verbs used"))
        .tier(
            s.strong_verb_count == 1,
            4,
            Note::issue("Use more strong action verbs"),
        )
        .otherwise(Note::issue(
            "No strong action verbs: say what you led, built or delivered",
        ));

    card.ladder()
        .tier(has_words && s.passive_count == 0, 5, Note::strength("Active voice"))
        .tier(
            has_words && s.passive_count == 1,
            3,
            Note::issue("Rewrite the passive construction in active voice"),
        )
        .tier(
            has_words,
            0,
            Note::issue(format!(
                "Rewrite {} passive constructions in active voice",
                s.passive_count
            )),
        )
        .otherwise(Note::Silent);

    let mut weak = s.weak_verbs.clone();
    weak.sort();
    weak.dedup();
    card.penalty(
        s.weak_verbs.len() as u32 * WEAK_VERB_PENALTY,
        WEAK_VERB_CAP,
        format!("Replace weak verbs ({}) with strong ones", weak.join(", ")),
    );

    card.bonus(s.has_ownership, 2, "Clear ownership");

    card.finish()
}

pub fn score_specificity(text: &str, patterns: &PatternRegistry) -> DimensionResult {
    let s = detect_specificity(text, patterns);
    let mut card = ScoreCard::new(SPECIFICITY.max_points);

    card.ladder()
        .tier(s.number_count >= 3, 8, Note::strength("Concrete numbers"))
        .tier(
            s.number_count >= 1,
            5,
            Note::issue("Add more concrete numbers"),
        )
        .otherwise(Note::issue("No numbers: add counts, amounts or durations"));

    let named = s.named_entities.len();
    card.ladder()
        .tier(named >= 3, 7, Note::strength("Names products, tools or customers"))
        .tier(
            named >= 1,
            4,
            Note::issue("Name more of the products, tools or customers involved"),
        )
        .otherwise(Note::issue(
            "Name the products, tools, customers or teams involved",
        ));

    card.ladder()
        .tier(s.scope_count >= 2, 7, Note::strength("Scope is explicit"))
        .tier(
            s.scope_count == 1,
            4,
            Note::issue("Clarify the scope further (team size, users, regions)"),
        )
        .otherwise(Note::issue(
            "State the scope (team size, users, regions)",
        ));

    card.penalty(
        s.vague_quantifier_count as u32,
        4,
        format!(
            "Replace {} vague quantifiers (many, significant) with numbers",
            s.vague_quantifier_count
        ),
    );

    card.bonus(s.has_from_to, 2, "Shows before and after");
    card.bonus(s.has_timeframe, 1, "Timeframe given");

    card.finish()
}

/// Rubric-level bonus for carrying both a concise and a structured rendition.
pub fn dual_format_bonus(text: &str, patterns: &PatternRegistry) -> Option<DocumentBonus> {
    let format = detect_format(text, patterns);
    format.is_dual_format().then(|| DocumentBonus {
        name: "dual-format".to_string(),
        points: DUAL_FORMAT_BONUS,
        reason: "Includes both a concise and a structured version".to_string(),
    })
}

pub struct ClarityDimension;

impl Dimension for ClarityDimension {
    fn spec(&self) -> DimensionSpec {
        CLARITY
    }

    fn score(&self, text: &str, patterns: &PatternRegistry) -> DimensionResult {
        score_clarity(text, patterns)
    }

    fn explain(&self, text: &str, patterns: &PatternRegistry) -> Vec<String> {
        detect_clarity(text, patterns).indicators()
    }
}

pub struct ImpactDimension;

impl Dimension for ImpactDimension {
    fn spec(&self) -> DimensionSpec {
        IMPACT
    }

    fn score(&self, text: &str, patterns: &PatternRegistry) -> DimensionResult {
        score_impact(text, patterns)
    }

    fn explain(&self, text: &str, patterns: &PatternRegistry) -> Vec<String> {
        detect_impact(text, patterns).indicators()
    }
}

pub struct ActionDimension;

impl Dimension for ActionDimension {
    fn spec(&self) -> DimensionSpec {
        ACTION
    }

    fn score(&self, text: &str, patterns: &PatternRegistry) -> DimensionResult {
        score_action(text, patterns)
    }

    fn explain(&self, text: &str, patterns: &PatternRegistry) -> Vec<String> {
        detect_action_verbs(text, patterns).indicators()
    }
}

pub struct SpecificityDimension;

impl Dimension for SpecificityDimension {
    fn spec(&self) -> DimensionSpec {
        SPECIFICITY
    }

    fn score(&self, text: &str, patterns: &PatternRegistry) -> DimensionResult {
        score_specificity(text, patterns)
    }

    fn explain(&self, text: &str, patterns: &PatternRegistry) -> Vec<String> {
        let mut indicators = detect_specificity(text, patterns).indicators();
        indicators.extend(detect_format(text, patterns).indicators());
        indicators
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static PatternRegistry {
        PatternRegistry::shared()
    }

    const STRONG: &str = "Led a team of 12 engineers to rebuild the Checkout service on AWS, \
        resulting in a 35% lift in conversion and $2M in new revenue within six months. \
        Cut page latency from 900 ms to 250 ms across 4 regions.";

    #[test]
    fn test_strong_statement_scores_high() {
        let r = registry();
        assert!(score_impact(STRONG, r).score >= 20);
        assert!(score_action(STRONG, r).score >= 15);
        assert!(score_specificity(STRONG, r).score >= 20);
        assert!(score_clarity(STRONG, r).score >= 20);
    }

    #[test]
    fn test_weak_verbs_penalised() {
        let r = registry();
        let weak = score_action("Helped the team and assisted with the launch.", r);
        assert!(weak.issues.iter().any(|i| i.starts_with("Replace weak verbs")));
        assert!(weak.score < score_action("Led the team and launched the product.", r).score);
    }

    #[test]
    fn test_jargon_reported() {
        let result = score_clarity(
            "We leverage synergy to move the needle with best-in-class bandwidth across the organisation today.",
            registry(),
        );
        assert!(result.issues.iter().any(|i| i.contains("jargon")));
    }

    #[test]
    fn test_vague_quantifiers_penalised() {
        let r = registry();
        let vague = score_specificity("Improved many things for numerous customers with significant gains.", r);
        assert!(vague.issues.iter().any(|i| i.contains("vague quantifiers")));
    }

    #[test]
    fn test_dual_format_bonus() {
        let text = "## Concise Version\nLed the launch.\n\n## Structured Version\n- Challenge: churn\n- Action: rebuilt onboarding\n- Result: churn down 20%\n";
        let bonus = dual_format_bonus(text, registry()).unwrap();
        assert_eq!(bonus.points, DUAL_FORMAT_BONUS);
        assert!(dual_format_bonus("Led the launch.", registry()).is_none());
    }

    #[test]
    fn test_empty_scores_zero_everywhere() {
        let r = registry();
        for result in [
            score_clarity("", r),
            score_impact("", r),
            score_action("", r),
            score_specificity("", r),
        ] {
            assert_eq!(result.score, 0);
        }
    }

    #[test]
    fn test_punctuation_only_earns_no_active_voice() {
        let result = score_action("... !? --", registry());
        assert_eq!(result.score, 0);
        assert!(!result.strengths.iter().any(|s| s == "Active voice"));
    }
}
