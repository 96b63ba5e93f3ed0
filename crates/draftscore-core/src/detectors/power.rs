//! Power statement detectors.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::patterns::PatternRegistry;
use crate::text;

/// Sentences longer than this many words count as long.
pub const LONG_SENTENCE_WORDS: usize = 30;

/// Readability signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClaritySignal {
    pub word_count: usize,
    pub sentence_count: usize,
    pub average_sentence_words: f64,
    pub long_sentence_count: usize,
    /// Every jargon occurrence, in document order.
    pub jargon_terms: Vec<String>,
    pub filler_count: usize,
}

pub fn detect_clarity(text: &str, patterns: &PatternRegistry) -> ClaritySignal {
    let p = &patterns.power;
    let sentence_lengths: Vec<usize> = text::sentences(text)
        .into_iter()
        .map(text::word_count)
        .collect();
    let sentence_count = sentence_lengths.len();
    let average_sentence_words = if sentence_count == 0 {
        0.0
    } else {
        sentence_lengths.iter().sum::<usize>() as f64 / sentence_count as f64
    };

    ClaritySignal {
        word_count: text::word_count(text),
        sentence_count,
        average_sentence_words,
        long_sentence_count: sentence_lengths
            .iter()
            .filter(|&&n| n > LONG_SENTENCE_WORDS)
            .count(),
        jargon_terms: p.jargon.matches(text),
        filler_count: p.filler.count(text),
    }
}

/// Outcome and business-result signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImpactSignal {
    pub metric_count: usize,
    pub impact_term_count: usize,
    pub outcome_connector_count: usize,
    pub has_timeframe: bool,
}

pub fn detect_impact(text: &str, patterns: &PatternRegistry) -> ImpactSignal {
    let p = &patterns.power;
    ImpactSignal {
        metric_count: p.metric.count(text),
        impact_term_count: p.impact_terms.count(text),
        outcome_connector_count: p.outcome_connector.count(text),
        has_timeframe: p.timeframe.is_match(text),
    }
}

/// Verb strength signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionSignal {
    /// The first prose word (after an optional "I"/"We") is a strong verb.
    pub starts_with_strong_verb: bool,
    pub strong_verb_in_first_sentence: bool,
    pub strong_verb_count: usize,
    /// Every weak verb occurrence, in document order.
    pub weak_verbs: Vec<String>,
    pub passive_count: usize,
    pub has_ownership: bool,
}

pub fn detect_action_verbs(text: &str, patterns: &PatternRegistry) -> ActionSignal {
    let p = &patterns.power;

    let opening_verb = text::first_prose_line(text).and_then(|line| {
        let words = text::words(line);
        match words.first() {
            Some(first) if first.eq_ignore_ascii_case("i") || first.eq_ignore_ascii_case("we") => {
                words.get(1).copied()
            }
            other => other.copied(),
        }
    });

    ActionSignal {
        starts_with_strong_verb: opening_verb.is_some_and(|word| p.strong_verbs.is_match(word)),
        strong_verb_in_first_sentence: text::sentences(text)
            .first()
            .is_some_and(|sentence| p.strong_verbs.is_match(sentence)),
        strong_verb_count: p.strong_verbs.count(text),
        weak_verbs: p.weak_verbs.matches(text),
        passive_count: p.passive_voice.count(text),
        has_ownership: p.ownership.is_match(text),
    }
}

/// Concreteness signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecificitySignal {
    pub number_count: usize,
    /// Distinct capitalised tokens that do not open a sentence.
    pub named_entities: Vec<String>,
    pub scope_count: usize,
    pub vague_quantifier_count: usize,
    pub has_from_to: bool,
    pub has_timeframe: bool,
}

pub fn detect_specificity(text: &str, patterns: &PatternRegistry) -> SpecificitySignal {
    let p = &patterns.power;

    let named_entities: BTreeSet<String> = text::sentences(text)
        .into_iter()
        .flat_map(|sentence| text::words(sentence).into_iter().skip(1))
        .filter(|word| {
            *word != "I" && word.chars().next().is_some_and(char::is_uppercase)
        })
        .map(str::to_string)
        .collect();

    SpecificitySignal {
        number_count: p.number.count(text),
        named_entities: named_entities.into_iter().collect(),
        scope_count: p.scope.count(text),
        vague_quantifier_count: p.vague_quantifier.count(text),
        has_from_to: p.from_to.is_match(text),
        has_timeframe: p.timeframe.is_match(text),
    }
}

/// Whether the draft carries both a concise and a structured rendition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormatSignal {
    pub has_concise_version: bool,
    pub has_structured_version: bool,
    pub bullet_count: usize,
}

impl FormatSignal {
    pub fn is_dual_format(&self) -> bool {
        self.has_concise_version && self.has_structured_version
    }
}

/// Bullet lines needed before a list counts as a structured rendition.
pub const STRUCTURED_BULLET_MIN: usize = 3;

pub fn detect_format(text: &str, patterns: &PatternRegistry) -> FormatSignal {
    let p = &patterns.power;
    let bullet_count = p.bullet_line.count(text);
    FormatSignal {
        has_concise_version: p.concise_heading.is_match(text),
        has_structured_version: p.structured_heading.is_match(text)
            || bullet_count >= STRUCTURED_BULLET_MIN,
        bullet_count,
    }
}
