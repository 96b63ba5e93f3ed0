//! Architecture Decision Record detectors.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::patterns::PatternRegistry;
use crate::text;

use super::LEAD_IN_WINDOW;

/// Problem framing signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContextSignal {
    pub has_context_heading: bool,
    /// A `Context:` style label near the top of the document.
    pub has_context_lead: bool,
    pub context_term_count: usize,
    pub business_term_count: usize,
    pub constraint_count: usize,
    pub requirement_count: usize,
    pub quantified_count: usize,
    pub has_cross_reference: bool,
    pub bullet_count: usize,
}

impl ContextSignal {
    pub fn has_context_section(&self) -> bool {
        self.has_context_heading || self.has_context_lead
    }

    pub fn has_constraints_and_requirements(&self) -> bool {
        self.constraint_count > 0 && self.requirement_count > 0
    }
}

pub fn detect_context(text: &str, patterns: &PatternRegistry) -> ContextSignal {
    let p = &patterns.adr;
    ContextSignal {
        has_context_heading: p.context_heading.is_match(text),
        has_context_lead: p.context_lead.is_match(text::prefix(text, LEAD_IN_WINDOW)),
        context_term_count: p.context_language.count(text),
        business_term_count: p.business_focus.count(text),
        constraint_count: p.constraint.count(text),
        requirement_count: p.requirement.count(text),
        quantified_count: p.quantified.count(text),
        has_cross_reference: p.cross_reference.is_match(text),
        bullet_count: p.bullet_line.count(text),
    }
}

/// Decision statement signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecisionSignal {
    pub has_decision_heading: bool,
    pub decision_phrase_count: usize,
    /// Distinct vague phrases, sorted.
    pub vague_phrases: Vec<String>,
    pub alternative_count: usize,
    pub has_options_heading: bool,
    pub rationale_count: usize,
    pub has_tradeoff: bool,
    pub has_y_statement: bool,
}

impl DecisionSignal {
    pub fn has_decision_language(&self) -> bool {
        self.decision_phrase_count > 0
    }
}

pub fn detect_decision(text: &str, patterns: &PatternRegistry) -> DecisionSignal {
    let p = &patterns.adr;
    DecisionSignal {
        has_decision_heading: p.decision_heading.is_match(text),
        decision_phrase_count: p.decision_language.count(text),
        vague_phrases: p.vague_decision.distinct_matches(text),
        alternative_count: p.alternatives.count(text),
        has_options_heading: p.options_heading.is_match(text),
        rationale_count: p.rationale.count(text),
        has_tradeoff: p.tradeoff.is_match(text),
        has_y_statement: p.y_statement.is_match(text),
    }
}

/// Consequence coverage signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsequencesSignal {
    pub has_consequences_heading: bool,
    pub consequence_term_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    /// Every vague term occurrence, in document order.
    pub vague_terms: Vec<String>,
    pub operational_count: usize,
    pub has_subsections: bool,
    pub has_mitigation: bool,
}

impl ConsequencesSignal {
    pub fn has_both_polarities(&self) -> bool {
        self.positive_count > 0 && self.negative_count > 0
    }

    pub fn has_any_polarity(&self) -> bool {
        self.positive_count > 0 || self.negative_count > 0
    }
}

pub fn detect_consequences(text: &str, patterns: &PatternRegistry) -> ConsequencesSignal {
    let p = &patterns.adr;
    ConsequencesSignal {
        has_consequences_heading: p.consequences_heading.is_match(text),
        consequence_term_count: p.consequence_language.count(text),
        positive_count: p.positive.count(text),
        negative_count: p.negative.count(text),
        vague_terms: p.vague_consequence.matches(text),
        operational_count: p.operational_impact.count(text),
        has_subsections: p.consequence_subsection.is_match(text),
        has_mitigation: p.mitigation.is_match(text),
    }
}

/// Lifecycle metadata and structural completeness signals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusSignal {
    pub has_status_heading: bool,
    /// `Status:` label at the start of any line.
    pub has_status_lead: bool,
    /// Distinct lifecycle values mentioned (accepted, proposed, ...).
    pub status_values: Vec<String>,
    pub has_date: bool,
    pub has_deciders: bool,
    pub has_supersession: bool,
    /// Distinct recognised section headings.
    pub section_count: usize,
}

impl StatusSignal {
    pub fn has_status_section(&self) -> bool {
        self.has_status_heading || self.has_status_lead
    }

    pub fn has_status_value(&self) -> bool {
        !self.status_values.is_empty()
    }
}

/// "## Considered Options" and "### Option" share one key.
fn section_key(heading: &str) -> String {
    let name = heading.trim_start_matches(|c: char| c == '#' || c.is_whitespace());
    name.strip_prefix("considered ")
        .unwrap_or(name)
        .trim_end_matches('s')
        .to_string()
}

pub fn detect_status(text: &str, patterns: &PatternRegistry) -> StatusSignal {
    let p = &patterns.adr;
    let sections: BTreeSet<String> = p
        .section_heading
        .matches(text)
        .into_iter()
        .map(|heading| section_key(&heading))
        .collect();

    StatusSignal {
        has_status_heading: p.status_heading.is_match(text),
        has_status_lead: p.status_lead.is_match(text),
        status_values: p.status_value.distinct_matches(text),
        has_date: p.date.is_match(text),
        has_deciders: p.deciders.is_match(text),
        has_supersession: p.supersession.is_match(text),
        section_count: sections.len(),
    }
}
