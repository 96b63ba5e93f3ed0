//! ADR dimensions: Context, Decision, Consequences, Status (25 points each).

use crate::detectors::{detect_consequences, detect_context, detect_decision, detect_status};
use crate::explain::Explain;
use crate::patterns::PatternRegistry;
use crate::types::DimensionResult;

use super::{Dimension, DimensionSpec, Note, ScoreCard};

pub const CONTEXT: DimensionSpec = DimensionSpec {
    name: "Context",
    max_points: 25,
    description: "Problem framing, business focus, constraints and quantified facts",
};

pub const DECISION: DimensionSpec = DimensionSpec {
    name: "Decision",
    max_points: 25,
    description: "A concrete decision with alternatives and rationale",
};

pub const CONSEQUENCES: DimensionSpec = DimensionSpec {
    name: "Consequences",
    max_points: 25,
    description: "Balanced positive and negative outcomes, operational impact",
};

pub const STATUS: DimensionSpec = DimensionSpec {
    name: "Status",
    max_points: 25,
    description: "Lifecycle status, date, deciders and document structure",
};

pub fn score_context(text: &str, patterns: &PatternRegistry) -> DimensionResult {
    let s = detect_context(text, patterns);
    let mut card = ScoreCard::new(CONTEXT.max_points);

    card.ladder()
        .tier(s.has_context_heading, 8, Note::strength("Context section present"))
        .tier(
            s.has_context_lead || s.context_term_count >= 2,
            5,
            Note::strength("Problem context described"),
        )
        .tier(
            s.context_term_count >= 1,
            2,
            Note::issue("Context is thin; add a dedicated Context section"),
        )
        .otherwise(Note::issue(
            "Missing context: add a Context section describing the problem and situation",
        ));

    card.ladder()
        .tier(
            s.business_term_count >= 3,
            6,
            Note::strength("Strong business focus"),
        )
        .tier(
            s.business_term_count >= 1,
            3,
            Note::issue("Expand on the business impact (customers, revenue, cost)"),
        )
        .otherwise(Note::issue(
            "No business focus: explain why this matters to customers or the business",
        ));

    card.ladder()
        .tier(
            s.has_constraints_and_requirements(),
            6,
            Note::strength("Constraints and requirements stated"),
        )
        .tier(
            s.constraint_count > 0,
            3,
            Note::issue("Constraints listed but no explicit requirements"),
        )
        .tier(
            s.requirement_count > 0,
            3,
            Note::issue("Requirements listed but no constraints or limitations"),
        )
        .otherwise(Note::issue(
            "State the constraints and requirements that shape the decision",
        ));

    card.ladder()
        .tier(s.quantified_count >= 2, 3, Note::strength("Context is quantified"))
        .tier(
            s.quantified_count == 1,
            2,
            Note::issue("Add more numbers (load, cost, latency, team size)"),
        )
        .otherwise(Note::issue(
            "Quantify the problem with concrete numbers",
        ));

    card.bonus(s.has_cross_reference, 1, "References related records");
    card.bonus(s.bullet_count >= 3, 1, "Decision drivers listed");

    card.finish()
}

/// Points removed per distinct vague decision phrase, and the ceiling.
const VAGUE_DECISION_PENALTY: u32 = 3;
const VAGUE_DECISION_CAP: u32 = 6;

pub fn score_decision(text: &str, patterns: &PatternRegistry) -> DimensionResult {
    let s = detect_decision(text, patterns);
    let mut card = ScoreCard::new(DECISION.max_points);

    card.ladder()
        .tier(
            s.has_decision_heading && s.has_decision_language(),
            10,
            Note::strength("Clear decision statement under a Decision heading"),
        )
        .tier(
            s.has_decision_language(),
            7,
            Note::issue("Decision stated; put it under a dedicated Decision heading"),
        )
        .tier(
            s.has_decision_heading,
            4,
            Note::issue("Decision section lacks a clear statement; write 'We will ...'"),
        )
        .otherwise(Note::issue(
            "No clear decision statement: state the decision as 'We will ...'",
        ));

    card.ladder()
        .tier(
            s.has_options_heading || s.alternative_count >= 2,
            6,
            Note::strength("Alternatives considered"),
        )
        .tier(
            s.alternative_count == 1,
            3,
            Note::issue("Only one alternative mentioned; compare at least two options"),
        )
        .otherwise(Note::issue(
            "No alternatives: list the options considered and why they lost",
        ));

    card.ladder()
        .tier(s.rationale_count >= 2, 6, Note::strength("Rationale explained"))
        .tier(
            s.rationale_count == 1,
            3,
            Note::issue("Rationale is brief; explain why this option wins"),
        )
        .otherwise(Note::issue(
            "Missing rationale: explain why (because, due to, so that)",
        ));

    card.penalty(
        s.vague_phrases.len() as u32 * VAGUE_DECISION_PENALTY,
        VAGUE_DECISION_CAP,
        format!(
            "Vague decision language ({}): name the concrete change",
            s.vague_phrases.join(", ")
        ),
    );

    card.bonus(s.has_y_statement, 2, "Uses a MADR Y-statement");
    card.bonus(s.has_tradeoff, 1, "Trade-offs acknowledged");

    card.finish()
}

const VAGUE_CONSEQUENCE_PENALTY: u32 = 2;
const VAGUE_CONSEQUENCE_CAP: u32 = 4;

pub fn score_consequences(text: &str, patterns: &PatternRegistry) -> DimensionResult {
    let s = detect_consequences(text, patterns);
    let mut card = ScoreCard::new(CONSEQUENCES.max_points);

    card.ladder()
        .tier(
            s.has_consequences_heading,
            5,
            Note::strength("Consequences section present"),
        )
        .tier(
            s.consequence_term_count > 0,
            2,
            Note::issue("Consequences mentioned; add a dedicated Consequences section"),
        )
        .otherwise(Note::issue("Missing Consequences section"));

    let (pos, neg) = (s.positive_count, s.negative_count);
    card.ladder()
        .tier(
            pos >= 3 && neg >= 3,
            12,
            Note::strength("Thorough, balanced consequences"),
        )
        .tier(
            pos >= 2 && neg >= 2,
            9,
            Note::strength("Balanced positive and negative consequences"),
        )
        .tier(
            s.has_both_polarities(),
            6,
            Note::issue("Expand both positive and negative consequences"),
        )
        .tier(
            pos > 0,
            3,
            Note::issue("Only positive consequences: add drawbacks and risks"),
        )
        .tier(
            neg > 0,
            3,
            Note::issue("Only negative consequences: add the benefits"),
        )
        .otherwise(Note::issue(
            "No consequences described: list positive and negative outcomes",
        ));

    card.ladder()
        .tier(
            s.operational_count >= 2,
            5,
            Note::strength("Operational impact covered"),
        )
        .tier(
            s.operational_count == 1,
            3,
            Note::issue("Say more about the impact on teams and operations"),
        )
        .otherwise(Note::issue(
            "Describe the impact on teams, operations and maintenance",
        ));

    card.penalty(
        s.vague_terms.len() as u32 * VAGUE_CONSEQUENCE_PENALTY,
        VAGUE_CONSEQUENCE_CAP,
        format!(
            "Vague consequence terms ({}): say what specifically gets harder",
            s.vague_terms.join(", ")
        ),
    );

    card.bonus(s.has_subsections, 2, "Consequences split into positive and negative");
    card.bonus(s.has_mitigation, 1, "Mitigations described");

    card.finish()
}

pub fn score_status(text: &str, patterns: &PatternRegistry) -> DimensionResult {
    let s = detect_status(text, patterns);
    let mut card = ScoreCard::new(STATUS.max_points);

    card.ladder()
        .tier(
            s.has_status_section() && s.has_status_value(),
            10,
            Note::strength(format!("Status recorded ({})", s.status_values.join(", "))),
        )
        .tier(
            s.has_status_value(),
            5,
            Note::issue("Status mentioned; add a Status section"),
        )
        .tier(
            s.has_status_section(),
            3,
            Note::issue("Status section has no value (Proposed, Accepted, Deprecated, Superseded)"),
        )
        .otherwise(Note::issue(
            "Missing status: add a Status section (Proposed, Accepted, Deprecated, Superseded)",
        ));

    card.ladder()
        .tier(s.has_date, 5, Note::strength("Decision is dated"))
        .otherwise(Note::issue("Add the decision date"));

    card.ladder()
        .tier(s.has_deciders, 5, Note::strength("Deciders identified"))
        .otherwise(Note::issue("Name the deciders or owners"));

    card.ladder()
        .tier(
            s.section_count >= 4,
            3,
            Note::strength("Complete ADR structure"),
        )
        .tier(
            s.section_count >= 2,
            1,
            Note::issue("Add the missing standard sections (Context, Decision, Consequences, Options)"),
        )
        .otherwise(Note::issue(
            "Use standard ADR headings (Context, Decision, Consequences, Options)",
        ));

    card.bonus(s.has_supersession, 2, "Links to related decisions");

    card.finish()
}

pub struct ContextDimension;

impl Dimension for ContextDimension {
    fn spec(&self) -> DimensionSpec {
        CONTEXT
    }

    fn score(&self, text: &str, patterns: &PatternRegistry) -> DimensionResult {
        score_context(text, patterns)
    }

    fn explain(&self, text: &str, patterns: &PatternRegistry) -> Vec<String> {
        detect_context(text, patterns).indicators()
    }
}

pub struct DecisionDimension;

impl Dimension for DecisionDimension {
    fn spec(&self) -> DimensionSpec {
        DECISION
    }

    fn score(&self, text: &str, patterns: &PatternRegistry) -> DimensionResult {
        score_decision(text, patterns)
    }

    fn explain(&self, text: &str, patterns: &PatternRegistry) -> Vec<String> {
        detect_decision(text, patterns).indicators()
    }
}

pub struct ConsequencesDimension;

impl Dimension for ConsequencesDimension {
    fn spec(&self) -> DimensionSpec {
        CONSEQUENCES
    }

    fn score(&self, text: &str, patterns: &PatternRegistry) -> DimensionResult {
        score_consequences(text, patterns)
    }

    fn explain(&self, text: &str, patterns: &PatternRegistry) -> Vec<String> {
        detect_consequences(text, patterns).indicators()
    }
}

pub struct StatusDimension;

impl Dimension for StatusDimension {
    fn spec(&self) -> DimensionSpec {
        STATUS
    }

    fn score(&self, text: &str, patterns: &PatternRegistry) -> DimensionResult {
        score_status(text, patterns)
    }

    fn explain(&self, text: &str, patterns: &PatternRegistry) -> Vec<String> {
        detect_status(text, patterns).indicators()
    }
}
