//! Architecture Decision Record patterns.

use super::{Pattern, PatternError};

/// Numbers with a unit, currency amounts, percentages and multipliers.
pub(crate) const QUANTIFIED: &str = r"(?:[$€£]\s?\d[\d,]*(?:\.\d+)?\s*(?:k|m|bn|million|billion|thousand)?\b|\b\d[\d,]*(?:\.\d+)?\s*(?:%|percent\b|ms\b|milliseconds?\b|seconds?\b|secs?\b|minutes?\b|mins?\b|hours?\b|hrs?\b|days?\b|weeks?\b|months?\b|years?\b|users?\b|customers?\b|requests?\b|rps\b|qps\b|tps\b|gb\b|mb\b|tb\b|k\b|thousand\b|million\b|billion\b|dollars?\b|euros?\b|x\b|times\b|nodes?\b|servers?\b|engineers?\b))";

#[derive(Debug, Clone)]
pub struct AdrPatterns {
    // Context
    pub context_heading: Pattern,
    pub context_lead: Pattern,
    pub context_language: Pattern,
    pub business_focus: Pattern,
    pub constraint: Pattern,
    pub requirement: Pattern,
    pub quantified: Pattern,
    pub cross_reference: Pattern,
    pub bullet_line: Pattern,

    // Decision
    pub decision_heading: Pattern,
    pub decision_language: Pattern,
    pub vague_decision: Pattern,
    pub alternatives: Pattern,
    pub options_heading: Pattern,
    pub rationale: Pattern,
    pub tradeoff: Pattern,
    pub y_statement: Pattern,

    // Consequences
    pub consequences_heading: Pattern,
    pub consequence_language: Pattern,
    pub positive: Pattern,
    pub negative: Pattern,
    pub vague_consequence: Pattern,
    pub operational_impact: Pattern,
    pub consequence_subsection: Pattern,
    pub mitigation: Pattern,

    // Status
    pub status_heading: Pattern,
    pub status_lead: Pattern,
    pub status_value: Pattern,
    pub date: Pattern,
    pub deciders: Pattern,
    pub supersession: Pattern,
    pub section_heading: Pattern,
}

impl AdrPatterns {
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            context_heading: Pattern::new(
                "context_heading",
                r"^\s*#{1,6}\s*(?:context|background|problem statement)\b",
            )?,
            context_lead: Pattern::new(
                "context_lead",
                r"^\s*(?:\*\*)?(?:context|background|problem statement)(?:\*\*)?\s*:",
            )?,
            context_language: Pattern::word_list(
                "context_language",
                &[
                    "context", "background", "problem", "problems", "challenge", "challenges",
                    "situation", "currently", "issue", "issues",
                ],
            )?,
            business_focus: Pattern::word_list(
                "business_focus",
                &[
                    "business", "customer", "customers", "user", "users", "revenue", "cost",
                    "costs", "market", "stakeholder", "stakeholders", "value", "growth",
                ],
            )?,
            constraint: Pattern::word_list(
                "constraint",
                &[
                    "constraint", "constraints", "constrained", "limitation", "limitations",
                    "limited", "restriction", "restrictions", "must not", "cannot", "budget",
                    "deadline", "capacity", "legacy",
                ],
            )?,
            requirement: Pattern::word_list(
                "requirement",
                &[
                    "requirement", "requirements", "required", "must", "need to", "needs to",
                    "has to", "have to",
                ],
            )?,
            quantified: Pattern::new("quantified", QUANTIFIED)?,
            cross_reference: Pattern::new(
                "cross_reference",
                r"\b(?:adr[-\s#]?\d+|rfc[-\s#]?\d+|see also|related to|supersedes)\b",
            )?,
            bullet_line: Pattern::new("bullet_line", r"^\s*(?:[-*+]|\d+[.)])\s+\S")?,

            decision_heading: Pattern::new("decision_heading", r"^\s*#{1,6}\s*(?:decision|decision outcome)\b")?,
            decision_language: Pattern::word_list(
                "decision_language",
                &[
                    "we will", "we'll", "we decided", "we have decided", "decided to", "we chose",
                    "we choose", "chosen option", "we adopt", "we are adopting", "will use",
                    "will adopt", "will migrate", "will move", "will replace", "going forward",
                ],
            )?,
            vague_decision: Pattern::new(
                "vague_decision",
                r"\b(?:strategic approach|improve (?:the )?(?:scalability|performance|quality|efficiency|reliability|maintainability)|best practices?|holistic approach|as needed|where appropriate|various improvements|enhance (?:the )?(?:system|platform|architecture)|optimi[sz]e (?:things|everything)|leverage synerg(?:y|ies)|modern approach|industry standard approach)\b",
            )?,
            alternatives: Pattern::word_list(
                "alternatives",
                &[
                    "alternative", "alternatives", "options considered", "considered options",
                    "instead of", "rather than", "versus", "vs", "compared to", "compared with",
                    "option 1", "option 2", "option a", "option b",
                ],
            )?,
            options_heading: Pattern::new(
                "options_heading",
                r"^\s*#{1,6}\s*(?:considered options|options considered|options|alternatives(?: considered)?)\b",
            )?,
            rationale: Pattern::word_list(
                "rationale",
                &[
                    "because", "since", "due to", "rationale", "reason", "reasons", "therefore",
                    "so that", "in order to", "justified", "justification",
                ],
            )?,
            tradeoff: Pattern::new("tradeoff", r"\btrade[-\s]?offs?\b")?,
            y_statement: Pattern::new(
                "y_statement",
                r#"\bchosen option\s*:?\s*"?[^,\n]+"?\s*,\s*because\b"#,
            )?,

            consequences_heading: Pattern::new(
                "consequences_heading",
                r"^\s*#{1,6}\s*consequences?\b",
            )?,
            consequence_language: Pattern::word_list(
                "consequence_language",
                &["consequence", "consequences", "as a result", "this means", "impact", "impacts"],
            )?,
            positive: Pattern::word_list(
                "positive",
                &[
                    "benefit", "benefits", "advantage", "advantages", "improves", "improved",
                    "improvement", "enables", "enable", "faster", "simpler", "reduces", "reduced",
                    "easier", "better", "gain", "gains", "positive", "pro", "pros",
                ],
            )?,
            negative: Pattern::word_list(
                "negative",
                &[
                    "drawback", "drawbacks", "downside", "downsides", "disadvantage",
                    "disadvantages", "risk", "risks", "slower", "harder", "negative", "cons",
                    "debt", "lock-in", "migration effort", "learning curve", "more expensive",
                    "requires additional", "requires more",
                ],
            )?,
            vague_consequence: Pattern::word_list(
                "vague_consequence",
                &[
                    "complexity", "overhead", "some impact", "potential issues", "might be affected",
                    "various effects", "various issues",
                ],
            )?,
            operational_impact: Pattern::word_list(
                "operational_impact",
                &[
                    "team", "teams", "operations", "on-call", "oncall", "maintenance", "deployment",
                    "deployments", "monitoring", "testing", "training", "hiring", "support",
                ],
            )?,
            consequence_subsection: Pattern::new(
                "consequence_subsection",
                r"(?:^\s*#{2,6}\s*(?:positive|negative|neutral)\b|\b(?:good|bad|neutral), because\b)",
            )?,
            mitigation: Pattern::new(
                "mitigation",
                r"\b(?:mitigat\w*|to address this|we will monitor|fallback|rollback plan|roll back)\b",
            )?,

            status_heading: Pattern::new("status_heading", r"^\s*#{1,6}\s*status\b")?,
            status_lead: Pattern::new("status_lead", r"^\s*[-*]?\s*(?:\*\*)?status(?:\*\*)?\s*:")?,
            status_value: Pattern::word_list(
                "status_value",
                &[
                    "proposed", "accepted", "rejected", "deprecated", "superseded", "approved",
                ],
            )?,
            date: Pattern::new(
                "date",
                r"\b(?:\d{4}-\d{2}-\d{2}|(?:jan|feb|mar|apr|may|jun|jul|aug|sep|sept|oct|nov|dec)[a-z]*\.?\s+\d{1,2},?\s+\d{4})\b",
            )?,
            deciders: Pattern::word_list(
                "deciders",
                &[
                    "decider", "deciders", "decision maker", "decision makers", "approved by",
                    "author", "authors", "owner", "owners", "reviewer", "reviewers",
                ],
            )?,
            supersession: Pattern::new(
                "supersession",
                r"\b(?:supersedes|superseded by|amends|amended by|relates to|related to|adr[-\s#]?\d+)\b",
            )?,
            section_heading: Pattern::new(
                "section_heading",
                r"^\s*#{1,6}\s*(?:context|decision drivers|decision|consequences?|(?:considered )?options|rationale)\b",
            )?,
        })
    }
}
