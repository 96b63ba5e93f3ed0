//! Power statement patterns.

use super::adr::QUANTIFIED;
use super::{Pattern, PatternError};

/// Verbs that open a strong accomplishment statement.
pub const STRONG_VERBS: &[&str] = &[
    "led", "lead", "delivered", "deliver", "built", "build", "launched", "launch", "drove",
    "drive", "created", "designed", "implemented", "reduced", "increased", "grew", "achieved",
    "transformed", "spearheaded", "established", "negotiated", "streamlined", "accelerated",
    "generated", "saved", "developed", "orchestrated", "pioneered", "secured", "scaled",
    "automated", "optimized", "optimised", "cut", "doubled", "tripled", "shipped", "founded",
    "championed", "eliminated", "consolidated", "modernized", "revamped", "boosted",
];

#[derive(Debug, Clone)]
pub struct PowerPatterns {
    pub strong_verbs: Pattern,
    pub weak_verbs: Pattern,
    pub passive_voice: Pattern,
    pub metric: Pattern,
    pub number: Pattern,
    pub impact_terms: Pattern,
    pub outcome_connector: Pattern,
    pub timeframe: Pattern,
    pub jargon: Pattern,
    pub filler: Pattern,
    pub vague_quantifier: Pattern,
    pub scope: Pattern,
    pub from_to: Pattern,
    pub ownership: Pattern,
    pub concise_heading: Pattern,
    pub structured_heading: Pattern,
    pub bullet_line: Pattern,
}

impl PowerPatterns {
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            strong_verbs: Pattern::word_list("strong_verbs", STRONG_VERBS)?,
            weak_verbs: Pattern::word_list(
                "weak_verbs",
                &[
                    "helped", "helped to", "assisted", "worked on", "was responsible for",
                    "responsible for", "participated in", "involved in", "was involved in",
                    "tried to", "contributed to", "handled", "supported",
                ],
            )?,
            passive_voice: Pattern::new(
                "passive_voice",
                r"\b(?:was|were|been|being|is|are)\s+(?:\w+ed|built|done|made|given|taken|led|run|written|chosen)\b",
            )?,
            metric: Pattern::new("metric", QUANTIFIED)?,
            number: Pattern::new("number", r"[$€£]?\b\d[\d,]*(?:\.\d+)?\b")?,
            impact_terms: Pattern::word_list(
                "impact_terms",
                &[
                    "revenue", "cost", "costs", "savings", "efficiency", "growth", "customers",
                    "customer", "users", "market share", "retention", "productivity", "profit",
                    "roi", "time to market", "conversion", "satisfaction", "churn", "uptime",
                    "latency", "throughput", "sales", "margin",
                ],
            )?,
            outcome_connector: Pattern::word_list(
                "outcome_connector",
                &[
                    "resulting in", "which led to", "leading to", "so that", "enabling",
                    "which enabled", "achieving", "which increased", "which reduced", "allowing",
                    "that cut", "that saved",
                ],
            )?,
            timeframe: Pattern::new(
                "timeframe",
                r"\b(?:(?:in|within|over|across|under)\s+(?:\d+|one|two|three|four|six|nine|twelve|eighteen)\s+(?:days?|weeks?|months?|quarters?|years?)|q[1-4](?:\s+\d{4})?|fy\s?\d{2,4})\b",
            )?,
            jargon: Pattern::word_list(
                "jargon",
                &[
                    "synergy", "synergies", "paradigm", "leverage", "leveraged", "leveraging",
                    "utilize", "utilized", "ideate", "bandwidth", "circle back", "move the needle",
                    "best-in-class", "world-class", "disruptive", "next-generation", "value-add",
                    "low-hanging fruit", "thought leadership", "deep dive",
                ],
            )?,
            filler: Pattern::word_list(
                "filler",
                &[
                    "very", "really", "basically", "actually", "just", "quite", "somewhat",
                    "things", "stuff", "kind of", "sort of",
                ],
            )?,
            vague_quantifier: Pattern::word_list(
                "vague_quantifier",
                &[
                    "many", "a lot", "lots of", "numerous", "significant", "significantly",
                    "various", "some", "several", "multiple", "substantial", "a number of",
                ],
            )?,
            scope: Pattern::new(
                "scope",
                r"\b(?:team of \d+|\d+[\d,]*\+?\s+(?:engineers|developers|people|employees|customers|users|clients|countries|regions|teams|stores|sites|markets|reports)|across \d+|globally|company-wide|organization-wide|enterprise-wide|nationwide|worldwide)\b",
            )?,
            from_to: Pattern::new(
                "from_to",
                r"\bfrom\s+[$€£]?\d[\w.,%$]*\s+(?:\w+\s+)?to\s+[$€£]?\d[\w.,%$]*",
            )?,
            ownership: Pattern::word_list(
                "ownership",
                &["owned", "accountable for", "end-to-end", "end to end", "sole owner"],
            )?,
            concise_heading: Pattern::new(
                "concise_heading",
                r"^\s*(?:#{1,6}\s*)?(?:\*\*)?(?:concise|short|elevator|one[-\s]?liner|version a)(?:\s+(?:version|statement|form|pitch))?(?:\*\*)?\s*(?::|$)",
            )?,
            structured_heading: Pattern::new(
                "structured_heading",
                r"^\s*(?:#{1,6}\s*)?(?:\*\*)?(?:structured|detailed|full|expanded|version b)(?:\s+(?:version|statement|form))?(?:\*\*)?\s*(?::|$)",
            )?,
            bullet_line: Pattern::new("bullet_line", r"^\s*(?:[-*+•]|\d+[.)])\s+\S")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> PowerPatterns {
        PowerPatterns::new().unwrap()
    }

    #[test]
    fn test_strong_and_weak_verbs() {
        let p = patterns();
        assert!(p.strong_verbs.is_match("Led a team"));
        assert_eq!(p.weak_verbs.matches("I helped and worked on things"), vec!["helped", "worked on"]);
    }

    #[test]
    fn test_passive_voice() {
        let p = patterns();
        assert!(p.passive_voice.is_match("The system was redesigned by the team"));
        assert!(!p.passive_voice.is_match("The team redesigned the system"));
    }

    #[test]
    fn test_scope_and_timeframe() {
        let p = patterns();
        assert!(p.scope.is_match("Led a team of 10 engineers"));
        assert!(p.scope.is_match("rolled out across 12 regions"));
        assert!(p.timeframe.is_match("within six months"));
        assert!(p.timeframe.is_match("shipped in Q3 2023"));
    }

    #[test]
    fn test_from_to() {
        let p = patterns();
        assert!(p.from_to.is_match("cut onboarding from 14 days to 3 days"));
        assert!(p.from_to.is_match("grew ARR from $2M to $5M"));
        assert!(!p.from_to.is_match("moved from Boston to Denver"));
    }

    #[test]
    fn test_format_headings() {
        let p = patterns();
        assert!(p.concise_heading.is_match("## Concise Version\nLed ..."));
        assert!(p.structured_heading.is_match("**Structured version**"));
    }
}
