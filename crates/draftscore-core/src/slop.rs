//! Cross-cutting slop detector.
//!
//! Scans the whole document for generic, AI-sounding phrasing. The scan is
//! rubric-agnostic; every rubric subtracts the same capped deduction after
//! its dimension scores are summed.
//!
//! ## Weights
//!
//! | Category | Points per occurrence |
//! |----------|-----------------------|
//! | Filler phrase | 2 |
//! | Buzzword | 1 |
//! | Hedge | 1 |
//! | Sycophancy | 3 |
//! | Em-dash overuse (more than 3) | 2 once |

use serde::Serialize;

use crate::patterns::{Pattern, PatternRegistry};
use crate::types::{SlopPenalty, SlopSeverity};

pub const FILLER_PHRASE_WEIGHT: u32 = 2;
pub const BUZZWORD_WEIGHT: u32 = 1;
pub const HEDGE_WEIGHT: u32 = 1;
pub const SYCOPHANCY_WEIGHT: u32 = 3;
pub const EM_DASH_WEIGHT: u32 = 2;

/// Em-dashes tolerated before the overuse penalty applies.
pub const EM_DASH_ALLOWANCE: usize = 3;

/// Most points the aggregator will ever deduct for slop.
pub const SLOP_DEDUCTION_CAP: u32 = 5;

/// Raw output of the slop scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlopReport {
    pub penalty: u32,
    pub issues: Vec<String>,
    pub severity: SlopSeverity,
}

impl SlopReport {
    /// Points the aggregator deducts for this report.
    pub fn deduction(&self) -> u32 {
        slop_deduction(self.penalty)
    }

    pub fn into_penalty(self) -> SlopPenalty {
        SlopPenalty {
            amount: self.deduction(),
            raw_penalty: self.penalty,
            severity: self.severity,
            issues: self.issues,
        }
    }
}

/// `min(floor(penalty * 0.6), 5)`, computed in integers.
pub fn slop_deduction(penalty: u32) -> u32 {
    (penalty.saturating_mul(6) / 10).min(SLOP_DEDUCTION_CAP)
}

pub fn detect_slop(text: &str, patterns: &PatternRegistry) -> SlopReport {
    let p = &patterns.slop;
    let mut penalty = 0u32;
    let mut issues = Vec::new();

    let mut weigh = |pattern: &Pattern, weight: u32, label: &str| {
        let found = pattern.matches(text);
        if found.is_empty() {
            return;
        }
        penalty += found.len() as u32 * weight;
        issues.push(format!("{}: {}", label, pattern.distinct_matches(text).join(", ")));
    };

    weigh(&p.filler_phrases, FILLER_PHRASE_WEIGHT, "Filler phrases");
    weigh(&p.buzzwords, BUZZWORD_WEIGHT, "Buzzwords");
    weigh(&p.hedges, HEDGE_WEIGHT, "Hedging");
    weigh(&p.sycophancy, SYCOPHANCY_WEIGHT, "Conversational filler");

    let dashes = p.em_dash.count(text);
    if dashes > EM_DASH_ALLOWANCE {
        penalty += EM_DASH_WEIGHT;
        issues.push(format!("Em-dash overuse ({} found)", dashes));
    }

    SlopReport {
        penalty,
        issues,
        severity: SlopSeverity::from_penalty(penalty),
    }
}
