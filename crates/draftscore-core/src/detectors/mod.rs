//! Detectors: pure `text -> Signal` functions.
//!
//! Each detector applies one cluster of related patterns and reports counts
//! and booleans. Detectors never call each other, never format messages and
//! never fail; absent matches are zero counts, `false` and empty vectors.
//! Human-readable indicators are derived separately in [`crate::explain`].

pub mod adr;
pub mod power;

pub use adr::{
    detect_consequences, detect_context, detect_decision, detect_status, ConsequencesSignal,
    ContextSignal, DecisionSignal, StatusSignal,
};
pub use power::{
    detect_action_verbs, detect_clarity, detect_format, detect_impact, detect_specificity,
    ActionSignal, ClaritySignal, FormatSignal, ImpactSignal, SpecificitySignal,
};

/// How far into the document a lead-in label ("Context: ...") may appear
/// and still count as a section.
pub const LEAD_IN_WINDOW: usize = 200;
