//! Generic filler and AI-sounding phrasing, shared by every rubric.

use super::{Pattern, PatternError};

#[derive(Debug, Clone)]
pub struct SlopPatterns {
    /// Stock phrases that pad prose without saying anything.
    pub filler_phrases: Pattern,
    pub buzzwords: Pattern,
    pub hedges: Pattern,
    /// Conversational assistant tics that leak into drafts.
    pub sycophancy: Pattern,
    pub em_dash: Pattern,
}

impl SlopPatterns {
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            filler_phrases: Pattern::new(
                "filler_phrases",
                r"\b(?:it(?:'|’)?s important to note|it is important to note|it is worth noting|worth noting that|in today(?:'|’)s (?:fast-paced|rapidly evolving|digital) (?:world|landscape|environment)|in the ever[-\s]evolving|at the end of the day|needless to say|plays? a (?:crucial|pivotal|vital) role|a testament to|navigat(?:e|ing) the complexities|in conclusion|let(?:'|’)s dive in|delve into|delves into|rich tapestry)\b",
            )?,
            buzzwords: Pattern::word_list(
                "buzzwords",
                &[
                    "leverage", "leveraging", "synergy", "synergies", "seamless", "seamlessly",
                    "robust", "cutting-edge", "game-changer", "game-changing", "paradigm shift",
                    "holistic", "best-in-class", "world-class", "revolutionize", "revolutionary",
                    "unlock", "unlocks", "empower", "empowers", "transformative", "innovative",
                    "state-of-the-art", "next-generation", "streamline", "elevate",
                ],
            )?,
            hedges: Pattern::word_list(
                "hedges",
                &[
                    "arguably", "it could be argued", "perhaps", "potentially", "in some ways",
                    "to some extent", "may or may not", "it seems that", "generally speaking",
                ],
            )?,
            sycophancy: Pattern::new(
                "sycophancy",
                r"(?:\bgreat question\b|\bi hope this helps\b|\bas an ai\b|\bcertainly!|\babsolutely!|\bfeel free to\b|\bhappy to help\b|\blet me know if\b)",
            )?,
            em_dash: Pattern::new("em_dash", "\u{2014}")?,
        })
    }
}
