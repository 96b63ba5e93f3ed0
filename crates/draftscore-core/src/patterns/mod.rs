//! Pattern library.
//!
//! Every matcher the detectors use lives in one immutable [`PatternRegistry`],
//! grouped by document type. The registry is built once and passed to
//! detectors explicitly, so a detector can be tested against a registry
//! built in isolation.
//!
//! All patterns are compiled case-insensitive and multi-line, so `^` and `$`
//! anchor at line boundaries (used by the markdown heading patterns).

mod adr;
mod power;
mod slop;

pub use adr::AdrPatterns;
pub use power::PowerPatterns;
pub use slop::SlopPatterns;

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised while compiling a pattern.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid pattern '{name}': {source}")]
    InvalidRegex {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// A named, read-only text matcher.
#[derive(Debug, Clone)]
pub struct Pattern {
    name: &'static str,
    regex: Regex,
}

impl Pattern {
    /// Compile a regular expression pattern.
    pub fn new(name: &'static str, source: &str) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .map_err(|source| PatternError::InvalidRegex { name, source })?;
        Ok(Self { name, regex })
    }

    /// Build a word-bounded alternation from literal terms.
    ///
    /// Terms are escaped, so `"vs."` matches a literal dot. Longer terms are
    /// tried first so `"worked on"` wins over `"worked"`.
    pub fn word_list(name: &'static str, terms: &[&str]) -> Result<Self, PatternError> {
        let mut sorted: Vec<&str> = terms.to_vec();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let alternation = sorted
            .iter()
            .map(|term| regex::escape(term))
            .collect::<Vec<_>>()
            .join("|");
        Self::new(name, &format!(r"\b(?:{})\b", alternation))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Number of non-overlapping occurrences.
    pub fn count(&self, text: &str) -> usize {
        self.regex.find_iter(text).count()
    }

    /// Matched substrings, lowercased, in document order.
    pub fn matches(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str().trim().to_lowercase())
            .collect()
    }

    /// Matched substrings, lowercased, sorted and deduplicated.
    pub fn distinct_matches(&self, text: &str) -> Vec<String> {
        self.matches(text)
            .into_iter()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

/// All pattern sets, grouped by the rubric that uses them.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    pub adr: AdrPatterns,
    pub power: PowerPatterns,
    pub slop: SlopPatterns,
}

lazy_static! {
    static ref SHARED: PatternRegistry =
        PatternRegistry::new().expect("built-in patterns must compile");
}

impl PatternRegistry {
    /// Compile every built-in pattern set.
    pub fn new() -> Result<Self, PatternError> {
        Ok(Self {
            adr: AdrPatterns::new()?,
            power: PowerPatterns::new()?,
            slop: SlopPatterns::new()?,
        })
    }

    /// Process-wide registry, compiled on first use.
    pub fn shared() -> &'static PatternRegistry {
        &SHARED
    }
}
