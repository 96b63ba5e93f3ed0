//! Core types for draft scoring.
//!
//! These are the values handed back to callers: per-dimension results, the
//! cross-cutting slop penalty, and the aggregated validation result.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::presentation::{grade, score_color, score_label, Grade, ScoreColor};
use crate::rubric::RubricError;

/// Issue reported for every dimension when there is nothing to score.
pub const NO_CONTENT_ISSUE: &str = "No content to validate";

/// Selector for the built-in rubrics.
///
/// A [`Rubric`](crate::Rubric) itself carries a plain string id, so custom
/// rubrics built with `Rubric::new` never need a variant here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum RubricId {
    Adr,
    PowerStatement,
}

impl RubricId {
    pub const ALL: [RubricId; 2] = [RubricId::Adr, RubricId::PowerStatement];

    pub fn as_str(&self) -> &'static str {
        match self {
            RubricId::Adr => "adr",
            RubricId::PowerStatement => "power-statement",
        }
    }
}

impl fmt::Display for RubricId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RubricId {
    type Err = RubricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adr" | "madr" => Ok(RubricId::Adr),
            "power-statement" | "power_statement" | "powerstatement" | "power" => {
                Ok(RubricId::PowerStatement)
            }
            other => Err(RubricError::UnknownRubric(other.to_string())),
        }
    }
}

/// Score for one rubric dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DimensionResult {
    /// Always within `0..=max_score`
    pub score: u32,
    pub max_score: u32,

    /// What to fix, in actionable wording
    #[serde(default)]
    pub issues: Vec<String>,

    /// What is already good
    #[serde(default)]
    pub strengths: Vec<String>,
}

impl DimensionResult {
    /// Zero score with the single "no content" issue.
    pub fn no_content(max_score: u32) -> Self {
        Self {
            score: 0,
            max_score,
            issues: vec![NO_CONTENT_ISSUE.to_string()],
            strengths: Vec::new(),
        }
    }
}

/// A dimension result tagged with its rubric name and 1-based position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DimensionScore {
    pub name: String,
    pub position: usize,
    #[serde(flatten)]
    pub result: DimensionResult,
}

/// How much generic filler a draft carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlopSeverity {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl SlopSeverity {
    pub fn from_penalty(penalty: u32) -> Self {
        match penalty {
            0 => SlopSeverity::None,
            1..=5 => SlopSeverity::Low,
            6..=12 => SlopSeverity::Medium,
            _ => SlopSeverity::High,
        }
    }
}

impl fmt::Display for SlopSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SlopSeverity::None => "none",
            SlopSeverity::Low => "low",
            SlopSeverity::Medium => "medium",
            SlopSeverity::High => "high",
        };
        f.write_str(s)
    }
}

/// The cross-cutting deduction applied after dimension scores are summed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlopPenalty {
    /// Points actually deducted from the total
    pub amount: u32,

    /// Unscaled penalty reported by the slop detector
    pub raw_penalty: u32,

    pub severity: SlopSeverity,

    #[serde(default)]
    pub issues: Vec<String>,
}

/// A rubric-level bonus that sits outside the dimensions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentBonus {
    pub name: String,
    pub points: u32,
    pub reason: String,
}

/// Result of validating one draft against one rubric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationResult {
    /// Id of the rubric that produced this result
    pub rubric: String,

    /// Always within `0..=total_max`
    pub total_score: u32,
    pub total_max: u32,

    /// Dimension results in rubric order
    pub dimensions: Vec<DimensionScore>,

    pub slop_penalty: SlopPenalty,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_bonus: Option<DocumentBonus>,

    /// Dimension issues in rubric order, then slop issues
    #[serde(default)]
    pub issues: Vec<String>,

    #[serde(default)]
    pub strengths: Vec<String>,
}

impl ValidationResult {
    /// Look a dimension up by its rubric name (case-insensitive).
    pub fn dimension(&self, name: &str) -> Option<&DimensionResult> {
        self.dimensions
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .map(|d| &d.result)
    }

    /// Look a dimension up by its 1-based rubric position.
    pub fn dimension_at(&self, position: usize) -> Option<&DimensionResult> {
        self.dimensions
            .iter()
            .find(|d| d.position == position)
            .map(|d| &d.result)
    }

    pub fn per_dimension(&self) -> BTreeMap<&str, &DimensionResult> {
        self.dimensions
            .iter()
            .map(|d| (d.name.as_str(), &d.result))
            .collect()
    }

    /// The first `limit` issues, for callers that embed a short fix list.
    pub fn top_issues(&self, limit: usize) -> &[String] {
        &self.issues[..self.issues.len().min(limit)]
    }

    /// True when the result came from the empty-input path.
    pub fn is_empty_input(&self) -> bool {
        self.issues.len() == 1 && self.issues[0] == NO_CONTENT_ISSUE
    }

    pub fn grade(&self) -> Grade {
        grade(self.total_score)
    }

    /// Serializable view with named and positional (`dimension1`..) entries.
    pub fn report(&self) -> ValidationReport<'_> {
        ValidationReport {
            rubric: &self.rubric,
            total_score: self.total_score,
            total_max: self.total_max,
            grade: grade(self.total_score),
            color: score_color(self.total_score),
            label: score_label(self.total_score),
            per_dimension: self.per_dimension(),
            positional: self
                .dimensions
                .iter()
                .map(|d| (format!("dimension{}", d.position), &d.result))
                .collect(),
            slop_penalty: &self.slop_penalty,
            document_bonus: self.document_bonus.as_ref(),
            issues: &self.issues,
            strengths: &self.strengths,
        }
    }
}

/// Presentation-ready view of a [`ValidationResult`].
#[derive(Debug, Serialize)]
pub struct ValidationReport<'a> {
    pub rubric: &'a str,
    pub total_score: u32,
    pub total_max: u32,
    pub grade: Grade,
    pub color: ScoreColor,
    pub label: &'static str,
    pub per_dimension: BTreeMap<&'a str, &'a DimensionResult>,
    #[serde(flatten)]
    pub positional: BTreeMap<String, &'a DimensionResult>,
    pub slop_penalty: &'a SlopPenalty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_bonus: Option<&'a DocumentBonus>,
    pub issues: &'a [String],
    pub strengths: &'a [String],
}
