//! Rubric definitions.
//!
//! A rubric is an ordered list of [`Dimension`] scorers plus an optional
//! document-level bonus. Both built-in rubrics share the aggregator and the
//! slop detector; nothing else is shared between them.

use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use crate::patterns::PatternRegistry;
use crate::scoring::power::dual_format_bonus;
use crate::scoring::{
    ActionDimension, ClarityDimension, ConsequencesDimension, ContextDimension,
    DecisionDimension, Dimension, DimensionSpec, ImpactDimension, SpecificityDimension,
    StatusDimension,
};
use crate::types::{DocumentBonus, RubricId};

/// Errors raised while resolving or building a rubric.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RubricError {
    #[error("Unknown rubric '{0}' (expected one of: adr, power-statement)")]
    UnknownRubric(String),

    #[error("Rubric has no dimensions")]
    Empty,

    #[error("Duplicate dimension '{0}'")]
    DuplicateDimension(String),

    #[error("Dimension points sum to {actual}, expected {expected}")]
    PointsMismatch { expected: u32, actual: u32 },
}

/// Rubric-level bonus computed from the whole document.
pub type BonusFn = fn(&str, &PatternRegistry) -> Option<DocumentBonus>;

/// Highest total any rubric may report.
pub const SCORE_CEILING: u32 = 100;

pub struct Rubric {
    id: &'static str,
    name: &'static str,
    dimensions: Vec<Box<dyn Dimension>>,
    total_max: u32,
    document_bonus: Option<BonusFn>,
    score_ceiling: u32,
}

impl fmt::Debug for Rubric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rubric")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("dimensions", &self.specs())
            .field("total_max", &self.total_max)
            .field("has_document_bonus", &self.document_bonus.is_some())
            .field("score_ceiling", &self.score_ceiling)
            .finish()
    }
}

lazy_static! {
    static ref ADR: Rubric = Rubric::adr();
    static ref POWER_STATEMENT: Rubric = Rubric::power_statement();
}

impl Rubric {
    /// Build a rubric, checking that dimension points add up to `total_max`.
    pub fn new(
        id: &'static str,
        name: &'static str,
        dimensions: Vec<Box<dyn Dimension>>,
        total_max: u32,
    ) -> Result<Self, RubricError> {
        let rubric = Self {
            id,
            name,
            dimensions,
            total_max,
            document_bonus: None,
            score_ceiling: total_max,
        };
        rubric.check()?;
        Ok(rubric)
    }

    /// Attach a document bonus. The ceiling may exceed `total_max` so the
    /// bonus can lift a near-perfect draft, but never above [`SCORE_CEILING`].
    pub fn with_document_bonus(mut self, bonus: BonusFn, score_ceiling: u32) -> Self {
        self.document_bonus = Some(bonus);
        self.score_ceiling = score_ceiling.min(SCORE_CEILING);
        self
    }

    fn check(&self) -> Result<(), RubricError> {
        if self.dimensions.is_empty() {
            return Err(RubricError::Empty);
        }

        let mut seen = HashSet::new();
        for dimension in &self.dimensions {
            if !seen.insert(dimension.name().to_ascii_lowercase()) {
                return Err(RubricError::DuplicateDimension(dimension.name().to_string()));
            }
        }

        let actual: u32 = self.dimensions.iter().map(|d| d.max_points()).sum();
        if actual != self.total_max {
            return Err(RubricError::PointsMismatch {
                expected: self.total_max,
                actual,
            });
        }

        Ok(())
    }

    /// Architecture Decision Record rubric.
    pub fn adr() -> Self {
        Self {
            id: RubricId::Adr.as_str(),
            name: "Architecture Decision Record",
            dimensions: vec![
                Box::new(ContextDimension),
                Box::new(DecisionDimension),
                Box::new(ConsequencesDimension),
                Box::new(StatusDimension),
            ],
            total_max: 100,
            document_bonus: None,
            score_ceiling: 100,
        }
    }

    /// Power statement rubric, with the dual-format bonus.
    pub fn power_statement() -> Self {
        Self {
            id: RubricId::PowerStatement.as_str(),
            name: "Power Statement",
            dimensions: vec![
                Box::new(ClarityDimension),
                Box::new(ImpactDimension),
                Box::new(ActionDimension),
                Box::new(SpecificityDimension),
            ],
            total_max: 100,
            document_bonus: Some(dual_format_bonus as BonusFn),
            score_ceiling: SCORE_CEILING,
        }
    }

    pub fn builtin(id: RubricId) -> Self {
        match id {
            RubricId::Adr => Self::adr(),
            RubricId::PowerStatement => Self::power_statement(),
        }
    }

    /// Process-wide instance of a built-in rubric.
    pub fn shared(id: RubricId) -> &'static Rubric {
        match id {
            RubricId::Adr => &ADR,
            RubricId::PowerStatement => &POWER_STATEMENT,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Dimensions in rubric order.
    pub fn dimensions(&self) -> &[Box<dyn Dimension>] {
        &self.dimensions
    }

    pub fn specs(&self) -> Vec<DimensionSpec> {
        self.dimensions.iter().map(|d| d.spec()).collect()
    }

    pub fn total_max(&self) -> u32 {
        self.total_max
    }

    pub fn score_ceiling(&self) -> u32 {
        self.score_ceiling
    }

    pub fn has_document_bonus(&self) -> bool {
        self.document_bonus.is_some()
    }

    pub fn document_bonus(&self, text: &str, patterns: &PatternRegistry) -> Option<DocumentBonus> {
        self.document_bonus.and_then(|bonus| bonus(text, patterns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::adr::CONTEXT;

    #[test]
    fn test_builtin_rubrics_are_consistent() {
        for id in RubricId::ALL {
            let rubric = Rubric::builtin(id);
            assert_eq!(rubric.id(), id.as_str());
            assert_eq!(rubric.dimensions().len(), 4);
            assert!(rubric.check().is_ok());
        }
    }

    #[test]
    fn test_dimension_order() {
        let names: Vec<&str> = Rubric::adr().specs().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Context", "Decision", "Consequences", "Status"]);

        let names: Vec<&str> = Rubric::power_statement().specs().iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Clarity", "Impact", "Action", "Specificity"]);
    }

    #[test]
    fn test_ceiling_and_bonus() {
        let adr = Rubric::shared(RubricId::Adr);
        assert!(!adr.has_document_bonus());
        assert_eq!(adr.score_ceiling(), adr.total_max());

        let power = Rubric::shared(RubricId::PowerStatement);
        assert!(power.has_document_bonus());
        assert_eq!(power.score_ceiling(), SCORE_CEILING);
    }

    #[test]
    fn test_points_mismatch() {
        let err = Rubric::new(
            "partial",
            "Partial ADR",
            vec![Box::new(ContextDimension), Box::new(DecisionDimension)],
            100,
        )
        .unwrap_err();
        assert_eq!(
            err,
            RubricError::PointsMismatch {
                expected: 100,
                actual: 50
            }
        );
    }

    #[test]
    fn test_empty_and_duplicate() {
        assert_eq!(
            Rubric::new("empty", "Empty", Vec::new(), 0).unwrap_err(),
            RubricError::Empty
        );

        let err = Rubric::new(
            "twice",
            "Context twice",
            vec![Box::new(ContextDimension), Box::new(ContextDimension)],
            CONTEXT.max_points * 2,
        )
        .unwrap_err();
        assert_eq!(err, RubricError::DuplicateDimension("Context".to_string()));
    }

    #[test]
    fn test_custom_rubric_with_bonus_caps_ceiling() {
        let rubric = Rubric::new(
            "clarity-only",
            "Clarity only",
            vec![Box::new(ClarityDimension)],
            25,
        )
        .unwrap()
        .with_document_bonus(dual_format_bonus, 250);
        assert_eq!(rubric.id(), "clarity-only");
        assert_eq!(rubric.score_ceiling(), SCORE_CEILING);
    }
}
