//! Quiz problems and grading

use std::ops::RangeInclusive;
use serde::{Serialize, Serializer};
use thiserror::Error;
use tangga_units::{convert_units, ConversionError, Domain, Unit, UNITS};

/// Source values are drawn from this range
pub const SOURCE_VALUE_RANGE: RangeInclusive<u32> = 1..=20;

/// Absolute tolerance when comparing an answer with the key
pub const ANSWER_TOLERANCE: f64 = 0.0001;

/// Errors from building a problem by hand
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuizError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("source and target are both {unit}")]
    DegenerateProblem { unit: String },

    #[error("source value {0} is outside 1..=20")]
    ValueOutOfRange(u32),
}

/// "How many `target` is `source_value` `source`?"
///
/// Units always come from the domain's ladder and never coincide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuizProblem {
    pub domain: Domain,
    #[serde(serialize_with = "unit_name")]
    pub source: &'static Unit,
    #[serde(serialize_with = "unit_name")]
    pub target: &'static Unit,
    pub source_value: u32,
}

fn unit_name<S: Serializer>(unit: &&'static Unit, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(unit.name)
}

/// Outcome of grading one answer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradeResult {
    pub correct: bool,
    pub expected: f64,
}

impl QuizProblem {
    /// Build a problem from unit names
    pub fn new(domain: Domain, source: &str, target: &str, source_value: u32) -> Result<Self, QuizError> {
        if !SOURCE_VALUE_RANGE.contains(&source_value) {
            return Err(QuizError::ValueOutOfRange(source_value));
        }
        let source = UNITS.unit(domain, source)?;
        let target = UNITS.unit(domain, target)?;
        if source.name == target.name {
            return Err(QuizError::DegenerateProblem { unit: source.name.to_string() });
        }
        Ok(QuizProblem { domain, source, target, source_value })
    }

    /// Build from units already taken off the domain's ladder
    pub(crate) fn from_units(domain: Domain, source: &'static Unit, target: &'static Unit, source_value: u32) -> Self {
        debug_assert!(source.name != target.name);
        QuizProblem { domain, source, target, source_value }
    }

    /// The answer key
    pub fn expected(&self) -> f64 {
        convert_units(self.source, self.target, f64::from(self.source_value))
    }

    /// Grade a candidate answer against the key
    pub fn grade(&self, candidate: f64) -> GradeResult {
        let expected = self.expected();
        GradeResult {
            correct: (candidate - expected).abs() < ANSWER_TOLERANCE,
            expected,
        }
    }
}

impl Default for QuizProblem {
    /// 5 km to m
    fn default() -> Self {
        let ladder = UNITS.ladder(Domain::Length);
        QuizProblem::from_units(Domain::Length, &ladder[0], &ladder[3], 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_problem() {
        let p = QuizProblem::default();
        assert_eq!(p.domain, Domain::Length);
        assert_eq!(p.source.name, "km");
        assert_eq!(p.target.name, "m");
        assert_eq!(p.source_value, 5);
        assert_eq!(p.expected(), 5000.0);
    }

    #[test]
    fn test_grading_tolerance_boundary() {
        let p = QuizProblem::default();
        assert!(p.grade(5000.00005).correct);
        assert!(!p.grade(5000.001).correct);
        assert!(!p.grade(4999.0).correct);
    }

    #[test]
    fn test_wrong_answer_reports_key() {
        let g = QuizProblem::default().grade(50.0);
        assert_eq!(g, GradeResult { correct: false, expected: 5000.0 });
    }

    #[test]
    fn test_mass_problem_uses_mass_ladder() {
        let p = QuizProblem::new(Domain::Mass, "kg", "hg (ons)", 3).unwrap();
        assert_eq!(p.expected(), 30.0);
        assert!(p.grade(30.0).correct);
    }

    #[test]
    fn test_new_rejects_degenerate() {
        let err = QuizProblem::new(Domain::Mass, "g", "g", 3).unwrap_err();
        assert_eq!(err, QuizError::DegenerateProblem { unit: "g".to_string() });
    }

    #[test]
    fn test_new_rejects_out_of_range_value() {
        assert_eq!(QuizProblem::new(Domain::Length, "m", "cm", 0).unwrap_err(), QuizError::ValueOutOfRange(0));
        assert_eq!(QuizProblem::new(Domain::Length, "m", "cm", 21).unwrap_err(), QuizError::ValueOutOfRange(21));
    }

    #[test]
    fn test_new_rejects_foreign_unit() {
        let err = QuizProblem::new(Domain::Length, "kg", "m", 3).unwrap_err();
        assert!(matches!(err, QuizError::Conversion(ConversionError::UnknownUnit { .. })));
    }

    #[test]
    fn test_serialize_problem() {
        let json = serde_json::to_value(QuizProblem::default()).unwrap();
        assert_eq!(json["domain"], "length");
        assert_eq!(json["source"], "km");
        assert_eq!(json["target"], "m");
        assert_eq!(json["source_value"], 5);
    }
}
