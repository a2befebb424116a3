//! Raw form submissions and their validated form.
//!
//! Parsing happens at the caller boundary; scoring only ever sees a
//! `Submission` whose metrics are finite numbers.

use serde::{Deserialize, Serialize};

use super::record::ScoreInputs;
use crate::constants::{SCORE_MAX, SCORE_MIN};
use crate::errors::InputError;

/// Form fields exactly as submitted. Every field is optional so that a
/// missing field is reported by name instead of by the deserializer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSubmission {
    pub name: Option<String>,
    pub attendance: Option<String>,
    pub internal: Option<String>,
    pub assignment: Option<String>,
    #[serde(rename = "final")]
    pub final_score: Option<String>,
}

/// A validated submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    pub scores: ScoreInputs,
}

impl Submission {
    pub fn new(name: impl Into<String>, scores: ScoreInputs) -> Self {
        Self {
            name: name.into(),
            scores,
        }
    }

    /// Validate raw form fields. When `enforce_range` is set, each metric
    /// must also lie in [0, 100].
    pub fn parse(raw: &RawSubmission, enforce_range: bool) -> Result<Self, InputError> {
        let name = raw
            .name
            .as_deref()
            .ok_or(InputError::MissingField { field: "name" })?
            .trim();
        if name.is_empty() {
            return Err(InputError::EmptyName);
        }

        let attendance = parse_metric("attendance", raw.attendance.as_deref(), enforce_range)?;
        let internal = parse_metric("internal", raw.internal.as_deref(), enforce_range)?;
        let assignment = parse_metric("assignment", raw.assignment.as_deref(), enforce_range)?;
        let final_score = parse_metric("final", raw.final_score.as_deref(), enforce_range)?;

        Ok(Self::new(
            name,
            ScoreInputs::new(attendance, internal, assignment, final_score),
        ))
    }
}

fn parse_metric(field: &'static str, value: Option<&str>, enforce_range: bool) -> Result<f64, InputError> {
    let text = value.ok_or(InputError::MissingField { field })?.trim();
    if text.is_empty() {
        return Err(InputError::MissingField { field });
    }
    let parsed: f64 = text.parse().map_err(|_| InputError::NotNumeric {
        field,
        value: text.to_string(),
    })?;
    if !parsed.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    if enforce_range && !(SCORE_MIN..=SCORE_MAX).contains(&parsed) {
        return Err(InputError::OutOfRange {
            field,
            value: parsed,
            min: SCORE_MIN,
            max: SCORE_MAX,
        });
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(name: &str, a: &str, i: &str, s: &str, f: &str) -> RawSubmission {
        RawSubmission {
            name: Some(name.to_string()),
            attendance: Some(a.to_string()),
            internal: Some(i.to_string()),
            assignment: Some(s.to_string()),
            final_score: Some(f.to_string()),
        }
    }

    #[test]
    fn parses_valid_submission() {
        let sub = Submission::parse(&raw(" Asha ", "90", "85", "88.5", "90"), true).unwrap();
        assert_eq!(sub.name, "Asha");
        assert_eq!(sub.scores, ScoreInputs::new(90.0, 85.0, 88.5, 90.0));
    }

    #[test]
    fn rejects_missing_field() {
        let mut r = raw("Asha", "90", "85", "88", "90");
        r.assignment = None;
        assert_eq!(
            Submission::parse(&r, true),
            Err(InputError::MissingField { field: "assignment" })
        );
    }

    #[test]
    fn rejects_blank_as_missing() {
        let r = raw("Asha", "90", "  ", "88", "90");
        assert_eq!(
            Submission::parse(&r, true),
            Err(InputError::MissingField { field: "internal" })
        );
    }

    #[test]
    fn rejects_non_numeric() {
        let err = Submission::parse(&raw("Asha", "ninety", "85", "88", "90"), true).unwrap_err();
        assert_eq!(err.field(), "attendance");
        assert!(matches!(err, InputError::NotNumeric { .. }));
    }

    #[test]
    fn rejects_non_finite() {
        let err = Submission::parse(&raw("Asha", "90", "85", "88", "NaN"), false).unwrap_err();
        assert_eq!(err, InputError::NonFinite { field: "final" });
        let err = Submission::parse(&raw("Asha", "inf", "85", "88", "90"), false).unwrap_err();
        assert_eq!(err, InputError::NonFinite { field: "attendance" });
    }

    #[test]
    fn range_enforcement_is_optional() {
        let r = raw("Asha", "101", "85", "88", "90");
        assert!(matches!(
            Submission::parse(&r, true),
            Err(InputError::OutOfRange { field: "attendance", .. })
        ));
        let sub = Submission::parse(&r, false).unwrap();
        assert_eq!(sub.scores.attendance, 101.0);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert!(Submission::parse(&raw("A", "0", "100", "0", "100"), true).is_ok());
        assert!(Submission::parse(&raw("A", "-0.5", "100", "0", "100"), true).is_err());
    }

    #[test]
    fn rejects_empty_name() {
        assert_eq!(
            Submission::parse(&raw("   ", "1", "2", "3", "4"), true),
            Err(InputError::EmptyName)
        );
    }
}
