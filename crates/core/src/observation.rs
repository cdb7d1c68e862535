//! Clinical observation validation.
//!
//! A [`ClinicalObservation`] can only be constructed from raw input whose eleven fields all sit
//! inside their declared clinical ranges. Construction is the single validation gate: downstream
//! feature assembly and classifier invocation never re-check values.
//!
//! No cross-field invariants are enforced (for example, systolic above diastolic); the declared
//! per-field ranges are the whole contract.

use crate::error::{FieldViolation, ValidationError};
use std::ops::RangeInclusive;

/// Age in years.
pub const AGE_RANGE: RangeInclusive<f64> = 20.0..=80.0;
/// Gender code (1: female, 2: male, dataset convention).
pub const GENDER_RANGE: RangeInclusive<i64> = 1..=2;
/// Height in cm.
pub const HEIGHT_RANGE: RangeInclusive<f64> = 50.0..=250.0;
/// Weight in kg.
pub const WEIGHT_RANGE: RangeInclusive<f64> = 10.0..=250.0;
/// Systolic blood pressure.
pub const AP_HI_RANGE: RangeInclusive<f64> = 50.0..=250.0;
/// Diastolic blood pressure.
pub const AP_LO_RANGE: RangeInclusive<f64> = 30.0..=150.0;
/// Cholesterol level (1: normal, 2: above normal, 3: well above normal).
pub const CHOLESTEROL_RANGE: RangeInclusive<i64> = 1..=3;
/// Glucose level (1: normal, 2: above normal, 3: well above normal).
pub const GLUC_RANGE: RangeInclusive<i64> = 1..=3;
/// Smoking flag.
pub const SMOKE_RANGE: RangeInclusive<i64> = 0..=1;
/// Alcohol intake flag.
pub const ALCO_RANGE: RangeInclusive<i64> = 0..=1;
/// Physical activity flag.
pub const ACTIVE_RANGE: RangeInclusive<i64> = 0..=1;

/// Raw, not-yet-validated input for one inference request.
///
/// Continuous measurements are `f64`, categorical codes are `i64`. Wire
/// deserialization happens in the API layer; this type carries the already
/// well-typed values into validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationInput {
    pub age: f64,
    pub gender: i64,
    pub height: f64,
    pub weight: f64,
    pub ap_hi: f64,
    pub ap_lo: f64,
    pub cholesterol: i64,
    pub gluc: i64,
    pub smoke: i64,
    pub alco: i64,
    pub active: i64,
}

/// A clinical observation whose fields are all inside their declared ranges.
///
/// Fields are private: the only way to obtain one is [`ClinicalObservation::new`], which makes
/// the range invariant hold by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ClinicalObservation {
    age: f64,
    gender: i64,
    height: f64,
    weight: f64,
    ap_hi: f64,
    ap_lo: f64,
    cholesterol: i64,
    gluc: i64,
    smoke: i64,
    alco: i64,
    active: i64,
}

impl ClinicalObservation {
    /// Validates `input` field-by-field against the declared clinical ranges.
    ///
    /// Every out-of-range field is collected, so a rejected request reports all violations at
    /// once. Non-finite continuous values (NaN, infinities) fail their range check.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] listing each offending field with its declared bounds and
    /// the given value.
    pub fn new(input: ObservationInput) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        check_continuous("age", input.age, &AGE_RANGE, &mut violations);
        check_categorical("gender", input.gender, &GENDER_RANGE, &mut violations);
        check_continuous("height", input.height, &HEIGHT_RANGE, &mut violations);
        check_continuous("weight", input.weight, &WEIGHT_RANGE, &mut violations);
        check_continuous("ap_hi", input.ap_hi, &AP_HI_RANGE, &mut violations);
        check_continuous("ap_lo", input.ap_lo, &AP_LO_RANGE, &mut violations);
        check_categorical(
            "cholesterol",
            input.cholesterol,
            &CHOLESTEROL_RANGE,
            &mut violations,
        );
        check_categorical("gluc", input.gluc, &GLUC_RANGE, &mut violations);
        check_categorical("smoke", input.smoke, &SMOKE_RANGE, &mut violations);
        check_categorical("alco", input.alco, &ALCO_RANGE, &mut violations);
        check_categorical("active", input.active, &ACTIVE_RANGE, &mut violations);

        if !violations.is_empty() {
            return Err(ValidationError { violations });
        }

        Ok(Self {
            age: input.age,
            gender: input.gender,
            height: input.height,
            weight: input.weight,
            ap_hi: input.ap_hi,
            ap_lo: input.ap_lo,
            cholesterol: input.cholesterol,
            gluc: input.gluc,
            smoke: input.smoke,
            alco: input.alco,
            active: input.active,
        })
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn gender(&self) -> i64 {
        self.gender
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn ap_hi(&self) -> f64 {
        self.ap_hi
    }

    pub fn ap_lo(&self) -> f64 {
        self.ap_lo
    }

    pub fn cholesterol(&self) -> i64 {
        self.cholesterol
    }

    pub fn gluc(&self) -> i64 {
        self.gluc
    }

    pub fn smoke(&self) -> i64 {
        self.smoke
    }

    pub fn alco(&self) -> i64 {
        self.alco
    }

    pub fn active(&self) -> i64 {
        self.active
    }
}

impl TryFrom<ObservationInput> for ClinicalObservation {
    type Error = ValidationError;

    fn try_from(input: ObservationInput) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

fn check_continuous(
    field: &'static str,
    value: f64,
    range: &RangeInclusive<f64>,
    out: &mut Vec<FieldViolation>,
) {
    // NaN and infinities fail `contains`, so non-finite values are rejected here too.
    if !range.contains(&value) {
        out.push(FieldViolation {
            field,
            min: *range.start(),
            max: *range.end(),
            given: value,
        });
    }
}

fn check_categorical(
    field: &'static str,
    value: i64,
    range: &RangeInclusive<i64>,
    out: &mut Vec<FieldViolation>,
) {
    if !range.contains(&value) {
        out.push(FieldViolation {
            field,
            min: *range.start() as f64,
            max: *range.end() as f64,
            given: value as f64,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ObservationInput {
        ObservationInput {
            age: 55.0,
            gender: 2,
            height: 170.0,
            weight: 80.0,
            ap_hi: 140.0,
            ap_lo: 90.0,
            cholesterol: 2,
            gluc: 1,
            smoke: 0,
            alco: 0,
            active: 1,
        }
    }

    #[test]
    fn test_new_accepts_valid_observation() {
        let obs = ClinicalObservation::new(valid_input()).expect("should accept valid input");
        assert_eq!(obs.age(), 55.0);
        assert_eq!(obs.gender(), 2);
        assert_eq!(obs.active(), 1);
    }

    #[test]
    fn test_new_accepts_boundary_values() {
        let mut input = valid_input();
        input.age = 20.0;
        input.ap_hi = 250.0;
        input.ap_lo = 30.0;
        input.cholesterol = 3;
        assert!(ClinicalObservation::new(input).is_ok());

        let mut input = valid_input();
        input.age = 80.0;
        input.height = 50.0;
        input.weight = 250.0;
        assert!(ClinicalObservation::new(input).is_ok());
    }

    #[test]
    fn test_new_rejects_age_below_range() {
        let mut input = valid_input();
        input.age = 15.0;

        let err = ClinicalObservation::new(input).expect_err("should reject age below range");
        assert_eq!(err.violations.len(), 1);
        let violation = &err.violations[0];
        assert_eq!(violation.field, "age");
        assert_eq!(violation.min, 20.0);
        assert_eq!(violation.max, 80.0);
        assert_eq!(violation.given, 15.0);
    }

    #[test]
    fn test_new_rejects_each_field_above_range() {
        let cases: [(&str, ObservationInput); 11] = [
            ("age", {
                let mut i = valid_input();
                i.age = 81.0;
                i
            }),
            ("gender", {
                let mut i = valid_input();
                i.gender = 3;
                i
            }),
            ("height", {
                let mut i = valid_input();
                i.height = 251.0;
                i
            }),
            ("weight", {
                let mut i = valid_input();
                i.weight = 260.0;
                i
            }),
            ("ap_hi", {
                let mut i = valid_input();
                i.ap_hi = 300.0;
                i
            }),
            ("ap_lo", {
                let mut i = valid_input();
                i.ap_lo = 200.0;
                i
            }),
            ("cholesterol", {
                let mut i = valid_input();
                i.cholesterol = 4;
                i
            }),
            ("gluc", {
                let mut i = valid_input();
                i.gluc = 4;
                i
            }),
            ("smoke", {
                let mut i = valid_input();
                i.smoke = 2;
                i
            }),
            ("alco", {
                let mut i = valid_input();
                i.alco = 2;
                i
            }),
            ("active", {
                let mut i = valid_input();
                i.active = 2;
                i
            }),
        ];

        for (field, input) in cases {
            let err =
                ClinicalObservation::new(input).expect_err("should reject out-of-range field");
            assert_eq!(err.violations.len(), 1, "field {field}");
            assert_eq!(err.violations[0].field, field);
        }
    }

    #[test]
    fn test_new_rejects_each_field_below_range() {
        let cases: [(&str, ObservationInput); 6] = [
            ("age", {
                let mut i = valid_input();
                i.age = 19.9;
                i
            }),
            ("gender", {
                let mut i = valid_input();
                i.gender = 0;
                i
            }),
            ("height", {
                let mut i = valid_input();
                i.height = 49.0;
                i
            }),
            ("weight", {
                let mut i = valid_input();
                i.weight = 9.0;
                i
            }),
            ("ap_hi", {
                let mut i = valid_input();
                i.ap_hi = 40.0;
                i
            }),
            ("ap_lo", {
                let mut i = valid_input();
                i.ap_lo = 20.0;
                i
            }),
        ];

        for (field, input) in cases {
            let err =
                ClinicalObservation::new(input).expect_err("should reject out-of-range field");
            assert_eq!(err.violations[0].field, field);
        }
    }

    #[test]
    fn test_new_collects_all_violations() {
        let mut input = valid_input();
        input.age = 10.0;
        input.gender = 5;
        input.smoke = -1;

        let err = ClinicalObservation::new(input).expect_err("should reject invalid input");
        let fields: Vec<&str> = err.violations.iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["age", "gender", "smoke"]);
    }

    #[test]
    fn test_new_rejects_non_finite_values() {
        let mut input = valid_input();
        input.weight = f64::NAN;
        let err = ClinicalObservation::new(input).expect_err("should reject NaN");
        assert_eq!(err.violations[0].field, "weight");

        let mut input = valid_input();
        input.ap_hi = f64::INFINITY;
        let err = ClinicalObservation::new(input).expect_err("should reject infinity");
        assert_eq!(err.violations[0].field, "ap_hi");
    }

    #[test]
    fn test_violation_message_names_field_and_bounds() {
        let mut input = valid_input();
        input.age = 15.0;

        let err = ClinicalObservation::new(input).expect_err("should reject age below range");
        let message = err.violations[0].to_string();
        assert_eq!(message, "age must be between 20 and 80, got 15");
    }
}
