//! Fixed-order feature assembly.
//!
//! The classifier was trained against a fixed column order. That order cannot be verified at
//! runtime, so it is encoded exactly once here, as a named record built by explicit
//! field-by-field assignment from a validated observation. Nothing in this module iterates a
//! generic key-value structure.

use crate::constants::FEATURE_COUNT;
use crate::observation::ClinicalObservation;

/// One row of classifier input.
pub type FeatureRow = [f64; FEATURE_COUNT];

/// The eleven model features of one observation, in training order:
/// age, gender, height, weight, ap_hi, ap_lo, cholesterol, gluc, smoke, alco, active.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    age: f64,
    gender: f64,
    height: f64,
    weight: f64,
    ap_hi: f64,
    ap_lo: f64,
    cholesterol: f64,
    gluc: f64,
    smoke: f64,
    alco: f64,
    active: f64,
}

impl FeatureVector {
    /// Builds the feature vector from a validated observation.
    ///
    /// Age is passed through in years, untransformed. Categorical codes are widened to `f64`
    /// without re-encoding.
    pub fn from_observation(observation: &ClinicalObservation) -> Self {
        Self {
            age: observation.age(),
            gender: observation.gender() as f64,
            height: observation.height(),
            weight: observation.weight(),
            ap_hi: observation.ap_hi(),
            ap_lo: observation.ap_lo(),
            cholesterol: observation.cholesterol() as f64,
            gluc: observation.gluc() as f64,
            smoke: observation.smoke() as f64,
            alco: observation.alco() as f64,
            active: observation.active() as f64,
        }
    }

    /// The row handed to the classifier, in the exact training order.
    pub fn as_row(&self) -> FeatureRow {
        [
            self.age,
            self.gender,
            self.height,
            self.weight,
            self.ap_hi,
            self.ap_lo,
            self.cholesterol,
            self.gluc,
            self.smoke,
            self.alco,
            self.active,
        ]
    }
}

impl From<&ClinicalObservation> for FeatureVector {
    fn from(observation: &ClinicalObservation) -> Self {
        Self::from_observation(observation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::ObservationInput;

    fn observation() -> ClinicalObservation {
        ClinicalObservation::new(ObservationInput {
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
        })
        .expect("observation should be valid")
    }

    #[test]
    fn test_as_row_matches_training_order() {
        let row = FeatureVector::from_observation(&observation()).as_row();
        assert_eq!(
            row,
            [55.0, 2.0, 170.0, 80.0, 140.0, 90.0, 2.0, 1.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_row_width_matches_feature_names() {
        let row = FeatureVector::from_observation(&observation()).as_row();
        assert_eq!(row.len(), crate::constants::FEATURE_NAMES.len());
    }
}
