//! The inference pipeline.
//!
//! Each call is stateless and independent: validate the raw input, check that a model is
//! resident, assemble the fixed-order feature row, invoke the classifier, derive the response
//! values. No caching and no batching across requests.

use crate::constants::{HIGH_RISK_LABEL, LOW_RISK_LABEL};
use crate::error::{PredictError, PredictResult};
use crate::features::FeatureVector;
use crate::loader::ModelState;
use crate::observation::{ClinicalObservation, ObservationInput};
use std::sync::Arc;

/// Outcome of one inference call. Derived per request, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    /// Binary label returned by the classifier (0 or 1).
    pub classification: u8,
    /// Positive-class probability when the artifact exposes one, otherwise the classification
    /// cast to a real number.
    pub risk_probability: f64,
    /// Human-readable label derived one-to-one from the classification.
    pub risk_label: &'static str,
}

/// Inference service shared across request handlers.
///
/// Holds the process-wide model state behind an `Arc`; cloning is cheap and concurrent calls
/// need no locking because the state is read-only after startup.
#[derive(Clone)]
pub struct InferenceService {
    model: Arc<ModelState>,
}

impl InferenceService {
    pub fn new(model: Arc<ModelState>) -> Self {
        Self { model }
    }

    /// Runs one inference request through the pipeline.
    ///
    /// # Errors
    ///
    /// - [`PredictError::Validation`] if any field is outside its declared range; the
    ///   classifier is never invoked.
    /// - [`PredictError::ModelUnavailable`] if no artifact is resident; no invocation is
    ///   attempted.
    /// - [`PredictError::Inference`] if the classifier invocation itself fails, preserving the
    ///   underlying message.
    pub fn predict(&self, input: ObservationInput) -> PredictResult<PredictionResult> {
        let observation = ClinicalObservation::new(input)?;

        let classifier = self
            .model
            .classifier()
            .ok_or(PredictError::ModelUnavailable)?;

        let batch = [FeatureVector::from_observation(&observation).as_row()];

        let labels = classifier
            .predict_labels(&batch)
            .map_err(|fault| PredictError::Inference(fault.to_string()))?;
        let classification = *labels
            .first()
            .ok_or_else(|| PredictError::Inference("classifier returned an empty batch".into()))?;

        let risk_probability = match classifier.predict_probabilities(&batch) {
            Some(result) => {
                let probabilities =
                    result.map_err(|fault| PredictError::Inference(fault.to_string()))?;
                *probabilities.first().ok_or_else(|| {
                    PredictError::Inference("classifier returned an empty probability batch".into())
                })?
            }
            None => f64::from(classification),
        };

        let risk_label = if classification == 1 {
            HIGH_RISK_LABEL
        } else {
            LOW_RISK_LABEL
        };

        Ok(PredictionResult {
            classification,
            risk_probability,
            risk_label,
        })
    }
}
