//! One-time classifier artifact loading.
//!
//! The artifact is read once at process startup. Absence or corruption is a valid, non-fatal
//! state: the process keeps serving and inference reports the model as unavailable until an
//! operator replaces the artifact and restarts.

use crate::error::ModelLoadError;
use crate::model::{Classifier, GradientBoostedEnsemble};
use std::path::Path;
use std::sync::Arc;

/// Presence of the process-wide classifier, fixed at startup.
///
/// Shared read-only by every concurrent inference call; never mutated after load.
pub enum ModelState {
    /// Artifact loaded and structurally valid.
    Ready(Arc<dyn Classifier>),
    /// Artifact missing or corrupt; inference is unavailable.
    Unavailable,
}

impl ModelState {
    /// The resident classifier, if any.
    pub fn classifier(&self) -> Option<&Arc<dyn Classifier>> {
        match self {
            ModelState::Ready(classifier) => Some(classifier),
            ModelState::Unavailable => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready(_))
    }
}

/// Loads the classifier artifact at `path`.
///
/// A single attempt with three outcomes, none fatal to the process:
/// - the artifact parses and validates: the model is resident;
/// - the file does not exist: the model stays unset and a diagnostic is emitted;
/// - reading, parsing or validation fails: the model stays unset and the diagnostic names the
///   underlying cause.
///
/// No retry and no reload: fixing a bad deployment means replacing the artifact and restarting.
pub fn load_model(path: &Path) -> ModelState {
    if !path.exists() {
        tracing::warn!("model artifact not found at {}", path.display());
        return ModelState::Unavailable;
    }

    match read_ensemble(path) {
        Ok(ensemble) => {
            tracing::info!(
                "model artifact loaded from {} ({} trees)",
                path.display(),
                ensemble.trees.len()
            );
            ModelState::Ready(Arc::new(ensemble))
        }
        Err(e) => {
            tracing::error!(
                "failed to load model artifact from {}: {}",
                path.display(),
                e
            );
            ModelState::Unavailable
        }
    }
}

fn read_ensemble(path: &Path) -> Result<GradientBoostedEnsemble, ModelLoadError> {
    let contents = std::fs::read_to_string(path).map_err(ModelLoadError::FileRead)?;
    let ensemble: GradientBoostedEnsemble =
        serde_json::from_str(&contents).map_err(ModelLoadError::Deserialization)?;
    ensemble.validate()?;
    Ok(ensemble)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FEATURE_COUNT;
    use std::fs;

    const VALID_ARTIFACT: &str = r#"{
        "format_version": 1,
        "objective": "binary:logistic",
        "base_score": 0.0,
        "feature_names": ["age", "gender", "height", "weight", "ap_hi", "ap_lo",
                          "cholesterol", "gluc", "smoke", "alco", "active"],
        "trees": [
            {"nodes": [
                {"feature": 0, "threshold": 50.0, "left": 1, "right": 2},
                {"value": -2.0},
                {"value": 2.0}
            ]}
        ]
    }"#;

    #[test]
    fn test_load_model_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = load_model(&dir.path().join("no_such_model.json"));
        assert!(!state.is_ready());
        assert!(state.classifier().is_none());
    }

    #[test]
    fn test_load_model_garbage_file_is_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cardio_model.json");
        fs::write(&path, "not json at all {{{").expect("write artifact");

        let state = load_model(&path);
        assert!(!state.is_ready());
    }

    #[test]
    fn test_load_model_structurally_invalid_artifact_is_unavailable() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cardio_model.json");
        // Parses fine, but declares the wrong feature width.
        fs::write(
            &path,
            r#"{
                "format_version": 1,
                "objective": "binary:logistic",
                "base_score": 0.0,
                "feature_names": ["age"],
                "trees": [{"nodes": [{"value": 0.1}]}]
            }"#,
        )
        .expect("write artifact");

        let state = load_model(&path);
        assert!(!state.is_ready());
    }

    #[test]
    fn test_load_model_valid_artifact_is_ready_and_predicts() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cardio_model.json");
        fs::write(&path, VALID_ARTIFACT).expect("write artifact");

        let state = load_model(&path);
        let classifier = state.classifier().expect("model should be resident");

        let mut row = [0.0; FEATURE_COUNT];
        row[0] = 70.0;
        let labels = classifier
            .predict_labels(&[row])
            .expect("prediction should succeed");
        assert_eq!(labels, vec![1]);
    }
}
