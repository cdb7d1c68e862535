//! Error types for the cardio core crate.

use std::fmt;

/// One field of a prediction request that fell outside its declared range.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolation {
    /// Name of the offending field, as it appears on the wire.
    pub field: &'static str,
    /// Lower bound of the declared range.
    pub min: f64,
    /// Upper bound of the declared range.
    pub max: f64,
    /// The value the client supplied.
    pub given: f64,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} must be between {} and {}, got {}",
            self.field, self.min, self.max, self.given
        )
    }
}

/// Validation failure for a prediction request.
///
/// Carries every out-of-range field so the caller can report all violations
/// at once rather than one per round trip.
#[derive(Debug, thiserror::Error)]
#[error("clinical observation failed range validation ({} field(s) out of range)", violations.len())]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

/// Fault raised by a classifier invocation.
///
/// The contained message is the only information the opaque artifact
/// provides about its own failure; it is preserved for diagnostics.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct InferenceFault {
    message: String,
}

impl InferenceFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that can occur during an inference call.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// Client input out of contract; the classifier was never invoked.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// No classifier artifact is resident.
    #[error("model not loaded")]
    ModelUnavailable,
    /// The classifier invocation itself failed.
    #[error("prediction error: {0}")]
    Inference(String),
}

pub type PredictResult<T> = std::result::Result<T, PredictError>;

/// Errors raised while loading the classifier artifact.
///
/// The loader collapses all of these into an unavailable model state; the
/// variants exist so the startup diagnostic can name the underlying cause.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("failed to read model artifact: {0}")]
    FileRead(#[source] std::io::Error),
    #[error("failed to deserialize model artifact: {0}")]
    Deserialization(#[source] serde_json::Error),
    #[error("model artifact failed structural validation: {0}")]
    InvalidArtifact(String),
}

/// Errors raised while constructing the startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidInput(String),
}
