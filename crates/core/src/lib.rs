//! # Cardio Core
//!
//! Core inference logic for the cardiovascular disease risk service.
//!
//! This crate contains the validated request pipeline and model handling:
//! - Clinical observation validation against declared ranges
//! - Fixed-order feature assembly
//! - The classifier capability seam and the gradient-boosted artifact
//! - One-time model loading into process-wide read-only state
//!
//! **No API concerns**: HTTP routing, wire-body serialization, CORS and OpenAPI documentation
//! belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod features;
pub mod loader;
pub mod model;
pub mod observation;
pub mod pipeline;

pub use config::ServiceConfig;
pub use error::{
    ConfigError, FieldViolation, InferenceFault, ModelLoadError, PredictError, PredictResult,
    ValidationError,
};
pub use features::{FeatureRow, FeatureVector};
pub use loader::{load_model, ModelState};
pub use model::Classifier;
pub use observation::{ClinicalObservation, ObservationInput};
pub use pipeline::{InferenceService, PredictionResult};
