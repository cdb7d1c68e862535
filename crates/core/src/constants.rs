//! Constants used throughout the cardio core crate.
//!
//! This module contains the artifact location and classifier contract
//! constants to ensure consistency across the codebase.

/// Default location of the classifier artifact when no explicit path is configured.
pub const DEFAULT_MODEL_PATH: &str = "cardio_model.json";

/// Number of clinical features the classifier consumes.
pub const FEATURE_COUNT: usize = 11;

/// Canonical feature order the classifier was trained with.
///
/// This order is a contract with the external artifact; it must never be
/// derived from the iteration order of a generic key-value structure.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "gender",
    "height",
    "weight",
    "ap_hi",
    "ap_lo",
    "cholesterol",
    "gluc",
    "smoke",
    "alco",
    "active",
];

/// Label reported when the classifier flags cardiovascular risk.
pub const HIGH_RISK_LABEL: &str = "High Risk";

/// Label reported when the classifier does not flag cardiovascular risk.
pub const LOW_RISK_LABEL: &str = "Low Risk";
