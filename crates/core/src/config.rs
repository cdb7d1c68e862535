//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. The intent is to avoid reading process-wide environment variables
//! during request handling, which can lead to inconsistent behaviour in multi-threaded runtimes
//! and test harnesses.

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    model_path: PathBuf,
    rest_addr: String,
}

impl ServiceConfig {
    /// Create a new `ServiceConfig`.
    pub fn new(model_path: PathBuf, rest_addr: String) -> Result<Self, ConfigError> {
        if model_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidInput(
                "model_path cannot be empty".into(),
            ));
        }

        if rest_addr.trim().is_empty() {
            return Err(ConfigError::InvalidInput(
                "rest_addr cannot be empty".into(),
            ));
        }

        Ok(Self {
            model_path,
            rest_addr,
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn rest_addr(&self) -> &str {
        &self.rest_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_config_accepts_valid_values() {
        let cfg = ServiceConfig::new(PathBuf::from("cardio_model.json"), "0.0.0.0:8000".into())
            .expect("config should be valid");
        assert_eq!(cfg.model_path(), Path::new("cardio_model.json"));
        assert_eq!(cfg.rest_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn test_service_config_rejects_empty_model_path() {
        let err = ServiceConfig::new(PathBuf::new(), "0.0.0.0:8000".into())
            .expect_err("should reject empty model path");
        assert!(matches!(err, ConfigError::InvalidInput(msg) if msg.contains("model_path")));
    }

    #[test]
    fn test_service_config_rejects_blank_rest_addr() {
        let err = ServiceConfig::new(PathBuf::from("cardio_model.json"), "   ".into())
            .expect_err("should reject blank address");
        assert!(matches!(err, ConfigError::InvalidInput(msg) if msg.contains("rest_addr")));
    }
}
