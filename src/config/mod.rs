//! Configuration loading and management

use anyhow::Result;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Symbolic HTTP status codes used by the sale handlers
///
/// The handlers never hard-code numeric statuses; they go through this map,
/// which is bound at configuration time and defaults to the conventional
/// codes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMap {
    /// Status for every successful response
    #[serde(default = "defaults::success")]
    pub success: u16,

    /// Status for unusable request data
    #[serde(default = "defaults::invalid_data")]
    pub invalid_data: u16,

    /// Status for missing resources and stock problems
    #[serde(default = "defaults::not_found")]
    pub not_found: u16,

    /// Status for unexpected repository failures
    #[serde(default = "defaults::internal_server_error")]
    pub internal_server_error: u16,
}

mod defaults {
    pub fn success() -> u16 {
        200
    }

    pub fn invalid_data() -> u16 {
        400
    }

    pub fn not_found() -> u16 {
        404
    }

    pub fn internal_server_error() -> u16 {
        500
    }
}

impl Default for StatusMap {
    fn default() -> Self {
        Self {
            success: defaults::success(),
            invalid_data: defaults::invalid_data(),
            not_found: defaults::not_found(),
            internal_server_error: defaults::internal_server_error(),
        }
    }
}

impl StatusMap {
    pub fn success(&self) -> StatusCode {
        Self::code(self.success, StatusCode::OK)
    }

    pub fn invalid_data(&self) -> StatusCode {
        Self::code(self.invalid_data, StatusCode::BAD_REQUEST)
    }

    pub fn not_found(&self) -> StatusCode {
        Self::code(self.not_found, StatusCode::NOT_FOUND)
    }

    pub fn internal_server_error(&self) -> StatusCode {
        Self::code(self.internal_server_error, StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn code(raw: u16, fallback: StatusCode) -> StatusCode {
        StatusCode::from_u16(raw).unwrap_or(fallback)
    }
}

/// Complete configuration for the sale API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Status-code bindings for the handlers
    #[serde(default)]
    pub statuses: StatusMap,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            statuses: StatusMap::default(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}
