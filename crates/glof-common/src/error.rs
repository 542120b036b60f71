//! Error types for hazard-map services.

use thiserror::Error;

/// Result type alias using HazardMapError.
pub type HazardMapResult<T> = Result<T, HazardMapError>;

/// Primary error type for map operations.
#[derive(Debug, Error)]
pub enum HazardMapError {
    // === Request Errors ===
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid parameter value for '{param}': {message}")]
    InvalidParameter { param: String, message: String },

    // === Rendering Errors ===
    #[error("Rendering failed: {0}")]
    RenderError(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl HazardMapError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            HazardMapError::MissingParameter(_) | HazardMapError::InvalidParameter { .. } => 400,

            _ => 500,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for HazardMapError {
    fn from(err: std::io::Error) -> Self {
        HazardMapError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for HazardMapError {
    fn from(err: serde_json::Error) -> Self {
        HazardMapError::InternalError(format!("JSON error: {}", err))
    }
}
