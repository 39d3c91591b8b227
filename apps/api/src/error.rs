//! Error handling for the OpenMusic playlist store
//!
//! Every store operation reports failures through [`ApiError`]. The three
//! domain variants (not found, invariant, authorization) are expected,
//! catchable conditions; the HTTP layer maps them to responses through
//! [`ApiError::status_code`] and [`ApiError::error_code`].

use serde::Serialize;
use thiserror::Error;

/// Error response body for the calling layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for client-side handling
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Main error type for playlist store operations
#[derive(Error, Debug)]
pub enum ApiError {
    /// Requested entity is absent by primary key
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// A mutation that should have affected exactly one row affected none
    #[error("invariant violated: {0}")]
    Invariant(String),

    /// Caller lacks ownership or collaboration rights on the playlist
    #[error("not authorized: {0}")]
    Authorization(String),

    /// Database query failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error (catch-all for unexpected errors)
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code the calling layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::Invariant(_) => 400,
            Self::Authorization(_) => 403,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) => 500,
        }
    }

    /// Get the error code string for client-side handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Invariant(_) => "INVARIANT_VIOLATION",
            Self::Authorization(_) => "FORBIDDEN",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Create a not found error for a specific resource
    pub fn not_found(resource_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }

    /// Create an invariant error
    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant(message.into())
    }

    /// Create an authorization error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Authorization(message.into())
    }

    /// Whether this error means the targeted entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Build the response body the calling layer serializes
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
            details: None,
        }
    }

    /// Log the error with appropriate severity based on status code
    pub fn log(&self) {
        let status = self.status_code();
        if status >= 500 {
            tracing::error!(
                error = %self,
                code = self.error_code(),
                status,
                "Server error occurred"
            );
        } else if status == 403 {
            tracing::warn!(
                error = %self,
                code = self.error_code(),
                status,
                "Authorization error"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status,
                "Client error"
            );
        }
    }
}

/// Result type alias for store operations
pub type ApiResult<T> = Result<T, ApiError>;

// ========== Conversion Implementations ==========

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        // Try to downcast to ApiError first
        match err.downcast::<ApiError>() {
            Ok(api_err) => api_err,
            Err(err) => Self::Internal(err.to_string()),
        }
    }
}

impl From<std::env::VarError> for ApiError {
    fn from(err: std::env::VarError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<openmusic_shared_config::ConfigError> for ApiError {
    fn from(err: openmusic_shared_config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
