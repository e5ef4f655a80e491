//! # API Error Type
//!
//! Unified error type for desk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Aqua 360                               │
//! │                                                                         │
//! │  Command Function: Result<T, ApiError>                                 │
//! │         │                                                               │
//! │         ├── CoreError::NoServiceSelected ──► SELECTION_REQUIRED        │
//! │         ├── CoreError::Validation ─────────► VALIDATION_ERROR          │
//! │         ├── CoreError::UnknownCatalogId ───► NOT_FOUND (logged)        │
//! │         ├── CoreError::ServiceLocked ──────► BUSINESS_LOGIC            │
//! │         └── ConfigError ───────────────────► CONFIG_ERROR              │
//! │                                                                         │
//! │  Front-end receives:                                                   │
//! │    { "code": "SELECTION_REQUIRED",                                      │
//! │      "message": "Please select a service type" }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use aqua_core::CoreError;
use serde::Serialize;

use crate::state::ConfigError;

/// API error returned from commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Catalog id not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Confirmation or pricing attempted before choosing a service
    SelectionRequired,

    /// Business rule refused the operation
    BusinessLogic,

    /// Configuration or catalog file could not be loaded
    ConfigError,

    /// Internal error
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NoServiceSelected => {
                ApiError::new(ErrorCode::SelectionRequired, err.to_string())
            }
            CoreError::UnknownCatalogId { kind, ref id } => {
                // Catalog and selection disagree: a bug, not a user mistake
                tracing::error!(%kind, %id, "selection references unknown catalog id");
                ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", kind, id))
            }
            CoreError::ServiceLocked { .. } => {
                ApiError::new(ErrorCode::BusinessLogic, err.to_string())
            }
            CoreError::InvalidCatalog { reason } => {
                tracing::error!(%reason, "invalid catalog");
                ApiError::new(ErrorCode::ConfigError, format!("Invalid catalog: {}", reason))
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!(error = %err, "configuration failed");
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use aqua_core::{CatalogKind, ValidationError};

    #[test]
    fn test_no_service_maps_to_selection_required() {
        let api: ApiError = CoreError::NoServiceSelected.into();
        assert_eq!(api.code, ErrorCode::SelectionRequired);
        assert_eq!(api.message, "Please select a service type");
    }

    #[test]
    fn test_unknown_id_maps_to_not_found() {
        let api: ApiError = CoreError::UnknownCatalogId {
            kind: CatalogKind::AddOn,
            id: "parasail".to_string(),
        }
        .into();
        assert_eq!(api.code, ErrorCode::NotFound);
        assert_eq!(api.message, "add-on not found: parasail");
    }

    #[test]
    fn test_validation_maps_to_validation_error() {
        let api: ApiError = CoreError::Validation(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: 4,
        })
        .into();
        assert_eq!(api.code, ErrorCode::ValidationError);
        assert_eq!(api.message, "quantity must be between 1 and 4");
    }

    #[test]
    fn test_serialized_shape() {
        let api = ApiError::validation("time is required");
        let json = serde_json::to_value(&api).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "time is required");
    }
}
