//! # Error Types
//!
//! Domain-specific error types for aqua-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  aqua-core errors (this file)                                          │
//! │  ├── CoreError        - Booking rule violations                        │
//! │  └── ValidationError  - Out-of-range or malformed input                │
//! │                                                                         │
//! │  aqua-desk errors (app crate)                                          │
//! │  └── ApiError         - What the front-end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front-end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Severity
//! - `NoServiceSelected`: recoverable, the user is prompted to pick a service
//! - `Validation`: recoverable, the UI normally guards these bounds already
//! - `UnknownCatalogId`, `InvalidCatalog`: programming/config errors, never
//!   silently ignored

use thiserror::Error;

use crate::types::CatalogKind;

// =============================================================================
// Core Error
// =============================================================================

/// Core booking errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A total or confirmation was requested before a service was chosen.
    ///
    /// This is distinct from a zero total: every offering has a positive
    /// price, so a zero-cost booking is never a valid state.
    ///
    /// ## User Workflow
    /// ```text
    /// Tap "Confirm Booking" (no service card selected)
    ///      │
    ///      ▼
    /// NoServiceSelected
    ///      │
    ///      ▼
    /// UI shows: "Please select a service type." and stays on the screen
    /// ```
    #[error("Please select a service type")]
    NoServiceSelected,

    /// The selection references an id the catalog does not define.
    ///
    /// Indicates the catalog and the selection state are out of sync.
    #[error("Unknown {kind} id in selection: {id}")]
    UnknownCatalogId { kind: CatalogKind, id: String },

    /// The customize flow always prices its base service; it cannot be swapped.
    #[error("Service {current} is fixed in this flow and cannot be changed to {requested}")]
    ServiceLocked { current: String, requested: String },

    /// A catalog definition is inconsistent (missing base service, etc.).
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed id or booking reference).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two add-ons sharing an id).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
