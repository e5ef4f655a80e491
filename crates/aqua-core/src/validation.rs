//! # Validation Module
//!
//! Input validation for catalog definitions and booking selections.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front-end (React Native)                                     │
//! │  └── Steppers disable at 1 and 4 jet skis, 1 and 8 hours               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Selection reducer                                            │
//! │  └── Out-of-range steps are no-ops                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing engine (THIS MODULE)                                 │
//! │  └── Rejects out-of-range input, whoever built the selection           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use aqua_core::validation::{validate_duration, validate_quantity};
//!
//! assert!(validate_quantity(3).is_ok());
//! assert!(validate_quantity(5).is_err());
//! assert!(validate_duration(8).is_ok());
//! ```

use chrono::{Duration, NaiveDate};

use crate::error::ValidationError;
use crate::money::Money;
use crate::{
    MAX_CATALOG_ID_LEN, MAX_DURATION_HOURS, MAX_LABEL_LEN, MAX_PRICE_CENTS, MAX_QUANTITY,
    MIN_DURATION_HOURS, MIN_QUANTITY,
};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Catalog Validators
// =============================================================================

/// Validates a catalog id such as `jetski` or `beachsetup`.
///
/// ## Rules
/// - Must not be empty
/// - At most 32 characters
/// - Lowercase ASCII letters, digits, hyphens and underscores only
///
/// ## Example
/// ```rust
/// use aqua_core::validation::validate_catalog_id;
///
/// assert!(validate_catalog_id("aqualounge").is_ok());
/// assert!(validate_catalog_id("Aqua Lounge").is_err());
/// assert!(validate_catalog_id("").is_err());
/// ```
pub fn validate_catalog_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > MAX_CATALOG_ID_LEN {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: MAX_CATALOG_ID_LEN,
        });
    }

    if !id
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: "must contain only lowercase letters, digits, hyphens, and underscores"
                .to_string(),
        });
    }

    Ok(())
}

/// Validates a display label.
///
/// ## Rules
/// - Must not be blank
/// - At most 100 characters
pub fn validate_label(label: &str) -> ValidationResult<()> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::Required {
            field: "label".to_string(),
        });
    }

    if label.len() > MAX_LABEL_LEN {
        return Err(ValidationError::TooLong {
            field: "label".to_string(),
            max: MAX_LABEL_LEN,
        });
    }

    Ok(())
}

/// Validates a catalog price.
///
/// Unlike retail stock, nothing here is ever free: a zero price would make a
/// zero-cost booking possible, which the business never offers.
///
/// ## Rules
/// - Strictly positive
/// - At most [`MAX_PRICE_CENTS`], so quote arithmetic cannot overflow
///
/// ```rust
/// use aqua_core::money::Money;
/// use aqua_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_major(60)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price.cents() > MAX_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price in cents".to_string(),
            min: 1,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

// =============================================================================
// Selection Validators
// =============================================================================

/// Validates a jet ski count.
///
/// ## Rules
/// - Between 1 and 4 inclusive (the size of the fleet per booking)
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if !(MIN_QUANTITY..=MAX_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: MIN_QUANTITY,
            max: MAX_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a rental duration in hours.
///
/// ## Rules
/// - Between 1 and 8 inclusive
pub fn validate_duration(hours: i64) -> ValidationResult<()> {
    if !(MIN_DURATION_HOURS..=MAX_DURATION_HOURS).contains(&hours) {
        return Err(ValidationError::OutOfRange {
            field: "duration".to_string(),
            min: MIN_DURATION_HOURS,
            max: MAX_DURATION_HOURS,
        });
    }

    Ok(())
}

/// Validates a booking date against today's date.
///
/// ## Rules
/// - Not in the past
/// - At most `horizon_days` ahead (the date picker offers 90 days)
/// - A horizon that runs past the end of the calendar is itself out of range
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use aqua_core::validation::validate_booking_date;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
/// assert!(validate_booking_date(today, today, 90).is_ok());
/// assert!(validate_booking_date(today.pred_opt().unwrap(), today, 90).is_err());
/// ```
pub fn validate_booking_date(
    date: NaiveDate,
    today: NaiveDate,
    horizon_days: i64,
) -> ValidationResult<()> {
    let out_of_range = || ValidationError::OutOfRange {
        field: "days ahead".to_string(),
        min: 0,
        max: horizon_days,
    };

    let latest = Duration::try_days(horizon_days)
        .and_then(|horizon| today.checked_add_signed(horizon))
        .ok_or_else(out_of_range)?;

    if date < today || date > latest {
        return Err(out_of_range());
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
