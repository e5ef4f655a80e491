//! # aqua-core: Booking Business Logic for Aqua 360
//!
//! Pricing and configuration rules behind the booking and customize screens
//! of the Aqua 360 jet ski rental app, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Aqua 360 Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Mobile Front-end (React Native)                │   │
//! │  │   Service cards ──► Steppers ──► Add-on toggles ──► Summary     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 aqua-desk (sessions, config, logs)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aqua-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌───────────┐ ┌─────────┐ ┌───────────┐ ┌───────┐ │   │
//! │  │  │ catalog │ │ selection │ │ pricing │ │ reference │ │summary│ │   │
//! │  │  └─────────┘ └───────────┘ └─────────┘ └───────────┘ └───────┘ │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Service offerings, add-ons, line items, flows
//! - [`money`] - Integer-cent money type
//! - [`catalog`] - Built-in and loadable catalogs
//! - [`selection`] - Selection state and its transitions
//! - [`pricing`] - Quantity-based and duration-inflated pricing policies
//! - [`reference`] - `BK-######` booking references
//! - [`summary`] - Confirmation into an immutable booking summary
//! - [`error`] / [`validation`] - Typed errors and input checks
//!
//! ## Example Usage
//!
//! ```rust
//! use aqua_core::{quote, BookingFlow, Catalog, Money, SelectionState};
//!
//! let catalog = Catalog::customize();
//! let state = SelectionState::new(BookingFlow::Customize, &catalog).unwrap()
//!     .toggle_add_on(&catalog, "wakeboard").unwrap()
//!     .toggle_add_on(&catalog, "bbq").unwrap()
//!     .set_duration(2);
//!
//! // ($120 + $40 + $30) × 2 hours
//! assert_eq!(quote(&catalog, &state).unwrap().total, Money::from_major(380));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod money;
pub mod pricing;
pub mod reference;
pub mod selection;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{quote, DurationInflatedPricing, PricingPolicy, QuantityBasedPricing, Quote};
pub use reference::{BookingReference, RandomReferenceGenerator, ReferenceGenerator};
pub use selection::{SelectionAction, SelectionState};
pub use summary::{confirm, BookingSummary, ScheduleWindow};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Fewest jet skis per booking.
pub const MIN_QUANTITY: i64 = 1;

/// Most jet skis per booking.
pub const MAX_QUANTITY: i64 = 4;

/// Shortest rental, in hours.
pub const MIN_DURATION_HOURS: i64 = 1;

/// Longest rental, in hours.
pub const MAX_DURATION_HOURS: i64 = 8;

/// How far ahead a booking date may be, in days.
///
/// Matches the date picker's maximum on the booking screen.
pub const DEFAULT_BOOKING_HORIZON_DAYS: i64 = 90;

/// Furthest a configured booking horizon may reach, in days.
pub const MAX_BOOKING_HORIZON_DAYS: i64 = 3650;

/// Highest catalog price, in cents ($100,000).
///
/// Keeps every quote total, even a full catalog at the longest duration,
/// well inside `i64`.
pub const MAX_PRICE_CENTS: i64 = 10_000_000;

/// Longest catalog id, in bytes.
pub const MAX_CATALOG_ID_LEN: usize = 32;

/// Longest service or add-on label, in bytes.
pub const MAX_LABEL_LEN: usize = 100;
