//! # Booking Summary
//!
//! The immutable snapshot produced when a selection is confirmed.
//!
//! ## Confirmation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tap "Confirm Booking"                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  confirm() ← THIS MODULE                                               │
//! │       │                                                                 │
//! │       ├── no service? ──► NoServiceSelected (state kept, retry)        │
//! │       ├── date outside window? ──► Validation error                    │
//! │       ├── quote() ──► line items + total                               │
//! │       └── ReferenceGenerator ──► BK-######                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  BookingSummary (read-only)                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::fmt;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::CoreResult;
use crate::money::Money;
use crate::pricing::quote;
use crate::reference::{BookingReference, ReferenceGenerator};
use crate::selection::SelectionState;
use crate::types::{BookingFlow, LineItem};
use crate::validation::validate_booking_date;
use crate::DEFAULT_BOOKING_HORIZON_DAYS;

// =============================================================================
// Schedule Window
// =============================================================================

/// The range of dates a booking may be made for, anchored at "today".
///
/// Passed in rather than read from a clock so confirmation stays pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    pub today: NaiveDate,
    pub horizon_days: i64,
}

impl ScheduleWindow {
    /// Window of the default 90 days from `today`.
    pub fn new(today: NaiveDate) -> Self {
        ScheduleWindow {
            today,
            horizon_days: DEFAULT_BOOKING_HORIZON_DAYS,
        }
    }

    pub fn with_horizon(mut self, horizon_days: i64) -> Self {
        self.horizon_days = horizon_days;
        self
    }
}

// =============================================================================
// Booking Summary
// =============================================================================

/// A finalized, priced booking.
///
/// Only [`confirm`] builds one; there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BookingSummary {
    #[ts(as = "String")]
    reference: BookingReference,
    flow: BookingFlow,
    policy: String,
    service_id: String,
    line_items: Vec<LineItem>,
    total: Money,
    #[ts(as = "Option<String>")]
    date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    time: Option<NaiveTime>,
}

impl BookingSummary {
    pub fn reference(&self) -> &BookingReference {
        &self.reference
    }

    pub fn flow(&self) -> BookingFlow {
        self.flow
    }

    pub fn policy(&self) -> &str {
        &self.policy
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    pub fn time(&self) -> Option<NaiveTime> {
        self.time
    }
}

/// Receipt-style rendering, matching the confirmation card on the booking
/// screen (`Saturday, November 7, 2026`, `10:30 AM`).
impl fmt::Display for BookingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Booking Reference: {}", self.reference)?;
        if let Some(date) = self.date {
            writeln!(f, "Date: {}", date.format("%A, %B %-d, %Y"))?;
        }
        if let Some(time) = self.time {
            writeln!(f, "Time: {}", time.format("%I:%M %p"))?;
        }
        for item in &self.line_items {
            if item.multiplier == 1 {
                writeln!(f, "  {:<40} {:>10}", item.label, item.subtotal.to_string())?;
            } else {
                let line = format!("{} ({} × {})", item.label, item.unit_price, item.multiplier);
                writeln!(f, "  {:<40} {:>10}", line, item.subtotal.to_string())?;
            }
        }
        write!(f, "Total: {}", self.total)
    }
}

// =============================================================================
// Confirmation
// =============================================================================

/// Finalizes a selection into a [`BookingSummary`].
///
/// The selection is only borrowed; on error the caller still holds it
/// unchanged and may retry.
pub fn confirm(
    catalog: &Catalog,
    selection: &SelectionState,
    references: &mut dyn ReferenceGenerator,
    window: ScheduleWindow,
) -> CoreResult<BookingSummary> {
    let priced = quote(catalog, selection)?;

    if let Some(date) = selection.date {
        validate_booking_date(date, window.today, window.horizon_days)?;
    }

    let reference = references.next_reference();
    tracing::debug!(
        %reference,
        service = %priced.service_id,
        total = %priced.total,
        "booking confirmed"
    );

    Ok(BookingSummary {
        reference,
        flow: priced.flow,
        policy: priced.policy,
        service_id: priced.service_id,
        line_items: priced.line_items,
        total: priced.total,
        date: selection.date,
        time: selection.time,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
