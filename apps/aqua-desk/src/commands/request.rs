//! # Quote Requests
//!
//! One-shot pricing of a whole booking described as JSON. Used by the
//! `aqua-desk` binary; drives a fresh session through the booking commands
//! so it follows exactly the rules the interactive screens do.
//!
//! ```text
//! {
//!   "flow": "booking",
//!   "service": "jetski",
//!   "quantity": 3,
//!   "durationHours": 5,
//!   "addOns": ["biscuit"],
//!   "date": "2026-11-02",
//!   "time": "14:00:00",
//!   "confirm": true
//! }
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use aqua_core::validation::{validate_duration, validate_quantity};
use aqua_core::{BookingFlow, BookingSummary, CoreError, Quote, ValidationError};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::booking;
use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// A booking described in one document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub flow: BookingFlow,
    pub service: Option<String>,
    pub quantity: Option<i64>,
    pub duration_hours: Option<i64>,
    #[serde(default)]
    pub add_ons: Vec<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    /// Confirm and return a summary instead of a quote.
    #[serde(default)]
    pub confirm: bool,
}

/// Either a live quote or a confirmed booking.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum QuoteResponse {
    Quote(Quote),
    Booking(BookingSummary),
}

impl QuoteRequest {
    /// Rejects inputs the steppers would silently clamp.
    ///
    /// A screen can never send a quantity of 9; a document can, and the
    /// caller should hear about it rather than get a quote for 1.
    fn validate(&self) -> Result<(), CoreError> {
        if let Some(quantity) = self.quantity {
            validate_quantity(quantity)?;
        }
        if let Some(hours) = self.duration_hours {
            validate_duration(hours)?;
        }

        let mut seen = HashSet::new();
        for id in &self.add_ons {
            if !seen.insert(id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "addOns".to_string(),
                    value: id.clone(),
                }
                .into());
            }
        }

        match (self.date, self.time) {
            (Some(_), None) => Err(ValidationError::Required {
                field: "time".to_string(),
            }
            .into()),
            (None, Some(_)) => Err(ValidationError::Required {
                field: "date".to_string(),
            }
            .into()),
            _ => Ok(()),
        }
    }
}

/// Prices (and optionally confirms) a request against the configured catalog.
pub fn handle_request(
    config: &ConfigState,
    request: &QuoteRequest,
    today: NaiveDate,
) -> Result<QuoteResponse, ApiError> {
    request.validate()?;

    let catalog = config.catalog_for(request.flow)?;
    let session = SessionState::new(
        request.flow,
        Arc::new(catalog),
        config.booking_horizon_days,
    )?;

    tracing::info!(
        session = %session.id(),
        business = %config.business_name,
        flow = ?request.flow,
        "handling quote request"
    );

    if let Some(service) = &request.service {
        booking::select_service(&session, service)?;
    }
    if let Some(quantity) = request.quantity {
        booking::set_quantity(&session, quantity)?;
    }
    if let Some(hours) = request.duration_hours {
        booking::set_duration(&session, hours)?;
    }
    for id in &request.add_ons {
        booking::toggle_add_on(&session, id)?;
    }
    if let (Some(date), Some(time)) = (request.date, request.time) {
        booking::set_schedule(&session, date, time, today)?;
    }

    if request.confirm {
        booking::confirm_booking(&session, today).map(QuoteResponse::Booking)
    } else {
        booking::get_quote(&session).map(QuoteResponse::Quote)
    }
}
