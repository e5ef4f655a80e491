//! # Booking Commands
//!
//! Commands a booking or customize screen invokes on every interaction.
//! Each mutating command returns a [`SelectionView`] so the screen can
//! re-render the running total straight away.

use aqua_core::{
    confirm, quote, BookingSummary, Catalog, CoreError, Quote, ScheduleWindow, SelectionAction,
    SelectionState,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::SessionState;

/// Selection plus its live quote.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionView {
    pub selection: SelectionState,
    /// `None` while no service is chosen.
    pub quote: Option<Quote>,
}

impl SelectionView {
    fn build(session: &SessionState, selection: SelectionState) -> Result<Self, ApiError> {
        let quote = match quote(session.catalog(), &selection) {
            Ok(q) => Some(q),
            Err(CoreError::NoServiceSelected) => None,
            Err(e) => return Err(e.into()),
        };
        Ok(SelectionView { selection, quote })
    }
}

/// Applies one action and returns the updated view.
pub fn dispatch(session: &SessionState, action: SelectionAction) -> Result<SelectionView, ApiError> {
    debug!(session = %session.id(), ?action, "applying selection action");

    let selection = session
        .update(|catalog, s| s.apply(catalog, action))
        .map_err(|e| {
            warn!(session = %session.id(), error = %e, "selection action rejected");
            ApiError::from(e)
        })?;

    SelectionView::build(session, selection)
}

/// Returns the catalog the session prices against.
pub fn get_catalog(session: &SessionState) -> Catalog {
    session.catalog().clone()
}

/// Returns the current selection and quote without changing anything.
pub fn get_selection(session: &SessionState) -> Result<SelectionView, ApiError> {
    SelectionView::build(session, session.selection())
}

pub fn select_service(session: &SessionState, id: &str) -> Result<SelectionView, ApiError> {
    dispatch(session, SelectionAction::SelectService { id: id.to_string() })
}

pub fn toggle_add_on(session: &SessionState, id: &str) -> Result<SelectionView, ApiError> {
    dispatch(session, SelectionAction::ToggleAddOn { id: id.to_string() })
}

pub fn set_quantity(session: &SessionState, quantity: i64) -> Result<SelectionView, ApiError> {
    dispatch(session, SelectionAction::SetQuantity { quantity })
}

/// `+`/`-` button on the jet ski counter.
pub fn step_quantity(session: &SessionState, up: bool) -> Result<SelectionView, ApiError> {
    let action = if up {
        SelectionAction::IncrementQuantity
    } else {
        SelectionAction::DecrementQuantity
    };
    dispatch(session, action)
}

pub fn set_duration(session: &SessionState, hours: i64) -> Result<SelectionView, ApiError> {
    dispatch(session, SelectionAction::SetDuration { hours })
}

/// `+`/`-` button on the duration control.
pub fn step_duration(session: &SessionState, up: bool) -> Result<SelectionView, ApiError> {
    let action = if up {
        SelectionAction::IncrementDuration
    } else {
        SelectionAction::DecrementDuration
    };
    dispatch(session, action)
}

/// Stores a date and time after checking the date against the booking window.
pub fn set_schedule(
    session: &SessionState,
    date: NaiveDate,
    time: NaiveTime,
    today: NaiveDate,
) -> Result<SelectionView, ApiError> {
    aqua_core::validation::validate_booking_date(date, today, session.horizon_days())
        .map_err(|e| ApiError::validation(e.to_string()))?;

    dispatch(session, SelectionAction::SetSchedule { date, time })
}

/// Prices the current selection.
pub fn get_quote(session: &SessionState) -> Result<Quote, ApiError> {
    Ok(quote(session.catalog(), &session.selection())?)
}

/// Confirms the booking.
///
/// ## Behavior
/// - Success: returns the summary and resets the session for a new booking
/// - Failure: returns the error; the selection is untouched so the user can
///   fix it and confirm again
pub fn confirm_booking(
    session: &SessionState,
    today: NaiveDate,
) -> Result<BookingSummary, ApiError> {
    let window = ScheduleWindow::new(today).with_horizon(session.horizon_days());

    let result = session.with_session_mut(|s| {
        confirm(
            session.catalog(),
            &s.selection,
            s.references.as_mut(),
            window,
        )
    });

    match result {
        Ok(summary) => {
            info!(
                session = %session.id(),
                reference = %summary.reference(),
                total = %summary.total(),
                "booking confirmed"
            );
            session.reset()?;
            Ok(summary)
        }
        Err(e) => {
            warn!(session = %session.id(), error = %e, "confirmation refused");
            Err(e.into())
        }
    }
}
