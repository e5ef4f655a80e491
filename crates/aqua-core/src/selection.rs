//! # Selection State
//!
//! The in-progress configuration a user builds on the booking or customize
//! screen, with reducer-style transitions.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 Selection Transitions (per screen)                      │
//! │                                                                         │
//! │  Initial                                                                │
//! │  ├── Booking:   service = none,   qty = 1, hours = 1, no add-ons       │
//! │  └── Customize: service = jetski, qty = 1, hours = 1, no add-ons       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  select_service(id) ─── Booking only (Customize: ServiceLocked)        │
//! │  toggle_add_on(id) ──── needs a service in Booking                     │
//! │  set_quantity(n) ────── 1..=4, no-op outside                           │
//! │  set_duration(h) ────── 1..=8, no-op outside                           │
//! │  with_schedule(d, t) ── stored; checked at confirmation                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  confirm() ─► BookingSummary (see summary.rs)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every transition borrows the current state and returns a new one, so a
//! failed transition leaves the caller's state untouched.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::types::BookingFlow;
use crate::{MAX_DURATION_HOURS, MAX_QUANTITY, MIN_DURATION_HOURS, MIN_QUANTITY};

// =============================================================================
// Selection State
// =============================================================================

/// A user's current configuration.
///
/// Fields are public so the front-end can hand a whole state across the
/// boundary; the pricing engine re-validates whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub flow: BookingFlow,

    /// Chosen service id; `None` until the user taps a service card.
    pub service: Option<String>,

    /// Number of units. Only priced when the service supports quantity.
    pub quantity: i64,

    /// Rental hours. Only priced by the duration-inflated policy.
    pub duration_hours: i64,

    /// Selected add-on ids. Set semantics; pricing order comes from the catalog.
    #[ts(as = "Vec<String>")]
    pub selected_add_ons: BTreeSet<String>,

    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,

    #[ts(as = "Option<String>")]
    pub time: Option<NaiveTime>,
}

impl SelectionState {
    /// Fresh state for a screen that just mounted.
    ///
    /// ## Errors
    /// `InvalidCatalog` if the customize flow is given a catalog without a
    /// base service.
    pub fn new(flow: BookingFlow, catalog: &Catalog) -> CoreResult<Self> {
        let service = match flow {
            BookingFlow::Booking => None,
            BookingFlow::Customize => {
                let base = catalog.base_service().ok_or_else(|| CoreError::InvalidCatalog {
                    reason: "customize flow requires a base service".to_string(),
                })?;
                Some(base.id.clone())
            }
        };

        Ok(SelectionState {
            flow,
            service,
            quantity: MIN_QUANTITY,
            duration_hours: MIN_DURATION_HOURS,
            selected_add_ons: BTreeSet::new(),
            date: None,
            time: None,
        })
    }

    pub fn has_service(&self) -> bool {
        self.service.is_some()
    }

    pub fn is_add_on_selected(&self, id: &str) -> bool {
        self.selected_add_ons.contains(id)
    }

    /// Chooses a service card (booking flow).
    ///
    /// Switching to a service without quantity keeps the current count; it
    /// is simply not priced.
    pub fn select_service(&self, catalog: &Catalog, id: &str) -> CoreResult<Self> {
        catalog.require_service(id)?;

        if self.flow == BookingFlow::Customize {
            let current = self.service.as_deref().unwrap_or_default();
            if current == id {
                return Ok(self.clone());
            }
            return Err(CoreError::ServiceLocked {
                current: current.to_string(),
                requested: id.to_string(),
            });
        }

        let mut next = self.clone();
        next.service = Some(id.to_string());
        Ok(next)
    }

    /// Flips an add-on in or out of the selection.
    ///
    /// ## Errors
    /// - `UnknownCatalogId` for an id the catalog doesn't define
    /// - `NoServiceSelected` in the booking flow before a service is chosen
    pub fn toggle_add_on(&self, catalog: &Catalog, id: &str) -> CoreResult<Self> {
        catalog.require_add_on(id)?;

        if self.flow == BookingFlow::Booking && !self.has_service() {
            return Err(CoreError::NoServiceSelected);
        }

        let mut next = self.clone();
        if !next.selected_add_ons.remove(id) {
            next.selected_add_ons.insert(id.to_string());
        }
        Ok(next)
    }

    /// Sets the unit count. Values outside `1..=4` leave the state unchanged.
    #[must_use]
    pub fn set_quantity(&self, quantity: i64) -> Self {
        let mut next = self.clone();
        if (MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
            next.quantity = quantity;
        }
        next
    }

    /// Sets the rental hours. Values outside `1..=8` leave the state unchanged.
    #[must_use]
    pub fn set_duration(&self, hours: i64) -> Self {
        let mut next = self.clone();
        if (MIN_DURATION_HOURS..=MAX_DURATION_HOURS).contains(&hours) {
            next.duration_hours = hours;
        }
        next
    }

    /// Stores the requested date and time.
    #[must_use]
    pub fn with_schedule(&self, date: NaiveDate, time: NaiveTime) -> Self {
        let mut next = self.clone();
        next.date = Some(date);
        next.time = Some(time);
        next
    }

    /// Applies one [`SelectionAction`].
    ///
    /// ## Example
    /// ```rust
    /// use aqua_core::{BookingFlow, Catalog, SelectionAction, SelectionState};
    ///
    /// let catalog = Catalog::booking();
    /// let state = SelectionState::new(BookingFlow::Booking, &catalog).unwrap();
    ///
    /// let state = state
    ///     .apply(&catalog, SelectionAction::SelectService { id: "jetski".into() })
    ///     .unwrap()
    ///     .apply(&catalog, SelectionAction::IncrementQuantity)
    ///     .unwrap();
    ///
    /// assert_eq!(state.quantity, 2);
    /// ```
    pub fn apply(&self, catalog: &Catalog, action: SelectionAction) -> CoreResult<Self> {
        match action {
            SelectionAction::SelectService { id } => self.select_service(catalog, &id),
            SelectionAction::ToggleAddOn { id } => self.toggle_add_on(catalog, &id),
            SelectionAction::SetQuantity { quantity } => Ok(self.set_quantity(quantity)),
            SelectionAction::IncrementQuantity => {
                Ok(self.set_quantity(self.quantity.saturating_add(1)))
            }
            SelectionAction::DecrementQuantity => {
                Ok(self.set_quantity(self.quantity.saturating_sub(1)))
            }
            SelectionAction::SetDuration { hours } => Ok(self.set_duration(hours)),
            SelectionAction::IncrementDuration => {
                Ok(self.set_duration(self.duration_hours.saturating_add(1)))
            }
            SelectionAction::DecrementDuration => {
                Ok(self.set_duration(self.duration_hours.saturating_sub(1)))
            }
            SelectionAction::SetSchedule { date, time } => Ok(self.with_schedule(date, time)),
        }
    }
}

// =============================================================================
// Selection Action
// =============================================================================

/// One user interaction on a booking screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SelectionAction {
    SelectService { id: String },
    ToggleAddOn { id: String },
    SetQuantity { quantity: i64 },
    IncrementQuantity,
    DecrementQuantity,
    SetDuration { hours: i64 },
    IncrementDuration,
    DecrementDuration,
    SetSchedule {
        #[ts(as = "String")]
        date: NaiveDate,
        #[ts(as = "String")]
        time: NaiveTime,
    },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CatalogKind;

    fn booking() -> (Catalog, SelectionState) {
        let catalog = Catalog::booking();
        let state = SelectionState::new(BookingFlow::Booking, &catalog).unwrap();
        (catalog, state)
    }

    fn customize() -> (Catalog, SelectionState) {
        let catalog = Catalog::customize();
        let state = SelectionState::new(BookingFlow::Customize, &catalog).unwrap();
        (catalog, state)
    }

    #[test]
    fn test_initial_states() {
        let (_, state) = booking();
        assert_eq!(state.service, None);
        assert_eq!(state.quantity, 1);
        assert_eq!(state.duration_hours, 1);
        assert!(state.selected_add_ons.is_empty());

        let (_, state) = customize();
        assert_eq!(state.service.as_deref(), Some("jetski"));
    }

    #[test]
    fn test_customize_needs_base_service() {
        let err = SelectionState::new(BookingFlow::Customize, &Catalog::booking()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCatalog { .. }));
    }

    #[test]
    fn test_select_service_keeps_quantity() {
        let (catalog, state) = booking();
        let state = state.select_service(&catalog, "jetski").unwrap().set_quantity(3);
        let state = state.select_service(&catalog, "aqualounge").unwrap();

        assert_eq!(state.service.as_deref(), Some("aqualounge"));
        assert_eq!(state.quantity, 3);
    }

    #[test]
    fn test_select_unknown_service() {
        let (catalog, state) = booking();
        let err = state.select_service(&catalog, "parasail").unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownCatalogId { kind: CatalogKind::Service, .. }
        ));
    }

    #[test]
    fn test_customize_service_is_locked() {
        let catalog = Catalog::new(
            vec![
                Catalog::customize().services()[0].clone(),
                Catalog::booking().services()[1].clone(),
            ],
            vec![],
        )
        .unwrap()
        .with_base_service("jetski")
        .unwrap();
        let state = SelectionState::new(BookingFlow::Customize, &catalog).unwrap();

        assert!(state.select_service(&catalog, "jetski").is_ok());
        let err = state.select_service(&catalog, "aqualounge").unwrap_err();
        assert!(matches!(err, CoreError::ServiceLocked { .. }));
    }

    #[test]
    fn test_toggle_requires_service_in_booking_flow() {
        let (catalog, state) = booking();
        let err = state.toggle_add_on(&catalog, "biscuit").unwrap_err();
        assert!(matches!(err, CoreError::NoServiceSelected));

        let state = state.select_service(&catalog, "tours").unwrap();
        let state = state.toggle_add_on(&catalog, "biscuit").unwrap();
        assert!(state.is_add_on_selected("biscuit"));
    }

    #[test]
    fn test_toggle_unconditional_in_customize_flow() {
        let (catalog, state) = customize();
        let state = state.toggle_add_on(&catalog, "bbq").unwrap();
        assert!(state.is_add_on_selected("bbq"));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let (catalog, state) = customize();
        let toggled = state
            .toggle_add_on(&catalog, "wakeboard")
            .unwrap()
            .toggle_add_on(&catalog, "wakeboard")
            .unwrap();
        assert_eq!(toggled, state);
    }

    #[test]
    fn test_toggle_unknown_add_on() {
        let (catalog, state) = customize();
        let err = state.toggle_add_on(&catalog, "fishing").unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownCatalogId { kind: CatalogKind::AddOn, .. }
        ));
    }

    #[test]
    fn test_quantity_bounds_are_noops() {
        let (_, state) = booking();
        assert_eq!(state.set_quantity(4).quantity, 4);
        assert_eq!(state.set_quantity(5).quantity, 1);
        assert_eq!(state.set_quantity(0).quantity, 1);
        assert_eq!(state.set_quantity(4).set_quantity(9).quantity, 4);
    }

    #[test]
    fn test_duration_bounds_are_noops() {
        let (_, state) = customize();
        assert_eq!(state.set_duration(8).duration_hours, 8);
        assert_eq!(state.set_duration(9).duration_hours, 1);
        assert_eq!(state.set_duration(0).duration_hours, 1);
    }

    #[test]
    fn test_steppers_stop_at_bounds() {
        let (catalog, mut state) = customize();
        for _ in 0..20 {
            state = state.apply(&catalog, SelectionAction::IncrementDuration).unwrap();
        }
        assert_eq!(state.duration_hours, 8);

        for _ in 0..20 {
            state = state.apply(&catalog, SelectionAction::DecrementDuration).unwrap();
        }
        assert_eq!(state.duration_hours, 1);

        let state = state.apply(&catalog, SelectionAction::DecrementQuantity).unwrap();
        assert_eq!(state.quantity, 1);
    }

    #[test]
    fn test_steppers_on_extreme_deserialized_values() {
        let (catalog, state) = booking();
        let state = SelectionState {
            quantity: i64::MAX,
            duration_hours: i64::MIN,
            ..state
        };

        let up = state.apply(&catalog, SelectionAction::IncrementQuantity).unwrap();
        assert_eq!(up.quantity, i64::MAX);

        let down = state.apply(&catalog, SelectionAction::DecrementDuration).unwrap();
        assert_eq!(down.duration_hours, i64::MIN);
    }

    #[test]
    fn test_failed_transition_leaves_original() {
        let (catalog, state) = booking();
        let before = state.clone();
        let _ = state.apply(&catalog, SelectionAction::ToggleAddOn { id: "wakeboard".into() });
        assert_eq!(state, before);
    }

    #[test]
    fn test_action_json_shape() {
        let action: SelectionAction =
            serde_json::from_str(r#"{"type":"toggle_add_on","id":"biscuit"}"#).unwrap();
        assert_eq!(action, SelectionAction::ToggleAddOn { id: "biscuit".into() });

        let action: SelectionAction = serde_json::from_str(
            r#"{"type":"set_schedule","date":"2026-11-02","time":"10:30:00"}"#,
        )
        .unwrap();
        assert!(matches!(action, SelectionAction::SetSchedule { .. }));
    }
}
