//! # Pricing Engine
//!
//! Maps a [`SelectionState`] and a [`Catalog`] to priced line items and a
//! total. Pure: no I/O, no clock, no randomness.
//!
//! ## Two Policies
//! The booking and customize screens price differently, and both behaviours
//! are kept as separate named strategies:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  QuantityBasedPricing (booking screen)                                  │
//! │                                                                         │
//! │    Jet Skis      $110 × 3 (qty)      = $330     ◄── hours ignored       │
//! │    Biscuit Ride  $60                 = $60      ◄── one row per add-on  │
//! │    Wakeboard     $50                 = $50                              │
//! │                                        ────                             │
//! │                                        $440                             │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │  DurationInflatedPricing (customize screen)                             │
//! │                                                                         │
//! │    ($120 + $40 wakeboard + $30 bbq) × 2 hours = $380                   │
//! │    ▲ add-ons raise the hourly rate, one blended row                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Whether the divergence is intended is an open product question; neither
//! policy should be "fixed" into the other.
//!
//! ## Ordering
//! Rows follow catalog declaration order (service first, then add-ons in
//! catalog order), so identical selections always produce identical quotes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::selection::SelectionState;
use crate::types::{AddOn, BookingFlow, LineItem, ServiceOffering};
use crate::validation::{validate_duration, validate_quantity};

// =============================================================================
// Policies
// =============================================================================

/// A strategy turning a validated selection into line items.
pub trait PricingPolicy {
    /// Stable name, recorded on every quote.
    fn name(&self) -> &'static str;

    /// Prices `service` plus `add_ons` (already resolved, in catalog order).
    fn line_items(
        &self,
        service: &ServiceOffering,
        add_ons: &[&AddOn],
        selection: &SelectionState,
    ) -> Vec<LineItem>;
}

/// Booking screen: `unit price × quantity` for countable services, flat
/// otherwise, and each add-on once as its own row. Duration is never priced.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuantityBasedPricing;

impl PricingPolicy for QuantityBasedPricing {
    fn name(&self) -> &'static str {
        "quantity_based"
    }

    fn line_items(
        &self,
        service: &ServiceOffering,
        add_ons: &[&AddOn],
        selection: &SelectionState,
    ) -> Vec<LineItem> {
        // Per-person tours and per-rental lounges are one flat charge.
        let multiplier = if service.supports_quantity {
            selection.quantity
        } else {
            1
        };

        let mut items = Vec::with_capacity(add_ons.len() + 1);
        items.push(LineItem::new(
            &service.id,
            &service.label,
            service.unit_price,
            multiplier,
        ));
        items.extend(
            add_ons
                .iter()
                .map(|a| LineItem::flat(&a.id, &a.label, a.price)),
        );
        items
    }
}

/// Customize screen: add-on surcharges inflate the hourly rate, and the
/// blended rate is multiplied by duration. Produces a single row.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationInflatedPricing;

impl PricingPolicy for DurationInflatedPricing {
    fn name(&self) -> &'static str {
        "duration_inflated"
    }

    fn line_items(
        &self,
        service: &ServiceOffering,
        add_ons: &[&AddOn],
        selection: &SelectionState,
    ) -> Vec<LineItem> {
        let rate = service.unit_price + add_ons.iter().map(|a| a.price).sum::<Money>();

        let label = std::iter::once(service.label.as_str())
            .chain(add_ons.iter().map(|a| a.label.as_str()))
            .collect::<Vec<_>>()
            .join(" + ");

        vec![LineItem::new(&service.id, label, rate, selection.duration_hours)]
    }
}

impl BookingFlow {
    /// The pricing policy a flow's screen uses.
    pub fn policy(&self) -> &'static dyn PricingPolicy {
        match self {
            BookingFlow::Booking => &QuantityBasedPricing,
            BookingFlow::Customize => &DurationInflatedPricing,
        }
    }
}

// =============================================================================
// Quote
// =============================================================================

/// Priced breakdown of a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub flow: BookingFlow,
    /// Name of the policy that produced the rows.
    pub policy: String,
    pub service_id: String,
    pub line_items: Vec<LineItem>,
    pub total: Money,
}

/// Prices a selection.
///
/// ## Checks (in order)
/// 1. A service is selected, else `NoServiceSelected` (never a zero total)
/// 2. Quantity in `1..=4` and duration in `1..=8`, else a validation error
/// 3. Every id resolves in the catalog, else `UnknownCatalogId`
/// 4. In the customize flow, the service is the catalog's base service
///
/// ## Example
/// ```rust
/// use aqua_core::{quote, BookingFlow, Catalog, Money, SelectionState};
///
/// let catalog = Catalog::booking();
/// let state = SelectionState::new(BookingFlow::Booking, &catalog).unwrap()
///     .select_service(&catalog, "aqualounge").unwrap()
///     .toggle_add_on(&catalog, "biscuit").unwrap()
///     .toggle_add_on(&catalog, "wakeboard").unwrap();
///
/// let q = quote(&catalog, &state).unwrap();
/// assert_eq!(q.total, Money::from_major(360));
/// ```
pub fn quote(catalog: &Catalog, selection: &SelectionState) -> CoreResult<Quote> {
    let service_id = selection
        .service
        .as_deref()
        .ok_or(CoreError::NoServiceSelected)?;

    validate_quantity(selection.quantity)?;
    validate_duration(selection.duration_hours)?;

    let service = catalog.require_service(service_id)?;

    if selection.flow == BookingFlow::Customize {
        if let Some(base) = catalog.base_service() {
            if base.id != service.id {
                return Err(CoreError::ServiceLocked {
                    current: base.id.clone(),
                    requested: service.id.clone(),
                });
            }
        }
    }

    for id in &selection.selected_add_ons {
        catalog.require_add_on(id)?;
    }
    let add_ons: Vec<&AddOn> = catalog
        .add_ons()
        .iter()
        .filter(|a| selection.selected_add_ons.contains(&a.id))
        .collect();

    let policy = selection.flow.policy();
    let line_items = policy.line_items(service, &add_ons, selection);
    let total = line_items.iter().map(|i| i.subtotal).sum();

    Ok(Quote {
        flow: selection.flow,
        policy: policy.name().to_string(),
        service_id: service.id.clone(),
        line_items,
        total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::types::CatalogKind;

    fn booking_with(service: &str) -> (Catalog, SelectionState) {
        let catalog = Catalog::booking();
        let state = SelectionState::new(BookingFlow::Booking, &catalog)
            .unwrap()
            .select_service(&catalog, service)
            .unwrap();
        (catalog, state)
    }

    fn customize() -> (Catalog, SelectionState) {
        let catalog = Catalog::customize();
        let state = SelectionState::new(BookingFlow::Customize, &catalog).unwrap();
        (catalog, state)
    }

    #[test]
    fn test_no_service_is_not_zero() {
        let catalog = Catalog::booking();
        let state = SelectionState::new(BookingFlow::Booking, &catalog).unwrap();
        let err = quote(&catalog, &state).unwrap_err();
        assert!(matches!(err, CoreError::NoServiceSelected));
    }

    #[test]
    fn test_jetski_quantity_ignores_duration() {
        let (catalog, state) = booking_with("jetski");
        let state = state.set_quantity(3).set_duration(5);

        let q = quote(&catalog, &state).unwrap();
        assert_eq!(q.line_items.len(), 1);
        assert_eq!(q.line_items[0].multiplier, 3);
        assert_eq!(q.line_items[0].subtotal, Money::from_major(330));
        assert_eq!(q.total, Money::from_major(330));
        assert_eq!(q.policy, "quantity_based");

        for hours in 1..=8 {
            let other = quote(&catalog, &state.set_duration(hours)).unwrap();
            assert_eq!(other.total, q.total);
        }
    }

    #[test]
    fn test_aqualounge_with_add_ons() {
        let (catalog, state) = booking_with("aqualounge");
        let state = state
            .toggle_add_on(&catalog, "biscuit")
            .unwrap()
            .toggle_add_on(&catalog, "wakeboard")
            .unwrap();

        let q = quote(&catalog, &state).unwrap();
        let labels: Vec<&str> = q.line_items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, ["Aqua Lounge", "Biscuit Ride", "Wakeboard"]);
        assert_eq!(q.total, Money::from_major(360));
    }

    #[test]
    fn test_tours_are_flat() {
        let (catalog, state) = booking_with("tours");
        let q = quote(&catalog, &state.set_quantity(4)).unwrap();
        assert_eq!(q.line_items[0].multiplier, 1);
        assert_eq!(q.total, Money::from_major(195));
    }

    #[test]
    fn test_add_ons_priced_once_regardless_of_quantity() {
        let (catalog, state) = booking_with("jetski");
        let state = state
            .set_quantity(4)
            .toggle_add_on(&catalog, "fishing")
            .unwrap();

        let q = quote(&catalog, &state).unwrap();
        assert_eq!(q.line_items[1].subtotal, Money::from_major(60));
        assert_eq!(q.total, Money::from_major(440 + 60));
    }

    #[test]
    fn test_customize_blended_rate() {
        let (catalog, state) = customize();
        let state = state
            .toggle_add_on(&catalog, "bbq")
            .unwrap()
            .toggle_add_on(&catalog, "wakeboard")
            .unwrap()
            .set_duration(2);

        let q = quote(&catalog, &state).unwrap();
        assert_eq!(q.line_items.len(), 1);

        let row = &q.line_items[0];
        assert_eq!(row.label, "Jet Ski Hire + Wakeboard + BBQ Setup");
        assert_eq!(row.unit_price, Money::from_major(190));
        assert_eq!(row.multiplier, 2);
        assert_eq!(q.total, Money::from_major(380));
        assert_eq!(q.policy, "duration_inflated");
    }

    #[test]
    fn test_customize_scales_linearly_with_duration() {
        let (catalog, state) = customize();
        let state = state.toggle_add_on(&catalog, "beachsetup").unwrap();
        let one_hour = quote(&catalog, &state).unwrap().total;

        for hours in 1..=8 {
            let total = quote(&catalog, &state.set_duration(hours)).unwrap().total;
            assert_eq!(total, one_hour * hours);
        }
    }

    #[test]
    fn test_customize_base_only() {
        let (catalog, state) = customize();
        let q = quote(&catalog, &state).unwrap();
        assert_eq!(q.line_items[0].label, "Jet Ski Hire");
        assert_eq!(q.total, Money::from_major(120));
    }

    #[test]
    fn test_line_items_follow_catalog_order() {
        let (catalog, state) = booking_with("jetski");
        let forward = state
            .toggle_add_on(&catalog, "biscuit")
            .unwrap()
            .toggle_add_on(&catalog, "fishing")
            .unwrap()
            .toggle_add_on(&catalog, "waterskis")
            .unwrap();
        let backward = state
            .toggle_add_on(&catalog, "waterskis")
            .unwrap()
            .toggle_add_on(&catalog, "fishing")
            .unwrap()
            .toggle_add_on(&catalog, "biscuit")
            .unwrap();

        let a = quote(&catalog, &forward).unwrap();
        let b = quote(&catalog, &backward).unwrap();
        assert_eq!(a, b);

        let ids: Vec<&str> = a.line_items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["jetski", "biscuit", "waterskis", "fishing"]);
    }

    #[test]
    fn test_total_never_below_service_price() {
        let catalog = Catalog::booking();
        for service in catalog.services() {
            let (_, mut state) = booking_with(&service.id);
            for add_on in catalog.add_ons() {
                state = state.toggle_add_on(&catalog, &add_on.id).unwrap();
                let q = quote(&catalog, &state).unwrap();
                assert!(q.total >= service.unit_price);
            }
        }
    }

    #[test]
    fn test_rejects_out_of_range_built_by_hand() {
        let (catalog, mut state) = booking_with("jetski");
        state.quantity = 9;
        let err = quote(&catalog, &state).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));

        let (catalog, mut state) = customize();
        state.duration_hours = 0;
        assert!(quote(&catalog, &state).is_err());
    }

    #[test]
    fn test_rejects_unknown_ids_built_by_hand() {
        let (catalog, mut state) = booking_with("jetski");
        state.selected_add_ons.insert("bbq".to_string());
        let err = quote(&catalog, &state).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownCatalogId { kind: CatalogKind::AddOn, .. }
        ));

        state.service = Some("submarine".to_string());
        let err = quote(&catalog, &state).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownCatalogId { kind: CatalogKind::Service, .. }
        ));
    }

    #[test]
    fn test_policies_are_independent_of_flow() {
        let catalog = Catalog::customize();
        let service = catalog.base_service().unwrap();
        let add_ons: Vec<&AddOn> = catalog.add_ons().iter().take(2).collect();
        let state = SelectionState::new(BookingFlow::Customize, &catalog)
            .unwrap()
            .set_duration(3);

        let flat = QuantityBasedPricing.line_items(service, &add_ons, &state);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0].subtotal, Money::from_major(120));

        let blended = DurationInflatedPricing.line_items(service, &add_ons, &state);
        assert_eq!(blended.len(), 1);
        assert_eq!(blended[0].subtotal, Money::from_major((120 + 30 + 40) * 3));
    }

    #[test]
    fn test_most_expensive_catalog_prices_exactly() {
        let top = Money::from_cents(crate::MAX_PRICE_CENTS);
        let catalog = Catalog::new(
            vec![ServiceOffering::new("jetski", "Jet Skis", top, crate::types::PricingUnit::PerHour)
                .with_quantity()],
            vec![
                AddOn::new("biscuit", "Biscuit Ride", top),
                AddOn::new("bbq", "BBQ Setup", top),
            ],
        )
        .unwrap()
        .with_base_service("jetski")
        .unwrap();

        let state = SelectionState::new(BookingFlow::Booking, &catalog)
            .unwrap()
            .select_service(&catalog, "jetski")
            .unwrap()
            .set_quantity(4)
            .toggle_add_on(&catalog, "biscuit")
            .unwrap()
            .toggle_add_on(&catalog, "bbq")
            .unwrap();
        assert_eq!(quote(&catalog, &state).unwrap().total, top * 6);

        let state = SelectionState::new(BookingFlow::Customize, &catalog)
            .unwrap()
            .set_duration(8)
            .toggle_add_on(&catalog, "biscuit")
            .unwrap()
            .toggle_add_on(&catalog, "bbq")
            .unwrap();
        assert_eq!(quote(&catalog, &state).unwrap().total, top * 24);
    }
}
