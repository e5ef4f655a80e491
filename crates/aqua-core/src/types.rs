//! # Domain Types
//!
//! Core domain types shared by the catalog, the selection reducer and the
//! pricing policies.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │ ServiceOffering │   │      AddOn      │   │    LineItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id, label      │       │
//! │  │  label          │   │  label          │   │  unit_price     │       │
//! │  │  unit_price     │   │  price          │   │  multiplier     │       │
//! │  │  pricing_unit   │   │  image_ref      │   │  subtotal       │       │
//! │  │  supports_qty   │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │  PricingUnit    │   │   BookingFlow   │                             │
//! │  │  PerHour        │   │   Booking       │                             │
//! │  │  PerRental      │   │   Customize     │                             │
//! │  │  PerPerson      │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Pricing Unit
// =============================================================================

/// The basis on which a service is charged.
///
/// Informational for display: neither pricing policy multiplies by a person
/// count, and the quantity-based policy never multiplies by hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingUnit {
    PerHour,
    PerRental,
    PerPerson,
}

// =============================================================================
// Service Offering
// =============================================================================

/// A top-level bookable product (jet ski, aqua lounge, guided tour).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOffering {
    /// Catalog key, e.g. `"jetski"`.
    pub id: String,

    /// Display name.
    pub label: String,

    /// Price per `pricing_unit`.
    pub unit_price: Money,

    pub pricing_unit: PricingUnit,

    /// Whether the booking carries a unit count (jet skis only).
    #[serde(default)]
    pub supports_quantity: bool,
}

impl ServiceOffering {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        unit_price: Money,
        pricing_unit: PricingUnit,
    ) -> Self {
        ServiceOffering {
            id: id.into(),
            label: label.into(),
            unit_price,
            pricing_unit,
            supports_quantity: false,
        }
    }

    /// Marks the offering as counted in units (e.g. number of jet skis).
    pub fn with_quantity(mut self) -> Self {
        self.supports_quantity = true;
        self
    }
}

// =============================================================================
// Add-On
// =============================================================================

/// An optional supplementary item attached to a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub id: String,
    pub label: String,

    /// Flat price in the booking flow; per-hour surcharge in the customize flow.
    pub price: Money,

    /// Asset key resolved by the front-end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
}

impl AddOn {
    pub fn new(id: impl Into<String>, label: impl Into<String>, price: Money) -> Self {
        AddOn {
            id: id.into(),
            label: label.into(),
            price,
            image_ref: None,
        }
    }

    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }
}

// =============================================================================
// Catalog Kind
// =============================================================================

/// Which half of the catalog an id belongs to. Used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Service,
    AddOn,
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogKind::Service => write!(f, "service"),
            CatalogKind::AddOn => write!(f, "add-on"),
        }
    }
}

// =============================================================================
// Booking Flow
// =============================================================================

/// The screen a selection belongs to.
///
/// The two screens price differently; see [`crate::pricing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BookingFlow {
    /// Service cards, jet ski count, flat add-ons, date and time.
    Booking,
    /// Fixed jet ski base, per-hour add-on surcharges, duration stepper.
    Customize,
}

impl Default for BookingFlow {
    fn default() -> Self {
        BookingFlow::Booking
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One priced row of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Catalog id of the service or add-on this row prices.
    pub id: String,
    pub label: String,
    pub unit_price: Money,
    /// The row's quantity-or-duration: jet ski count under quantity-based
    /// pricing, rental hours under duration-inflated pricing, 1 for flat rows.
    pub multiplier: i64,
    pub subtotal: Money,
}

impl LineItem {
    /// Builds a row whose subtotal is `unit_price × multiplier`.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        unit_price: Money,
        multiplier: i64,
    ) -> Self {
        LineItem {
            id: id.into(),
            label: label.into(),
            unit_price,
            multiplier,
            subtotal: unit_price.multiply_quantity(multiplier),
        }
    }

    /// Builds a row charged once.
    pub fn flat(id: impl Into<String>, label: impl Into<String>, price: Money) -> Self {
        LineItem::new(id, label, price, 1)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
