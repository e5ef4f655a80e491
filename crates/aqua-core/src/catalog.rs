//! # Catalog
//!
//! Read-only definitions of every bookable service and add-on.
//!
//! Two built-in catalogs exist, one per screen:
//!
//! ```text
//! ┌──────────────────────────────────┬──────────────────────────────────────┐
//! │ Catalog::booking()               │ Catalog::customize()                 │
//! ├──────────────────────────────────┼──────────────────────────────────────┤
//! │ jetski      $110  per hour  qty  │ jetski      $120/hour  (base)        │
//! │ aqualounge  $250  per rental     │                                      │
//! │ tours       $195  per person     │                                      │
//! ├──────────────────────────────────┼──────────────────────────────────────┤
//! │ biscuit     $60                  │ biscuit     +$30/hour                │
//! │ wakeboard   $50                  │ wakeboard   +$40/hour                │
//! │ waterskis   $50                  │ waterskis   +$40/hour                │
//! │ fishing     $60                  │ beachsetup  +$50                     │
//! │                                  │ bbq         +$30                     │
//! └──────────────────────────────────┴──────────────────────────────────────┘
//! ```
//!
//! Declaration order is significant: quotes list line items in catalog
//! order, never in the order the user tapped them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{AddOn, BookingFlow, CatalogKind, PricingUnit, ServiceOffering};
use crate::validation::{validate_catalog_id, validate_label, validate_price};

/// The fixed list of services and add-ons a session prices against.
///
/// Construct with [`Catalog::new`] (validated) or one of the built-ins.
/// Deserializing from JSON runs the same validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CatalogDef")]
pub struct Catalog {
    services: Vec<ServiceOffering>,
    add_ons: Vec<AddOn>,
    /// Service that is always selected and cannot be swapped out.
    base_service: Option<String>,
}

/// Unvalidated wire form of a catalog.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDef {
    services: Vec<ServiceOffering>,
    #[serde(default)]
    add_ons: Vec<AddOn>,
    #[serde(default)]
    base_service: Option<String>,
}

impl TryFrom<CatalogDef> for Catalog {
    type Error = CoreError;

    fn try_from(def: CatalogDef) -> CoreResult<Self> {
        let catalog = Catalog::new(def.services, def.add_ons)?;
        match def.base_service {
            Some(id) => catalog.with_base_service(id),
            None => Ok(catalog),
        }
    }
}

impl Catalog {
    /// Builds a catalog, validating every definition.
    ///
    /// ## Rules
    /// - At least one service
    /// - Ids well-formed and unique within services and within add-ons
    /// - Labels non-blank, prices strictly positive
    pub fn new(services: Vec<ServiceOffering>, add_ons: Vec<AddOn>) -> CoreResult<Self> {
        if services.is_empty() {
            return Err(CoreError::InvalidCatalog {
                reason: "at least one service is required".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for service in &services {
            validate_catalog_id(&service.id)?;
            validate_label(&service.label)?;
            validate_price(service.unit_price)?;
            if !seen.insert(service.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "service id".to_string(),
                    value: service.id.clone(),
                }
                .into());
            }
        }

        let mut seen = HashSet::new();
        for add_on in &add_ons {
            validate_catalog_id(&add_on.id)?;
            validate_label(&add_on.label)?;
            validate_price(add_on.price)?;
            if !seen.insert(add_on.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "add-on id".to_string(),
                    value: add_on.id.clone(),
                }
                .into());
            }
        }

        Ok(Catalog {
            services,
            add_ons,
            base_service: None,
        })
    }

    /// Pins `id` as the non-deselectable base service.
    pub fn with_base_service(mut self, id: impl Into<String>) -> CoreResult<Self> {
        let id = id.into();
        if self.service(&id).is_none() {
            return Err(CoreError::InvalidCatalog {
                reason: format!("base service '{}' is not defined", id),
            });
        }
        self.base_service = Some(id);
        Ok(self)
    }

    /// Catalog behind the booking screen.
    pub fn booking() -> Self {
        Catalog {
            services: vec![
                ServiceOffering::new(
                    "jetski",
                    "Jet Skis",
                    Money::from_major(110),
                    PricingUnit::PerHour,
                )
                .with_quantity(),
                ServiceOffering::new(
                    "aqualounge",
                    "Aqua Lounge",
                    Money::from_major(250),
                    PricingUnit::PerRental,
                ),
                ServiceOffering::new(
                    "tours",
                    "Guided Tours",
                    Money::from_major(195),
                    PricingUnit::PerPerson,
                ),
            ],
            add_ons: vec![
                AddOn::new("biscuit", "Biscuit Ride", Money::from_major(60)).with_image("biscuit"),
                AddOn::new("wakeboard", "Wakeboard", Money::from_major(50)).with_image("skis"),
                AddOn::new("waterskis", "Water Skis", Money::from_major(50)).with_image("skis"),
                AddOn::new("fishing", "Fishing Package", Money::from_major(60))
                    .with_image("fishing"),
            ],
            base_service: None,
        }
    }

    /// Catalog behind the customize screen: jet ski hire plus per-hour extras.
    pub fn customize() -> Self {
        Catalog {
            services: vec![ServiceOffering::new(
                "jetski",
                "Jet Ski Hire",
                Money::from_major(120),
                PricingUnit::PerHour,
            )],
            add_ons: vec![
                AddOn::new("biscuit", "Biscuit Ride", Money::from_major(30)),
                AddOn::new("wakeboard", "Wakeboard", Money::from_major(40)),
                AddOn::new("waterskis", "Water Skis", Money::from_major(40)),
                AddOn::new("beachsetup", "Beach Setup", Money::from_major(50)),
                AddOn::new("bbq", "BBQ Setup", Money::from_major(30)),
            ],
            base_service: Some("jetski".to_string()),
        }
    }

    /// Built-in catalog for a flow.
    pub fn for_flow(flow: BookingFlow) -> Self {
        match flow {
            BookingFlow::Booking => Catalog::booking(),
            BookingFlow::Customize => Catalog::customize(),
        }
    }

    /// Services in declaration order.
    pub fn services(&self) -> &[ServiceOffering] {
        &self.services
    }

    /// Add-ons in declaration order.
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn service(&self, id: &str) -> Option<&ServiceOffering> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    /// Looks up a service, treating an unknown id as a desync error.
    pub fn require_service(&self, id: &str) -> CoreResult<&ServiceOffering> {
        self.service(id).ok_or_else(|| CoreError::UnknownCatalogId {
            kind: CatalogKind::Service,
            id: id.to_string(),
        })
    }

    /// Looks up an add-on, treating an unknown id as a desync error.
    pub fn require_add_on(&self, id: &str) -> CoreResult<&AddOn> {
        self.add_on(id).ok_or_else(|| CoreError::UnknownCatalogId {
            kind: CatalogKind::AddOn,
            id: id.to_string(),
        })
    }

    pub fn base_service(&self) -> Option<&ServiceOffering> {
        self.base_service.as_deref().and_then(|id| self.service(id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
