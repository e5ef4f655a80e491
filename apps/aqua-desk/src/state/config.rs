//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`AQUA_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Read-only after initialization, so no mutex needed.

use aqua_core::{BookingFlow, Catalog, DEFAULT_BOOKING_HORIZON_DAYS, MAX_BOOKING_HORIZON_DAYS};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures loading configuration-supplied files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in logs and receipts.
    pub business_name: String,

    /// How many days ahead a booking date may be.
    pub booking_horizon_days: i64,

    /// JSON catalog replacing the built-in booking catalog.
    pub booking_catalog_path: Option<PathBuf>,

    /// JSON catalog replacing the built-in customize catalog.
    pub customize_catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            business_name: "Aqua 360".to_string(),
            booking_horizon_days: DEFAULT_BOOKING_HORIZON_DAYS,
            booking_catalog_path: None,
            customize_catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `AQUA_BUSINESS_NAME`: Override business name
    /// - `AQUA_BOOKING_HORIZON_DAYS`: Days ahead a booking may be (e.g. "120"),
    ///   0 through 3650
    /// - `AQUA_BOOKING_CATALOG`: Path to a booking catalog JSON file
    /// - `AQUA_CUSTOMIZE_CATALOG`: Path to a customize catalog JSON file
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`], reading from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(name) = lookup("AQUA_BUSINESS_NAME") {
            config.business_name = name;
        }

        if let Some(days) = lookup("AQUA_BOOKING_HORIZON_DAYS") {
            match days.trim().parse::<i64>() {
                Ok(days) if (0..=MAX_BOOKING_HORIZON_DAYS).contains(&days) => {
                    config.booking_horizon_days = days
                }
                _ => tracing::warn!(value = %days, "ignoring invalid AQUA_BOOKING_HORIZON_DAYS"),
            }
        }

        config.booking_catalog_path = lookup("AQUA_BOOKING_CATALOG").map(PathBuf::from);
        config.customize_catalog_path = lookup("AQUA_CUSTOMIZE_CATALOG").map(PathBuf::from);

        config
    }

    /// Catalog for a flow: the configured file if any, else the built-in.
    pub fn catalog_for(&self, flow: BookingFlow) -> Result<Catalog, ConfigError> {
        let path = match flow {
            BookingFlow::Booking => self.booking_catalog_path.as_deref(),
            BookingFlow::Customize => self.customize_catalog_path.as_deref(),
        };

        match path {
            Some(path) => load_catalog(path),
            None => Ok(Catalog::for_flow(flow)),
        }
    }
}

/// Reads and validates a catalog file.
fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "loaded catalog file");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(lookup(&[]));
        assert_eq!(config.business_name, "Aqua 360");
        assert_eq!(config.booking_horizon_days, 90);
        assert!(config.booking_catalog_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = ConfigState::from_lookup(lookup(&[
            ("AQUA_BUSINESS_NAME", "Aqua 360 Tauranga"),
            ("AQUA_BOOKING_HORIZON_DAYS", "120"),
            ("AQUA_CUSTOMIZE_CATALOG", "/etc/aqua/customize.json"),
        ]));
        assert_eq!(config.business_name, "Aqua 360 Tauranga");
        assert_eq!(config.booking_horizon_days, 120);
        assert_eq!(
            config.customize_catalog_path.as_deref(),
            Some(Path::new("/etc/aqua/customize.json"))
        );
    }

    #[test]
    fn test_bad_horizon_keeps_default() {
        let config = ConfigState::from_lookup(lookup(&[("AQUA_BOOKING_HORIZON_DAYS", "soon")]));
        assert_eq!(config.booking_horizon_days, 90);

        let config = ConfigState::from_lookup(lookup(&[("AQUA_BOOKING_HORIZON_DAYS", "-3")]));
        assert_eq!(config.booking_horizon_days, 90);
    }

    #[test]
    fn test_horizon_upper_bound() {
        let config = ConfigState::from_lookup(lookup(&[("AQUA_BOOKING_HORIZON_DAYS", "3650")]));
        assert_eq!(config.booking_horizon_days, 3650);

        let config =
            ConfigState::from_lookup(lookup(&[("AQUA_BOOKING_HORIZON_DAYS", "100000000")]));
        assert_eq!(config.booking_horizon_days, 90);
    }

    #[test]
    fn test_builtin_catalogs_without_paths() {
        let config = ConfigState::default();
        assert_eq!(config.catalog_for(BookingFlow::Booking).unwrap(), Catalog::booking());
        assert_eq!(
            config.catalog_for(BookingFlow::Customize).unwrap(),
            Catalog::customize()
        );
    }

    #[test]
    fn test_missing_catalog_file() {
        let config = ConfigState {
            booking_catalog_path: Some(PathBuf::from("/nonexistent/aqua/booking.json")),
            ..ConfigState::default()
        };
        let err = config.catalog_for(BookingFlow::Booking).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_catalog_file_round_trip() {
        let path = std::env::temp_dir().join(format!("aqua-catalog-{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&Catalog::customize()).unwrap()).unwrap();

        let config = ConfigState {
            customize_catalog_path: Some(path.clone()),
            ..ConfigState::default()
        };
        let catalog = config.catalog_for(BookingFlow::Customize).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(catalog, Catalog::customize());
    }
}
