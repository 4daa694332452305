//! # Stand Configuration
//!
//! Store identity and pricing knobs.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STAND_STORE_NAME="Pier 3 Stand"                                    │
//! │     STAND_TAX_RATE_BPS=725                                             │
//! │     STAND_MAX_ORDER_ITEMS=100                                          │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     explicit path, or $STAND_CONFIG                                    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     7.25% tax, no item cap                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! name = "Pier 3 Stand"
//! address = ["Pier 3", "Harbor City"]
//!
//! [pricing]
//! tax_rate_bps = 725
//! max_order_items = 100
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{CoreError, CoreResult};
use crate::types::TaxRate;
use crate::DEFAULT_TAX_RATE_BPS;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "STAND_CONFIG";

// =============================================================================
// Store Settings
// =============================================================================

/// Printed at the top of text receipts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub address: Vec<String>,
}

// =============================================================================
// Pricing Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingSettings {
    /// Sales tax in basis points (725 = 7.25%).
    #[serde(default = "default_tax_rate_bps")]
    pub tax_rate_bps: u32,

    /// Maximum items a single order may hold. Unset means no cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_order_items: Option<usize>,
}

fn default_tax_rate_bps() -> u32 {
    DEFAULT_TAX_RATE_BPS
}

impl Default for PricingSettings {
    fn default() -> Self {
        PricingSettings {
            tax_rate_bps: default_tax_rate_bps(),
            max_order_items: None,
        }
    }
}

impl PricingSettings {
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }
}

// =============================================================================
// Stand Config
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StandConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub pricing: PricingSettings,
}

impl StandConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`path`, else `$STAND_CONFIG`); a missing file is not an error
    /// 3. Environment variables
    pub fn load(path: Option<&Path>) -> CoreResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from));

        let mut config = match path {
            Some(path) if path.exists() => {
                info!(?path, "Loading stand config from file");
                Self::from_toml_str(&std::fs::read_to_string(&path)?)?
            }
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        Self::load(path).unwrap_or_else(|e| {
            warn!("Failed to load stand config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses TOML text. Missing sections and fields take their defaults.
    pub fn from_toml_str(contents: &str) -> CoreResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.pricing.tax_rate_bps > 10_000 {
            return Err(CoreError::InvalidConfig(format!(
                "tax_rate_bps must be between 0 and 10000, got {}",
                self.pricing.tax_rate_bps
            )));
        }

        if self.pricing.max_order_items == Some(0) {
            return Err(CoreError::InvalidConfig(
                "max_order_items must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `STAND_*` overrides from `lookup`. Unparseable values are
    /// logged and ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("STAND_STORE_NAME") {
            debug!(store = %name, "Overriding store name from environment");
            self.store.name = Some(name);
        }

        if let Some(bps) = lookup("STAND_TAX_RATE_BPS") {
            match bps.parse::<u32>() {
                Ok(bps) => {
                    debug!(bps, "Overriding tax rate from environment");
                    self.pricing.tax_rate_bps = bps;
                }
                Err(_) => warn!(value = %bps, "Ignoring malformed STAND_TAX_RATE_BPS"),
            }
        }

        if let Some(max) = lookup("STAND_MAX_ORDER_ITEMS") {
            match max.parse::<usize>() {
                Ok(max) => {
                    debug!(max, "Overriding order item cap from environment");
                    self.pricing.max_order_items = Some(max);
                }
                Err(_) => warn!(value = %max, "Ignoring malformed STAND_MAX_ORDER_ITEMS"),
            }
        }
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.pricing.tax_rate()
    }

    pub fn store_name(&self) -> Option<&str> {
        self.store.name.as_deref()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn init_logging() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("stand_core=debug")
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_default_config() {
        let config = StandConfig::default();
        assert_eq!(config.tax_rate().bps(), 725);
        assert_eq!(config.pricing.max_order_items, None);
        assert!(config.store_name().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StandConfig::from_toml_str(
            r#"
            [store]
            name = "Pier 3 Stand"
            "#,
        )
        .unwrap();

        assert_eq!(config.store_name(), Some("Pier 3 Stand"));
        assert_eq!(config.pricing, PricingSettings::default());
    }

    #[test]
    fn test_bad_toml_is_load_failure() {
        let err = StandConfig::from_toml_str("[pricing]\ntax_rate_bps = \"lots\"").unwrap_err();
        assert!(matches!(err, CoreError::ConfigLoadFailed(_)));
    }

    #[test]
    fn test_validation() {
        let mut config = StandConfig::default();
        config.pricing.tax_rate_bps = 10_001;
        assert!(config.validate().is_err());

        config.pricing.tax_rate_bps = 0;
        config.pricing.max_order_items = Some(0);
        assert!(config.validate().is_err());

        config.pricing.max_order_items = Some(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides() {
        init_logging();

        let env: HashMap<&str, &str> = HashMap::from([
            ("STAND_STORE_NAME", "Night Market"),
            ("STAND_TAX_RATE_BPS", "800"),
            ("STAND_MAX_ORDER_ITEMS", "lots"),
        ]);

        let mut config = StandConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.store_name(), Some("Night Market"));
        assert_eq!(config.tax_rate().bps(), 800);
        // malformed value ignored
        assert_eq!(config.pricing.max_order_items, None);

        config.apply_overrides(|key| (key == "STAND_MAX_ORDER_ITEMS").then(|| "12".to_string()));
        assert_eq!(config.pricing.max_order_items, Some(12));
    }

    #[test]
    fn test_load_from_file() {
        init_logging();

        let path = std::env::temp_dir().join(format!("stand-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "[pricing]\ntax_rate_bps = 600\nmax_order_items = 5\n").unwrap();

        let config = StandConfig::load(Some(path.as_path())).unwrap();
        std::fs::remove_file(&path).unwrap();

        // env overrides win when the runner happens to set them
        if std::env::var("STAND_TAX_RATE_BPS").is_err() {
            assert_eq!(config.tax_rate().bps(), 600);
        }
        if std::env::var("STAND_MAX_ORDER_ITEMS").is_err() {
            assert_eq!(config.pricing.max_order_items, Some(5));
        }
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("stand-config-that-does-not-exist.toml");
        let config = StandConfig::load_or_default(Some(path.as_path()));
        assert!(config.validate().is_ok());
    }
}
