//! Service configuration via `tally.toml`
//!
//! On first open, a default `tally.toml` is created in the data directory.
//! To change settings, edit the file and restart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use tally_core::{Currency, Error, Limits, Result, DEFAULT_MIN_WORK_COST};

/// Config file name placed in the service data directory.
pub const CONFIG_FILE_NAME: &str = "tally.toml";

/// Which contract store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// DashMap, per-shard locking (default)
    Sharded,
    /// One BTreeMap behind one RwLock
    Unified,
}

/// Service configuration loaded from `tally.toml`.
///
/// # Example
///
/// ```toml
/// currency = "EUR"
/// min_work_cost = "100"
/// store = "sharded"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyConfig {
    /// Currency every contract is quoted and costed in.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Minimum cost of a single work item, in major units.
    #[serde(default = "default_min_work_cost")]
    pub min_work_cost: Decimal,
    /// Store backend: `"sharded"` or `"unified"`.
    #[serde(default = "default_store")]
    pub store: String,
}

fn default_currency() -> String {
    Currency::EUR.to_string()
}

fn default_min_work_cost() -> Decimal {
    Decimal::from(DEFAULT_MIN_WORK_COST)
}

fn default_store() -> String {
    "sharded".to_string()
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            min_work_cost: default_min_work_cost(),
            store: default_store(),
        }
    }
}

impl TallyConfig {
    /// Build the amount limits this config describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the currency is not a three-letter code or the
    /// minimum work cost is negative.
    pub fn limits(&self) -> Result<Limits> {
        let currency = Currency::parse(&self.currency).map_err(|_| {
            Error::invalid_input(format!(
                "Invalid currency '{}' in tally.toml. Expected a three-letter code such as \"EUR\".",
                self.currency
            ))
        })?;
        if self.min_work_cost < Decimal::ZERO {
            return Err(Error::invalid_input(format!(
                "Invalid min_work_cost '{}' in tally.toml. Must not be negative.",
                self.min_work_cost
            )));
        }
        Ok(Limits {
            currency,
            min_work_cost: self.min_work_cost,
        })
    }

    /// Parse the store string into a `StoreKind`.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not `"sharded"` or `"unified"`.
    pub fn store_kind(&self) -> Result<StoreKind> {
        match self.store.as_str() {
            "sharded" => Ok(StoreKind::Sharded),
            "unified" => Ok(StoreKind::Unified),
            other => Err(Error::invalid_input(format!(
                "Invalid store '{}' in tally.toml. Expected \"sharded\" or \"unified\".",
                other
            ))),
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Tally service configuration
#
# Currency every contract is quoted and costed in.
# Amounts in any other currency are rejected.
currency = "EUR"

# Minimum cost of a single work item, in major units.
min_work_cost = "100"

# Store backend: "sharded" (default) or "unified"
#   "sharded" = DashMap, contracts on different shards never contend
#   "unified" = single table behind one lock
store = "sharded"
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// value is out of range.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to read config file '{}': {}", path.display(), e),
            )
        })?;
        let config: TallyConfig = toml::from_str(&content).map_err(|e| {
            Error::invalid_input(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        // Validate eagerly so a bad file fails at open, not at first use
        config.limits()?;
        config.store_kind()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to write default config file '{}': {}",
                        path.display(),
                        e
                    ),
                )
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::invalid_input(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to write config file '{}': {}", path.display(), e),
            )
            .into()
        })
    }
}
