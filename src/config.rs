//! Dashboard configuration.

use crate::cosmos::DeriverConfig;
use crate::types::{Address, DEFAULT_WALLET_ADDRESS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming a JSON config file.
pub const CONFIG_PATH_ENV: &str = "CELESTIAL_VAULT_CONFIG";
/// Environment variable overriding the wallet address.
pub const ADDRESS_ENV: &str = "CELESTIAL_VAULT_ADDRESS";

/// Star field sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    /// Viewports narrower than this get the small star count
    pub narrow_breakpoint_px: u32,
    pub narrow_star_count: usize,
    pub wide_star_count: usize,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 640,
            narrow_star_count: 50,
            wide_star_count: 100,
        }
    }
}

impl StarFieldConfig {
    pub fn star_count(&self, viewport_width_px: u32) -> usize {
        if viewport_width_px < self.narrow_breakpoint_px {
            self.narrow_star_count
        } else {
            self.wide_star_count
        }
    }
}

/// Top-level configuration for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Wallet whose fortune is shown
    pub wallet_address: String,
    /// Block explorer prefix the address is appended to
    pub explorer_base_url: String,
    pub star_field: StarFieldConfig,
    pub tables: DeriverConfig,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            wallet_address: DEFAULT_WALLET_ADDRESS.to_string(),
            explorer_base_url: "https://etherscan.io/address/".to_string(),
            star_field: StarFieldConfig::default(),
            tables: DeriverConfig::default(),
        }
    }
}

impl VaultConfig {
    /// Parse a JSON config; missing fields take their defaults. Tables
    /// present in the file must not be empty.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).context("Failed to parse vault config JSON")?;
        config
            .tables
            .validate()
            .context("Invalid display tables in vault config")?;
        Ok(config)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_json_str(&raw)?;
        info!("Loaded vault config from {}", path.display());
        Ok(config)
    }

    /// Build the config from the environment: file named by
    /// `CELESTIAL_VAULT_CONFIG` if set, then `CELESTIAL_VAULT_ADDRESS` on top.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::load(path)?,
            Err(_) => {
                debug!("{} not set, using defaults", CONFIG_PATH_ENV);
                Self::default()
            }
        };

        if let Ok(address) = std::env::var(ADDRESS_ENV) {
            debug!("Address overridden by {}", ADDRESS_ENV);
            config.wallet_address = address;
        }

        Ok(config)
    }

    /// The configured wallet address, validated.
    pub fn address(&self) -> Result<Address> {
        Address::parse(&self.wallet_address)
            .with_context(|| format!("Configured wallet address {:?} is invalid", self.wallet_address))
    }
}
