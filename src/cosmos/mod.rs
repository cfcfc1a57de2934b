//! Cosmos module - deterministic address-to-profile derivation.
//!
//! The deriver reads fixed windows of an address's hex digits (see [`seed`])
//! and maps them onto the display tables in [`catalog`]. The result is a
//! [`CosmicProfile`] that presentation surfaces consume read-only.

pub mod types;
pub mod catalog;
pub mod seed;
pub mod deriver;

// Re-export main public types and the deriver
pub use deriver::{derive_profile, CosmicDeriver};
pub use types::{
    CosmicProfile, DeriverConfig, Element, MonthlyReading, Planet, PlanetaryPosition,
    TokenDescriptor, TokenHolding, WalletStats, Zodiac,
};

use anyhow::{Context, Result};

/// Deriver builder for swapping in custom text tables.
pub struct DeriverBuilder {
    config: DeriverConfig,
}

impl DeriverBuilder {
    /// Create a new builder with the standard tables.
    pub fn new() -> Self {
        Self {
            config: DeriverConfig::default(),
        }
    }

    /// Replace all tables at once, e.g. from a loaded config file.
    pub fn with_config(mut self, config: DeriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the personality trait table.
    pub fn with_traits<I, S>(mut self, traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.traits = traits.into_iter().map(Into::into).collect();
        self
    }

    /// Set the prophecy table.
    pub fn with_predictions<I, S>(mut self, predictions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.predictions = predictions.into_iter().map(Into::into).collect();
        self
    }

    /// Set the constellation table.
    pub fn with_constellations<I, S>(mut self, constellations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.constellations = constellations.into_iter().map(Into::into).collect();
        self
    }

    /// Build the deriver configuration.
    pub fn build_config(self) -> DeriverConfig {
        self.config
    }

    /// Build the deriver. Every table needs at least one entry.
    pub fn build(self) -> Result<CosmicDeriver> {
        CosmicDeriver::new(self.config).context("Failed to build cosmic deriver")
    }
}

impl Default for DeriverBuilder {
    fn default() -> Self {
        Self::new()
    }
}
