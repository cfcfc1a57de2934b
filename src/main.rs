//! Main entry point for the Celestial Vault demo
//!
//! Derives the configured wallet's cosmic profile, logs a reading and prints
//! the full profile as JSON.

use anyhow::{Context, Result};
use celestial_vault::config::VaultConfig;
use celestial_vault::cosmos::{CosmicProfile, DeriverBuilder};
use celestial_vault::view::{explorer_url, Dashboard, Tab};
use std::sync::Arc;
use tracing::{info, warn, Level};

/// Neighbouring addresses read alongside the main one.
const COMPANION_ADDRESSES: [&str; 3] = [
    "0x0000000000000000000000000000000000000000",
    "0xffffffffffffffffffffffffffffffffffffffff",
    "0x1234567890abcdef1234567890abcdef12345678",
];

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Starting Celestial Vault");

    let config = VaultConfig::from_env()?;
    let address = config.address()?;
    let deriver = Arc::new(
        DeriverBuilder::new()
            .with_config(config.tables.clone())
            .build()
            .context("Invalid display tables in config")?,
    );

    let profile = deriver.derive(&address);
    let dashboard = Dashboard::new(profile.clone());
    log_reading(&dashboard, &config);

    // Derivation is pure, so companions can be read on separate tasks
    // from one shared deriver.
    let mut handles = Vec::new();
    for input in COMPANION_ADDRESSES {
        let deriver = Arc::clone(&deriver);
        handles.push(tokio::spawn(async move { deriver.derive_str(input) }));
    }
    for handle in handles {
        match handle.await.context("Companion derivation task panicked")? {
            Ok(companion) => info!(
                "Companion {}: sun {} / alignment {}%",
                companion.address,
                companion.sun_sign.name(),
                companion.cosmic_alignment
            ),
            Err(e) => warn!("Skipping companion: {}", e),
        }
    }

    print_profile(&profile)?;
    Ok(())
}

fn log_reading(dashboard: &Dashboard, config: &VaultConfig) {
    let profile = dashboard.profile();

    info!(
        "Wallet {} ({})",
        dashboard.short_address(),
        explorer_url(&config.explorer_base_url, &profile.address)
    );
    for tab in Tab::all() {
        info!("{} {}", tab.icon(), tab.label());
    }
    info!("{}", dashboard.wheel.description());
    for card in dashboard.spread.cards() {
        info!("{}: {} {}", card.title, card.sign.symbol(), card.content);
    }
    for position in &profile.planetary_positions {
        info!(
            "{} in {} at {}°",
            position.planet.as_str(),
            position.sign.name(),
            position.degree
        );
    }
    info!("Dominant traits: {}", profile.dominant_traits.join(", "));
    info!("Lucky numbers: {:?}", profile.lucky_numbers);
    info!("Prophecy: \"{}\"", profile.prediction);
    info!("Cosmic alignment: {}%", profile.cosmic_alignment);
    for card in dashboard.stat_cards() {
        info!("{} {}: {}", card.icon, card.label, card.value);
    }
    info!("Total portfolio value: {}", dashboard.orbit.total_value_display());
}

fn print_profile(profile: &CosmicProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile).context("Failed to serialize profile")?;
    println!("{}", json);
    Ok(())
}
