//! Cosmic profile derivation.
//!
//! Every field is computed the same way: read a window of hex digits from the
//! address, reduce it modulo a range width and add a floor, or use it to index
//! one of the fixed tables. Nothing here depends on time or randomness.

use crate::cosmos::catalog::{MONTHS, TOKENS};
use crate::cosmos::seed::{self, HexWindow};
use crate::cosmos::types::{
    CosmicProfile, DeriverConfig, MonthlyReading, Planet, PlanetaryPosition, TokenHolding,
    WalletStats, Zodiac,
};
use crate::error::CosmicResult;
use crate::types::Address;
use chrono::NaiveDate;
use tracing::{debug, instrument};

/// The Cosmic Profile Deriver.
///
/// Holds only immutable tables, so a single instance can be shared freely
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct CosmicDeriver {
    config: DeriverConfig,
}

impl CosmicDeriver {
    /// Create a deriver over the given tables. Every table needs at least
    /// one entry.
    pub fn new(config: DeriverConfig) -> CosmicResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DeriverConfig {
        &self.config
    }

    /// Validate `input` and derive its profile.
    pub fn derive_str(&self, input: &str) -> CosmicResult<CosmicProfile> {
        let address = Address::parse(input)?;
        Ok(self.derive(&address))
    }

    /// Derive the full profile for an address.
    #[instrument(skip(self, address), fields(address = %address))]
    pub fn derive(&self, address: &Address) -> CosmicProfile {
        let profile = CosmicProfile {
            address: address.clone(),
            sun_sign: self.sun_sign(address),
            moon_sign: self.moon_sign(address),
            rising_sign: self.rising_sign(address),
            dominant_traits: self.dominant_traits(address),
            prediction: self.prediction(address),
            planetary_positions: self.planetary_positions(address),
            lucky_numbers: self.lucky_numbers(address),
            cosmic_alignment: self.cosmic_alignment(address),
            monthly_series: self.monthly_series(address),
            token_holdings: self.token_holdings(address),
            wallet_stats: self.wallet_stats(address),
            wheel_sign: self.wheel_sign(address),
        };

        debug!(
            "Derived profile: sun={} moon={} rising={} alignment={}",
            profile.sun_sign.name(),
            profile.moon_sign.name(),
            profile.rising_sign.name(),
            profile.cosmic_alignment
        );
        profile
    }

    pub fn sun_sign(&self, address: &Address) -> Zodiac {
        zodiac_at(address, seed::SUN_SIGN)
    }

    pub fn moon_sign(&self, address: &Address) -> Zodiac {
        zodiac_at(address, seed::MOON_SIGN)
    }

    pub fn rising_sign(&self, address: &Address) -> Zodiac {
        zodiac_at(address, seed::RISING_SIGN)
    }

    /// Sign the zodiac wheel opens on.
    pub fn wheel_sign(&self, address: &Address) -> Zodiac {
        zodiac_at(address, seed::ZODIAC_WHEEL)
    }

    /// Three traits; the same trait may appear more than once.
    pub fn dominant_traits(&self, address: &Address) -> [String; 3] {
        seed::TRAITS.map(|window| pick(&self.config.traits, window.read(address)))
    }

    pub fn prediction(&self, address: &Address) -> String {
        pick(&self.config.predictions, seed::PREDICTION.read(address))
    }

    pub fn planetary_positions(&self, address: &Address) -> Vec<PlanetaryPosition> {
        Planet::all()
            .into_iter()
            .enumerate()
            .map(|(i, planet)| {
                let sign_window = seed::PLANET_SIGN.nth(i, seed::PLANET_SIGN_STRIDE);
                let degree_window = seed::PLANET_DEGREE.nth(i, seed::PLANET_DEGREE_STRIDE);
                PlanetaryPosition {
                    planet,
                    sign: zodiac_at(address, sign_window),
                    degree: (degree_window.read(address) % 30) as u8,
                }
            })
            .collect()
    }

    pub fn lucky_numbers(&self, address: &Address) -> [u8; 3] {
        seed::LUCKY_NUMBERS.map(|window| (window.read(address) % 100) as u8)
    }

    /// Alignment percentage, 50-99.
    pub fn cosmic_alignment(&self, address: &Address) -> u8 {
        (seed::COSMIC_ALIGNMENT.read(address) % 50 + 50) as u8
    }

    pub fn monthly_series(&self, address: &Address) -> Vec<MonthlyReading> {
        MONTHS
            .into_iter()
            .enumerate()
            .map(|(i, month)| {
                let value = seed::MONTH.nth(i, seed::MONTH_STRIDE).read(address);
                MonthlyReading {
                    month,
                    activity: (value % 60 + 20) as u8,
                    energy: (value % 40 + 30) as u8,
                }
            })
            .collect()
    }

    pub fn token_holdings(&self, address: &Address) -> Vec<TokenHolding> {
        TOKENS
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let value = seed::TOKEN.nth(i, seed::TOKEN_STRIDE).read(address);
                TokenHolding {
                    token: *token,
                    balance: four_place_decimal(value % 10_000),
                    value: (value % 50_000) as f64 / 100.0,
                }
            })
            .collect()
    }

    pub fn wallet_stats(&self, address: &Address) -> WalletStats {
        let seed1 = seed::WALLET_SEED_1.read(address);
        let seed2 = seed::WALLET_SEED_2.read(address);
        let seed3 = seed::WALLET_SEED_3.read(address);

        let year = 2020 + (seed3 % 4) as i32;
        let month = (seed3 % 12 + 1) as u32;
        let day = (seed3 % 28 + 1) as u32;
        // Day never exceeds 28, so every combination is a real date
        let first_activity = NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN);

        WalletStats {
            balance: four_place_decimal(seed1 % 10_000),
            transactions: (seed2 % 5_000 + 100) as u32,
            first_activity,
            cosmic_age: format!("{} days", seed1 % 1_000 + 365),
            power_level: (seed2 % 100 + 1) as u8,
            constellation: pick(&self.config.constellations, seed3),
        }
    }
}

/// Derive a profile with the standard tables.
pub fn derive_profile(input: &str) -> CosmicResult<CosmicProfile> {
    CosmicDeriver::default().derive_str(input)
}

fn zodiac_at(address: &Address, window: HexWindow) -> Zodiac {
    Zodiac::from_index(window.read(address) as usize)
}

/// Tables are never empty once the deriver exists.
fn pick(table: &[String], value: u64) -> String {
    table[(value % table.len() as u64) as usize].clone()
}

/// Render hundredths as a four-place decimal: 4813 -> "48.1300".
fn four_place_decimal(hundredths: u64) -> String {
    format!("{}.{:02}00", hundredths / 100, hundredths % 100)
}
