//! Core types and data structures for cosmic profiles.

use crate::cosmos::catalog::{CONSTELLATIONS, PREDICTIONS, TRAITS};
use crate::error::{CosmicError, CosmicResult};
use crate::types::Address;
use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Classical element of a zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub fn as_str(&self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }
}

/// The twelve zodiac signs in wheel order, starting at Aries.
///
/// Serializes as the full sign record: `{symbol, name, element}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zodiac {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Zodiac {
    pub const COUNT: usize = 12;

    /// Returns all signs in wheel order.
    pub fn all() -> [Zodiac; Zodiac::COUNT] {
        [
            Zodiac::Aries,
            Zodiac::Taurus,
            Zodiac::Gemini,
            Zodiac::Cancer,
            Zodiac::Leo,
            Zodiac::Virgo,
            Zodiac::Libra,
            Zodiac::Scorpio,
            Zodiac::Sagittarius,
            Zodiac::Capricorn,
            Zodiac::Aquarius,
            Zodiac::Pisces,
        ]
    }

    /// Sign at a wheel position; wraps around past Pisces.
    pub fn from_index(index: usize) -> Zodiac {
        Zodiac::all()[index % Zodiac::COUNT]
    }

    /// Position on the wheel, Aries = 0.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Zodiac::Aries => "Aries",
            Zodiac::Taurus => "Taurus",
            Zodiac::Gemini => "Gemini",
            Zodiac::Cancer => "Cancer",
            Zodiac::Leo => "Leo",
            Zodiac::Virgo => "Virgo",
            Zodiac::Libra => "Libra",
            Zodiac::Scorpio => "Scorpio",
            Zodiac::Sagittarius => "Sagittarius",
            Zodiac::Capricorn => "Capricorn",
            Zodiac::Aquarius => "Aquarius",
            Zodiac::Pisces => "Pisces",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Zodiac::Aries => "♈",
            Zodiac::Taurus => "♉",
            Zodiac::Gemini => "♊",
            Zodiac::Cancer => "♋",
            Zodiac::Leo => "♌",
            Zodiac::Virgo => "♍",
            Zodiac::Libra => "♎",
            Zodiac::Scorpio => "♏",
            Zodiac::Sagittarius => "♐",
            Zodiac::Capricorn => "♑",
            Zodiac::Aquarius => "♒",
            Zodiac::Pisces => "♓",
        }
    }

    /// Elements cycle Fire, Earth, Air, Water around the wheel.
    pub fn element(&self) -> Element {
        match self.index() % 4 {
            0 => Element::Fire,
            1 => Element::Earth,
            2 => Element::Air,
            _ => Element::Water,
        }
    }
}

impl Serialize for Zodiac {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("Zodiac", 3)?;
        record.serialize_field("symbol", self.symbol())?;
        record.serialize_field("name", self.name())?;
        record.serialize_field("element", &self.element())?;
        record.end()
    }
}

/// Bodies listed in the planetary alignment table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    pub const COUNT: usize = 7;

    pub fn as_str(&self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
        }
    }

    /// Returns all planets in table order.
    pub fn all() -> [Planet; Planet::COUNT] {
        [
            Planet::Sun,
            Planet::Moon,
            Planet::Mercury,
            Planet::Venus,
            Planet::Mars,
            Planet::Jupiter,
            Planet::Saturn,
        ]
    }
}

/// A planet's placement in the reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanetaryPosition {
    pub planet: Planet,
    pub sign: Zodiac,
    /// Degree within the sign, 0-29
    pub degree: u8,
}

/// One bar pair of the activity chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyReading {
    pub month: &'static str,
    /// Activity value, 20-79
    pub activity: u8,
    /// Energy value, 30-69
    pub energy: u8,
}

/// Static description of a token orbiting in the planetary system view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDescriptor {
    pub name: &'static str,
    pub symbol: &'static str,
    /// CSS hex color
    pub color: &'static str,
    /// Orbit radius in pixels
    pub orbit_radius: u32,
    /// Seconds per revolution
    pub orbit_period: u32,
    /// Celestial body glyph drawn on the token
    pub glyph: &'static str,
}

/// A token descriptor plus its derived holdings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenHolding {
    #[serde(flatten)]
    pub token: TokenDescriptor,
    /// Four-place decimal string, e.g. "48.1300"
    pub balance: String,
    /// Value in dollars, cents resolution
    pub value: f64,
}

/// Headline wallet metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStats {
    pub balance: String,
    /// 100-5099
    pub transactions: u32,
    pub first_activity: NaiveDate,
    pub cosmic_age: String,
    /// 1-100
    pub power_level: u8,
    pub constellation: String,
}

/// Everything the dashboard shows for one address.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CosmicProfile {
    pub address: Address,
    pub sun_sign: Zodiac,
    pub moon_sign: Zodiac,
    pub rising_sign: Zodiac,
    pub dominant_traits: [String; 3],
    pub prediction: String,
    pub planetary_positions: Vec<PlanetaryPosition>,
    pub lucky_numbers: [u8; 3],
    /// 50-99
    pub cosmic_alignment: u8,
    pub monthly_series: Vec<MonthlyReading>,
    pub token_holdings: Vec<TokenHolding>,
    pub wallet_stats: WalletStats,
    /// Sign the zodiac wheel opens on
    pub wheel_sign: Zodiac,
}

/// Text tables the deriver indexes into.
///
/// Moduli follow the table lengths, so swapping in a longer trait list
/// widens the trait selection without touching the offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeriverConfig {
    pub traits: Vec<String>,
    pub predictions: Vec<String>,
    pub constellations: Vec<String>,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            traits: TRAITS.iter().map(|s| s.to_string()).collect(),
            predictions: PREDICTIONS.iter().map(|s| s.to_string()).collect(),
            constellations: CONSTELLATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl DeriverConfig {
    /// Check that every table has at least one entry.
    pub fn validate(&self) -> CosmicResult<()> {
        let tables = [
            ("trait", &self.traits),
            ("prediction", &self.predictions),
            ("constellation", &self.constellations),
        ];
        for (table, entries) in tables {
            if entries.is_empty() {
                return Err(CosmicError::EmptyTable { table });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zodiac_order_and_elements() {
        let all = Zodiac::all();
        for (i, sign) in all.iter().enumerate() {
            assert_eq!(sign.index(), i);
        }
        assert_eq!(Zodiac::Aries.element(), Element::Fire);
        assert_eq!(Zodiac::Taurus.element(), Element::Earth);
        assert_eq!(Zodiac::Libra.element(), Element::Air);
        assert_eq!(Zodiac::Pisces.element(), Element::Water);
        assert_eq!(Zodiac::Sagittarius.element(), Element::Fire);
    }

    #[test]
    fn test_zodiac_from_index_wraps() {
        assert_eq!(Zodiac::from_index(1), Zodiac::Taurus);
        assert_eq!(Zodiac::from_index(13), Zodiac::Taurus);
        assert_eq!(Zodiac::from_index(253), Zodiac::Taurus);
    }

    #[test]
    fn test_zodiac_symbols_are_distinct() {
        let symbols: std::collections::HashSet<_> =
            Zodiac::all().iter().map(|z| z.symbol()).collect();
        assert_eq!(symbols.len(), 12);
        assert_eq!(Zodiac::Leo.symbol(), "♌");
    }

    #[test]
    fn test_default_config_tables() {
        let config = DeriverConfig::default();
        assert_eq!(config.traits.len(), 10);
        assert_eq!(config.predictions.len(), 8);
        assert_eq!(config.constellations.len(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_with_empty_table_invalid() {
        let config = DeriverConfig {
            constellations: Vec::new(),
            ..DeriverConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(CosmicError::EmptyTable { table: "constellation" })
        );
    }

    #[test]
    fn test_zodiac_serializes_as_record() {
        let json = serde_json::to_value(Zodiac::Scorpio).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "symbol": "♏", "name": "Scorpio", "element": "Water" })
        );
    }

    #[test]
    fn test_planet_table_order() {
        let planets = Planet::all();
        assert_eq!(planets.len(), Planet::COUNT);
        assert_eq!(planets[0], Planet::Sun);
        assert_eq!(planets[6], Planet::Saturn);
    }
}
