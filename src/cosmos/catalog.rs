//! Fixed display tables.

use crate::cosmos::types::TokenDescriptor;

pub const TRAITS: [&str; 10] = [
    "Visionary",
    "Determined",
    "Intuitive",
    "Bold",
    "Analytical",
    "Creative",
    "Strategic",
    "Resilient",
    "Innovative",
    "Patient",
];

pub const PREDICTIONS: [&str; 8] = [
    "A significant transaction will bring unexpected gains.",
    "The stars align for a new DeFi venture.",
    "Mercury retrograde warns against impulsive trades.",
    "Jupiter's blessing favors long-term holdings.",
    "A cosmic convergence suggests portfolio diversification.",
    "Venus enters your wealth house - expect positive flows.",
    "The new moon heralds fresh opportunities in NFTs.",
    "Saturn's influence calls for patience in the markets.",
];

pub const CONSTELLATIONS: [&str; 10] = [
    "Orion",
    "Ursa Major",
    "Cassiopeia",
    "Draco",
    "Cygnus",
    "Lyra",
    "Aquila",
    "Pegasus",
    "Andromeda",
    "Perseus",
];

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Tokens in orbit order, innermost first.
pub const TOKENS: [TokenDescriptor; 6] = [
    TokenDescriptor {
        name: "Ethereum",
        symbol: "ETH",
        color: "#627EEA",
        orbit_radius: 60,
        orbit_period: 8,
        glyph: "☉",
    },
    TokenDescriptor {
        name: "Wrapped Bitcoin",
        symbol: "WBTC",
        color: "#F7931A",
        orbit_radius: 90,
        orbit_period: 12,
        glyph: "☿",
    },
    TokenDescriptor {
        name: "USD Coin",
        symbol: "USDC",
        color: "#2775CA",
        orbit_radius: 120,
        orbit_period: 16,
        glyph: "♀",
    },
    TokenDescriptor {
        name: "Chainlink",
        symbol: "LINK",
        color: "#375BD2",
        orbit_radius: 150,
        orbit_period: 20,
        glyph: "♂",
    },
    TokenDescriptor {
        name: "Uniswap",
        symbol: "UNI",
        color: "#FF007A",
        orbit_radius: 180,
        orbit_period: 25,
        glyph: "♃",
    },
    TokenDescriptor {
        name: "Aave",
        symbol: "AAVE",
        color: "#B6509E",
        orbit_radius: 210,
        orbit_period: 30,
        glyph: "♄",
    },
];
