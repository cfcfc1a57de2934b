//! Celestial Vault - on-chain astrology for wallet addresses
//!
//! This crate reads a wallet address as a seed and derives a decorative
//! "cosmic profile" from its hex digits: zodiac signs, planetary table,
//! token holdings, activity chart and wallet metrics. No chain is queried;
//! the same address always yields the same profile.

pub mod error;
pub mod types;
pub mod cosmos;
pub mod config;
pub mod view;

// Re-export main types for convenience
pub use cosmos::{derive_profile, CosmicDeriver, CosmicProfile};
pub use error::{AddressDefect, CosmicError};
pub use types::Address;
