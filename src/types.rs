//! Core types shared across the celestial vault.

use crate::error::{AddressDefect, CosmicError, CosmicResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Total length of a wallet address, prefix included.
pub const ADDRESS_LEN: usize = 42;

/// The wallet address the dashboard reads its fortune from.
pub const DEFAULT_WALLET_ADDRESS: &str = "0xfd2d53b5b47efb3768586515082230130879172b";

/// A validated wallet address: `0x` followed by 40 lowercase hex digits.
///
/// Only the lexical shape is checked. Checksums and on-chain existence are
/// never looked at; the address is just a seed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Validate and normalize an address string.
    pub fn parse(input: &str) -> CosmicResult<Self> {
        if input.len() != ADDRESS_LEN {
            // `len` counts bytes; report characters so multi-byte input reads sensibly
            return Err(CosmicError::invalid(
                input,
                AddressDefect::Length {
                    actual: input.chars().count(),
                },
            ));
        }

        let bytes = input.as_bytes();
        if bytes[0] != b'0' || !matches!(bytes[1], b'x' | b'X') {
            return Err(CosmicError::invalid(input, AddressDefect::MissingPrefix));
        }

        if let Some((position, found)) = input
            .char_indices()
            .skip(2)
            .find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(CosmicError::invalid(
                input,
                AddressDefect::NonHex { position, found },
            ));
        }

        Ok(Address(input.to_ascii_lowercase()))
    }

    /// Full lowercase address, prefix included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 40 hex digits after the prefix.
    pub fn hex_body(&self) -> &str {
        &self.0[2..]
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = CosmicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

impl TryFrom<&str> for Address {
    type Error = CosmicError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Address::parse(value)
    }
}

impl TryFrom<String> for Address {
    type Error = CosmicError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Address::parse(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let address = Address::parse("0xFD2D53B5B47EFB3768586515082230130879172B").unwrap();
        assert_eq!(address.as_str(), DEFAULT_WALLET_ADDRESS);
        assert_eq!(address.hex_body().len(), 40);
    }

    #[test]
    fn test_parse_accepts_uppercase_prefix() {
        let address = Address::parse("0XfD2d53b5b47efb3768586515082230130879172b").unwrap();
        assert_eq!(address.as_str(), DEFAULT_WALLET_ADDRESS);
    }

    #[test]
    fn test_short_address_rejected() {
        let err = Address::parse("0xfd2d53b5").unwrap_err();
        assert_eq!(err.defect(), Some(&AddressDefect::Length { actual: 10 }));
    }

    #[test]
    fn test_long_address_rejected() {
        let input = format!("{}00", DEFAULT_WALLET_ADDRESS);
        let err = Address::parse(&input).unwrap_err();
        assert_eq!(err.defect(), Some(&AddressDefect::Length { actual: 44 }));
    }

    #[test]
    fn test_missing_prefix_rejected() {
        let input = format!("ab{}", &DEFAULT_WALLET_ADDRESS[2..]);
        let err = Address::parse(&input).unwrap_err();
        assert_eq!(err.defect(), Some(&AddressDefect::MissingPrefix));
    }

    #[test]
    fn test_non_hex_rejected_with_position() {
        let mut input = DEFAULT_WALLET_ADDRESS.to_string();
        input.replace_range(39..40, "g");
        let err = Address::parse(&input).unwrap_err();
        assert_eq!(
            err.defect(),
            Some(&AddressDefect::NonHex {
                position: 39,
                found: 'g'
            })
        );
    }

    #[test]
    fn test_multibyte_input_rejected() {
        // 41 chars but 42 bytes
        let input = format!("0x{}é", &DEFAULT_WALLET_ADDRESS[2..40]);
        assert_eq!(input.len(), 42);
        let err = Address::parse(&input).unwrap_err();
        assert!(matches!(err.defect(), Some(AddressDefect::NonHex { found: 'é', .. })));
    }

    #[test]
    fn test_serde_roundtrip_validates() {
        let address = Address::parse(DEFAULT_WALLET_ADDRESS).unwrap();
        let json = serde_json::to_string(&address).unwrap();
        assert_eq!(json, format!("\"{}\"", DEFAULT_WALLET_ADDRESS));

        let bad: Result<Address, _> = serde_json::from_str("\"0x1234\"");
        assert!(bad.is_err());
    }
}
