//! Error types for address validation and deriver setup.
//!
//! Derivation itself cannot fail: every address that passes validation yields a
//! complete profile from a deriver whose tables are all non-empty.

use thiserror::Error;

/// What exactly is wrong with a rejected address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressDefect {
    /// Total length is not 42 characters
    #[error("expected 42 characters, got {actual}")]
    Length { actual: usize },
    /// Does not start with `0x`
    #[error("missing 0x prefix")]
    MissingPrefix,
    /// A non-hexadecimal character after the prefix
    #[error("non-hex character {found:?} at position {position}")]
    NonHex { position: usize, found: char },
}

/// Errors produced by the cosmic profile library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CosmicError {
    /// The input does not have the `0x` + 40 hex digits shape
    #[error("Invalid address {input:?}: {defect}")]
    InvalidAddress { input: String, defect: AddressDefect },

    /// A text table the deriver indexes into has no entries
    #[error("The {table} table is empty")]
    EmptyTable { table: &'static str },
}

impl CosmicError {
    pub(crate) fn invalid(input: &str, defect: AddressDefect) -> Self {
        CosmicError::InvalidAddress {
            input: input.to_string(),
            defect,
        }
    }

    /// The address defect behind this error, if it is a validation error.
    pub fn defect(&self) -> Option<&AddressDefect> {
        match self {
            CosmicError::InvalidAddress { defect, .. } => Some(defect),
            CosmicError::EmptyTable { .. } => None,
        }
    }
}

pub type CosmicResult<T> = Result<T, CosmicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defect_messages() {
        assert_eq!(
            AddressDefect::Length { actual: 10 }.to_string(),
            "expected 42 characters, got 10"
        );
        assert_eq!(AddressDefect::MissingPrefix.to_string(), "missing 0x prefix");
        assert_eq!(
            AddressDefect::NonHex { position: 5, found: 'z' }.to_string(),
            "non-hex character 'z' at position 5"
        );
    }

    #[test]
    fn test_invalid_address_message_includes_defect() {
        let err = CosmicError::invalid("0x12", AddressDefect::Length { actual: 4 });
        assert_eq!(
            err.to_string(),
            "Invalid address \"0x12\": expected 42 characters, got 4"
        );
        assert_eq!(err.defect(), Some(&AddressDefect::Length { actual: 4 }));
    }

    #[test]
    fn test_empty_table_has_no_defect() {
        let err = CosmicError::EmptyTable { table: "trait" };
        assert_eq!(err.to_string(), "The trait table is empty");
        assert_eq!(err.defect(), None);
    }
}
