//! Header helpers: abbreviated address and explorer link.

use crate::types::Address;

/// `0xfd2d...172b`: first six and last four characters.
pub fn short_address(address: &Address) -> String {
    let full = address.as_str();
    format!("{}...{}", &full[..6], &full[full.len() - 4..])
}

/// Explorer page for the address.
pub fn explorer_url(base: &str, address: &Address) -> String {
    format!("{}{}", base, address)
}
