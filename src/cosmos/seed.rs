//! Offset table: which slice of the address feeds which field.
//!
//! Offsets index the full lowercase address string, so offset 2 is the first
//! hex digit after `0x`. Repeated structures (planets, months, tokens) are
//! described by a base window plus a per-item stride.

use crate::types::{Address, ADDRESS_LEN};

/// A run of hex digits inside an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexWindow {
    pub start: usize,
    pub width: usize,
}

impl HexWindow {
    pub const fn new(start: usize, width: usize) -> Self {
        Self { start, width }
    }

    /// The `index`-th window of a repeated structure.
    pub const fn nth(self, index: usize, stride: usize) -> Self {
        Self {
            start: self.start + index * stride,
            width: self.width,
        }
    }

    pub const fn end(&self) -> usize {
        self.start + self.width
    }

    /// Whether two windows read any character in common.
    pub fn overlaps(&self, other: &HexWindow) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Parse the window as a base-16 integer.
    pub fn read(&self, address: &Address) -> u64 {
        debug_assert!(self.end() <= ADDRESS_LEN && self.width <= 16);
        address.as_str().as_bytes()[self.start..self.end()]
            .iter()
            // Address guarantees hex digits here
            .map(|b| (*b as char).to_digit(16).unwrap_or(0) as u64)
            .fold(0, |acc, digit| (acc << 4) | digit)
    }
}

pub const SUN_SIGN: HexWindow = HexWindow::new(2, 2);
pub const MOON_SIGN: HexWindow = HexWindow::new(4, 2);
pub const RISING_SIGN: HexWindow = HexWindow::new(6, 2);
pub const TRAITS: [HexWindow; 3] = [
    HexWindow::new(8, 2),
    HexWindow::new(10, 2),
    HexWindow::new(12, 2),
];
pub const PREDICTION: HexWindow = HexWindow::new(14, 2);

pub const PLANET_SIGN: HexWindow = HexWindow::new(14, 2);
pub const PLANET_SIGN_STRIDE: usize = 2;
pub const PLANET_DEGREE: HexWindow = HexWindow::new(28, 1);
pub const PLANET_DEGREE_STRIDE: usize = 1;

pub const LUCKY_NUMBERS: [HexWindow; 3] = [
    HexWindow::new(32, 2),
    HexWindow::new(34, 2),
    HexWindow::new(36, 2),
];
pub const COSMIC_ALIGNMENT: HexWindow = HexWindow::new(38, 2);

pub const MONTH: HexWindow = HexWindow::new(2, 2);
pub const MONTH_STRIDE: usize = 2;

pub const WALLET_SEED_1: HexWindow = HexWindow::new(2, 8);
pub const WALLET_SEED_2: HexWindow = HexWindow::new(10, 8);
pub const WALLET_SEED_3: HexWindow = HexWindow::new(18, 8);

pub const TOKEN: HexWindow = HexWindow::new(2, 4);
pub const TOKEN_STRIDE: usize = 4;

pub const ZODIAC_WHEEL: HexWindow = HexWindow::new(2, 2);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_WALLET_ADDRESS;

    fn address() -> Address {
        Address::parse(DEFAULT_WALLET_ADDRESS).unwrap()
    }

    #[test]
    fn test_read_two_digit_window() {
        assert_eq!(SUN_SIGN.read(&address()), 0xfd);
        assert_eq!(COSMIC_ALIGNMENT.read(&address()), 0x17);
    }

    #[test]
    fn test_read_wide_window() {
        assert_eq!(WALLET_SEED_1.read(&address()), 0xfd2d53b5);
        assert_eq!(WALLET_SEED_3.read(&address()), 0x68586515);
    }

    #[test]
    fn test_read_ignores_case_of_input() {
        let upper = Address::parse("0xFD2D53B5B47EFB3768586515082230130879172B").unwrap();
        assert_eq!(TOKEN.read(&upper), 0xfd2d);
    }

    #[test]
    fn test_nth_applies_stride() {
        assert_eq!(PLANET_SIGN.nth(6, PLANET_SIGN_STRIDE), HexWindow::new(26, 2));
        assert_eq!(MONTH.nth(11, MONTH_STRIDE), HexWindow::new(24, 2));
        assert_eq!(TOKEN.nth(5, TOKEN_STRIDE), HexWindow::new(22, 4));
        assert_eq!(PLANET_DEGREE.nth(6, PLANET_DEGREE_STRIDE), HexWindow::new(34, 1));
    }

    #[test]
    fn test_every_window_fits_inside_address() {
        let mut windows = vec![
            SUN_SIGN,
            MOON_SIGN,
            RISING_SIGN,
            PREDICTION,
            COSMIC_ALIGNMENT,
            WALLET_SEED_1,
            WALLET_SEED_2,
            WALLET_SEED_3,
            ZODIAC_WHEEL,
        ];
        windows.extend(TRAITS);
        windows.extend(LUCKY_NUMBERS);
        windows.extend((0..7).map(|i| PLANET_SIGN.nth(i, PLANET_SIGN_STRIDE)));
        windows.extend((0..7).map(|i| PLANET_DEGREE.nth(i, PLANET_DEGREE_STRIDE)));
        windows.extend((0..12).map(|i| MONTH.nth(i, MONTH_STRIDE)));
        windows.extend((0..6).map(|i| TOKEN.nth(i, TOKEN_STRIDE)));

        for window in windows {
            assert!(window.start >= 2, "{:?} reads the prefix", window);
            assert!(window.end() <= ADDRESS_LEN, "{:?} runs past the end", window);
        }
    }

    #[test]
    fn test_overlaps() {
        assert!(SUN_SIGN.overlaps(&WALLET_SEED_1));
        assert!(!SUN_SIGN.overlaps(&MOON_SIGN));
        assert!(!COSMIC_ALIGNMENT.overlaps(&LUCKY_NUMBERS[2]));
    }
}
