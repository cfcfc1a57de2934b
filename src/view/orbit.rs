//! Token planetary system: selection and totals.

use crate::cosmos::TokenHolding;

#[derive(Debug, Clone, PartialEq)]
pub struct TokenOrbit {
    holdings: Vec<TokenHolding>,
    selected: Option<usize>,
}

impl TokenOrbit {
    pub fn new(holdings: Vec<TokenHolding>) -> Self {
        Self {
            holdings,
            selected: None,
        }
    }

    pub fn holdings(&self) -> &[TokenHolding] {
        &self.holdings
    }

    /// Select a token by symbol. Returns false, leaving the selection
    /// unchanged, when no token has that symbol.
    pub fn select(&mut self, symbol: &str) -> bool {
        match self.holdings.iter().position(|h| h.token.symbol == symbol) {
            Some(index) => {
                self.selected = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&TokenHolding> {
        self.selected.and_then(|i| self.holdings.get(i))
    }

    pub fn total_value(&self) -> f64 {
        self.holdings.iter().map(|h| h.value).sum()
    }

    /// Total portfolio value as shown, e.g. "$1493.48".
    pub fn total_value_display(&self) -> String {
        format!("${:.2}", self.total_value())
    }

    /// Animation delay for the token at `index`, in seconds; staggers the orbits.
    pub fn orbit_delay(index: usize) -> f64 {
        -(index as f64) * 2.0
    }
}
