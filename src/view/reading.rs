//! Tarot-style reading cards.

use crate::cosmos::{CosmicProfile, Zodiac};

/// One face-down card of the three-card spread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarotCard {
    pub title: &'static str,
    pub content: String,
    pub sign: Zodiac,
}

/// Past, present and future cards drawn from the sun, moon and rising signs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TarotSpread {
    cards: [TarotCard; 3],
    /// Indices of face-up cards, in the order they were turned
    revealed: Vec<usize>,
}

impl TarotSpread {
    pub fn from_profile(profile: &CosmicProfile) -> Self {
        let cards = [
            TarotCard {
                title: "Past",
                content: format!("Guided by {}", profile.sun_sign.name()),
                sign: profile.sun_sign,
            },
            TarotCard {
                title: "Present",
                content: format!("Illuminated by {}", profile.moon_sign.name()),
                sign: profile.moon_sign,
            },
            TarotCard {
                title: "Future",
                content: format!("Rising towards {}", profile.rising_sign.name()),
                sign: profile.rising_sign,
            },
        ];
        Self {
            cards,
            revealed: Vec::new(),
        }
    }

    pub fn cards(&self) -> &[TarotCard] {
        &self.cards
    }

    /// Flip a card. Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.cards.len() {
            return;
        }
        if let Some(pos) = self.revealed.iter().position(|&i| i == index) {
            self.revealed.remove(pos);
        } else {
            self.revealed.push(index);
        }
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn revealed(&self) -> &[usize] {
        &self.revealed
    }
}
