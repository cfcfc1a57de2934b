//! Celestial metrics cards.

use crate::cosmos::WalletStats;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
    pub icon: &'static str,
}

/// The six metric cards, in display order.
pub fn stat_cards(stats: &WalletStats) -> Vec<StatCard> {
    vec![
        StatCard {
            label: "Cosmic Balance",
            value: format!("{} ETH", stats.balance),
            icon: "◈",
        },
        StatCard {
            label: "Transactions",
            value: group_thousands(u64::from(stats.transactions)),
            icon: "⟡",
        },
        StatCard {
            label: "First Contact",
            value: stats.first_activity.format("%Y-%m-%d").to_string(),
            icon: "✦",
        },
        StatCard {
            label: "Cosmic Age",
            value: stats.cosmic_age.clone(),
            icon: "☉",
        },
        StatCard {
            label: "Power Level",
            value: format!("{}%", stats.power_level),
            icon: "⚡",
        },
        StatCard {
            label: "Constellation",
            value: stats.constellation.clone(),
            icon: "✧",
        },
    ]
}

/// `4321` -> `"4,321"`.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmos::derive_profile;
    use crate::types::DEFAULT_WALLET_ADDRESS;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(4321), "4,321");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_cards_for_default_address() {
        let profile = derive_profile(DEFAULT_WALLET_ADDRESS).unwrap();
        let cards = stat_cards(&profile.wallet_stats);

        let values: Vec<_> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["61.9700 ETH", "827", "2021-06-06", "562 days", "28%", "Perseus"]
        );
        assert_eq!(cards[4].label, "Power Level");
    }
}
