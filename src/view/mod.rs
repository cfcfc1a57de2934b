//! View-model state for the dashboard.
//!
//! Each presentation surface reads the [`CosmicProfile`] and keeps its own
//! small piece of interaction state (active tab, wheel selection, flipped
//! cards, selected token). All of it is single-session and owned.

pub mod tabs;
pub mod header;
pub mod wheel;
pub mod reading;
pub mod orbit;
pub mod chart;
pub mod stats;
pub mod starfield;

pub use chart::{scale_bars, BarPair};
pub use header::{explorer_url, short_address};
pub use orbit::TokenOrbit;
pub use reading::{TarotCard, TarotSpread};
pub use starfield::{generate_stars, Star};
pub use stats::{stat_cards, StatCard};
pub use tabs::{Tab, TabState};
pub use wheel::ZodiacWheel;

use crate::cosmos::CosmicProfile;

/// Whole-page state for one address.
#[derive(Debug, Clone)]
pub struct Dashboard {
    profile: CosmicProfile,
    pub tabs: TabState,
    pub wheel: ZodiacWheel,
    pub spread: TarotSpread,
    pub orbit: TokenOrbit,
}

impl Dashboard {
    pub fn new(profile: CosmicProfile) -> Self {
        Self {
            tabs: TabState::new(),
            wheel: ZodiacWheel::new(profile.wheel_sign),
            spread: TarotSpread::from_profile(&profile),
            orbit: TokenOrbit::new(profile.token_holdings.clone()),
            profile,
        }
    }

    pub fn profile(&self) -> &CosmicProfile {
        &self.profile
    }

    pub fn short_address(&self) -> String {
        short_address(&self.profile.address)
    }

    pub fn chart_bars(&self) -> Vec<BarPair> {
        scale_bars(&self.profile.monthly_series)
    }

    pub fn stat_cards(&self) -> Vec<StatCard> {
        stat_cards(&self.profile.wallet_stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmos::{derive_profile, Zodiac};
    use crate::types::DEFAULT_WALLET_ADDRESS;

    #[test]
    fn test_dashboard_initial_state() {
        let dashboard = Dashboard::new(derive_profile(DEFAULT_WALLET_ADDRESS).unwrap());

        assert_eq!(dashboard.tabs.active(), Tab::Overview);
        assert_eq!(dashboard.wheel.active(), Zodiac::Taurus);
        assert!(dashboard.spread.revealed().is_empty());
        assert!(dashboard.orbit.selected().is_none());
        assert_eq!(dashboard.short_address(), "0xfd2d...172b");
        assert_eq!(dashboard.chart_bars().len(), 12);
        assert_eq!(dashboard.stat_cards().len(), 6);
    }

    #[test]
    fn test_interaction_leaves_profile_untouched() {
        let profile = derive_profile(DEFAULT_WALLET_ADDRESS).unwrap();
        let mut dashboard = Dashboard::new(profile.clone());

        dashboard.tabs.select(Tab::Tokens);
        dashboard.wheel.select(Zodiac::Leo);
        dashboard.spread.toggle(1);
        dashboard.orbit.select("UNI");

        assert_eq!(dashboard.profile(), &profile);
        assert_eq!(dashboard.profile().wheel_sign, Zodiac::Taurus);
    }
}
