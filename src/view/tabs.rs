//! Dashboard tab navigation.

/// Top-level dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Overview,
    Tokens,
    Reading,
}

impl Tab {
    pub fn all() -> [Tab; 3] {
        [Tab::Overview, Tab::Tokens, Tab::Reading]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Tokens => "tokens",
            Tab::Reading => "reading",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Cosmic Overview",
            Tab::Tokens => "Token Orbits",
            Tab::Reading => "Your Reading",
        }
    }

    /// First word of the label, for narrow screens.
    pub fn short_label(&self) -> &'static str {
        self.label().split(' ').next().unwrap_or_default()
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tab::Overview => "✧",
            Tab::Tokens => "◎",
            Tab::Reading => "☽",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::all().into_iter().find(|tab| tab.id() == id)
    }
}

/// Which tab is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    active: Tab,
}

impl TabState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == tab
    }
}
