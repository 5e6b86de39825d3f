//! Dashboard preview tab selection

use serde::Serialize;

/// Panel shown by the dashboard preview. Exactly one is active at a time.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Overview,
    Signals,
    Performance,
}

impl DashboardTab {
    /// Tab strip order
    pub const ALL: [DashboardTab; 3] = [
        DashboardTab::Overview,
        DashboardTab::Signals,
        DashboardTab::Performance,
    ];

    /// Stable identifier, also used for element ids
    pub fn id(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Signals => "signals",
            DashboardTab::Performance => "performance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Overview",
            DashboardTab::Signals => "Signals",
            DashboardTab::Performance => "Performance",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

impl std::fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_overview() {
        assert_eq!(DashboardTab::default(), DashboardTab::Overview);
    }

    #[test]
    fn test_id_round_trip() {
        for tab in DashboardTab::ALL {
            assert_eq!(DashboardTab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(DashboardTab::from_id("Overview"), None);
        assert_eq!(DashboardTab::from_id(""), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(DashboardTab::Performance.to_string(), "Performance");
    }

    #[test]
    fn test_serde_names_match_ids() {
        for tab in DashboardTab::ALL {
            let json = serde_json::to_string(&tab).unwrap();
            assert_eq!(json, format!("\"{}\"", tab.id()));
        }
    }
}
