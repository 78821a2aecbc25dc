//! User journey panels shown behind the tab switcher.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompassError;

/// One of the fixed journey panels. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JourneyTab {
    #[default]
    Health,
    Investment,
    Nudge,
    Recap,
}

impl JourneyTab {
    pub const ALL: [JourneyTab; 4] = [
        JourneyTab::Health,
        JourneyTab::Investment,
        JourneyTab::Nudge,
        JourneyTab::Recap,
    ];

    pub fn id(self) -> &'static str {
        match self {
            JourneyTab::Health => "health",
            JourneyTab::Investment => "investment",
            JourneyTab::Nudge => "nudge",
            JourneyTab::Recap => "recap",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JourneyTab::Health => "Portfolio Health",
            JourneyTab::Investment => "Smart Investment",
            JourneyTab::Nudge => "Behavioral Nudge",
            JourneyTab::Recap => "Weekly Recap",
        }
    }

    pub fn panel_id(self) -> String {
        format!("journey-{}", self.id())
    }
}

impl fmt::Display for JourneyTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for JourneyTab {
    type Err = CompassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JourneyTab::ALL
            .into_iter()
            .find(|tab| tab.id() == s)
            .ok_or_else(|| CompassError::UnknownTab(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_from_str() {
        for tab in JourneyTab::ALL {
            assert_eq!(tab.id().parse::<JourneyTab>().unwrap(), tab);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = "portfolio".parse::<JourneyTab>().unwrap_err();
        assert!(matches!(err, CompassError::UnknownTab(ref id) if id == "portfolio"));
    }

    #[test]
    fn default_tab_is_health() {
        assert_eq!(JourneyTab::default(), JourneyTab::Health);
        assert_eq!(JourneyTab::Investment.panel_id(), "journey-investment");
    }
}
