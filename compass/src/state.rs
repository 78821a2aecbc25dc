//! Page view state.
//!
//! A single [`ViewState`] per page instance owns every mutable UI value.
//! User interaction and observer callbacks go through its methods; the
//! components only read from it.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;
use crate::journey::JourneyTab;
use crate::nav::{resolve_current_section, SectionIntersection};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    /// Whether the mobile navigation drawer is expanded
    pub mobile_menu_open: bool,
    /// Journey panel currently shown
    pub active_tab: JourneyTab,
    /// One-shot flag: the stat counters already started
    pub counters_animated: bool,
    /// Section owning the viewport midline, drives the active nav link
    pub current_section: Option<String>,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
        debug!(open = self.mobile_menu_open, "mobile menu toggled");
    }

    /// A nav link was followed; the drawer closes.
    pub fn nav_clicked(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn select_tab(&mut self, tab: JourneyTab) {
        if self.active_tab != tab {
            debug!(from = %self.active_tab, to = %tab, "journey tab selected");
        }
        self.active_tab = tab;
    }

    /// Select a tab by its string id. Unknown ids leave the state untouched.
    pub fn select_tab_id(&mut self, id: &str) -> Result<()> {
        match id.parse::<JourneyTab>() {
            Ok(tab) => {
                self.select_tab(tab);
                Ok(())
            }
            Err(err) => {
                warn!(id, "ignoring unknown journey tab");
                Err(err)
            }
        }
    }

    pub fn is_tab_visible(&self, tab: JourneyTab) -> bool {
        self.active_tab == tab
    }

    /// Trigger section entered the viewport.
    ///
    /// Returns `true` exactly once per page lifetime: the caller starts the
    /// counters only when this says so.
    pub fn trigger_counters(&mut self) -> bool {
        if self.counters_animated {
            return false;
        }
        self.counters_animated = true;
        debug!("stat counters triggered");
        true
    }

    /// Apply one navigation observer callback. Returns `true` if the
    /// current section changed.
    pub fn apply_intersections(&mut self, entries: &[SectionIntersection]) -> bool {
        let Some(id) = resolve_current_section(entries) else {
            return false;
        };
        if self.current_section.as_deref() == Some(id) {
            return false;
        }
        debug!(section = id, "current section changed");
        self.current_section = Some(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompassError;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_on_mount() {
        let state = ViewState::new();
        assert!(!state.mobile_menu_open);
        assert_eq!(state.active_tab, JourneyTab::Health);
        assert!(!state.counters_animated);
        assert_eq!(state.current_section, None);
    }

    #[test]
    fn menu_toggles_and_nav_click_closes() {
        let mut state = ViewState::new();
        state.toggle_mobile_menu();
        assert!(state.mobile_menu_open);
        state.nav_clicked();
        assert!(!state.mobile_menu_open);
        state.nav_clicked();
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn selecting_investment_shows_only_investment() {
        let mut state = ViewState::new();
        state.select_tab_id("investment").unwrap();
        let visible: Vec<_> = JourneyTab::ALL
            .into_iter()
            .filter(|tab| state.is_tab_visible(*tab))
            .collect();
        assert_eq!(visible, vec![JourneyTab::Investment]);
    }

    #[test]
    fn unknown_tab_keeps_selection() {
        let mut state = ViewState::new();
        state.select_tab(JourneyTab::Recap);
        let err = state.select_tab_id("pricing").unwrap_err();
        assert!(matches!(err, CompassError::UnknownTab(_)));
        assert_eq!(state.active_tab, JourneyTab::Recap);
    }

    #[test]
    fn counters_trigger_only_once() {
        let mut state = ViewState::new();
        assert!(state.trigger_counters());
        assert!(!state.trigger_counters());
        assert!(!state.trigger_counters());
        assert!(state.counters_animated);
    }

    #[test]
    fn intersections_update_current_section() {
        let mut state = ViewState::new();
        assert!(state.apply_intersections(&[SectionIntersection::new("overview", true, 0.0)]));
        assert_eq!(state.current_section.as_deref(), Some("overview"));

        // Same section again is not a change.
        assert!(!state.apply_intersections(&[SectionIntersection::new("overview", true, 0.0)]));

        // Leaving without a new section keeps the last one.
        assert!(!state.apply_intersections(&[SectionIntersection::new("overview", false, -900.0)]));
        assert_eq!(state.current_section.as_deref(), Some("overview"));
    }
}
