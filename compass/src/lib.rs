//! # compass-page
//!
//! The Dezerv AI Compass pitch page: a single-page presentation built with
//! [Leptos](https://leptos.dev/).
//!
//! The crate holds everything that is not browser glue:
//!
//! - [`state`] - the page's view state (menu, journey tab, one-shot
//!   counter flag, current section)
//! - [`counter`] - the percentage count-up animation
//! - [`nav`] - navigation links and the section highlighter
//! - [`journey`] - the journey tabs
//! - [`chart`] - typed chart configuration and SVG geometry
//! - [`content`] - static copy and chart data
//! - [`components`] - Leptos components
//! - [`styles`] - CSS
//!
//! The `compass-landing` binary mounts [`components::Page`] in the browser
//! and drives its counters and observers. [`render_page`] (default `ssr`
//! feature) produces the same page as a static HTML document.
//!
//! ```rust
//! use compass_page::{render_page, ViewState};
//!
//! let html = render_page(&ViewState::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

pub mod chart;
pub mod components;
pub mod config;
pub mod content;
pub mod counter;
pub mod error;
pub mod journey;
pub mod nav;
pub mod state;
pub mod styles;

pub use config::CompassConfig;
pub use error::{CompassError, Result};
pub use journey::JourneyTab;
pub use state::ViewState;

#[cfg(feature = "ssr")]
use components::{CompassDocument, PageSignals};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete page as a static HTML document.
///
/// Reactive values are rendered with their initial state from `state`.
#[cfg(feature = "ssr")]
pub fn render_page(state: &ViewState) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        let signals = PageSignals::new(state.clone());
        view! { <CompassDocument signals=signals /> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::NAV_LINKS;

    #[test]
    fn renders_document_shell() {
        let html = render_page(&ViewState::default());
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("Dezerv AI Compass"));
    }

    #[test]
    fn renders_every_nav_section() {
        let html = render_page(&ViewState::default());
        for link in NAV_LINKS.iter() {
            assert!(html.contains(&format!("href=\"#{}\"", link.section_id)));
            assert!(html.contains(&format!("id=\"{}\"", link.section_id)));
        }
        assert!(html.contains("id=\"opportunity\""));
    }

    #[test]
    fn counters_start_at_zero_before_trigger() {
        let html = render_page(&ViewState::default());
        assert!(html.contains("data-counter=\"emotional-exits\""));
        assert!(html.contains("0%"));
        assert!(!html.contains("52%"));
    }

    #[test]
    fn counters_show_targets_once_animated() {
        let state = ViewState {
            counters_animated: true,
            ..Default::default()
        };
        let html = render_page(&state);
        assert!(html.contains("52%"));
        assert!(html.contains("64%"));
    }
}
