//! Static render checks for the whole page.
#![cfg(feature = "ssr")]

use compass_page::content::NAV_LINKS;
use compass_page::nav::SectionIntersection;
use compass_page::{render_page, JourneyTab, ViewState};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn investment_tab_renders_only_investment_panel() {
    let mut state = ViewState::default();
    state.select_tab_id("investment").unwrap();
    let html = render_page(&state);

    assert!(html.contains("data-journey=\"investment\""));
    for tab in JourneyTab::ALL {
        if tab != JourneyTab::Investment {
            assert!(
                !html.contains(&format!("data-journey=\"{}\"", tab.id())),
                "panel {tab} should not be rendered"
            );
        }
    }
    assert!(html.contains("Idle cash finds a home"));
    assert!(!html.contains("Morning portfolio health check"));
}

#[test]
fn default_tab_is_health_panel() {
    let html = render_page(&ViewState::default());
    assert_eq!(count(&html, "data-journey="), 1);
    assert!(html.contains("data-journey=\"health\""));
}

#[test]
fn no_nav_link_active_before_first_intersection() {
    let html = render_page(&ViewState::default());
    assert_eq!(count(&html, "nav-link active"), 0);
    assert_eq!(count(&html, "class=\"nav-link\""), NAV_LINKS.len() * 2);
}

#[test]
fn current_section_marks_its_links_active() {
    let mut state = ViewState::default();
    state.apply_intersections(&[
        SectionIntersection::new("solution", true, 140.0),
        SectionIntersection::new("problem", true, -60.0),
    ]);
    let html = render_page(&state);

    // The link appears once in the desktop bar and once in the mobile drawer.
    assert_eq!(count(&html, "nav-link active"), 2);
    assert_eq!(count(&html, "class=\"nav-link\""), (NAV_LINKS.len() - 1) * 2);
}

#[test]
fn mobile_menu_class_follows_state() {
    let mut state = ViewState::default();
    assert!(!render_page(&state).contains("mobile-menu open"));
    state.toggle_mobile_menu();
    assert!(render_page(&state).contains("mobile-menu open"));
}

#[test]
fn both_charts_render_with_tooltips() {
    let html = render_page(&ViewState::default());
    assert_eq!(count(&html, "class=\"chart-segment\""), 2);
    assert_eq!(count(&html, "class=\"chart-bar\""), 5);
    assert!(html.contains("Want AI-Driven Insights: 78%"));
    assert!(html.contains("RICE Score: 85"));
}
