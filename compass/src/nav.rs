//! Navigation links and the section highlighter.
//!
//! The browser reports which tracked sections cross the viewport midline.
//! [`resolve_current_section`] turns one batch of those reports into the
//! section that should own the active nav link. Links never carry their
//! own active flag; [`NavEntry::is_active`] derives it from the current
//! section held in the view state.

use serde::Serialize;

/// A navigation link pointing at a page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: &'static str,
    pub section_id: &'static str,
}

impl NavEntry {
    pub const fn new(label: &'static str, section_id: &'static str) -> Self {
        Self { label, section_id }
    }

    /// Fragment link, e.g. `#overview`.
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }

    pub fn is_active(&self, current_section: Option<&str>) -> bool {
        current_section == Some(self.section_id)
    }

    pub fn class(&self, current_section: Option<&str>) -> &'static str {
        if self.is_active(current_section) {
            "nav-link active"
        } else {
            "nav-link"
        }
    }
}

/// One observer entry reduced to what the resolver needs.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionIntersection {
    /// Id attribute of the observed section
    pub id: String,
    /// Whether the section currently crosses the trigger band
    pub is_intersecting: bool,
    /// Top edge of the section's bounding rect, in viewport pixels
    pub top: f64,
}

impl SectionIntersection {
    pub fn new(id: impl Into<String>, is_intersecting: bool, top: f64) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
            top,
        }
    }
}

/// Pick the section that owns the midline after one observer callback.
///
/// Only intersecting entries count. When several intersect at once the
/// topmost one wins; equal tops keep callback order. `None` means the
/// batch carried no intersecting entry and the current section stays.
pub fn resolve_current_section(entries: &[SectionIntersection]) -> Option<&str> {
    entries
        .iter()
        .filter(|entry| entry.is_intersecting)
        .fold(None::<&SectionIntersection>, |best, entry| match best {
            Some(b) if b.top <= entry.top => Some(b),
            _ => Some(entry),
        })
        .map(|entry| entry.id.as_str())
}

/// Number of links that would render active for `current_section`.
pub fn active_count(links: &[NavEntry], current_section: Option<&str>) -> usize {
    links
        .iter()
        .filter(|link| link.is_active(current_section))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NAV_LINKS;
    use pretty_assertions::assert_eq;

    #[test]
    fn href_is_fragment_of_section_id() {
        assert_eq!(NavEntry::new("Roadmap", "roadmap").href(), "#roadmap");
    }

    #[test]
    fn single_intersecting_entry_becomes_current() {
        let entries = vec![
            SectionIntersection::new("overview", false, -400.0),
            SectionIntersection::new("problem", true, 120.0),
        ];
        assert_eq!(resolve_current_section(&entries), Some("problem"));
    }

    #[test]
    fn no_intersecting_entry_keeps_current() {
        let entries = vec![SectionIntersection::new("overview", false, 10.0)];
        assert_eq!(resolve_current_section(&entries), None);
        assert_eq!(resolve_current_section(&[]), None);
    }

    #[test]
    fn topmost_intersecting_section_wins() {
        let entries = vec![
            SectionIntersection::new("solution", true, 80.0),
            SectionIntersection::new("problem", true, -200.0),
            SectionIntersection::new("roadmap", true, 300.0),
        ];
        assert_eq!(resolve_current_section(&entries), Some("problem"));
    }

    #[test]
    fn equal_tops_keep_callback_order() {
        let entries = vec![
            SectionIntersection::new("overview", true, 0.0),
            SectionIntersection::new("problem", true, 0.0),
        ];
        assert_eq!(resolve_current_section(&entries), Some("overview"));
    }

    #[test]
    fn at_most_one_link_active() {
        assert_eq!(active_count(&NAV_LINKS, None), 0);
        for link in NAV_LINKS.iter() {
            assert_eq!(active_count(&NAV_LINKS, Some(link.section_id)), 1);
        }
        // Sections without a nav link (e.g. the journey panel) light nothing up.
        assert_eq!(active_count(&NAV_LINKS, Some("journey")), 0);
    }

    #[test]
    fn class_reflects_active_state() {
        let link = NavEntry::new("Overview", "overview");
        assert_eq!(link.class(Some("overview")), "nav-link active");
        assert_eq!(link.class(Some("problem")), "nav-link");
    }
}
