//! Viewport observers with scoped lifetime.
//!
//! An [`ObserverGuard`] owns both the `IntersectionObserver` and the Rust
//! closure it calls. Dropping the guard disconnects the observer first, so
//! the browser never invokes a freed closure.

use compass_page::nav::SectionIntersection;
use compass_page::CompassConfig;
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{LandingError, Result};

/// Browsers report the crossing entry with a ratio a hair under the threshold.
const RATIO_TOLERANCE: f64 = 0.01;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

pub struct ObserverGuard {
    name: &'static str,
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl ObserverGuard {
    fn new<F>(name: &'static str, options: &IntersectionObserverInit, mut on_entries: F) -> Result<Self>
    where
        F: FnMut(Vec<IntersectionObserverEntry>) + 'static,
    {
        let callback: EntriesCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let entries = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .collect();
                on_entries(entries);
            },
        ) as Box<dyn FnMut(_, _)>);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
                .map_err(|err| LandingError::js(name, err))?;

        Ok(Self {
            name,
            observer,
            _callback: callback,
        })
    }

    fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
        debug!(observer = self.name, "observer disconnected");
    }
}

/// Call `on_enter` whenever the trigger section becomes sufficiently visible.
///
/// Returns `None` when the page has no such section. The one-shot decision
/// belongs to the caller.
pub fn watch_trigger_section<F>(
    document: &Document,
    config: &CompassConfig,
    mut on_enter: F,
) -> Result<Option<ObserverGuard>>
where
    F: FnMut() + 'static,
{
    let Some(section) = document.get_element_by_id(&config.trigger_section) else {
        return Ok(None);
    };

    let threshold = config.trigger_threshold;
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    let guard = ObserverGuard::new("counter trigger", &options, move |entries| {
        let entered = entries
            .iter()
            .any(|entry| entry.is_intersecting() && entry.intersection_ratio() + RATIO_TOLERANCE >= threshold);
        if entered {
            on_enter();
        }
    })?;
    guard.observe(&section);
    Ok(Some(guard))
}

/// Report midline crossings of every `section[id]` on the page.
pub fn watch_sections<F>(
    document: &Document,
    config: &CompassConfig,
    mut on_entries: F,
) -> Result<ObserverGuard>
where
    F: FnMut(Vec<SectionIntersection>) + 'static,
{
    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.nav_root_margin);

    let guard = ObserverGuard::new("section highlighter", &options, move |entries| {
        let batch = entries
            .iter()
            .map(|entry| {
                SectionIntersection::new(
                    entry.target().id(),
                    entry.is_intersecting(),
                    entry.bounding_client_rect().top(),
                )
            })
            .collect();
        on_entries(batch);
    })?;

    let sections = document
        .query_selector_all("section[id]")
        .map_err(|err| LandingError::js("query sections", err))?;
    for idx in 0..sections.length() {
        if let Some(element) = sections.get(idx).and_then(|node| node.dyn_into::<Element>().ok()) {
            guard.observe(&element);
        }
    }
    Ok(guard)
}
