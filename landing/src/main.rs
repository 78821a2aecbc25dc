// Dezerv AI Compass - Leptos 0.8 browser build
//
// Mounts the page, reads the optional host config and wires the two
// viewport observers and the counter timers to the page state.

mod counters;
mod error;
mod logging;
mod observer;

use compass_page::components::{Page, PageSignals};
use compass_page::styles::COMPASS_CSS;
use compass_page::CompassConfig;
use counters::CounterTimers;
use error::{LandingError, Result};
use leptos::prelude::*;
use observer::{watch_sections, watch_trigger_section, ObserverGuard};
use tracing::{info, warn};

const CONFIG_ELEMENT_ID: &str = "compass-config";

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    leptos::mount::mount_to_body(App);
}

#[component]
fn App() -> impl IntoView {
    let config = read_config();
    let signals = PageSignals::default();

    // Both are released with the component, whatever state the animation is in.
    let observers = StoredValue::new_local(Vec::<ObserverGuard>::new());
    let timers = StoredValue::new_local(CounterTimers::default());
    on_cleanup(move || {
        observers.dispose();
        timers.dispose();
    });

    let wiring = signals.clone();
    Effect::new(move || {
        if let Err(err) = attach_observers(&wiring, &config, observers, timers) {
            warn!(error = %err, "viewport observers unavailable");
        }
    });

    view! {
        <style>{COMPASS_CSS}</style>
        <Page signals=signals />
    }
}

fn attach_observers(
    signals: &PageSignals,
    config: &CompassConfig,
    observers: StoredValue<Vec<ObserverGuard>, LocalStorage>,
    timers: StoredValue<CounterTimers, LocalStorage>,
) -> Result<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(LandingError::NoDocument)?;
    let state = signals.state;

    let counters = signals.counters.clone();
    let duration = config.counter_duration();
    let trigger = watch_trigger_section(&document, config, move || {
        if state.try_update(|s| s.trigger_counters()) != Some(true) {
            return;
        }
        let started = timers.try_with_value(|t| {
            t.start_all(&counters, duration).map(|()| t.len())
        });
        match started {
            Some(Ok(running)) => info!(timers = running, "stat counters started"),
            Some(Err(err)) => warn!(error = %err, "stat counters failed to start"),
            None => {}
        }
    })?;
    match trigger {
        Some(guard) => observers.update_value(|list| list.push(guard)),
        None => warn!(section = %config.trigger_section, "trigger section missing, counters stay at 0%"),
    }

    let highlighter = watch_sections(&document, config, move |batch| {
        state.maybe_update(|s| s.apply_intersections(&batch));
    })?;
    observers.update_value(|list| list.push(highlighter));

    info!("viewport observers attached");
    Ok(())
}

/// Config from `<script type="application/json" id="compass-config">`, or
/// the defaults when it is missing or invalid.
fn read_config() -> CompassConfig {
    match load_config() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "ignoring #{CONFIG_ELEMENT_ID}");
            CompassConfig::default()
        }
    }
}

fn load_config() -> Result<CompassConfig> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(LandingError::NoDocument)?;
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content());
    match raw {
        Some(raw) if !raw.trim().is_empty() => Ok(CompassConfig::from_json(&raw)?),
        _ => Ok(CompassConfig::default()),
    }
}
