//! The whole presentation, header to footer.

use leptos::prelude::*;

use super::{
    CounterDisplay, CustomerNeeds, ExecutiveSummary, Footer, Header, Hero, Journey, NextSteps,
    Opportunity, Overview, Prioritization, Problem, Roadmap, Solution, SuccessMetrics,
};
use crate::state::ViewState;

/// Reactive handles owned by one page instance.
///
/// The browser build hands these to its observers and timers; the static
/// export only reads their initial values.
#[derive(Clone, Debug)]
pub struct PageSignals {
    pub state: RwSignal<ViewState>,
    pub counters: Vec<CounterDisplay>,
}

impl PageSignals {
    pub fn new(initial: ViewState) -> Self {
        let counters = CounterDisplay::for_stat_cards(initial.counters_animated);
        Self {
            state: RwSignal::new(initial),
            counters,
        }
    }
}

impl Default for PageSignals {
    fn default() -> Self {
        Self::new(ViewState::default())
    }
}

#[component]
pub fn Page(signals: PageSignals) -> impl IntoView {
    let PageSignals { state, counters } = signals;

    view! {
        <Header state=state />
        <main class="container">
            <Hero />
            <ExecutiveSummary />
            <Overview />
            <CustomerNeeds />
            <Opportunity counters=counters />
            <Problem />
            <Solution />
            <Journey state=state />
            <Prioritization />
            <Roadmap />
            <SuccessMetrics />
            <NextSteps />
        </main>
        <Footer />
    }
}
