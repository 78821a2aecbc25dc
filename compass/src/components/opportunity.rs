//! Opportunity section with the animated stat counters.

use leptos::prelude::*;

use super::SectionHead;
use crate::counter::{format_percent, CounterSpec};
use crate::content::STAT_CARDS;

/// A stat counter and the reactive value it currently displays.
#[derive(Clone, Copy, Debug)]
pub struct CounterDisplay {
    pub spec: CounterSpec,
    pub caption: &'static str,
    pub value: RwSignal<u32>,
}

impl CounterDisplay {
    /// One display per stat card, starting at 0 or at the target when the
    /// counters already ran.
    pub fn for_stat_cards(animated: bool) -> Vec<Self> {
        STAT_CARDS
            .iter()
            .map(|card| Self {
                spec: card.counter,
                caption: card.caption,
                value: RwSignal::new(if animated { card.counter.target } else { 0 }),
            })
            .collect()
    }
}

#[component]
pub fn Opportunity(counters: Vec<CounterDisplay>) -> impl IntoView {
    view! {
        <section id="opportunity" class="card-section">
            <SectionHead kicker="The Opportunity" title="Clients Are Ready for a Co-Pilot" />
            <div class="grid-3">
                {counters
                    .into_iter()
                    .map(|counter| {
                        view! {
                            <div class="stat">
                                <div
                                    class="stat-counter"
                                    data-counter=counter.spec.key
                                    data-target=counter.spec.target.to_string()
                                >
                                    {move || format_percent(counter.value.get())}
                                </div>
                                <p class="stat-caption">{counter.caption}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
