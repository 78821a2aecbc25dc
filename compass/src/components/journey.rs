//! User journey tab switcher.

use leptos::prelude::*;

use super::SectionHead;
use crate::content::journey_panel;
use crate::journey::JourneyTab;
use crate::state::ViewState;

#[component]
pub fn Journey(state: RwSignal<ViewState>) -> impl IntoView {
    let active = move || state.with(|s| s.active_tab);

    view! {
        <section id="journey">
            <SectionHead kicker="A Day with Compass" title="Illustrative User Journeys" />
            <div class="journey-tabs" role="tablist">
                {JourneyTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                role="tab"
                                id=format!("tab-{}", tab.id())
                                aria-controls=tab.panel_id()
                                aria-selected=move || (active() == tab).to_string()
                                class=move || if active() == tab { "journey-tab active" } else { "journey-tab" }
                                on:click=move |_| state.update(|s| s.select_tab(tab))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            // Only the selected panel is in the DOM.
            {move || {
                let panel = journey_panel(active());
                view! {
                    <div
                        class="journey-panel tile"
                        role="tabpanel"
                        id=panel.tab.panel_id()
                        data-journey=panel.tab.id()
                    >
                        <h3>{panel.title}</h3>
                        <ol>
                            {panel.steps.iter().map(|step| view! { <li>{*step}</li> }).collect::<Vec<_>>()}
                        </ol>
                        <p class="journey-outcome">{panel.outcome}</p>
                    </div>
                }
            }}
        </section>
    }
}
