//! Sticky header: brand, section links and the mobile drawer.

use leptos::prelude::*;

use super::{Icon, ICON_LIST, ICON_X};
use crate::content::{NAV_LINKS, PAGE_TITLE};
use crate::state::ViewState;

#[component]
pub fn Header(state: RwSignal<ViewState>) -> impl IntoView {
    let menu_open = move || state.with(|s| s.mobile_menu_open);

    view! {
        <header id="top" class="site-header">
            <nav class="container nav-inner">
                <a href="#top" class="nav-brand">{PAGE_TITLE}</a>
                <div class="nav-links">
                    <NavLinks state=state />
                </div>
                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| state.update(|s| s.toggle_mobile_menu())
                >
                    {move || {
                        if menu_open() {
                            view! { <Icon path=ICON_X size="24" /> }.into_any()
                        } else {
                            view! { <Icon path=ICON_LIST size="24" /> }.into_any()
                        }
                    }}
                </button>
            </nav>
            <div class=move || if menu_open() { "mobile-menu open" } else { "mobile-menu" }>
                <NavLinks state=state />
            </div>
        </header>
    }
}

/// Section links. The active one is derived from the current section.
#[component]
fn NavLinks(state: RwSignal<ViewState>) -> impl IntoView {
    NAV_LINKS
        .iter()
        .map(|link| {
            let link = *link;
            view! {
                <a
                    href=link.href()
                    class=move || state.with(|s| link.class(s.current_section.as_deref()))
                    on:click=move |_| state.update(|s| s.nav_clicked())
                >
                    {link.label}
                </a>
            }
        })
        .collect::<Vec<_>>()
}
