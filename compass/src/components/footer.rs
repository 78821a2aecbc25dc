use leptos::prelude::*;

use crate::content::{DOCUMENT_URL, PROFILE_PHOTO, PROFILE_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <h2>"Final Words"</h2>
            <p>
                <strong>"Why this matters: "</strong>
                "Dezerv's clients don't want \"more data.\" They want \"better direction.\""
            </p>
            <p>
                "The AI Compass doesn't replace your advisor, it "
                <strong>"supercharges"</strong>
                " them."
            </p>
            <p>
                "It gives Dezerv the edge to "
                <strong>"lead the future of wealth management in India."</strong>
            </p>
            <div class="footer-profile">
                <img src=PROFILE_PHOTO alt="Author" />
                <a href=PROFILE_URL target="_blank" rel="noopener">"Profile"</a>
                <a href=DOCUMENT_URL target="_blank" rel="noopener">"Full proposal (PDF)"</a>
            </div>
        </footer>
    }
}
