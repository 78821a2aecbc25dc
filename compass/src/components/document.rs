//! Root document for the static export.

use leptos::prelude::*;

use super::{Page, PageSignals};
use crate::content::PAGE_TITLE;
use crate::styles::{COMPASS_CSS, CSP};

#[component]
pub fn CompassDocument(signals: PageSignals) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{PAGE_TITLE}</title>
                <style>{COMPASS_CSS}</style>
            </head>
            <body>
                <Page signals=signals />
            </body>
        </html>
    }
}
