//! Leptos UI components for the compass page.
//!
//! # Component Hierarchy
//!
//! ```text
//! CompassDocument (static export only)
//! └── Page
//!     ├── Header (nav links, mobile drawer)
//!     ├── Hero, ExecutiveSummary, Overview
//!     ├── CustomerNeeds
//!     │   └── DoughnutChartView
//!     ├── Opportunity (stat counters)
//!     ├── Problem, Solution
//!     ├── Journey (tab switcher)
//!     ├── Prioritization
//!     │   └── BarChartView
//!     ├── Roadmap, SuccessMetrics, NextSteps
//!     └── Footer
//! ```
//!
//! The browser build mounts [`Page`] directly; [`crate::render_page`]
//! wraps it in [`CompassDocument`].

mod charts;
mod document;
mod footer;
mod header;
mod icons;
mod journey;
mod opportunity;
mod page;
mod sections;

pub use charts::{BarChartView, DoughnutChartView};
pub use document::CompassDocument;
pub use footer::Footer;
pub use header::Header;
pub use icons::*;
pub use journey::Journey;
pub use opportunity::{CounterDisplay, Opportunity};
pub use page::{Page, PageSignals};
pub use sections::{
    CustomerNeeds, ExecutiveSummary, Hero, NextSteps, Overview, Prioritization, Problem, Roadmap,
    SectionHead, Solution, SuccessMetrics,
};
