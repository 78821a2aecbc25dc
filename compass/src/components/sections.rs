//! Static content sections.

use leptos::prelude::*;

use super::{BarChartView, DoughnutChartView};
use crate::content::{
    demand_chart, rice_chart, EXECUTIVE_SUMMARY, INDUSTRY_SHIFTS, NEXT_STEPS, PAIN_POINTS,
    RICE_NOTES, ROADMAP, SOLUTIONS, SUCCESS_METRICS, USER_NEEDS, USER_SEGMENTS,
};

/// Kicker line plus section title.
#[component]
pub fn SectionHead(kicker: &'static str, title: &'static str) -> impl IntoView {
    view! {
        <div class="section-head">
            <h2 class="section-kicker">{kicker}</h2>
            <p class="section-title">{title}</p>
        </div>
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1>
                "Dezerv AI Compass - Your Intelligent "
                <span class="accent">"Financial Co-Pilot"</span>
            </h1>
            <p>
                "Transforming wealth management with proactive, AI-powered insights that help clients "
                "make smarter investment decisions and achieve better financial outcomes."
            </p>
        </section>
    }
}

#[component]
pub fn ExecutiveSummary() -> impl IntoView {
    view! {
        <section class="card-section summary">
            <h2 class="section-title">"Executive Summary"</h2>
            <div class="grid-3">
                {EXECUTIVE_SUMMARY
                    .iter()
                    .map(|(title, class, body)| {
                        view! {
                            <div class=format!("tile {class}")>
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn Overview() -> impl IntoView {
    view! {
        <section id="overview" class="card-section">
            <SectionHead kicker="1. Comprehend the Situation" title="What is Dezerv?" />
            <div class="grid-2">
                <div>
                    <h3>"About Dezerv"</h3>
                    <p>
                        "Dezerv is a modern wealth management platform in India that helps people invest in "
                        "PMS (portfolio management services), mutual funds, bonds, and private assets."
                    </p>
                    <p>
                        <strong>"The goal? "</strong>
                        "Help clients grow their wealth through data-driven advice and better returns."
                    </p>
                </div>
                <div>
                    <h3>"Industry Shift & Opportunity"</h3>
                    <ul>
                        {INDUSTRY_SHIFTS.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
                    </ul>
                    <p class="mission">
                        "Mission: be the go-to investment partner for affluent Indians using technology and data, not sales tactics."
                    </p>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CustomerNeeds() -> impl IntoView {
    view! {
        <section class="needs">
            <SectionHead kicker="2 & 3. Customer Identification & Needs" title="Understanding Our Users" />
            <div class="grid-2">
                <div class="tile">
                    <h3>"User Segments"</h3>
                    <ul>
                        {USER_SEGMENTS.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <div>
                    <h3>"Client Preferences"</h3>
                    <DoughnutChartView chart=demand_chart() />
                </div>
            </div>
            <div class="tile">
                <h3>"Key User Needs"</h3>
                <div class="table-scroll">
                    <table>
                        <thead>
                            <tr>
                                <th>"User Need"</th>
                                <th>"Why It Matters"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {USER_NEEDS
                                .iter()
                                .map(|(need, why)| {
                                    view! {
                                        <tr>
                                            <td class="strong">{*need}</td>
                                            <td>{*why}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </tbody>
                    </table>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Problem() -> impl IntoView {
    view! {
        <section id="problem" class="card-section">
            <SectionHead kicker="4. Cut (Prioritize) - Problem Framing" title="Top Pain Points" />
            <div class="grid-3">
                {PAIN_POINTS
                    .iter()
                    .map(|(title, tone, body)| {
                        view! {
                            <div class=format!("pain {tone}")>
                                <h4>{*title}</h4>
                                <p>{*body}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn Solution() -> impl IntoView {
    view! {
        <section id="solution">
            <SectionHead kicker="5. List Solutions" title="Proposed Solutions" />
            <div class="tile table-scroll">
                <table>
                    <thead>
                        <tr>
                            <th>"Goal"</th>
                            <th>"Pain Point"</th>
                            <th>"Proposed Solution"</th>
                            <th>"Example"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {SOLUTIONS
                            .iter()
                            .map(|(goal, pain, solution, example)| {
                                view! {
                                    <tr>
                                        <td class="strong">{*goal}</td>
                                        <td>{*pain}</td>
                                        <td>{*solution}</td>
                                        <td>{*example}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </section>
    }
}

#[component]
pub fn Prioritization() -> impl IntoView {
    view! {
        <section id="prioritization" class="card-section">
            <SectionHead kicker="6. Evaluate Trade-offs (RICE Framework)" title="Feature Prioritization" />
            <BarChartView chart=rice_chart() />
            <div class="grid-3 rice-notes">
                {RICE_NOTES
                    .iter()
                    .map(|(feature, verdict)| {
                        view! {
                            <div class="tile">
                                <h4>{*feature}</h4>
                                <p>{*verdict}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn Roadmap() -> impl IntoView {
    view! {
        <section id="roadmap">
            <SectionHead kicker="7. Final Recommendation & Roadmap" title="Launch MVP: Dezerv AI Compass" />
            <div class="timeline">
                {ROADMAP
                    .iter()
                    .map(|phase| {
                        view! {
                            <div class="phase-card">
                                <p class="phase-label">{phase.phase}</p>
                                <h4>{phase.title}</h4>
                                <ul>
                                    {phase.items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn SuccessMetrics() -> impl IntoView {
    view! {
        <section class="card-section">
            <SectionHead kicker="8. Success Metrics" title="Measuring Our Success" />
            <div class="grid-3">
                {SUCCESS_METRICS
                    .iter()
                    .map(|(group, metrics)| {
                        view! {
                            <div class="tile">
                                <h3>{*group}</h3>
                                <ul>
                                    {metrics.iter().map(|m| view! { <li>{*m}</li> }).collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn NextSteps() -> impl IntoView {
    view! {
        <section class="next-steps">
            <h2 class="section-title">"Next Steps (If I Were the PM)"</h2>
            <div class="grid-2">
                {NEXT_STEPS
                    .iter()
                    .map(|(step, detail)| {
                        view! {
                            <div class="tile">
                                <h4>{*step}</h4>
                                <p>{*detail}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
