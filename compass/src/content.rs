//! Static page content.
//!
//! Copy, table rows and chart data for the presentation. Components read
//! from here; nothing in this module changes at runtime.

use crate::chart::{Axis, BarChart, DoughnutChart, Legend, LegendPosition, Series, TooltipFormat};
use crate::counter::CounterSpec;
use crate::journey::JourneyTab;
use crate::nav::NavEntry;

pub const PAGE_TITLE: &str = "Dezerv AI Compass";

/// Links shown in the header, desktop and mobile alike.
pub const NAV_LINKS: [NavEntry; 5] = [
    NavEntry::new("Overview", "overview"),
    NavEntry::new("The Problem", "problem"),
    NavEntry::new("Solution", "solution"),
    NavEntry::new("Prioritization", "prioritization"),
    NavEntry::new("Roadmap", "roadmap"),
];

/// A headline figure in the opportunity section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub counter: CounterSpec,
    pub caption: &'static str,
}

pub const STAT_CARDS: [StatCard; 3] = [
    StatCard {
        counter: CounterSpec {
            key: "ai-preference",
            target: 78,
        },
        caption: "of affluent clients want AI-driven portfolio insights",
    },
    StatCard {
        counter: CounterSpec {
            key: "emotional-exits",
            target: 52,
        },
        caption: "of investors exited equity during the last correction",
    },
    StatCard {
        counter: CounterSpec {
            key: "advice-lag",
            target: 64,
        },
        caption: "say their advisor reacts too late to life events",
    },
];

/// Copy behind one journey tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JourneyPanel {
    pub tab: JourneyTab,
    pub title: &'static str,
    pub steps: &'static [&'static str],
    pub outcome: &'static str,
}

pub fn journey_panel(tab: JourneyTab) -> JourneyPanel {
    match tab {
        JourneyTab::Health => JourneyPanel {
            tab,
            title: "Morning portfolio health check",
            steps: &[
                "Compass scans overnight moves across PMS, mutual funds and bonds",
                "Flags drift: mid-cap equity is 6% under the goal allocation",
                "Explains the gap in one paragraph with a rebalance preview",
            ],
            outcome: "Client rebalances in two taps instead of waiting for the quarterly review.",
        },
        JourneyTab::Investment => JourneyPanel {
            tab,
            title: "Idle cash finds a home",
            steps: &[
                "Compass notices ₹12L sitting in savings for 45 days",
                "Matches it to the short-duration bond fund at 7.8%",
                "Shows tax impact and liquidity before the client commits",
            ],
            outcome: "Timely product recommendation lifts AUM without a sales call.",
        },
        JourneyTab::Nudge => JourneyPanel {
            tab,
            title: "Staying invested through a correction",
            steps: &[
                "Market falls 8% in a week and the client opens the redeem screen",
                "Compass shows how peers who stayed invested fared over 3 years",
                "Offers a call with the advisor before confirming the exit",
            ],
            outcome: "Fewer panic exits and better long-term returns.",
        },
        JourneyTab::Recap => JourneyPanel {
            tab,
            title: "Sunday recap in plain English",
            steps: &[
                "What moved the portfolio this week and why",
                "Two bite-sized news items relevant to current holdings",
                "One suggested action, or none if nothing needs doing",
            ],
            outcome: "Clients understand their money without reading a PDF.",
        },
    }
}

pub const EXECUTIVE_SUMMARY: [(&str, &str, &str); 3] = [
    (
        "Problem",
        "summary-problem",
        "Dezerv's affluent clients face information overload, behavioral biases, and delayed, generic advice despite its strong data-driven foundation.",
    ),
    (
        "Solution",
        "summary-solution",
        "Launch Dezerv AI Compass, an AI-powered feature offering contextual insights, behavioral nudges, and hyper-personalized financial guidance in real time.",
    ),
    (
        "Outcome",
        "summary-outcome",
        "Increased engagement, higher client retention, improved AUM growth, and enhanced brand differentiation in India's wealth-tech space.",
    ),
];

pub const INDUSTRY_SHIFTS: [&str; 3] = [
    "Rise of AI robo-advisors (e.g., INDmoney, Zerodha's Nudge layer)",
    "Clients now expect personalized, real-time guidance, not quarterly PDFs",
    "Opportunity: create a proactive, AI-driven co-pilot that strengthens personalization",
];

pub const USER_SEGMENTS: [&str; 3] = [
    "Affluent, digitally-savvy investors (core Dezerv customers)",
    "First-time, high-income professionals needing education and guidance",
    "Existing clients expecting more from their advisors due to rising market volatility",
];

/// (need, why it matters)
pub const USER_NEEDS: [(&str, &str); 5] = [
    ("Proactive, real-time guidance", "Markets change fast; clients need insights now."),
    ("Behavioral nudges", "Even smart investors act emotionally."),
    ("Simpler understanding", "Reports are not clarity. Clients want explanations, not just data."),
    ("Personalization", "One-size-fits-all advice creates churn."),
    ("Light, bite-sized learning", "Many don't want long whitepapers or full webinars."),
];

/// (title, tone class, description)
pub const PAIN_POINTS: [(&str, &str, &str); 3] = [
    (
        "Information Overload",
        "pain-red",
        "Users receive too much unstructured data and struggle to extract actionable insights.",
    ),
    (
        "Emotional Decision-Making",
        "pain-orange",
        "Behavioral biases hurt long-term results and lead to poor investment timing.",
    ),
    (
        "Delayed Advice",
        "pain-yellow",
        "Life changes quickly; advisor recommendations don't always keep up with client needs.",
    ),
];

/// (goal, pain point, proposed solution, example)
pub const SOLUTIONS: [(&str, &str, &str, &str); 4] = [
    (
        "Engagement",
        "Info overload",
        "Proactive, contextual insights",
        "\"Your portfolio is underweight in mid-cap equity based on current goals. Here's why.\"",
    ),
    (
        "Retention",
        "Behavioral bias",
        "Behavioral nudges",
        "\"Clients who stayed invested during corrections gained 11% more over 3 yrs.\"",
    ),
    (
        "Revenue Growth",
        "Delayed advice",
        "Timely product recommendations",
        "\"Your idle cash can earn 7.8% in our new short-duration bond fund.\"",
    ),
    (
        "User Education",
        "Low clarity",
        "Weekly summaries, bite-sized news",
        "\"Here's what moved your portfolio this week in plain English.\"",
    ),
];

/// (feature, verdict)
pub const RICE_NOTES: [(&str, &str); 5] = [
    ("Proactive Insights", "High reach, high impact - top priority"),
    ("Bite-sized News", "High confidence, low effort - quick win"),
    ("Behavioral Nudges", "Medium-high priority"),
    ("Weekly Recap", "Medium priority"),
    ("AI Chatbot", "Lower priority due to high effort"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoadmapPhase {
    pub phase: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const ROADMAP: [RoadmapPhase; 2] = [
    RoadmapPhase {
        phase: "Phase 1: Quick Wins (3-6 months)",
        title: "Foundation & Basic Features",
        items: &[
            "Rule-based contextual alerts (e.g., fund manager change, high AUM churn)",
            "Weekly summaries with market insights and portfolio health",
            "Basic nudges (e.g., \"Consider rebalancing now due to X.\")",
        ],
    },
    RoadmapPhase {
        phase: "Phase 2: Long-term (6-18 months)",
        title: "Advanced AI Features",
        items: &[
            "LLM-powered assistant for conversational insights",
            "Predictive analytics for financial planning needs",
            "Real-time product matching and nudged product flows",
        ],
    },
];

/// (group, metrics)
pub const SUCCESS_METRICS: [(&str, &[&str]); 3] = [
    ("Engagement", &["DAU/WAU of AI Compass", "Time spent", "CTR on AI alerts"]),
    (
        "Retention",
        &["Churn rate delta (users with vs. without Compass)", "Net Promoter Score (NPS)"],
    ),
    (
        "Revenue & Efficiency",
        &[
            "AUM uplift (AI-influenced)",
            "Product adoption (via AI nudges)",
            "Fewer manual advisor touchpoints",
        ],
    ),
];

/// (step, detail)
pub const NEXT_STEPS: [(&str, &str); 4] = [
    ("User Interviews", "Validate assumptions on what insights clients want and how they want them."),
    ("Data Audit", "Ensure portfolio and user behavior data is structured and ML-ready."),
    ("UX Mockups", "Test early prototypes with existing clients."),
    ("Build v0 & Launch", "Prioritize insights that can run on existing infra. Monitor metrics weekly."),
];

/// Outbound links and assets shown in the footer.
pub const PROFILE_PHOTO: &str = "assets/profile.jpg";
pub const PROFILE_URL: &str = "https://www.linkedin.com/";
pub const DOCUMENT_URL: &str = "assets/dezerv-ai-compass.pdf";

pub fn demand_chart() -> DoughnutChart {
    DoughnutChart {
        title: "Client Preferences".into(),
        labels: vec!["Want AI-Driven Insights".into(), "Traditional Approach".into()],
        series: Series {
            label: "Client Preferences".into(),
            data: vec![78.0, 22.0],
            colors: vec!["#10B981".into(), "#E5E7EB".into()],
            border_color: Some("#FFFFFF".into()),
            border_width: 2.0,
            border_radius: 0.0,
        },
        cutout_percent: 70.0,
        legend: Legend {
            display: true,
            position: LegendPosition::Bottom,
            color: "#4B5563".into(),
            font_size: 14,
        },
        tooltip: TooltipFormat::LabelPercent,
    }
}

pub fn rice_chart() -> BarChart {
    BarChart {
        title: "RICE Prioritization".into(),
        labels: vec![
            "Proactive Insights".into(),
            "Behavioral Nudges".into(),
            "Bite-sized News".into(),
            "Weekly Recap".into(),
            "AI Chatbot".into(),
        ],
        series: Series {
            label: "RICE Score".into(),
            data: vec![85.0, 70.0, 80.0, 65.0, 45.0],
            colors: vec![
                "#10B981".into(),
                "#059669".into(),
                "#047857".into(),
                "#065F46".into(),
                "#064E3B".into(),
            ],
            border_color: None,
            border_width: 0.0,
            border_radius: 4.0,
        },
        y_axis: Axis {
            begin_at_zero: true,
            max: Some(100.0),
            ..Axis::default()
        },
        x_axis: Axis {
            grid_color: None,
            ..Axis::default()
        },
        legend: Legend::hidden(),
        tooltip: TooltipFormat::Prefixed("RICE Score".into()),
    }
}
