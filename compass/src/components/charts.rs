//! Inline SVG chart components.
//!
//! Geometry comes from [`crate::chart`]; these components only turn it
//! into markup. A configuration that fails validation renders a short
//! notice instead of a broken figure.

use leptos::prelude::*;
use tracing::warn;

use crate::chart::{
    BarChart, DoughnutChart, Legend, LegendPosition, BAR_HEIGHT, BAR_WIDTH, DOUGHNUT_SIZE,
};

fn px(value: f64) -> String {
    format!("{value:.2}")
}

#[component]
pub fn DoughnutChartView(chart: DoughnutChart) -> impl IntoView {
    let segments = match chart.segments() {
        Ok(segments) => segments,
        Err(err) => {
            warn!(chart = %chart.title, error = %err, "doughnut chart not rendered");
            return view! { <ChartUnavailable title=chart.title /> }.into_any();
        }
    };
    let stroke = chart.series.border_color.clone().unwrap_or_else(|| "none".into());
    let stroke_width = px(chart.series.border_width);
    let legend_items: Vec<(String, String)> = segments
        .iter()
        .map(|s| (s.label.clone(), s.color.clone()))
        .collect();
    let view_box = format!("0 0 {DOUGHNUT_SIZE} {DOUGHNUT_SIZE}");

    let legend = chart.legend.clone();
    let figure = view! {
        <svg class="chart-svg" viewBox=view_box role="img" aria-label=chart.title.clone()>
            {segments
                .into_iter()
                .map(|segment| {
                    let tip = segment.tooltip.clone();
                    view! {
                        <path
                            class="chart-segment"
                            d=segment.path
                            fill=segment.color
                            stroke=stroke.clone()
                            stroke-width=stroke_width.clone()
                            data-tooltip=segment.tooltip
                        >
                            <title>{tip}</title>
                        </path>
                    }
                })
                .collect::<Vec<_>>()}
        </svg>
    };

    view! {
        <figure class="chart-container">
            {legend_at(&legend, LegendPosition::Top, &legend_items)}
            {figure}
            {legend_at(&legend, LegendPosition::Bottom, &legend_items)}
        </figure>
    }
    .into_any()
}

#[component]
pub fn BarChartView(chart: BarChart) -> impl IntoView {
    let bars = match chart.bars() {
        Ok(bars) => bars,
        Err(err) => {
            warn!(chart = %chart.title, error = %err, "bar chart not rendered");
            return view! { <ChartUnavailable title=chart.title /> }.into_any();
        }
    };
    let ticks = chart.y_ticks();
    let left = chart.plot_left();
    let right = chart.plot_right();
    let baseline = chart.baseline();
    let radius = px(chart.series.border_radius);
    let y_axis = chart.y_axis.clone();
    let x_axis = chart.x_axis.clone();
    let view_box = format!("0 0 {BAR_WIDTH} {BAR_HEIGHT}");
    let legend_items: Vec<(String, String)> = vec![(
        chart.series.label.clone(),
        chart.series.color_at(0).to_string(),
    )];

    let legend = chart.legend.clone();
    let figure = view! {
        <svg class="chart-svg" viewBox=view_box role="img" aria-label=chart.title.clone()>
            // Horizontal grid and y labels
            {ticks
                .into_iter()
                .map(|tick| {
                    let grid = y_axis.grid_color.clone().map(|color| {
                        view! {
                            <line
                                x1=px(left)
                                x2=px(right)
                                y1=px(tick.y)
                                y2=px(tick.y)
                                stroke=color
                                stroke-width="1"
                            />
                        }
                    });
                    view! {
                        {grid}
                        <text
                            x=px(left - 6.0)
                            y=px(tick.y)
                            text-anchor="end"
                            dominant-baseline="middle"
                            fill=y_axis.tick_color.clone()
                            font-size=y_axis.font_size.to_string()
                        >
                            {tick.value.to_string()}
                        </text>
                    }
                })
                .collect::<Vec<_>>()}
            {bars
                .into_iter()
                .map(|bar| {
                    let center = bar.x + bar.width / 2.0;
                    let tip = bar.tooltip.clone();
                    view! {
                        <rect
                            class="chart-bar"
                            x=px(bar.x)
                            y=px(bar.y)
                            width=px(bar.width)
                            height=px(bar.height)
                            rx=radius.clone()
                            fill=bar.color
                            data-tooltip=bar.tooltip
                        >
                            <title>{tip}</title>
                        </rect>
                        <text
                            x=px(center)
                            y=px(baseline + 20.0)
                            text-anchor="middle"
                            fill=x_axis.tick_color.clone()
                            font-size=x_axis.font_size.to_string()
                        >
                            {bar.label}
                        </text>
                    }
                })
                .collect::<Vec<_>>()}
        </svg>
    };

    view! {
        <figure class="rice-chart-container">
            {legend_at(&legend, LegendPosition::Top, &legend_items)}
            {figure}
            {legend_at(&legend, LegendPosition::Bottom, &legend_items)}
        </figure>
    }
    .into_any()
}

/// The legend, if it is shown and belongs at `slot`.
fn legend_at(
    legend: &Legend,
    slot: LegendPosition,
    items: &[(String, String)],
) -> Option<AnyView> {
    (legend.display && legend.position == slot)
        .then(|| view! { <ChartLegend legend=legend.clone() items=items.to_vec() /> }.into_any())
}

#[component]
fn ChartLegend(legend: Legend, items: Vec<(String, String)>) -> impl IntoView {
    if !legend.display {
        return view! {}.into_any();
    }
    let style = format!("color:{};font-size:{}px", legend.color, legend.font_size);
    view! {
        <ul class="chart-legend" style=style>
            {items
                .into_iter()
                .map(|(label, color)| {
                    view! {
                        <li>
                            <span class="legend-swatch" style=format!("background:{color}")></span>
                            {label}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}

#[component]
fn ChartUnavailable(title: String) -> impl IntoView {
    view! {
        <figure class="chart-container chart-unavailable">
            <figcaption>{format!("{title}: chart unavailable")}</figcaption>
        </figure>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::{demand_chart, rice_chart};
    use leptos::tachys::view::RenderHtml;

    fn render(view: impl FnOnce() -> AnyView) -> String {
        Owner::new().with(|| view().to_html())
    }

    fn shown(position: LegendPosition) -> Legend {
        Legend {
            display: true,
            position,
            ..Legend::default()
        }
    }

    #[test]
    fn tooltip_is_both_title_and_data_attribute() {
        let html = render(|| view! { <DoughnutChartView chart=demand_chart() /> }.into_any());
        assert!(html.contains("data-tooltip=\"Want AI-Driven Insights: 78%\""));
        assert!(html.contains("<title>Want AI-Driven Insights: 78%</title>"));

        let html = render(|| view! { <BarChartView chart=rice_chart() /> }.into_any());
        assert!(html.contains("data-tooltip=\"RICE Score: 85\""));
        assert!(html.contains("<title>RICE Score: 85</title>"));
    }

    #[test]
    fn bar_legend_follows_position() {
        let mut chart = rice_chart();
        chart.legend = shown(LegendPosition::Top);
        let top = render(|| view! { <BarChartView chart=chart /> }.into_any());
        let legend = top.find("chart-legend").unwrap();
        assert!(legend < top.find("<svg").unwrap());

        let mut chart = rice_chart();
        chart.legend = shown(LegendPosition::Bottom);
        let bottom = render(|| view! { <BarChartView chart=chart /> }.into_any());
        let legend = bottom.find("chart-legend").unwrap();
        assert!(legend > bottom.find("</svg>").unwrap());
    }

    #[test]
    fn doughnut_legend_follows_position() {
        let mut chart = demand_chart();
        chart.legend = shown(LegendPosition::Top);
        let top = render(|| view! { <DoughnutChartView chart=chart /> }.into_any());
        assert!(top.find("chart-legend").unwrap() < top.find("<svg").unwrap());
    }

    #[test]
    fn hidden_legend_renders_nothing() {
        let html = render(|| view! { <BarChartView chart=rice_chart() /> }.into_any());
        assert!(!html.contains("chart-legend"));
    }
}
