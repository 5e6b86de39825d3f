//! Inline SVG charts over the sample series

use leptos::prelude::*;

use crate::core::ChartPoint;
use crate::core::chart::{ChartFrame, series_max, y_ticks};

const FRAME: ChartFrame = ChartFrame::new(600.0, 200.0, 20.0);
const AXIS_FRAME: ChartFrame = ChartFrame::new(600.0, 220.0, 36.0);
const Y_SEGMENTS: usize = 4;
const GRID_STROKE: &str = "#ffffff10";
const AXIS_STROKE: &str = "#ffffff40";

fn tooltip(point: &ChartPoint) -> String {
    format!(
        "{}: {} (confidence {}%)",
        point.time, point.value, point.confidence
    )
}

/// Dashed horizontal rules at each value tick, labelled on the left, with
/// solid axis lines along the left edge and the baseline
fn value_grid(frame: ChartFrame, max: f64) -> impl IntoView {
    let rules = y_ticks(max, Y_SEGMENTS)
        .into_iter()
        .map(|tick| {
            let y = frame.y_at(tick, max);
            view! {
                <line
                    x1=frame.padding
                    x2=frame.width - frame.padding
                    y1=y
                    y2=y
                    stroke=GRID_STROKE
                    stroke-dasharray="3 3"
                />
                <text
                    x=frame.padding - 6.0
                    y=y + 4.0
                    text-anchor="end"
                    font-size="10"
                    fill=AXIS_STROKE
                >
                    {format!("{:.0}", tick)}
                </text>
            }
        })
        .collect_view();

    view! {
        {rules}
        <line
            x1=frame.padding
            x2=frame.padding
            y1=frame.padding
            y2=frame.baseline()
            stroke=AXIS_STROKE
        />
        <line
            x1=frame.padding
            x2=frame.width - frame.padding
            y1=frame.baseline()
            y2=frame.baseline()
            stroke=AXIS_STROKE
        />
    }
}

#[component]
fn TimeLabel(frame: ChartFrame, x: f64, time: &'static str) -> impl IntoView {
    view! {
        <text
            x=x
            y=frame.baseline() + 16.0
            text-anchor="middle"
            font-size="10"
            fill=AXIS_STROKE
        >
            {time}
        </text>
    }
}

/// Gradient-filled area chart of `value` over `time`
#[component]
pub fn AreaChart(
    points: &'static [ChartPoint],
    /// Stroke and gradient color
    color: &'static str,
    /// Must be unique within the page
    gradient_id: &'static str,
    /// Draw grid lines with value and time labels
    #[prop(optional)]
    axes: bool,
    #[prop(default = "w-full h-64")]
    class: &'static str,
) -> impl IntoView {
    let frame = if axes { AXIS_FRAME } else { FRAME };
    let paths = frame.area_paths(points);
    let max = series_max(points);
    let count = points.len();
    let fill = format!("url(#{})", gradient_id);

    let grid = axes.then(|| {
        let labels = points
            .iter()
            .enumerate()
            .map(|(i, p)| view! { <TimeLabel x=frame.x_at(i, count) frame=frame time=p.time /> })
            .collect_view();

        view! { {value_grid(frame, max)} {labels} }
    });

    let markers = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            view! {
                <circle
                    cx=frame.x_at(i, count)
                    cy=frame.y_at(p.value, max)
                    r="6"
                    fill="transparent"
                    class="clickable"
                >
                    <title>{tooltip(p)}</title>
                </circle>
            }
        })
        .collect_view();

    view! {
        <div class=class>
            <svg
                viewBox=frame.view_box()
                preserveAspectRatio="none"
                class="w-full h-full overflow-visible"
                role="img"
            >
                <defs>
                    <linearGradient id=gradient_id x1="0" y1="0" x2="0" y2="1">
                        <stop offset="5%" stop-color=color stop-opacity="0.3" />
                        <stop offset="95%" stop-color=color stop-opacity="0" />
                    </linearGradient>
                </defs>
                {grid}
                <path d=paths.area fill=fill stroke="none" />
                <path d=paths.line fill="none" stroke=color stroke-width="2" />
                {markers}
            </svg>
        </div>
    }
}

/// Bar chart of `value` per `time` slot
#[component]
pub fn BarChart(
    points: &'static [ChartPoint],
    #[prop(default = "#00ff9d")]
    color: &'static str,
    #[prop(default = "w-full h-64")]
    class: &'static str,
) -> impl IntoView {
    let frame = AXIS_FRAME;
    let count = points.len();
    let max = series_max(points);

    let bars = frame
        .bars(points)
        .into_iter()
        .zip(points.iter())
        .enumerate()
        .map(|(i, (bar, p))| {
            view! {
                <rect
                    x=bar.x
                    y=bar.y
                    width=bar.width
                    height=bar.height
                    rx="4"
                    fill=color
                    class="clickable"
                >
                    <title>{tooltip(p)}</title>
                </rect>
                <TimeLabel x=frame.slot_center(i, count) frame=frame time=p.time />
            }
        })
        .collect_view();

    view! {
        <div class=class>
            <svg viewBox=frame.view_box() preserveAspectRatio="none" class="w-full h-full" role="img">
                {value_grid(frame, max)}
                {bars}
            </svg>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CHART_DATA;
    use crate::ui::render_to_html;

    #[test]
    fn test_tooltip_lists_time_value_confidence() {
        let text = tooltip(&CHART_DATA[0]);
        assert!(text.starts_with(CHART_DATA[0].time));
        assert!(text.contains(&CHART_DATA[0].confidence.to_string()));
    }

    #[test]
    fn test_axis_frame_leaves_room_for_labels() {
        assert!(AXIS_FRAME.padding > FRAME.padding);
        assert!(AXIS_FRAME.baseline() + 16.0 < AXIS_FRAME.height);
    }

    #[test]
    fn test_bar_chart_draws_value_grid() {
        let html = render_to_html(|| view! { <BarChart points=CHART_DATA /> });

        assert_eq!(html.matches("stroke-dasharray=\"3 3\"").count(), Y_SEGMENTS + 1);
        let top = format!(">{:.0}<", series_max(CHART_DATA));
        assert!(html.contains(&top), "missing top tick label {top}");
        assert_eq!(html.matches("<rect").count(), CHART_DATA.len());
        for point in CHART_DATA {
            assert!(html.contains(point.time));
        }
    }

    #[test]
    fn test_area_chart_grid_only_with_axes() {
        let bare = render_to_html(|| {
            view! { <AreaChart points=CHART_DATA color="#00f0ff" gradient_id="bare" /> }
        });
        assert!(!bare.contains("stroke-dasharray"));

        let framed = render_to_html(|| {
            view! { <AreaChart points=CHART_DATA color="#00f0ff" gradient_id="framed" axes=true /> }
        });
        assert_eq!(framed.matches("stroke-dasharray=\"3 3\"").count(), Y_SEGMENTS + 1);
    }
}
