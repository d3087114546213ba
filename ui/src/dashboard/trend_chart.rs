use dioxus::prelude::*;

use crate::chart::{ChartFrame, SeriesKind};

/// Marker radius in chart units.
const POINT_RADIUS: f64 = 3.3;

/// Draws a projected frame as inline SVG: gridlines and axis labels first,
/// then each series as a polyline with circular markers on top. Stroke colors
/// come from the theme via the `chart__series--*` modifiers.
#[component]
pub fn TrendChart(frame: Option<ChartFrame>) -> Element {
    let Some(frame) = frame else {
        return rsx! {
            section { class: "dashboard-card chart chart--pending",
                p { class: "dashboard-card__placeholder", "Generating data…" }
            }
        };
    };

    let view_box = format!("0 0 {} {}", frame.width, frame.height);

    rsx! {
        section { class: "dashboard-card chart",
            div { class: "dashboard-card__header",
                h2 { "Traffic vs signups" }
                div { class: "chart__legend",
                    for kind in [SeriesKind::Visits, SeriesKind::Signups] {
                        span { key: "{kind.css_modifier()}", class: "chart__legend-item",
                            span { class: "chart__legend-swatch chart__legend-swatch--{kind.css_modifier()}" }
                            "{kind.label()}"
                        }
                    }
                }
            }

            svg {
                class: "chart__surface",
                view_box: "{view_box}",
                role: "img",
                "aria-label": "Visits and scaled signups for the selected range",

                g { class: "chart__grid",
                    for grid in frame.gridlines.iter() {
                        line {
                            class: "chart__gridline",
                            x1: "{grid.x_start}",
                            y1: "{grid.y}",
                            x2: "{grid.x_end}",
                            y2: "{grid.y}",
                        }
                        text {
                            class: "chart__axis-label",
                            x: "{grid.label_x}",
                            y: "{grid.y}",
                            text_anchor: "end",
                            dominant_baseline: "middle",
                            "{grid.value}"
                        }
                    }
                }

                for series in frame.lines.iter() {
                    g { class: "chart__series chart__series--{series.kind.css_modifier()}",
                        polyline { class: "chart__line", points: "{series.svg_points()}" }
                        for point in series.points.iter() {
                            circle {
                                class: "chart__point",
                                cx: "{point.x}",
                                cy: "{point.y}",
                                r: "{POINT_RADIUS}",
                            }
                        }
                    }
                }
            }
        }
    }
}
