use dioxus::prelude::*;

use crate::dashboard::KpiTile;
use crate::metrics::KpiMetric;

#[component]
pub fn KpiGrid(tiles: Vec<KpiTile>) -> Element {
    rsx! {
        section { class: "kpi-grid",
            if tiles.is_empty() {
                for metric in KpiMetric::ALL {
                    article { key: "{metric.key()}", class: "kpi kpi--{metric.key()} kpi--pending",
                        span { class: "kpi__label", "{metric.label()}" }
                        strong { class: "kpi__value", "—" }
                    }
                }
            } else {
                for tile in tiles.iter() {
                    article { key: "{tile.metric.key()}", class: "kpi kpi--{tile.metric.key()}",
                        span { class: "kpi__label", "{tile.metric.label()}" }
                        strong { class: "kpi__value", "{tile.value}" }
                        span { class: "kpi__delta {tile.direction.css_class()}", "{tile.delta}" }
                        span { class: "kpi__meta", "vs previous period" }
                    }
                }
            }
        }
    }
}
