use dioxus::prelude::*;

use crate::dashboard::TableRow;

#[component]
pub fn MetricsTable(rows: Vec<TableRow>) -> Element {
    rsx! {
        section { class: "dashboard-card metrics-table",
            div { class: "dashboard-card__header",
                h2 { "Daily breakdown" }
                if !rows.is_empty() {
                    span { class: "dashboard-card__meta", "{rows.len()} days" }
                }
            }

            table { class: "metrics-table__grid",
                thead {
                    tr {
                        th { "Date" }
                        th { class: "num", "Visits" }
                        th { class: "num", "Signups" }
                        th { class: "num", "Leads" }
                        th { class: "num", "Conversion" }
                    }
                }
                tbody {
                    for row in rows.iter() {
                        tr { key: "{row.date}",
                            td { "{row.date}" }
                            td { class: "num", "{row.visits}" }
                            td { class: "num", "{row.signups}" }
                            td { class: "num", "{row.leads}" }
                            td { class: "num", "{row.conversion}" }
                        }
                    }
                }
            }
        }
    }
}
