use dioxus::prelude::*;

use crate::core::config::DashboardConfig;
use crate::dashboard::DashboardView;

#[component]
pub fn Dashboard() -> Element {
    let config = try_use_context::<DashboardConfig>().unwrap_or_default();

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Overview" }
            p { "Visits, signups and leads for the selected range, compared with the period before it." }
            DashboardView { config: config }
        }
    }
}
