use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::core::config::DashboardConfig;
use crate::dashboard::{
    DashboardSnapshot, KpiGrid, MetricsTable, PresentationController, TrendChart,
};
use crate::metrics::WindowSelection;

/// Signals from the range selector and refresh button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardEvent {
    SelectWindow(WindowSelection),
    Refresh,
}

/// The live dashboard. A single coroutine owns the controller, so window
/// changes and refreshes are applied one at a time in arrival order.
#[component]
pub fn DashboardView(#[props(default)] config: DashboardConfig) -> Element {
    let initial_window = config.initial_window;
    let snapshot = use_signal(DashboardSnapshot::default);
    let active_window = use_signal(move || initial_window);
    let refresh_count = use_signal(|| 0u32);
    let footer_year = use_signal(|| Option::<i32>::None);
    let last_error = use_signal(|| Option::<String>::None);

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<DashboardEvent>| {
        let config = config.clone();
        let mut snapshot_signal = snapshot;
        let mut window_signal = active_window;
        let mut refresh_signal = refresh_count;
        let mut year_signal = footer_year;
        let mut error_signal = last_error;

        async move {
            let mut controller = match PresentationController::with_system_clock(config) {
                Ok(controller) => controller,
                Err(err) => {
                    tracing::warn!(%err, "dashboard failed to start");
                    error_signal.set(Some(err.to_string()));
                    return;
                }
            };

            let mut initial = DashboardSnapshot::default();
            controller.publish(&mut initial);
            snapshot_signal.set(initial);
            year_signal.set(Some(controller.current_year()));

            while let Some(event) = rx.next().await {
                let mut next = DashboardSnapshot::default();
                match event {
                    DashboardEvent::SelectWindow(window) => {
                        controller.select_window(window, &mut next);
                        window_signal.set(window);
                    }
                    DashboardEvent::Refresh => {
                        if let Err(err) = controller.refresh(&mut next) {
                            error_signal.set(Some(format!("Refresh failed: {err}")));
                            continue;
                        }
                        refresh_signal.with_mut(|count| *count = count.wrapping_add(1));
                    }
                }
                error_signal.set(None);
                snapshot_signal.set(next);
            }
        }
    });

    let view = snapshot();
    let current_window = active_window();
    let pulses = refresh_count();
    let error_message = last_error();

    let range_buttons = WindowSelection::ALL.into_iter().map(|window| {
        let coroutine = coroutine.clone();
        let class = if window == current_window {
            "seg active"
        } else {
            "seg"
        };
        rsx! {
            button {
                key: "{window.label()}",
                r#type: "button",
                class: "{class}",
                aria_pressed: window == current_window,
                onclick: move |_| coroutine.send(DashboardEvent::SelectWindow(window)),
                "{window.label()}"
            }
        }
    });

    let refresh = {
        let coroutine = coroutine.clone();
        move |_| coroutine.send(DashboardEvent::Refresh)
    };

    let updated_label = if view.updated_at.is_empty() {
        "—".to_string()
    } else {
        view.updated_at.clone()
    };

    let pill_class = if pulses > 0 {
        "status-pill status-pill--pulse"
    } else {
        "status-pill"
    };

    rsx! {
        div { class: "dashboard",
            div { class: "dashboard__toolbar",
                span { key: "{pulses}", class: "{pill_class}", "Demo data" }
                div { class: "segmented", role: "group", aria_label: "Time range",
                    {range_buttons}
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: refresh,
                    "Refresh"
                }
                span { class: "dashboard__updated", "Last updated {updated_label}" }
            }

            if let Some(err) = error_message {
                div { class: "dashboard__error", "⚠️ {err}" }
            }

            KpiGrid { tiles: view.kpis.clone() }
            TrendChart { frame: view.chart.clone() }
            MetricsTable { rows: view.rows.clone() }

            footer { class: "dashboard__footer",
                if let Some(year) = footer_year() {
                    "© {year} Credora · synthetic data, generated in your browser"
                } else {
                    "Synthetic data, generated in your browser"
                }
            }
        }
    }
}
