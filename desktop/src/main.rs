#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::core::config::DashboardConfig;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Dashboard {},
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Optional path to a JSON file overriding dashboard defaults.
const CONFIG_ENV: &str = "CREDORA_CONFIG";

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Credora – v{VERSION}"))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| info!("credora desktop v{VERSION} starting"));
    use_context_provider(load_config);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

fn load_config() -> DashboardConfig {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return DashboardConfig::default();
    };
    match DashboardConfig::from_json_file(&path) {
        Ok(config) => {
            info!("dashboard config loaded from {}", path.to_string_lossy());
            config
        }
        Err(err) => {
            warn!("ignoring {CONFIG_ENV}: {err}");
            DashboardConfig::default()
        }
    }
}

/// Desktop layout: shared header plus a version badge above the routed page.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppHeader {
            span { class: "app-header__badge", "v{VERSION}" }
        }
        Outlet::<Route> {}
    }
}
