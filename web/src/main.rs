use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use ui::components::AppHeader;
use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_hook(|| info!("credora web v{} starting", env!("CARGO_PKG_VERSION")));

    rsx! {
        document::Title { "Credora · Dashboard" }
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// Web layout: shared header above the routed page.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppHeader {}
        Outlet::<Route> {}
    }
}
