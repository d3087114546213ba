use dioxus::prelude::*;

/// Brand bar shown above every page. Platform crates may pass extra header
/// content (e.g. a version badge) as children.
#[component]
pub fn AppHeader(children: Element) -> Element {
    rsx! {
        header { id: "app-header", class: "app-header",
            div { class: "app-header__inner",
                div { class: "app-header__brand",
                    span { class: "app-header__brand-spark", aria_hidden: "true" }
                    span { class: "app-header__brand-mark", "Credora" }
                    span { class: "app-header__brand-subtitle", "Growth metrics at a glance" }
                }
                div { class: "app-header__extra", {children} }
            }
        }
    }
}
