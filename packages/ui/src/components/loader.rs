use dioxus::prelude::*;

/// Full-surface loading state.
#[component]
pub fn Loader(#[props(default = "...Loading".to_string())] text: String) -> Element {
    rsx! {
        div {
            class: "loader",
            div { class: "loader-spinner" }
            p { class: "loader-text", "{text}" }
        }
    }
}

/// Inline spinner for busy regions inside a view.
#[component]
pub fn SmallLoader() -> Element {
    rsx! {
        div { class: "loader-spinner loader-spinner-sm" }
    }
}
