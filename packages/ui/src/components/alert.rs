use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Inline banner for transient success and error notices.
#[component]
pub fn Alert(message: String, #[props(default = AlertKind::Success)] kind: AlertKind) -> Element {
    let kind_class = match kind {
        AlertKind::Success => "alert-success",
        AlertKind::Error => "alert-error",
    };

    rsx! {
        div {
            class: "alert {kind_class}",
            "{message}"
        }
    }
}
