use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Centered overlay dialog.
///
/// Covers both shapes the panel needs: confirmation prompts (icon +
/// caption + confirm/cancel) and form dialogs (children as the body,
/// cancel only).
#[component]
pub fn Modal(
    #[props(default)] title: Option<String>,
    #[props(default)] caption: Option<String>,
    #[props(default)] icon: Option<Element>,
    #[props(default = String::new())] icon_class: String,
    /// Error raised by the confirm action, shown inside the dialog.
    #[props(default)]
    error: Option<String>,
    #[props(default)] confirm_label: Option<String>,
    #[props(default = ButtonVariant::Primary)] confirm_variant: ButtonVariant,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    #[props(default = String::new())] class: String,
    #[props(default)] on_confirm: Option<EventHandler<()>>,
    on_close: EventHandler<()>,
    #[props(default = VNode::empty())] children: Element,
) -> Element {
    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal-panel {class}",
                div {
                    class: "modal-header",
                    if let Some(icon) = &icon {
                        span { class: "modal-icon {icon_class}", {icon.clone()} }
                    }
                    if let Some(title) = &title {
                        h2 { class: "modal-title", "{title}" }
                    }
                }
                if let Some(message) = &error {
                    p { class: "form-error", "{message}" }
                }
                if let Some(caption) = &caption {
                    p { class: "modal-caption", "{caption}" }
                }
                div {
                    class: "modal-body",
                    {children}
                }
                div {
                    class: "modal-actions",
                    if let Some(label) = &confirm_label {
                        Button {
                            variant: confirm_variant,
                            onclick: move |_| {
                                if let Some(handler) = &on_confirm {
                                    handler.call(());
                                }
                            },
                            "{label}"
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "{cancel_label}"
                    }
                }
            }
        }
    }
}
