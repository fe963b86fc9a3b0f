use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaChevronDown, FaChevronUp};
use dioxus_free_icons::Icon;

/// Collapsible card used for page sections and other expandable rows.
#[component]
pub fn SectionCard(
    title: String,
    open: bool,
    on_toggle: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        div {
            class: "section-card",
            button {
                r#type: "button",
                class: "section-card-header",
                onclick: move |_| on_toggle.call(()),
                span { class: "section-card-title", "{title}" }
                if open {
                    Icon { icon: FaChevronUp, width: 14, height: 14 }
                } else {
                    Icon { icon: FaChevronDown, width: 14, height: 14 }
                }
            }
            if open {
                div {
                    class: "section-card-body",
                    {children}
                }
            }
        }
    }
}
