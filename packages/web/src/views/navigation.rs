//! CMS configuration page: tab switch between the navigation-link editor
//! and the footer editor.

use dioxus::prelude::*;
use store::AdminRole;

use crate::views::footer_section::FooterSection;
use crate::views::nav_section::NavSection;
use crate::views::{ActionResponse, DashboardLayout, RequireRole, ResponseModal};

#[derive(Clone, Copy, PartialEq)]
enum ConfigTab {
    Navigation,
    Footer,
}

#[component]
pub fn Navigation() -> Element {
    let mut tab = use_signal(|| ConfigTab::Navigation);
    let response = use_signal(|| ActionResponse::None);

    rsx! {
        RequireRole {
            role: AdminRole::Webmaster,
            DashboardLayout {
                div {
                    class: "page-heading",
                    h1 { "CMS Configuration" }
                    p { "Manage your website navigation and footer settings" }
                }

                div {
                    class: "tab-switch",
                    button {
                        r#type: "button",
                        class: if tab() == ConfigTab::Navigation { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(ConfigTab::Navigation),
                        "Navigation"
                    }
                    button {
                        r#type: "button",
                        class: if tab() == ConfigTab::Footer { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(ConfigTab::Footer),
                        "Footer"
                    }
                }

                div {
                    class: "config-panel",
                    if tab() == ConfigTab::Navigation {
                        NavSection { response }
                    } else {
                        FooterSection { response }
                    }
                }

                ResponseModal { response }
            }
        }
    }
}
