//! Media landing page.

use dioxus::prelude::*;
use store::AdminRole;
use ui::use_auth;

use crate::views::{DashboardLayout, RequireRole};

#[component]
pub fn DashboardMedia() -> Element {
    let auth = use_auth();

    rsx! {
        RequireRole {
            role: AdminRole::Media,
            DashboardLayout {
                div {
                    class: "page-heading",
                    h1 { "Welcome to the media dashboard" }
                    if let Some(admin) = auth().admin {
                        p { "Signed in as " {admin.full_name()} }
                    }
                }
            }
        }
    }
}
