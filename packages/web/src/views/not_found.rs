//! Fallback for paths that match no configured page.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound() -> Element {
    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "auth-card auth-card-info",
                h1 { class: "auth-title", "404" }
                p { "The page you are looking for does not exist." }
                Link {
                    to: Route::Login {},
                    class: "btn btn-primary",
                    "Back to Login"
                }
            }
        }
    }
}
