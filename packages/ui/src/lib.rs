//! Shared UI for the admin panel: form and overlay components, the
//! authentication context, the navigation-link context and Markdown
//! rendering for rich-text fields.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod client;
pub use client::use_api;

mod session;
pub use session::session;

mod auth;
pub use auth::{sign_in, sign_out, use_auth, AuthProvider, AuthState, LogoutButton};

mod nav_links;
pub use nav_links::{use_nav_links, NavLinks, NavLinksProvider};

pub mod markdown;
pub use markdown::{render_rich, MarkdownEditor, RichText};
