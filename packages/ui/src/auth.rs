//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::models::Admin;
use store::SessionStore;

use crate::session::session;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub admin: Option<Admin>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            admin: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn role(&self) -> Option<store::AdminRole> {
        self.admin.as_ref().map(|a| a.role)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the admin logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that restores the stored session on mount.
/// Wrap the app with this component to enable authentication state.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);

    use_effect(move || {
        let admin = session().load();
        auth_state.set(AuthState {
            admin,
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Record a successful login: persist the session and update the context.
pub fn sign_in(auth: &mut Signal<AuthState>, admin: Admin) {
    if let Err(err) = session().save(&admin) {
        tracing::error!("failed to persist session: {err}");
    }
    auth.set(AuthState {
        admin: Some(admin),
        loading: false,
    });
}

/// Clear the stored session and the context.
pub fn sign_out(auth: &mut Signal<AuthState>) {
    session().clear();
    auth.set(AuthState {
        admin: None,
        loading: false,
    });
}

/// Button that signs the current admin out and returns to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = String::new())] class: String,
) -> Element {
    let mut auth_state = use_auth();

    let onclick = move |_| {
        sign_out(&mut auth_state);
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/");
            }
        }
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
