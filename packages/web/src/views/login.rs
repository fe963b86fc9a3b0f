//! Login page — the panel's index route.

use dioxus::prelude::*;
use store::forms::Credentials;
use store::validate::{validate_login, FormErrors};
use ui::components::{Button, ButtonVariant, Input};
use ui::{sign_in, use_api, use_auth};

use crate::views::{dashboard_route, field_error};
use crate::Route;

#[component]
pub fn Login() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(|| Option::<FormErrors>::None);
    let mut login_err = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the role dashboard.
    use_effect(move || {
        let state = auth();
        if !state.loading {
            if let Some(role) = state.role() {
                nav.replace(dashboard_route(role));
            }
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            login_err.set(None);

            let credentials = Credentials {
                email: email().trim().to_string(),
                password: password(),
            };
            if let Err(form_errors) = validate_login(&credentials) {
                errors.set(Some(form_errors));
                return;
            }
            errors.set(None);

            loading.set(true);
            match api.login(&credentials).await {
                Ok(admin) => {
                    let role = admin.role;
                    sign_in(&mut auth, admin);
                    nav.push(dashboard_route(role));
                }
                Err(err) => {
                    loading.set(false);
                    login_err.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Admin Login" }

                if let Some(err) = login_err() {
                    p { class: "auth-error", "* {err}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_login,

                    Input {
                        label: "Enter valid Email Address",
                        r#type: "email",
                        placeholder: "Enter valid Email Address",
                        value: email(),
                        error: field_error(&errors(), "email"),
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }

                    Input {
                        label: "Enter Password",
                        r#type: "password",
                        placeholder: "Enter Password",
                        value: password(),
                        error: field_error(&errors(), "password"),
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }

                p {
                    class: "auth-footnote",
                    "New here? "
                    Link { to: Route::Register {}, class: "auth-link", "Register" }
                }
            }
        }
    }
}
