//! Change-password page, available to every signed-in role.

use dioxus::prelude::*;
use store::forms::PasswordChange;
use store::validate::{validate_change_password, FormErrors};
use ui::components::{Alert, AlertKind, Button, ButtonVariant, Input};
use ui::{sign_in, use_api, use_auth};

use crate::views::{dashboard_route, field_error};
use crate::Route;

#[component]
pub fn ChangePassword() -> Element {
    let api = use_api();
    let mut auth = use_auth();
    let nav = use_navigator();

    let mut form = use_signal(PasswordChange::default);
    let mut errors = use_signal(|| Option::<FormErrors>::None);
    let mut password_err = use_signal(|| Option::<String>::None);
    let mut changed = use_signal(|| false);
    let mut loading = use_signal(|| false);

    // Only reachable with a stored session.
    use_effect(move || {
        let state = auth();
        if !state.loading && state.admin.is_none() {
            nav.replace(Route::Login {});
        }
    });

    let handle_change = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            password_err.set(None);

            let mut payload = form();
            payload.id = auth().admin.map(|a| a.id).unwrap_or_default();
            if let Err(form_errors) = validate_change_password(&payload) {
                errors.set(Some(form_errors));
                return;
            }
            errors.set(None);

            loading.set(true);
            match api.change_password(&payload).await {
                Ok(admin) => {
                    let role = admin.role;
                    sign_in(&mut auth, admin);
                    loading.set(false);
                    changed.set(true);
                    nav.push(dashboard_route(role));
                }
                Err(err) => {
                    loading.set(false);
                    password_err.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-screen",
            if changed() {
                Alert { message: "Password changed successfully!", kind: AlertKind::Success }
            }
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Change Password" }

                if let Some(err) = password_err() {
                    p { class: "auth-error", "* {err}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_change,

                    Input {
                        label: "Enter Current Password",
                        r#type: "password",
                        placeholder: "Enter Current Password",
                        value: form().current_password,
                        error: field_error(&errors(), "current_password"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.current_password = evt.value()),
                    }
                    Input {
                        label: "Enter New Password",
                        r#type: "password",
                        placeholder: "Enter New Password",
                        value: form().new_password,
                        error: field_error(&errors(), "new_password"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.new_password = evt.value()),
                    }
                    Input {
                        label: "Confirm New Password",
                        r#type: "password",
                        placeholder: "Confirm New Password",
                        value: form().password_confirm,
                        error: field_error(&errors(), "password_confirm"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.password_confirm = evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Please wait..." } else { "Change Password" }
                    }
                }
            }
        }
    }
}
