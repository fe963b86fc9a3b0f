//! Webmaster registration. Separate from the admin form: webmasters carry
//! a username and skip the approval queue.

use dioxus::prelude::*;
use store::forms::WebmasterForm;
use store::validate::{validate_webmaster, FormErrors};
use ui::components::{Button, ButtonVariant, Input};
use ui::use_api;

use crate::views::field_error;
use crate::Route;

#[component]
pub fn WebmasterRegister() -> Element {
    let api = use_api();

    let mut form = use_signal(WebmasterForm::default);
    let mut errors = use_signal(|| Option::<FormErrors>::None);
    let mut register_err = use_signal(|| Option::<String>::None);
    let mut registered = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        spawn(async move {
            register_err.set(None);

            let payload = form();
            if let Err(form_errors) = validate_webmaster(&payload) {
                errors.set(Some(form_errors));
                return;
            }
            errors.set(None);

            loading.set(true);
            match api.create_webmaster(&payload).await {
                Ok(_) => {
                    loading.set(false);
                    registered.set(true);
                }
                Err(err) => {
                    loading.set(false);
                    register_err.set(Some(err.to_string()));
                }
            }
        });
    };

    if registered() {
        return rsx! {
            div {
                class: "auth-screen",
                div {
                    class: "auth-card auth-card-info",
                    h1 { class: "auth-title", "Registered Successfully!" }
                    Link {
                        to: Route::Login {},
                        class: "btn btn-primary",
                        "Proceed to Login"
                    }
                }
            }
        };
    }

    rsx! {
        div {
            class: "auth-screen",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Register Webmaster" }

                if let Some(err) = register_err() {
                    p { class: "auth-error", "* {err}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_register,

                    Input {
                        label: "Enter Firstname",
                        placeholder: "Enter Firstname",
                        value: form().firstname,
                        error: field_error(&errors(), "firstname"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.firstname = evt.value()),
                    }
                    Input {
                        label: "Enter Lastname",
                        placeholder: "Enter Lastname",
                        value: form().lastname,
                        error: field_error(&errors(), "lastname"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.lastname = evt.value()),
                    }
                    Input {
                        label: "Choose a Username",
                        placeholder: "Choose a Username",
                        value: form().username,
                        error: field_error(&errors(), "username"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.username = evt.value()),
                    }
                    Input {
                        label: "Enter valid Phone Number",
                        placeholder: "Enter valid Phone Number",
                        value: form().phone,
                        error: field_error(&errors(), "phone"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.phone = evt.value()),
                    }
                    Input {
                        label: "Enter valid Email Address",
                        r#type: "email",
                        placeholder: "Enter valid Email Address",
                        value: form().email,
                        error: field_error(&errors(), "email"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.email = evt.value()),
                    }
                    Input {
                        label: "Create Password",
                        r#type: "password",
                        placeholder: "Create Password",
                        value: form().password,
                        error: field_error(&errors(), "password"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.password = evt.value()),
                    }
                    Input {
                        label: "Confirm Password",
                        r#type: "password",
                        placeholder: "Confirm Password",
                        value: form().password_confirm,
                        error: field_error(&errors(), "password_confirm"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.password_confirm = evt.value()),
                    }

                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Please wait..." } else { "Register" }
                    }
                }
            }
        }
    }
}
