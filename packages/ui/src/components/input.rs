use dioxus::prelude::*;

#[component]
pub fn Label(#[props(default = String::new())] html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: "{html_for}",
            class: "form-label",
            {children}
        }
    }
}

/// Text input with an optional label above and error line below.
#[component]
pub fn Input(
    #[props(default)] label: Option<String>,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default)] error: Option<String>,
    #[props(default = String::new())] class: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            if let Some(text) = &label {
                label { class: "form-label", "{text}" }
            }
            input {
                class: "form-input {class}",
                r#type,
                placeholder,
                value,
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(message) = &error {
                p { class: "form-error", "{message}" }
            }
        }
    }
}

/// Plain multi-line input; rich text goes through `MarkdownEditor` instead.
#[component]
pub fn TextArea(
    #[props(default)] label: Option<String>,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default)] error: Option<String>,
    #[props(default = 4)] rows: i64,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            if let Some(text) = &label {
                label { class: "form-label", "{text}" }
            }
            textarea {
                class: "form-input",
                rows: "{rows}",
                placeholder,
                value,
                oninput: move |evt| oninput.call(evt),
            }
            if let Some(message) = &error {
                p { class: "form-error", "{message}" }
            }
        }
    }
}
