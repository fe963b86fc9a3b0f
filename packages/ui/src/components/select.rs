use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Dropdown with a disabled prompt entry, styled like [`super::Input`].
#[component]
pub fn Select(
    #[props(default)] label: Option<String>,
    options: Vec<SelectOption>,
    #[props(default = String::new())] value: String,
    #[props(default = "-- Select --".to_string())] prompt: String,
    #[props(default)] error: Option<String>,
    onchange: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-field",
            if let Some(text) = &label {
                label { class: "form-label", "{text}" }
            }
            select {
                class: "form-input",
                value,
                onchange: move |evt| onchange.call(evt),
                option { value: "", disabled: true, "{prompt}" }
                for opt in &options {
                    option {
                        key: "{opt.value}",
                        value: "{opt.value}",
                        "{opt.label}"
                    }
                }
            }
            if let Some(message) = &error {
                p { class: "form-error", "{message}" }
            }
        }
    }
}
