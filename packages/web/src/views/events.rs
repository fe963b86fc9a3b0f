//! Event editor: form with date/time/location and optional flyer URL,
//! plus the event list with edit and delete.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaCalendarDays, FaClock, FaLocationDot, FaPencil, FaTrash, FaTriangleExclamation,
};
use dioxus_free_icons::Icon;
use store::forms::EventForm;
use store::models::Event;
use store::validate::{validate_event, FormErrors};
use ui::components::{Button, ButtonVariant, Input, Loader, Modal, TextArea};
use ui::use_api;

use crate::views::{field_error, ActionResponse, DashboardLayout, ResponseModal};

fn refresh_events(api: api::ApiClient, mut events: Signal<Vec<Event>>, mut loading: Signal<bool>) {
    spawn(async move {
        loading.set(true);
        match api.events().await {
            Ok(mut list) => {
                // Newest first.
                list.sort_by(|a, b| b.date.cmp(&a.date));
                events.set(list);
            }
            Err(err) => tracing::error!("failed to load events: {err}"),
        }
        loading.set(false);
    });
}

#[component]
pub fn Events() -> Element {
    rsx! {
        DashboardLayout {
            EventsView {}
        }
    }
}

#[component]
fn EventsView() -> Element {
    let api = use_api();

    let events = use_signal(Vec::<Event>::new);
    let loading = use_signal(|| true);
    let mut form = use_signal(EventForm::default);
    let mut errors = use_signal(|| Option::<FormErrors>::None);
    let mut delete_modal = use_signal(|| Option::<String>::None);
    let response = use_signal(|| ActionResponse::None);

    {
        let api = api.clone();
        let _loader = use_resource(move || {
            let api = api.clone();
            async move {
                refresh_events(api, events, loading);
            }
        });
    }

    let submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let mut payload = form();
            payload.flyer = payload.flyer.filter(|f| !f.trim().is_empty());
            if let Err(form_errors) = validate_event(&payload) {
                errors.set(Some(form_errors));
                return;
            }
            errors.set(None);

            let api = api.clone();
            let mut response = response;
            spawn(async move {
                let result = match &payload.id {
                    Some(id) if !id.is_empty() => api.edit_event(id, &payload).await,
                    _ => api.create_event(&payload).await,
                };
                match result {
                    Ok(message) => {
                        form.set(EventForm::default());
                        response.set(Some((true, message)));
                        refresh_events(api, events, loading);
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
            });
        }
    };

    let confirm_delete = {
        let api = api.clone();
        move |_| {
            let Some(id) = delete_modal() else {
                return;
            };
            delete_modal.set(None);
            let api = api.clone();
            let mut response = response;
            spawn(async move {
                match api.delete_event(&id).await {
                    Ok(message) => {
                        response.set(Some((true, message)));
                        refresh_events(api, events, loading);
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
            });
        }
    };

    let editing = form().id.is_some();

    if loading() && events().is_empty() {
        return rsx! { Loader { text: "...Loading" } };
    }

    rsx! {
        div {
            class: "page-heading",
            h1 { "Events Management" }
            p { "Create, edit and manage events" }
        }

        form {
            class: "panel-card",
            onsubmit: submit,
            h2 { class: "panel-subtitle", if editing { "Edit Event" } else { "Add Event" } }

            Input {
                label: "Event Title",
                placeholder: "Enter event title",
                value: form().title,
                error: field_error(&errors(), "title"),
                oninput: move |evt: FormEvent| form.with_mut(|f| f.title = evt.value()),
            }
            TextArea {
                label: "Description",
                placeholder: "Enter event description",
                value: form().description,
                error: field_error(&errors(), "description"),
                oninput: move |evt: FormEvent| form.with_mut(|f| f.description = evt.value()),
            }

            div {
                class: "form-grid",
                Input {
                    label: "Event Date",
                    r#type: "date",
                    value: form().date,
                    error: field_error(&errors(), "date"),
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.date = evt.value()),
                }
                Input {
                    label: "Event Time",
                    r#type: "time",
                    value: form().time,
                    error: field_error(&errors(), "time"),
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.time = evt.value()),
                }
            }

            Input {
                label: "Location",
                placeholder: "Enter event location",
                value: form().location,
                error: field_error(&errors(), "location"),
                oninput: move |evt: FormEvent| form.with_mut(|f| f.location = evt.value()),
            }
            Input {
                label: "Event Flyer/Poster URL",
                placeholder: "https://cdn.example/flyer.png",
                value: form().flyer.unwrap_or_default(),
                oninput: move |evt: FormEvent| form.with_mut(|f| {
                    let value = evt.value();
                    f.flyer = if value.trim().is_empty() { None } else { Some(value) };
                }),
            }

            div {
                class: "section-toolbar",
                Button {
                    variant: ButtonVariant::Success,
                    r#type: "submit",
                    if editing { "Save Event" } else { "Add Event" }
                }
                if editing {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            form.set(EventForm::default());
                            errors.set(None);
                        },
                        "Cancel Edit"
                    }
                }
            }
        }

        div {
            class: "card-list",
            for event in events() {
                div {
                    key: "{event.id}",
                    class: "panel-card",
                    h3 { class: "card-title", "{event.title}" }
                    p { "{event.description}" }
                    p {
                        class: "card-meta",
                        Icon { icon: FaCalendarDays, width: 12, height: 12 }
                        span { "{event.date}" }
                        Icon { icon: FaClock, width: 12, height: 12 }
                        span { "{event.time}" }
                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                        span { "{event.location}" }
                    }
                    if let Some(flyer) = &event.flyer {
                        img { class: "news-thumb", src: "{flyer}", alt: "Event flyer" }
                    }
                    div {
                        class: "section-toolbar",
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "btn-sm",
                            onclick: {
                                let event = event.clone();
                                move |_| {
                                    form.set(EventForm {
                                        id: Some(event.id.clone()),
                                        title: event.title.clone(),
                                        description: event.description.clone(),
                                        date: event.date.chars().take(10).collect(),
                                        time: event.time.clone(),
                                        location: event.location.clone(),
                                        flyer: event.flyer.clone(),
                                    });
                                    errors.set(None);
                                }
                            },
                            Icon { icon: FaPencil, width: 12, height: 12 }
                            span { "Edit" }
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            class: "btn-sm",
                            onclick: {
                                let id = event.id.clone();
                                move |_| delete_modal.set(Some(id.clone()))
                            },
                            Icon { icon: FaTrash, width: 12, height: 12 }
                            span { "Delete" }
                        }
                    }
                }
            }
        }

        if delete_modal().is_some() {
            Modal {
                title: "Delete Event".to_string(),
                caption: "Are you sure you want to delete this event?".to_string(),
                icon_class: "icon-danger".to_string(),
                icon: rsx! { Icon { icon: FaTriangleExclamation, width: 22, height: 22 } },
                confirm_label: "Delete".to_string(),
                confirm_variant: ButtonVariant::Danger,
                on_confirm: confirm_delete,
                on_close: move |_| delete_modal.set(None),
            }
        }

        ResponseModal { response }
    }
}
