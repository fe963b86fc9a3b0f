//! Papers and publications: form, searchable list, edit and delete.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaMagnifyingGlass, FaPencil, FaTrash, FaTriangleExclamation,
};
use dioxus_free_icons::Icon;
use store::forms::PublicationForm;
use store::models::Publication;
use store::validate::{validate_publication, FormErrors};
use ui::components::{Button, ButtonVariant, Input, Loader, Modal};
use ui::{use_api, MarkdownEditor, RichText};

use crate::views::{field_error, ActionResponse, DashboardLayout, ResponseModal};

fn refresh_publications(
    api: api::ApiClient,
    mut publications: Signal<Vec<Publication>>,
    mut loading: Signal<bool>,
) {
    spawn(async move {
        loading.set(true);
        match api.publications().await {
            Ok(list) => publications.set(list),
            Err(err) => tracing::error!("failed to load publications: {err}"),
        }
        loading.set(false);
    });
}

#[component]
pub fn Publications() -> Element {
    rsx! {
        DashboardLayout {
            PublicationsView {}
        }
    }
}

#[component]
fn PublicationsView() -> Element {
    let api = use_api();

    let publications = use_signal(Vec::<Publication>::new);
    let loading = use_signal(|| true);
    let mut form = use_signal(PublicationForm::default);
    let mut errors = use_signal(|| Option::<FormErrors>::None);
    let mut search = use_signal(String::new);
    let mut delete_modal = use_signal(|| Option::<String>::None);
    let response = use_signal(|| ActionResponse::None);

    {
        let api = api.clone();
        let _loader = use_resource(move || {
            let api = api.clone();
            async move {
                refresh_publications(api, publications, loading);
            }
        });
    }

    let submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let payload = form();
            if let Err(form_errors) = validate_publication(&payload) {
                errors.set(Some(form_errors));
                return;
            }
            errors.set(None);

            let api = api.clone();
            let mut response = response;
            spawn(async move {
                let result = match &payload.id {
                    Some(id) if !id.is_empty() => api.edit_publication(id, &payload).await,
                    _ => api.add_publication(&payload).await,
                };
                match result {
                    Ok(message) => {
                        form.set(PublicationForm::default());
                        response.set(Some((true, message)));
                        refresh_publications(api, publications, loading);
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
                match api.delete_publication(&id).await {
                    Ok(message) => {
                        response.set(Some((true, message)));
                        refresh_publications(api, publications, loading);
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
            });
        }
    };

    // Title, summary or author match, case-insensitive.
    let needle = search().to_lowercase();
    let shown: Vec<Publication> = publications()
        .into_iter()
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.summary.to_lowercase().contains(&needle)
                || p.authors.iter().any(|a| a.to_lowercase().contains(&needle))
        })
        .collect();

    let editing = form().id.is_some();

    if loading() && publications().is_empty() {
        return rsx! { Loader { text: "...Loading" } };
    }

    rsx! {
        div {
            class: "page-heading",
            h1 { "Papers and Publications" }
            p { "Create, edit and manage publication entries" }
        }

        form {
            class: "panel-card",
            onsubmit: submit,
            h2 { class: "panel-subtitle", if editing { "Edit Publication" } else { "Add Publication" } }

            Input {
                label: "Title",
                placeholder: "Enter publication title",
                value: form().title,
                error: field_error(&errors(), "title"),
                oninput: move |evt: FormEvent| form.with_mut(|f| f.title = evt.value()),
            }

            div {
                class: "form-field",
                label { class: "form-label", "Summary/Abstract" }
                if let Some(err) = field_error(&errors(), "summary") {
                    p { class: "form-error", "{err}" }
                }
                MarkdownEditor {
                    value: form().summary,
                    placeholder: "Short abstract...",
                    oninput: move |value: String| form.with_mut(|f| f.summary = value),
                }
            }

            Input {
                label: "Authors",
                placeholder: "Enter authors, separated by commas",
                value: form().authors,
                error: field_error(&errors(), "authors"),
                oninput: move |evt: FormEvent| form.with_mut(|f| f.authors = evt.value()),
            }
            Input {
                label: "Link",
                placeholder: "Enter publication link",
                value: form().link,
                error: field_error(&errors(), "link"),
                oninput: move |evt: FormEvent| form.with_mut(|f| f.link = evt.value()),
            }
            Input {
                label: "Date",
                r#type: "date",
                value: form().date,
                error: field_error(&errors(), "date"),
                oninput: move |evt: FormEvent| form.with_mut(|f| f.date = evt.value()),
            }

            div {
                class: "section-toolbar",
                Button {
                    variant: ButtonVariant::Success,
                    r#type: "submit",
                    if editing { "Save Publication" } else { "Add Publication" }
                }
                if editing {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            form.set(PublicationForm::default());
                            errors.set(None);
                        },
                        "Cancel Edit"
                    }
                }
            }
        }

        div {
            class: "search-bar",
            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            input {
                class: "form-input",
                placeholder: "Search publications...",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }
        }

        div {
            class: "card-list",
            for publication in shown {
                div {
                    key: "{publication.id}",
                    class: "panel-card",
                    h3 { class: "card-title", "{publication.title}" }
                    RichText { source: publication.summary.clone() }
                    p {
                        class: "card-meta",
                        strong { "Authors: " }
                        {publication.authors.join(", ")}
                    }
                    p {
                        class: "card-meta",
                        strong { "Publication Date: " }
                        "{publication.date}"
                    }
                    a {
                        class: "auth-link",
                        href: "{publication.link}",
                        target: "_blank",
                        "View publication"
                    }
                    div {
                        class: "section-toolbar",
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "btn-sm",
                            onclick: {
                                let publication = publication.clone();
                                move |_| {
                                    form.set(PublicationForm {
                                        id: Some(publication.id.clone()),
                                        title: publication.title.clone(),
                                        summary: publication.summary.clone(),
                                        authors: publication.authors.join(", "),
                                        link: publication.link.clone(),
                                        date: publication.date.clone(),
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
                                let id = publication.id.clone();
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
                title: "Delete Publication".to_string(),
                caption: "Are you sure you want to delete this publication?".to_string(),
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
