//! Feedback inbox: visitor messages with expandable rows, multi-select
//! and single/bulk delete.

use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaEnvelope, FaTrash, FaTriangleExclamation, FaUser,
};
use dioxus_free_icons::Icon;
use store::models::Feedback as FeedbackMessage;
use store::AdminRole;
use ui::components::{Button, ButtonVariant, Loader, Modal};
use ui::use_api;

use crate::views::{ActionResponse, DashboardLayout, RequireRole, ResponseModal};

fn refresh_feedback(
    api: api::ApiClient,
    mut messages: Signal<Vec<FeedbackMessage>>,
    mut loading: Signal<bool>,
) {
    spawn(async move {
        loading.set(true);
        match api.feedback().await {
            Ok(list) => messages.set(list),
            Err(err) => tracing::error!("failed to load feedback: {err}"),
        }
        loading.set(false);
    });
}

#[component]
pub fn Feedback() -> Element {
    rsx! {
        RequireRole {
            role: AdminRole::Webmaster,
            DashboardLayout {
                FeedbackView {}
            }
        }
    }
}

#[component]
fn FeedbackView() -> Element {
    let api = use_api();

    let messages = use_signal(Vec::<FeedbackMessage>::new);
    let loading = use_signal(|| true);
    let mut expanded = use_signal(|| Option::<String>::None);
    let mut selected = use_signal(HashSet::<String>::new);
    let mut delete_modal = use_signal(|| Option::<String>::None);
    let mut delete_many_modal = use_signal(|| false);
    let response = use_signal(|| ActionResponse::None);

    {
        let api = api.clone();
        let _loader = use_resource(move || {
            let api = api.clone();
            async move {
                refresh_feedback(api, messages, loading);
            }
        });
    }

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
                match api.delete_feedback(&id).await {
                    Ok(message) => {
                        response.set(Some((true, message)));
                        refresh_feedback(api, messages, loading);
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
            });
        }
    };

    let confirm_delete_many = {
        let api = api.clone();
        move |_| {
            delete_many_modal.set(false);
            let ids: Vec<String> = selected().into_iter().collect();
            if ids.is_empty() {
                return;
            }
            let api = api.clone();
            let mut response = response;
            spawn(async move {
                match api.delete_feedback_batch(&ids).await {
                    Ok(message) => {
                        selected.set(HashSet::new());
                        response.set(Some((true, message)));
                        refresh_feedback(api, messages, loading);
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
            });
        }
    };

    if loading() && messages().is_empty() {
        return rsx! { Loader { text: "...Please Wait" } };
    }

    let all = messages();
    let selected_count = selected().len();
    let all_selected = !all.is_empty() && selected_count == all.len();

    rsx! {
        div {
            class: "page-heading",
            h1 { "Feedback" }
            p { "Manage and review feedback submissions" }
        }

        if !selected().is_empty() {
            div {
                class: "section-toolbar",
                Button {
                    variant: ButtonVariant::Danger,
                    onclick: move |_| delete_many_modal.set(true),
                    Icon { icon: FaTrash, width: 14, height: 14 }
                    span { "Delete ({selected_count})" }
                }
            }
        }

        div {
            class: "table-card",
            table {
                class: "data-table",
                thead {
                    tr {
                        th {
                            input {
                                r#type: "checkbox",
                                checked: all_selected,
                                onchange: {
                                    let all = all.clone();
                                    move |_| {
                                        if all_selected {
                                            selected.set(HashSet::new());
                                        } else {
                                            selected.set(all.iter().map(|f| f.id.clone()).collect());
                                        }
                                    }
                                },
                            }
                        }
                        th { "Name" }
                        th { "Email" }
                        th { "Date" }
                        th { class: "col-actions", "Actions" }
                    }
                }
                tbody {
                    for message in all.iter() {
                        tr {
                            key: "{message.id}",
                            td {
                                input {
                                    r#type: "checkbox",
                                    checked: selected().contains(&message.id),
                                    onchange: {
                                        let id = message.id.clone();
                                        move |_| {
                                            let mut set = selected();
                                            if !set.remove(&id) {
                                                set.insert(id.clone());
                                            }
                                            selected.set(set);
                                        }
                                    },
                                }
                            }
                            td {
                                div {
                                    class: "cell-person",
                                    Icon { icon: FaUser, width: 14, height: 14 }
                                    div {
                                        p { class: "cell-primary", "{message.name}" }
                                        p { class: "cell-secondary", "{message.phone}" }
                                    }
                                }
                            }
                            td {
                                div {
                                    class: "cell-person",
                                    Icon { icon: FaEnvelope, width: 14, height: 14 }
                                    span { "{message.email}" }
                                }
                            }
                            td {
                                if let Some(created) = &message.created_at {
                                    span { {created.chars().take(10).collect::<String>()} }
                                }
                            }
                            td {
                                class: "col-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    class: "btn-sm",
                                    onclick: {
                                        let id = message.id.clone();
                                        move |_| {
                                            if expanded() == Some(id.clone()) {
                                                expanded.set(None);
                                            } else {
                                                expanded.set(Some(id.clone()));
                                            }
                                        }
                                    },
                                    if expanded() == Some(message.id.clone()) { "Hide" } else { "View" }
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    class: "btn-sm",
                                    onclick: {
                                        let id = message.id.clone();
                                        move |_| delete_modal.set(Some(id.clone()))
                                    },
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                        if expanded() == Some(message.id.clone()) {
                            tr {
                                class: "row-detail",
                                td { colspan: 5,
                                    p { class: "cell-message", "{message.message}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        if delete_modal().is_some() {
            Modal {
                title: "Delete Feedback".to_string(),
                caption: "Are you sure you want to delete this message?".to_string(),
                icon_class: "icon-danger".to_string(),
                icon: rsx! { Icon { icon: FaTriangleExclamation, width: 22, height: 22 } },
                confirm_label: "Delete".to_string(),
                confirm_variant: ButtonVariant::Danger,
                on_confirm: confirm_delete,
                on_close: move |_| delete_modal.set(None),
            }
        }

        if delete_many_modal() {
            Modal {
                title: "Delete Selected Feedback".to_string(),
                caption: "Are you sure you want to delete the selected messages?",
                icon_class: "icon-danger".to_string(),
                icon: rsx! { Icon { icon: FaTriangleExclamation, width: 22, height: 22 } },
                confirm_label: "Delete".to_string(),
                confirm_variant: ButtonVariant::Danger,
                on_confirm: confirm_delete_many,
                on_close: move |_| delete_many_modal.set(false),
            }
        }

        ResponseModal { response }
    }
}
