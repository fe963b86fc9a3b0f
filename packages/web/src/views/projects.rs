//! Project editors. Upcoming and past share one view parameterised by
//! category; create vs edit is decided by the form's id.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPencil, FaPlus, FaTrash, FaTriangleExclamation};
use dioxus_free_icons::Icon;
use store::forms::ProjectForm;
use store::models::{Project, ProjectCategory};
use store::validate::{validate_project, FormErrors};
use ui::components::{Button, ButtonVariant, Input, Loader, Modal, SectionCard};
use ui::{use_api, MarkdownEditor, RichText};

use crate::views::{field_error, ActionResponse, DashboardLayout, ResponseModal};

#[component]
pub fn UpcomingProjects() -> Element {
    rsx! {
        DashboardLayout {
            ProjectsView { category: ProjectCategory::Upcoming }
        }
    }
}

#[component]
pub fn PastProjects() -> Element {
    rsx! {
        DashboardLayout {
            ProjectsView { category: ProjectCategory::Past }
        }
    }
}

fn refresh_projects(
    api: api::ApiClient,
    category: ProjectCategory,
    mut projects: Signal<Vec<Project>>,
    mut loading: Signal<bool>,
) {
    spawn(async move {
        loading.set(true);
        match api.projects(category).await {
            Ok(list) => projects.set(list),
            Err(err) => tracing::error!("failed to load {category} projects: {err}"),
        }
        loading.set(false);
    });
}

/// The rich-text fields every project form edits, with their headings.
const EDITOR_FIELDS: [(&str, &str); 5] = [
    ("objective", "Project Objectives"),
    ("importance", "Why It Matters"),
    ("technology", "Technologies"),
    ("partners", "Project Partners"),
    ("output", "Project Output"),
];

fn editor_value(form: &ProjectForm, field: &str) -> String {
    match field {
        "objective" => form.objective.clone(),
        "importance" => form.importance.clone(),
        "technology" => form.technology.clone(),
        "partners" => form.partners.clone(),
        "output" => form.output.clone(),
        _ => String::new(),
    }
}

fn set_editor_value(form: &mut ProjectForm, field: &str, value: String) {
    match field {
        "objective" => form.objective = value,
        "importance" => form.importance = value,
        "technology" => form.technology = value,
        "partners" => form.partners = value,
        "output" => form.output = value,
        _ => {}
    }
}

#[component]
fn ProjectsView(category: ProjectCategory) -> Element {
    let api = use_api();

    let projects = use_signal(Vec::<Project>::new);
    let loading = use_signal(|| true);
    let mut show_form = use_signal(|| false);
    let mut form = use_signal(ProjectForm::default);
    let mut errors = use_signal(|| Option::<FormErrors>::None);
    let mut expanded = use_signal(|| Option::<String>::None);
    let mut delete_modal = use_signal(|| Option::<String>::None);
    let response = use_signal(|| ActionResponse::None);

    {
        let api = api.clone();
        let _loader = use_resource(move || {
            let api = api.clone();
            async move {
                refresh_projects(api, category, projects, loading);
            }
        });
    }

    let submit = {
        let api = api.clone();
        move |_| {
            let payload = form();
            if let Err(form_errors) = validate_project(&payload) {
                errors.set(Some(form_errors));
                return;
            }
            errors.set(None);

            let api = api.clone();
            let mut response = response;
            spawn(async move {
                match api.submit_project(category, &payload).await {
                    Ok(message) => {
                        show_form.set(false);
                        form.set(ProjectForm::default());
                        response.set(Some((true, message)));
                        refresh_projects(api, category, projects, loading);
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
                match api.delete_project(&id).await {
                    Ok(message) => {
                        response.set(Some((true, message)));
                        refresh_projects(api, category, projects, loading);
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
            });
        }
    };

    let editing = form().id.is_some();
    let heading = match category {
        ProjectCategory::Upcoming => "Upcoming projects",
        ProjectCategory::Past => "Past projects",
    };

    if loading() && projects().is_empty() {
        return rsx! { Loader { text: "...Loading" } };
    }

    rsx! {
        div {
            class: "page-heading",
            h1 { "{heading}" }
            p { "Manage your {category} project content here" }
        }

        div {
            class: "section-toolbar",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    form.set(ProjectForm::default());
                    errors.set(None);
                    show_form.set(true);
                },
                Icon { icon: FaPlus, width: 14, height: 14 }
                span { "Add Project" }
            }
        }

        div {
            class: "section-list",
            for project in projects() {
                SectionCard {
                    key: "{project.id}",
                    title: project.title.clone(),
                    open: expanded() == Some(project.id.clone()),
                    on_toggle: {
                        let id = project.id.clone();
                        move |_| {
                            if expanded() == Some(id.clone()) {
                                expanded.set(None);
                            } else {
                                expanded.set(Some(id.clone()));
                            }
                        }
                    },

                    for (field, label) in EDITOR_FIELDS {
                        {
                            let value = match field {
                                "objective" => project.objective.clone(),
                                "importance" => project.importance.clone(),
                                "technology" => project.technology.clone(),
                                "partners" => project.partners.clone(),
                                "output" => project.output.clone(),
                                _ => String::new(),
                            };
                            rsx! {
                                if !value.is_empty() {
                                    div {
                                        class: "detail-block",
                                        strong { "{label}" }
                                        RichText { source: value.clone() }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "section-toolbar",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: {
                                let project = project.clone();
                                move |_| {
                                    form.set(ProjectForm {
                                        id: Some(project.id.clone()),
                                        title: project.title.clone(),
                                        objective: project.objective.clone(),
                                        importance: project.importance.clone(),
                                        technology: project.technology.clone(),
                                        partners: project.partners.clone(),
                                        output: project.output.clone(),
                                    });
                                    errors.set(None);
                                    show_form.set(true);
                                }
                            },
                            Icon { icon: FaPencil, width: 12, height: 12 }
                            span { "Edit" }
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            onclick: {
                                let id = project.id.clone();
                                move |_| delete_modal.set(Some(id.clone()))
                            },
                            Icon { icon: FaTrash, width: 12, height: 12 }
                            span { "Delete" }
                        }
                    }
                }
            }
        }

        if show_form() {
            Modal {
                title: if editing { "Edit Project".to_string() } else { "Add Project".to_string() },
                cancel_label: "Close",
                class: "modal-wide".to_string(),
                on_close: move |_| {
                    show_form.set(false);
                    form.set(ProjectForm::default());
                },
                div {
                    class: "modal-form",
                    Input {
                        label: "Project Title:",
                        placeholder: "Project Title",
                        value: form().title,
                        error: field_error(&errors(), "title"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.title = evt.value()),
                    }

                    for (field, label) in EDITOR_FIELDS {
                        div {
                            class: "form-field",
                            label { class: "form-label", "{label}" }
                            if let Some(err) = field_error(&errors(), field) {
                                p { class: "form-error", "{err}" }
                            }
                            MarkdownEditor {
                                value: editor_value(&form(), field),
                                oninput: move |value: String| form.with_mut(|f| set_editor_value(f, field, value)),
                            }
                        }
                    }

                    Button {
                        variant: ButtonVariant::Success,
                        onclick: submit,
                        if editing { "Edit Project" } else { "Add Project" }
                    }
                }
            }
        }

        if delete_modal().is_some() {
            Modal {
                title: "Delete Project".to_string(),
                caption: "Are you sure you want to delete this Project?".to_string(),
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
