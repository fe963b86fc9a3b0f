//! Navigation-link editor: CRUD for top-level links and their children,
//! plus explicit reordering persisted as an `order` index.

use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowDown, FaArrowUp, FaChevronDown, FaChevronUp, FaFloppyDisk, FaPencil, FaPlus, FaTrash,
    FaTriangleExclamation,
};
use dioxus_free_icons::Icon;
use store::models::PageLink;
use store::validate::{validate_page_link, FormErrors};
use ui::components::{Button, ButtonVariant, Input, Loader, Modal};
use ui::{use_api, use_nav_links};

use crate::views::{field_error, ActionResponse};

/// What the delete confirmation refers to.
#[derive(Clone, PartialEq)]
enum Deleting {
    Link(String),
    Child { parent_id: String, index: usize },
}

#[component]
pub(crate) fn NavSection(response: Signal<ActionResponse>) -> Element {
    let mut response = response;
    let api = use_api();
    let nav_links = use_nav_links();

    let mut form_open = use_signal(|| false);
    let mut form = use_signal(PageLink::default);
    let mut errors = use_signal(|| Option::<FormErrors>::None);
    // Some(id) while editing an existing top-level link.
    let mut editing_id = use_signal(|| Option::<String>::None);
    // Some(parent id) while adding or editing a child.
    let mut parent_id = use_signal(|| Option::<String>::None);
    let mut child_index = use_signal(|| Option::<usize>::None);

    let mut deleting = use_signal(|| Option::<Deleting>::None);
    let mut expanded = use_signal(HashSet::<String>::new);
    let mut order_dirty = use_signal(|| false);
    let mut saving_order = use_signal(|| false);

    let mut close_form = move || {
        form_open.set(false);
        form.set(PageLink::default());
        errors.set(None);
        editing_id.set(None);
        parent_id.set(None);
        child_index.set(None);
    };

    let submit = {
        let api = api.clone();
        let nav_links = nav_links.clone();
        move |_| {
            let mut link = form();
            // Fall back to derived values the way the original form did.
            if link.page_id.trim().is_empty() {
                link.page_id = link.page_name.trim().to_lowercase().replace(' ', "-");
            }
            if link.page_type.trim().is_empty() {
                link.page_type = "custom".to_string();
            }
            if link.icon.trim().is_empty() {
                link.icon = "fa:FaRegFile".to_string();
            }

            let is_child = parent_id().is_some();
            if let Err(form_errors) = validate_page_link(&link, is_child) {
                errors.set(Some(form_errors));
                return;
            }
            errors.set(None);

            let api = api.clone();
            let nav_links = nav_links.clone();
            spawn(async move {
                let result = if let Some(pid) = parent_id() {
                    let parent = nav_links.links().into_iter().find(|l| l.id == pid);
                    match parent {
                        Some(mut parent) => {
                            match child_index() {
                                Some(index) if index < parent.children.len() => {
                                    parent.children[index] = link;
                                }
                                _ => parent.children.push(link),
                            }
                            api.update_page(&parent.id, &parent).await
                        }
                        None => {
                            response.set(Some((false, "Parent link no longer exists".into())));
                            return;
                        }
                    }
                } else if let Some(id) = editing_id() {
                    // Keep the children the form does not edit.
                    let mut updated = link;
                    if let Some(current) = nav_links.links().into_iter().find(|l| l.id == id) {
                        updated.children = current.children;
                        updated.order = current.order;
                    }
                    api.update_page(&id, &updated).await
                } else {
                    api.create_page(&link).await
                };

                match result {
                    Ok(message) => {
                        response.set(Some((true, message)));
                        close_form();
                        nav_links.refresh();
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
            });
        }
    };

    let confirm_delete = {
        let api = api.clone();
        let nav_links = nav_links.clone();
        move |_| {
            let Some(target) = deleting() else {
                return;
            };
            let api = api.clone();
            let nav_links = nav_links.clone();
            spawn(async move {
                let result = match target {
                    Deleting::Link(id) => api.delete_page(&id).await,
                    Deleting::Child { parent_id, index } => {
                        let parent = nav_links.links().into_iter().find(|l| l.id == parent_id);
                        match parent {
                            Some(mut parent) if index < parent.children.len() => {
                                parent.children.remove(index);
                                api.update_page(&parent.id, &parent).await
                            }
                            _ => {
                                response.set(Some((false, "Link no longer exists".into())));
                                deleting.set(None);
                                return;
                            }
                        }
                    }
                };
                deleting.set(None);
                match result {
                    Ok(message) => {
                        response.set(Some((true, message)));
                        nav_links.refresh();
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
            });
        }
    };

    // Reorder locally; persisted only by the explicit save button.
    let move_link = {
        let nav_links = nav_links.clone();
        move |index: usize, delta: i64| {
            let mut links = nav_links.links();
            let target = index as i64 + delta;
            if target < 0 || target as usize >= links.len() {
                return;
            }
            links.swap(index, target as usize);
            // Pin the new order locally so the sorted view keeps it.
            for (i, link) in links.iter_mut().enumerate() {
                link.order = Some(i as u32);
            }
            nav_links.set_links(links);
            order_dirty.set(true);
        }
    };

    let save_order = {
        let api = api.clone();
        let nav_links = nav_links.clone();
        move |_| {
            if !order_dirty() || saving_order() {
                return;
            }
            let api = api.clone();
            let nav_links = nav_links.clone();
            spawn(async move {
                saving_order.set(true);
                let links = nav_links.links();
                let mut failed = None;
                for (i, mut link) in links.into_iter().enumerate() {
                    link.order = Some(i as u32);
                    if let Err(err) = api.update_page(&link.id.clone(), &link).await {
                        failed = Some(err.to_string());
                        break;
                    }
                }
                saving_order.set(false);
                match failed {
                    Some(err) => response.set(Some((false, err))),
                    None => {
                        order_dirty.set(false);
                        response.set(Some((true, "Navigation order saved".into())));
                        nav_links.refresh();
                    }
                }
            });
        }
    };

    let links = nav_links.links();

    rsx! {
        div {
            class: "section-toolbar",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    close_form();
                    form_open.set(true);
                },
                Icon { icon: FaPlus, width: 14, height: 14 }
                span { "Add Link" }
            }
            if order_dirty() {
                Button {
                    variant: ButtonVariant::Success,
                    disabled: saving_order(),
                    onclick: save_order,
                    Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                    span { if saving_order() { "Saving..." } else { "Save Order" } }
                }
            }
        }

        if nav_links.loading() && links.is_empty() {
            Loader { text: "...Loading" }
        }

        ul {
            class: "link-list",
            for (index, link) in links.iter().enumerate() {
                li {
                    key: "{link.id}",
                    class: "link-row",
                    div {
                        class: "link-row-main",
                        span { class: "link-name", "{link.page_name}" }
                        span { class: "link-path", "{link.path}" }
                        div {
                            class: "link-actions",
                            button {
                                r#type: "button",
                                class: "icon-btn",
                                disabled: index == 0,
                                onclick: {
                                    let mut move_link = move_link.clone();
                                    move |_| move_link(index, -1)
                                },
                                Icon { icon: FaArrowUp, width: 12, height: 12 }
                            }
                            button {
                                r#type: "button",
                                class: "icon-btn",
                                disabled: index + 1 == links.len(),
                                onclick: {
                                    let mut move_link = move_link.clone();
                                    move |_| move_link(index, 1)
                                },
                                Icon { icon: FaArrowDown, width: 12, height: 12 }
                            }
                            button {
                                r#type: "button",
                                class: "icon-btn",
                                onclick: {
                                    let link = link.clone();
                                    move |_| {
                                        form.set(link.clone());
                                        editing_id.set(Some(link.id.clone()));
                                        parent_id.set(None);
                                        child_index.set(None);
                                        errors.set(None);
                                        form_open.set(true);
                                    }
                                },
                                Icon { icon: FaPencil, width: 12, height: 12 }
                            }
                            button {
                                r#type: "button",
                                class: "icon-btn",
                                onclick: {
                                    let id = link.id.clone();
                                    move |_| {
                                        form.set(PageLink::default());
                                        editing_id.set(None);
                                        parent_id.set(Some(id.clone()));
                                        child_index.set(None);
                                        errors.set(None);
                                        form_open.set(true);
                                    }
                                },
                                Icon { icon: FaPlus, width: 12, height: 12 }
                            }
                            button {
                                r#type: "button",
                                class: "icon-btn icon-btn-danger",
                                onclick: {
                                    let id = link.id.clone();
                                    move |_| deleting.set(Some(Deleting::Link(id.clone())))
                                },
                                Icon { icon: FaTrash, width: 12, height: 12 }
                            }
                            if !link.children.is_empty() {
                                button {
                                    r#type: "button",
                                    class: "icon-btn",
                                    onclick: {
                                        let id = link.id.clone();
                                        move |_| {
                                            let mut set = expanded();
                                            if !set.remove(&id) {
                                                set.insert(id.clone());
                                            }
                                            expanded.set(set);
                                        }
                                    },
                                    if expanded().contains(&link.id) {
                                        Icon { icon: FaChevronUp, width: 12, height: 12 }
                                    } else {
                                        Icon { icon: FaChevronDown, width: 12, height: 12 }
                                    }
                                }
                            }
                        }
                    }

                    if expanded().contains(&link.id) {
                        ul {
                            class: "link-children",
                            for (ci, child) in link.children.iter().enumerate() {
                                li {
                                    key: "{link.id}-{ci}",
                                    class: "link-row link-row-child",
                                    span { class: "link-name", "{child.page_name}" }
                                    span { class: "link-path", "{child.path}" }
                                    div {
                                        class: "link-actions",
                                        button {
                                            r#type: "button",
                                            class: "icon-btn",
                                            onclick: {
                                                let child = child.clone();
                                                let pid = link.id.clone();
                                                move |_| {
                                                    form.set(child.clone());
                                                    editing_id.set(None);
                                                    parent_id.set(Some(pid.clone()));
                                                    child_index.set(Some(ci));
                                                    errors.set(None);
                                                    form_open.set(true);
                                                }
                                            },
                                            Icon { icon: FaPencil, width: 12, height: 12 }
                                        }
                                        button {
                                            r#type: "button",
                                            class: "icon-btn icon-btn-danger",
                                            onclick: {
                                                let pid = link.id.clone();
                                                move |_| deleting.set(Some(Deleting::Child {
                                                    parent_id: pid.clone(),
                                                    index: ci,
                                                }))
                                            },
                                            Icon { icon: FaTrash, width: 12, height: 12 }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if form_open() {
            Modal {
                title: if editing_id().is_some() || child_index().is_some() {
                    "Edit Link".to_string()
                } else if parent_id().is_some() {
                    "Add Child Link".to_string()
                } else {
                    "Add Link".to_string()
                },
                cancel_label: "Close",
                on_close: move |_| close_form(),
                div {
                    class: "modal-form",
                    Input {
                        label: "Page Name",
                        placeholder: "About Us",
                        value: form().page_name,
                        error: field_error(&errors(), "page_name"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.page_name = evt.value()),
                    }
                    Input {
                        label: "Path",
                        placeholder: "/about-us",
                        value: form().path,
                        error: field_error(&errors(), "path"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.path = evt.value()),
                    }
                    if parent_id().is_none() {
                        Input {
                            label: "Page ID",
                            placeholder: "about-us",
                            value: form().page_id,
                            error: field_error(&errors(), "page_id"),
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.page_id = evt.value()),
                        }
                        Input {
                            label: "Page Type",
                            placeholder: "custom",
                            value: form().page_type,
                            error: field_error(&errors(), "page_type"),
                            oninput: move |evt: FormEvent| form.with_mut(|f| f.page_type = evt.value()),
                        }
                    }
                    Input {
                        label: "Icon",
                        placeholder: "fa:FaRegFile",
                        value: form().icon,
                        error: field_error(&errors(), "icon"),
                        oninput: move |evt: FormEvent| form.with_mut(|f| f.icon = evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: submit,
                        if editing_id().is_some() || child_index().is_some() { "Save Link" } else { "Add Link" }
                    }
                }
            }
        }

        if deleting().is_some() {
            Modal {
                title: "Delete Link".to_string(),
                caption: "Are you sure you want to delete this link?".to_string(),
                icon_class: "icon-danger".to_string(),
                icon: rsx! { Icon { icon: FaTriangleExclamation, width: 22, height: 22 } },
                confirm_label: "Delete".to_string(),
                confirm_variant: ButtonVariant::Danger,
                on_confirm: confirm_delete,
                on_close: move |_| deleting.set(None),
            }
        }
    }
}
