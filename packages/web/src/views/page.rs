//! Dynamic CMS page editor: resolves the URL against the fetched link
//! tree, then edits the page's named sections — title, rich-text details
//! and the image list — against the server copy.

use std::collections::BTreeMap;

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFile, FaTriangleExclamation};
use dioxus_free_icons::Icon;
use store::forms::{PageContentUpdate, SectionPatch, SectionUpdate};
use store::models::{Page, Section, SectionImage};
use store::validate::validate_section_name;
use ui::components::{Button, ButtonVariant, Input, Loader, Modal, SectionCard, SmallLoader};
use ui::{use_api, use_nav_links, MarkdownEditor, RichText};

use crate::views::{ActionResponse, DashboardLayout, NotFound, ResponseModal};

/// Working copy of one section while it is being edited.
#[derive(Clone, Debug, Default, PartialEq)]
struct SectionDraft {
    title: String,
    details: String,
    images: Vec<SectionImage>,
    new_image_url: String,
}

impl SectionDraft {
    fn from_section(section: &Section) -> Self {
        Self {
            title: section.title.clone(),
            details: section.details.clone(),
            images: section.images.clone(),
            new_image_url: String::new(),
        }
    }
}

fn drafts_from_page(page: &Page) -> BTreeMap<String, SectionDraft> {
    page.content
        .iter()
        .map(|(name, section)| (name.clone(), SectionDraft::from_section(section)))
        .collect()
}

/// Build the update payload for one section: kept URLs, plus deletion
/// markers for server images no longer present in the draft.
fn section_update(draft: &SectionDraft, original: Option<&Section>) -> SectionUpdate {
    let kept: Vec<String> = draft.images.iter().map(|img| img.url.clone()).collect();
    let deleted: Vec<SectionImage> = original
        .map(|section| {
            section
                .images
                .iter()
                .filter(|img| !kept.contains(&img.url))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    SectionUpdate {
        title: draft.title.clone(),
        details: draft.details.clone(),
        keep_existing_images: !kept.is_empty(),
        existing_images: kept,
        deleted_images: deleted,
    }
}

#[component]
pub fn CmsPage(segments: Vec<String>) -> Element {
    let nav_links = use_nav_links();

    let path = format!("/{}", segments.join("/"));

    if nav_links.loading() {
        return rsx! { Loader { text: "...Loading" } };
    }

    let Some(link) = nav_links.find_by_path(&path) else {
        return rsx! { NotFound {} };
    };

    rsx! {
        DashboardLayout {
            SectionEditor {
                page_id: link.page_id.clone(),
                page_name: link.page_name.clone(),
            }
        }
    }
}

#[component]
fn SectionEditor(page_id: String, page_name: String) -> Element {
    let api = use_api();

    let mut page = use_signal(|| Option::<Page>::None);
    let mut drafts = use_signal(BTreeMap::<String, SectionDraft>::new);
    let mut loading = use_signal(|| true);
    let mut busy = use_signal(|| false);

    let mut active_section = use_signal(|| Option::<String>::None);
    let mut add_modal = use_signal(|| false);
    let mut section_name = use_signal(String::new);
    let mut section_name_error = use_signal(|| Option::<String>::None);
    let mut delete_modal = use_signal(|| Option::<String>::None);
    let response = use_signal(|| ActionResponse::None);

    {
        let api = api.clone();
        let page_id = page_id.clone();
        let _loader = use_resource(move || {
            let api = api.clone();
            let page_id = page_id.clone();
            async move {
                loading.set(true);
                match api.page(&page_id).await {
                    Ok(fetched) => {
                        drafts.set(drafts_from_page(&fetched));
                        page.set(Some(fetched));
                    }
                    Err(err) => tracing::error!("failed to load page {page_id}: {err}"),
                }
                loading.set(false);
            }
        });
    }

    // One shared path for every content mutation: send, then mirror the
    // returned document.
    let apply_update = {
        let api = api.clone();
        let page_id = page_id.clone();
        move |update: PageContentUpdate, mut response: Signal<ActionResponse>| {
            let api = api.clone();
            let page_id = page_id.clone();
            spawn(async move {
                busy.set(true);
                match api.update_page_content(&page_id, &update).await {
                    Ok((updated, message)) => {
                        drafts.set(drafts_from_page(&updated));
                        page.set(Some(updated));
                        response.set(Some((true, message)));
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
                busy.set(false);
            });
        }
    };

    let add_section = {
        let apply_update = apply_update.clone();
        move |_| {
            let name = section_name();
            if let Err(err) = validate_section_name(&name) {
                section_name_error.set(Some(err));
                return;
            }
            section_name_error.set(None);
            section_name.set(String::new());
            add_modal.set(false);
            apply_update(PageContentUpdate::new_section(&name), response);
        }
    };

    let update_section = {
        let apply_update = apply_update.clone();
        move |name: String| {
            let Some(draft) = drafts().get(&name).cloned() else {
                return;
            };
            let original = page().and_then(|p| p.content.get(&name).cloned());
            let mut content = BTreeMap::new();
            content.insert(
                name,
                SectionPatch::Update(section_update(&draft, original.as_ref())),
            );
            apply_update(PageContentUpdate { content }, response);
        }
    };

    let confirm_delete = {
        let apply_update = apply_update.clone();
        move |_| {
            let Some(name) = delete_modal() else {
                return;
            };
            delete_modal.set(None);
            apply_update(PageContentUpdate::delete_section(&name), response);
        }
    };

    if loading() && page().is_none() {
        return rsx! { Loader { text: "...Loading" } };
    }

    rsx! {
        div {
            class: "page-heading",
            h1 { "{page_name} CMS" }
            p { "Manage your {page_id} content here" }
        }

        div {
            class: "section-list",
            for (name, draft) in drafts() {
                SectionCard {
                    key: "{name}",
                    title: name.clone(),
                    open: active_section() == Some(name.clone()),
                    on_toggle: {
                        let name = name.clone();
                        move |_| {
                            if active_section() == Some(name.clone()) {
                                active_section.set(None);
                            } else {
                                active_section.set(Some(name.clone()));
                            }
                        }
                    },

                    if busy() {
                        div { class: "section-busy", SmallLoader {} }
                    }

                    Input {
                        label: "Title",
                        value: draft.title.clone(),
                        oninput: {
                            let name = name.clone();
                            move |evt: FormEvent| drafts.with_mut(|d| {
                                if let Some(draft) = d.get_mut(&name) {
                                    draft.title = evt.value();
                                }
                            })
                        },
                    }

                    div {
                        class: "form-field",
                        label { class: "form-label", "Details" }
                        MarkdownEditor {
                            value: draft.details.clone(),
                            placeholder: "Section details...",
                            oninput: {
                                let name = name.clone();
                                move |value: String| drafts.with_mut(|d| {
                                    if let Some(draft) = d.get_mut(&name) {
                                        draft.details = value.clone();
                                    }
                                })
                            },
                        }
                    }

                    div {
                        class: "form-field",
                        label { class: "form-label", "Images" }
                        div {
                            class: "image-grid",
                            for (idx, image) in draft.images.iter().enumerate() {
                                div {
                                    key: "{image.url}",
                                    class: "image-tile",
                                    img { src: "{image.url}", alt: "Section image {idx}" }
                                    button {
                                        r#type: "button",
                                        class: "image-remove",
                                        onclick: {
                                            let name = name.clone();
                                            move |_| drafts.with_mut(|d| {
                                                if let Some(draft) = d.get_mut(&name) {
                                                    draft.images.remove(idx);
                                                }
                                            })
                                        },
                                        "×"
                                    }
                                }
                            }
                        }
                        div {
                            class: "inline-form",
                            Input {
                                placeholder: "https://cdn.example/image.png",
                                value: draft.new_image_url.clone(),
                                oninput: {
                                    let name = name.clone();
                                    move |evt: FormEvent| drafts.with_mut(|d| {
                                        if let Some(draft) = d.get_mut(&name) {
                                            draft.new_image_url = evt.value();
                                        }
                                    })
                                },
                            }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: {
                                    let name = name.clone();
                                    move |_| drafts.with_mut(|d| {
                                        if let Some(draft) = d.get_mut(&name) {
                                            let url = draft.new_image_url.trim().to_string();
                                            if !url.is_empty() {
                                                draft.images.push(SectionImage {
                                                    url,
                                                    public_id: String::new(),
                                                });
                                                draft.new_image_url.clear();
                                            }
                                        }
                                    })
                                },
                                "Add Image"
                            }
                        }
                        p { class: "form-hint", "Images are hosted externally; paste the media URL." }
                    }

                    if !draft.details.is_empty() {
                        div {
                            class: "form-field",
                            label { class: "form-label", "Preview" }
                            RichText { source: draft.details.clone() }
                        }
                    }

                    div {
                        class: "section-toolbar",
                        Button {
                            variant: ButtonVariant::Success,
                            disabled: busy(),
                            onclick: {
                                let update_section = update_section.clone();
                                let name = name.clone();
                                move |_| update_section(name.clone())
                            },
                            "Update Section"
                        }
                        Button {
                            variant: ButtonVariant::Danger,
                            disabled: busy(),
                            onclick: {
                                let name = name.clone();
                                move |_| delete_modal.set(Some(name.clone()))
                            },
                            "Delete Section"
                        }
                    }
                }
            }
        }

        div {
            class: "section-toolbar",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    section_name_error.set(None);
                    add_modal.set(true);
                },
                Icon { icon: FaFile, width: 14, height: 14 }
                span { "Add Page Section" }
            }
        }

        if add_modal() {
            Modal {
                title: "Add Page Section".to_string(),
                confirm_label: "Add".to_string(),
                confirm_variant: ButtonVariant::Success,
                on_confirm: add_section,
                on_close: move |_| add_modal.set(false),
                div {
                    if let Some(err) = section_name_error() {
                        p { class: "form-error", "{err}" }
                    }
                    Input {
                        placeholder: "e.g. Banner, Hero, etc.",
                        value: section_name(),
                        oninput: move |evt: FormEvent| section_name.set(evt.value()),
                    }
                }
            }
        }

        if let Some(name) = delete_modal() {
            Modal {
                title: "Delete Selected Section".to_string(),
                caption: "Are you sure you want to delete the {name} section?",
                icon_class: "icon-danger".to_string(),
                icon: rsx! { Icon { icon: FaTriangleExclamation, width: 22, height: 22 } },
                confirm_label: "Delete".to_string(),
                confirm_variant: ButtonVariant::Danger,
                on_confirm: confirm_delete,
                on_close: move |_| delete_modal.set(None),
            }
        }

        ResponseModal { response }

        if drafts().is_empty() {
            div {
                class: "empty-state",
                p { "This page has no sections yet. Add one to get started." }
            }
        }
    }
}
