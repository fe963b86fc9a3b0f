//! Newsroom editor: article form with a media list, plus the article
//! list with edit prefill and delete.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPencil, FaTrash, FaTriangleExclamation};
use dioxus_free_icons::Icon;
use store::forms::NewsForm;
use store::models::{MediaItem, MediaKind, NewsItem};
use store::validate::{validate_news, FormErrors};
use ui::components::{
    Button, ButtonVariant, Input, Loader, Modal, Select, SelectOption, TextArea,
};
use ui::{use_api, MarkdownEditor, RichText};

use crate::views::{field_error, ActionResponse, DashboardLayout, ResponseModal};

fn refresh_news(api: api::ApiClient, mut news: Signal<Vec<NewsItem>>, mut loading: Signal<bool>) {
    spawn(async move {
        loading.set(true);
        match api.news().await {
            Ok(list) => news.set(list),
            Err(err) => tracing::error!("failed to load news: {err}"),
        }
        loading.set(false);
    });
}

#[component]
pub fn News() -> Element {
    rsx! {
        DashboardLayout {
            NewsView {}
        }
    }
}

#[component]
fn NewsView() -> Element {
    let api = use_api();

    let news = use_signal(Vec::<NewsItem>::new);
    let loading = use_signal(|| true);
    let mut form = use_signal(NewsForm::default);
    let mut errors = use_signal(|| Option::<FormErrors>::None);
    let mut new_media_url = use_signal(String::new);
    let mut new_media_kind = use_signal(|| "image".to_string());
    let mut delete_modal = use_signal(|| Option::<String>::None);
    let response = use_signal(|| ActionResponse::None);

    {
        let api = api.clone();
        let _loader = use_resource(move || {
            let api = api.clone();
            async move {
                refresh_news(api, news, loading);
            }
        });
    }

    let submit = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let payload = form();
            if let Err(form_errors) = validate_news(&payload) {
                errors.set(Some(form_errors));
                return;
            }
            errors.set(None);

            let api = api.clone();
            let mut response = response;
            spawn(async move {
                let result = match &payload.id {
                    Some(id) if !id.is_empty() => api.edit_news(id, &payload).await,
                    _ => api.create_news(&payload).await,
                };
                match result {
                    Ok(message) => {
                        form.set(NewsForm::default());
                        response.set(Some((true, message)));
                        refresh_news(api, news, loading);
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
            });
        }
    };

    let add_media = move |_| {
        let url = new_media_url().trim().to_string();
        if url.is_empty() {
            return;
        }
        let kind = if new_media_kind() == "video" {
            MediaKind::Video
        } else {
            MediaKind::Image
        };
        form.with_mut(|f| {
            f.media.push(MediaItem {
                kind,
                thumbnail: (kind == MediaKind::Image).then(|| url.clone()),
                url,
            })
        });
        new_media_url.set(String::new());
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
                match api.delete_news(&id).await {
                    Ok(message) => {
                        response.set(Some((true, message)));
                        refresh_news(api, news, loading);
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
            });
        }
    };

    let editing = form().id.is_some();
    let media_items = form().media;

    if loading() && news().is_empty() {
        return rsx! { Loader { text: "...Loading" } };
    }

    rsx! {
        div {
            class: "page-heading",
            h1 { "News Management" }
            p { "Create, edit and manage news articles" }
        }

        form {
            class: "panel-card",
            onsubmit: submit,
            h2 { class: "panel-subtitle", if editing { "Edit News" } else { "Add News" } }

            Input {
                label: "Title",
                placeholder: "Enter news title",
                value: form().title,
                error: field_error(&errors(), "title"),
                oninput: move |evt: FormEvent| form.with_mut(|f| f.title = evt.value()),
            }
            Input {
                label: "Date",
                r#type: "date",
                value: form().date,
                error: field_error(&errors(), "date"),
                oninput: move |evt: FormEvent| form.with_mut(|f| f.date = evt.value()),
            }
            Input {
                label: "Thumbnail URL",
                placeholder: "https://cdn.example/thumb.png",
                value: form().thumbnail,
                error: field_error(&errors(), "thumbnail"),
                oninput: move |evt: FormEvent| form.with_mut(|f| f.thumbnail = evt.value()),
            }
            TextArea {
                label: "Brief",
                placeholder: "Short description shown in listings",
                value: form().brief,
                error: field_error(&errors(), "brief"),
                oninput: move |evt: FormEvent| form.with_mut(|f| f.brief = evt.value()),
            }

            div {
                class: "form-field",
                label { class: "form-label", "Content" }
                if let Some(err) = field_error(&errors(), "content") {
                    p { class: "form-error", "{err}" }
                }
                MarkdownEditor {
                    value: form().content,
                    rows: 10,
                    placeholder: "Full article...",
                    oninput: move |value: String| form.with_mut(|f| f.content = value),
                }
            }

            div {
                class: "form-field",
                label { class: "form-label", "Media" }
                ul {
                    class: "chip-list",
                    for (i, item) in media_items.iter().enumerate() {
                        li {
                            key: "{item.url}-{i}",
                            class: "chip",
                            span { "{item.kind:?}" }
                            span { class: "chip-detail", "{item.url}" }
                            button {
                                r#type: "button",
                                class: "icon-btn icon-btn-danger",
                                onclick: move |_| {
                                    form.with_mut(|f| { f.media.remove(i); });
                                },
                                Icon { icon: FaTrash, width: 12, height: 12 }
                            }
                        }
                    }
                }
                div {
                    class: "inline-form",
                    Select {
                        options: vec![
                            SelectOption::new("image", "Image"),
                            SelectOption::new("video", "Video"),
                        ],
                        value: new_media_kind(),
                        prompt: "Media type",
                        onchange: move |evt: FormEvent| new_media_kind.set(evt.value()),
                    }
                    Input {
                        placeholder: "https://cdn.example/media.mp4",
                        value: new_media_url(),
                        oninput: move |evt: FormEvent| new_media_url.set(evt.value()),
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: add_media,
                        "Add Media"
                    }
                }
            }

            div {
                class: "section-toolbar",
                Button {
                    variant: ButtonVariant::Success,
                    r#type: "submit",
                    if editing { "Save News" } else { "Add News" }
                }
                if editing {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            form.set(NewsForm::default());
                            errors.set(None);
                        },
                        "Cancel Edit"
                    }
                }
            }
        }

        div {
            class: "card-list",
            for item in news() {
                div {
                    key: "{item.id}",
                    class: "panel-card news-card",
                    img { class: "news-thumb", src: "{item.thumbnail}", alt: "{item.title}" }
                    div {
                        class: "news-body",
                        h3 { class: "card-title", "{item.title}" }
                        p { class: "card-meta", "{item.date}" }
                        p { "{item.brief}" }
                        RichText { source: item.content.clone() }
                        div {
                            class: "section-toolbar",
                            Button {
                                variant: ButtonVariant::Outline,
                                class: "btn-sm",
                                onclick: {
                                    let item = item.clone();
                                    move |_| {
                                        form.set(NewsForm {
                                            id: Some(item.id.clone()),
                                            title: item.title.clone(),
                                            brief: item.brief.clone(),
                                            content: item.content.clone(),
                                            thumbnail: item.thumbnail.clone(),
                                            // Date inputs want plain YYYY-MM-DD.
                                            date: item.date.chars().take(10).collect(),
                                            media: item.media.clone(),
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
                                    let id = item.id.clone();
                                    move |_| delete_modal.set(Some(id.clone()))
                                },
                                Icon { icon: FaTrash, width: 12, height: 12 }
                                span { "Delete" }
                            }
                        }
                    }
                }
            }
        }

        if delete_modal().is_some() {
            Modal {
                title: "Delete News".to_string(),
                caption: "Are you sure you want to delete this article?".to_string(),
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
