//! Footer editor: contact text fields, social links and link columns,
//! saved as one document.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaFloppyDisk, FaPlus, FaTrash};
use dioxus_free_icons::Icon;
use store::models::{FooterColumn, FooterConfig, FooterLink, SocialLink};
use ui::components::{Button, ButtonVariant, Input, Loader};
use ui::use_api;

use crate::views::ActionResponse;

#[component]
pub(crate) fn FooterSection(response: Signal<ActionResponse>) -> Element {
    let mut response = response;
    let api = use_api();

    let mut footer = use_signal(FooterConfig::default);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);

    let mut new_social = use_signal(SocialLink::default);
    let mut new_column_title = use_signal(String::new);

    {
        let api = api.clone();
        let _loader = use_resource(move || {
            let api = api.clone();
            async move {
                match api.footer().await {
                    Ok(config) => footer.set(config),
                    Err(err) => tracing::error!("failed to load footer: {err}"),
                }
                loading.set(false);
            }
        });
    }

    let save = {
        let api = api.clone();
        move |_| {
            if saving() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                saving.set(true);
                let current = footer();
                match api.update_footer(&current.id, &current).await {
                    Ok((saved, message)) => {
                        footer.set(saved);
                        response.set(Some((true, message)));
                    }
                    Err(err) => response.set(Some((false, err.to_string()))),
                }
                saving.set(false);
            });
        }
    };

    let add_social = move |_| {
        let social = new_social();
        if social.platform.trim().is_empty() || social.url.trim().is_empty() {
            return;
        }
        footer.with_mut(|f| f.social_links.push(social));
        new_social.set(SocialLink::default());
    };

    let add_column = move |_| {
        let title = new_column_title().trim().to_string();
        if title.is_empty() {
            return;
        }
        footer.with_mut(|f| {
            f.columns.push(FooterColumn {
                title,
                links: Vec::new(),
            })
        });
        new_column_title.set(String::new());
    };

    if loading() {
        return rsx! { Loader { text: "...Loading" } };
    }

    let current = footer();

    rsx! {
        div {
            class: "footer-editor",

            h2 { class: "panel-subtitle", "Contact" }
            div {
                class: "form-grid",
                Input {
                    label: "Logo URL",
                    placeholder: "https://cdn.example/logo.png",
                    value: current.logo.clone().unwrap_or_default(),
                    oninput: move |evt: FormEvent| footer.with_mut(|f| {
                        let value = evt.value();
                        f.logo = if value.trim().is_empty() { None } else { Some(value) };
                    }),
                }
                Input {
                    label: "Tagline",
                    placeholder: "Research for everyone",
                    value: current.tagline.clone(),
                    oninput: move |evt: FormEvent| footer.with_mut(|f| f.tagline = evt.value()),
                }
                Input {
                    label: "Address",
                    placeholder: "1 Science Way",
                    value: current.address.clone(),
                    oninput: move |evt: FormEvent| footer.with_mut(|f| f.address = evt.value()),
                }
                Input {
                    label: "Email",
                    placeholder: "info@example.org",
                    value: current.email.clone(),
                    oninput: move |evt: FormEvent| footer.with_mut(|f| f.email = evt.value()),
                }
                Input {
                    label: "Phone",
                    placeholder: "08012345678",
                    value: current.phone.clone(),
                    oninput: move |evt: FormEvent| footer.with_mut(|f| f.phone = evt.value()),
                }
                Input {
                    label: "Copyright line",
                    placeholder: "© 2024 The Organization",
                    value: current.copyright.clone(),
                    oninput: move |evt: FormEvent| footer.with_mut(|f| f.copyright = evt.value()),
                }
            }

            h2 { class: "panel-subtitle", "Social links" }
            ul {
                class: "chip-list",
                for (i, social) in current.social_links.iter().enumerate() {
                    li {
                        key: "{social.platform}-{i}",
                        class: "chip",
                        span { "{social.platform}" }
                        span { class: "chip-detail", "{social.url}" }
                        button {
                            r#type: "button",
                            class: "icon-btn icon-btn-danger",
                            onclick: move |_| {
                                footer.with_mut(|f| { f.social_links.remove(i); });
                            },
                            Icon { icon: FaTrash, width: 12, height: 12 }
                        }
                    }
                }
            }
            div {
                class: "inline-form",
                Input {
                    placeholder: "Platform",
                    value: new_social().platform,
                    oninput: move |evt: FormEvent| new_social.with_mut(|s| s.platform = evt.value()),
                }
                Input {
                    placeholder: "https://...",
                    value: new_social().url,
                    oninput: move |evt: FormEvent| new_social.with_mut(|s| s.url = evt.value()),
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: add_social,
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add" }
                }
            }

            h2 { class: "panel-subtitle", "Link columns" }
            div {
                class: "column-grid",
                for (ci, column) in current.columns.iter().enumerate() {
                    div {
                        key: "{ci}",
                        class: "footer-column",
                        div {
                            class: "footer-column-header",
                            Input {
                                value: column.title.clone(),
                                oninput: move |evt: FormEvent| footer.with_mut(|f| {
                                    if let Some(col) = f.columns.get_mut(ci) {
                                        col.title = evt.value();
                                    }
                                }),
                            }
                            button {
                                r#type: "button",
                                class: "icon-btn icon-btn-danger",
                                onclick: move |_| {
                                    footer.with_mut(|f| { f.columns.remove(ci); });
                                },
                                Icon { icon: FaTrash, width: 12, height: 12 }
                            }
                        }
                        for (li_idx, link) in column.links.iter().enumerate() {
                            div {
                                key: "{ci}-{li_idx}",
                                class: "footer-column-link",
                                Input {
                                    placeholder: "Text",
                                    value: link.text.clone(),
                                    oninput: move |evt: FormEvent| footer.with_mut(|f| {
                                        if let Some(l) = f.columns.get_mut(ci).and_then(|c| c.links.get_mut(li_idx)) {
                                            l.text = evt.value();
                                        }
                                    }),
                                }
                                Input {
                                    placeholder: "URL",
                                    value: link.url.clone(),
                                    oninput: move |evt: FormEvent| footer.with_mut(|f| {
                                        if let Some(l) = f.columns.get_mut(ci).and_then(|c| c.links.get_mut(li_idx)) {
                                            l.url = evt.value();
                                        }
                                    }),
                                }
                                button {
                                    r#type: "button",
                                    class: "icon-btn icon-btn-danger",
                                    onclick: move |_| {
                                        footer.with_mut(|f| {
                                            if let Some(col) = f.columns.get_mut(ci) {
                                                col.links.remove(li_idx);
                                            }
                                        });
                                    },
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "btn-sm",
                            onclick: move |_| {
                                footer.with_mut(|f| {
                                    if let Some(col) = f.columns.get_mut(ci) {
                                        col.links.push(FooterLink::default());
                                    }
                                });
                            },
                            Icon { icon: FaPlus, width: 12, height: 12 }
                            span { "Add link" }
                        }
                    }
                }
            }
            div {
                class: "inline-form",
                Input {
                    placeholder: "Column title",
                    value: new_column_title(),
                    oninput: move |evt: FormEvent| new_column_title.set(evt.value()),
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: add_column,
                    Icon { icon: FaPlus, width: 14, height: 14 }
                    span { "Add column" }
                }
            }

            div {
                class: "section-toolbar",
                Button {
                    variant: ButtonVariant::Success,
                    disabled: saving(),
                    onclick: save,
                    Icon { icon: FaFloppyDisk, width: 14, height: 14 }
                    span { if saving() { "Saving..." } else { "Save Footer" } }
                }
            }
        }
    }
}
