//! Dashboard shell: role-gated sidebar plus the routed content area.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaBars, FaCalendarDays, FaClockRotateLeft, FaCode, FaComments, FaFile, FaFilePdf, FaHouse,
    FaLightbulb, FaLock, FaNewspaper,
};
use dioxus_free_icons::Icon;
use store::forms::EditAdminForm;
use store::validate::{validate_edit_admin, FormErrors};
use store::AdminRole;
use ui::components::{Button, ButtonVariant, Input, Loader, Modal};
use ui::{sign_in, use_api, use_auth, use_nav_links, LogoutButton};

use crate::views::{dashboard_route, field_error};
use crate::Route;

/// Redirects to the login page unless the stored admin has `role`.
/// Enforcement proper lives on the backend; this only keeps honest users
/// out of the wrong dashboard.
#[component]
pub fn RequireRole(role: AdminRole, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        let state = auth();
        if !state.loading && state.role() != Some(role) {
            nav.replace(Route::Login {});
        }
    });

    if auth().loading {
        return rsx! { Loader { text: "Please wait..." } };
    }
    if auth().role() != Some(role) {
        return rsx! {};
    }

    rsx! {
        {children}
    }
}

/// One entry in the sidebar.
#[derive(Clone, PartialEq)]
struct NavEntry {
    label: String,
    route: Route,
}

fn static_entries(role: AdminRole) -> Vec<NavEntry> {
    let mut entries = vec![NavEntry {
        label: "Dashboard".into(),
        route: dashboard_route(role),
    }];
    match role {
        AdminRole::Webmaster => {
            entries.push(NavEntry {
                label: "Nav & Footer".into(),
                route: Route::Navigation {},
            });
            entries.push(NavEntry {
                label: "Upcoming Projects".into(),
                route: Route::UpcomingProjects {},
            });
            entries.push(NavEntry {
                label: "Past Projects".into(),
                route: Route::PastProjects {},
            });
            entries.push(NavEntry {
                label: "Papers and publications".into(),
                route: Route::Publications {},
            });
            entries.push(NavEntry {
                label: "News".into(),
                route: Route::News {},
            });
            entries.push(NavEntry {
                label: "Events".into(),
                route: Route::Events {},
            });
            entries.push(NavEntry {
                label: "Client feedback".into(),
                route: Route::Feedback {},
            });
        }
        AdminRole::Admin => {
            entries.push(NavEntry {
                label: "Upcoming Projects".into(),
                route: Route::UpcomingProjects {},
            });
            entries.push(NavEntry {
                label: "Past Projects".into(),
                route: Route::PastProjects {},
            });
            entries.push(NavEntry {
                label: "Papers and publications".into(),
                route: Route::Publications {},
            });
        }
        AdminRole::Media => {
            entries.push(NavEntry {
                label: "News".into(),
                route: Route::News {},
            });
            entries.push(NavEntry {
                label: "Events".into(),
                route: Route::Events {},
            });
        }
    }
    entries
}

fn entry_icon(label: &str) -> Element {
    let icon = match label {
        "Dashboard" => rsx! { Icon { icon: FaHouse, width: 15, height: 15 } },
        "Nav & Footer" => rsx! { Icon { icon: FaCode, width: 15, height: 15 } },
        "Upcoming Projects" => rsx! { Icon { icon: FaLightbulb, width: 15, height: 15 } },
        "Past Projects" => rsx! { Icon { icon: FaClockRotateLeft, width: 15, height: 15 } },
        "Papers and publications" => rsx! { Icon { icon: FaFilePdf, width: 15, height: 15 } },
        "News" => rsx! { Icon { icon: FaNewspaper, width: 15, height: 15 } },
        "Events" => rsx! { Icon { icon: FaCalendarDays, width: 15, height: 15 } },
        "Client feedback" => rsx! { Icon { icon: FaComments, width: 15, height: 15 } },
        "Change Password" => rsx! { Icon { icon: FaLock, width: 15, height: 15 } },
        _ => rsx! { Icon { icon: FaFile, width: 15, height: 15 } },
    };
    icon
}

/// Convert a stored page path into the catch-all CMS route.
pub(crate) fn cms_route(path: &str) -> Route {
    let segments = path
        .trim_start_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    Route::CmsPage { segments }
}

#[component]
fn Sidenav() -> Element {
    let auth = use_auth();
    let api = use_api();
    let nav_links = use_nav_links();
    let mut collapsed = use_signal(|| false);
    let mut show_profile = use_signal(|| false);
    let mut feedback_count = use_signal(|| 0usize);

    let role = auth().role();

    // Feedback badge for the webmaster.
    let _ = use_resource(move || {
        let api = api.clone();
        async move {
            if auth().role() == Some(AdminRole::Webmaster) {
                match api.feedback().await {
                    Ok(list) => feedback_count.set(list.len()),
                    Err(err) => tracing::error!("failed to load feedback count: {err}"),
                }
            }
        }
    });

    let Some(role) = role else {
        return rsx! {};
    };

    let panel_title = match role {
        AdminRole::Webmaster => "WebMaster",
        AdminRole::Admin => "Admin Panel",
        AdminRole::Media => "Media Panel",
    };

    // Webmasters and admins also see the runtime-defined CMS pages.
    let page_entries: Vec<NavEntry> = if role == AdminRole::Media {
        Vec::new()
    } else {
        nav_links
            .links()
            .iter()
            .map(|link| NavEntry {
                label: link.page_name.clone(),
                route: cms_route(&link.path),
            })
            .collect()
    };

    rsx! {
        aside {
            class: if collapsed() { "sidenav sidenav-collapsed" } else { "sidenav" },
            div {
                class: "sidenav-header",
                span { class: "sidenav-brand", "{panel_title}" }
                button {
                    r#type: "button",
                    class: "sidenav-toggle",
                    onclick: move |_| collapsed.set(!collapsed()),
                    Icon { icon: FaBars, width: 16, height: 16 }
                }
            }

            nav {
                class: "sidenav-menu",
                for entry in static_entries(role) {
                    Link {
                        key: "{entry.label}",
                        to: entry.route.clone(),
                        class: "sidenav-item",
                        {entry_icon(&entry.label)}
                        span { class: "sidenav-label", "{entry.label}" }
                        if entry.label == "Client feedback" && feedback_count() > 0 {
                            span { class: "sidenav-badge", "{feedback_count}" }
                        }
                    }
                }

                if !page_entries.is_empty() {
                    p { class: "sidenav-group", "Pages" }
                    for entry in page_entries {
                        Link {
                            key: "{entry.label}",
                            to: entry.route.clone(),
                            class: "sidenav-item",
                            {entry_icon(&entry.label)}
                            span { class: "sidenav-label", "{entry.label}" }
                        }
                    }
                }

                Link {
                    to: Route::ChangePassword {},
                    class: "sidenav-item",
                    {entry_icon("Change Password")}
                    span { class: "sidenav-label", "Change Password" }
                }
            }

            div {
                class: "sidenav-footer",
                if let Some(admin) = auth().admin {
                    p { class: "sidenav-user", {admin.full_name()} }
                }
                button {
                    r#type: "button",
                    class: "btn btn-outline btn-block",
                    onclick: move |_| show_profile.set(true),
                    "Edit Profile"
                }
                LogoutButton { class: "btn btn-outline btn-block" }
            }
        }

        if show_profile() {
            ProfileModal { on_close: move |_| show_profile.set(false) }
        }
    }
}

/// Edit the signed-in admin's own name and contact details.
#[component]
fn ProfileModal(on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let mut auth = use_auth();

    let mut form = use_signal(|| match &auth().admin {
        Some(admin) => EditAdminForm {
            id: admin.id.clone(),
            firstname: admin.firstname.clone(),
            lastname: admin.lastname.clone(),
            email: admin.email.clone(),
            phone: admin.phone.clone(),
        },
        None => EditAdminForm::default(),
    });
    let mut errors = use_signal(|| Option::<FormErrors>::None);
    let mut save_err = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let save = {
        let api = api.clone();
        move |_| {
            let payload = form();
            if let Err(form_errors) = validate_edit_admin(&payload) {
                errors.set(Some(form_errors));
                return;
            }
            errors.set(None);

            let api = api.clone();
            spawn(async move {
                saving.set(true);
                match api.edit_admin(&payload).await {
                    Ok(admin) => {
                        sign_in(&mut auth, admin);
                        saving.set(false);
                        on_close.call(());
                    }
                    Err(err) => {
                        saving.set(false);
                        save_err.set(Some(err.to_string()));
                    }
                }
            });
        }
    };

    rsx! {
        Modal {
            title: "Edit Profile".to_string(),
            error: save_err(),
            cancel_label: "Close",
            on_close: move |_| on_close.call(()),
            div {
                class: "modal-form",
                Input {
                    label: "Firstname",
                    value: form().firstname,
                    error: field_error(&errors(), "firstname"),
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.firstname = evt.value()),
                }
                Input {
                    label: "Lastname",
                    value: form().lastname,
                    error: field_error(&errors(), "lastname"),
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.lastname = evt.value()),
                }
                Input {
                    label: "Email",
                    r#type: "email",
                    value: form().email,
                    error: field_error(&errors(), "email"),
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.email = evt.value()),
                }
                Input {
                    label: "Phone",
                    value: form().phone,
                    error: field_error(&errors(), "phone"),
                    oninput: move |evt: FormEvent| form.with_mut(|f| f.phone = evt.value()),
                }
                Button {
                    variant: ButtonVariant::Primary,
                    disabled: saving(),
                    onclick: save,
                    if saving() { "Saving..." } else { "Save Profile" }
                }
            }
        }
    }
}

/// Shell wrapping every authenticated view: sidebar on the left, routed
/// content on the right.
#[component]
pub fn DashboardLayout(children: Element) -> Element {
    rsx! {
        div {
            class: "dashboard-layout",
            Sidenav {}
            main {
                class: "dashboard-main",
                {children}
            }
        }
    }
}
