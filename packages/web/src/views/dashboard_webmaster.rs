//! Webmaster dashboard: the admin roster with approve/deny/remove
//! moderation, status counts and a status filter.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBan, FaTriangleExclamation, FaUserCheck};
use dioxus_free_icons::Icon;
use store::models::{Admin, AdminStatus};
use store::AdminRole;
use ui::components::{Button, ButtonVariant, Loader, Modal};
use ui::use_api;

use crate::views::{DashboardLayout, RequireRole};

#[derive(Clone, Copy, PartialEq)]
enum RosterAction {
    Approve,
    Deny,
    Remove,
}

impl RosterAction {
    fn title(self) -> &'static str {
        match self {
            RosterAction::Approve => "Approve Admin",
            RosterAction::Deny => "Deny Admin",
            RosterAction::Remove => "Remove Admin",
        }
    }

    fn caption(self) -> &'static str {
        match self {
            RosterAction::Approve => "Are you sure you want to approve this admin?",
            RosterAction::Deny => "Are you sure you want to deny this admin access?",
            RosterAction::Remove => {
                "Are you sure you want to remove this admin? This action cannot be undone."
            }
        }
    }

    fn confirm_label(self) -> &'static str {
        match self {
            RosterAction::Approve => "Approve",
            RosterAction::Deny => "Deny",
            RosterAction::Remove => "Remove",
        }
    }
}

fn refresh_admins(api: api::ApiClient, mut admins: Signal<Vec<Admin>>, mut loading: Signal<bool>) {
    spawn(async move {
        loading.set(true);
        match api.all_admins().await {
            Ok(list) => admins.set(list),
            Err(err) => tracing::error!("failed to load admins: {err}"),
        }
        loading.set(false);
    });
}

#[component]
pub fn DashboardWebmaster() -> Element {
    rsx! {
        RequireRole {
            role: AdminRole::Webmaster,
            DashboardLayout {
                Roster {}
            }
        }
    }
}

#[component]
fn Roster() -> Element {
    let api = use_api();

    let admins = use_signal(Vec::<Admin>::new);
    let loading = use_signal(|| true);
    let mut filter = use_signal(|| Option::<AdminStatus>::None);
    let mut modal = use_signal(|| Option::<(RosterAction, String)>::None);
    let mut modal_error = use_signal(|| Option::<String>::None);

    {
        let api = api.clone();
        let _loader = use_resource(move || {
            let api = api.clone();
            async move {
                refresh_admins(api, admins, loading);
            }
        });
    }

    let run_action = {
        let api = api.clone();
        move |_| {
            let Some((action, id)) = modal() else {
                return;
            };
            let api = api.clone();
            spawn(async move {
                let result = match action {
                    RosterAction::Approve => api.approve_admin(&id).await,
                    RosterAction::Deny => api.deny_admin(&id).await,
                    RosterAction::Remove => api.remove_admin(&id).await,
                };
                match result {
                    Ok(_) => {
                        modal.set(None);
                        modal_error.set(None);
                        refresh_admins(api, admins, loading);
                    }
                    Err(err) => modal_error.set(Some(err.to_string())),
                }
            });
        }
    };

    if loading() && admins().is_empty() {
        return rsx! { Loader { text: "Please wait..." } };
    }

    let all = admins();
    let total = all.len();
    let approved = all.iter().filter(|a| a.status == AdminStatus::Approved).count();
    let pending = all.iter().filter(|a| a.status == AdminStatus::Pending).count();
    let denied = all.iter().filter(|a| a.status == AdminStatus::Denied).count();

    // Status filter; the unfiltered list groups approved before pending
    // before denied.
    let mut shown: Vec<Admin> = all
        .iter()
        .filter(|a| filter().map(|s| a.status == s).unwrap_or(true))
        .cloned()
        .collect();
    if filter().is_none() {
        shown.sort_by_key(|a| a.status);
    }

    rsx! {
        div {
            class: "page-heading",
            h1 { "Admin Roster" }
            p { "Approve, deny and remove panel accounts" }
        }

        div {
            class: "stat-row",
            button {
                r#type: "button",
                class: if filter().is_none() { "stat-card active" } else { "stat-card" },
                onclick: move |_| filter.set(None),
                span { class: "stat-value", "{total}" }
                span { class: "stat-label", "All" }
            }
            button {
                r#type: "button",
                class: if filter() == Some(AdminStatus::Approved) { "stat-card active" } else { "stat-card" },
                onclick: move |_| filter.set(Some(AdminStatus::Approved)),
                span { class: "stat-value", "{approved}" }
                span { class: "stat-label", "Approved" }
            }
            button {
                r#type: "button",
                class: if filter() == Some(AdminStatus::Pending) { "stat-card active" } else { "stat-card" },
                onclick: move |_| filter.set(Some(AdminStatus::Pending)),
                span { class: "stat-value", "{pending}" }
                span { class: "stat-label", "Pending" }
            }
            button {
                r#type: "button",
                class: if filter() == Some(AdminStatus::Denied) { "stat-card active" } else { "stat-card" },
                onclick: move |_| filter.set(Some(AdminStatus::Denied)),
                span { class: "stat-value", "{denied}" }
                span { class: "stat-label", "Denied" }
            }
        }

        div {
            class: "table-card",
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Role" }
                        th { "Status" }
                        th { class: "col-actions", "Actions" }
                    }
                }
                tbody {
                    for admin in shown {
                        tr {
                            key: "{admin.id}",
                            td { {admin.full_name()} }
                            td { "{admin.email}" }
                            td { "{admin.phone}" }
                            td { "{admin.role}" }
                            td {
                                span { class: "badge badge-{admin.status}", "{admin.status}" }
                            }
                            td {
                                class: "col-actions",
                                if admin.status != AdminStatus::Approved {
                                    Button {
                                        variant: ButtonVariant::Success,
                                        class: "btn-sm",
                                        onclick: {
                                            let id = admin.id.clone();
                                            move |_| {
                                                modal_error.set(None);
                                                modal.set(Some((RosterAction::Approve, id.clone())));
                                            }
                                        },
                                        "Approve"
                                    }
                                }
                                if admin.status != AdminStatus::Denied {
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        class: "btn-sm",
                                        onclick: {
                                            let id = admin.id.clone();
                                            move |_| {
                                                modal_error.set(None);
                                                modal.set(Some((RosterAction::Deny, id.clone())));
                                            }
                                        },
                                        "Deny"
                                    }
                                }
                                Button {
                                    variant: ButtonVariant::Danger,
                                    class: "btn-sm",
                                    onclick: {
                                        let id = admin.id.clone();
                                        move |_| {
                                            modal_error.set(None);
                                            modal.set(Some((RosterAction::Remove, id.clone())));
                                        }
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some((action, _)) = modal() {
            Modal {
                title: action.title().to_string(),
                caption: action.caption().to_string(),
                error: modal_error(),
                icon_class: if action == RosterAction::Approve { "icon-success".to_string() } else { "icon-danger".to_string() },
                icon: rsx! {
                    if action == RosterAction::Approve {
                        Icon { icon: FaUserCheck, width: 22, height: 22 }
                    } else if action == RosterAction::Deny {
                        Icon { icon: FaBan, width: 22, height: 22 }
                    } else {
                        Icon { icon: FaTriangleExclamation, width: 22, height: 22 }
                    }
                },
                confirm_label: action.confirm_label().to_string(),
                confirm_variant: if action == RosterAction::Approve { ButtonVariant::Success } else { ButtonVariant::Danger },
                on_confirm: run_action,
                on_close: move |_| {
                    modal.set(None);
                    modal_error.set(None);
                },
            }
        }
    }
}
