//! Admin landing page. Prefetches the data sets the admin surfaces use.

use dioxus::prelude::*;
use store::{AdminRole, ProjectCategory};
use ui::{use_api, use_auth, use_nav_links};

use crate::views::{DashboardLayout, RequireRole};

#[component]
pub fn DashboardAdmin() -> Element {
    let api = use_api();
    let auth = use_auth();
    let nav_links = use_nav_links();

    let _prefetch = use_resource(move || {
        let api = api.clone();
        let nav_links = nav_links.clone();
        async move {
            nav_links.refresh();
            if let Err(err) = api.projects(ProjectCategory::Upcoming).await {
                tracing::error!("failed to prefetch projects: {err}");
            }
            if let Err(err) = api.publications().await {
                tracing::error!("failed to prefetch publications: {err}");
            }
        }
    });

    rsx! {
        RequireRole {
            role: AdminRole::Admin,
            DashboardLayout {
                div {
                    class: "page-heading",
                    h1 { "Welcome to the admin dashboard" }
                    if let Some(admin) = auth().admin {
                        p { "Signed in as " {admin.full_name()} }
                    }
                }
            }
        }
    }
}
