//! Page views, one per route, plus the dashboard shell they share.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaCircleCheck, FaTriangleExclamation};
use dioxus_free_icons::Icon;
use store::validate::FormErrors;
use store::AdminRole;

use crate::Route;

mod change_password;
mod dashboard_admin;
mod dashboard_media;
mod dashboard_webmaster;
mod events;
mod feedback;
mod footer_section;
mod login;
mod nav_section;
mod navigation;
mod news;
mod not_found;
mod page;
mod projects;
mod publications;
mod register;
mod sidebar_layout;
mod webmaster;

pub use change_password::ChangePassword;
pub use dashboard_admin::DashboardAdmin;
pub use dashboard_media::DashboardMedia;
pub use dashboard_webmaster::DashboardWebmaster;
pub use events::Events;
pub use feedback::Feedback;
pub use login::Login;
pub use navigation::Navigation;
pub use news::News;
pub use not_found::NotFound;
pub use page::CmsPage;
pub use projects::{PastProjects, UpcomingProjects};
pub use publications::Publications;
pub use register::Register;
pub use sidebar_layout::{DashboardLayout, RequireRole};
pub use webmaster::WebmasterRegister;

/// Outcome of the last mutating call, shown in a [`ResponseModal`].
pub(crate) type ActionResponse = Option<(bool, String)>;

/// Route of the dashboard a role lands on.
pub(crate) fn dashboard_route(role: AdminRole) -> Route {
    match role {
        AdminRole::Webmaster => Route::DashboardWebmaster {},
        AdminRole::Admin => Route::DashboardAdmin {},
        AdminRole::Media => Route::DashboardMedia {},
    }
}

/// Message for one field of a validation result.
pub(crate) fn field_error(errors: &Option<FormErrors>, field: &str) -> Option<String> {
    errors
        .as_ref()
        .and_then(|e| e.get(field))
        .map(str::to_string)
}

/// Success/failure dialog shown after a mutating call, mirroring the
/// backend's message.
#[component]
pub(crate) fn ResponseModal(response: Signal<ActionResponse>) -> Element {
    let mut response = response;
    let Some((success, message)) = response() else {
        return rsx! {};
    };
    let shown = if message.is_empty() {
        if success {
            "Saved successfully".to_string()
        } else {
            "Something went wrong. Please try again.".to_string()
        }
    } else {
        message
    };

    rsx! {
        ui::components::Modal {
            title: "Message",
            caption: shown,
            cancel_label: "Close",
            icon_class: if success { "icon-success".to_string() } else { "icon-danger".to_string() },
            icon: rsx! {
                if success {
                    Icon { icon: FaCircleCheck, width: 22, height: 22 }
                } else {
                    Icon { icon: FaTriangleExclamation, width: 22, height: 22 }
                }
            },
            on_close: move |_| response.set(None),
        }
    }
}
