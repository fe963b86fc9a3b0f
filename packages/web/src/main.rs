use dioxus::prelude::*;

use ui::{AuthProvider, NavLinksProvider};
use views::{
    ChangePassword, CmsPage, DashboardAdmin, DashboardMedia, DashboardWebmaster, Events, Feedback,
    Login, Navigation, News, PastProjects, Publications, Register, UpcomingProjects,
    WebmasterRegister,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/webmaster")]
    WebmasterRegister {},
    #[route("/changepassword")]
    ChangePassword {},
    #[route("/dashboardwebmaster")]
    DashboardWebmaster {},
    #[route("/dashboardadmin")]
    DashboardAdmin {},
    #[route("/dashboardmedia")]
    DashboardMedia {},
    #[route("/navigation")]
    Navigation {},
    #[route("/upcomingprojects")]
    UpcomingProjects {},
    #[route("/pastprojects")]
    PastProjects {},
    #[route("/publications")]
    Publications {},
    #[route("/newslist")]
    News {},
    #[route("/eventslist")]
    Events {},
    #[route("/feedback")]
    Feedback {},
    // CMS pages are defined by the webmaster at runtime; resolve the path
    // against the fetched link tree.
    #[route("/:..segments")]
    CmsPage { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(api::ApiClient::from_env);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            NavLinksProvider {
                Router::<Route> {}
            }
        }
    }
}
