//! Shared navigation-link state.
//!
//! The link tree drives both the sidebar and the dynamic CMS page routes,
//! so it is fetched once at app start and refreshed after any page-link
//! mutation.

use dioxus::prelude::*;
use store::models::PageLink;

use crate::use_api;

/// Handle to the fetched link tree.
#[derive(Clone, PartialEq)]
pub struct NavLinks {
    api: api::ApiClient,
    links: Signal<Vec<PageLink>>,
    loading: Signal<bool>,
}

impl NavLinks {
    /// Links sorted by their persisted order index, then name.
    pub fn links(&self) -> Vec<PageLink> {
        let mut links = (self.links)();
        links.sort_by(|a, b| {
            a.order
                .unwrap_or(u32::MAX)
                .cmp(&b.order.unwrap_or(u32::MAX))
                .then_with(|| a.page_name.cmp(&b.page_name))
        });
        links
    }

    pub fn loading(&self) -> bool {
        (self.loading)()
    }

    /// Resolve a URL path against the link tree (top level only; children
    /// point into their parent's page).
    pub fn find_by_path(&self, path: &str) -> Option<PageLink> {
        (self.links)().iter().find(|l| l.path == path).cloned()
    }

    /// Replace the local copy; used for optimistic reordering before an
    /// explicit save.
    pub fn set_links(&self, links: Vec<PageLink>) {
        let mut signal = self.links;
        signal.set(links);
    }

    /// Re-fetch the link tree from the backend.
    pub fn refresh(&self) {
        let api = self.api.clone();
        let mut links = self.links;
        let mut loading = self.loading;
        spawn(async move {
            loading.set(true);
            match api.page_links().await {
                Ok(fetched) => links.set(fetched),
                Err(err) => tracing::error!("failed to load page links: {err}"),
            }
            loading.set(false);
        });
    }
}

/// Get the shared link tree.
pub fn use_nav_links() -> NavLinks {
    use_context::<NavLinks>()
}

/// Provider component that fetches the link tree on mount.
#[component]
pub fn NavLinksProvider(children: Element) -> Element {
    let api = use_api();
    let links = use_signal(Vec::new);
    let loading = use_signal(|| true);

    let handle = use_context_provider(|| NavLinks {
        api,
        links,
        loading,
    });

    use_effect(move || {
        handle.refresh();
    });

    rsx! {
        {children}
    }
}
