//! Access to the shared [`api::ApiClient`] provided at the app root.

use api::ApiClient;
use dioxus::prelude::*;

/// The API client for the configured backend. Panics if no provider is
/// mounted above the calling component.
pub fn use_api() -> ApiClient {
    use_context::<ApiClient>()
}
