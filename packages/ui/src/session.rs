//! Platform session-store selection.
//!
//! Returns a [`store::SessionStore`] backed by the right medium:
//! - **Web** (WASM + `web` feature): browser `localStorage` via
//!   [`store::BrowserSession`]
//! - **Native** (tests, tooling): a process-local [`store::MemorySession`]

use store::SessionStore;

/// The session store for this platform.
pub fn session() -> impl SessionStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::BrowserSession::new()
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        thread_local! {
            static SESSION: store::MemorySession = store::MemorySession::new();
        }
        SESSION.with(|s| s.clone())
    }
}
