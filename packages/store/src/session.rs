//! Persistence for the logged-in admin.
//!
//! The panel remembers who is signed in across page reloads. The
//! [`SessionStore`] trait abstracts where that record lives:
//!
//! - [`BrowserSession`] (wasm, `web` feature) — browser `localStorage`
//!   under [`SESSION_KEY`].
//! - [`MemorySession`] — process-local, shared via `Rc`; used natively and
//!   in tests.
//!
//! This is a convenience cache only. The backend remains the authority on
//! whether the stored account is still valid.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use crate::models::Admin;

/// `localStorage` key holding the serialized [`Admin`].
pub const SESSION_KEY: &str = "cms_admin_session";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    Storage(String),
}

/// Where the signed-in admin record is kept between visits.
pub trait SessionStore {
    /// The stored admin, if any. Corrupt or missing data reads as `None`.
    fn load(&self) -> Option<Admin>;
    fn save(&self, admin: &Admin) -> Result<(), SessionError>;
    fn clear(&self);
}

/// In-memory session, shared by clone.
#[derive(Clone, Default)]
pub struct MemorySession {
    inner: Rc<RefCell<Option<Admin>>>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn load(&self) -> Option<Admin> {
        self.inner.borrow().clone()
    }

    fn save(&self, admin: &Admin) -> Result<(), SessionError> {
        *self.inner.borrow_mut() = Some(admin.clone());
        Ok(())
    }

    fn clear(&self) {
        *self.inner.borrow_mut() = None;
    }
}

/// Browser `localStorage` session.
#[cfg(all(target_arch = "wasm32", feature = "web"))]
#[derive(Clone, Copy, Default)]
pub struct BrowserSession;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl BrowserSession {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl SessionStore for BrowserSession {
    fn load(&self) -> Option<Admin> {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::get(SESSION_KEY).ok()
    }

    fn save(&self, admin: &Admin) -> Result<(), SessionError> {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::set(SESSION_KEY, admin)
            .map_err(|e| SessionError::Storage(e.to_string()))
    }

    fn clear(&self) {
        use gloo_storage::Storage;
        gloo_storage::LocalStorage::delete(SESSION_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdminRole, AdminStatus};

    fn admin() -> Admin {
        Admin {
            id: "a1".into(),
            firstname: "Ada".into(),
            lastname: "Obi".into(),
            username: None,
            email: "ada@example.org".into(),
            phone: "08012345678".into(),
            role: AdminRole::Admin,
            status: AdminStatus::Approved,
        }
    }

    #[test]
    fn memory_session_round_trip() {
        let session = MemorySession::new();
        assert!(session.load().is_none());

        session.save(&admin()).unwrap();
        assert_eq!(session.load().unwrap().id, "a1");

        session.clear();
        assert!(session.load().is_none());
    }

    #[test]
    fn clones_share_state() {
        let session = MemorySession::new();
        let other = session.clone();
        session.save(&admin()).unwrap();
        assert_eq!(other.load().unwrap().email, "ada@example.org");
    }
}
