//! Shared domain layer for the CMS admin panel: entity models mirrored
//! from the backend, form payloads and their validation rules, the TOML
//! panel configuration and the signed-in-admin session store.

pub mod config;
pub mod forms;
pub mod models;
pub mod session;
pub mod validate;

pub use config::{AdminConfig, DEFAULT_BASE_URL};
pub use models::{
    Admin, AdminRole, AdminStatus, Event, Feedback, FooterColumn, FooterConfig, FooterLink,
    MediaItem, MediaKind, NewsItem, Page, PageLink, Project, ProjectCategory, Publication,
    Section, SectionImage, SocialLink,
};
pub use session::{MemorySession, SessionStore, SESSION_KEY};
pub use validate::FormErrors;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use session::BrowserSession;
