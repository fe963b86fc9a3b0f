//! # Domain models mirrored from the CMS backend
//!
//! The backend owns and validates every record; the client only mirrors the
//! shapes it needs to render lists and prefill edit forms. All types are
//! `Serialize + Deserialize` so they can cross the HTTP boundary, and
//! `Clone + PartialEq` so they can live inside Dioxus signals.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Admin`] | A panel account: name, contact details, [`AdminRole`] tier and [`AdminStatus`] moderation state. |
//! | [`PageLink`] | A navigation entry: slug, display name, URL path, icon token and nested children. |
//! | [`Page`] | A [`PageLink`] plus its `content` map of named [`Section`]s. |
//! | [`Section`] | One named content block: title, rich-text details and an image list. |
//! | [`Project`] | A project record with five rich-text fields and an upcoming/past category. |
//! | [`Publication`] | A paper: title, summary, author list, external link and date. |
//! | [`NewsItem`] / [`Event`] | Newsroom entries with media attachments, and calendar events. |
//! | [`Feedback`] | A visitor message submitted through the public contact form. |
//! | [`FooterConfig`] | Site footer: contact text fields, social links and link columns. |
//!
//! Wire names follow the backend's JSON (`_id`, `pageName`, `socialLinks`,
//! ...) via serde rename attributes; the Rust side stays snake_case.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Role tier of a panel account. Gates which dashboard and editing
/// surfaces are reachable; enforcement lives on the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Webmaster,
    Admin,
    Media,
}

impl AdminRole {
    /// URL path of the dashboard this role lands on after login.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            AdminRole::Webmaster => "/dashboardwebmaster",
            AdminRole::Admin => "/dashboardadmin",
            AdminRole::Media => "/dashboardmedia",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminRole::Webmaster => write!(f, "webmaster"),
            AdminRole::Admin => write!(f, "admin"),
            AdminRole::Media => write!(f, "media"),
        }
    }
}

/// Moderation state of an account, set by the webmaster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminStatus {
    Approved,
    Pending,
    Denied,
}

impl fmt::Display for AdminStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminStatus::Approved => write!(f, "approved"),
            AdminStatus::Pending => write!(f, "pending"),
            AdminStatus::Denied => write!(f, "denied"),
        }
    }
}

/// A panel account as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    /// Only webmaster accounts carry a username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub role: AdminRole,
    #[serde(default = "default_status")]
    pub status: AdminStatus,
}

fn default_status() -> AdminStatus {
    AdminStatus::Pending
}

impl Admin {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

pub(crate) fn default_icon() -> String {
    "fa:FaRegFile".to_string()
}

/// A navigation entry. Top-level links may carry children rendered as a
/// dropdown; children never nest further.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageLink {
    #[serde(rename = "_id", default)]
    pub id: String,
    /// Lowercase slug, unique across pages: "about-us".
    #[serde(rename = "pageId", default)]
    pub page_id: String,
    #[serde(rename = "pageName")]
    pub page_name: String,
    /// URL path starting with "/".
    pub path: String,
    #[serde(rename = "pageType", default)]
    pub page_type: String,
    /// Icon token in the form "fa:FaIconName".
    #[serde(default = "default_icon")]
    pub icon: String,
    /// Explicit sort index persisted when the webmaster reorders links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
    #[serde(default)]
    pub children: Vec<PageLink>,
}

impl Default for PageLink {
    fn default() -> Self {
        Self {
            id: String::new(),
            page_id: String::new(),
            page_name: String::new(),
            path: String::new(),
            page_type: String::new(),
            icon: default_icon(),
            order: None,
            children: Vec::new(),
        }
    }
}

/// An image hosted on the external media service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionImage {
    pub url: String,
    /// Media-host handle the backend needs to delete the asset.
    #[serde(default)]
    pub public_id: String,
}

/// One named content block within a page document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: String,
    /// Rich text; Markdown authored here, legacy HTML passed through.
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub images: Vec<SectionImage>,
}

/// A full page document: its navigation entry plus the section map.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(flatten)]
    pub link: PageLink,
    #[serde(default)]
    pub content: BTreeMap<String, Section>,
}

/// Project listing category, mirrored by the backend's `cat` query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Upcoming,
    Past,
}

impl ProjectCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Upcoming => "upcoming",
            ProjectCategory::Past => "past",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A project record. The five descriptive fields hold rich text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub importance: String,
    #[serde(default)]
    pub technology: String,
    #[serde(default)]
    pub partners: String,
    #[serde(default)]
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ProjectCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A paper or publication entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub link: String,
    /// ISO date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
}

/// Attachment kind for news media.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

/// A media attachment on a news item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
}

/// A news article.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub brief: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

/// A calendar event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flyer: Option<String>,
}

/// A visitor message from the public contact form. Read-only here apart
/// from deletion.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A social media link in the footer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// A single link inside a footer column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterLink {
    pub text: String,
    pub url: String,
}

/// A titled column of links in the footer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

/// The site footer document. A single record server-side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterConfig {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub copyright: String,
    #[serde(rename = "socialLinks", default)]
    pub social_links: Vec<SocialLink>,
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_decodes_backend_json() {
        let json = r#"{
            "_id": "64fa12",
            "firstname": "Ada",
            "lastname": "Obi",
            "email": "ada@example.org",
            "phone": "08012345678",
            "role": "admin",
            "status": "pending"
        }"#;
        let admin: Admin = serde_json::from_str(json).unwrap();
        assert_eq!(admin.id, "64fa12");
        assert_eq!(admin.role, AdminRole::Admin);
        assert_eq!(admin.status, AdminStatus::Pending);
        assert_eq!(admin.username, None);
        assert_eq!(admin.full_name(), "Ada Obi");
    }

    #[test]
    fn role_dashboard_paths() {
        assert_eq!(AdminRole::Webmaster.dashboard_path(), "/dashboardwebmaster");
        assert_eq!(AdminRole::Admin.dashboard_path(), "/dashboardadmin");
        assert_eq!(AdminRole::Media.dashboard_path(), "/dashboardmedia");
    }

    #[test]
    fn page_decodes_link_and_sections() {
        let json = r#"{
            "_id": "1",
            "pageId": "about",
            "pageName": "About",
            "path": "/about",
            "pageType": "custom",
            "content": {
                "hero": {
                    "title": "Who we are",
                    "details": "Some **rich** text",
                    "images": [{"url": "https://cdn.example/a.png", "public_id": "a"}]
                }
            }
        }"#;
        let page: Page = serde_json::from_str(json).unwrap();
        assert_eq!(page.link.page_id, "about");
        assert_eq!(page.link.icon, "fa:FaRegFile");
        let hero = page.content.get("hero").unwrap();
        assert_eq!(hero.title, "Who we are");
        assert_eq!(hero.images[0].public_id, "a");
    }

    #[test]
    fn media_item_wire_kind_field() {
        let item = MediaItem {
            kind: MediaKind::Video,
            url: "https://cdn.example/v.mp4".into(),
            thumbnail: None,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains(r#""type":"video""#));
        assert!(!json.contains("thumbnail"));
    }

    #[test]
    fn footer_round_trips_social_links() {
        let json = r#"{
            "_id": "f1",
            "tagline": "Research for everyone",
            "socialLinks": [{"platform": "x", "url": "https://x.com/org"}],
            "columns": [{"title": "Quick Links", "links": [{"text": "Home", "url": "/"}]}]
        }"#;
        let footer: FooterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(footer.social_links.len(), 1);
        assert_eq!(footer.columns[0].links[0].text, "Home");
        let back = serde_json::to_string(&footer).unwrap();
        assert!(back.contains("socialLinks"));
    }
}
