//! Form payloads sent to the backend.
//!
//! Each struct matches the JSON body the corresponding endpoint expects,
//! camelCase field names included. They double as the shapes the
//! [`crate::validate`] functions check before a request leaves the client.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::models::{MediaItem, SectionImage};

/// Body for `POST /admin/createwebmaster`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WebmasterForm {
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
}

/// Body for `POST /admin/createadmin` (admin and media registrations).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AdminForm {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    /// "admin" or "media"; validated non-empty, interpreted server-side.
    pub role: String,
    pub password: String,
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
}

/// Body for `PUT /admin/editAdmin`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EditAdminForm {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
}

/// Body for `POST /admin/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body for `PUT /admin/changePwdAdmin`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PasswordChange {
    pub id: String,
    #[serde(rename = "currentPassword")]
    pub current_password: String,
    #[serde(rename = "newPassword")]
    pub new_password: String,
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
}

/// Body for project create/edit. `id` present means edit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub objective: String,
    #[serde(default)]
    pub importance: String,
    #[serde(default)]
    pub technology: String,
    #[serde(default)]
    pub partners: String,
    #[serde(default)]
    pub output: String,
}

/// Body for publication create/edit. Authors travel as the raw
/// comma-separated string the form collects; the backend splits it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicationForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub summary: String,
    pub authors: String,
    pub link: String,
    pub date: String,
}

/// Body for news create/edit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewsForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub brief: String,
    pub content: String,
    pub thumbnail: String,
    pub date: String,
    #[serde(default)]
    pub media: Vec<MediaItem>,
}

/// Body for event create/edit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flyer: Option<String>,
}

/// Replacement content for one section, with image bookkeeping so the
/// backend can reconcile the media host: URLs to keep and assets to drop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionUpdate {
    pub title: String,
    pub details: String,
    #[serde(rename = "keepExistingImages")]
    pub keep_existing_images: bool,
    #[serde(rename = "existingImages")]
    pub existing_images: Vec<String>,
    #[serde(rename = "deletedImages")]
    pub deleted_images: Vec<SectionImage>,
}

/// One entry in a page-content update: replace the section or delete it.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionPatch {
    Update(SectionUpdate),
    Delete,
}

// Delete serializes to the `{"delete": true}` marker the backend expects.
impl Serialize for SectionPatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SectionPatch::Update(update) => update.serialize(serializer),
            SectionPatch::Delete => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("delete", &true)?;
                map.end()
            }
        }
    }
}

/// Body for `PUT /pages/updatepage/{page_id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PageContentUpdate {
    pub content: BTreeMap<String, SectionPatch>,
}

impl PageContentUpdate {
    /// Update for a brand-new, empty section.
    pub fn new_section(name: &str) -> Self {
        let mut content = BTreeMap::new();
        content.insert(
            name.to_lowercase(),
            SectionPatch::Update(SectionUpdate::default()),
        );
        Self { content }
    }

    /// Update that deletes a single named section.
    pub fn delete_section(name: &str) -> Self {
        let mut content = BTreeMap::new();
        content.insert(name.to_string(), SectionPatch::Delete);
        Self { content }
    }
}

/// Body for `DELETE /contact/feedback/deletemany`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackBatch {
    pub ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_change_uses_backend_field_names() {
        let body = PasswordChange {
            id: "a1".into(),
            current_password: "old#1pass".into(),
            new_password: "new#1pass".into(),
            password_confirm: "new#1pass".into(),
        };
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("currentPassword"));
        assert!(json.contains("newPassword"));
        assert!(json.contains("passwordConfirm"));
    }

    #[test]
    fn project_form_omits_missing_id() {
        let form = ProjectForm {
            title: "Sensor grid".into(),
            objective: "Deploy 40 nodes".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&form).unwrap();
        assert!(!json.contains(r#""id""#));

        let edit = ProjectForm {
            id: Some("p9".into()),
            ..form
        };
        let json = serde_json::to_string(&edit).unwrap();
        assert!(json.contains(r#""id":"p9""#));
    }

    #[test]
    fn section_delete_marker_shape() {
        let update = PageContentUpdate::delete_section("hero");
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"content":{"hero":{"delete":true}}}"#);
    }

    #[test]
    fn section_update_carries_image_bookkeeping() {
        let mut content = BTreeMap::new();
        content.insert(
            "hero".to_string(),
            SectionPatch::Update(SectionUpdate {
                title: "Hero".into(),
                details: "text".into(),
                keep_existing_images: true,
                existing_images: vec!["https://cdn.example/a.png".into()],
                deleted_images: vec![SectionImage {
                    url: "https://cdn.example/b.png".into(),
                    public_id: "b".into(),
                }],
            }),
        );
        let json = serde_json::to_string(&PageContentUpdate { content }).unwrap();
        assert!(json.contains("keepExistingImages"));
        assert!(json.contains("existingImages"));
        assert!(json.contains(r#""deletedImages":[{"url":"https://cdn.example/b.png","public_id":"b"}]"#));
    }

    #[test]
    fn new_section_is_lowercased_and_empty() {
        let update = PageContentUpdate::new_section("HeroBanner");
        let json = serde_json::to_string(&update).unwrap();
        assert!(json.contains(r#""herobanner""#));
        assert!(json.contains(r#""title":"""#));
    }
}
