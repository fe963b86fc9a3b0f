//! Page endpoints: the navigation link tree and per-page section content.

use reqwest::Method;
use store::forms::PageContentUpdate;
use store::models::{Page, PageLink};

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /pages/links` — every navigation entry, children included.
    pub async fn page_links(&self) -> Result<Vec<PageLink>, ApiError> {
        self.get_data("/pages/links").await
    }

    /// `POST /pages/create`
    pub async fn create_page(&self, link: &PageLink) -> Result<String, ApiError> {
        let envelope = self
            .send_json::<PageLink, _>(Method::POST, "/pages/create", link)
            .await?;
        Ok(Self::message(envelope))
    }

    /// `PUT /pages/update/{id}` — replace a link record (also used to
    /// persist reordering and child edits).
    pub async fn update_page(&self, id: &str, link: &PageLink) -> Result<String, ApiError> {
        let envelope = self
            .send_json::<PageLink, _>(Method::PUT, &format!("/pages/update/{id}"), link)
            .await?;
        Ok(Self::message(envelope))
    }

    /// `DELETE /pages/delete/{id}`
    pub async fn delete_page(&self, id: &str) -> Result<String, ApiError> {
        self.send_empty(Method::DELETE, &format!("/pages/delete/{id}"))
            .await
    }

    /// `GET /pages/{page_id}` — the full page document with its sections.
    pub async fn page(&self, page_id: &str) -> Result<Page, ApiError> {
        self.get_data(&format!("/pages/{page_id}")).await
    }

    /// `PUT /pages/updatepage/{page_id}` — add, replace or delete sections.
    /// Returns the updated document and the backend's message.
    pub async fn update_page_content(
        &self,
        page_id: &str,
        update: &PageContentUpdate,
    ) -> Result<(Page, String), ApiError> {
        let envelope = self
            .send_json::<Page, _>(Method::PUT, &format!("/pages/updatepage/{page_id}"), update)
            .await?;
        let message = envelope.message.clone().unwrap_or_default();
        Ok((Self::data(envelope)?, message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::forms::{SectionPatch, SectionUpdate};

    #[test]
    fn links_decode_with_children() {
        let body = r#"{
            "success": true,
            "data": [
                {"_id": "1", "pageId": "about", "pageName": "About", "path": "/about",
                 "pageType": "custom", "children": [
                    {"_id": "2", "pageId": "team", "pageName": "Team", "path": "/about#team"}
                 ]}
            ]
        }"#;
        let envelope: crate::Envelope<Vec<PageLink>> = serde_json::from_str(body).unwrap();
        let links = ApiClient::data(envelope).unwrap();
        assert_eq!(links[0].children.len(), 1);
        assert_eq!(links[0].children[0].path, "/about#team");
    }

    #[test]
    fn content_update_body_shape() {
        let mut update = PageContentUpdate::default();
        update.content.insert(
            "hero".into(),
            SectionPatch::Update(SectionUpdate {
                title: "Hero".into(),
                details: "## Welcome".into(),
                keep_existing_images: false,
                existing_images: vec![],
                deleted_images: vec![],
            }),
        );
        update
            .content
            .insert("stale".into(), SectionPatch::Delete);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["content"]["stale"]["delete"], true);
        assert_eq!(json["content"]["hero"]["title"], "Hero");
    }
}
