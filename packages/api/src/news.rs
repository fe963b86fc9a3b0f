//! Newsroom endpoints.

use reqwest::Method;
use store::forms::NewsForm;
use store::models::NewsItem;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /news/fetchnews`
    pub async fn news(&self) -> Result<Vec<NewsItem>, ApiError> {
        self.get_data("/news/fetchnews").await
    }

    /// `POST /news/createnews`
    pub async fn create_news(&self, form: &NewsForm) -> Result<String, ApiError> {
        let envelope = self
            .send_json::<NewsItem, _>(Method::POST, "/news/createnews", form)
            .await?;
        Ok(Self::message(envelope))
    }

    /// `PUT /news/edit/{id}`
    pub async fn edit_news(&self, id: &str, form: &NewsForm) -> Result<String, ApiError> {
        let envelope = self
            .send_json::<NewsItem, _>(Method::PUT, &format!("/news/edit/{id}"), form)
            .await?;
        Ok(Self::message(envelope))
    }

    /// `DELETE /news/delete/{id}`
    pub async fn delete_news(&self, id: &str) -> Result<String, ApiError> {
        self.send_empty(Method::DELETE, &format!("/news/delete/{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use store::forms::NewsForm;
    use store::models::{MediaItem, MediaKind};

    #[test]
    fn news_form_serializes_media_list() {
        let form = NewsForm {
            id: None,
            title: "Lab opening".into(),
            brief: "New facility opens".into(),
            content: "The new laboratory opened this week with three wings.".into(),
            thumbnail: "https://cdn.example/t.png".into(),
            date: "2024-09-12".into(),
            media: vec![MediaItem {
                kind: MediaKind::Image,
                url: "https://cdn.example/a.png".into(),
                thumbnail: Some("https://cdn.example/a.png".into()),
            }],
        };
        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["media"][0]["type"], "image");
        assert!(json.get("id").is_none());
    }
}
