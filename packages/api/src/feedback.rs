//! Contact-form feedback endpoints. The panel only lists and deletes;
//! submissions come from the public site.

use reqwest::Method;
use store::forms::FeedbackBatch;
use store::models::Feedback;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /contact/feedback`
    pub async fn feedback(&self) -> Result<Vec<Feedback>, ApiError> {
        self.get_data("/contact/feedback").await
    }

    /// `DELETE /contact/feedback/delete/{id}`
    pub async fn delete_feedback(&self, id: &str) -> Result<String, ApiError> {
        self.send_empty(Method::DELETE, &format!("/contact/feedback/delete/{id}"))
            .await
    }

    /// `DELETE /contact/feedback/deletemany` with `{ "ids": [...] }`.
    /// An empty selection is a no-op.
    pub async fn delete_feedback_batch(&self, ids: &[String]) -> Result<String, ApiError> {
        if ids.is_empty() {
            return Ok(String::new());
        }
        let body = FeedbackBatch { ids: ids.to_vec() };
        let envelope = self
            .send_json::<serde_json::Value, _>(
                Method::DELETE,
                "/contact/feedback/deletemany",
                &body,
            )
            .await?;
        Ok(Self::message(envelope))
    }
}

#[cfg(test)]
mod tests {
    use store::forms::FeedbackBatch;

    #[test]
    fn batch_body_shape() {
        let body = FeedbackBatch {
            ids: vec!["a".into(), "b".into()],
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"ids":["a","b"]}"#
        );
    }
}
