//! Site footer endpoints. A single document server-side; the fetch
//! endpoint historically returns a one-element array.

use reqwest::Method;
use store::models::FooterConfig;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /footer/getfooter` — first element of the returned array.
    pub async fn footer(&self) -> Result<FooterConfig, ApiError> {
        let list: Vec<FooterConfig> = self.get_data("/footer/getfooter").await?;
        list.into_iter()
            .next()
            .ok_or_else(|| ApiError::Malformed("empty footer list".to_string()))
    }

    /// `PUT /footer/updatefooter/{id}` — returns the saved document and
    /// the backend's message.
    pub async fn update_footer(
        &self,
        id: &str,
        footer: &FooterConfig,
    ) -> Result<(FooterConfig, String), ApiError> {
        let envelope = self
            .send_json::<FooterConfig, _>(Method::PUT, &format!("/footer/updatefooter/{id}"), footer)
            .await?;
        let message = envelope.message.clone().unwrap_or_default();
        Ok((Self::data(envelope)?, message))
    }
}

#[cfg(test)]
mod tests {
    use store::models::FooterConfig;

    use crate::ApiClient;

    #[test]
    fn footer_list_takes_first_document() {
        let body = r#"{
            "success": true,
            "data": [
                {"_id": "f1", "tagline": "Research for everyone"},
                {"_id": "f2", "tagline": "stale duplicate"}
            ]
        }"#;
        let envelope: crate::Envelope<Vec<FooterConfig>> = serde_json::from_str(body).unwrap();
        let list = ApiClient::data(envelope).unwrap();
        assert_eq!(list.into_iter().next().unwrap().id, "f1");
    }
}
