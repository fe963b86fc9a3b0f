//! # API crate — typed client for the CMS backend
//!
//! Every mutation and query the panel performs goes through [`ApiClient`],
//! a thin wrapper around `reqwest` that knows the backend's URL layout and
//! its uniform response envelope `{ success, message, data }`.
//!
//! ## Modules
//!
//! | Module | Endpoints |
//! |--------|-----------|
//! | [`admins`] | Registration, login, password change, roster moderation |
//! | [`pages`] | Navigation links and per-page section content |
//! | [`projects`] | Upcoming/past project records |
//! | [`publications`] | Papers and publications |
//! | [`news`] / [`events`] | Newsroom articles and calendar events |
//! | [`feedback`] | Contact-form messages (list, single and bulk delete) |
//! | [`footer`] | The site footer document |
//!
//! Mutating calls resolve to the backend's success message so views can
//! surface it in their response modal; queries resolve to the decoded
//! `data` payload. A response with `success == false` becomes
//! [`ApiError::Rejected`] carrying the backend's message.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod admins;
pub mod events;
pub mod feedback;
pub mod footer;
pub mod news;
pub mod pages;
pub mod projects;
pub mod publications;

pub use store::forms;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with `success: false`; the message is its own.
    #[error("{0}")]
    Rejected(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// The backend's uniform response wrapper.
#[derive(Clone, Debug, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

/// Handle to the remote CMS API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

// Contexts compare by identity of the configured endpoint.
impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &store::AdminConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// Client for the endpoint baked in at compile time
    /// (`CMS_API_ENDPOINT`), falling back to the development default.
    pub fn from_env() -> Self {
        Self::new(option_env!("CMS_API_ENDPOINT").unwrap_or(store::DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ApiError> {
        let status = response.status();
        // Error statuses still carry the envelope; fall back to the status
        // line when the body is not one.
        match response.json::<Envelope<T>>().await {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => {
                Err(ApiError::Rejected(format!("server returned {status}")))
            }
            Err(err) => Err(ApiError::Malformed(err.to_string())),
        }
    }

    fn accepted<T>(envelope: Envelope<T>) -> Result<Envelope<T>, ApiError> {
        if envelope.success {
            Ok(envelope)
        } else {
            Err(ApiError::Rejected(
                envelope
                    .message
                    .unwrap_or_else(|| "request rejected".to_string()),
            ))
        }
    }

    /// GET returning the envelope's `data`.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.http.get(self.url(path)).send().await?;
        let envelope = Self::accepted(Self::decode::<T>(response).await?)?;
        envelope
            .data
            .ok_or_else(|| ApiError::Malformed("missing data".to_string()))
    }

    /// Send a JSON body and return the decoded, success-checked envelope.
    pub(crate) async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<Envelope<T>, ApiError> {
        let response = self
            .http
            .request(method, self.url(path))
            .json(body)
            .send()
            .await?;
        Self::accepted(Self::decode(response).await?)
    }

    /// Bodyless request (approve/deny/delete style) returning the success
    /// message.
    pub(crate) async fn send_empty(
        &self,
        method: reqwest::Method,
        path: &str,
    ) -> Result<String, ApiError> {
        let response = self.http.request(method, self.url(path)).send().await?;
        let envelope = Self::accepted(Self::decode::<serde_json::Value>(response).await?)?;
        Ok(envelope.message.unwrap_or_default())
    }

    pub(crate) fn message<T>(envelope: Envelope<T>) -> String {
        envelope.message.unwrap_or_default()
    }

    pub(crate) fn data<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
        envelope
            .data
            .ok_or_else(|| ApiError::Malformed("missing data".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let client = ApiClient::new("https://cms.example.org/api/v1/");
        assert_eq!(client.base_url(), "https://cms.example.org/api/v1");
        assert_eq!(
            client.url("/admin/alladmins"),
            "https://cms.example.org/api/v1/admin/alladmins"
        );
    }

    #[test]
    fn from_config_uses_configured_endpoint() {
        let mut config = store::AdminConfig::default();
        config.api.base_url = "https://cms.example.org/api/v1".into();
        let client = ApiClient::from_config(&config);
        assert_eq!(client.base_url(), "https://cms.example.org/api/v1");
    }

    #[test]
    fn envelope_decodes_without_message_or_data() {
        let envelope: Envelope<Vec<String>> = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(envelope.success);
        assert!(envelope.message.is_none());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn rejected_envelope_surfaces_backend_message() {
        let envelope: Envelope<()> =
            serde_json::from_str(r#"{"success": false, "message": "Email already in use"}"#)
                .unwrap();
        let err = ApiClient::accepted(envelope).unwrap_err();
        assert_eq!(err.to_string(), "Email already in use");
    }

    #[test]
    fn missing_data_is_malformed() {
        let envelope: Envelope<Vec<String>> =
            serde_json::from_str(r#"{"success": true, "message": "ok"}"#).unwrap();
        assert!(matches!(
            ApiClient::data(envelope),
            Err(ApiError::Malformed(_))
        ));
    }
}
