//! Account endpoints: registration, login, password change and the
//! webmaster's roster moderation actions.

use reqwest::Method;
use store::forms::{AdminForm, Credentials, EditAdminForm, PasswordChange, WebmasterForm};
use store::models::Admin;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `POST /admin/createwebmaster`
    pub async fn create_webmaster(&self, form: &WebmasterForm) -> Result<String, ApiError> {
        let envelope = self
            .send_json::<Admin, _>(Method::POST, "/admin/createwebmaster", form)
            .await?;
        Ok(Self::message(envelope))
    }

    /// `POST /admin/createadmin` — admin and media registrations.
    pub async fn create_admin(&self, form: &AdminForm) -> Result<String, ApiError> {
        let envelope = self
            .send_json::<Admin, _>(Method::POST, "/admin/createadmin", form)
            .await?;
        Ok(Self::message(envelope))
    }

    /// `POST /admin/login` — resolves to the authenticated account.
    pub async fn login(&self, credentials: &Credentials) -> Result<Admin, ApiError> {
        let envelope = self
            .send_json::<Admin, _>(Method::POST, "/admin/login", credentials)
            .await?;
        Self::data(envelope)
    }

    /// `PUT /admin/editAdmin` — returns the updated account.
    pub async fn edit_admin(&self, form: &EditAdminForm) -> Result<Admin, ApiError> {
        let envelope = self
            .send_json::<Admin, _>(Method::PUT, "/admin/editAdmin", form)
            .await?;
        Self::data(envelope)
    }

    /// `PUT /admin/changePwdAdmin` — returns the refreshed account.
    pub async fn change_password(&self, form: &PasswordChange) -> Result<Admin, ApiError> {
        let envelope = self
            .send_json::<Admin, _>(Method::PUT, "/admin/changePwdAdmin", form)
            .await?;
        Self::data(envelope)
    }

    /// `GET /admin/alladmins`
    pub async fn all_admins(&self) -> Result<Vec<Admin>, ApiError> {
        self.get_data("/admin/alladmins").await
    }

    /// `PUT /admin/approve/{id}`
    pub async fn approve_admin(&self, id: &str) -> Result<String, ApiError> {
        self.send_empty(Method::PUT, &format!("/admin/approve/{id}"))
            .await
    }

    /// `PUT /admin/deny/{id}`
    pub async fn deny_admin(&self, id: &str) -> Result<String, ApiError> {
        self.send_empty(Method::PUT, &format!("/admin/deny/{id}"))
            .await
    }

    /// `DELETE /admin/delete/{id}`
    pub async fn remove_admin(&self, id: &str) -> Result<String, ApiError> {
        self.send_empty(Method::DELETE, &format!("/admin/delete/{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_list_decodes_from_envelope() {
        let body = r#"{
            "success": true,
            "data": [
                {"_id": "1", "firstname": "Ada", "lastname": "Obi",
                 "email": "ada@example.org", "role": "admin", "status": "approved"},
                {"_id": "2", "firstname": "Chidi", "lastname": "Eze",
                 "email": "chidi@example.org", "role": "media", "status": "pending"}
            ]
        }"#;
        let envelope: crate::Envelope<Vec<Admin>> = serde_json::from_str(body).unwrap();
        let admins = ApiClient::data(envelope).unwrap();
        assert_eq!(admins.len(), 2);
        assert_eq!(admins[1].status.to_string(), "pending");
    }

    #[test]
    fn moderation_paths() {
        let client = ApiClient::new("http://localhost:4000/api/v1");
        assert_eq!(
            client.url("/admin/approve/64fa"),
            "http://localhost:4000/api/v1/admin/approve/64fa"
        );
        assert_eq!(
            client.url("/admin/delete/64fa"),
            "http://localhost:4000/api/v1/admin/delete/64fa"
        );
    }
}
