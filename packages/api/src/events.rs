//! Calendar event endpoints.

use reqwest::Method;
use store::forms::EventForm;
use store::models::Event;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /events/fetchevents`
    pub async fn events(&self) -> Result<Vec<Event>, ApiError> {
        self.get_data("/events/fetchevents").await
    }

    /// `POST /events/createevent`
    pub async fn create_event(&self, form: &EventForm) -> Result<String, ApiError> {
        let envelope = self
            .send_json::<Event, _>(Method::POST, "/events/createevent", form)
            .await?;
        Ok(Self::message(envelope))
    }

    /// `PUT /events/edit/{id}`
    pub async fn edit_event(&self, id: &str, form: &EventForm) -> Result<String, ApiError> {
        let envelope = self
            .send_json::<Event, _>(Method::PUT, &format!("/events/edit/{id}"), form)
            .await?;
        Ok(Self::message(envelope))
    }

    /// `DELETE /events/delete/{id}`
    pub async fn delete_event(&self, id: &str) -> Result<String, ApiError> {
        self.send_empty(Method::DELETE, &format!("/events/delete/{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use store::models::Event;

    use crate::ApiClient;

    #[test]
    fn event_decodes_without_flyer() {
        let body = r#"{
            "success": true,
            "data": [{
                "_id": "e1", "title": "Open day", "description": "Tours all day",
                "date": "2024-11-02", "time": "10:00", "location": "Main campus"
            }]
        }"#;
        let envelope: crate::Envelope<Vec<Event>> = serde_json::from_str(body).unwrap();
        let events = ApiClient::data(envelope).unwrap();
        assert_eq!(events[0].location, "Main campus");
        assert!(events[0].flyer.is_none());
    }
}
