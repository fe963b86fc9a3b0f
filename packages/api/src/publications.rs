//! Publication endpoints.

use reqwest::Method;
use store::forms::PublicationForm;
use store::models::Publication;

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /pub/getpublications`
    pub async fn publications(&self) -> Result<Vec<Publication>, ApiError> {
        self.get_data("/pub/getpublications").await
    }

    /// `POST /pub/addpublication`
    pub async fn add_publication(&self, form: &PublicationForm) -> Result<String, ApiError> {
        let envelope = self
            .send_json::<Publication, _>(Method::POST, "/pub/addpublication", form)
            .await?;
        Ok(Self::message(envelope))
    }

    /// `PUT /pub/editpublication/{id}`
    pub async fn edit_publication(
        &self,
        id: &str,
        form: &PublicationForm,
    ) -> Result<String, ApiError> {
        let envelope = self
            .send_json::<Publication, _>(Method::PUT, &format!("/pub/editpublication/{id}"), form)
            .await?;
        Ok(Self::message(envelope))
    }

    /// `DELETE /pub/deletepublication/{id}`
    pub async fn delete_publication(&self, id: &str) -> Result<String, ApiError> {
        self.send_empty(Method::DELETE, &format!("/pub/deletepublication/{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use store::models::Publication;

    use crate::ApiClient;

    #[test]
    fn publication_authors_decode_as_list() {
        let body = r#"{
            "success": true,
            "data": [{
                "_id": "pub1", "title": "Flood modelling",
                "summary": "A study", "authors": ["Ada Obi", "Chidi Eze"],
                "link": "https://doi.example/10.1", "date": "2024-06-01"
            }]
        }"#;
        let envelope: crate::Envelope<Vec<Publication>> = serde_json::from_str(body).unwrap();
        let pubs = ApiClient::data(envelope).unwrap();
        assert_eq!(pubs[0].authors.join(", "), "Ada Obi, Chidi Eze");
    }
}
