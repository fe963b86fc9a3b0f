//! Project endpoints. Create and edit share one form; the presence of an
//! `id` decides which endpoint a submission hits.

use reqwest::Method;
use store::forms::ProjectForm;
use store::models::{Project, ProjectCategory};

use crate::{ApiClient, ApiError};

impl ApiClient {
    /// `GET /project/getprojects?cat={category}`
    pub async fn projects(&self, category: ProjectCategory) -> Result<Vec<Project>, ApiError> {
        self.get_data(&format!("/project/getprojects?cat={}", category.as_str()))
            .await
    }

    /// `POST /project/addupcomingproject` or `POST /project/addpastproject`
    /// for new records, `PUT /project/editproject/{id}` when the form
    /// carries an id.
    pub async fn submit_project(
        &self,
        category: ProjectCategory,
        form: &ProjectForm,
    ) -> Result<String, ApiError> {
        let envelope = match &form.id {
            Some(id) if !id.is_empty() => {
                self.send_json::<Project, _>(
                    Method::PUT,
                    &format!("/project/editproject/{id}"),
                    form,
                )
                .await?
            }
            _ => {
                let path = match category {
                    ProjectCategory::Upcoming => "/project/addupcomingproject",
                    ProjectCategory::Past => "/project/addpastproject",
                };
                self.send_json::<Project, _>(Method::POST, path, form).await?
            }
        };
        Ok(Self::message(envelope))
    }

    /// `DELETE /project/deleteproject/{id}`
    pub async fn delete_project(&self, id: &str) -> Result<String, ApiError> {
        self.send_empty(Method::DELETE, &format!("/project/deleteproject/{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_query_values() {
        assert_eq!(ProjectCategory::Upcoming.as_str(), "upcoming");
        assert_eq!(ProjectCategory::Past.as_str(), "past");
    }

    #[test]
    fn project_decodes_rich_text_fields() {
        let body = r#"{
            "success": true,
            "data": [{
                "_id": "p1", "title": "Sensor grid",
                "objective": "Deploy 40 nodes",
                "importance": "Early flood warning",
                "technology": "LoRa",
                "partners": "State EMA",
                "output": "Live dashboard"
            }]
        }"#;
        let envelope: crate::Envelope<Vec<Project>> = serde_json::from_str(body).unwrap();
        let projects = ApiClient::data(envelope).unwrap();
        assert_eq!(projects[0].technology, "LoRa");
        assert!(projects[0].category.is_none());
    }
}
