use crate::models::{Project, ProjectInput};
use crate::{Client, ClientResult};

use reqwest::Method;

impl Client {
    /// List projects, filtered by whichever of the arguments are set
    pub async fn list_projects(
        &self,
        constituency_id: Option<i64>,
        program_id: Option<i64>,
        status: Option<&str>,
    ) -> ClientResult<Vec<Project>> {
        let req = self.request_with_query(
            Method::GET,
            "/api/projects",
            &[
                ("constituency_id", constituency_id.map(|id| id.to_string())),
                ("program_id", program_id.map(|id| id.to_string())),
                ("status", status.map(String::from)),
            ],
        );
        self.execute(req, "Failed to fetch projects.").await
    }

    pub async fn get_project(&self, id: i64) -> ClientResult<Project> {
        let req = self.request(Method::GET, &format!("/api/projects/{}", id));
        self.execute(req, "Failed to fetch project.").await
    }

    pub async fn create_project(&self, input: &ProjectInput) -> ClientResult<Project> {
        let req = self.request(Method::POST, "/api/projects").json(input);
        self.execute(req, "Failed to create project.").await
    }

    pub async fn update_project(&self, id: i64, input: &ProjectInput) -> ClientResult<Project> {
        let req = self
            .request(Method::PUT, &format!("/api/projects/{}", id))
            .json(input);
        self.execute(req, "Failed to update project.").await
    }

    pub async fn delete_project(&self, id: i64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/projects/{}", id));
        self.execute_unit(req, "Failed to delete project.").await
    }
}
