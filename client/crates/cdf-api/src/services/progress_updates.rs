use crate::models::{ProgressUpdate, ProgressUpdateInput};
use crate::{Client, ClientResult};

use reqwest::Method;
use reqwest::multipart::{Form, Part};

impl Client {
    pub async fn list_progress_updates(&self, project_id: i64) -> ClientResult<Vec<ProgressUpdate>> {
        let req = self.request(
            Method::GET,
            &format!("/api/projects/{}/progress-updates", project_id),
        );
        self.execute(req, "Failed to fetch progress updates.").await
    }

    pub async fn get_progress_update(&self, id: i64) -> ClientResult<ProgressUpdate> {
        let req = self.request(Method::GET, &format!("/api/progress-updates/{}", id));
        self.execute(req, "Failed to fetch progress update.").await
    }

    /// Sent as `multipart/form-data` so a file can ride along
    pub async fn create_progress_update(
        &self,
        project_id: i64,
        input: &ProgressUpdateInput,
    ) -> ClientResult<ProgressUpdate> {
        let req = self
            .request(
                Method::POST,
                &format!("/api/projects/{}/progress-updates", project_id),
            )
            .multipart(progress_form(input));
        self.execute(req, "Failed to create progress update.").await
    }

    pub async fn update_progress_update(
        &self,
        id: i64,
        input: &ProgressUpdateInput,
    ) -> ClientResult<ProgressUpdate> {
        let req = self
            .request(Method::PUT, &format!("/api/progress-updates/{}", id))
            .multipart(progress_form(input));
        self.execute(req, "Failed to update progress update.").await
    }

    pub async fn delete_progress_update(&self, id: i64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/progress-updates/{}", id));
        self.execute_unit(req, "Failed to delete progress update.").await
    }
}

fn progress_form(input: &ProgressUpdateInput) -> Form {
    let mut form = Form::new().text("description", input.description.clone());

    if let Some(percentage) = input.progress_percentage {
        form = form.text("progress_percentage", percentage.to_string());
    }

    if let Some(attachment) = &input.attachment {
        let part = Part::bytes(attachment.bytes.clone()).file_name(attachment.file_name.clone());
        form = form.part("attachment", part);
    }

    form
}
