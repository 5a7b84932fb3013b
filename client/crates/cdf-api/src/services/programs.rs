use crate::models::{Program, ProgramInput};
use crate::{Client, ClientResult};

use reqwest::Method;

impl Client {
    pub async fn list_programs(&self) -> ClientResult<Vec<Program>> {
        let req = self.request(Method::GET, "/api/programs");
        self.execute(req, "Failed to fetch programs.").await
    }

    pub async fn get_program(&self, id: i64) -> ClientResult<Program> {
        let req = self.request(Method::GET, &format!("/api/programs/{}", id));
        self.execute(req, "Failed to fetch program.").await
    }

    pub async fn create_program(&self, input: &ProgramInput) -> ClientResult<Program> {
        let req = self.request(Method::POST, "/api/programs").json(input);
        self.execute(req, "Failed to create program.").await
    }

    pub async fn update_program(&self, id: i64, input: &ProgramInput) -> ClientResult<Program> {
        let req = self
            .request(Method::PUT, &format!("/api/programs/{}", id))
            .json(input);
        self.execute(req, "Failed to update program.").await
    }

    pub async fn delete_program(&self, id: i64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/programs/{}", id));
        self.execute_unit(req, "Failed to delete program.").await
    }
}
