use crate::models::{Constituency, ConstituencyInput};
use crate::{Client, ClientResult};

use reqwest::Method;

impl Client {
    pub async fn list_constituencies(&self) -> ClientResult<Vec<Constituency>> {
        let req = self.request(Method::GET, "/api/constituencies");
        self.execute(req, "Failed to fetch constituencies.").await
    }

    pub async fn get_constituency(&self, id: i64) -> ClientResult<Constituency> {
        let req = self.request(Method::GET, &format!("/api/constituencies/{}", id));
        self.execute(req, "Failed to fetch constituency.").await
    }

    pub async fn create_constituency(
        &self,
        input: &ConstituencyInput,
    ) -> ClientResult<Constituency> {
        let req = self
            .request(Method::POST, "/api/constituencies")
            .json(input);
        self.execute(req, "Failed to create constituency.").await
    }

    pub async fn update_constituency(
        &self,
        id: i64,
        input: &ConstituencyInput,
    ) -> ClientResult<Constituency> {
        let req = self
            .request(Method::PUT, &format!("/api/constituencies/{}", id))
            .json(input);
        self.execute(req, "Failed to update constituency.").await
    }

    pub async fn delete_constituency(&self, id: i64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/constituencies/{}", id));
        self.execute_unit(req, "Failed to delete constituency.").await
    }
}
