use crate::models::{Member, MemberInput};
use crate::{Client, ClientResult};

use reqwest::Method;

impl Client {
    /// List members, optionally only those of one constituency
    pub async fn list_members(&self, constituency_id: Option<i64>) -> ClientResult<Vec<Member>> {
        let req = self.request_with_query(
            Method::GET,
            "/api/members",
            &[("constituency_id", constituency_id.map(|id| id.to_string()))],
        );
        self.execute(req, "Failed to fetch members.").await
    }

    pub async fn get_member(&self, id: i64) -> ClientResult<Member> {
        let req = self.request(Method::GET, &format!("/api/members/{}", id));
        self.execute(req, "Failed to fetch member.").await
    }

    pub async fn create_member(&self, input: &MemberInput) -> ClientResult<Member> {
        let req = self.request(Method::POST, "/api/members").json(input);
        self.execute(req, "Failed to create member.").await
    }

    pub async fn update_member(&self, id: i64, input: &MemberInput) -> ClientResult<Member> {
        let req = self
            .request(Method::PUT, &format!("/api/members/{}", id))
            .json(input);
        self.execute(req, "Failed to update member.").await
    }

    pub async fn delete_member(&self, id: i64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/members/{}", id));
        self.execute_unit(req, "Failed to delete member.").await
    }
}
