use crate::models::User;
use crate::{Client, ClientResult};

use reqwest::Method;

impl Client {
    /// List dashboard accounts (admin only on the backend)
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        let req = self.request(Method::GET, "/api/users");
        self.execute(req, "Failed to fetch users.").await
    }

    pub async fn get_user(&self, id: i64) -> ClientResult<User> {
        let req = self.request(Method::GET, &format!("/api/users/{}", id));
        self.execute(req, "Failed to fetch user.").await
    }

    pub async fn delete_user(&self, id: i64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/users/{}", id));
        self.execute_unit(req, "Failed to delete user.").await
    }
}
