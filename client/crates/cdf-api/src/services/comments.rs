use crate::models::{Comment, CommentInput};
use crate::{Client, ClientResult};

use reqwest::Method;

impl Client {
    /// List comments on a project
    pub async fn list_comments(&self, project_id: i64) -> ClientResult<Vec<Comment>> {
        let req = self.request(
            Method::GET,
            &format!("/api/projects/{}/comments", project_id),
        );
        self.execute(req, "Failed to fetch comments.").await
    }

    /// Create a comment on a project
    pub async fn create_comment(&self, project_id: i64, content: &str) -> ClientResult<Comment> {
        let body = CommentInput {
            content: content.to_string(),
        };
        let req = self
            .request(
                Method::POST,
                &format!("/api/projects/{}/comments", project_id),
            )
            .json(&body);
        self.execute(req, "Failed to post comment.").await
    }

    pub async fn update_comment(&self, id: i64, content: &str) -> ClientResult<Comment> {
        let body = CommentInput {
            content: content.to_string(),
        };
        let req = self
            .request(Method::PUT, &format!("/api/comments/{}", id))
            .json(&body);
        self.execute(req, "Failed to update comment.").await
    }

    pub async fn delete_comment(&self, id: i64) -> ClientResult<()> {
        let req = self.request(Method::DELETE, &format!("/api/comments/{}", id));
        self.execute_unit(req, "Failed to delete comment.").await
    }
}
