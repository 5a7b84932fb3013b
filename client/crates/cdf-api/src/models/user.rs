use serde::{Deserialize, Serialize};

/// Dashboard account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,

    #[serde(default)]
    pub created_at: Option<String>,
}
