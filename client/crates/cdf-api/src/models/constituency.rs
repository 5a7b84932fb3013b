use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constituency {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for create and full update
#[derive(Debug, Clone, Serialize)]
pub struct ConstituencyInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}
