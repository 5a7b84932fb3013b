use serde::{Deserialize, Serialize};

/// Field report on a project's progress, optionally with a photo or document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub id: i64,
    pub project_id: i64,
    pub description: String,
    #[serde(default)]
    pub progress_percentage: Option<f64>,
    /// URL of the uploaded file, when one was attached
    #[serde(default)]
    pub attachment: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Multipart body for create and update
#[derive(Debug, Clone)]
pub struct ProgressUpdateInput {
    pub description: String,
    pub progress_percentage: Option<f64>,
    pub attachment: Option<Attachment>,
}

/// In-memory file sent as the `attachment` form part
#[derive(Debug, Clone)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
