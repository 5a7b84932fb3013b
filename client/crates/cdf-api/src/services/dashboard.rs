use crate::models::DashboardSummary;
use crate::{Client, ClientResult};

use reqwest::Method;

impl Client {
    pub async fn dashboard_summary(&self) -> ClientResult<DashboardSummary> {
        let req = self.request(Method::GET, "/api/dashboard/summary");
        self.execute(req, "Failed to load dashboard.").await
    }
}
