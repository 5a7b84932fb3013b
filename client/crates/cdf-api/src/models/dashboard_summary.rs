use serde::{Deserialize, Serialize};

/// Totals shown on the landing screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    pub total_constituencies: u64,
    pub total_members: u64,
    pub total_programs: u64,
    pub total_projects: u64,
    pub completed_projects: u64,
    pub ongoing_projects: u64,
    pub total_budget: f64,
}
