use crate::ROLE_ADMIN;

use serde::Serialize;

/// Navigable areas of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Dashboard,
    Constituencies,
    Members,
    Programs,
    Projects,
    ProgressUpdates,
    Comments,
    Users,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Dashboard,
        Section::Constituencies,
        Section::Members,
        Section::Programs,
        Section::Projects,
        Section::ProgressUpdates,
        Section::Comments,
        Section::Users,
    ];

    /// Whether the section appears in the menu for `role`.
    ///
    /// `None` means no session. User management is admin-only; every other
    /// section is open to any signed-in role.
    pub fn is_visible_to(self, role: Option<&str>) -> bool {
        match role {
            None => false,
            Some(role) => match self {
                Section::Users => role == ROLE_ADMIN,
                _ => true,
            },
        }
    }

    /// Sections visible to `role`, in menu order.
    pub fn visible_to(role: Option<&str>) -> Vec<Section> {
        Self::ALL
            .into_iter()
            .filter(|section| section.is_visible_to(role))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Constituencies => "Constituencies",
            Section::Members => "Members",
            Section::Programs => "Programs",
            Section::Projects => "Projects",
            Section::ProgressUpdates => "Progress Updates",
            Section::Comments => "Comments",
            Section::Users => "Users",
        }
    }
}
