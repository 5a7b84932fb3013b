use crate::cli::PageArgs;

use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects
    List {
        #[arg(long)]
        constituency_id: Option<i64>,

        #[arg(long)]
        program_id: Option<i64>,

        /// e.g. planned, ongoing, completed
        #[arg(long)]
        status: Option<String>,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Get a project by ID
    Get { id: i64 },

    /// Create a project
    Create {
        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Replace a project's details
    Update {
        id: i64,

        #[command(flatten)]
        fields: ProjectFields,
    },

    /// Delete a project
    Delete { id: i64 },
}

#[derive(Args, Debug, Clone)]
pub struct ProjectFields {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub description: Option<String>,

    #[arg(long)]
    pub constituency_id: Option<i64>,

    #[arg(long)]
    pub program_id: Option<i64>,

    #[arg(long)]
    pub budget: Option<f64>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub start_date: Option<String>,

    #[arg(long)]
    pub end_date: Option<String>,
}
