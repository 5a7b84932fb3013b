use crate::cli::PageArgs;

use std::path::PathBuf;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProgressCommands {
    /// List progress updates for a project
    List {
        project_id: i64,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Get a progress update by ID
    Get { id: i64 },

    /// Post a progress update, optionally attaching a file
    Create {
        #[arg(long)]
        project_id: i64,

        #[arg(long)]
        description: String,

        /// Completion, 0-100
        #[arg(long)]
        percentage: Option<f64>,

        /// Photo or report to upload
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Replace a progress update
    Update {
        id: i64,

        #[arg(long)]
        description: String,

        #[arg(long)]
        percentage: Option<f64>,

        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Delete a progress update
    Delete { id: i64 },
}
