use crate::cli::PageArgs;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum CommentCommands {
    /// List comments on a project
    List {
        project_id: i64,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Comment on a project
    Create {
        #[arg(long)]
        project_id: i64,

        #[arg(long)]
        content: String,
    },

    /// Edit a comment
    Update {
        id: i64,

        #[arg(long)]
        content: String,
    },

    /// Delete a comment
    Delete { id: i64 },
}
