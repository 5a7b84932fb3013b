use crate::cli::PageArgs;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum MemberCommands {
    /// List members
    List {
        /// Only members of this constituency
        #[arg(long)]
        constituency_id: Option<i64>,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Get a member by ID
    Get { id: i64 },

    /// Create a member
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        /// e.g. chairperson, treasurer
        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        constituency_id: Option<i64>,
    },

    /// Replace a member's details
    Update {
        id: i64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        constituency_id: Option<i64>,
    },

    /// Delete a member
    Delete { id: i64 },
}
