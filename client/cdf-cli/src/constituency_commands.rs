use crate::cli::PageArgs;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ConstituencyCommands {
    /// List all constituencies
    List {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Get a constituency by ID
    Get { id: i64 },

    /// Create a constituency
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        county: Option<String>,

        /// Official constituency code
        #[arg(long)]
        code: Option<String>,
    },

    /// Replace a constituency's details
    Update {
        id: i64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        county: Option<String>,

        #[arg(long)]
        code: Option<String>,
    },

    /// Delete a constituency
    Delete { id: i64 },
}
