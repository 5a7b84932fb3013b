use crate::cli::PageArgs;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List dashboard accounts
    List {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Get an account by ID
    Get { id: i64 },

    /// Register a new account
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        role: Option<String>,
    },

    /// Delete an account
    Delete { id: i64 },
}
