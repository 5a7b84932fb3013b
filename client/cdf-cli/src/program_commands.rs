use crate::cli::PageArgs;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum ProgramCommands {
    /// List all programs
    List {
        #[command(flatten)]
        paging: PageArgs,
    },

    /// Get a program by ID
    Get { id: i64 },

    /// Create a program
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        budget: Option<f64>,

        /// YYYY-MM-DD
        #[arg(long)]
        start_date: Option<String>,

        /// YYYY-MM-DD
        #[arg(long)]
        end_date: Option<String>,
    },

    /// Replace a program's details
    Update {
        id: i64,

        #[arg(long)]
        name: String,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        budget: Option<f64>,

        #[arg(long)]
        start_date: Option<String>,

        #[arg(long)]
        end_date: Option<String>,
    },

    /// Delete a program
    Delete { id: i64 },
}
