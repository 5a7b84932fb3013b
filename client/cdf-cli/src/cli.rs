use crate::commands::Commands;

use clap::{Args, Parser};

#[derive(Parser)]
#[command(name = "cdf")]
#[command(about = "Constituency Development Fund administration client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Backend URL (overrides api.base_url from config)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}

/// Client-side paging for list commands
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct PageArgs {
    /// Page number (1-based); omit to print the whole list
    #[arg(long)]
    pub(crate) page: Option<usize>,

    /// Rows per page
    #[arg(long, default_value_t = 10)]
    pub(crate) per_page: usize,
}
