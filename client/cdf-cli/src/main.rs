//! cdf - Constituency Development Fund administration client
//!
//! Every command prints a JSON envelope on stdout:
//! `{"status":"success","data":...}` or `{"status":"error","message":"..."}`.
//!
//! # Examples
//!
//! ```bash
//! # Sign in (stores the bearer token under .cdf/)
//! cdf login --email officer@cdf.go.ke --password secret
//!
//! # Second page of ongoing projects in a constituency
//! cdf project list --constituency-id 4 --status ongoing --page 2 --pretty
//!
//! # Post a progress update with a photo
//! cdf progress create --project-id 9 --description "Roof done" --file roof.jpg
//! ```

mod cli;
mod commands;
mod comment_commands;
mod constituency_commands;
mod dispatch;
mod error;
mod logger;
mod member_commands;
mod output;
mod program_commands;
mod progress_commands;
mod project_commands;
mod user_commands;

use crate::{cli::Cli, error::Result as CliErrorResult};

use cdf_api::Client;
use cdf_config::Config;
use cdf_session::{FileSessionStore, SessionManager};

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::debug;

#[tokio::main]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();

    let config = match startup(cli.server.take()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(output::EXIT_FAILURE);
        }
    };

    let token_path = match config.token_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(output::EXIT_FAILURE);
        }
    };

    let session = SessionManager::new(Arc::new(FileSessionStore::new(token_path)));
    debug!("Using backend {}", config.api.base_url);

    let client = Client::new(&config.api.base_url, session);
    let result = dispatch::run(&client, cli.command).await;

    ExitCode::from(output::report(result, cli.pretty))
}

/// Load and validate config, then bring up logging.
fn startup(server: Option<String>) -> CliErrorResult<Config> {
    let config = with_server_override(Config::load()?, server)?;

    logger::initialize(
        config.logging.level,
        config.logging.file.as_ref().map(PathBuf::from),
        config.logging.colored,
    )?;
    config.log_summary();

    Ok(config)
}

/// `--server` replaces `api.base_url` and is held to the same rules.
fn with_server_override(mut config: Config, server: Option<String>) -> CliErrorResult<Config> {
    if let Some(server) = server {
        config.api.base_url = server;
    }
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests;
