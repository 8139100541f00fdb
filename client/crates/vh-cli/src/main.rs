//! vh - Volunteer Hub session client
//!
//! Signs in against the Volunteer Hub backend, keeps the account in a session
//! file under the config directory and edits the signed-in profile. Every
//! command prints the resulting session as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Sign in as a volunteer
//! vh login --role volunteer --email a@b.com --password secret
//!
//! # Change the display name
//! vh profile edit-volunteer --name "New Name" --pretty
//!
//! # Sign out
//! vh logout
//! ```

mod cli;
mod commands;
mod error;
mod logger;
mod profile_commands;
mod register_commands;


use crate::{cli::Cli, commands::Commands, error::Result as CliResult};

use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use vh_config::Config;
use vh_core::Session;
use vh_session::{AuthClient, FileSessionStore, HttpAuthClient, SessionManager};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match setup() {
        Ok(config) => run(cli.command, cli.server, config).await,
        Err(e) => Err(e),
    };

    let output = result.and_then(|session| {
        let json = if cli.pretty {
            serde_json::to_string_pretty(&session)?
        } else {
            serde_json::to_string(&session)?
        };
        Ok(json)
    });

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load and validate configuration, then start logging.
fn setup() -> CliResult<Config> {
    let config = Config::load()?;
    config.validate()?;

    let colored = config.logging.colored && std::io::stderr().is_terminal();
    logger::initialize(config.logging.level, config.log_file_path()?, colored)?;

    info!("Starting vh v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    Ok(config)
}

async fn run(command: Commands, server: Option<String>, config: Config) -> CliResult<Session> {
    let base_url = server.unwrap_or_else(|| config.api.base_url.clone());
    let client: Arc<dyn AuthClient> =
        Arc::new(HttpAuthClient::with_timeout(&base_url, config.api.timeout())?);
    let store = Arc::new(FileSessionStore::new(
        config.session_dir()?,
        config.session.file_name.clone(),
    ));

    let session = SessionManager::start(client.clone(), store).await;

    match command {
        Commands::Login {
            role,
            email,
            password,
        } => {
            session.login(&email, &password, role).await?;
        }
        Commands::Register { action } => {
            action.execute(&session).await?;
        }
        Commands::Whoami => {}
        Commands::Logout => session.logout().await?,
        Commands::Profile { action } => {
            action.execute(&session, client).await?;
        }
    }

    Ok(session.snapshot().await)
}
