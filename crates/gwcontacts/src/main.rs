//! gwcontacts - mail aliases from a Google Workspace directory.
//!
//! Authorizes against the People API (once, interactively; the token is
//! cached afterwards), lists the directory and prints one
//! `alias <nick> <name> <<email>>` line per address.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use gwcontacts_core::{AppPaths, DirectoryClient, normalize_all, open_output};
use gwcontacts_oauth::{
    AuthorizationCodeFlow, ClientCredentials, TerminalPrompt, TokenStore, authorize,
    provider::directory_scopes,
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout may carry the aliases
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_level().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let paths = AppPaths::from_user_config_dir()?;
    if let Err(e) = paths.ensure_config_dir() {
        warn!("Unable to create {}: {e}", paths.config_dir().display());
    }

    info!("Reading credentials file...");
    let credentials = ClientCredentials::load(&paths.credentials_file())
        .context("Unable to read client secret file")?;

    info!("Generating configuration...");
    let oauth = credentials
        .into_client(directory_scopes())
        .context("Unable to parse client secret file to config")?;

    let client = authorize(
        AuthorizationCodeFlow::new(oauth),
        TokenStore::new(paths.token_file()),
        &mut TerminalPrompt,
    )
    .await
    .context("Unable to obtain an access token")?;

    let mut directory = DirectoryClient::new(client)?;
    let people = directory
        .list_directory_people()
        .await
        .context("Unable to retrieve directory list")?;

    info!("Parsing response...");
    let contacts = normalize_all(&people);

    let mut writer = open_output(&cli.output_file)
        .with_context(|| format!("Unable to open output file {}", cli.output_file))?;

    info!("Generating aliases list...");
    let lines = writer.write_contacts(&contacts)?;
    writer.finish()?;

    info!("Done. Wrote {lines} aliases for {} contacts.", contacts.len());
    Ok(())
}
