//! Command-line client for the GHIN handicap service
//!
//! Logs in with the configured credentials, runs one command and prints the
//! result as JSON on stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! ghin search-courses --name "Pebble Beach" --state US-CA
//! ghin course-details 1234 --include-altered-tees
//! ghin scores --limit 10 --status Validated
//! ghin submit-score --file round.json
//! ```
//!
//! Credentials come from `GHIN_EMAIL` / `GHIN_PASSWORD` or the
//! `[credentials]` table of the config file.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ghin_client::{
    GhinClient,
    cli::{Cli, commands},
    config::ConfigLoader,
    utils::VERSION,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = ConfigLoader::new().load(cli.config.as_deref())?;
    settings.logging.verbose |= cli.verbose;

    let default_level = if settings.logging.verbose {
        "debug".to_string()
    } else {
        settings.logging.level.clone()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Config is loaded before the subscriber exists, so its logs are replayed here.
    match cli.config.as_deref() {
        Some(path) => tracing::debug!("Configuration file: {}", path.display()),
        None => tracing::debug!("No configuration file named; using defaults and environment"),
    }
    tracing::debug!("Effective configuration: {:?}", settings);
    tracing::debug!("ghin v{} using {}", VERSION, settings.api.base_url);

    let client = GhinClient::new(&settings)?;
    let output = commands::run(&client, &settings, cli.command).await?;
    println!("{}", output);

    Ok(())
}
