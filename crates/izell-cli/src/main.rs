use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use izell_core::{AppConfig, Page};

mod commands;

#[derive(Parser)]
#[command(name = "izell")]
#[command(author, version, about = "Izell Interiors company brochure for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Page to open on start (home, about, projects, contact)
    #[arg(short = 'p', long = "page", global = true)]
    page: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive brochure (default)
    Run,
    /// List the site's pages in navigation order
    Pages,
    /// Print the resolved configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first so its log level can seed the filter
    let config = Arc::new(AppConfig::load()?);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let initial_page = match &cli.page {
        Some(slug) => slug.parse::<Page>()?,
        None => Page::Home,
    };

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, initial_page).await,
        Some(Commands::Pages) => commands::pages::run(),
        Some(Commands::Config) => commands::config::run(&config),
    }
}
