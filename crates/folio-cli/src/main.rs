use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::FolioConfig;
use folio_core::config::DataDir;
use folio_infrastructure::ConfigService;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - portfolio data pipeline (repositories, public profile, gains)", long_about = None)]
struct Cli {
    /// Config file (default: ~/.config/folio/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding gains.json and profile.fallback.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the landing page data as JSON
    Home,
    /// Print one project's repository and gains as JSON
    Project {
        /// Repository name
        name: String,
    },
    /// Print the scraped profile merged with the local fallback
    Profile {
        /// Also write profile.merged.json to the data directory
        #[arg(long)]
        write: bool,
    },
    /// Inspect or export the local gains file
    Gains {
        #[command(subcommand)]
        action: GainsAction,
    },
}

#[derive(Subcommand)]
enum GainsAction {
    /// Print per-project summaries and totals by label
    Summary,
    /// Write gains.csv and gains.summary.json to the data directory
    Export,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Home => commands::home::run(config).await?,
        Commands::Project { name } => commands::project::run(config, &name).await?,
        Commands::Profile { write } => commands::profile::run(config, write).await?,
        Commands::Gains { action } => match action {
            GainsAction::Summary => commands::gains::summary(&config)?,
            GainsAction::Export => commands::gains::export(&config)?,
        },
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<FolioConfig> {
    let service = match &cli.config {
        Some(path) => ConfigService::with_path(path),
        None => ConfigService::new(),
    };
    let mut config = service.load().context("Failed to load configuration")?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = DataDir(dir.clone());
    }
    Ok(config)
}
