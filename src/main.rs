//! Environment Reporter CLI
//!
//! Loads an optional `.env` file and prints the MongoDB connection URL it
//! resolves to.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use env_report::config::CONFIG_FILE;
use env_report::{Config, run_report};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "envreport")]
#[command(about = "Load a .env file and report the MongoDB connection URL")]
#[command(version)]
#[command(long_about = "
envreport reads KEY=VALUE pairs from a local .env file (variables already set
in the environment win) and prints the MongoDB connection URL.

Examples:
  envreport                          # Report using ./.env
  envreport --env-file .env.local    # Read a different file
  envreport --override               # Let the file win over the environment
  envreport config                   # Show current configuration
")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    args: ReportArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the MongoDB URL (default)
    Report,

    /// Show current configuration
    Config,

    /// Create a sample configuration file
    InitConfig {
        /// Output path for config file (default: envreport.toml)
        #[arg(value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Accepted before or after the subcommand name
#[derive(Args, Debug, Default, Clone)]
struct ReportArgs {
    /// Dot-env file to read (default: .env)
    #[arg(short, long, value_name = "FILE", global = true)]
    env_file: Option<String>,

    /// Configuration file path
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Only look in the working directory, not its parents
    #[arg(long, global = true)]
    no_search: bool,

    /// Let values from the file replace variables already set
    #[arg(long = "override", global = true)]
    override_existing: bool,

    /// Verbose output on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(config_path) => {
            tracing::debug!("Loading config from {}", config_path.display());
            Config::load(config_path).context("Failed to load configuration file")
        }
        None => Config::discover("."),
    }
}

fn report(args: ReportArgs) -> Result<()> {
    let mut config = load_config(args.config)?;

    // Command line arguments take precedence over the config file
    if let Some(env_file) = args.env_file {
        config.env_file = Some(env_file);
    }
    if args.no_search {
        config.search_parents = Some(false);
    }
    if args.override_existing {
        config.override_existing = Some(true);
    }

    let loader = config.loader();
    let load_report = run_report(&loader, io::stdout().lock())?;

    match load_report.path {
        Some(path) => tracing::debug!(
            "Read {} ({} applied, {} already set)",
            path.display(),
            load_report.applied.len(),
            load_report.skipped.len()
        ),
        None => tracing::debug!("No env file found"),
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.args.verbose);

    match cli.command {
        None | Some(Commands::Report) => report(cli.args),

        Some(Commands::Config) => {
            let config_path = cli
                .args
                .config
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

            if config_path.exists() {
                let config_obj = Config::load(&config_path)?;
                println!("Configuration from: {}", config_path.display());
                println!();
                println!("{}", config_obj.to_toml()?);
            } else {
                println!("Configuration file not found: {}", config_path.display());
                println!("Using default configuration:");
                println!();
                println!("{}", Config::default().to_toml()?);
                println!();
                println!("To create a configuration file, run:");
                println!("  envreport init-config");
            }

            Ok(())
        }

        Some(Commands::InitConfig { output }) => {
            let config_path = output.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

            if config_path.exists() {
                println!(
                    "Configuration file already exists: {}",
                    config_path.display()
                );
                return Ok(());
            }

            let toml_content = Config::default().to_toml()?;

            std::fs::write(
                &config_path,
                format!("# envreport configuration\n\n{}", toml_content),
            )
            .context("Failed to write configuration file")?;

            println!("Created configuration file: {}", config_path.display());
            println!();
            println!("Edit the file to customize your settings:");
            println!("  - env_file: Name of the .env file to read");
            println!("  - search_parents: Look for the file in parent directories");
            println!("  - override_existing: Let file values win over the environment");

            Ok(())
        }
    }
}
