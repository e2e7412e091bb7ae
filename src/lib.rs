//! Environment Reporter Library
//!
//! Loads an optional `.env` file on top of the process environment and reports
//! the configured MongoDB connection URL. The loaded environment is an explicit
//! snapshot; the real process environment is never modified.

pub mod config;
pub mod constants;
pub mod dotenv;
pub mod report;
pub mod settings;

pub use config::Config;
pub use constants::{EnvKey, MONGODB_URL_KEY};
pub use dotenv::{Environment, LoadReport, Loader, Source};
pub use report::{format_line, write_report};
pub use settings::Settings;

use anyhow::Result;
use std::io::Write;

/// Load the environment and write the report line to `out`
pub fn run_report<W: Write>(loader: &Loader, out: W) -> Result<LoadReport> {
    let (env, load_report) = loader.load()?;
    let settings = Settings::from_environment(&env);
    write_report(&settings, out)?;
    Ok(load_report)
}
