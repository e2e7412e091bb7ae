//! Writes the report line

use anyhow::{Context, Result};
use std::io::Write;

use crate::constants::EnvKey;
use crate::settings::Settings;

/// Shown in place of a value that is not set at all
pub const ABSENT: &str = "None";

/// Format `"<label>: <value>"`, rendering a missing value as `None`
pub fn format_line(label: &str, value: Option<&str>) -> String {
    format!("{}: {}", label, value.unwrap_or(ABSENT))
}

/// Write the MongoDB URL line to `out`
pub fn write_report<W: Write>(settings: &Settings, mut out: W) -> Result<()> {
    let key = EnvKey::MongoDbUrl;
    let line = format_line(key.label(), settings.get(key));

    writeln!(out, "{}", line).context("Failed to write report")?;
    out.flush().context("Failed to flush report")?;

    Ok(())
}
