use anyhow::{Context, Result};
use serde::Serialize;

/// Writes `value` to stdout as pretty JSON. Logs go to stderr.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
