//! Print the effective engine configuration

use std::path::PathBuf;

use anyhow::Result;

use crate::commands::load_config;
use crate::error::CliError;

/// Execute the config command
///
/// Prints JSON with `--json`, YAML otherwise, so the output can be saved and
/// edited as a starting point.
pub fn execute(config_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let config = load_config(config_path)?;
    if json {
        let output = serde_json::json!({
            "success": true,
            "config": config,
        });
        println!("{}", serde_json::to_string_pretty(&output).map_err(CliError::from)?);
    } else {
        print!("{}", serde_yaml::to_string(&config)?);
    }
    Ok(())
}
