//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the resolved
//! configuration with the source of every value (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "level": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   "seed": {
//!     "value": 42,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, ConfigResolved};
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let display = config_json(&resolved);
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

fn config_json(resolved: &ConfigResolved) -> serde_json::Value {
    let ConfigResolved { config, sources } = resolved;
    serde_json::json!({
        "level": {
            "value": config.level,
            "source": sources.level,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "hands": {
            "value": config.hands,
            "source": sources.hands,
        },
        "discards": {
            "value": config.discards,
            "source": sources.discards,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_json_reports_sources() {
        let resolved = config::load_from(|key| match key {
            "ANTE_SEED" => Some("42".to_string()),
            _ => None,
        })
        .unwrap();
        let json = config_json(&resolved);

        assert_eq!(json["seed"]["value"], 42);
        assert_eq!(json["seed"]["source"], "env");
        assert_eq!(json["level"]["value"], 1);
        assert_eq!(json["level"]["source"], "default");
        assert_eq!(json["hands"]["value"], 4);
        assert_eq!(json["discards"]["value"], 4);
    }

    #[test]
    fn test_config_json_unset_seed_is_null() {
        let resolved = config::load_from(|_| None).unwrap();
        assert!(config_json(&resolved)["seed"]["value"].is_null());
    }
}
