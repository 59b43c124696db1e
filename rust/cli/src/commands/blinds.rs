//! Blinds command handler.
//!
//! Lists the Small, Big and Boss blind of an ante with the score each one
//! requires and the cash it pays.

use crate::config;
use crate::error::CliError;
use crate::ui;
use ante_engine::blinds::AnteRun;
use std::io::Write;

/// Handle the blinds command. Without `--ante` the configured level is shown.
pub fn handle_blinds_command(ante: Option<u8>, out: &mut dyn Write) -> Result<(), CliError> {
    let ante = match ante {
        Some(a) => a,
        None => {
            config::load_with_sources()
                .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?
                .config
                .level
        }
    };
    write_blinds(ante, out)
}

fn write_blinds(ante: u8, out: &mut dyn Write) -> Result<(), CliError> {
    let run = AnteRun::new(ante);
    writeln!(out, "Ante {}", ante)?;
    for (blind, requirement) in run.blinds() {
        writeln!(
            out,
            "{} : {} | reward ${}",
            blind.name(),
            requirement,
            blind.reward()
        )?;
    }
    if run.blinds().iter().any(|(_, r)| r.chips().is_none()) {
        ui::display_warning(out, "some requirements of this ante can never be reached")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinds(ante: u8) -> String {
        let mut out = Vec::new();
        handle_blinds_command(Some(ante), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_first_ante() {
        let output = blinds(1);
        assert!(output.contains("Small blind : 300 | reward $3"));
        assert!(output.contains("Big blind : 450 | reward $4"));
        assert!(output.contains("Boss blind : 600 | reward $5"));
        assert!(!output.contains("WARNING"));
    }

    #[test]
    fn test_capped_ante_is_unreachable() {
        let output = blinds(39);
        assert!(output.contains("Small blind : ∞"));
        assert!(output.contains("WARNING"));
    }
}
