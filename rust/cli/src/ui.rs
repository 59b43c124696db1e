//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands: error messages, warnings and prompts.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Write a prompt without a trailing newline and flush it so it shows before input.
pub fn prompt(out: &mut dyn Write, label: &str) -> std::io::Result<()> {
    write!(out, "{}> ", label)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_has_no_newline() {
        let mut out = Vec::new();
        prompt(&mut out, "play").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "play> ");
    }

    #[test]
    fn test_write_error_prefix() {
        let mut err = Vec::new();
        write_error(&mut err, "bad").unwrap();
        assert_eq!(String::from_utf8(err).unwrap(), "Error: bad\n");
    }
}
