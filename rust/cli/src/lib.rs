//! # Ante CLI Library
//!
//! This library provides the command-line interface for the ante scoring game.
//! It exposes subcommands for playing an ante interactively and for inspecting
//! hands, decks, blinds and configuration.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. [`run_with_input`] does the same
//! with an explicit input stream for the interactive `play` command.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["ante", "score", "7h", "7s", "7d", "7c", "Kh"];
//! let mut out = Vec::new();
//! let code = ante_cli::run(args, &mut out, &mut io::stderr());
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Score: 616"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play the Small, Big and Boss blind of an ante
//! - `score`: Classify and score an explicit list of cards
//! - `deal`: Shuffle a deck and show the opening hand
//! - `blinds`: Show requirements and rewards of an ante
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
#[macro_use]
mod macros;
pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{AnteCli, Commands};

use commands::{
    handle_blinds_command, handle_cfg_command, handle_deal_command, handle_play_command,
    handle_score_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// The `play` command reads its input from the process's stdin.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success (including quitting a game), `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["ante", "deal", "--seed", "42"];
/// let code = ante_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Use stdin for real input (supports both TTY and piped stdin)
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading interactive input from `input`.
///
/// ```
/// use std::io::Cursor;
/// let mut input = Cursor::new(b"q\n".to_vec());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let args = ["ante", "play", "--seed", "1"];
/// assert_eq!(ante_cli::run_with_input(args, &mut input, &mut out, &mut err), 0);
/// assert!(String::from_utf8(out).unwrap().contains("Small blind : 300"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "score", "deal", "blinds", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = AnteCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    // Print clap error first
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Ante CLI");
                    write_or_exit!(err, "Usage: ante <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: ante --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Play {
                    ante,
                    seed,
                    history,
                } => handle_play_command(ante, seed, history, out, err, input),
                Commands::Score { cards } => handle_score_command(&cards, out),
                Commands::Deal { seed } => handle_deal_command(seed, out),
                Commands::Blinds { ante } => handle_blinds_command(ante, out),
                Commands::Cfg => handle_cfg_command(out, err),
            };
            match result {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    write_or_exit!(err, "Error: {}", e);
                    exit_code::ERROR
                }
            }
        }
    }
}
