//! Input parsing and validation for interactive commands.
//!
//! This module turns raw lines typed at the `play> ` / `discard> ` and
//! `restart> ` prompts into intents, and card lists given on the command
//! line into [`Card`]s.

use ante_engine::cards::Card;
use ante_engine::errors::GameError;

/// Whether a selection is played or discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Play,
    Discard,
}

impl Mode {
    pub fn prompt(self) -> &'static str {
        match self {
            Mode::Play => "play",
            Mode::Discard => "discard",
        }
    }
}

/// Result type for parsing one line of interactive input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Switch between playing and discarding
    Mode(Mode),
    /// 0-based hand positions, in typed order, without repeats
    Select(Vec<usize>),
    /// User entered quit command (q or quit)
    Quit,
    /// Nothing usable; the message says why
    Invalid(String),
}

/// Parse a line typed at the play/discard prompt.
///
/// Accepts the following input formats (case-insensitive):
/// - "p" or "play" → play mode
/// - "d" or "discard" → discard mode
/// - a string of digits → 1-based hand positions
/// - "q" or "quit" → Quit command
///
/// Digits outside `1..=hand_size` are dropped and a repeated digit counts
/// once. A digit string with nothing left after that is invalid.
///
/// # Example
///
/// ```rust
/// # use ante_cli::validation::{parse_input, Mode, ParseResult};
/// assert_eq!(parse_input("d", 8), ParseResult::Mode(Mode::Discard));
/// assert_eq!(parse_input("1359", 8), ParseResult::Select(vec![0, 2, 4]));
/// assert_eq!(parse_input("quit", 8), ParseResult::Quit);
/// ```
pub fn parse_input(input: &str, hand_size: usize) -> ParseResult {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "" => ParseResult::Invalid("Empty input".to_string()),
        "p" | "play" => ParseResult::Mode(Mode::Play),
        "d" | "discard" => ParseResult::Mode(Mode::Discard),
        "q" | "quit" => ParseResult::Quit,
        digits if digits.chars().all(|c| c.is_ascii_digit()) => {
            let mut selected = Vec::new();
            for position in digits.chars().filter_map(|c| c.to_digit(10)) {
                let position = position as usize;
                if (1..=hand_size).contains(&position) && !selected.contains(&(position - 1)) {
                    selected.push(position - 1);
                }
            }
            if selected.is_empty() {
                ParseResult::Invalid(format!("No card positions in 1..={}", hand_size))
            } else {
                ParseResult::Select(selected)
            }
        }
        other => ParseResult::Invalid(format!("Unrecognized input: {}", other)),
    }
}

/// `y`/`yes` retries the ante; anything else quits.
pub fn parse_restart(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Parse card tokens such as `A♥`, `10s` or `Td`.
///
/// # Errors
///
/// [`GameError::InvalidCard`] for the first token that is not a card.
pub fn parse_cards<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Card>, GameError> {
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}
