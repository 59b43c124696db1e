//! Score command handler.
//!
//! Classifies an explicit list of cards and shows how the score is built:
//! base chips of the category plus the chip values of the triggered cards,
//! times the category multiplier.

use crate::error::CliError;
use crate::formatters::format_cards;
use crate::validation::parse_cards;
use ante_engine::scoring::evaluate_play;
use std::io::Write;

/// Handle the score command.
///
/// # Errors
///
/// `CliError::InvalidInput` for a token that is not a card, `CliError::Engine`
/// for an empty or oversized play.
pub fn handle_score_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let cards = parse_cards(cards)?;
    let result = evaluate_play(&cards)?;

    let chip_total: u64 = result
        .triggered
        .iter()
        .map(|c| u64::from(c.chip_value()))
        .sum();

    writeln!(out, "Cards: {}", format_cards(&result.played))?;
    writeln!(out, "Hand: {}", result.category)?;
    writeln!(out, "Triggered: {}", format_cards(&result.triggered))?;
    writeln!(
        out,
        "Chips: {} + {} | Mult: {}",
        result.category.base_chips(),
        chip_total,
        result.category.multiplier()
    )?;
    writeln!(out, "Score: {}", result.score)?;
    Ok(())
}
