//! Deal command handler for dealing and displaying an opening hand.
//!
//! Shuffles a fresh deck and shows the sorted eight-card hand a blind would
//! start with, together with the best category the whole hand forms.
//! The command supports optional seeding for deterministic dealing.

use crate::error::CliError;
use crate::formatters::format_hand;
use ante_engine::cards::sort_hand;
use ante_engine::deck::Deck;
use ante_engine::hand::classify;
use ante_engine::round::HAND_SIZE;
use std::io::Write;

/// Handle the deal command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed for deterministic dealing
/// * `out` - Output stream for command results
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::shuffled(seed);
    let mut hand = deck.draw(HAND_SIZE);
    sort_hand(&mut hand);

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Hand: {}", format_hand(&hand))?;
    writeln!(out, "Best: {}", classify(&hand))?;
    writeln!(out, "Cards left: {}", deck.remaining())?;
    Ok(())
}
