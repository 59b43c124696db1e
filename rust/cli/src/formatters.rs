//! Card, hand and round formatters for terminal display.
//!
//! This module provides pure functions for formatting game elements (cards,
//! the numbered hand, round state, play reports and cash-outs) for terminal
//! output. Suits use Unicode symbols with an ASCII fallback for terminal
//! environments that don't render them.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use ante_engine::cards::{Card, Rank, Suit};
//! use ante_cli::formatters::{format_card, format_hand};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! assert!(format_hand(&[ace_spades]).starts_with("1 A"));
//! ```

use ante_engine::blinds::{Blind, Payout, Requirement};
use ante_engine::cards::{Card, Suit};
use ante_engine::deck::DECK_SIZE;
use ante_engine::round::RoundSnapshot;
use ante_engine::scoring::PlayResult;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> String {
    if supports_unicode() {
        suit.symbol().to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Card as rank followed by suit, e.g. "10♥" (or "10h").
///
/// ```rust
/// use ante_engine::cards::{Card, Rank, Suit};
/// # use ante_cli::formatters::format_card;
///
/// let ten = Card::new(Rank::Ten, Suit::Hearts);
/// let formatted = format_card(&ten);
/// assert!(formatted == "10♥" || formatted == "10h");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(card.suit))
}

/// Cards separated by single spaces.
pub fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

/// The hand with 1-based positions, the numbers players type to select cards.
pub fn format_hand(hand: &[Card]) -> String {
    hand.iter()
        .enumerate()
        .map(|(i, c)| format!("{} {}", i + 1, format_card(c)))
        .collect::<Vec<_>>()
        .join("  ")
}

pub fn format_blind_header(blind: Blind, requirement: Requirement) -> String {
    format!("{} : {}", blind.name(), requirement)
}

/// Round state shown after every change: score line, budget line, hand.
pub fn format_snapshot(snapshot: &RoundSnapshot) -> String {
    format!(
        "Round score: {}/{} | Cards left: {}/{}\nHands left: {} | Discards left: {} | ${}\n{}",
        snapshot.score,
        snapshot.requirement,
        snapshot.deck_remaining,
        DECK_SIZE,
        snapshot.hands_left,
        snapshot.discards_left,
        snapshot.money,
        format_hand(&snapshot.hand)
    )
}

pub fn format_play(result: &PlayResult) -> String {
    format!(
        "Played {}: {} | Hand score: {}",
        result.category,
        format_cards(&result.played),
        result.score
    )
}

/// Cash-out breakdown; `money` is the total after the payout.
/// The interest line only appears when interest was earned.
pub fn format_payout(payout: &Payout, money: u32) -> String {
    let mut lines = vec![
        format!(" Cash Out: ${}", money),
        format!(" - Blind Reward: ${}", payout.reward),
        format!(" - Remaining Hands: ${}", payout.hand_bonus),
    ];
    if payout.interest > 0 {
        lines.push(format!(" - Interest: ${}", payout.interest));
    }
    lines.join("\n")
}

pub fn format_loss(blind: Blind, score: u64, requirement: Requirement) -> String {
    format!("You lost the {}. Score: {}/{}", blind.name(), score, requirement)
}
