use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
}

impl Suit {
    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Spades => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    fn parse(token: &str) -> Option<Suit> {
        match token.to_ascii_lowercase().as_str() {
            "♥" | "h" => Some(Suit::Hearts),
            "♠" | "s" => Some(Suit::Spades),
            "♦" | "d" => Some(Suit::Diamonds),
            "♣" | "c" => Some(Suit::Clubs),
            _ => None,
        }
    }
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// The discriminant is the ace-high order used for straights and sorting.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14, or 1 in a wheel)
    Ace,
}

impl Rank {
    /// Chips this rank contributes when the card is triggered.
    pub fn chip_value(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::King | Rank::Queen | Rank::Jack => 10,
            r => r as u32,
        }
    }

    /// Position of the rank in a run of consecutive ranks.
    ///
    /// With `low_ace` the ace counts as 1 so that A-2-3-4-5 forms a straight;
    /// otherwise it counts as 14.
    pub fn order(self, low_ace: bool) -> u8 {
        match self {
            Rank::Ace if low_ace => 1,
            r => r as u8,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    fn parse(token: &str) -> Option<Rank> {
        let rank = match token.to_ascii_uppercase().as_str() {
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "10" | "T" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            "A" => Rank::Ace,
            _ => return None,
        };
        Some(rank)
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are immutable values; the deck guarantees each one appears once.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The suit of the card (Hearts, Spades, Diamonds or Clubs)
    pub suit: Suit,
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { suit, rank }
    }

    pub fn chip_value(&self) -> u32 {
        self.rank.chip_value()
    }

    pub fn rank_order(&self, low_ace: bool) -> u8 {
        self.rank.order(low_ace)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

/// Parses `A♥`, `10♠`, `Td`, `7c` and friends. Case-insensitive.
impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || GameError::InvalidCard(s.to_string());
        let (split, _) = s.char_indices().last().ok_or_else(invalid)?;
        let (rank, suit) = s.split_at(split);
        let rank = Rank::parse(rank).ok_or_else(invalid)?;
        let suit = Suit::parse(suit).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in all_ranks().iter().rev() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

/// Sorts a hand for display: aces first, twos last. Equal ranks keep their order.
pub fn sort_hand(hand: &mut [Card]) {
    hand.sort_by(|a, b| b.rank.cmp(&a.rank));
}
