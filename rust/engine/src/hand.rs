use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{all_suits, Card, Rank, Suit};

/// Largest number of cards the classifier accepts (a full hand).
pub const MAX_CLASSIFIED_CARDS: usize = 8;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
    FiveOfAKind,
    FlushHouse,
}

impl HandCategory {
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::FiveOfAKind => "Five of a Kind",
            HandCategory::FlushHouse => "Flush House",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const ROYAL_RANKS: [Rank; 5] = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Ten];

// Rank and suit tallies shared by every predicate of the cascade.
struct Profile<'a> {
    cards: &'a [Card],
    rank_counts: [u8; 15], // 2..14 used
    suit_counts: [u8; 4],
}

impl<'a> Profile<'a> {
    fn new(cards: &'a [Card]) -> Self {
        let mut rank_counts = [0u8; 15];
        let mut suit_counts = [0u8; 4];
        for c in cards {
            rank_counts[c.rank as usize] += 1;
            suit_counts[c.suit.index()] += 1;
        }
        Self {
            cards,
            rank_counts,
            suit_counts,
        }
    }

    fn has_rank_count(&self, n: u8) -> bool {
        self.rank_counts.contains(&n)
    }

    fn ranks_with_count(&self, n: u8) -> usize {
        self.rank_counts.iter().filter(|&&c| c == n).count()
    }

    fn distinct_suits(&self) -> usize {
        self.suit_counts.iter().filter(|&&c| c > 0).count()
    }

    /// Ranks of every suit holding at least five of the cards.
    fn suited_runs(&self) -> impl Iterator<Item = Vec<Rank>> + '_ {
        all_suits()
            .into_iter()
            .filter(move |s| self.suit_counts[s.index()] >= 5)
            .map(move |s| self.ranks_of_suit(s))
    }

    fn ranks_of_suit(&self, suit: Suit) -> Vec<Rank> {
        self.cards
            .iter()
            .filter(|c| c.suit == suit)
            .map(|c| c.rank)
            .collect()
    }

    fn ranks(&self) -> Vec<Rank> {
        self.cards.iter().map(|c| c.rank).collect()
    }
}

type Predicate = fn(&Profile<'_>) -> bool;

// Evaluated top to bottom; the first satisfied predicate names the hand.
// Higher categories also satisfy some lower predicates, so order matters.
const CASCADE: [(HandCategory, Predicate); 12] = [
    (HandCategory::FiveOfAKind, five_of_a_kind),
    (HandCategory::FlushHouse, flush_house),
    (HandCategory::RoyalFlush, royal_flush),
    (HandCategory::StraightFlush, straight_flush),
    (HandCategory::FourOfAKind, four_of_a_kind),
    (HandCategory::FullHouse, full_house),
    (HandCategory::Flush, flush),
    (HandCategory::Straight, straight),
    (HandCategory::ThreeOfAKind, three_of_a_kind),
    (HandCategory::TwoPair, two_pair),
    (HandCategory::Pair, pair),
    (HandCategory::HighCard, high_card),
];

fn five_of_a_kind(p: &Profile<'_>) -> bool {
    (2..15usize)
        .filter(|&rank| p.rank_counts[rank] == 5)
        .any(|rank| {
            let mut seen = [false; 4];
            for c in p.cards.iter().filter(|c| c.rank as usize == rank) {
                seen[c.suit.index()] = true;
            }
            seen.iter().filter(|&&b| b).count() > 1
        })
}

fn flush_house(p: &Profile<'_>) -> bool {
    p.has_rank_count(3) && p.has_rank_count(2) && p.distinct_suits() == 1
}

fn royal_flush(p: &Profile<'_>) -> bool {
    p.cards.len() >= 5
        && p
            .suited_runs()
            .any(|ranks| is_straight(&ranks) && ROYAL_RANKS.iter().all(|r| ranks.contains(r)))
}

fn straight_flush(p: &Profile<'_>) -> bool {
    p.cards.len() >= 5 && p.suited_runs().any(|ranks| is_straight(&ranks))
}

fn four_of_a_kind(p: &Profile<'_>) -> bool {
    p.has_rank_count(4)
}

fn full_house(p: &Profile<'_>) -> bool {
    p.has_rank_count(3) && p.has_rank_count(2)
}

fn flush(p: &Profile<'_>) -> bool {
    p.suit_counts.iter().any(|&n| n >= 5)
}

fn straight(p: &Profile<'_>) -> bool {
    is_straight(&p.ranks())
}

fn three_of_a_kind(p: &Profile<'_>) -> bool {
    p.has_rank_count(3)
}

fn two_pair(p: &Profile<'_>) -> bool {
    p.ranks_with_count(2) == 2
}

fn pair(p: &Profile<'_>) -> bool {
    p.has_rank_count(2)
}

fn high_card(_: &Profile<'_>) -> bool {
    true
}

/// Classifies up to eight cards into the best matching category.
///
/// Total over its input: anything that matches no other category, including
/// an empty slice, is [`HandCategory::HighCard`].
pub fn classify(cards: &[Card]) -> HandCategory {
    let profile = Profile::new(cards);
    CASCADE
        .iter()
        .find(|(_, matches)| matches(&profile))
        .map(|(category, _)| *category)
        .unwrap_or(HandCategory::HighCard)
}

/// True when the distinct ranks contain five consecutive values, with the
/// ace played either high (10-J-Q-K-A) or low (A-2-3-4-5).
pub fn is_straight(ranks: &[Rank]) -> bool {
    [false, true].into_iter().any(|low_ace| {
        let mut orders: Vec<u8> = ranks.iter().map(|r| r.order(low_ace)).collect();
        orders.sort_unstable();
        orders.dedup();
        orders.windows(5).any(|w| w[4] - w[0] == 4)
    })
}

/// Cards of `played` whose chips count towards the score of `category`.
///
/// Keeps the order in which the cards were played.
pub fn triggered_cards(played: &[Card], category: HandCategory) -> Vec<Card> {
    let profile = Profile::new(played);
    let of_rank = |rank: Option<Rank>| -> Vec<Card> {
        played
            .iter()
            .filter(|c| Some(c.rank) == rank)
            .copied()
            .collect()
    };
    let first_with_count = |n: u8| {
        played
            .iter()
            .map(|c| c.rank)
            .find(|r| profile.rank_counts[*r as usize] == n)
    };

    match category {
        HandCategory::Pair => of_rank(first_with_count(2)),
        HandCategory::ThreeOfAKind => of_rank(first_with_count(3)),
        HandCategory::FourOfAKind => of_rank(first_with_count(4)),
        HandCategory::TwoPair => played
            .iter()
            .filter(|c| profile.rank_counts[c.rank as usize] == 2)
            .copied()
            .collect(),
        HandCategory::HighCard => played
            .iter()
            .copied()
            .reduce(|best, c| if c.rank > best.rank { c } else { best })
            .into_iter()
            .collect(),
        _ => played.to_vec(),
    }
}
