use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::{classify, triggered_cards, HandCategory, MAX_CLASSIFIED_CARDS};

impl HandCategory {
    /// Chips awarded for the category before card chips are added.
    pub const fn base_chips(self) -> u64 {
        match self {
            HandCategory::HighCard => 5,
            HandCategory::Pair => 10,
            HandCategory::TwoPair => 20,
            HandCategory::ThreeOfAKind => 30,
            HandCategory::Straight => 30,
            HandCategory::Flush => 35,
            HandCategory::FullHouse => 40,
            HandCategory::FourOfAKind => 60,
            HandCategory::StraightFlush => 100,
            HandCategory::RoyalFlush => 100,
            HandCategory::FiveOfAKind => 120,
            HandCategory::FlushHouse => 140,
        }
    }

    pub const fn multiplier(self) -> u64 {
        match self {
            HandCategory::HighCard => 1,
            HandCategory::Pair | HandCategory::TwoPair => 2,
            HandCategory::ThreeOfAKind => 3,
            HandCategory::Straight | HandCategory::Flush | HandCategory::FullHouse => 4,
            HandCategory::FourOfAKind => 7,
            HandCategory::StraightFlush | HandCategory::RoyalFlush => 8,
            HandCategory::FiveOfAKind => 12,
            HandCategory::FlushHouse => 14,
        }
    }
}

/// Outcome of scoring one played selection.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayResult {
    /// Cards in the order they were played
    pub played: Vec<Card>,
    pub category: HandCategory,
    /// Subset of `played` whose chips were counted
    pub triggered: Vec<Card>,
    pub score: u64,
}

/// `(base chips + chips of triggered cards) * multiplier`.
pub fn score(category: HandCategory, triggered: &[Card]) -> u64 {
    let chips: u64 = triggered.iter().map(|c| u64::from(c.chip_value())).sum();
    (category.base_chips() + chips) * category.multiplier()
}

/// Classifies and scores a selection of one to eight cards.
///
/// # Errors
///
/// - [`GameError::EmptySelection`] when `cards` is empty
/// - [`GameError::TooManyCards`] when more than eight cards are given
///
/// # Examples
///
/// ```
/// use ante_engine::cards::Card;
/// use ante_engine::hand::HandCategory;
/// use ante_engine::scoring::evaluate_play;
///
/// let cards: Vec<Card> = ["2♥", "7♠", "K♦"].iter().map(|s| s.parse().unwrap()).collect();
/// let result = evaluate_play(&cards).unwrap();
/// assert_eq!(result.category, HandCategory::HighCard);
/// assert_eq!(result.score, 15);
/// ```
pub fn evaluate_play(cards: &[Card]) -> Result<PlayResult, GameError> {
    if cards.is_empty() {
        return Err(GameError::EmptySelection);
    }
    if cards.len() > MAX_CLASSIFIED_CARDS {
        return Err(GameError::TooManyCards {
            count: cards.len(),
            max: MAX_CLASSIFIED_CARDS,
        });
    }
    let category = classify(cards);
    let triggered = triggered_cards(cards, category);
    let total = score(category, &triggered);
    Ok(PlayResult {
        played: cards.to_vec(),
        category,
        triggered,
        score: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn royal_and_straight_flush_share_table_entry() {
        assert_eq!(
            HandCategory::RoyalFlush.base_chips(),
            HandCategory::StraightFlush.base_chips()
        );
        assert_eq!(
            HandCategory::RoyalFlush.multiplier(),
            HandCategory::StraightFlush.multiplier()
        );
    }

    #[test]
    fn score_without_triggered_cards_is_base_times_mult() {
        assert_eq!(score(HandCategory::FlushHouse, &[]), 140 * 14);
        assert_eq!(score(HandCategory::HighCard, &[]), 5);
    }

    #[test]
    fn rejects_empty_and_oversized_selections() {
        assert_eq!(evaluate_play(&[]), Err(GameError::EmptySelection));
        let nine: Vec<Card> = crate::cards::full_deck().into_iter().take(9).collect();
        assert_eq!(
            evaluate_play(&nine),
            Err(GameError::TooManyCards { count: 9, max: 8 })
        );
    }
}
