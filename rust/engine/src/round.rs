use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::blinds::{Blind, Requirement};
use crate::cards::{sort_hand, Card};
use crate::deck::{Deck, DECK_SIZE};
use crate::errors::GameError;
use crate::history::ActionRecord;
use crate::scoring::{evaluate_play, PlayResult};

/// Cards dealt at the start of a blind.
pub const HAND_SIZE: usize = 8;
pub const MAX_HANDS: u8 = 4;
pub const MAX_DISCARDS: u8 = 4;
/// Most cards a single play or discard may select.
pub const MAX_SELECTION: usize = 5;

/// Budgets a round is played with.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRules {
    pub hand_size: usize,
    pub hands: u8,
    pub discards: u8,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            hand_size: HAND_SIZE,
            hands: MAX_HANDS,
            discards: MAX_DISCARDS,
        }
    }
}

impl RoundRules {
    /// Rejects budgets that could run the hand dry before they are spent.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.hand_size == 0 || self.hand_size > HAND_SIZE {
            return Err(GameError::InvalidRules(format!(
                "hand size must be 1..={}",
                HAND_SIZE
            )));
        }
        if self.hands == 0 || self.hands > MAX_HANDS {
            return Err(GameError::InvalidRules(format!(
                "hands must be 1..={}",
                MAX_HANDS
            )));
        }
        if self.discards > MAX_DISCARDS {
            return Err(GameError::InvalidRules(format!(
                "discards must be 0..={}",
                MAX_DISCARDS
            )));
        }
        let worst_case =
            self.hand_size + MAX_SELECTION * (usize::from(self.hands) + usize::from(self.discards));
        if worst_case > DECK_SIZE {
            return Err(GameError::InvalidRules(format!(
                "hand size plus {} cards per action exceeds the deck",
                MAX_SELECTION
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

/// Everything the player sees between actions.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct RoundSnapshot {
    pub blind: Blind,
    pub score: u64,
    pub requirement: Requirement,
    pub deck_remaining: usize,
    pub hands_left: u8,
    pub discards_left: u8,
    pub money: u32,
    pub hand: Vec<Card>,
    pub status: RoundStatus,
}

/// A single blind attempt: the dealt hand, the rest of the deck and the
/// play/discard budgets.
///
/// # Examples
///
/// ```
/// use ante_engine::blinds::Blind;
/// use ante_engine::deck::Deck;
/// use ante_engine::round::{Round, RoundRules, RoundStatus};
///
/// let blind = Blind::Small;
/// let mut round = Round::new(blind, blind.requirement(1), Deck::shuffled(7), RoundRules::default())
///     .unwrap();
/// assert_eq!(round.hand().len(), 8);
///
/// round.discard(&[0, 1]).unwrap();
/// assert_eq!(round.hand().len(), 8);
/// assert_eq!(round.discards_left(), 3);
/// assert_eq!(round.status(), RoundStatus::Active);
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    blind: Blind,
    requirement: Requirement,
    deck: Deck,
    hand: Vec<Card>,
    score: u64,
    hands_left: u8,
    discards_left: u8,
    status: RoundStatus,
    actions: Vec<ActionRecord>,
}

impl Round {
    pub fn new(
        blind: Blind,
        requirement: Requirement,
        mut deck: Deck,
        rules: RoundRules,
    ) -> Result<Self, GameError> {
        rules.validate()?;
        let mut hand = deck.draw(rules.hand_size);
        sort_hand(&mut hand);
        Ok(Self {
            blind,
            requirement,
            deck,
            hand,
            score: 0,
            hands_left: rules.hands,
            discards_left: rules.discards,
            status: RoundStatus::Active,
            actions: Vec::new(),
        })
    }

    pub fn blind(&self) -> Blind {
        self.blind
    }
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn score(&self) -> u64 {
        self.score
    }
    pub fn hands_left(&self) -> u8 {
        self.hands_left
    }
    pub fn discards_left(&self) -> u8 {
        self.discards_left
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn status(&self) -> RoundStatus {
        self.status
    }
    pub fn actions(&self) -> &[ActionRecord] {
        &self.actions
    }

    pub fn snapshot(&self, money: u32) -> RoundSnapshot {
        RoundSnapshot {
            blind: self.blind,
            score: self.score,
            requirement: self.requirement,
            deck_remaining: self.deck.remaining(),
            hands_left: self.hands_left,
            discards_left: self.discards_left,
            money,
            hand: self.hand.clone(),
            status: self.status,
        }
    }

    /// Plays the cards at `indices` (0-based hand positions) and scores them.
    ///
    /// The played cards are replaced from the deck as far as it allows.
    ///
    /// # Errors
    ///
    /// - [`GameError::RoundOver`] once the round is won or lost
    /// - [`GameError::NoHandsLeft`] when the play budget is spent
    /// - selection errors, see [`Round::discard`]
    pub fn play(&mut self, indices: &[usize]) -> Result<PlayResult, GameError> {
        self.ensure_active()?;
        if self.hands_left == 0 {
            return Err(GameError::NoHandsLeft);
        }
        self.validate_selection(indices)?;

        let played: Vec<Card> = indices.iter().map(|&i| self.hand[i]).collect();
        let result = evaluate_play(&played)?;
        self.replace(indices);
        self.score = self.score.saturating_add(result.score);
        self.hands_left -= 1;
        self.actions.push(ActionRecord::played(&result));
        debug!(
            blind = self.blind.name(),
            category = result.category.name(),
            score = result.score,
            total = self.score,
            "hand played"
        );
        self.update_status();
        Ok(result)
    }

    /// Discards the cards at `indices` and draws replacements. Scores nothing.
    ///
    /// # Errors
    ///
    /// - [`GameError::RoundOver`] once the round is won or lost
    /// - [`GameError::NoDiscardsLeft`] when the discard budget is spent
    /// - [`GameError::EmptySelection`], [`GameError::TooManyCards`],
    ///   [`GameError::IndexOutOfRange`], [`GameError::DuplicateSelection`]
    ///   for a bad selection
    pub fn discard(&mut self, indices: &[usize]) -> Result<Vec<Card>, GameError> {
        self.ensure_active()?;
        if self.discards_left == 0 {
            return Err(GameError::NoDiscardsLeft);
        }
        self.validate_selection(indices)?;

        let discarded: Vec<Card> = indices.iter().map(|&i| self.hand[i]).collect();
        self.replace(indices);
        self.discards_left -= 1;
        self.actions.push(ActionRecord::discarded(&discarded));
        debug!(
            blind = self.blind.name(),
            count = discarded.len(),
            deck_remaining = self.deck.remaining(),
            "cards discarded"
        );
        self.update_status();
        Ok(discarded)
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        match self.status {
            RoundStatus::Active => Ok(()),
            _ => Err(GameError::RoundOver),
        }
    }

    fn validate_selection(&self, indices: &[usize]) -> Result<(), GameError> {
        if indices.is_empty() {
            return Err(GameError::EmptySelection);
        }
        if indices.len() > MAX_SELECTION {
            return Err(GameError::TooManyCards {
                count: indices.len(),
                max: MAX_SELECTION,
            });
        }
        for (pos, &index) in indices.iter().enumerate() {
            if index >= self.hand.len() {
                return Err(GameError::IndexOutOfRange {
                    index,
                    hand_size: self.hand.len(),
                });
            }
            if indices[..pos].contains(&index) {
                return Err(GameError::DuplicateSelection { index });
            }
        }
        Ok(())
    }

    // Removes the selected cards, refills from the deck and re-sorts.
    fn replace(&mut self, indices: &[usize]) {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        for i in sorted {
            self.hand.remove(i);
        }
        let drawn = self.deck.draw(indices.len());
        self.hand.extend(drawn);
        sort_hand(&mut self.hand);
    }

    fn update_status(&mut self) {
        if self.requirement.is_met(self.score) {
            self.status = RoundStatus::Won;
            info!(blind = self.blind.name(), score = self.score, "round won");
        } else if self.hands_left == 0 {
            self.status = RoundStatus::Lost;
            info!(
                blind = self.blind.name(),
                score = self.score,
                requirement = %self.requirement,
                "round lost"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_with(requirement: u64) -> Round {
        Round::new(
            Blind::Small,
            Requirement::Chips(requirement),
            Deck::shuffled(99),
            RoundRules::default(),
        )
        .unwrap()
    }

    #[test]
    fn default_rules_are_valid() {
        assert!(RoundRules::default().validate().is_ok());
    }

    #[test]
    fn rules_that_could_empty_the_deck_are_rejected() {
        let rules = RoundRules {
            hand_size: 8,
            hands: 4,
            discards: 4,
        };
        assert!(rules.validate().is_ok());
        let bad = RoundRules {
            hand_size: 0,
            ..rules
        };
        assert!(matches!(bad.validate(), Err(GameError::InvalidRules(_))));
        let bad = RoundRules { hands: 5, ..rules };
        assert!(matches!(bad.validate(), Err(GameError::InvalidRules(_))));
    }

    #[test]
    fn selection_errors_leave_state_untouched() {
        let mut round = round_with(1_000_000);
        let before = round.snapshot(0);
        assert_eq!(round.play(&[]), Err(GameError::EmptySelection));
        assert_eq!(
            round.play(&[0, 1, 2, 3, 4, 5]),
            Err(GameError::TooManyCards { count: 6, max: 5 })
        );
        assert_eq!(
            round.play(&[8]),
            Err(GameError::IndexOutOfRange {
                index: 8,
                hand_size: 8
            })
        );
        assert_eq!(
            round.discard(&[1, 1]),
            Err(GameError::DuplicateSelection { index: 1 })
        );
        assert_eq!(round.snapshot(0), before);
        assert!(round.actions().is_empty());
    }

    #[test]
    fn every_play_scores_at_least_high_card() {
        let mut round = round_with(1_000_000);
        let result = round.play(&[7]).unwrap();
        assert!(result.score >= 7);
        assert_eq!(round.score(), result.score);
        assert_eq!(round.hands_left(), 3);
    }
}
