use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

pub const DECK_SIZE: usize = 52;

#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Fresh 52-card deck, already shuffled with `seed`.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::new_with_seed(seed);
        deck.shuffle();
        deck
    }

    /// Stacked deck dealt in exactly the given order.
    ///
    /// Used to replay known scenarios. The cards need not form a full deck,
    /// but each card may appear only once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, GameError> {
        let mut seen = HashSet::with_capacity(cards.len());
        for c in &cards {
            if !seen.insert(*c) {
                return Err(GameError::DuplicateCard(c.to_string()));
            }
        }
        Ok(Self {
            cards,
            position: 0,
            rng: ChaCha20Rng::seed_from_u64(0),
        })
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        let c = self.cards.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    /// Draws up to `n` cards from the front. Returns fewer when the deck runs out.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.remaining());
        let drawn = self.cards[self.position..self.position + take].to_vec();
        self.position += take;
        drawn
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
