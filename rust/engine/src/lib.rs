//! # ante-engine: Poker-Hand Scoring Game Core
//!
//! Rules engine for a single ante of a poker-hand scoring game. The player is
//! dealt eight cards, plays or discards up to five at a time, and scores
//! each play by its poker category until the blind's requirement is met or
//! the plays run out. Three blinds (Small, Big, Boss) make up an ante.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), chip values and parsing
//! - [`deck`] - Deterministic deck shuffling with ChaCha20 RNG
//! - [`hand`] - Hand classification and triggered-card selection
//! - [`scoring`] - Category table and score computation
//! - [`round`] - Round state machine (play/discard budgets, win/loss)
//! - [`blinds`] - Blind sequencing, ante requirements and payouts
//! - [`history`] - Round records and JSONL history logging
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use ante_engine::cards::Card;
//! use ante_engine::hand::HandCategory;
//! use ante_engine::scoring::evaluate_play;
//!
//! let cards: Vec<Card> = ["7♥", "7♠", "7♦", "7♣", "K♥"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//!
//! let result = evaluate_play(&cards).unwrap();
//! assert_eq!(result.category, HandCategory::FourOfAKind);
//! assert_eq!(result.score, (60 + 4 * 7) * 7);
//! ```
//!
//! ## Playing an Ante
//!
//! ```rust
//! use ante_engine::blinds::AnteRun;
//! use ante_engine::deck::Deck;
//! use ante_engine::round::{RoundRules, RoundStatus};
//!
//! let run = AnteRun::new(1);
//! let mut round = run.start_round(Deck::shuffled(42), RoundRules::default()).unwrap();
//! while round.status() == RoundStatus::Active {
//!     round.play(&[0]).unwrap();
//! }
//! assert_eq!(round.hands_left(), 0);
//! ```

pub mod blinds;
pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod history;
pub mod round;
pub mod scoring;
