use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No cards selected")]
    EmptySelection,
    #[error("Too many cards selected: {count}, maximum: {max}")]
    TooManyCards { count: usize, max: usize },
    #[error("Card position {index} is out of range (hand has {hand_size} cards)")]
    IndexOutOfRange { index: usize, hand_size: usize },
    #[error("Card position {index} selected more than once")]
    DuplicateSelection { index: usize },
    #[error("No hands left to play")]
    NoHandsLeft,
    #[error("No discards left")]
    NoDiscardsLeft,
    #[error("Round already finished")]
    RoundOver,
    #[error("Round has not been won")]
    RoundNotWon,
    #[error("All blinds of this ante are already cleared")]
    AnteComplete,
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("Duplicate card in deck: {0}")]
    DuplicateCard(String),
    #[error("Invalid round rules: {0}")]
    InvalidRules(String),
}
