//! Error types for card construction, bomb validation, and dealing.

use thiserror::Error;

/// Errors that can occur when constructing a card or a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank code outside 1..=16.
    #[error("invalid rank code {0}")]
    InvalidRank(u8),
    /// Level outside 2..=14.
    #[error("invalid level {0}")]
    InvalidLevel(u8),
    /// Joker rank without the Joker suit, or the Joker suit on a regular rank.
    #[error("joker ranks must carry the joker suit and only they may")]
    JokerSuitMismatch,
}

/// Errors that can occur when parsing the short form of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Input is empty.
    #[error("empty card text")]
    Empty,
    /// Rank part does not name a rank.
    #[error("unknown rank")]
    UnknownRank,
    /// Suit letter does not name a suit.
    #[error("unknown suit")]
    UnknownSuit,
    /// The parsed parts do not form a valid card.
    #[error(transparent)]
    Card(#[from] CardError),
}

/// Reasons a candidate set of cards is not a valid bomb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BombError {
    /// Fewer cards than the bomb kind requires.
    #[error("bomb needs at least {required} cards, got {found}")]
    TooFewCards {
        /// Number of cards presented.
        found: usize,
        /// Minimum number of cards for this kind.
        required: usize,
    },
    /// More wildcards than a bomb may substitute.
    #[error("bomb may hold at most {max} wildcards, got {found}")]
    TooManyWildcards {
        /// Number of wildcards presented.
        found: usize,
        /// Maximum number of wildcards allowed.
        max: usize,
    },
    /// The non-wildcard cards do not share a single rank.
    #[error("cards do not share a single rank")]
    MixedRanks,
    /// The cards were dealt under different levels.
    #[error("cards belong to different levels")]
    MixedLevels,
    /// The cards are not two Red Jokers and two Black Jokers.
    #[error("joker bomb needs two red and two black jokers")]
    NotAllJokers,
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No seats to deal to.
    #[error("no seats to deal to")]
    NoSeats,
    /// Not enough cards in the shoe.
    #[error("not enough cards in the shoe")]
    NotEnoughCards,
}
