//! Card ordering and bomb ranking for Guandan-style trick-taking games,
//! with optional `no_std` support.
//!
//! Every round fixes a [`Level`]: that rank outranks all other suited ranks,
//! and its Heart card is a wildcard that may stand in for up to two cards of
//! a bomb. The crate decides whether a set of cards forms a bomb and which of
//! two combinations outranks the other.
//!
//! # Example
//!
//! ```
//! use guandan_rank::{Card, Combination, Level, NaiveBomb, Rank};
//!
//! let level = Level::new(Rank::Five).unwrap();
//! let parse = |cards: &[&str]| -> Vec<Card> {
//!     cards.iter().map(|text| Card::parse(text, level).unwrap()).collect()
//! };
//!
//! let sixes = NaiveBomb::new(&parse(&["6S", "6C", "6D", "6H"]));
//! let aces = NaiveBomb::new(&parse(&["AS", "AC", "AD", "5H", "5H"]));
//! assert!(sixes.is_valid() && aces.is_valid());
//! assert!(aces.greater_than(&sixes));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod bomb;
pub mod card;
pub mod comp;
pub mod deck;
pub mod error;
pub mod options;
pub mod rank;

// Re-export main types
pub use bomb::{Bomb, JOKER_BOMB_SIZE, JokerBomb, NaiveBomb};
pub use card::{Card, DECK_SIZE, Level, RAW_LEVEL_SENTINEL, Rank, Suit};
pub use comp::{CompKind, Combination, Precedence, Shape};
pub use deck::Shoe;
pub use error::{BombError, CardError, DealError, ParseCardError};
pub use options::RuleOptions;
