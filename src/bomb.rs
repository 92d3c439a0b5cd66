//! Bomb combinations: plain same-rank bombs and the joker bomb.

use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, Rank};
use crate::comp::{self, CompKind, Combination, Precedence};
use crate::error::BombError;
use crate::options::RuleOptions;
use crate::rank;

/// Number of cards in a joker bomb.
pub const JOKER_BOMB_SIZE: usize = 4;

fn levels_match(cards: &[Card]) -> bool {
    cards
        .first()
        .is_none_or(|first| cards.iter().all(|card| card.level() == first.level()))
}

fn sorted(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    rank::sort_cards(&mut sorted);
    sorted
}

/// Four or more cards of one rank, with up to two wildcards standing in.
///
/// The cards are kept sorted lowest first, so wildcards trail and the first
/// card is the anchor used to break ties between bombs of equal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NaiveBomb {
    /// Cards, sorted when the levels agree.
    cards: Vec<Card>,
    /// Why the cards do not form a bomb, if they don't.
    rejection: Option<BombError>,
    /// Rules used for validation and ranking.
    options: RuleOptions,
}

impl NaiveBomb {
    /// Validates `cards` as a bomb under the default rules.
    #[must_use]
    pub fn new(cards: &[Card]) -> Self {
        Self::with_options(cards, RuleOptions::default())
    }

    /// Validates `cards` as a bomb under `options`.
    #[must_use]
    pub fn with_options(cards: &[Card], options: RuleOptions) -> Self {
        let (verdict, cards) = Self::check(cards, &options);
        if let Err(err) = verdict {
            tracing::debug!(cards = cards.len(), %err, "naive bomb rejected");
        }
        Self {
            cards,
            rejection: verdict.err(),
            options,
        }
    }

    /// Checks whether `cards` form a bomb, returning the verdict and the
    /// sorted cards.
    ///
    /// The sorted cards are returned whether or not the bomb is valid.
    #[must_use]
    pub fn satisfy(cards: &[Card], options: &RuleOptions) -> (bool, Vec<Card>) {
        let (verdict, cards) = Self::check(cards, options);
        (verdict.is_ok(), cards)
    }

    fn check(cards: &[Card], options: &RuleOptions) -> (Result<(), BombError>, Vec<Card>) {
        if !levels_match(cards) {
            return (Err(BombError::MixedLevels), cards.to_vec());
        }

        let cards = sorted(cards);
        let wildcards = cards.iter().filter(|card| card.is_wildcard()).count();

        if cards.len() < options.min_bomb_size {
            let err = BombError::TooFewCards {
                found: cards.len(),
                required: options.min_bomb_size,
            };
            return (Err(err), cards);
        }
        if wildcards > options.max_bomb_wildcards {
            let err = BombError::TooManyWildcards {
                found: wildcards,
                max: options.max_bomb_wildcards,
            };
            return (Err(err), cards);
        }

        // Wildcards must trail after sorting; everything ahead of them must match.
        let (head, tail) = cards.split_at(cards.len() - wildcards);
        let verdict = match head.first() {
            Some(first)
                if !tail.iter().all(Card::is_wildcard)
                    || !head.iter().all(|card| card.same_rank(first)) =>
            {
                Err(BombError::MixedRanks)
            }
            _ => Ok(()),
        };
        (verdict, cards)
    }

    /// Returns `Ok` if the cards form a bomb, or the reason they don't.
    ///
    /// # Errors
    ///
    /// Returns the [`BombError`] found during validation.
    pub const fn validate(&self) -> Result<(), BombError> {
        match self.rejection {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns why the cards were rejected, if they were.
    #[must_use]
    pub const fn rejection(&self) -> Option<BombError> {
        self.rejection
    }

    /// The lowest card, used to break ties between equal-size bombs.
    #[must_use]
    pub fn anchor(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Number of wildcards in the bomb.
    #[must_use]
    pub fn wildcard_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_wildcard()).count()
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether there are no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Longer bomb wins; equal sizes compare their anchors.
    fn outranks_bomb(&self, other: &[Card]) -> bool {
        if self.cards.len() != other.len() {
            return self.cards.len() > other.len();
        }
        match (self.cards.first(), other.first()) {
            (Some(mine), Some(theirs)) => mine.outranks(theirs),
            _ => false,
        }
    }
}

impl Combination for NaiveBomb {
    fn kind(&self) -> CompKind {
        CompKind::NaiveBomb
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }

    fn greater_than(&self, other: &dyn Combination) -> bool {
        comp::assert_rankable(self, other);
        if !other.is_bomb() {
            return true;
        }

        let wins = match comp::precedence(self.shape(), other.shape(), &self.options) {
            Precedence::Wins => true,
            Precedence::Loses => false,
            Precedence::SameKind => self.outranks_bomb(other.cards()),
        };
        tracing::trace!(
            len = self.cards.len(),
            other_kind = %other.kind(),
            other_len = other.cards().len(),
            wins,
            "naive bomb ranked"
        );
        wins
    }
}

impl fmt::Display for NaiveBomb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        comp::write_combination(f, CompKind::NaiveBomb, &self.cards)
    }
}

/// Two Red Jokers and two Black Jokers. Outranks every other combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JokerBomb {
    cards: Vec<Card>,
    rejection: Option<BombError>,
}

impl JokerBomb {
    /// Validates `cards` as a joker bomb.
    #[must_use]
    pub fn new(cards: &[Card]) -> Self {
        let (verdict, cards) = Self::check(cards);
        if let Err(err) = verdict {
            tracing::debug!(cards = cards.len(), %err, "joker bomb rejected");
        }
        Self {
            cards,
            rejection: verdict.err(),
        }
    }

    fn check(cards: &[Card]) -> (Result<(), BombError>, Vec<Card>) {
        if !levels_match(cards) {
            return (Err(BombError::MixedLevels), cards.to_vec());
        }

        let cards = sorted(cards);
        if cards.len() < JOKER_BOMB_SIZE {
            let err = BombError::TooFewCards {
                found: cards.len(),
                required: JOKER_BOMB_SIZE,
            };
            return (Err(err), cards);
        }

        let count = |rank: Rank| cards.iter().filter(|card| card.rank() == rank).count();
        let verdict = if cards.len() == JOKER_BOMB_SIZE
            && count(Rank::RedJoker) == 2
            && count(Rank::BlackJoker) == 2
        {
            Ok(())
        } else {
            Err(BombError::NotAllJokers)
        };
        (verdict, cards)
    }

    /// Returns `Ok` if the cards form a joker bomb, or the reason they don't.
    ///
    /// # Errors
    ///
    /// Returns the [`BombError`] found during validation.
    pub const fn validate(&self) -> Result<(), BombError> {
        match self.rejection {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl Combination for JokerBomb {
    fn kind(&self) -> CompKind {
        CompKind::JokerBomb
    }

    fn cards(&self) -> &[Card] {
        &self.cards
    }

    fn is_valid(&self) -> bool {
        self.rejection.is_none()
    }

    fn greater_than(&self, other: &dyn Combination) -> bool {
        comp::assert_rankable(self, other);
        other.kind() != CompKind::JokerBomb
    }
}

impl fmt::Display for JokerBomb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        comp::write_combination(f, CompKind::JokerBomb, &self.cards)
    }
}

/// A validated bomb of one of the kinds this crate detects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bomb {
    /// Two Red Jokers and two Black Jokers.
    Joker(JokerBomb),
    /// Four or more cards of one rank.
    Naive(NaiveBomb),
}

impl Bomb {
    /// Detects a bomb in `cards`, trying the joker bomb first.
    ///
    /// Returns `None` if the cards form neither kind.
    ///
    /// # Example
    ///
    /// ```
    /// use guandan_rank::{Bomb, Card, Level, Rank, RuleOptions};
    ///
    /// let level = Level::new(Rank::Two).unwrap();
    /// let cards: Vec<Card> = ["9S", "9C", "9D", "9H"]
    ///     .iter()
    ///     .map(|text| Card::parse(text, level).unwrap())
    ///     .collect();
    /// assert!(matches!(Bomb::detect(&cards, RuleOptions::default()), Some(Bomb::Naive(_))));
    /// ```
    #[must_use]
    pub fn detect(cards: &[Card], options: RuleOptions) -> Option<Self> {
        let joker = JokerBomb::new(cards);
        if joker.is_valid() {
            return Some(Self::Joker(joker));
        }
        let naive = NaiveBomb::with_options(cards, options);
        naive.is_valid().then_some(Self::Naive(naive))
    }

    fn inner(&self) -> &dyn Combination {
        match self {
            Self::Joker(bomb) => bomb,
            Self::Naive(bomb) => bomb,
        }
    }
}

impl Combination for Bomb {
    fn kind(&self) -> CompKind {
        self.inner().kind()
    }

    fn cards(&self) -> &[Card] {
        self.inner().cards()
    }

    fn is_valid(&self) -> bool {
        self.inner().is_valid()
    }

    fn greater_than(&self, other: &dyn Combination) -> bool {
        self.inner().greater_than(other)
    }
}

impl fmt::Display for Bomb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joker(bomb) => fmt::Display::fmt(bomb, f),
            Self::Naive(bomb) => fmt::Display::fmt(bomb, f),
        }
    }
}
