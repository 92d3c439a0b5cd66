//! Combination kinds and the cross-kind precedence table.

use core::fmt;

use crate::card::Card;
use crate::options::RuleOptions;

/// Kind of a played combination, as far as bomb ranking is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompKind {
    /// Any ordinary shape (single, pair, straight, ...).
    NonBomb,
    /// Four or more cards of one rank.
    NaiveBomb,
    /// Five consecutive cards of one suit.
    StraightFlush,
    /// Two Red Jokers and two Black Jokers.
    JokerBomb,
}

impl CompKind {
    /// Returns whether this kind is a bomb.
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        !matches!(self, Self::NonBomb)
    }
}

impl fmt::Display for CompKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NonBomb => "NonBomb",
            Self::NaiveBomb => "NaiveBomb",
            Self::StraightFlush => "StraightFlush",
            Self::JokerBomb => "JokerBomb",
        })
    }
}

/// Kind and card count of a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    /// The combination kind.
    pub kind: CompKind,
    /// Number of cards.
    pub len: usize,
}

/// Outcome of the kind-against-kind lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// This combination outranks the other.
    Wins,
    /// This combination does not outrank the other.
    Loses,
    /// Same kind; the kind's own comparison decides.
    SameKind,
}

/// Looks up how `this` ranks against `other` by kind alone, refined by the
/// plain bomb size where a straight flush is involved.
///
/// Joker bomb > plain bomb of `straight_flush_threshold`+ cards > straight
/// flush > smaller plain bomb > any non-bomb.
#[must_use]
pub const fn precedence(this: Shape, other: Shape, options: &RuleOptions) -> Precedence {
    use CompKind::{JokerBomb, NaiveBomb, NonBomb, StraightFlush};

    match (this.kind, other.kind) {
        (JokerBomb, JokerBomb)
        | (NaiveBomb, NaiveBomb)
        | (StraightFlush, StraightFlush)
        | (NonBomb, NonBomb) => Precedence::SameKind,
        (JokerBomb, _) | (NaiveBomb | StraightFlush, NonBomb) => Precedence::Wins,
        (_, JokerBomb) | (NonBomb, _) => Precedence::Loses,
        (NaiveBomb, StraightFlush) => beats(this.len >= options.straight_flush_threshold),
        (StraightFlush, NaiveBomb) => beats(other.len < options.straight_flush_threshold),
    }
}

const fn beats(wins: bool) -> Precedence {
    if wins {
        Precedence::Wins
    } else {
        Precedence::Loses
    }
}

/// A playable multi-card shape.
///
/// Implemented by the bomb kinds in this crate; ordinary shapes and straight
/// flushes are detected elsewhere and only need to report their kind and cards.
pub trait Combination {
    /// The combination kind.
    fn kind(&self) -> CompKind;

    /// The cards, sorted once the combination has been validated.
    fn cards(&self) -> &[Card];

    /// Returns whether the cards form this kind.
    fn is_valid(&self) -> bool;

    /// Returns whether this combination is a bomb.
    fn is_bomb(&self) -> bool {
        self.kind().is_bomb()
    }

    /// Kind and card count.
    fn shape(&self) -> Shape {
        Shape {
            kind: self.kind(),
            len: self.cards().len(),
        }
    }

    /// Does this combination outrank `other`?
    ///
    /// # Panics
    ///
    /// Panics if either side is invalid, or if the two combinations were
    /// dealt under different levels.
    fn greater_than(&self, other: &dyn Combination) -> bool;
}

/// Writes `Kind: [card, card, ...]`.
pub(crate) fn write_combination(
    f: &mut fmt::Formatter<'_>,
    kind: CompKind,
    cards: &[Card],
) -> fmt::Result {
    write!(f, "{kind}: [")?;
    for (i, card) in cards.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{card}")?;
    }
    f.write_str("]")
}

pub(crate) fn assert_rankable(this: &dyn Combination, other: &dyn Combination) {
    assert!(this.is_valid(), "ranked an invalid {}", this.kind());
    assert!(other.is_valid(), "ranked against an invalid {}", other.kind());
    if let (Some(mine), Some(theirs)) = (this.cards().first(), other.cards().first()) {
        assert_eq!(
            mine.level(),
            theirs.level(),
            "combinations ranked under different levels"
        );
    }
}
