//! Level-aware rank ordering.
//!
//! [`outranks_for_value`] decides which card is worth more.
//! [`precedes_for_sort`] adds the Heart tie-break on top of it, so that
//! wildcards trail their rank group after sorting.

use core::cmp::Ordering;

use crate::card::{Card, Level, Rank, Suit};

/// Does rank `a` outrank rank `b` under `level`?
///
/// The level rank sits above every suited rank and below the two Jokers.
#[must_use]
pub fn outranks_for_value(level: Level, a: Rank, b: Rank) -> bool {
    let level = level.rank();
    if b == level {
        a.is_joker()
    } else if a == level {
        b.value() <= Rank::Ace.value()
    } else {
        a.value() > b.value()
    }
}

/// Does card `a` sort before card `b` under `level`?
#[must_use]
pub fn precedes_for_sort(level: Level, a: &Card, b: &Card) -> bool {
    outranks_for_value(level, b.rank(), a.rank())
        || (a.same_rank(b) && b.suit() == Suit::Heart && a.suit() != Suit::Heart)
}

/// Level-blind comparison of raw ranks.
#[must_use]
pub const fn consecutive_greater_than(a: u8, b: u8) -> bool {
    a > b
}

/// Total ordering for sorting derived from [`precedes_for_sort`].
#[must_use]
pub fn cmp_for_sort(level: Level, a: &Card, b: &Card) -> Ordering {
    if precedes_for_sort(level, a, b) {
        Ordering::Less
    } else if precedes_for_sort(level, b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Sorts cards lowest first, wildcards trailing within their rank group.
///
/// The sort is stable. All cards must share the same level.
///
/// # Panics
///
/// Panics if the cards were dealt under different levels.
pub fn sort_cards(cards: &mut [Card]) {
    let Some(level) = cards.first().map(Card::level) else {
        return;
    };
    assert!(
        cards.iter().all(|card| card.level() == level),
        "cards sorted under different levels"
    );
    cards.sort_by(|a, b| cmp_for_sort(level, a, b));
}
