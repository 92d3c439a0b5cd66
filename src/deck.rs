//! The shoe: building, shuffling, and dealing the decks for one round.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Level, Rank, Suit};
use crate::error::{CardError, DealError};
use crate::options::RuleOptions;

/// Cards of a single round, shuffled and dealt under the round's level.
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Remaining cards; the next card drawn is the last one.
    cards: Vec<Card>,
    /// Level every card was dealt under.
    level: Level,
}

impl Shoe {
    /// Creates and shuffles a shoe with `options.decks` decks for `level`.
    ///
    /// The same seed always yields the same order.
    ///
    /// # Errors
    ///
    /// Returns an error only if a card cannot be constructed, which the
    /// enumerated ranks and suits rule out.
    ///
    /// # Example
    ///
    /// ```
    /// use guandan_rank::{Level, Rank, RuleOptions, Shoe};
    ///
    /// let level = Level::new(Rank::Two).unwrap();
    /// let shoe = Shoe::new(level, &RuleOptions::default(), 42).unwrap();
    /// assert_eq!(shoe.len(), 108);
    /// ```
    pub fn new(level: Level, options: &RuleOptions, seed: u64) -> Result<Self, CardError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut cards = Self::create_decks(level, options.decks)?;
        cards.shuffle(&mut rng);

        tracing::debug!(decks = options.decks, cards = cards.len(), "shoe shuffled");
        Ok(Self { cards, level })
    }

    /// Creates `decks` unshuffled decks, each with 52 suited cards and two Jokers.
    fn create_decks(level: Level, decks: u8) -> Result<Vec<Card>, CardError> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::REGULAR {
                for rank in Rank::REGULAR {
                    cards.push(Card::new(rank, suit, level)?);
                }
            }
            cards.push(Card::new(Rank::RedJoker, Suit::Joker, level)?);
            cards.push(Card::new(Rank::BlackJoker, Suit::Joker, level)?);
        }

        Ok(cards)
    }

    /// Returns the round level.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Draws a card from the shoe.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals `per_seat` cards to each of `seats` seats, one seat at a time.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NoSeats`] if `seats` is zero, or
    /// [`DealError::NotEnoughCards`] if the shoe cannot cover every seat. The
    /// shoe is left untouched on error.
    pub fn deal(&mut self, seats: usize, per_seat: usize) -> Result<Vec<Vec<Card>>, DealError> {
        if seats == 0 {
            return Err(DealError::NoSeats);
        }
        let needed = seats
            .checked_mul(per_seat)
            .ok_or(DealError::NotEnoughCards)?;
        if needed > self.cards.len() {
            return Err(DealError::NotEnoughCards);
        }

        let mut dealt = self.cards.split_off(self.cards.len() - needed);
        dealt.reverse();
        let hands: Vec<Vec<Card>> = (0..seats)
            .map(|_| dealt.drain(..per_seat).collect())
            .collect();

        tracing::debug!(seats, per_seat, remaining = self.cards.len(), "cards dealt");
        Ok(hands)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
