//! Card types, the round level, and short-form parsing.

use core::fmt;

use crate::error::{CardError, ParseCardError};
use crate::rank;

/// Raw rank given to level cards so that sequence checks place them above every real rank.
pub const RAW_LEVEL_SENTINEL: u8 = 100;

/// Number of cards per deck, Jokers included.
pub const DECK_SIZE: usize = 54;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spade,
    /// Hearts.
    Heart,
    /// Clubs.
    Club,
    /// Diamonds.
    Diamond,
    /// The suit carried by the two Joker ranks.
    Joker,
}

impl Suit {
    /// The four regular suits.
    pub const REGULAR: [Self; 4] = [Self::Spade, Self::Heart, Self::Club, Self::Diamond];

    /// Single-letter code used by the short form.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Spade => 'S',
            Self::Heart => 'H',
            Self::Club => 'C',
            Self::Diamond => 'D',
            Self::Joker => 'J',
        }
    }

    const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'S' | 's' => Some(Self::Spade),
            'H' | 'h' => Some(Self::Heart),
            'C' | 'c' => Some(Self::Club),
            'D' | 'd' => Some(Self::Diamond),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Spade => "Spade",
            Self::Heart => "Heart",
            Self::Club => "Club",
            Self::Diamond => "Diamond",
            Self::Joker => "Joker",
        })
    }
}

/// Card rank. The discriminant is the comparison value (Ace = 14).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    /// 2.
    Two = 2,
    /// 3.
    Three = 3,
    /// 4.
    Four = 4,
    /// 5.
    Five = 5,
    /// 6.
    Six = 6,
    /// 7.
    Seven = 7,
    /// 8.
    Eight = 8,
    /// 9.
    Nine = 9,
    /// 10.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
    /// Ace.
    Ace = 14,
    /// Red Joker.
    RedJoker = 15,
    /// Black Joker.
    BlackJoker = 16,
}

impl Rank {
    /// The thirteen suited ranks, lowest first.
    pub const REGULAR: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Maps a numeric code to a rank. Both 1 and 14 denote the Ace.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            5 => Self::Five,
            6 => Self::Six,
            7 => Self::Seven,
            8 => Self::Eight,
            9 => Self::Nine,
            10 => Self::Ten,
            11 => Self::Jack,
            12 => Self::Queen,
            13 => Self::King,
            1 | 14 => Self::Ace,
            15 => Self::RedJoker,
            16 => Self::BlackJoker,
            _ => return None,
        })
    }

    /// Numeric comparison value (2..=16).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Returns whether this is one of the two Joker ranks.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::RedJoker | Self::BlackJoker)
    }

    /// Display name: numeral, letter code, or the Joker's full name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
            Self::RedJoker => "Red Joker",
            Self::BlackJoker => "Black Joker",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "J" | "j" => Some(Self::Jack),
            "Q" | "q" => Some(Self::Queen),
            "K" | "k" => Some(Self::King),
            "A" | "a" => Some(Self::Ace),
            _ => name
                .parse::<u8>()
                .ok()
                .filter(|code| (2..=10).contains(code))
                .and_then(Self::from_code),
        }
    }
}

/// The trump rank of a round. Always a suited rank (2 through Ace).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Level(Rank);

impl Level {
    /// Creates a level from a rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidLevel`] for the Joker ranks.
    pub const fn new(rank: Rank) -> Result<Self, CardError> {
        if rank.is_joker() {
            Err(CardError::InvalidLevel(rank.value()))
        } else {
            Ok(Self(rank))
        }
    }

    /// Creates a level from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidLevel`] unless `code` is in 2..=14.
    pub const fn from_code(code: u8) -> Result<Self, CardError> {
        match Rank::from_code(code) {
            Some(rank) if code >= 2 && code <= 14 => Ok(Self(rank)),
            _ => Err(CardError::InvalidLevel(code)),
        }
    }

    /// The elevated rank.
    #[must_use]
    pub const fn rank(self) -> Rank {
        self.0
    }
}

/// An immutable playing card dealt under a fixed round level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    level: Level,
    raw_rank: u8,
    wildcard: bool,
}

impl Card {
    /// Creates a new card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::JokerSuitMismatch`] unless the suit is [`Suit::Joker`]
    /// exactly when the rank is a Joker.
    pub const fn new(rank: Rank, suit: Suit, level: Level) -> Result<Self, CardError> {
        if rank.is_joker() != matches!(suit, Suit::Joker) {
            return Err(CardError::JokerSuitMismatch);
        }

        let is_level = rank as u8 == level.rank() as u8;
        Ok(Self {
            rank,
            suit,
            level,
            raw_rank: if is_level {
                RAW_LEVEL_SENTINEL
            } else {
                rank.value()
            },
            wildcard: is_level && matches!(suit, Suit::Heart),
        })
    }

    /// Creates a card from numeric rank and level codes.
    ///
    /// # Errors
    ///
    /// Returns an error if the rank code is outside 1..=16, the level is outside
    /// 2..=14, or the suit does not match the rank.
    pub const fn from_code(rank: u8, suit: Suit, level: u8) -> Result<Self, CardError> {
        let Some(rank) = Rank::from_code(rank) else {
            return Err(CardError::InvalidRank(rank));
        };
        match Level::from_code(level) {
            Ok(level) => Self::new(rank, suit, level),
            Err(err) => Err(err),
        }
    }

    /// Parses the short form produced by [`Card::short_name`], e.g. `"10H"` or `"RJ"`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseCardError`] if the text does not name a card.
    ///
    /// # Example
    ///
    /// ```
    /// use guandan_rank::{Card, Level, Rank, Suit};
    ///
    /// let level = Level::new(Rank::Five).unwrap();
    /// let card = Card::parse("5H", level).unwrap();
    /// assert_eq!(card.suit(), Suit::Heart);
    /// assert!(card.is_wildcard());
    /// ```
    pub fn parse(text: &str, level: Level) -> Result<Self, ParseCardError> {
        let text = text.trim();
        match text {
            "" => return Err(ParseCardError::Empty),
            "RJ" | "rj" => return Ok(Self::new(Rank::RedJoker, Suit::Joker, level)?),
            "BJ" | "bj" => return Ok(Self::new(Rank::BlackJoker, Suit::Joker, level)?),
            _ => {}
        }

        let mut chars = text.chars();
        let suit_letter = chars.next_back().ok_or(ParseCardError::Empty)?;
        let suit = Suit::from_letter(suit_letter).ok_or(ParseCardError::UnknownSuit)?;
        let rank = Rank::from_name(chars.as_str()).ok_or(ParseCardError::UnknownRank)?;
        Ok(Self::new(rank, suit, level)?)
    }

    /// Returns the rank.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the level this card was dealt under.
    #[must_use]
    pub const fn level(&self) -> Level {
        self.level
    }

    /// Returns the display name of the rank.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.rank.name()
    }

    /// Level-blind rank used for sequence checks.
    ///
    /// Equal to the rank value, except for level cards which are pinned to
    /// [`RAW_LEVEL_SENTINEL`].
    #[must_use]
    pub const fn raw_rank(&self) -> u8 {
        self.raw_rank
    }

    /// Returns whether this is the Heart-suited level card.
    #[must_use]
    pub const fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Returns whether this card carries the level rank, in any suit.
    #[must_use]
    pub const fn is_level_card(&self) -> bool {
        self.raw_rank == RAW_LEVEL_SENTINEL
    }

    /// Returns whether both cards have the same rank, regardless of suit.
    #[must_use]
    pub fn same_rank(&self, other: &Self) -> bool {
        self.rank == other.rank
    }

    /// Level-aware value comparison: does this card outrank `other`?
    ///
    /// # Panics
    ///
    /// Panics if the cards were dealt under different levels.
    #[must_use]
    pub fn outranks(&self, other: &Self) -> bool {
        self.assert_same_level(other);
        rank::outranks_for_value(self.level, self.rank, other.rank)
    }

    /// Sort ordering: does this card come before `other`?
    ///
    /// Among equal ranks, a Heart card comes after a non-Heart one.
    ///
    /// # Panics
    ///
    /// Panics if the cards were dealt under different levels.
    #[must_use]
    pub fn precedes(&self, other: &Self) -> bool {
        self.assert_same_level(other);
        rank::precedes_for_sort(self.level, self, other)
    }

    /// Level-blind comparison on raw rank.
    #[must_use]
    pub const fn consecutive_greater_than(&self, other: &Self) -> bool {
        rank::consecutive_greater_than(self.raw_rank, other.raw_rank)
    }

    /// Compact form: rank plus suit letter (`"AS"`, `"10H"`), or `"RJ"`/`"BJ"`.
    #[must_use]
    pub fn short_name(&self) -> alloc::string::String {
        match self.rank {
            Rank::RedJoker => "RJ".into(),
            Rank::BlackJoker => "BJ".into(),
            rank => alloc::format!("{}{}", rank.name(), self.suit.letter()),
        }
    }

    fn assert_same_level(&self, other: &Self) {
        assert_eq!(
            self.level, other.level,
            "cards compared under different levels"
        );
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suit == Suit::Joker {
            f.write_str(self.name())
        } else {
            write!(f, "{} of {}", self.name(), self.suit)
        }
    }
}
