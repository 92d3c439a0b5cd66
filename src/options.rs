//! House rule options.

/// Configuration for bomb validation, bomb ranking, and the shoe.
///
/// The default matches the standard house rules. Use the builder methods to
/// customize:
///
/// ```
/// use guandan_rank::RuleOptions;
///
/// let options = RuleOptions::default()
///     .with_decks(3)
///     .with_straight_flush_threshold(7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleOptions {
    /// Minimum number of cards in a plain bomb.
    pub min_bomb_size: usize,
    /// Maximum number of wildcards a plain bomb may substitute.
    pub max_bomb_wildcards: usize,
    /// A plain bomb with at least this many cards beats a straight flush.
    pub straight_flush_threshold: usize,
    /// Number of 54-card decks in the shoe.
    pub decks: u8,
}

impl Default for RuleOptions {
    fn default() -> Self {
        Self {
            min_bomb_size: 4,
            max_bomb_wildcards: 2,
            straight_flush_threshold: 6,
            decks: 2,
        }
    }
}

impl RuleOptions {
    /// Sets the minimum plain bomb size.
    ///
    /// # Example
    ///
    /// ```
    /// use guandan_rank::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_min_bomb_size(5);
    /// assert_eq!(options.min_bomb_size, 5);
    /// ```
    #[must_use]
    pub const fn with_min_bomb_size(mut self, size: usize) -> Self {
        self.min_bomb_size = size;
        self
    }

    /// Sets the maximum number of wildcards per plain bomb.
    ///
    /// # Example
    ///
    /// ```
    /// use guandan_rank::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_max_bomb_wildcards(1);
    /// assert_eq!(options.max_bomb_wildcards, 1);
    /// ```
    #[must_use]
    pub const fn with_max_bomb_wildcards(mut self, max: usize) -> Self {
        self.max_bomb_wildcards = max;
        self
    }

    /// Sets the plain bomb size from which a bomb beats a straight flush.
    ///
    /// # Example
    ///
    /// ```
    /// use guandan_rank::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_straight_flush_threshold(7);
    /// assert_eq!(options.straight_flush_threshold, 7);
    /// ```
    #[must_use]
    pub const fn with_straight_flush_threshold(mut self, size: usize) -> Self {
        self.straight_flush_threshold = size;
        self
    }

    /// Sets the number of decks in the shoe.
    ///
    /// # Example
    ///
    /// ```
    /// use guandan_rank::RuleOptions;
    ///
    /// let options = RuleOptions::default().with_decks(1);
    /// assert_eq!(options.decks, 1);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }
}
