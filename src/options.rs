//! Shuffle and game configuration options.

#[cfg(feature = "std")]
use std::path::PathBuf;

/// Shuffles to apply to a deck.
///
/// The modified overhand always runs before the mongean, whichever order the
/// builder methods are called in.
///
/// ```
/// use bjsim::ShuffleOptions;
///
/// let options = ShuffleOptions::default()
///     .with_mongean(3)
///     .with_modified_overhand(2);
/// assert_eq!(options.modified_overhand, Some(2));
/// assert_eq!(options.mongean, Some(3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ShuffleOptions {
    /// Starting block size of the modified overhand.
    pub modified_overhand: Option<usize>,
    /// Number of mongean passes.
    pub mongean: Option<usize>,
}

impl ShuffleOptions {
    /// Sets the starting block size of the modified overhand.
    #[must_use]
    pub const fn with_modified_overhand(mut self, count: usize) -> Self {
        self.modified_overhand = Some(count);
        self
    }

    /// Sets the number of mongean passes.
    #[must_use]
    pub const fn with_mongean(mut self, passes: usize) -> Self {
        self.mongean = Some(passes);
        self
    }

    /// Returns whether no shuffle is requested.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.modified_overhand.is_none() && self.mongean.is_none()
    }
}

/// How the deck is shuffled before each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShufflePolicy {
    /// Draw the mongean passes, then the overhand count, each uniformly from
    /// `0..max_passes`.
    Random {
        /// Exclusive upper bound of each drawn count.
        max_passes: usize,
    },
    /// Apply the same shuffles every round.
    Fixed(ShuffleOptions),
}

impl Default for ShufflePolicy {
    fn default() -> Self {
        Self::Random { max_passes: 5 }
    }
}

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::{GameOptions, ShuffleOptions, ShufflePolicy};
///
/// let options = GameOptions::default()
///     .with_min_bet(10)
///     .with_dealer_stand_threshold(16)
///     .with_shuffle(ShufflePolicy::Fixed(ShuffleOptions::default()));
/// assert_eq!(options.min_bet, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Minimum bet, also the step by which the bet grows and shrinks.
    pub min_bet: usize,
    /// Score at which the dealer stops drawing.
    pub dealer_stand_threshold: u32,
    /// Smallest deck size that still allows a round to start. Values below
    /// [`INITIAL_DEAL`](crate::game::INITIAL_DEAL) act as that value.
    pub min_cards: usize,
    /// Shuffle applied at the start of each round.
    pub shuffle: ShufflePolicy,
    /// Directory receiving `game_summary<N>.txt` files. `None` disables them.
    #[cfg(feature = "std")]
    pub summary_dir: Option<PathBuf>,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            min_bet: 5,
            dealer_stand_threshold: 17,
            min_cards: 4,
            shuffle: ShufflePolicy::default(),
            #[cfg(feature = "std")]
            summary_dir: None,
        }
    }
}

impl GameOptions {
    /// Sets the minimum bet.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_bet(25);
    /// assert_eq!(options.min_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the score at which the dealer stands.
    #[must_use]
    pub const fn with_dealer_stand_threshold(mut self, threshold: u32) -> Self {
        self.dealer_stand_threshold = threshold;
        self
    }

    /// Sets the smallest deck size that allows a new round.
    ///
    /// The round driver never starts a round with fewer cards than the
    /// initial deal needs, whatever this is set to.
    #[must_use]
    pub const fn with_min_cards(mut self, min_cards: usize) -> Self {
        self.min_cards = min_cards;
        self
    }

    /// Sets the shuffle policy.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{GameOptions, ShufflePolicy};
    ///
    /// let options = GameOptions::default().with_shuffle(ShufflePolicy::Random { max_passes: 3 });
    /// assert_eq!(options.shuffle, ShufflePolicy::Random { max_passes: 3 });
    /// ```
    #[must_use]
    pub const fn with_shuffle(mut self, shuffle: ShufflePolicy) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Sets the directory that receives game summary files.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn with_summary_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.summary_dir = Some(dir.into());
        self
    }
}
