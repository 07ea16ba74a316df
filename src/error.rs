//! Error types for simulator operations.

use thiserror::Error;

/// Errors that can occur when parsing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not one of 2-10, J, Q, K, A.
    #[error("invalid rank")]
    InvalidRank,
    /// Suit is not one of spades, hearts, diamonds, clubs.
    #[error("invalid suit")]
    InvalidSuit,
    /// Text is not a rank followed by a suit.
    #[error("invalid card")]
    InvalidCard,
}

/// Errors that can occur during shuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShuffleError {
    /// Block size exceeds the number of cards.
    #[error("shuffle count {count} is out of range for {len} cards")]
    CountOutOfRange {
        /// Requested block size.
        count: usize,
        /// Number of elements being shuffled.
        len: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur while playing rounds.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlayError {
    /// At least one round must be requested.
    #[error("at least one round must be played")]
    NoRounds,
    /// Stand threshold must be greater than one.
    #[error("stand threshold {threshold} must be greater than 1")]
    InvalidThreshold {
        /// The rejected threshold.
        threshold: u32,
    },
    /// The deck could not be shuffled.
    #[error(transparent)]
    Shuffle(#[from] ShuffleError),
    /// The deck ran out during the initial deal.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// The round summary could not be appended.
    #[cfg(feature = "std")]
    #[error("failed to write game summary")]
    Summary(#[from] std::io::Error),
}
