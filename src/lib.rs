//! A blackjack round simulator with optional `no_std` support.
//!
//! The crate provides deterministic deck shuffles, player and dealer hands,
//! hand scoring, and a [`Game`] type that plays rounds against a scripted
//! dealer while tracking a wallet and writing a transcript.
//!
//! # Example
//!
//! ```
//! use bjsim::{Game, GameOptions};
//!
//! let mut game = Game::new(10, GameOptions::default(), 20);
//! let report = game.play(1, 15).unwrap();
//! assert_eq!(report.rounds.len(), 1);
//! assert!(game.transcript().as_str().starts_with("Round 1 of Blackjack!"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod score;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{CardError, DealError, PlayError, ShuffleError};
pub use game::{Game, INITIAL_DEAL, Seat, Transcript};
pub use hand::{Hand, HandKind};
pub use options::{GameOptions, ShuffleOptions, ShufflePolicy};
pub use result::{Outcome, PlayReport, RoundResult, RoundSummary, StopReason};
pub use score::{BUST_LIMIT, resolve_outcome, score, score_cards};
pub use shuffle::ShuffleKind;
