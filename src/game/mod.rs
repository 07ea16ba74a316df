//! Round driver and wallet bookkeeping.

use core::sync::atomic::{AtomicUsize, Ordering};

use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::PlayError;
use crate::options::GameOptions;
use crate::result::{Outcome, PlayReport, RoundResult, StopReason};
use crate::score::resolve_outcome;

mod round;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod summary;
pub mod transcript;

pub use transcript::{Seat, Transcript};

/// Cards dealt before either hand plays.
pub const INITIAL_DEAL: usize = 4;

/// Game numbers handed out so far, process wide.
static NEXT_GAME: AtomicUsize = AtomicUsize::new(1);

/// A single-player blackjack game against a scripted dealer.
///
/// The game owns one deck for its whole lifetime, so every round consumes
/// cards until the deck runs too low to continue.
#[derive(Debug)]
pub struct Game {
    /// Cards not yet dealt.
    deck: Deck,
    /// Game options.
    options: GameOptions,
    /// Wallet balance.
    wallet: usize,
    /// Bet for the next round.
    bet: usize,
    /// Rounds played over the lifetime of the game.
    rounds_played: usize,
    /// Number identifying the game's summary file.
    game_number: usize,
    /// Human-readable log of play.
    transcript: Transcript,
    /// Every finished round.
    history: Vec<RoundResult>,
    /// Random number generator for shuffle counts.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given wallet and seed.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::{Game, GameOptions};
    ///
    /// let game = Game::new(10, GameOptions::default(), 20);
    /// assert_eq!(game.wallet(), 10);
    /// assert_eq!(game.deck().len(), 52);
    /// ```
    #[must_use]
    pub fn new(wallet: usize, options: GameOptions, seed: u64) -> Self {
        let game_number = NEXT_GAME.fetch_add(1, Ordering::SeqCst);
        let bet = options.min_bet;

        Self {
            deck: Deck::new(),
            options,
            wallet,
            bet,
            rounds_played: 0,
            game_number,
            transcript: Transcript::default(),
            history: Vec::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Plays up to `num_rounds` rounds.
    ///
    /// The player draws until their score reaches `stand_threshold`. The bet
    /// starts at the minimum bet. Play stops early, with a note in the
    /// transcript, when the deck is too small or the wallet cannot cover
    /// the bet.
    ///
    /// # Errors
    ///
    /// Returns an error if `num_rounds` is zero, `stand_threshold` is below
    /// 2, or a round summary cannot be written.
    pub fn play(
        &mut self,
        num_rounds: usize,
        stand_threshold: u32,
    ) -> Result<PlayReport, PlayError> {
        if num_rounds == 0 {
            return Err(PlayError::NoRounds);
        }
        if stand_threshold < 2 {
            return Err(PlayError::InvalidThreshold {
                threshold: stand_threshold,
            });
        }

        self.bet = self.options.min_bet;
        let mut rounds = Vec::with_capacity(num_rounds);

        for _ in 0..num_rounds {
            if let Some(reason) = self.stop_reason() {
                log::info!("game {} stopped: {reason:?}", self.game_number);
                self.transcript.stopped(reason);
                return Ok(PlayReport {
                    rounds,
                    stopped: Some(reason),
                });
            }
            rounds.push(self.play_round(stand_threshold)?);
        }

        Ok(PlayReport {
            rounds,
            stopped: None,
        })
    }

    fn stop_reason(&self) -> Option<StopReason> {
        // A round never starts without enough cards for the initial deal.
        if self.deck.len() < self.options.min_cards.max(INITIAL_DEAL) {
            return Some(StopReason::NotEnoughCards {
                remaining: self.deck.len(),
            });
        }
        if self.wallet < self.bet {
            return Some(StopReason::InsufficientFunds {
                wallet: self.wallet,
                bet: self.bet,
            });
        }
        None
    }

    /// Resolves a round from the two scores and logs the result.
    ///
    /// ```
    /// use bjsim::{Game, GameOptions, Outcome};
    ///
    /// let mut game = Game::new(10, GameOptions::default(), 0);
    /// assert_eq!(game.record_outcome(22, 23), Outcome::Tie);
    /// assert_eq!(game.transcript().as_str(), "Player and Dealer tie.\n");
    /// ```
    pub fn record_outcome(&mut self, player_score: u32, dealer_score: u32) -> Outcome {
        let outcome = resolve_outcome(player_score, dealer_score);
        self.transcript.outcome(player_score, dealer_score, outcome);
        outcome
    }

    /// Moves the bet in or out of the wallet and adjusts the next bet.
    fn settle(&mut self, outcome: Outcome) {
        let min_bet = self.options.min_bet;
        match outcome {
            Outcome::PlayerWins => {
                self.wallet += self.bet;
                self.bet += min_bet;
            }
            Outcome::DealerWins => {
                self.wallet = self.wallet.saturating_sub(self.bet);
                if self.bet > min_bet {
                    self.bet -= min_bet;
                }
            }
            Outcome::Tie => {}
        }
    }

    /// Returns the wallet balance.
    #[must_use]
    pub const fn wallet(&self) -> usize {
        self.wallet
    }

    /// Returns the bet for the next round.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Returns the number of rounds played so far.
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Returns the game number used to name the summary file.
    #[must_use]
    pub const fn game_number(&self) -> usize {
        self.game_number
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the transcript.
    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Clears the transcript.
    pub fn reset_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Returns every round finished so far.
    #[must_use]
    pub fn history(&self) -> &[RoundResult] {
        &self.history
    }
}
