use alloc::string::ToString;

use rand::Rng;

use crate::error::PlayError;
use crate::hand::Hand;
use crate::options::{ShuffleOptions, ShufflePolicy};
use crate::result::{RoundResult, RoundSummary};
use crate::score::score;

use super::{Game, Seat};

impl Game {
    /// Shuffles, deals, plays out both hands and settles one round.
    pub(super) fn play_round(&mut self, stand_threshold: u32) -> Result<RoundResult, PlayError> {
        self.rounds_played += 1;
        let round = self.rounds_played;

        let shuffle = self.next_shuffle();
        self.deck.shuffle(&shuffle)?;

        let mut player = Hand::open();
        let mut dealer = Hand::concealed();
        for _ in 0..2 {
            self.deck.deal(&mut player)?;
            self.deck.deal(&mut dealer)?;
        }

        self.transcript
            .round_header(round, self.wallet, self.bet, &player, &dealer);

        self.hit_or_stand(&mut player, Seat::Player, stand_threshold);
        dealer.reveal();
        self.transcript.revealed(&dealer);
        self.hit_or_stand(&mut dealer, Seat::Dealer, self.options.dealer_stand_threshold);

        let player_score = score(&player);
        let dealer_score = score(&dealer);
        let outcome = self.record_outcome(player_score, dealer_score);
        log::info!(
            "game {} round {round}: player {player_score}, dealer {dealer_score}, {outcome:?}",
            self.game_number
        );

        let wallet_before = self.wallet;
        let bet = self.bet;
        self.settle(outcome);

        let summary = RoundSummary {
            round,
            player_art: player.art(),
            dealer_art: dealer.art(),
            outcome,
        };

        let result = RoundResult {
            round,
            wallet_before,
            bet,
            player_score,
            dealer_score,
            outcome,
            summary,
        };
        self.history.push(result.clone());

        #[cfg(feature = "std")]
        if let Some(dir) = &self.options.summary_dir {
            super::summary::append_round(dir, self.game_number, &result.summary)?;
        }

        Ok(result)
    }

    /// Draws cards into `hand` until its score reaches `threshold` or the
    /// deck runs out.
    fn hit_or_stand(&mut self, hand: &mut Hand, seat: Seat, threshold: u32) {
        while score(hand) < threshold {
            let Some(card) = self.deck.peek().map(ToString::to_string) else {
                break;
            };
            if self.deck.deal(hand).is_err() {
                break;
            }
            self.transcript.pulled(&card, seat);
        }
    }

    /// Picks this round's shuffles, keeping the overhand within the deck.
    fn next_shuffle(&mut self) -> ShuffleOptions {
        let mut shuffle = match self.options.shuffle {
            ShufflePolicy::Random { max_passes: 0 } => ShuffleOptions::default(),
            ShufflePolicy::Random { max_passes } => {
                let mongean = self.rng.random_range(0..max_passes);
                let overhand = self.rng.random_range(0..max_passes);
                ShuffleOptions::default()
                    .with_modified_overhand(overhand)
                    .with_mongean(mongean)
            }
            ShufflePolicy::Fixed(options) => options,
        };

        let len = self.deck.len();
        if let Some(count) = shuffle.modified_overhand {
            if count > len {
                log::warn!("overhand count {count} clamped to {len} cards");
                shuffle.modified_overhand = Some(len);
            }
        }
        shuffle
    }
}
