//! Human-readable round transcript.

use core::fmt::{self, Write};

use alloc::format;
use alloc::string::String;

use crate::hand::Hand;
use crate::result::{Outcome, StopReason};

/// Who a hand belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        })
    }
}

/// Accumulated transcript text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub(crate) fn round_header(
        &mut self,
        round: usize,
        wallet: usize,
        bet: usize,
        player: &Hand,
        dealer: &Hand,
    ) {
        self.line(format_args!("Round {round} of Blackjack!"));
        self.line(format_args!("wallet: {wallet}"));
        self.line(format_args!("bet: {bet}"));
        self.line(format_args!("Player Cards: {player}"));
        self.line(format_args!("Dealer Cards: {dealer}"));
    }

    pub(crate) fn pulled(&mut self, card: &str, seat: Seat) {
        self.line(format_args!("{card} was pulled by a {seat}"));
    }

    pub(crate) fn revealed(&mut self, dealer: &Hand) {
        self.line(format_args!("Dealer Cards Revealed: {dealer}"));
    }

    pub(crate) fn outcome(&mut self, player: u32, dealer: u32, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.line(format_args!(
                "Player won with a score of {player}. Dealer lost with a score of {dealer}."
            )),
            Outcome::DealerWins => self.line(format_args!(
                "Player lost with a score of {player}. Dealer won with a score of {dealer}."
            )),
            Outcome::Tie => self.line(format_args!("Player and Dealer tie.")),
        }
    }

    // No trailing newline: play ends here.
    pub(crate) fn stopped(&mut self, reason: StopReason) {
        let text = match reason {
            StopReason::NotEnoughCards { .. } => String::from("Not enough cards for a game."),
            StopReason::InsufficientFunds { wallet, bet } => {
                format!("Wallet amount ${wallet} is less than bet amount ${bet}.")
            }
        };
        self.text.push_str(&text);
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        // Writing into a `String` cannot fail.
        let _ = writeln!(self.text, "{args}");
    }

    /// Returns the transcript text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Clears the transcript.
    pub fn clear(&mut self) {
        self.text.clear();
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
