//! Round result types.

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

/// Result of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player has the better non-busted score, or only the dealer busted.
    PlayerWins,
    /// Equal scores, or both hands busted.
    Tie,
    /// Dealer has the better non-busted score, or only the player busted.
    DealerWins,
}

impl Outcome {
    /// Name of the winner as written in round summaries.
    #[must_use]
    pub const fn winner(self) -> &'static str {
        match self {
            Self::PlayerWins => "Player",
            Self::Tie => "Tied",
            Self::DealerWins => "Dealer",
        }
    }
}

/// Why a call to [`Game::play`](crate::Game::play) stopped early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The deck holds too few cards to start a round.
    NotEnoughCards {
        /// Cards left in the deck.
        remaining: usize,
    },
    /// The wallet cannot cover the bet.
    InsufficientFunds {
        /// Wallet balance.
        wallet: usize,
        /// Bet required for the next round.
        bet: usize,
    },
}

/// Record of a finished round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number within the game, starting at 1.
    pub round: usize,
    /// Wallet balance before settling.
    pub wallet_before: usize,
    /// Bet placed on the round.
    pub bet: usize,
    /// Final player score.
    pub player_score: u32,
    /// Final dealer score.
    pub dealer_score: u32,
    /// Who won.
    pub outcome: Outcome,
    /// Summary text appended to the game summary file.
    pub summary: RoundSummary,
}

/// Outcome of a call to [`Game::play`](crate::Game::play).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayReport {
    /// Rounds completed during this call.
    pub rounds: Vec<RoundResult>,
    /// Set when play stopped before all requested rounds were played.
    pub stopped: Option<StopReason>,
}

/// Per-round entry of the persisted game summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// Round number.
    pub round: usize,
    /// Card art of the player's final hand.
    pub player_art: String,
    /// Card art of the dealer's final hand.
    pub dealer_art: String,
    /// Who won.
    pub outcome: Outcome,
}

impl fmt::Display for RoundSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ROUND {}:", self.round)?;
        writeln!(f, "Player Hand:")?;
        writeln!(f, "{}", self.player_art)?;
        writeln!(f, "Dealer Hand:")?;
        writeln!(f, "{}", self.dealer_art)?;
        writeln!(f, "Winner of ROUND {}: {}", self.round, self.outcome.winner())
    }
}
