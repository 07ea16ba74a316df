//! Hand scoring and round outcome resolution.

use crate::card::Card;
use crate::hand::Hand;
use crate::result::Outcome;

/// Highest score that does not bust.
pub const BUST_LIMIT: u32 = 21;

/// Extra points when one Ace counts as 11 instead of 1.
const ACE_BONUS: u32 = 10;

/// Scores every card in the hand, hidden or not.
///
/// ```
/// use bjsim::{Card, Hand, Rank, Suit, score};
///
/// let mut hand = Hand::open();
/// hand.insert([Card::new(Rank::Ace, Suit::Diamonds), Card::new(Rank::Jack, Suit::Spades)]);
/// assert_eq!(score(&hand), 21);
/// ```
#[must_use]
pub fn score(hand: &Hand) -> u32 {
    score_cards(hand.cards())
}

/// Scores a set of cards.
///
/// Face cards count 10. At most one Ace is counted as 11, and only when the
/// other cards total less than 11 and the result stays within 21; every
/// other Ace counts as 1.
#[must_use]
pub fn score_cards(cards: &[Card]) -> u32 {
    let (base, aces) = cards.iter().fold((0u32, 0u32), |(base, aces), card| {
        if card.rank().is_ace() {
            (base, aces + 1)
        } else {
            (base + u32::from(card.rank().points()), aces)
        }
    });

    let low = base + aces;
    if aces > 0 && base < 11 && low + ACE_BONUS <= BUST_LIMIT {
        low + ACE_BONUS
    } else {
        low
    }
}

/// Returns whether a score is over the limit.
#[must_use]
pub const fn is_bust(score: u32) -> bool {
    score > BUST_LIMIT
}

/// Decides a round from the player's and the dealer's scores.
///
/// Two busted hands tie regardless of their scores. A single bust loses.
/// Otherwise the higher score wins and equal scores tie.
#[must_use]
pub fn resolve_outcome(player: u32, dealer: u32) -> Outcome {
    match (is_bust(player), is_bust(dealer)) {
        (true, true) => Outcome::Tie,
        (true, false) => Outcome::DealerWins,
        (false, true) => Outcome::PlayerWins,
        (false, false) => match player.cmp(&dealer) {
            core::cmp::Ordering::Greater => Outcome::PlayerWins,
            core::cmp::Ordering::Equal => Outcome::Tie,
            core::cmp::Ordering::Less => Outcome::DealerWins,
        },
    }
}
