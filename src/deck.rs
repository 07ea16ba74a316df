//! The 52-card deck.

use alloc::vec::Vec;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DealError, ShuffleError};
use crate::hand::Hand;
use crate::options::ShuffleOptions;
use crate::shuffle::{self, ShuffleKind};

/// A single deck of cards, consumed from the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck sorted ascending by rank, then suit.
    ///
    /// ```
    /// use bjsim::Deck;
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), 52);
    /// assert_eq!(deck.peek().unwrap().to_string(), "(2, spades)");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in Rank::ALL {
            for suit in Suit::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Self { cards }
    }

    /// Creates a deck holding exactly the given cards, front first.
    ///
    /// The cards are taken as given: no check is made for duplicates or for
    /// a full 52-card set. Use [`Deck::new`] for a standard deck.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Reorders the deck with the requested shuffles.
    ///
    /// The modified overhand always runs first, once, with its count as the
    /// starting block size. The mongean then runs as many separate passes as
    /// requested.
    ///
    /// # Errors
    ///
    /// Returns an error if the overhand count exceeds the number of cards.
    /// The deck is unchanged on error.
    pub fn shuffle(&mut self, options: &ShuffleOptions) -> Result<(), ShuffleError> {
        let len = self.cards.len();
        if let Some(count) = options.modified_overhand {
            if count > len {
                return Err(ShuffleError::CountOutOfRange { count, len });
            }
        }

        if let Some(count) = options.modified_overhand {
            log::debug!("{} count={count} cards={len}", ShuffleKind::ModifiedOverhand);
            shuffle::modified_overhand(&mut self.cards, count)?;
        }

        if let Some(passes) = options.mongean {
            log::debug!("{} passes={passes} cards={len}", ShuffleKind::Mongean);
            for _ in 0..passes {
                shuffle::mongean(&mut self.cards);
            }
        }

        Ok(())
    }

    /// Moves the front card into `hand`.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::EmptyDeck`] if no cards remain. The hand is
    /// unchanged on error.
    pub fn deal(&mut self, hand: &mut Hand) -> Result<(), DealError> {
        if self.cards.is_empty() {
            return Err(DealError::EmptyDeck);
        }

        let card = self.cards.remove(0);
        log::trace!("dealt {card}, {} cards remaining", self.cards.len());
        hand.insert([card]);
        Ok(())
    }

    /// Returns the front card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
