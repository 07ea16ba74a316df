//! Player and dealer hand representations.

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// How a hand shows its cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandKind {
    /// Every card is face up and the hand is always sorted.
    Open,
    /// Only the first card is face up until the hand is revealed.
    Concealed {
        /// Whether the hand has been revealed.
        revealed: bool,
    },
}

/// An ordered collection of cards.
///
/// Open hands are kept sorted ascending. Concealed hands keep deal order
/// until they are revealed, after which they behave like open hands.
#[derive(Debug, Clone)]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Visibility rules for the hand.
    kind: HandKind,
}

impl Hand {
    /// Creates a new empty hand with every card face up.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            cards: Vec::new(),
            kind: HandKind::Open,
        }
    }

    /// Creates a new empty dealer-style hand.
    #[must_use]
    pub const fn concealed() -> Self {
        Self {
            cards: Vec::new(),
            kind: HandKind::Concealed { revealed: false },
        }
    }

    /// Adds cards to the hand.
    ///
    /// An unrevealed concealed hand hides every new card, then shows the
    /// card at the front of the hand. Any other hand shows the cards and
    /// sorts itself.
    pub fn insert<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        if self.is_revealed() {
            self.cards.extend(cards.into_iter().map(|mut card| {
                card.set_visible(true);
                card
            }));
            self.cards.sort();
            return;
        }

        self.cards.extend(cards.into_iter().map(|mut card| {
            card.set_visible(false);
            card
        }));
        if let Some(first) = self.cards.first_mut() {
            first.set_visible(true);
        }
    }

    /// Reveals every card and sorts the hand. Revealing is permanent.
    pub fn reveal(&mut self) {
        if let HandKind::Concealed { revealed } = &mut self.kind {
            *revealed = true;
        }
        for card in &mut self.cards {
            card.set_visible(true);
        }
        self.cards.sort();
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visibility rules of the hand.
    #[must_use]
    pub const fn kind(&self) -> HandKind {
        self.kind
    }

    /// Returns whether all cards are shown. Open hands are always revealed.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        match self.kind {
            HandKind::Open => true,
            HandKind::Concealed { revealed } => revealed,
        }
    }

    /// Returns the number of face-up cards.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_visible()).count()
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Renders every card as ASCII art, one card below the other.
    #[must_use]
    pub fn art(&self) -> String {
        let mut out = String::new();
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&card.art());
        }
        out
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
