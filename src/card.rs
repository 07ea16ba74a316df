//! Card types and their text forms.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use alloc::format;
use alloc::string::String;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card rank, declared in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
        Self::Ace,
    ];

    /// Ordering value: numeric ranks map to themselves, J/Q/K to 11/12/13
    /// and the Ace to 14.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8 + 2
    }

    /// Points counted by the score resolver, with the Ace counted low.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 1,
            _ => self.ordinal(),
        }
    }

    /// Returns whether this rank is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }

    /// Text form used in transcripts (`2`..`10`, `J`, `Q`, `K`, `A`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.as_str() == s)
            .ok_or(CardError::InvalidRank)
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    /// Converts a numeric rank (2 through 10).
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2..=10 => Ok(Self::ALL[value as usize - 2]),
            _ => Err(CardError::InvalidRank),
        }
    }
}

/// Card suit, declared in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in tie-break order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// Tie-break value (spades = 1 through clubs = 4).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Lowercase suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spades => "spades",
            Self::Hearts => "hearts",
            Self::Diamonds => "diamonds",
            Self::Clubs => "clubs",
        }
    }

    /// Display glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Spades => '♠',
            Self::Hearts => '♥',
            Self::Diamonds => '♦',
            Self::Clubs => '♣',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or(CardError::InvalidSuit)
    }
}

/// A playing card.
///
/// Equality, hashing and ordering look only at rank and suit. Visibility is
/// presentation state controlled by the hand holding the card.
#[derive(Debug, Clone)]
pub struct Card {
    rank: Rank,
    suit: Suit,
    visible: bool,
}

impl Card {
    /// Creates a new, visible card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            visible: true,
        }
    }

    /// Returns the rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the card is face up.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) const fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Renders the card as four lines of ASCII art.
    ///
    /// ```
    /// use bjsim::{Card, Rank, Suit};
    ///
    /// let card = Card::new(Rank::Ace, Suit::Spades);
    /// assert_eq!(card.art(), "____\n|A  |\n| ♠ |\n|__A|");
    /// ```
    #[must_use]
    pub fn art(&self) -> String {
        let (rank, glyph) = if self.visible {
            (self.rank.as_str(), self.suit.glyph())
        } else {
            ("?", '?')
        };
        format!("____\n|{rank}  |\n| {glyph} |\n|__{rank}|")
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank.hash(state);
        self.suit.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.suit.cmp(&other.suit))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.visible {
            write!(f, "({}, {})", self.rank, self.suit)
        } else {
            f.write_str("(?, ?)")
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses `"(A, spades)"` or `"A spades"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);

        let mut parts = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let (Some(rank), Some(suit), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(CardError::InvalidCard);
        };

        Ok(Self::new(rank.parse()?, suit.parse()?))
    }
}
