use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Suit printed on a card. `Joker` is the suit of the single joker and can
/// never be named trump.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Suit {
    /// Hearts (♥)
    Hearts,
    /// Clubs (♣)
    Clubs,
    /// Spades (♠)
    Spades,
    /// Diamonds (♦)
    Diamonds,
    /// The joker's own suit
    Joker,
}

/// The suits a bidder may declare as trump for a round.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectableSuit {
    Hearts,
    Clubs,
    Spades,
    Diamonds,
}

impl SelectableSuit {
    pub fn all() -> [SelectableSuit; 4] {
        [
            SelectableSuit::Hearts,
            SelectableSuit::Clubs,
            SelectableSuit::Spades,
            SelectableSuit::Diamonds,
        ]
    }
}

impl From<SelectableSuit> for Suit {
    fn from(suit: SelectableSuit) -> Self {
        match suit {
            SelectableSuit::Hearts => Suit::Hearts,
            SelectableSuit::Clubs => Suit::Clubs,
            SelectableSuit::Spades => Suit::Spades,
            SelectableSuit::Diamonds => Suit::Diamonds,
        }
    }
}

impl TryFrom<Suit> for SelectableSuit {
    type Error = GameError;

    fn try_from(suit: Suit) -> Result<Self, Self::Error> {
        match suit {
            Suit::Hearts => Ok(SelectableSuit::Hearts),
            Suit::Clubs => Ok(SelectableSuit::Clubs),
            Suit::Spades => Ok(SelectableSuit::Spades),
            Suit::Diamonds => Ok(SelectableSuit::Diamonds),
            Suit::Joker => Err(GameError::UnselectableSuit),
        }
    }
}

/// Face value of a card. Numeric values follow the printed rank with the
/// joker sitting below the two.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    /// The joker (1)
    Joker = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5, the highest trump of any suit
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

/// A physical card together with its strength numbers.
///
/// `trump_value` ranks the card when its suit is trump (or it is always
/// trump); `weak_trump_value` ranks it when its suit led a trick that no
/// trump was played into. Cards can only be obtained from the catalog, so
/// the numbers always match the rank and suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CardFace", into = "CardFace")]
pub struct Card {
    rank: Rank,
    suit: Suit,
    trump_value: u8,
    weak_trump_value: u8,
    always_trump: bool,
}

/// Wire form of a card: only the printed face.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    pub rank: Rank,
    pub suit: Suit,
}

impl From<Card> for CardFace {
    fn from(card: Card) -> Self {
        CardFace {
            rank: card.rank,
            suit: card.suit,
        }
    }
}

impl TryFrom<CardFace> for Card {
    type Error = GameError;

    fn try_from(face: CardFace) -> Result<Self, Self::Error> {
        Card::find(face.rank, face.suit)
            .ok_or_else(|| GameError::InvalidCard(format!("{:?} of {:?}", face.rank, face.suit)))
    }
}

impl Card {
    const fn entry(rank: Rank, suit: Suit, trump_value: u8, weak_trump_value: u8) -> Card {
        Card {
            rank,
            suit,
            trump_value,
            weak_trump_value,
            always_trump: false,
        }
    }

    const fn always(rank: Rank, suit: Suit, trump_value: u8, weak_trump_value: u8) -> Card {
        Card {
            rank,
            suit,
            trump_value,
            weak_trump_value,
            always_trump: true,
        }
    }

    /// Look up the catalog card with the given face.
    pub fn find(rank: Rank, suit: Suit) -> Option<Card> {
        CATALOG
            .iter()
            .find(|c| c.rank == rank && c.suit == suit)
            .copied()
    }

    /// The card of `rank` in a selectable suit. `None` only for `Rank::Joker`.
    pub fn of(rank: Rank, suit: SelectableSuit) -> Option<Card> {
        Card::find(rank, suit.into())
    }

    pub fn joker() -> Card {
        CATALOG[CATALOG_SIZE - 1]
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn trump_value(&self) -> u8 {
        self.trump_value
    }

    pub fn weak_trump_value(&self) -> u8 {
        self.weak_trump_value
    }

    pub fn always_trump(&self) -> bool {
        self.always_trump
    }

    /// True when the card counts as trump under the given round trump.
    pub fn is_trump(&self, trump: SelectableSuit) -> bool {
        self.always_trump || self.suit == Suit::from(trump)
    }
}

/// Number of cards in the catalog (52 suited cards and the joker).
pub const CATALOG_SIZE: usize = 53;

use Rank as R;
use Suit as S;

static CATALOG: [Card; CATALOG_SIZE] = [
    // Hearts
    Card::entry(R::Two, S::Hearts, 0, 0),
    Card::entry(R::Three, S::Hearts, 1, 1),
    Card::entry(R::Four, S::Hearts, 2, 2),
    Card::entry(R::Five, S::Hearts, 14, 3),
    Card::entry(R::Six, S::Hearts, 3, 4),
    Card::entry(R::Seven, S::Hearts, 4, 5),
    Card::entry(R::Eight, S::Hearts, 5, 6),
    Card::entry(R::Nine, S::Hearts, 6, 7),
    Card::entry(R::Ten, S::Hearts, 7, 8),
    Card::entry(R::Jack, S::Hearts, 13, 9),
    Card::entry(R::Queen, S::Hearts, 8, 10),
    Card::entry(R::King, S::Hearts, 9, 11),
    Card::always(R::Ace, S::Hearts, 11, 12),
    // Diamonds
    Card::entry(R::Two, S::Diamonds, 0, 0),
    Card::entry(R::Three, S::Diamonds, 1, 1),
    Card::entry(R::Four, S::Diamonds, 2, 2),
    Card::entry(R::Five, S::Diamonds, 14, 3),
    Card::entry(R::Six, S::Diamonds, 3, 4),
    Card::entry(R::Seven, S::Diamonds, 4, 5),
    Card::entry(R::Eight, S::Diamonds, 5, 6),
    Card::entry(R::Nine, S::Diamonds, 6, 7),
    Card::entry(R::Ten, S::Diamonds, 7, 8),
    Card::entry(R::Jack, S::Diamonds, 13, 9),
    Card::entry(R::Queen, S::Diamonds, 8, 10),
    Card::entry(R::King, S::Diamonds, 9, 11),
    Card::entry(R::Ace, S::Diamonds, 10, 12),
    // Spades
    Card::entry(R::Two, S::Spades, 7, 8),
    Card::entry(R::Three, S::Spades, 6, 7),
    Card::entry(R::Four, S::Spades, 5, 6),
    Card::entry(R::Five, S::Spades, 14, 5),
    Card::entry(R::Six, S::Spades, 4, 4),
    Card::entry(R::Seven, S::Spades, 3, 3),
    Card::entry(R::Eight, S::Spades, 2, 2),
    Card::entry(R::Nine, S::Spades, 1, 1),
    Card::entry(R::Ten, S::Spades, 0, 0),
    Card::entry(R::Jack, S::Spades, 13, 9),
    Card::entry(R::Queen, S::Spades, 8, 10),
    Card::entry(R::King, S::Spades, 9, 11),
    Card::entry(R::Ace, S::Spades, 10, 12),
    // Clubs
    Card::entry(R::Two, S::Clubs, 7, 8),
    Card::entry(R::Three, S::Clubs, 6, 7),
    Card::entry(R::Four, S::Clubs, 5, 6),
    Card::entry(R::Five, S::Clubs, 14, 5),
    Card::entry(R::Six, S::Clubs, 4, 4),
    Card::entry(R::Seven, S::Clubs, 3, 3),
    Card::entry(R::Eight, S::Clubs, 2, 2),
    Card::entry(R::Nine, S::Clubs, 1, 1),
    Card::entry(R::Ten, S::Clubs, 0, 0),
    Card::entry(R::Jack, S::Clubs, 13, 9),
    Card::entry(R::Queen, S::Clubs, 8, 10),
    Card::entry(R::King, S::Clubs, 9, 11),
    Card::entry(R::Ace, S::Clubs, 10, 12),
    // Joker
    Card::always(R::Joker, S::Joker, 12, 12),
];

/// The full catalog in its canonical order. Deck permutations index into this.
pub fn catalog() -> &'static [Card; CATALOG_SIZE] {
    &CATALOG
}
