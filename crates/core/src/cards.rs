use crate::PileId;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Clubs,
    Diamonds,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds];

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    fn index(self) -> u8 {
        match self {
            Suit::Spades => 0,
            Suit::Hearts => 1,
            Suit::Clubs => 2,
            Suit::Diamonds => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric rank, Ace = 1 through King = 13.
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn from_value(value: u8) -> Option<Self> {
        let index = value.checked_sub(1)?;
        Self::ALL.get(index as usize).copied()
    }
}

/// Stable identity of one of the 52 cards: one per (suit, rank) pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardId(u8);

impl CardId {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self(suit.index() * 13 + rank.value() - 1)
    }

    pub fn from_index(index: u8) -> Option<Self> {
        (index < 52).then_some(Self(index))
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn suit(self) -> Suit {
        Suit::ALL[(self.0 / 13) as usize]
    }

    pub fn rank(self) -> Rank {
        Rank::ALL[(self.0 % 13) as usize]
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank() {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        };
        let suit = match self.suit() {
            Suit::Spades => "S",
            Suit::Hearts => "H",
            Suit::Clubs => "C",
            Suit::Diamonds => "D",
        };
        write!(f, "{rank}{suit}")
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub face_down: bool,
    /// Back-reference to the pile holding this card. Only `Pile::add_card`
    /// writes it.
    #[serde(default)]
    pile: Option<PileId>,
}

impl Card {
    /// A face-down card that is not in any pile yet.
    pub fn standard(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_down: true,
            pile: None,
        }
    }

    pub fn revealed(mut self) -> Self {
        self.face_down = false;
        self
    }

    pub fn id(&self) -> CardId {
        CardId::new(self.suit, self.rank)
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    pub fn flip(&mut self) {
        self.face_down = !self.face_down;
    }

    pub fn is_face_up(&self) -> bool {
        !self.face_down
    }

    pub fn containing_pile(&self) -> Option<PileId> {
        self.pile
    }

    pub(crate) fn set_pile(&mut self, pile: PileId) {
        self.pile = Some(pile);
    }

    pub fn is_same_suit(a: &Card, b: &Card) -> bool {
        a.suit == b.suit
    }

    pub fn is_opposite_color(a: &Card, b: &Card) -> bool {
        a.color() != b.color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.id().fmt(f)
    }
}
