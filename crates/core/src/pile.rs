use crate::{Card, CardId, GameError};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const FOUNDATION_COUNT: u8 = 4;
pub const TABLEAU_COUNT: u8 = 7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PileKind {
    Stock,
    Discard,
    Foundation,
    Tableau,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PileId {
    Stock,
    Discard,
    Foundation(u8),
    Tableau(u8),
}

impl PileId {
    pub fn kind(self) -> PileKind {
        match self {
            PileId::Stock => PileKind::Stock,
            PileId::Discard => PileKind::Discard,
            PileId::Foundation(_) => PileKind::Foundation,
            PileId::Tableau(_) => PileKind::Tableau,
        }
    }

    pub fn foundations() -> impl Iterator<Item = PileId> {
        (0..FOUNDATION_COUNT).map(PileId::Foundation)
    }

    pub fn tableaus() -> impl Iterator<Item = PileId> {
        (0..TABLEAU_COUNT).map(PileId::Tableau)
    }

    /// Every pile in table order: stock, discard, foundations, tableaus.
    pub fn all() -> impl Iterator<Item = PileId> {
        [PileId::Stock, PileId::Discard]
            .into_iter()
            .chain(Self::foundations())
            .chain(Self::tableaus())
    }

    /// Position of the pile in table order, `None` for out-of-range indices.
    pub fn slot(self) -> Option<usize> {
        match self {
            PileId::Stock => Some(0),
            PileId::Discard => Some(1),
            PileId::Foundation(index) if index < FOUNDATION_COUNT => Some(2 + index as usize),
            PileId::Tableau(index) if index < TABLEAU_COUNT => {
                Some(2 + FOUNDATION_COUNT as usize + index as usize)
            }
            _ => None,
        }
    }
}

impl fmt::Display for PileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PileId::Stock => write!(f, "Stock"),
            PileId::Discard => write!(f, "Discard"),
            PileId::Foundation(index) => write!(f, "Foundation {index}"),
            PileId::Tableau(index) => write!(f, "Tableau {index}"),
        }
    }
}

/// Ordered stack of cards; index 0 is the bottom, the last card is the top.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pile {
    id: PileId,
    name: String,
    cards: Vec<Card>,
}

impl Pile {
    pub fn new(id: PileId) -> Self {
        Self {
            id,
            name: id.to_string(),
            cards: Vec::new(),
        }
    }

    pub fn id(&self) -> PileId {
        self.id
    }

    pub fn kind(&self) -> PileKind {
        self.id.kind()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends to the top and points the card back at this pile.
    pub fn add_card(&mut self, mut card: Card) {
        card.set_pile(self.id);
        self.cards.push(card);
    }

    pub fn top_card(&self) -> Result<&Card, GameError> {
        self.cards.last().ok_or(GameError::EmptyPile(self.id))
    }

    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn num_of_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Empties the pile. Whoever takes the cards is responsible for
    /// re-homing them through `add_card`.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Live view of the sequence. Cards may be edited in place but the
    /// order and length stay fixed.
    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id() == id)
    }

    pub fn is_top(&self, id: CardId) -> bool {
        self.peek_top().is_some_and(|card| card.id() == id)
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> Card {
        self.cards.remove(index)
    }

    pub(crate) fn split_off(&mut self, index: usize) -> Vec<Card> {
        self.cards.split_off(index)
    }
}
