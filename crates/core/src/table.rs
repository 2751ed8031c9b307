use crate::{Card, CardId, GameError, Pile, PileId, PileKind};
use serde::{Deserialize, Serialize};

/// The thirteen piles of a game in table order. The piles own the cards;
/// a card's pile pointer is only a lookup aid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    piles: Vec<Pile>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    pub fn new() -> Self {
        Self {
            piles: PileId::all().map(Pile::new).collect(),
        }
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn pile(&self, id: PileId) -> Result<&Pile, GameError> {
        id.slot()
            .and_then(|slot| self.piles.get(slot))
            .ok_or(GameError::InvalidPile(id))
    }

    pub fn pile_mut(&mut self, id: PileId) -> Result<&mut Pile, GameError> {
        id.slot()
            .and_then(|slot| self.piles.get_mut(slot))
            .ok_or(GameError::InvalidPile(id))
    }

    pub fn piles_of(&self, kind: PileKind) -> impl Iterator<Item = &Pile> {
        self.piles.iter().filter(move |pile| pile.kind() == kind)
    }

    pub fn card(&self, id: CardId) -> Result<&Card, GameError> {
        self.piles
            .iter()
            .flat_map(|pile| pile.cards())
            .find(|card| card.id() == id)
            .ok_or(GameError::UnknownCard(id))
    }

    pub fn card_mut(&mut self, id: CardId) -> Result<&mut Card, GameError> {
        self.piles
            .iter_mut()
            .flat_map(|pile| pile.cards_mut().iter_mut())
            .find(|card| card.id() == id)
            .ok_or(GameError::UnknownCard(id))
    }

    /// Pile and index of a card, resolved through its back-reference.
    pub fn locate(&self, id: CardId) -> Result<(PileId, usize), GameError> {
        let pile_id = self
            .card(id)?
            .containing_pile()
            .ok_or(GameError::CardNotInPile(id))?;
        let index = self
            .pile(pile_id)?
            .position(id)
            .ok_or(GameError::CardNotInPile(id))?;
        Ok((pile_id, index))
    }

    pub fn place(&mut self, card: Card, pile: PileId) -> Result<(), GameError> {
        self.pile_mut(pile)?.add_card(card);
        Ok(())
    }

    /// Moves a single card to the top of `dest`, wherever it sits in its pile.
    pub fn move_card(&mut self, id: CardId, dest: PileId) -> Result<(), GameError> {
        self.pile(dest)?;
        let (from, index) = self.locate(id)?;
        let card = self.pile_mut(from)?.remove_at(index);
        self.pile_mut(dest)?.add_card(card);
        Ok(())
    }

    /// Moves `lead` and every card stacked above it onto `dest`, keeping
    /// their relative order. Returns the moved ids bottom to top.
    pub fn move_group(&mut self, lead: CardId, dest: PileId) -> Result<Vec<CardId>, GameError> {
        self.pile(dest)?;
        let (from, index) = self.locate(lead)?;
        let group = self.pile_mut(from)?.split_off(index);
        let ids = group.iter().map(Card::id).collect();
        let target = self.pile_mut(dest)?;
        for card in group {
            target.add_card(card);
        }
        Ok(ids)
    }

    /// The tail of the card's pile beginning at the card.
    pub fn tail_from(&self, id: CardId) -> Result<Vec<CardId>, GameError> {
        let (from, index) = self.locate(id)?;
        Ok(self.pile(from)?.cards()[index..]
            .iter()
            .map(Card::id)
            .collect())
    }

    pub fn foundation_count(&self) -> usize {
        self.piles_of(PileKind::Foundation)
            .map(Pile::num_of_cards)
            .sum()
    }

    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::num_of_cards).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn id(suit: Suit, rank: Rank) -> CardId {
        CardId::new(suit, rank)
    }

    #[test]
    fn new_table_has_thirteen_named_piles() {
        let table = Table::new();
        assert_eq!(table.piles().len(), 13);
        assert_eq!(table.piles_of(PileKind::Foundation).count(), 4);
        assert_eq!(table.piles_of(PileKind::Tableau).count(), 7);
        assert_eq!(table.piles()[0].name(), "Stock");
        assert_eq!(table.piles()[12].name(), "Tableau 6");
    }

    #[test]
    fn move_card_updates_back_reference() {
        let mut table = Table::new();
        table
            .place(Card::standard(Suit::Spades, Rank::Four), PileId::Stock)
            .expect("place");
        table
            .move_card(id(Suit::Spades, Rank::Four), PileId::Discard)
            .expect("move");
        assert!(table.pile(PileId::Stock).expect("stock").is_empty());
        let card = table.card(id(Suit::Spades, Rank::Four)).expect("card");
        assert_eq!(card.containing_pile(), Some(PileId::Discard));
        assert_eq!(
            table.locate(id(Suit::Spades, Rank::Four)).expect("locate"),
            (PileId::Discard, 0)
        );
    }

    #[test]
    fn move_unknown_card_fails() {
        let mut table = Table::new();
        let err = table
            .move_card(id(Suit::Hearts, Rank::Ace), PileId::Foundation(0))
            .unwrap_err();
        assert!(matches!(err, GameError::UnknownCard(_)));
    }

    #[test]
    fn move_group_keeps_order() {
        let mut table = Table::new();
        let run = [
            Card::standard(Suit::Clubs, Rank::King),
            Card::standard(Suit::Hearts, Rank::Queen).revealed(),
            Card::standard(Suit::Spades, Rank::Jack).revealed(),
            Card::standard(Suit::Diamonds, Rank::Ten).revealed(),
        ];
        for card in run {
            table.place(card, PileId::Tableau(0)).expect("place");
        }
        let moved = table
            .move_group(id(Suit::Hearts, Rank::Queen), PileId::Tableau(4))
            .expect("move group");
        assert_eq!(
            moved,
            vec![
                id(Suit::Hearts, Rank::Queen),
                id(Suit::Spades, Rank::Jack),
                id(Suit::Diamonds, Rank::Ten),
            ]
        );
        assert_eq!(table.pile(PileId::Tableau(0)).expect("pile").num_of_cards(), 1);
        let dest = table.pile(PileId::Tableau(4)).expect("pile");
        assert_eq!(
            dest.cards().iter().map(Card::id).collect::<Vec<_>>(),
            moved
        );
        assert!(dest
            .cards()
            .iter()
            .all(|card| card.containing_pile() == Some(PileId::Tableau(4))));
    }

    #[test]
    fn invalid_pile_index_is_rejected() {
        let table = Table::new();
        assert!(matches!(
            table.pile(PileId::Foundation(9)),
            Err(GameError::InvalidPile(PileId::Foundation(9)))
        ));
    }
}
