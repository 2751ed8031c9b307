use super::*;
use crate::*;
use log::debug;

impl Game {
    /// Draws the top stock card onto the discard pile, or recycles the
    /// discard pile once the stock has run out.
    pub fn click_stock(&mut self, events: &mut EventBus) -> Result<Outcome, GameError> {
        self.drag = DragPhase::Idle;
        if !self.table.pile(PileId::Stock)?.is_empty() {
            return self.draw_from_stock(events);
        }
        if self.table.pile(PileId::Discard)?.is_empty() {
            return Ok(Outcome::Ignored);
        }
        self.refill_stock_from_discard(events)
    }

    pub fn draw_from_stock(&mut self, events: &mut EventBus) -> Result<Outcome, GameError> {
        let card = self.table.pile(PileId::Stock)?.top_card()?.id();
        let onto = self.table.pile(PileId::Discard)?.peek_top().map(Card::id);
        self.table.move_card(card, PileId::Discard)?;
        self.table.card_mut(card)?.face_down = false;
        debug!("placed {card} to the waste");
        events.push(Event::CardMoved {
            card,
            from: PileId::Stock,
            to: PileId::Discard,
            onto,
        });
        events.push(Event::CardFlipped {
            card,
            face_up: true,
        });
        Ok(Outcome::Drew(card))
    }

    /// Turns the discard pile over into the stock so cards come out again
    /// in the order they were first drawn. There is no limit on passes.
    pub fn refill_stock_from_discard(
        &mut self,
        events: &mut EventBus,
    ) -> Result<Outcome, GameError> {
        if !self.table.pile(PileId::Stock)?.is_empty() {
            return Err(GameError::StockNotEmpty);
        }
        let mut discarded = self.table.pile(PileId::Discard)?.cards().to_vec();
        discarded.reverse();
        let count = discarded.len();
        let stock = self.table.pile_mut(PileId::Stock)?;
        for mut card in discarded {
            card.face_down = true;
            stock.add_card(card);
        }
        self.table.pile_mut(PileId::Discard)?.clear();
        debug!("stock refilled from discard pile with {count} cards");
        events.push(Event::StockRefilled { count });
        Ok(Outcome::Refilled { count })
    }
}
