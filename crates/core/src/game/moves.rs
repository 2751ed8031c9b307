use super::*;
use crate::*;
use log::{debug, info};

impl Game {
    /// Moves `card` and everything stacked on it onto `dest` if the rules
    /// allow it. Returns whether the move happened.
    pub fn try_move(
        &mut self,
        card: CardId,
        dest: PileId,
        events: &mut EventBus,
    ) -> Result<bool, GameError> {
        let (origin, _) = self.table.locate(card)?;
        let group = self.table.tail_from(card)?;
        if !self.can_pick_up(card)? || !self.is_drop_allowed(card, group.len(), origin, dest)? {
            return Ok(false);
        }
        self.handle_valid_move(card, dest, MoveScope::Group, events)?;
        Ok(true)
    }

    /// Double-click: send a face-up card to the first foundation that takes
    /// it, scanning foundations in order. Only the clicked card moves, even
    /// when other cards sit on it.
    pub fn auto_move(&mut self, card: CardId, events: &mut EventBus) -> Result<Outcome, GameError> {
        let (origin, _) = self.table.locate(card)?;
        let face_up = self.table.card(card)?.is_face_up();
        if matches!(origin.kind(), PileKind::Foundation | PileKind::Stock) || !face_up {
            return Ok(Outcome::Ignored);
        }
        for dest in PileId::foundations() {
            if rules::is_move_valid(self.table.card(card)?, self.table.pile(dest)?) {
                return self.handle_valid_move(card, dest, MoveScope::Single, events);
            }
        }
        Ok(Outcome::Ignored)
    }

    /// Turns up a face-down card sitting on top of a tableau pile.
    pub fn flip_top(&mut self, pile: PileId, events: &mut EventBus) -> Result<Outcome, GameError> {
        if pile.kind() != PileKind::Tableau {
            return Ok(Outcome::Ignored);
        }
        let Some(top) = self.table.pile(pile)?.peek_top() else {
            return Ok(Outcome::Ignored);
        };
        if top.is_face_up() {
            return Ok(Outcome::Ignored);
        }
        let card = top.id();
        self.table.card_mut(card)?.flip();
        debug!("flipped {card} on {pile}");
        events.push(Event::CardFlipped {
            card,
            face_up: true,
        });
        Ok(Outcome::Flipped(card))
    }

    /// Face-up cards outside the stock can be picked up.
    pub(super) fn can_pick_up(&self, card: CardId) -> Result<bool, GameError> {
        let (origin, _) = self.table.locate(card)?;
        Ok(origin != PileId::Stock && self.table.card(card)?.is_face_up())
    }

    /// Drop check against the lead card of a group of `group_len` cards.
    pub(super) fn is_drop_allowed(
        &self,
        card: CardId,
        group_len: usize,
        origin: PileId,
        dest: PileId,
    ) -> Result<bool, GameError> {
        if dest == origin
            || !rules::accepts_group(dest.kind(), group_len, self.config.foundation_drop)
        {
            return Ok(false);
        }
        Ok(rules::is_move_valid(
            self.table.card(card)?,
            self.table.pile(dest)?,
        ))
    }

    /// Carries out an already validated move of `lead` (and, for a group,
    /// the cards above it), then clears the drag and checks for a win.
    pub(super) fn handle_valid_move(
        &mut self,
        lead: CardId,
        dest: PileId,
        scope: MoveScope,
        events: &mut EventBus,
    ) -> Result<Outcome, GameError> {
        let (origin, _) = self.table.locate(lead)?;
        let mut onto = self.table.pile(dest)?.peek_top().map(Card::id);
        match onto {
            Some(below) => debug!("placed {lead} to {below}"),
            None if dest.kind() == PileKind::Foundation => {
                debug!("placed {lead} to the foundation")
            }
            None => debug!("placed {lead} to a new pile"),
        }
        let moved = match scope {
            MoveScope::Group => self.table.move_group(lead, dest)?,
            MoveScope::Single => {
                self.table.move_card(lead, dest)?;
                vec![lead]
            }
        };
        for &card in &moved {
            events.push(Event::CardMoved {
                card,
                from: origin,
                to: dest,
                onto,
            });
            onto = Some(card);
        }
        self.drag = DragPhase::Idle;
        if self.config.auto_reveal {
            self.flip_top(origin, events)?;
        }
        self.check_win(events);
        Ok(Outcome::Moved {
            to: dest,
            cards: moved.len(),
        })
    }

    /// Re-derives the status after every move. `GameWon` fires on each
    /// transition into the won state, so taking a card back off a
    /// foundation and returning it wins again.
    fn check_win(&mut self, events: &mut EventBus) {
        let was_won = self.status == GameStatus::Won;
        if self.is_game_won() {
            self.status = GameStatus::Won;
            if !was_won {
                info!("game won");
                events.push(Event::GameWon);
            }
        } else {
            if was_won {
                debug!("game no longer won");
            }
            self.status = GameStatus::Playing;
        }
    }
}

/// How much of the lead card's pile a move carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MoveScope {
    /// The lead card and every card stacked above it.
    Group,
    /// Only the lead card.
    Single,
}
