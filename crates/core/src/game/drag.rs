use super::moves::MoveScope;
use super::*;
use crate::*;
use log::debug;

impl Game {
    pub fn press(&mut self, card: CardId, x: f64, y: f64) -> Result<Outcome, GameError> {
        self.table.locate(card)?;
        self.drag = DragPhase::Pressed { card, x, y };
        Ok(Outcome::Pressed)
    }

    /// Picks up `card` and the cards above it, or updates the offset of a
    /// drag already in progress. Stock cards and face-down cards stay put.
    pub fn drag_to(&mut self, card: CardId, x: f64, y: f64) -> Result<Outcome, GameError> {
        if !self.can_pick_up(card)? {
            return Ok(Outcome::Ignored);
        }
        let start = match &self.drag {
            DragPhase::Pressed {
                card: pressed,
                x: pressed_x,
                y: pressed_y,
            } if *pressed == card => (*pressed_x, *pressed_y),
            DragPhase::Dragging {
                card: dragging,
                start,
                ..
            } if *dragging == card => *start,
            DragPhase::Idle | DragPhase::Pressed { .. } | DragPhase::Dragging { .. } => {
                return Err(GameError::NotPressed(card));
            }
        };
        let (origin, _) = self.table.locate(card)?;
        let group = self.table.tail_from(card)?;
        let cards = group.len();
        self.drag = DragPhase::Dragging {
            card,
            origin,
            group,
            start,
            offset: (x - start.0, y - start.1),
        };
        Ok(Outcome::Dragging { cards })
    }

    /// Drops the dragged group. A valid tableau under the card wins over a
    /// valid foundation; without either the group snaps back unchanged.
    pub fn release(
        &mut self,
        card: CardId,
        over: &[PileId],
        events: &mut EventBus,
    ) -> Result<Outcome, GameError> {
        let dragged = match &self.drag {
            DragPhase::Dragging {
                card, origin, group, ..
            } => Some((*card, *origin, group.len())),
            DragPhase::Idle | DragPhase::Pressed { .. } => None,
        };
        let Some((dragging, origin, group_len)) = dragged else {
            self.drag = DragPhase::Idle;
            return Ok(Outcome::Ignored);
        };
        if dragging != card {
            return Err(GameError::DragMismatch {
                dragging,
                released: card,
            });
        }
        for kind in [PileKind::Tableau, PileKind::Foundation] {
            if let Some(dest) = self.valid_intersecting_pile(card, group_len, origin, over, kind)? {
                return self.handle_valid_move(card, dest, MoveScope::Group, events);
            }
        }
        debug!("{card} snaps back to {origin}");
        self.drag = DragPhase::Idle;
        events.push(Event::MoveRejected { card, origin });
        Ok(Outcome::Rejected)
    }

    pub fn cancel_drag(&mut self) {
        self.drag = DragPhase::Idle;
    }

    /// Last pile of `kind`, in table order, that the card overlaps and may
    /// legally land on.
    fn valid_intersecting_pile(
        &self,
        card: CardId,
        group_len: usize,
        origin: PileId,
        over: &[PileId],
        kind: PileKind,
    ) -> Result<Option<PileId>, GameError> {
        let mut result = None;
        for pile in self.table.piles_of(kind).map(Pile::id) {
            if over.contains(&pile) && self.is_drop_allowed(card, group_len, origin, pile)? {
                result = Some(pile);
            }
        }
        Ok(result)
    }
}
