use crate::{CardId, PileId};
use serde::{Deserialize, Serialize};

/// Output stream for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    Dealt {
        seed: u64,
    },
    CardMoved {
        card: CardId,
        from: PileId,
        to: PileId,
        /// Card it now rests on, `None` when the destination was empty.
        onto: Option<CardId>,
    },
    CardFlipped {
        card: CardId,
        face_up: bool,
    },
    StockRefilled {
        count: usize,
    },
    MoveRejected {
        card: CardId,
        origin: PileId,
    },
    GameWon,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}
