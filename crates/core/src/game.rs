use crate::{Card, CardId, DragPhase, GameConfig, GameStatus, Pile, PileId, RngState, Table};
use thiserror::Error;

mod deal;
mod dispatch;
mod drag;
mod moves;
mod stock;

/// Caller or engine bugs. Illegal moves are not errors; they surface as
/// `Outcome::Rejected` and a `MoveRejected` event.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("pile {0} is empty")]
    EmptyPile(PileId),
    #[error("no such pile: {0:?}")]
    InvalidPile(PileId),
    #[error("card {0} is not on the table")]
    UnknownCard(CardId),
    #[error("card {0} has no containing pile")]
    CardNotInPile(CardId),
    #[error("stock still holds cards")]
    StockNotEmpty,
    #[error("drag of {0} without a matching press")]
    NotPressed(CardId),
    #[error("release of {released} while dragging {dragging}")]
    DragMismatch { dragging: CardId, released: CardId },
}

/// Owns every pile and is the only thing that mutates them.
#[derive(Debug)]
pub struct Game {
    pub config: GameConfig,
    rng: RngState,
    table: Table,
    drag: DragPhase,
    status: GameStatus,
}

impl Game {
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn piles(&self) -> &[Pile] {
        self.table.piles()
    }

    pub fn pile(&self, id: PileId) -> Result<&Pile, GameError> {
        self.table.pile(id)
    }

    pub fn card(&self, id: CardId) -> Result<&Card, GameError> {
        self.table.card(id)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn drag_phase(&self) -> &DragPhase {
        &self.drag
    }

    pub fn drag_group(&self) -> &[CardId] {
        self.drag.group()
    }

    /// Pointer travel since the press, for drawing the dragged cards.
    pub fn drag_offset(&self) -> Option<(f64, f64)> {
        match &self.drag {
            DragPhase::Dragging { offset, .. } => Some(*offset),
            DragPhase::Idle | DragPhase::Pressed { .. } => None,
        }
    }

    /// All 52 cards sit on the foundations.
    pub fn is_game_won(&self) -> bool {
        self.table.foundation_count() == 52
    }
}
