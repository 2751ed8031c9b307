use crate::{CardId, PileId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
}

/// Progress of one pointer interaction: `Idle -> Pressed -> Dragging -> Idle`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Pressed {
        card: CardId,
        x: f64,
        y: f64,
    },
    Dragging {
        card: CardId,
        origin: PileId,
        /// Lead card first, then everything stacked on it.
        group: Vec<CardId>,
        start: (f64, f64),
        offset: (f64, f64),
    },
}

impl DragPhase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn group(&self) -> &[CardId] {
        match self {
            Self::Dragging { group, .. } => group.as_slice(),
            Self::Idle | Self::Pressed { .. } => &[],
        }
    }
}
