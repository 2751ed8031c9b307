use crate::{CardId, PileId};
use serde::{Deserialize, Serialize};

/// Pointer intent delivered by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Input {
    Press { card: CardId, x: f64, y: f64 },
    Drag { card: CardId, x: f64, y: f64 },
    /// `over` lists the piles the dragged card overlaps on screen.
    Release { card: CardId, over: Vec<PileId> },
    Click { card: CardId, count: u8 },
    /// Click on the stock pile itself, which matters once it is empty.
    ClickStock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Press,
    Drag,
    Release,
    Click,
}

impl Input {
    pub fn kind(&self) -> InputKind {
        match self {
            Self::Press { .. } => InputKind::Press,
            Self::Drag { .. } => InputKind::Drag,
            Self::Release { .. } => InputKind::Release,
            Self::Click { .. } | Self::ClickStock => InputKind::Click,
        }
    }

    pub fn card(&self) -> Option<CardId> {
        match self {
            Self::Press { card, .. }
            | Self::Drag { card, .. }
            | Self::Release { card, .. }
            | Self::Click { card, .. } => Some(*card),
            Self::ClickStock => None,
        }
    }
}

/// What an input ended up doing to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Pressed,
    Dragging { cards: usize },
    Drew(CardId),
    Refilled { count: usize },
    Flipped(CardId),
    Moved { to: PileId, cards: usize },
    Rejected,
}
