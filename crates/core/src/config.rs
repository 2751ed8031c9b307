use serde::{Deserialize, Serialize};

/// What a valid drop on a foundation carries when more than one card is
/// being dragged.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FoundationDrop {
    /// Only a lone card may land on a foundation.
    #[default]
    SingleCard,
    /// The lead card is checked and the whole group follows it.
    WholeGroup,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed shuffle seed. `None` draws a fresh one per game.
    pub seed: Option<u64>,
    pub foundation_drop: FoundationDrop,
    /// Turn a face-down card up as soon as a move exposes it on a tableau.
    pub auto_reveal: bool,
}

impl GameConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
