//! Klondike game state and move rules. Keep this crate free of IO and
//! platform concerns; presentation talks to it through `Input` and `Event`.

pub mod cards;
pub mod config;
pub mod deck;
pub mod events;
pub mod game;
pub mod input;
pub mod pile;
pub mod rng;
pub mod rules;
pub mod state;
pub mod table;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use events::*;
pub use game::*;
pub use input::*;
pub use pile::*;
pub use rng::*;
pub use rules::*;
pub use state::*;
pub use table::*;
