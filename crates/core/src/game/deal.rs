use super::*;
use crate::*;
use log::info;

impl Game {
    /// Shuffles a fresh deck and deals it out.
    pub fn new(config: GameConfig, events: &mut EventBus) -> Result<Self, GameError> {
        let mut rng = match config.seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        let deck = Deck::create_new_deck(&mut rng);
        let mut table = Table::new();
        deal_cards(&mut table, deck)?;
        info!("dealt new game with seed {}", rng.seed());
        events.push(Event::Dealt { seed: rng.seed() });
        Ok(Self {
            config,
            rng,
            table,
            drag: DragPhase::Idle,
            status: GameStatus::Playing,
        })
    }

    /// Starts from a prepared layout instead of a shuffled deal.
    pub fn with_table(config: GameConfig, table: Table) -> Self {
        let rng = match config.seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        let status = if table.foundation_count() == 52 {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        Self {
            config,
            rng,
            table,
            drag: DragPhase::Idle,
            status,
        }
    }
}

/// Tableau `i` gets `i + 1` cards with only the last one face up; the rest
/// of the deck goes to the stock face down.
fn deal_cards(table: &mut Table, deck: Deck) -> Result<(), GameError> {
    let mut cards = deck.into_iter();
    for (count, pile) in (1..).zip(PileId::tableaus()) {
        for dealt in 1..=count {
            let Some(mut card) = cards.next() else {
                return Ok(());
            };
            card.face_down = dealt != count;
            table.place(card, pile)?;
        }
    }
    for mut card in cards {
        card.face_down = true;
        table.place(card, PileId::Stock)?;
    }
    Ok(())
}
