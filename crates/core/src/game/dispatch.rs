use super::*;
use crate::*;

type Handler = fn(&mut Game, Input, &mut EventBus) -> Result<Outcome, GameError>;

/// Behaviour per (pile of the card, input kind). Pairs not listed are
/// ignored: stock cards never drag, foundation cards never auto-move.
const DISPATCH: &[(PileKind, InputKind, Handler)] = &[
    (PileKind::Stock, InputKind::Press, on_press),
    (PileKind::Stock, InputKind::Release, on_release),
    (PileKind::Stock, InputKind::Click, on_stock_click),
    (PileKind::Discard, InputKind::Press, on_press),
    (PileKind::Discard, InputKind::Drag, on_drag),
    (PileKind::Discard, InputKind::Release, on_release),
    (PileKind::Discard, InputKind::Click, on_card_click),
    (PileKind::Foundation, InputKind::Press, on_press),
    (PileKind::Foundation, InputKind::Drag, on_drag),
    (PileKind::Foundation, InputKind::Release, on_release),
    (PileKind::Tableau, InputKind::Press, on_press),
    (PileKind::Tableau, InputKind::Drag, on_drag),
    (PileKind::Tableau, InputKind::Release, on_release),
    (PileKind::Tableau, InputKind::Click, on_card_click),
];

impl Game {
    /// Single entry point for presentation input.
    pub fn handle(&mut self, input: Input, events: &mut EventBus) -> Result<Outcome, GameError> {
        let pile_kind = match input.card() {
            Some(card) => self.table.locate(card)?.0.kind(),
            None => PileKind::Stock,
        };
        let input_kind = input.kind();
        let handler = DISPATCH
            .iter()
            .find(|(pile, kind, _)| *pile == pile_kind && *kind == input_kind)
            .map(|(_, _, handler)| *handler);
        match handler {
            Some(handler) => handler(self, input, events),
            None => Ok(Outcome::Ignored),
        }
    }
}

fn on_press(game: &mut Game, input: Input, _events: &mut EventBus) -> Result<Outcome, GameError> {
    match input {
        Input::Press { card, x, y } => game.press(card, x, y),
        _ => Ok(Outcome::Ignored),
    }
}

fn on_drag(game: &mut Game, input: Input, _events: &mut EventBus) -> Result<Outcome, GameError> {
    match input {
        Input::Drag { card, x, y } => game.drag_to(card, x, y),
        _ => Ok(Outcome::Ignored),
    }
}

fn on_release(game: &mut Game, input: Input, events: &mut EventBus) -> Result<Outcome, GameError> {
    match input {
        Input::Release { card, over } => game.release(card, &over, events),
        _ => Ok(Outcome::Ignored),
    }
}

fn on_stock_click(
    game: &mut Game,
    _input: Input,
    events: &mut EventBus,
) -> Result<Outcome, GameError> {
    game.click_stock(events)
}

fn on_card_click(
    game: &mut Game,
    input: Input,
    events: &mut EventBus,
) -> Result<Outcome, GameError> {
    let Input::Click { card, count } = input else {
        return Ok(Outcome::Ignored);
    };
    let (pile, _) = game.table.locate(card)?;
    let face_up = game.table.card(card)?.is_face_up();
    if !face_up && game.table.pile(pile)?.is_top(card) {
        return game.flip_top(pile, events);
    }
    if face_up && count == 2 {
        return game.auto_move(card, events);
    }
    Ok(Outcome::Ignored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(suit: Suit, rank: Rank) -> CardId {
        CardId::new(suit, rank)
    }

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::standard(suit, rank).revealed()
    }

    #[test]
    fn clicking_any_stock_card_draws_the_top() {
        let mut table = Table::new();
        table
            .place(Card::standard(Suit::Clubs, Rank::Five), PileId::Stock)
            .expect("place");
        table
            .place(Card::standard(Suit::Clubs, Rank::Six), PileId::Stock)
            .expect("place");
        let mut game = Game::with_table(GameConfig::default(), table);
        let mut events = EventBus::default();
        let outcome = game
            .handle(
                Input::Click {
                    card: id(Suit::Clubs, Rank::Five),
                    count: 1,
                },
                &mut events,
            )
            .expect("click");
        assert_eq!(outcome, Outcome::Drew(id(Suit::Clubs, Rank::Six)));
    }

    #[test]
    fn click_on_empty_stock_refills() {
        let mut table = Table::new();
        table
            .place(up(Suit::Clubs, Rank::Five), PileId::Discard)
            .expect("place");
        let mut game = Game::with_table(GameConfig::default(), table);
        let mut events = EventBus::default();
        assert_eq!(
            game.handle(Input::ClickStock, &mut events),
            Ok(Outcome::Refilled { count: 1 })
        );
    }

    #[test]
    fn stock_cards_do_not_drag() {
        let mut table = Table::new();
        table
            .place(Card::standard(Suit::Clubs, Rank::Five), PileId::Stock)
            .expect("place");
        let mut game = Game::with_table(GameConfig::default(), table);
        let mut events = EventBus::default();
        let card = id(Suit::Clubs, Rank::Five);
        game.handle(Input::Press { card, x: 0.0, y: 0.0 }, &mut events)
            .expect("press");
        assert_eq!(
            game.handle(Input::Drag { card, x: 4.0, y: 4.0 }, &mut events),
            Ok(Outcome::Ignored)
        );
        assert_eq!(
            game.handle(
                Input::Release {
                    card,
                    over: vec![PileId::Tableau(0)]
                },
                &mut events
            ),
            Ok(Outcome::Ignored)
        );
    }

    #[test]
    fn single_click_flips_face_down_tableau_top() {
        let mut table = Table::new();
        table
            .place(Card::standard(Suit::Hearts, Rank::Four), PileId::Tableau(2))
            .expect("place");
        let mut game = Game::with_table(GameConfig::default(), table);
        let mut events = EventBus::default();
        let card = id(Suit::Hearts, Rank::Four);
        assert_eq!(
            game.handle(Input::Click { card, count: 1 }, &mut events),
            Ok(Outcome::Flipped(card))
        );
        assert!(game.card(card).expect("card").is_face_up());
    }

    #[test]
    fn double_click_on_foundation_card_is_ignored() {
        let mut table = Table::new();
        table
            .place(up(Suit::Hearts, Rank::Ace), PileId::Foundation(0))
            .expect("place");
        let mut game = Game::with_table(GameConfig::default(), table);
        let mut events = EventBus::default();
        assert_eq!(
            game.handle(
                Input::Click {
                    card: id(Suit::Hearts, Rank::Ace),
                    count: 2
                },
                &mut events
            ),
            Ok(Outcome::Ignored)
        );
    }

    #[test]
    fn unknown_card_is_an_error() {
        let mut game = Game::with_table(GameConfig::default(), Table::new());
        let mut events = EventBus::default();
        let card = id(Suit::Spades, Rank::Ace);
        assert_eq!(
            game.handle(Input::Click { card, count: 2 }, &mut events),
            Err(GameError::UnknownCard(card))
        );
    }
}
