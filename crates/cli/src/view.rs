use crate::command::pile_label;
use klondike_core::{Card, Event, Game, PileId, PileKind};
use std::fmt::Write;

pub fn format_card(card: &Card) -> String {
    if card.face_down {
        return "??".to_string();
    }
    card.to_string()
}

pub fn render_board(game: &Game) -> String {
    let mut out = String::new();
    for pile in game.piles() {
        let label = pile_label(pile.id());
        let cards = match pile.kind() {
            PileKind::Stock => format!("[{}]", pile.num_of_cards()),
            PileKind::Discard | PileKind::Foundation => pile
                .peek_top()
                .map(format_card)
                .unwrap_or_else(|| "--".to_string()),
            PileKind::Tableau => {
                if pile.is_empty() {
                    "--".to_string()
                } else {
                    pile.cards()
                        .iter()
                        .map(format_card)
                        .collect::<Vec<_>>()
                        .join(" ")
                }
            }
        };
        let _ = writeln!(out, "{label:>2}: {cards}");
    }
    out
}

pub fn format_event(event: &Event) -> String {
    match event {
        Event::Dealt { seed } => format!("new game dealt (seed {seed})"),
        Event::CardMoved {
            card,
            to,
            onto: Some(below),
            ..
        } if *to != PileId::Discard => format!("placed {card} to {below}"),
        Event::CardMoved { card, to, .. } => match to.kind() {
            PileKind::Discard => format!("placed {card} to the waste"),
            PileKind::Foundation => format!("placed {card} to the foundation"),
            PileKind::Tableau => format!("placed {card} to a new pile"),
            PileKind::Stock => format!("placed {card} to the stock"),
        },
        Event::CardFlipped { card, face_up } => {
            if *face_up {
                format!("turned up {card}")
            } else {
                format!("turned down {card}")
            }
        }
        Event::StockRefilled { count } => {
            format!("stock refilled from discard pile ({count} cards)")
        }
        Event::MoveRejected { card, origin } => {
            format!("{card} snaps back to {}", pile_label(*origin))
        }
        Event::GameWon => "congratulations, you have won!".to_string(),
    }
}
