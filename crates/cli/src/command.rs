use klondike_core::{CardId, PileId, Rank, Suit, FOUNDATION_COUNT, TABLEAU_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Empty,
    Help,
    Board,
    Stock,
    Move { card: CardId, pile: PileId },
    Auto { card: CardId },
    Flip { pile: PileId },
    NewGame,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Ok(Command::Empty);
    };
    let args: Vec<&str> = parts.collect();
    let command = match head.to_ascii_lowercase().as_str() {
        "h" | "help" | "?" => Command::Help,
        "b" | "board" => Command::Board,
        "s" | "stock" | "draw" => Command::Stock,
        "m" | "move" => {
            let [card, pile] = args[..] else {
                return Err("usage: move <card> <pile>".to_string());
            };
            Command::Move {
                card: parse_card(card)?,
                pile: parse_pile(pile)?,
            }
        }
        "a" | "auto" => {
            let [card] = args[..] else {
                return Err("usage: auto <card>".to_string());
            };
            Command::Auto {
                card: parse_card(card)?,
            }
        }
        "f" | "flip" => {
            let [pile] = args[..] else {
                return Err("usage: flip <pile>".to_string());
            };
            Command::Flip {
                pile: parse_pile(pile)?,
            }
        }
        "n" | "new" => Command::NewGame,
        "q" | "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command: {other}")),
    };
    Ok(command)
}

/// Rank then suit, e.g. `AS`, `TD`, `10d`, `qh`.
pub fn parse_card(token: &str) -> Result<CardId, String> {
    let upper = token.to_ascii_uppercase();
    let Some(suit_char) = upper.chars().last() else {
        return Err("missing card".to_string());
    };
    let suit = match suit_char {
        'S' => Suit::Spades,
        'H' => Suit::Hearts,
        'C' => Suit::Clubs,
        'D' => Suit::Diamonds,
        _ => return Err(format!("invalid suit in {token}")),
    };
    let rank = match &upper[..upper.len() - 1] {
        "A" => Rank::Ace,
        "T" | "10" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        digits => digits
            .parse::<u8>()
            .ok()
            .filter(|value| (2..=9).contains(value))
            .and_then(Rank::from_value)
            .ok_or_else(|| format!("invalid rank in {token}"))?,
    };
    Ok(CardId::new(suit, rank))
}

/// `s`, `w`, `f1`..`f4`, `t1`..`t7`.
pub fn parse_pile(token: &str) -> Result<PileId, String> {
    let lower = token.to_ascii_lowercase();
    match lower.as_str() {
        "s" | "stock" => return Ok(PileId::Stock),
        "w" | "waste" | "discard" => return Ok(PileId::Discard),
        _ => {}
    }
    let mut chars = lower.chars();
    let prefix = chars.next();
    let number = chars
        .as_str()
        .parse::<u8>()
        .map_err(|_| format!("invalid pile: {token}"))?;
    match prefix {
        Some('f') if (1..=FOUNDATION_COUNT).contains(&number) => {
            Ok(PileId::Foundation(number - 1))
        }
        Some('t') if (1..=TABLEAU_COUNT).contains(&number) => Ok(PileId::Tableau(number - 1)),
        _ => Err(format!("invalid pile: {token}")),
    }
}

/// Inverse of `parse_pile`.
pub fn pile_label(pile: PileId) -> String {
    match pile {
        PileId::Stock => "s".to_string(),
        PileId::Discard => "w".to_string(),
        PileId::Foundation(index) => format!("f{}", index + 1),
        PileId::Tableau(index) => format!("t{}", index + 1),
    }
}
