//! Move legality. Everything here is a pure predicate over the table.

use crate::{Card, FoundationDrop, Pile, PileKind, Rank};

/// Whether `card` may be placed on top of `dest`.
///
/// Foundations build up by suit from the Ace; tableaus build down in
/// alternating colors from the King. Stock and discard never accept a drop.
/// Callers reject a destination equal to the card's own pile before asking.
pub fn is_move_valid(card: &Card, dest: &Pile) -> bool {
    match dest.kind() {
        PileKind::Foundation => match dest.peek_top() {
            None => card.rank == Rank::Ace,
            Some(top) => {
                Card::is_same_suit(card, top) && card.rank.value() == top.rank.value() + 1
            }
        },
        PileKind::Tableau => match dest.peek_top() {
            None => card.rank == Rank::King,
            Some(top) => {
                Card::is_opposite_color(card, top) && card.rank.value() + 1 == top.rank.value()
            }
        },
        PileKind::Stock | PileKind::Discard => false,
    }
}

/// Whether a group of `group_len` cards may land on a pile of `kind` at all,
/// before looking at the lead card.
pub fn accepts_group(kind: PileKind, group_len: usize, policy: FoundationDrop) -> bool {
    match kind {
        PileKind::Tableau => group_len > 0,
        PileKind::Foundation => match policy {
            FoundationDrop::SingleCard => group_len == 1,
            FoundationDrop::WholeGroup => group_len > 0,
        },
        PileKind::Stock | PileKind::Discard => false,
    }
}
