use klondike_core::{is_move_valid, Card, Pile, PileId, Rank, Suit};

fn pile_with(id: PileId, cards: &[(Suit, Rank)]) -> Pile {
    let mut pile = Pile::new(id);
    for &(suit, rank) in cards {
        pile.add_card(Card::standard(suit, rank).revealed());
    }
    pile
}

macro_rules! foundation_case {
    ($name:ident, [$($below:expr),*], $card:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let pile = pile_with(PileId::Foundation(0), &[$($below),*]);
            let (suit, rank) = $card;
            let card = Card::standard(suit, rank).revealed();
            assert_eq!(is_move_valid(&card, &pile), $expected);
        }
    };
}

macro_rules! tableau_case {
    ($name:ident, [$($below:expr),*], $card:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let pile = pile_with(PileId::Tableau(0), &[$($below),*]);
            let (suit, rank) = $card;
            let card = Card::standard(suit, rank).revealed();
            assert_eq!(is_move_valid(&card, &pile), $expected);
        }
    };
}

foundation_case!(foundation_empty_ace, [], (Suit::Hearts, Rank::Ace), true);
foundation_case!(foundation_empty_two, [], (Suit::Hearts, Rank::Two), false);
foundation_case!(foundation_empty_king, [], (Suit::Spades, Rank::King), false);
foundation_case!(
    foundation_same_suit_next,
    [(Suit::Hearts, Rank::Ace)],
    (Suit::Hearts, Rank::Two),
    true
);
foundation_case!(
    foundation_wrong_suit,
    [(Suit::Hearts, Rank::Ace)],
    (Suit::Spades, Rank::Two),
    false
);
foundation_case!(
    foundation_same_color_other_suit,
    [(Suit::Hearts, Rank::Ace)],
    (Suit::Diamonds, Rank::Two),
    false
);
foundation_case!(
    foundation_skips_rank,
    [(Suit::Clubs, Rank::Ace)],
    (Suit::Clubs, Rank::Three),
    false
);
foundation_case!(
    foundation_same_rank,
    [(Suit::Clubs, Rank::Ace), (Suit::Clubs, Rank::Two)],
    (Suit::Clubs, Rank::Two),
    false
);
foundation_case!(
    foundation_queen_to_king,
    [(Suit::Diamonds, Rank::Jack), (Suit::Diamonds, Rank::Queen)],
    (Suit::Diamonds, Rank::King),
    true
);
foundation_case!(
    foundation_descending,
    [(Suit::Diamonds, Rank::Three)],
    (Suit::Diamonds, Rank::Two),
    false
);

tableau_case!(tableau_empty_king, [], (Suit::Spades, Rank::King), true);
tableau_case!(tableau_empty_queen, [], (Suit::Hearts, Rank::Queen), false);
tableau_case!(tableau_empty_ace, [], (Suit::Hearts, Rank::Ace), false);
tableau_case!(
    tableau_red_on_black,
    [(Suit::Spades, Rank::Eight)],
    (Suit::Hearts, Rank::Seven),
    true
);
tableau_case!(
    tableau_black_on_red,
    [(Suit::Diamonds, Rank::Eight)],
    (Suit::Clubs, Rank::Seven),
    true
);
tableau_case!(
    tableau_red_on_red,
    [(Suit::Diamonds, Rank::Eight)],
    (Suit::Hearts, Rank::Seven),
    false
);
tableau_case!(
    tableau_black_on_black,
    [(Suit::Clubs, Rank::Eight)],
    (Suit::Spades, Rank::Seven),
    false
);
tableau_case!(
    tableau_ascending,
    [(Suit::Clubs, Rank::Eight)],
    (Suit::Hearts, Rank::Nine),
    false
);
tableau_case!(
    tableau_two_below,
    [(Suit::Clubs, Rank::Eight)],
    (Suit::Hearts, Rank::Six),
    false
);
tableau_case!(
    tableau_ace_on_two,
    [(Suit::Clubs, Rank::Two)],
    (Suit::Hearts, Rank::Ace),
    true
);
tableau_case!(
    tableau_king_on_occupied,
    [(Suit::Clubs, Rank::Two)],
    (Suit::Hearts, Rank::King),
    false
);
