//! Move legality predicates.
//!
//! Pure functions over borrowed cards and piles. They never change state;
//! a `false` answer means the caller performs no transition at all.

use crate::core::{Card, Pile, Rank};

/// Can `card` be placed on a tableau column?
///
/// - Empty column: only a King.
/// - Otherwise the column's top card must be face-up, of the opposite color,
///   and exactly one rank above `card`. Ranks do not wrap.
#[must_use]
pub fn is_valid_tableau_move(
    card: &Card,
    target_top: Option<&Card>,
    target_is_empty: bool,
) -> bool {
    if target_is_empty {
        return card.rank == Rank::King;
    }

    match target_top {
        Some(top) => {
            top.face_up
                && top.color() != card.color()
                && top.rank.prev() == Some(card.rank)
        }
        None => false,
    }
}

/// Can `card` be placed on `foundation`?
///
/// - Empty foundation: only an Ace.
/// - Otherwise same suit as the top card and exactly one rank above it.
#[must_use]
pub fn is_valid_foundation_move(card: &Card, foundation: &Pile) -> bool {
    match foundation.last() {
        None => card.rank == Rank::Ace,
        Some(top) => top.suit == card.suit && top.rank.next() == Some(card.rank),
    }
}

/// Can `card` be placed on the tableau column `column`?
#[must_use]
pub fn accepts_on_column(card: &Card, column: &Pile) -> bool {
    is_valid_tableau_move(card, column.last(), column.is_empty())
}

/// First foundation index that accepts `card`.
#[must_use]
pub fn find_foundation_for(card: &Card, foundations: &[Pile]) -> Option<usize> {
    foundations
        .iter()
        .position(|f| is_valid_foundation_move(card, f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Suit;
    use im::vector;

    fn up(suit: Suit, rank: Rank) -> Card {
        Card::revealed(suit, rank)
    }

    #[test]
    fn test_empty_column_takes_only_kings() {
        assert!(!is_valid_tableau_move(&up(Suit::Hearts, Rank::Seven), None, true));
        assert!(is_valid_tableau_move(&up(Suit::Clubs, Rank::King), None, true));
    }

    #[test]
    fn test_alternating_color_descending() {
        let red_queen = up(Suit::Hearts, Rank::Queen);

        assert!(is_valid_tableau_move(&up(Suit::Spades, Rank::Jack), Some(&red_queen), false));
        assert!(is_valid_tableau_move(&up(Suit::Clubs, Rank::Jack), Some(&red_queen), false));
        assert!(!is_valid_tableau_move(&up(Suit::Diamonds, Rank::Jack), Some(&red_queen), false));
        assert!(!is_valid_tableau_move(&up(Suit::Spades, Rank::Ten), Some(&red_queen), false));
        assert!(!is_valid_tableau_move(&up(Suit::Spades, Rank::King), Some(&red_queen), false));
    }

    #[test]
    fn test_face_down_target_rejected() {
        let hidden = Card::new(Suit::Hearts, Rank::Queen);
        assert!(!is_valid_tableau_move(&up(Suit::Spades, Rank::Jack), Some(&hidden), false));
    }

    #[test]
    fn test_missing_top_on_non_empty_target() {
        assert!(!is_valid_tableau_move(&up(Suit::Spades, Rank::Jack), None, false));
    }

    #[test]
    fn test_no_wraparound() {
        let two = up(Suit::Hearts, Rank::Two);
        let ace = up(Suit::Hearts, Rank::Ace);
        assert!(!is_valid_tableau_move(&up(Suit::Spades, Rank::King), Some(&ace), false));
        assert!(is_valid_tableau_move(&up(Suit::Spades, Rank::Ace), Some(&two), false));
    }

    #[test]
    fn test_foundation_rules() {
        let empty = Pile::new();
        assert!(is_valid_foundation_move(&up(Suit::Spades, Rank::Ace), &empty));
        assert!(!is_valid_foundation_move(&up(Suit::Spades, Rank::Two), &empty));

        let spades = vector![up(Suit::Spades, Rank::Ace), up(Suit::Spades, Rank::Two)];
        assert!(is_valid_foundation_move(&up(Suit::Spades, Rank::Three), &spades));
        assert!(!is_valid_foundation_move(&up(Suit::Clubs, Rank::Three), &spades));
        assert!(!is_valid_foundation_move(&up(Suit::Spades, Rank::Four), &spades));
        assert!(!is_valid_foundation_move(&up(Suit::Spades, Rank::Ace), &spades));
    }

    #[test]
    fn test_find_foundation_for() {
        let foundations = [
            vector![up(Suit::Hearts, Rank::Ace)],
            Pile::new(),
            Pile::new(),
            Pile::new(),
        ];

        assert_eq!(find_foundation_for(&up(Suit::Hearts, Rank::Two), &foundations), Some(0));
        assert_eq!(find_foundation_for(&up(Suit::Clubs, Rank::Ace), &foundations), Some(1));
        assert_eq!(find_foundation_for(&up(Suit::Clubs, Rank::Two), &foundations), None);
    }
}
