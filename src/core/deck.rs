//! The standard 52-card deck.

use super::card::{Card, Rank, Suit};
use super::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Build an ordered deck, every card face-down.
///
/// Order is suit-major (`Suit::ALL`), Ace to King within each suit.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
        .collect()
}

/// Build a deck and shuffle it with `rng`.
#[must_use]
pub fn shuffled_deck(rng: &mut GameRng) -> Vec<Card> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_deck_size_and_uniqueness() {
        let deck = standard_deck();
        assert_eq!(deck.len(), DECK_SIZE);

        let unique: FxHashSet<_> = deck.iter().map(Card::key).collect();
        assert_eq!(unique.len(), DECK_SIZE);
    }

    #[test]
    fn test_deck_is_face_down() {
        assert!(standard_deck().iter().all(|c| !c.face_up));
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let a = shuffled_deck(&mut GameRng::new(99));
        let b = shuffled_deck(&mut GameRng::new(99));
        let c = shuffled_deck(&mut GameRng::new(100));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut shuffled = shuffled_deck(&mut GameRng::new(5));
        let mut ordered = standard_deck();
        shuffled.sort_by_key(Card::key);
        ordered.sort_by_key(Card::key);
        assert_eq!(shuffled, ordered);
    }
}
