//! Game state: the thirteen piles plus move, score and time counters.
//!
//! `GameState` is a plain value. Transitions in `crate::moves` take a state
//! by reference and return a new one, and the session's undo history stores
//! whole states. All piles are `im::Vector`, so cloning a state is O(1).

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::deck::{shuffled_deck, DECK_SIZE};
use super::pile::{CardRef, Pile, PileId, FOUNDATION_COUNT, TABLEAU_COLUMNS};
use super::rng::GameRng;

/// Complete Klondike position.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Face-down draw pile.
    pub stock: Pile,

    /// Face-up cards drawn from the stock.
    pub waste: Pile,

    /// Four ascending same-suit piles.
    pub foundations: [Pile; FOUNDATION_COUNT],

    /// Seven cascading columns.
    pub tableau: [Pile; TABLEAU_COLUMNS],

    /// Committed moves so far.
    pub move_count: u32,

    /// Final score. Zero until the game is won.
    pub score: u32,

    /// Seconds of unpaused play.
    pub elapsed_secs: u64,
}

impl GameState {
    /// Create a state with every pile empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Shuffle a fresh deck with `rng` and deal it.
    #[must_use]
    pub fn deal(rng: &mut GameRng) -> Self {
        Self::from_deck(shuffled_deck(rng))
    }

    /// Deal a deck in its given order.
    ///
    /// Cards are taken from the end of `deck`. Column `i` receives `i + 1`
    /// cards with only the last one face-up; the remainder becomes the stock,
    /// face-down, with the last remaining card on top.
    #[must_use]
    pub fn from_deck(mut deck: Vec<Card>) -> Self {
        let mut state = Self::empty();

        for (col, column) in state.tableau.iter_mut().enumerate() {
            for row in 0..=col {
                if let Some(card) = deck.pop() {
                    column.push_back(card.with_face_up(row == col));
                }
            }
        }

        state.stock = deck.into_iter().map(|c| c.with_face_up(false)).collect();
        state
    }

    /// Get a pile by id. `None` for out-of-range indices.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        match id {
            PileId::Stock => Some(&self.stock),
            PileId::Waste => Some(&self.waste),
            PileId::Foundation(i) => self.foundations.get(usize::from(i)),
            PileId::Tableau(i) => self.tableau.get(usize::from(i)),
        }
    }

    /// Get a pile mutably by id. `None` for out-of-range indices.
    pub fn pile_mut(&mut self, id: PileId) -> Option<&mut Pile> {
        match id {
            PileId::Stock => Some(&mut self.stock),
            PileId::Waste => Some(&mut self.waste),
            PileId::Foundation(i) => self.foundations.get_mut(usize::from(i)),
            PileId::Tableau(i) => self.tableau.get_mut(usize::from(i)),
        }
    }

    /// Top card of a pile.
    #[must_use]
    pub fn top(&self, id: PileId) -> Option<&Card> {
        self.pile(id)?.last()
    }

    /// Card at a location.
    #[must_use]
    pub fn card(&self, at: CardRef) -> Option<&Card> {
        self.pile(at.pile)?.get(at.index)
    }

    /// Whether `at` points at the top card of its pile.
    #[must_use]
    pub fn is_top(&self, at: CardRef) -> bool {
        self.pile(at.pile)
            .map_or(false, |p| !p.is_empty() && at.index == p.len() - 1)
    }

    /// Total cards on the foundations.
    #[must_use]
    pub fn foundation_card_count(&self) -> usize {
        self.foundations.iter().map(Pile::len).sum()
    }

    /// Iterate over every card in every pile.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.iter().flat_map(|p| p.iter()))
            .chain(self.tableau.iter().flat_map(|p| p.iter()))
    }

    /// Whether the piles hold exactly one standard deck.
    ///
    /// No card may be duplicated or missing across any transition.
    #[must_use]
    pub fn is_complete_deck(&self) -> bool {
        let mut seen = FxHashSet::default();
        let mut total = 0;
        for card in self.cards() {
            total += 1;
            if !seen.insert(card.key()) {
                return false;
            }
        }
        total == DECK_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};
    use crate::core::deck::standard_deck;

    #[test]
    fn test_deal_layout() {
        let state = GameState::deal(&mut GameRng::new(42));

        for (i, column) in state.tableau.iter().enumerate() {
            assert_eq!(column.len(), i + 1);
            for (row, card) in column.iter().enumerate() {
                assert_eq!(card.face_up, row == i, "column {} row {}", i, row);
            }
        }

        assert_eq!(state.stock.len(), 52 - 28);
        assert!(state.stock.iter().all(|c| !c.face_up));
        assert!(state.waste.is_empty());
        assert!(state.foundations.iter().all(Pile::is_empty));
        assert!(state.is_complete_deck());
    }

    #[test]
    fn test_from_deck_takes_from_end() {
        let deck = standard_deck();
        let last = *deck.last().unwrap();
        let state = GameState::from_deck(deck);

        // First card popped lands alone in column 0.
        assert_eq!(state.tableau[0][0].key(), last.key());
        assert!(state.tableau[0][0].face_up);
    }

    #[test]
    fn test_deal_is_deterministic() {
        let a = GameState::deal(&mut GameRng::new(3));
        let b = GameState::deal(&mut GameRng::new(3));
        assert_eq!(a, b);
    }

    #[test]
    fn test_pile_lookup() {
        let mut state = GameState::empty();
        state.tableau[2].push_back(Card::revealed(Suit::Hearts, Rank::Nine));

        let nine = Card::new(Suit::Hearts, Rank::Nine).key();
        assert_eq!(state.top(PileId::Tableau(2)).map(Card::key), Some(nine));
        assert!(state.pile(PileId::Tableau(9)).is_none());
        assert!(state.is_top(CardRef::new(PileId::Tableau(2), 0)));
        assert!(!state.is_top(CardRef::new(PileId::Tableau(2), 1)));
        assert!(!state.is_top(CardRef::new(PileId::Waste, 0)));
    }

    #[test]
    fn test_invariant_detects_duplicates_and_losses() {
        let mut state = GameState::deal(&mut GameRng::new(1));
        assert!(state.is_complete_deck());

        let dup = *state.stock.last().unwrap();
        state.waste.push_back(dup);
        assert!(!state.is_complete_deck());

        state.waste.pop_back();
        state.stock.pop_back();
        assert!(!state.is_complete_deck());
    }

    #[test]
    fn test_clone_shares_structure() {
        let state = GameState::deal(&mut GameRng::new(8));
        let mut copy = state.clone();
        copy.stock.pop_back();

        assert_eq!(state.stock.len(), 24);
        assert_eq!(copy.stock.len(), 23);
    }

    #[test]
    fn test_serde_roundtrip() {
        let state = GameState::deal(&mut GameRng::new(11));
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
