//! Card runs: a card plus everything stacked on it.

use smallvec::SmallVec;

use crate::core::{Card, CardRef, GameState, PileId};

/// Longest possible tableau run (King down to Ace).
pub const MAX_RUN: usize = 13;

/// Cards picked up together. Never longer than `MAX_RUN` in legal play, so
/// it stays on the stack.
pub type Run = SmallVec<[Card; MAX_RUN]>;

/// The cards that would travel with the card at `at`.
///
/// Tableau: the face-up card at `at` and every card above it. Waste and
/// foundation: the top card only. `None` for stock, face-down cards, buried
/// waste/foundation cards, and bad indices.
#[must_use]
pub fn movable_run(state: &GameState, at: CardRef) -> Option<Run> {
    let pile = state.pile(at.pile)?;
    let card = pile.get(at.index)?;
    if !card.face_up {
        return None;
    }

    match at.pile {
        PileId::Tableau(_) => Some(pile.iter().skip(at.index).copied().collect()),
        PileId::Waste | PileId::Foundation(_) if state.is_top(at) => {
            Some(smallvec::smallvec![*card])
        }
        _ => None,
    }
}
