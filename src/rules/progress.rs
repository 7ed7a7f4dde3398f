//! Terminal-condition and progress predicates.

use super::legality::{accepts_on_column, find_foundation_for};
use crate::core::{GameState, Pile};

/// Cards on a complete foundation.
pub const FULL_FOUNDATION: usize = 13;

/// Is there at least one legal move?
///
/// True when any of these holds:
/// - the stock is non-empty (a draw is always a move);
/// - the waste top card has a foundation or tableau destination;
/// - any face-up tableau card, not just column tops, has a foundation
///   destination or a tableau destination in another column.
#[must_use]
pub fn has_any_valid_move(
    tableau: &[Pile],
    foundations: &[Pile],
    waste: &Pile,
    stock: &Pile,
) -> bool {
    if !stock.is_empty() {
        return true;
    }

    if let Some(card) = waste.last() {
        if find_foundation_for(card, foundations).is_some() {
            return true;
        }
        if tableau.iter().any(|column| accepts_on_column(card, column)) {
            return true;
        }
    }

    for (source, column) in tableau.iter().enumerate() {
        for card in column.iter().filter(|c| c.face_up) {
            if find_foundation_for(card, foundations).is_some() {
                return true;
            }

            let movable = tableau
                .iter()
                .enumerate()
                .any(|(target, other)| target != source && accepts_on_column(card, other));
            if movable {
                return true;
            }
        }
    }

    false
}

/// `has_any_valid_move` over a whole state.
#[must_use]
pub fn state_has_valid_move(state: &GameState) -> bool {
    has_any_valid_move(&state.tableau, &state.foundations, &state.waste, &state.stock)
}

/// All four foundations hold thirteen cards.
#[must_use]
pub fn is_game_won(foundations: &[Pile]) -> bool {
    foundations.len() == 4 && foundations.iter().all(|f| f.len() == FULL_FOUNDATION)
}

/// No hidden information remains: stock empty and every tableau card
/// face-up. Never true once the game is won.
#[must_use]
pub fn can_auto_complete(state: &GameState) -> bool {
    state.stock.is_empty()
        && state.tableau.iter().all(|column| column.iter().all(|c| c.face_up))
        && !is_game_won(&state.foundations)
}

/// Could the waste top or a face-up tableau top go to a foundation right now?
#[must_use]
pub fn has_foundation_move_available(state: &GameState) -> bool {
    let waste_top = state.waste.last().into_iter();
    let column_tops = state
        .tableau
        .iter()
        .filter_map(|column| column.last())
        .filter(|c| c.face_up);

    waste_top
        .chain(column_tops)
        .any(|card| find_foundation_for(card, &state.foundations).is_some())
}
