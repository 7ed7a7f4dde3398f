//! State transitions.
//!
//! Each function takes the current state (or piles) by reference and returns
//! a new value; inputs are never modified. `None` means the transition has
//! no shape for the given arguments (empty source, bad index, forbidden
//! pile pairing). Rule legality is the caller's job: validate with
//! `crate::rules` first.

use log::trace;

use crate::core::{CardRef, GameState, Pile, PileId};
use crate::rules::find_foundation_for;

/// What a draw did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawKind {
    /// Moved this many cards from stock to waste.
    Drew(usize),
    /// Stock was empty: waste turned over into a new stock.
    Recycled,
    /// Stock and waste both empty.
    Nothing,
}

/// Result of `draw`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Drawn {
    pub stock: Pile,
    pub waste: Pile,
    pub kind: DrawKind,
}

/// Result of `auto_move_to_foundation`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutoMoved {
    pub state: GameState,
    /// Cards moved onto foundations.
    pub moved: usize,
}

impl AutoMoved {
    #[must_use]
    pub fn any(&self) -> bool {
        self.moved > 0
    }
}

/// Flip the top card of a column face-up if it is face-down.
///
/// Every transition that removes cards from a tableau column calls this, so
/// a column's top card is face-up after any move. Returns whether a card
/// was flipped.
pub fn reveal_top(column: &mut Pile) -> bool {
    match column.back_mut() {
        Some(card) if !card.face_up => {
            card.face_up = true;
            true
        }
        _ => false,
    }
}

/// Draw up to `draw_count` cards, or recycle the waste.
///
/// - Stock non-empty: pop up to `draw_count` cards off the stock top and push
///   each face-up onto the waste, in the order drawn.
/// - Stock empty, waste non-empty: the waste, reversed and face-down, becomes
///   the stock; the waste empties.
/// - Both empty: nothing changes.
#[must_use]
pub fn draw(stock: &Pile, waste: &Pile, draw_count: usize) -> Drawn {
    let mut stock = stock.clone();
    let mut waste = waste.clone();

    if stock.is_empty() {
        if waste.is_empty() {
            return Drawn { stock, waste, kind: DrawKind::Nothing };
        }

        let recycled: Pile = waste.iter().rev().map(|c| c.with_face_up(false)).collect();
        return Drawn {
            stock: recycled,
            waste: Pile::new(),
            kind: DrawKind::Recycled,
        };
    }

    let mut drawn = 0;
    while drawn < draw_count {
        let Some(card) = stock.pop_back() else { break };
        waste.push_back(card.with_face_up(true));
        drawn += 1;
    }

    Drawn { stock, waste, kind: DrawKind::Drew(drawn) }
}

/// `draw` applied to a whole state.
#[must_use]
pub fn draw_state(state: &GameState, draw_count: usize) -> (GameState, DrawKind) {
    let drawn = draw(&state.stock, &state.waste, draw_count);
    let mut next = state.clone();
    next.stock = drawn.stock;
    next.waste = drawn.waste;
    (next, drawn.kind)
}

/// Turn over the face-down top card of a column.
///
/// Only the top card of its column, and only while face-down.
#[must_use]
pub fn flip_tableau_card(state: &GameState, column: usize, card_index: usize) -> Option<GameState> {
    let pile = state.tableau.get(column)?;
    if pile.is_empty() || card_index != pile.len() - 1 || pile[card_index].face_up {
        return None;
    }

    let mut next = state.clone();
    reveal_top(&mut next.tableau[column]);
    Some(next)
}

/// Move the top card of `source` onto foundation `foundation_index`.
///
/// Waste: pop the top. Tableau: pop the top, then reveal. Stock and other
/// foundations are not valid sources.
#[must_use]
pub fn move_to_foundation(
    state: &GameState,
    source: PileId,
    foundation_index: usize,
) -> Option<GameState> {
    let from_play = matches!(source, PileId::Waste | PileId::Tableau(_));
    if !from_play || foundation_index >= state.foundations.len() {
        return None;
    }

    let mut next = state.clone();
    let pile = next.pile_mut(source)?;
    let card = pile.pop_back()?;
    if matches!(source, PileId::Tableau(_)) {
        reveal_top(pile);
    }

    trace!("{} -> Foundation({})", card, foundation_index);
    next.foundations[foundation_index].push_back(card);
    Some(next)
}

/// Move a card (and for tableau sources, every card stacked on it) onto a
/// tableau column.
///
/// Tableau sources move the run starting at `from.index` as one unit and
/// reveal the new source top. Waste and foundation sources move exactly
/// their top card. Moving a column onto itself is not a move.
#[must_use]
pub fn move_to_tableau(
    state: &GameState,
    from: CardRef,
    target_column: usize,
) -> Option<GameState> {
    if target_column >= state.tableau.len() {
        return None;
    }

    let mut next = state.clone();
    let moving: Pile = match from.pile {
        PileId::Tableau(col) => {
            let col = usize::from(col);
            if col == target_column {
                return None;
            }
            let column = next.tableau.get_mut(col)?;
            if from.index >= column.len() {
                return None;
            }
            let run = column.split_off(from.index);
            reveal_top(column);
            run
        }
        PileId::Waste | PileId::Foundation(_) => {
            if !state.is_top(from) {
                return None;
            }
            let card = next.pile_mut(from.pile)?.pop_back()?;
            Pile::unit(card)
        }
        PileId::Stock => return None,
    };

    trace!("{} card(s) from {} -> Tableau({})", moving.len(), from.pile, target_column);
    next.tableau[target_column].append(moving);
    Some(next)
}

/// Repeatedly move the waste top and face-up column tops onto foundations
/// until a full pass moves nothing.
///
/// Terminates: every move puts one more card on a foundation. Running it a
/// second time is a no-op.
#[must_use]
pub fn auto_move_to_foundation(state: &GameState) -> AutoMoved {
    let mut next = state.clone();
    let mut moved = 0;

    loop {
        let mut progressed = false;

        if let Some(card) = next.waste.last().copied() {
            if let Some(f) = find_foundation_for(&card, &next.foundations) {
                next.waste.pop_back();
                next.foundations[f].push_back(card);
                moved += 1;
                progressed = true;
            }
        }

        for col in 0..next.tableau.len() {
            let Some(card) = next.tableau[col].last().copied() else { continue };
            if !card.face_up {
                continue;
            }
            if let Some(f) = find_foundation_for(&card, &next.foundations) {
                next.tableau[col].pop_back();
                reveal_top(&mut next.tableau[col]);
                next.foundations[f].push_back(card);
                moved += 1;
                progressed = true;
            }
        }

        if !progressed {
            break;
        }
    }

    AutoMoved { state: next, moved }
}
