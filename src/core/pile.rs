//! Pile identifiers and card locations.
//!
//! Klondike has a fixed layout: one stock, one waste, four foundations and
//! seven tableau columns. `PileId` names a pile; `CardRef` names a card by
//! its pile and its index from the bottom of that pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::Card;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// An ordered pile of cards. Index 0 is the bottom, the last element the top.
///
/// `im::Vector` shares structure between clones, so snapshotting a pile for
/// the undo history is O(1).
pub type Pile = Vector<Card>;

/// Identifies one of the thirteen piles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    /// Face-down draw source.
    Stock,
    /// Face-up cards drawn from the stock.
    Waste,
    /// Foundation pile (0-3).
    Foundation(u8),
    /// Tableau column (0-6).
    Tableau(u8),
}

impl PileId {
    /// Whether the index part of this id is in range.
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            PileId::Stock | PileId::Waste => true,
            PileId::Foundation(i) => usize::from(i) < FOUNDATION_COUNT,
            PileId::Tableau(i) => usize::from(i) < TABLEAU_COLUMNS,
        }
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileId::Stock => write!(f, "Stock"),
            PileId::Waste => write!(f, "Waste"),
            PileId::Foundation(i) => write!(f, "Foundation({})", i),
            PileId::Tableau(i) => write!(f, "Tableau({})", i),
        }
    }
}

/// A card location: pile plus index from the bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardRef {
    pub pile: PileId,
    pub index: usize,
}

impl CardRef {
    #[must_use]
    pub const fn new(pile: PileId, index: usize) -> Self {
        Self { pile, index }
    }
}
