//! Why an intent did nothing.
//!
//! A rejected intent leaves the session exactly as it was: no state change
//! and no history entry. `MoveRejection` only explains the no-op, so callers
//! that don't care can drop it.

use serde::{Deserialize, Serialize};

use crate::core::PileId;

/// Reason a session intent was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    /// No game dealt yet.
    NotStarted,
    /// Game already won or lost. Only restart is accepted.
    GameOver,
    /// Session is paused.
    Paused,
    /// Pile id out of range, or a pile that can't play this role.
    InvalidPile(PileId),
    /// Nothing at the given location.
    EmptySource,
    /// Face-down cards can't be moved.
    FaceDownCard,
    /// Only the top card of this pile can move.
    NotTopCard,
    /// Only the face-down top card of a column can be flipped.
    NotFlippable,
    /// Card doesn't fit the target column.
    IllegalTableauMove,
    /// Card doesn't fit the target foundation.
    IllegalFoundationMove,
    /// Cards don't move between foundations.
    FoundationToFoundation,
    /// A card can't be dropped on its own column.
    SameColumn,
    /// Stock and waste are both empty.
    NoDrawAvailable,
    /// Waste can't be recycled again at this difficulty.
    RedealLimitReached,
    /// Already at the oldest snapshot.
    NothingToUndo,
    /// Already at the newest snapshot.
    NothingToRedo,
    /// Stock not empty or some tableau card still face-down.
    AutoCompleteUnavailable,
    /// `drop_on` with no card selected.
    NoSelection,
}

impl std::fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveRejection::NotStarted => write!(f, "no game in progress"),
            MoveRejection::GameOver => write!(f, "game is over"),
            MoveRejection::Paused => write!(f, "game is paused"),
            MoveRejection::InvalidPile(pile) => write!(f, "invalid pile {}", pile),
            MoveRejection::EmptySource => write!(f, "no card there"),
            MoveRejection::FaceDownCard => write!(f, "card is face-down"),
            MoveRejection::NotTopCard => write!(f, "only the top card can move"),
            MoveRejection::NotFlippable => write!(f, "card can't be flipped"),
            MoveRejection::IllegalTableauMove => write!(f, "card doesn't fit that column"),
            MoveRejection::IllegalFoundationMove => write!(f, "card doesn't fit that foundation"),
            MoveRejection::FoundationToFoundation => {
                write!(f, "cards don't move between foundations")
            }
            MoveRejection::SameColumn => write!(f, "card is already in that column"),
            MoveRejection::NoDrawAvailable => write!(f, "stock and waste are empty"),
            MoveRejection::RedealLimitReached => write!(f, "no redeals left"),
            MoveRejection::NothingToUndo => write!(f, "nothing to undo"),
            MoveRejection::NothingToRedo => write!(f, "nothing to redo"),
            MoveRejection::AutoCompleteUnavailable => write!(f, "auto-complete not available"),
            MoveRejection::NoSelection => write!(f, "no card selected"),
        }
    }
}

impl std::error::Error for MoveRejection {}
