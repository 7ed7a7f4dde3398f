//! Klondike rules as pure predicates.
//!
//! - `legality`: whether a card may go onto a tableau column or foundation
//! - `progress`: win detection, any-move detection, auto-complete eligibility
//!
//! Nothing here mutates state. The session validates with these predicates
//! before asking `crate::moves` for a transition.

pub mod legality;
pub mod progress;

pub use legality::{
    accepts_on_column, find_foundation_for, is_valid_foundation_move, is_valid_tableau_move,
};
pub use progress::{
    can_auto_complete, has_any_valid_move, has_foundation_move_available, is_game_won,
    state_has_valid_move, FULL_FOUNDATION,
};
