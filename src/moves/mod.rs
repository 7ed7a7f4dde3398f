//! Move Executor: pure state transitions.
//!
//! Every function here borrows its input and returns a fresh value, so the
//! caller can keep the old state as an undo snapshot. Validation against
//! the Klondike rules happens before these are called.
//!
//! ## Transitions
//!
//! - `draw` / `draw_state`: stock to waste, or recycle waste into stock
//! - `flip_tableau_card`: turn over a face-down column top
//! - `move_to_foundation`: one card from waste or a column top
//! - `move_to_tableau`: a run from a column, or one card from waste/foundation
//! - `auto_move_to_foundation`: drain everything foundations will accept

mod executor;
mod run;

pub use executor::{
    auto_move_to_foundation, draw, draw_state, flip_tableau_card, move_to_foundation,
    move_to_tableau, reveal_top, AutoMoved, DrawKind, Drawn,
};
pub use run::{movable_run, Run, MAX_RUN};
