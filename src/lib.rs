//! # klondike-engine
//!
//! A Klondike solitaire engine: deal, validate, move, undo, win or lose.
//!
//! ## Design Principles
//!
//! 1. **One State Value**: The whole position is a single `GameState`.
//!    Transitions take it by reference and return a new one.
//!
//! 2. **Validate, Then Transform**: Rules are pure predicates; moves are pure
//!    transitions; only the session commits.
//!
//! 3. **Refusals Are No-ops**: An illegal intent changes nothing and leaves
//!    no history entry. The returned `MoveRejection` just says why.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Piles are `im::Vector`, so every undo
//!   snapshot is an O(1) clone of the previous state.
//!
//! - **Seeded Deals**: `GameRng` (ChaCha8) makes every deal reproducible from
//!   a `u64` seed.
//!
//! ## Modules
//!
//! - `core`: Cards, deck, piles, state, RNG, configuration
//! - `rules`: Move legality, win and stuck detection
//! - `moves`: State transitions
//! - `session`: The controller with history, scoring and win/loss tracking
//! - `error`: `MoveRejection`

pub mod core;
pub mod rules;
pub mod moves;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Card, CardKey, Color, Rank, Suit,
    CardRef, Pile, PileId,
    GameRng,
    Difficulty, DifficultyTier, DrawCount, RedealLimit, SessionConfig,
    GameState,
};

pub use crate::rules::{
    is_valid_tableau_move, is_valid_foundation_move,
    has_any_valid_move, is_game_won, can_auto_complete,
};

pub use crate::moves::{AutoMoved, DrawKind, Drawn, Run};

pub use crate::session::{
    GameStatus, LossReason, Outcome, Selection, Session, SessionView,
};

pub use crate::error::MoveRejection;
