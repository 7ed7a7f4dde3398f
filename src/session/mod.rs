//! Session Controller.
//!
//! Owns one game at a time: deals it, applies intents as commits, keeps the
//! undo/redo history and decides when the game is won or lost.
//!
//! ## Lifecycle
//!
//! `NotStarted -> Playing -> Won | Lost`, with a `paused` flag on top of
//! `Playing`. Won and lost games accept only `deal`/`restart`.
//!
//! ## Example
//!
//! ```
//! use klondike_engine::core::{DifficultyTier, SessionConfig};
//! use klondike_engine::session::{GameStatus, Session};
//!
//! let config = SessionConfig::new()
//!     .with_seed(42)
//!     .with_difficulty(DifficultyTier::Medium);
//! let mut session = Session::start(config);
//!
//! session.draw().unwrap();
//! assert_eq!(session.state().waste.len(), 3);
//!
//! session.undo().unwrap();
//! assert!(session.state().waste.is_empty());
//! assert_eq!(session.status(), GameStatus::Playing);
//! ```

mod controller;
mod history;
mod scoring;
mod stall;
mod view;

pub use controller::{Outcome, Session};
pub use history::History;
pub use scoring::{final_score, BASE_SCORE, MAX_MOVE_PENALTY, MAX_TIME_PENALTY};
pub use stall::{LossReason, StallWatch, STALL_MOVES};
pub use view::{GameStatus, Selection, SessionView};
