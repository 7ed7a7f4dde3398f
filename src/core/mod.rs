//! Core types: cards, deck, piles, state, RNG, configuration.
//!
//! Everything here is plain data. Rules live in `crate::rules`, transitions
//! in `crate::moves`, and the session controller in `crate::session`.

pub mod card;
pub mod deck;
pub mod pile;
pub mod rng;
pub mod config;
pub mod state;

pub use card::{Card, CardKey, Color, Rank, Suit};
pub use deck::{shuffled_deck, standard_deck, DECK_SIZE};
pub use pile::{CardRef, Pile, PileId, FOUNDATION_COUNT, TABLEAU_COLUMNS};
pub use rng::GameRng;
pub use config::{Difficulty, DifficultyTier, DrawCount, RedealLimit, SessionConfig};
pub use state::GameState;
