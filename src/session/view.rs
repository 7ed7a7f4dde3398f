//! Read-only session data for a frontend.

use serde::{Deserialize, Serialize};

use super::stall::LossReason;
use crate::core::CardRef;
use crate::moves::Run;

/// Lifecycle of one game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    /// Won or lost. Only a restart leaves these.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::NotStarted => write!(f, "not started"),
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::Won => write!(f, "won"),
            GameStatus::Lost => write!(f, "lost"),
        }
    }
}

/// A picked-up card and the cards travelling with it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub from: CardRef,
    pub cards: Run,
}

/// Snapshot of everything about a session except the piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub status: GameStatus,
    pub paused: bool,
    pub can_undo: bool,
    pub can_redo: bool,
    pub can_auto_complete: bool,
    pub is_won: bool,
    pub is_lost: bool,
    pub loss_reason: Option<LossReason>,
    pub move_count: u32,
    pub score: u32,
    pub elapsed_secs: u64,
    pub redeals_used: u32,
    /// `None` when redeals are unlimited.
    pub redeals_left: Option<u32>,
    pub missed_moves: u32,
    pub selected: Option<CardRef>,
    /// Seed that reproduces the current deal. `None` for a loaded position.
    pub deal_seed: Option<u64>,
}
