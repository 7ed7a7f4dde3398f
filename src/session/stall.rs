//! Loss reasons and the empty-stock stall counter.

use serde::{Deserialize, Serialize};

use crate::core::GameState;

/// Moves without foundation progress, after the stock runs out, before a
/// stuck game is blamed on the empty stock.
pub const STALL_MOVES: u32 = 2;

/// Why a game was lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// No legal move remains.
    NoValidMoves,
    /// No legal move remains and the stock has been empty for a while
    /// without any card reaching a foundation.
    StockExhausted,
}

impl LossReason {
    /// Player-facing message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            LossReason::NoValidMoves => "No more valid moves available.",
            LossReason::StockExhausted => "Stock pile empty and no progress made after 2 moves.",
        }
    }
}

impl std::fmt::Display for LossReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Counts committed moves since the stock emptied, restarting whenever a
/// foundation grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StallWatch {
    moves_since_empty: Option<u32>,
    foundation_baseline: usize,
}

impl StallWatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update after a commit that produced `state`.
    pub fn record(&mut self, state: &GameState) {
        if !state.stock.is_empty() {
            *self = Self::default();
            return;
        }

        let on_foundations = state.foundation_card_count();
        self.moves_since_empty = match self.moves_since_empty {
            Some(n) if on_foundations <= self.foundation_baseline => Some(n + 1),
            _ => Some(0),
        };
        self.foundation_baseline = on_foundations;
    }

    /// Restart counting from `state`, as if it had just been reached.
    pub fn reset_to(&mut self, state: &GameState) {
        *self = Self::default();
        if state.stock.is_empty() {
            self.moves_since_empty = Some(0);
            self.foundation_baseline = state.foundation_card_count();
        }
    }

    /// Moves since the stock emptied, if it is empty.
    #[must_use]
    pub fn moves_since_empty(&self) -> Option<u32> {
        self.moves_since_empty
    }

    #[must_use]
    pub fn is_stalled(&self) -> bool {
        self.moves_since_empty.map_or(false, |n| n >= STALL_MOVES)
    }

    /// Reason to report when no legal move remains.
    #[must_use]
    pub fn loss_reason(&self) -> LossReason {
        if self.is_stalled() {
            LossReason::StockExhausted
        } else {
            LossReason::NoValidMoves
        }
    }
}
