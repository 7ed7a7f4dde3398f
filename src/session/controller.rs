//! The session controller.
//!
//! `Session` owns the live `GameState`, its undo history and the lifecycle
//! flags. Every intent follows the same path:
//!
//! 1. Refuse if the game isn't in progress or is paused.
//! 2. Validate against `crate::rules`.
//! 3. Build the next state with `crate::moves`.
//! 4. Commit: bump the move count, push a snapshot, then check for a win or
//!    a loss.
//!
//! A refused intent returns `Err(MoveRejection)` and changes nothing.

use log::{debug, info, trace};

use super::history::History;
use super::scoring::final_score;
use super::stall::{LossReason, StallWatch};
use super::view::{GameStatus, Selection, SessionView};
use crate::core::{
    CardRef, Difficulty, GameRng, GameState, PileId, RedealLimit, SessionConfig, DECK_SIZE,
};
use crate::error::MoveRejection;
use crate::moves::{self, DrawKind};
use crate::rules;

/// What a successful intent did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Cards moved from stock to waste.
    Drew(usize),
    /// Waste turned over into the stock.
    Recycled,
    /// A face-down column top turned face-up.
    Flipped,
    /// One card went to this foundation.
    MovedToFoundation(usize),
    /// This many cards went to a column.
    MovedToTableau(usize),
    /// Auto-complete moved this many cards.
    AutoCompleted(usize),
    /// A card (and its run) is now selected.
    Selected,
    /// The selection was cleared.
    Deselected,
    Undone,
    Redone,
}

/// A single Klondike game plus its undo history.
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    rng: GameRng,
    deal_seed: Option<u64>,

    state: GameState,
    history: History<GameState>,

    status: GameStatus,
    paused: bool,
    loss_reason: Option<LossReason>,

    redeals_used: u32,
    missed_moves: u32,
    stall: StallWatch,
    selection: Option<Selection>,
}

impl Session {
    /// Create a session with nothing dealt yet.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        debug!("session rng seeded with {}", rng.seed());
        let state = GameState::empty();

        Self {
            config,
            rng,
            deal_seed: None,
            history: History::new(state.clone()),
            state,
            status: GameStatus::NotStarted,
            paused: false,
            loss_reason: None,
            redeals_used: 0,
            missed_moves: 0,
            stall: StallWatch::new(),
            selection: None,
        }
    }

    /// Create a session and deal the first game.
    #[must_use]
    pub fn start(config: SessionConfig) -> Self {
        let mut session = Self::new(config);
        session.deal();
        session
    }

    /// Play from an arbitrary position. The position becomes the oldest
    /// undo snapshot.
    #[must_use]
    pub fn from_state(config: SessionConfig, state: GameState) -> Self {
        let mut session = Self::new(config);
        session.begin(state);
        session
    }

    // === Lifecycle ===

    /// Shuffle and deal a new game, discarding the current one.
    ///
    /// Each game is dealt from a fresh seed drawn off the session RNG, so a
    /// seeded session produces the same sequence of deals.
    pub fn deal(&mut self) {
        let seed = self.rng.next_seed();
        self.deal_from_seed(seed);
    }

    /// Deal the game identified by `seed`.
    pub fn deal_from_seed(&mut self, seed: u64) {
        let state = GameState::deal(&mut GameRng::new(seed));
        info!("dealt game from seed {}", seed);
        self.begin(state);
        self.deal_seed = Some(seed);
    }

    /// Same as `deal`. Accepted in every status.
    pub fn restart(&mut self) {
        self.deal();
    }

    fn begin(&mut self, state: GameState) {
        self.stall.reset_to(&state);
        self.history = History::new(state.clone());
        self.state = state;
        self.status = GameStatus::Playing;
        self.paused = false;
        self.loss_reason = None;
        self.redeals_used = 0;
        self.missed_moves = 0;
        self.selection = None;
        self.deal_seed = None;
    }

    /// Suspend the clock and refuse moves until `resume`.
    pub fn pause(&mut self) {
        if self.status == GameStatus::Playing && !self.paused {
            debug!("paused");
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            debug!("resumed");
            self.paused = false;
        }
    }

    /// Flip between paused and running.
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Advance the clock. Counts only while playing and not paused.
    pub fn tick(&mut self, secs: u64) {
        if self.status == GameStatus::Playing && !self.paused {
            self.state.elapsed_secs = self.state.elapsed_secs.saturating_add(secs);
        }
    }

    /// Change difficulty mid-game. The next draw uses the new draw count and
    /// redeal limit; redeals already used still count.
    pub fn set_difficulty(&mut self, difficulty: impl Into<Difficulty>) {
        self.config.difficulty = difficulty.into();
        debug!("difficulty set to {:?}", self.config.difficulty);
    }

    // === Moves ===

    /// Draw from the stock, or recycle the waste when the stock is empty.
    pub fn draw(&mut self) -> Result<Outcome, MoveRejection> {
        self.ensure_playable()?;

        if self.state.stock.is_empty() {
            if self.state.waste.is_empty() {
                return self.reject(MoveRejection::NoDrawAvailable);
            }
            if !self.config.difficulty.max_redeals.allows(self.redeals_used) {
                return self.reject(MoveRejection::RedealLimitReached);
            }
        }

        let draw_count = self.config.difficulty.draw_count.count();
        let (next, kind) = moves::draw_state(&self.state, draw_count);
        let outcome = match kind {
            DrawKind::Drew(n) => Outcome::Drew(n),
            DrawKind::Recycled => {
                self.redeals_used += 1;
                Outcome::Recycled
            }
            DrawKind::Nothing => return self.reject(MoveRejection::NoDrawAvailable),
        };

        self.commit(next, 1);
        Ok(outcome)
    }

    /// Turn over the face-down top card of a column.
    pub fn flip(&mut self, column: usize, card_index: usize) -> Result<Outcome, MoveRejection> {
        self.ensure_playable()?;

        let Some(next) = moves::flip_tableau_card(&self.state, column, card_index) else {
            return self.reject(MoveRejection::NotFlippable);
        };

        self.commit(next, 1);
        Ok(Outcome::Flipped)
    }

    /// Move the top card at `from` onto foundation `foundation`.
    pub fn move_to_foundation(
        &mut self,
        from: CardRef,
        foundation: usize,
    ) -> Result<Outcome, MoveRejection> {
        self.ensure_playable()?;

        let Some(target) = self.state.foundations.get(foundation) else {
            return self.reject(MoveRejection::InvalidPile(foundation_id(foundation)));
        };
        match from.pile {
            PileId::Foundation(_) => return self.reject(MoveRejection::FoundationToFoundation),
            PileId::Stock => return self.reject(MoveRejection::InvalidPile(PileId::Stock)),
            pile if !pile.is_valid() => return self.reject(MoveRejection::InvalidPile(pile)),
            _ => {}
        }

        let Some(card) = self.state.card(from).copied() else {
            return self.reject(MoveRejection::EmptySource);
        };
        if !card.face_up {
            return self.reject(MoveRejection::FaceDownCard);
        }
        if !self.state.is_top(from) {
            return self.reject(MoveRejection::NotTopCard);
        }
        if !rules::is_valid_foundation_move(&card, target) {
            return self.reject(MoveRejection::IllegalFoundationMove);
        }

        let Some(next) = moves::move_to_foundation(&self.state, from.pile, foundation) else {
            return self.reject(MoveRejection::EmptySource);
        };

        self.commit(next, 1);
        Ok(Outcome::MovedToFoundation(foundation))
    }

    /// Move the card at `from` onto column `column`. From a column, every card
    /// stacked on it moves too.
    pub fn move_to_tableau(
        &mut self,
        from: CardRef,
        column: usize,
    ) -> Result<Outcome, MoveRejection> {
        self.ensure_playable()?;

        let Some(target) = self.state.tableau.get(column) else {
            return self.reject(MoveRejection::InvalidPile(tableau_id(column)));
        };
        match from.pile {
            PileId::Stock => return self.reject(MoveRejection::InvalidPile(PileId::Stock)),
            pile if !pile.is_valid() => return self.reject(MoveRejection::InvalidPile(pile)),
            PileId::Tableau(c) if usize::from(c) == column => {
                return self.reject(MoveRejection::SameColumn)
            }
            _ => {}
        }

        let Some(card) = self.state.card(from).copied() else {
            return self.reject(MoveRejection::EmptySource);
        };
        if !card.face_up {
            return self.reject(MoveRejection::FaceDownCard);
        }
        if !matches!(from.pile, PileId::Tableau(_)) && !self.state.is_top(from) {
            return self.reject(MoveRejection::NotTopCard);
        }
        if !rules::accepts_on_column(&card, target) {
            return self.reject(MoveRejection::IllegalTableauMove);
        }

        let moved = self.state.pile(from.pile).map_or(0, |p| p.len() - from.index);
        let Some(next) = moves::move_to_tableau(&self.state, from, column) else {
            return self.reject(MoveRejection::EmptySource);
        };

        self.commit(next, 1);
        Ok(Outcome::MovedToTableau(moved))
    }

    /// Send every reachable card to the foundations as one undoable move.
    ///
    /// Needs an empty stock and no face-down tableau cards. The move count
    /// grows by the number of cards moved.
    pub fn auto_complete(&mut self) -> Result<Outcome, MoveRejection> {
        self.ensure_playable()?;

        if !rules::can_auto_complete(&self.state) {
            return self.reject(MoveRejection::AutoCompleteUnavailable);
        }

        let result = moves::auto_move_to_foundation(&self.state);
        if !result.any() {
            return self.reject(MoveRejection::AutoCompleteUnavailable);
        }

        let moved = result.moved;
        self.commit(result.state, moved as u32);
        Ok(Outcome::AutoCompleted(moved))
    }

    // === Selection ===

    /// Click on a card or pile.
    ///
    /// - Stock: draw.
    /// - Face-down column top: flip it.
    /// - Face-up top card of the waste or a column that fits a foundation:
    ///   move it there.
    /// - Otherwise select the card (and its run), or clear the selection if
    ///   it was already selected.
    pub fn select(&mut self, at: CardRef) -> Result<Outcome, MoveRejection> {
        self.ensure_playable()?;

        if !at.pile.is_valid() {
            return self.reject(MoveRejection::InvalidPile(at.pile));
        }
        if at.pile == PileId::Stock {
            return self.draw();
        }

        let Some(card) = self.state.card(at).copied() else {
            return self.reject(MoveRejection::EmptySource);
        };

        if !card.face_up {
            return match at.pile {
                PileId::Tableau(c) => self.flip(usize::from(c), at.index),
                _ => self.reject(MoveRejection::FaceDownCard),
            };
        }

        let can_send =
            matches!(at.pile, PileId::Waste | PileId::Tableau(_)) && self.state.is_top(at);
        if can_send {
            if let Some(f) = rules::find_foundation_for(&card, &self.state.foundations) {
                return self.move_to_foundation(at, f);
            }
        }

        if self.selection.as_ref().map_or(false, |s| s.from == at) {
            self.selection = None;
            return Ok(Outcome::Deselected);
        }

        let Some(cards) = moves::movable_run(&self.state, at) else {
            return self.reject(MoveRejection::NotTopCard);
        };
        trace!("selected {} ({} card(s))", card, cards.len());
        self.selection = Some(Selection { from: at, cards });
        Ok(Outcome::Selected)
    }

    /// Drop the current selection onto `target`. The selection is cleared
    /// whether or not the drop is legal.
    pub fn drop_on(&mut self, target: PileId) -> Result<Outcome, MoveRejection> {
        self.ensure_playable()?;

        let Some(selection) = self.selection.take() else {
            return self.reject(MoveRejection::NoSelection);
        };

        match target {
            PileId::Tableau(c) => self.move_to_tableau(selection.from, usize::from(c)),
            PileId::Foundation(f) if selection.cards.len() == 1 => {
                self.move_to_foundation(selection.from, usize::from(f))
            }
            PileId::Foundation(_) => self.reject(MoveRejection::NotTopCard),
            PileId::Stock | PileId::Waste => self.reject(MoveRejection::InvalidPile(target)),
        }
    }

    /// Forget the current selection.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // === History ===

    /// Step back one committed move.
    ///
    /// Restores piles, move count, score and clock from the snapshot. The
    /// redeal counter is not refunded.
    pub fn undo(&mut self) -> Result<Outcome, MoveRejection> {
        self.ensure_playable()?;

        let Some(snapshot) = self.history.undo().cloned() else {
            return self.reject(MoveRejection::NothingToUndo);
        };
        self.restore(snapshot);
        debug!("undo to snapshot {}", self.history.cursor());
        Ok(Outcome::Undone)
    }

    /// Re-apply the next undone move.
    pub fn redo(&mut self) -> Result<Outcome, MoveRejection> {
        self.ensure_playable()?;

        let Some(snapshot) = self.history.redo().cloned() else {
            return self.reject(MoveRejection::NothingToRedo);
        };
        self.restore(snapshot);
        debug!("redo to snapshot {}", self.history.cursor());
        Ok(Outcome::Redone)
    }

    fn restore(&mut self, snapshot: GameState) {
        self.state = snapshot;
        self.selection = None;
        self.stall.reset_to(&self.state);
    }

    // === Commit ===

    fn ensure_playable(&self) -> Result<(), MoveRejection> {
        match self.status {
            GameStatus::NotStarted => Err(MoveRejection::NotStarted),
            GameStatus::Won | GameStatus::Lost => Err(MoveRejection::GameOver),
            GameStatus::Playing if self.paused => Err(MoveRejection::Paused),
            GameStatus::Playing => Ok(()),
        }
    }

    fn reject(&self, reason: MoveRejection) -> Result<Outcome, MoveRejection> {
        trace!("rejected: {}", reason);
        Err(reason)
    }

    /// Install `next` as the live state and record it.
    fn commit(&mut self, mut next: GameState, count: u32) {
        let foundation_before = self.state.foundation_card_count();
        let foundation_move_open = rules::has_foundation_move_available(&self.state);

        next.move_count = self.state.move_count.saturating_add(count);
        debug_assert_eq!(next.cards().count(), self.state.cards().count(), "card lost or added");
        debug_assert!(
            next.cards().count() != DECK_SIZE || next.is_complete_deck(),
            "card duplicated"
        );

        self.history.push(next.clone());
        self.state = next;
        self.selection = None;

        if foundation_move_open && self.state.foundation_card_count() <= foundation_before {
            self.missed_moves += 1;
        }
        self.stall.record(&self.state);

        debug!(
            "move {} committed (history {}/{})",
            self.state.move_count,
            self.history.cursor() + 1,
            self.history.len()
        );

        self.check_terminal();
    }

    fn check_terminal(&mut self) {
        if rules::is_game_won(&self.state.foundations) {
            self.status = GameStatus::Won;
            self.state.score = final_score(self.state.move_count, self.state.elapsed_secs);
            info!(
                "won in {} moves, {}s, score {}",
                self.state.move_count, self.state.elapsed_secs, self.state.score
            );
            return;
        }

        if !rules::state_has_valid_move(&self.state) {
            let reason = self.stall.loss_reason();
            self.status = GameStatus::Lost;
            self.loss_reason = Some(reason);
            info!("lost after {} moves: {}", self.state.move_count, reason);
        }
    }

    // === Queries ===

    /// The live state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    #[must_use]
    pub fn loss_reason(&self) -> Option<LossReason> {
        self.loss_reason
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.status == GameStatus::Playing && !self.paused && self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.status == GameStatus::Playing && !self.paused && self.history.can_redo()
    }

    /// Whether `auto_complete` would be accepted right now.
    #[must_use]
    pub fn can_auto_complete(&self) -> bool {
        self.status == GameStatus::Playing && !self.paused && rules::can_auto_complete(&self.state)
    }

    #[must_use]
    pub fn redeals_used(&self) -> u32 {
        self.redeals_used
    }

    /// Commits made while a foundation move was available but not taken.
    #[must_use]
    pub fn missed_moves(&self) -> u32 {
        self.missed_moves
    }

    #[must_use]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Seed of the current deal, if it was dealt rather than loaded.
    #[must_use]
    pub fn current_deal_seed(&self) -> Option<u64> {
        self.deal_seed
    }

    /// Everything a frontend needs besides the piles.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView {
            status: self.status,
            paused: self.paused,
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
            can_auto_complete: self.can_auto_complete(),
            is_won: self.is_won(),
            is_lost: self.is_lost(),
            loss_reason: self.loss_reason,
            move_count: self.state.move_count,
            score: self.state.score,
            elapsed_secs: self.state.elapsed_secs,
            redeals_used: self.redeals_used,
            redeals_left: match self.config.difficulty.max_redeals {
                RedealLimit::Unlimited => None,
                RedealLimit::Limited(max) => Some(max.saturating_sub(self.redeals_used)),
            },
            missed_moves: self.missed_moves,
            selected: self.selection.as_ref().map(|s| s.from),
            deal_seed: self.deal_seed,
        }
    }
}

fn foundation_id(index: usize) -> PileId {
    PileId::Foundation(u8::try_from(index).unwrap_or(u8::MAX))
}

fn tableau_id(index: usize) -> PileId {
    PileId::Tableau(u8::try_from(index).unwrap_or(u8::MAX))
}
