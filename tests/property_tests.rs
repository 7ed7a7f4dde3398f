//! Property tests over random play.
//!
//! Each case deals a seeded game and feeds the session a random stream of
//! intents, legal or not, then checks the invariants that must hold after
//! every step.

use klondike_engine::core::{CardRef, DifficultyTier, GameState, PileId, SessionConfig};
use klondike_engine::moves::auto_move_to_foundation;
use klondike_engine::rules::FULL_FOUNDATION;
use klondike_engine::session::Session;

use proptest::prelude::*;

/// One random intent: (kind, pile code, card index).
type Intent = (u8, u8, usize);

fn pile_from_code(code: u8) -> PileId {
    match code {
        0 => PileId::Stock,
        1 => PileId::Waste,
        2..=5 => PileId::Foundation(code - 2),
        _ => PileId::Tableau(code - 6),
    }
}

fn apply(session: &mut Session, (kind, code, index): Intent) {
    let pile = pile_from_code(code);
    let at = CardRef::new(pile, index);
    let column = usize::from(code % 7);

    let _ = match kind {
        0 | 1 => session.draw(),
        2 => session.select(at),
        3 => session.drop_on(pile),
        4 => session.move_to_tableau(at, column),
        5 => session.move_to_foundation(at, usize::from(code % 4)),
        6 => session.undo(),
        7 => session.redo(),
        _ => session.auto_complete(),
    };
}

fn intents() -> impl Strategy<Value = Vec<Intent>> {
    prop::collection::vec((0u8..9, 0u8..13, 0usize..20), 0..120)
}

fn difficulty() -> impl Strategy<Value = DifficultyTier> {
    prop_oneof![
        Just(DifficultyTier::Easy),
        Just(DifficultyTier::Medium),
        Just(DifficultyTier::Hard),
    ]
}

fn assert_foundations_ordered(state: &GameState) {
    for foundation in &state.foundations {
        assert!(foundation.len() <= FULL_FOUNDATION);
        for (i, card) in foundation.iter().enumerate() {
            assert_eq!(usize::from(card.rank.value()), i + 1);
            assert_eq!(card.suit, foundation[0].suit);
            assert!(card.face_up);
        }
    }
}

fn assert_column_tops_face_up(state: &GameState) {
    for column in &state.tableau {
        if let Some(top) = column.last() {
            assert!(top.face_up);
        }
    }
}

proptest! {
    #[test]
    fn prop_deck_survives_random_play(
        seed in any::<u64>(),
        tier in difficulty(),
        steps in intents(),
    ) {
        let config = SessionConfig::new().with_seed(seed).with_difficulty(tier);
        let mut session = Session::start(config);

        for step in steps {
            apply(&mut session, step);

            let state = session.state();
            prop_assert!(state.is_complete_deck());
            assert_foundations_ordered(state);
            assert_column_tops_face_up(state);
            prop_assert!(state.stock.iter().all(|c| !c.face_up));
            prop_assert!(state.waste.iter().all(|c| c.face_up));
        }
    }

    #[test]
    fn prop_rejections_change_nothing(seed in any::<u64>(), steps in intents()) {
        let mut session = Session::start(SessionConfig::new().with_seed(seed));

        for (kind, code, index) in steps {
            let before = session.state().clone();
            let moves_before = before.move_count;
            let at = CardRef::new(pile_from_code(code), index);

            if session.move_to_tableau(at, usize::from(kind % 7)).is_err() {
                prop_assert_eq!(session.state(), &before);
            } else {
                prop_assert_eq!(session.state().move_count, moves_before + 1);
            }

            if session.draw().is_err() {
                break;
            }
        }
    }

    #[test]
    fn prop_undo_all_returns_to_deal(seed in any::<u64>(), steps in intents()) {
        let mut session = Session::start(SessionConfig::new().with_seed(seed));
        let dealt = session.state().clone();

        for step in steps {
            // Skip history intents so every success is a commit.
            if (6..=7).contains(&step.0) {
                continue;
            }
            session.tick(1);
            apply(&mut session, step);
        }

        if !session.status().is_terminal() && session.state().move_count > 0 {
            // Ticks after the last commit aren't in any snapshot, so step
            // back and forth to land on the recorded tip.
            prop_assert!(session.undo().is_ok());
            prop_assert!(session.redo().is_ok());
            let tip = session.state().clone();

            while session.undo().is_ok() {}
            prop_assert_eq!(session.state(), &dealt);
            prop_assert_eq!(session.state().elapsed_secs, 0);

            while session.redo().is_ok() {}
            prop_assert_eq!(session.state(), &tip);
        }
    }

    #[test]
    fn prop_auto_move_is_idempotent(seed in any::<u64>(), steps in intents()) {
        let mut session = Session::start(SessionConfig::new().with_seed(seed));
        for step in steps {
            apply(&mut session, step);
        }

        let once = auto_move_to_foundation(session.state());
        let twice = auto_move_to_foundation(&once.state);
        prop_assert_eq!(&once.state, &twice.state);
        prop_assert_eq!(twice.moved, 0);
        prop_assert!(once.state.is_complete_deck());
        assert_foundations_ordered(&once.state);
    }
}
