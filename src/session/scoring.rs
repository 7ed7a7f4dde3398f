//! Final score for a won game.

/// Points before penalties.
pub const BASE_SCORE: u32 = 500;

/// Most points the move penalty can take.
pub const MAX_MOVE_PENALTY: u32 = 300;

/// Most points the time penalty can take.
pub const MAX_TIME_PENALTY: u32 = 200;

/// Score for a game won in `moves` moves and `elapsed_secs` seconds.
///
/// `500 - min(300, 2 * moves) - min(200, secs / 5)`, floored, never below
/// zero. Games that are not won score zero; that check is the caller's.
#[must_use]
pub fn final_score(moves: u32, elapsed_secs: u64) -> u32 {
    let move_penalty = moves.saturating_mul(2).min(MAX_MOVE_PENALTY);

    // The time penalty is fractional. Flooring the total costs one extra
    // point whenever an uncapped penalty has a remainder.
    let whole = elapsed_secs / 5;
    let time_penalty = if whole >= u64::from(MAX_TIME_PENALTY) {
        MAX_TIME_PENALTY
    } else {
        whole as u32 + u32::from(elapsed_secs % 5 != 0)
    };

    BASE_SCORE.saturating_sub(move_penalty + time_penalty)
}
