//! Reveal ordering for presentation layers.
//!
//! A draft-room reveal walks the board from the back of the lottery up to
//! position 4, then announces the third pick, then the first, and saves the
//! second for last. This is a pure reordering of already-computed results;
//! timing and animation live entirely in the consumer.

use crate::models::LotteryResult;

/// Returns the results in reveal order: positions `N..=4` descending,
/// then 3, then 1, then 2.
pub fn reveal_order(results: &[LotteryResult]) -> Vec<LotteryResult> {
    let mut tail: Vec<LotteryResult> =
        results.iter().filter(|r| r.final_position >= 4).cloned().collect();
    tail.sort_by(|a, b| b.final_position.cmp(&a.final_position));

    for position in [3, 1, 2] {
        if let Some(result) = results.iter().find(|r| r.final_position == position) {
            tail.push(result.clone());
        }
    }
    tail
}
