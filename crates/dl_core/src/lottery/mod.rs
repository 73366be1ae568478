pub mod draw;
pub mod reveal;

pub use draw::{LotteryDrawEngine, MAX_RISE, WORST_TEAM_FLOOR};
pub use reveal::reveal_order;

use crate::error::Result;
use crate::models::{LotteryOutcome, OddsTable, PickRecord, StandingsSlot};
use crate::random::RandomSource;
use crate::reconcile::DraftOrderReconciler;

/// Runs the weighted draw and reconciles it against the pick ledger in one
/// call. The outcome's `incomplete` flag is set when any result is a
/// synthesized placeholder; callers must acknowledge it before treating the
/// order as final.
pub fn run_lottery_and_reconcile(
    standings: &[StandingsSlot],
    odds: &OddsTable,
    ledger: &[PickRecord],
    lottery_round: u8,
    source: &mut dyn RandomSource,
) -> Result<LotteryOutcome> {
    let results = LotteryDrawEngine::run(standings, odds, source)?;
    let final_order = DraftOrderReconciler::reconcile(&results, ledger, lottery_round)?;
    let incomplete = results.iter().any(|r| r.incomplete);
    Ok(LotteryOutcome { results, final_order, incomplete })
}
