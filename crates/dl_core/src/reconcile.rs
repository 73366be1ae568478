//! Merges lottery position assignments into the pick-ownership ledger.
//!
//! The draw engine speaks in standings slots; the ledger speaks in pick
//! rights, which may have been traded before the lottery ran. Reconciliation
//! moves each originating slot's pick to its drawn position, renumbers the
//! rest of the round behind the lottery block, and leaves other rounds
//! untouched. Ownership never changes here: the lottery moves draft slots,
//! not rights.

use std::collections::BTreeMap;

use tracing::{debug, error};

use crate::error::{LotteryError, Result};
use crate::models::{FinalDraftOrder, LotteryResult, PickRecord};

pub struct DraftOrderReconciler;

impl DraftOrderReconciler {
    /// Produces the final, contiguous draft order for the whole ledger.
    ///
    /// Within the lottery round, the pre-lottery `overall_pick` ordering
    /// encodes the originating standings slot: the k-th pick of the round
    /// originates from slot k. Placeholder results carry no origin slot and
    /// are skipped; the surrounding picks renumber around them.
    pub fn reconcile(
        results: &[LotteryResult],
        ledger: &[PickRecord],
        lottery_round: u8,
    ) -> Result<FinalDraftOrder> {
        if ledger.is_empty() {
            return Err(LotteryError::Configuration("pick ledger is empty".to_string()));
        }

        let mut round_picks: Vec<PickRecord> =
            ledger.iter().filter(|p| p.round == lottery_round).cloned().collect();
        let others: Vec<PickRecord> =
            ledger.iter().filter(|p| p.round != lottery_round).cloned().collect();
        if round_picks.is_empty() {
            return Err(LotteryError::Configuration(format!(
                "ledger has no picks in lottery round {}",
                lottery_round
            )));
        }

        round_picks.sort_by_key(|p| p.overall_pick);
        let base = round_picks[0].overall_pick;

        // origin-slot index -> new overall number
        let mut moved: BTreeMap<usize, u16> = BTreeMap::new();
        for result in results {
            if result.incomplete {
                debug!(
                    final_position = result.final_position,
                    "skipping placeholder result with no origin slot"
                );
                continue;
            }
            let idx = (result.original_position as usize).saturating_sub(1);
            if result.original_position == 0 || idx >= round_picks.len() {
                return Err(LotteryError::MissingPick {
                    original_position: result.original_position,
                });
            }
            moved.insert(idx, base + result.final_position as u16 - 1);
        }

        // Every overall number of the round not claimed by a lottery move is
        // handed out to the remaining picks in their pre-lottery order.
        let claimed: Vec<u16> = moved.values().copied().collect();
        let mut free: Vec<u16> = (base..base + round_picks.len() as u16)
            .filter(|o| !claimed.contains(o))
            .collect();
        free.reverse(); // pop() takes the lowest first

        for (idx, pick) in round_picks.iter_mut().enumerate() {
            pick.overall_pick = match moved.get(&idx) {
                Some(&new_overall) => new_overall,
                None => free.pop().ok_or_else(|| {
                    LotteryError::ReconciliationInvariant(format!(
                        "ran out of overall numbers renumbering round {}",
                        lottery_round
                    ))
                })?,
            };
        }

        let mut picks: Vec<PickRecord> = round_picks;
        picks.extend(others);
        picks.sort_by_key(|p| p.overall_pick);

        // Post-condition: overall numbers are exactly 1..=M.
        for (i, pick) in picks.iter().enumerate() {
            let expected = (i + 1) as u16;
            if pick.overall_pick != expected {
                error!(
                    found = pick.overall_pick,
                    expected, "draft order is not contiguous after reconciliation"
                );
                return Err(LotteryError::ReconciliationInvariant(format!(
                    "overall pick {} where {} was expected",
                    pick.overall_pick, expected
                )));
            }
        }

        Ok(FinalDraftOrder { picks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LotteryResult;

    /// Two-round, 16-team ledger. Round-1 picks are in reverse-standings
    /// order, so pick k originates from standings slot k.
    fn ledger() -> Vec<PickRecord> {
        let mut picks = Vec::new();
        for round in 1..=2u8 {
            for slot in 1..=16u16 {
                picks.push(PickRecord {
                    round,
                    overall_pick: (round as u16 - 1) * 16 + slot,
                    owning_team_id: format!("team_{:02}", slot),
                    origin_team_id: format!("team_{:02}", slot),
                    trade_provenance: None,
                });
            }
        }
        picks
    }

    fn identity_results() -> Vec<LotteryResult> {
        (1..=16).map(|p| LotteryResult::new(p, p, 0.0)).collect()
    }

    /// Lottery results where slot 9 drew pick 1: slots 1..=3 are pushed to
    /// 2..=4 (slot 1 still above its floor) and 4..=8 shift down by one.
    fn slot_9_wins_results() -> Vec<LotteryResult> {
        let mut results = vec![
            LotteryResult::new(9, 1, 2.0),
            LotteryResult::new(1, 2, 25.0),
            LotteryResult::new(2, 3, 19.9),
        ];
        for p in 3..=8 {
            results.push(LotteryResult::new(p, p + 1, 0.0));
        }
        for p in 10..=16 {
            results.push(LotteryResult::new(p, p, 0.0));
        }
        results
    }

    #[test]
    fn test_identity_results_leave_ledger_unchanged() {
        let ledger = ledger();
        let order =
            DraftOrderReconciler::reconcile(&identity_results(), &ledger, 1).unwrap();
        assert_eq!(order.picks, ledger);
    }

    #[test]
    fn test_winner_pick_moves_to_drawn_slot() {
        let order =
            DraftOrderReconciler::reconcile(&slot_9_wins_results(), &ledger(), 1).unwrap();
        assert_eq!(order.picks[0].origin_team_id, "team_09");
        assert_eq!(order.picks[0].overall_pick, 1);
        assert_eq!(order.picks[1].origin_team_id, "team_01");
        // displaced teams shifted down one slot each
        assert_eq!(order.picks[3].origin_team_id, "team_03");
        assert_eq!(order.picks[8].origin_team_id, "team_08");
    }

    #[test]
    fn test_ownership_survives_reassignment() {
        let mut ledger = ledger();
        // slot 9's rights were traded to team_02 before the lottery
        ledger[8].owning_team_id = "team_02".to_string();
        ledger[8].trade_provenance = Some("team_09".to_string());

        let order = DraftOrderReconciler::reconcile(&slot_9_wins_results(), &ledger, 1).unwrap();
        let moved = &order.picks[0];
        assert_eq!(moved.origin_team_id, "team_09");
        assert_eq!(moved.owning_team_id, "team_02");
        assert_eq!(moved.trade_provenance.as_deref(), Some("team_09"));
    }

    #[test]
    fn test_later_rounds_untouched() {
        let ledger = ledger();
        let order =
            DraftOrderReconciler::reconcile(&slot_9_wins_results(), &ledger, 1).unwrap();
        let round_two: Vec<_> = order.round(2).cloned().collect();
        let expected: Vec<_> = ledger.iter().filter(|p| p.round == 2).cloned().collect();
        assert_eq!(round_two, expected);
    }

    #[test]
    fn test_renumbering_is_contiguous() {
        let order =
            DraftOrderReconciler::reconcile(&slot_9_wins_results(), &ledger(), 1).unwrap();
        for (i, pick) in order.picks.iter().enumerate() {
            assert_eq!(pick.overall_pick, (i + 1) as u16);
        }
        assert_eq!(order.total_picks(), 32);
    }

    #[test]
    fn test_missing_pick_reported() {
        // lottery round only has 16 picks; slot 20 has no originating pick
        let mut results = identity_results();
        results[15] = LotteryResult::new(20, 16, 0.0);
        let err = DraftOrderReconciler::reconcile(&results, &ledger(), 1).unwrap_err();
        assert!(matches!(err, LotteryError::MissingPick { original_position: 20 }));
    }

    #[test]
    fn test_empty_ledger_rejected() {
        let err = DraftOrderReconciler::reconcile(&identity_results(), &[], 1).unwrap_err();
        assert!(matches!(err, LotteryError::Configuration(_)));
    }

    #[test]
    fn test_wrong_round_rejected() {
        let err = DraftOrderReconciler::reconcile(&identity_results(), &ledger(), 3).unwrap_err();
        assert!(matches!(err, LotteryError::Configuration(_)));
    }

    #[test]
    fn test_gap_in_ledger_fails_invariant_check() {
        let mut ledger = ledger();
        // round 2 numbering jumps, leaving a hole at overall 20
        for pick in ledger.iter_mut().filter(|p| p.round == 2) {
            if pick.overall_pick >= 20 {
                pick.overall_pick += 1;
            }
        }
        let err = DraftOrderReconciler::reconcile(&identity_results(), &ledger, 1).unwrap_err();
        assert!(matches!(err, LotteryError::ReconciliationInvariant(_)));
    }

    #[test]
    fn test_placeholder_results_are_skipped_and_order_stays_contiguous() {
        // slot 4's result was lost upstream; a placeholder holds position 4
        let mut results: Vec<LotteryResult> =
            (1..=16).filter(|&p| p != 4).map(|p| LotteryResult::new(p, p, 0.0)).collect();
        results.push(LotteryResult::placeholder(4));

        let order = DraftOrderReconciler::reconcile(&results, &ledger(), 1).unwrap();
        for (i, pick) in order.picks.iter().enumerate() {
            assert_eq!(pick.overall_pick, (i + 1) as u16);
        }
        // the orphaned pick folded back into its old slot
        assert_eq!(order.picks[3].origin_team_id, "team_04");
    }
}
