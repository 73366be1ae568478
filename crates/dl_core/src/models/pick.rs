//! Lottery results and the pick-ownership ledger.

use serde::{Deserialize, Serialize};

// =============================================================================
// Lottery results
// =============================================================================

/// Outcome of the draw for one standings slot.
///
/// `final_position` values across a result set form a permutation of `1..=N`.
/// A synthesized placeholder (upstream data gap) carries `original_position: 0`
/// and `incomplete: true`; callers must acknowledge the flag before treating
/// the order as final.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotteryResult {
    pub original_position: u8,
    pub final_position: u8,
    /// `original_position - final_position`; positive means the team moved up.
    pub position_change: i16,
    /// First-pick probability this slot carried into the draw, for display.
    pub odds_used: f64,
    #[serde(default)]
    pub incomplete: bool,
}

impl LotteryResult {
    pub fn new(original_position: u8, final_position: u8, odds_used: f64) -> Self {
        Self {
            original_position,
            final_position,
            position_change: original_position as i16 - final_position as i16,
            odds_used,
            incomplete: false,
        }
    }

    /// Placeholder emitted when a final position could not be filled from the
    /// input data. Surfaced to the caller instead of silently faking a team.
    pub fn placeholder(final_position: u8) -> Self {
        Self {
            original_position: 0,
            final_position,
            position_change: 0,
            odds_used: 0.0,
            incomplete: true,
        }
    }
}

// =============================================================================
// Pick ownership ledger
// =============================================================================

/// One draft selection slot in the ownership ledger, trades already applied.
///
/// `origin_team_id` is immutable once the ledger is built; only
/// `owning_team_id` changes via trades, and only before the lottery runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickRecord {
    pub round: u8,
    /// Global 1-based sequence number within the draft.
    pub overall_pick: u16,
    /// Current rights-holder, post-trades.
    pub owning_team_id: String,
    /// Team whose standings position originally generated this pick.
    pub origin_team_id: String,
    /// Team the pick was acquired from, if traded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trade_provenance: Option<String>,
}

impl PickRecord {
    pub fn is_traded(&self) -> bool {
        self.owning_team_id != self.origin_team_id
    }
}

/// The finalized, renumbered draft order. Sole durable output of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalDraftOrder {
    pub picks: Vec<PickRecord>,
}

impl FinalDraftOrder {
    pub fn total_picks(&self) -> usize {
        self.picks.len()
    }

    pub fn round(&self, round: u8) -> impl Iterator<Item = &PickRecord> {
        self.picks.iter().filter(move |p| p.round == round)
    }
}

/// Combined output of the draw + reconciliation facade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotteryOutcome {
    pub results: Vec<LotteryResult>,
    pub final_order: FinalDraftOrder,
    /// True when any result is a synthesized placeholder. The order is
    /// degraded and must be explicitly acknowledged before use.
    pub incomplete: bool,
}
