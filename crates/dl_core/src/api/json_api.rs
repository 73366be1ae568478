use serde::{Deserialize, Serialize};

use crate::error::{LotteryError, Result};
use crate::lottery::run_lottery_and_reconcile;
use crate::models::{
    FinalDraftOrder, LotteryResult, OddsTable, PickRecord, StandingsSlot, DEFAULT_LOTTERY_ODDS,
};
use crate::random::SeededSource;
use crate::SCHEMA_VERSION;

#[derive(Debug, Deserialize)]
pub struct LotteryRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub standings: Vec<StandingsSlot>,
    /// League odds table; the default 16-team table is used when omitted.
    #[serde(default)]
    pub odds: Option<OddsTable>,
    pub ledger: Vec<PickRecord>,
    #[serde(default = "default_lottery_round")]
    pub lottery_round: u8,
}

fn default_lottery_round() -> u8 {
    1
}

#[derive(Debug, Serialize)]
pub struct LotteryResponse {
    pub schema_version: u8,
    pub results: Vec<LotteryResult>,
    pub final_order: FinalDraftOrder,
    pub incomplete: bool,
}

/// JSON entry point: runs the draw and reconciliation for a
/// [`LotteryRequest`] and returns a serialized [`LotteryResponse`].
pub fn run_lottery_json(request_json: &str) -> Result<String> {
    let request: LotteryRequest = serde_json::from_str(request_json)?;
    if request.schema_version != SCHEMA_VERSION {
        return Err(LotteryError::Configuration(format!(
            "unsupported schema_version {}, expected {}",
            request.schema_version, SCHEMA_VERSION
        )));
    }

    let odds = request.odds.unwrap_or_else(|| DEFAULT_LOTTERY_ODDS.clone());
    let mut source = SeededSource::from_seed(request.seed);
    let outcome = run_lottery_and_reconcile(
        &request.standings,
        &odds,
        &request.ledger,
        request.lottery_round,
        &mut source,
    )?;

    let response = LotteryResponse {
        schema_version: SCHEMA_VERSION,
        results: outcome.results,
        final_order: outcome.final_order,
        incomplete: outcome.incomplete,
    };
    Ok(serde_json::to_string(&response)?)
}
