//! # dl_core - Deterministic Draft Lottery Engine
//!
//! This library converts a league's reverse-standings order into a
//! legally-constrained, weighted-random draft order and reconciles it
//! against the pick-ownership ledger, with a JSON API for easy integration.
//!
//! ## Features
//! - 100% deterministic runs (same seed + same inputs = same result)
//! - Movement cap and worst-team floor protection enforced on every draw
//! - Trade-aware reconciliation: the lottery moves draft slots, never rights
//! - JSON API for easy integration

pub mod api;
pub mod error;
pub mod lottery;
pub mod models;
pub mod random;
pub mod reconcile;

// Re-export main API functions
pub use api::{run_lottery_json, LotteryRequest, LotteryResponse};
pub use error::{LotteryError, Result};
pub use lottery::{
    reveal_order, run_lottery_and_reconcile, LotteryDrawEngine, MAX_RISE, WORST_TEAM_FLOOR,
};
pub use reconcile::DraftOrderReconciler;

// Re-export the data model
pub use models::{
    FinalDraftOrder, LotteryOutcome, LotteryResult, OddsColumn, OddsRow, OddsTable, PickRecord,
    StandingsSlot, DEFAULT_LOTTERY_ODDS,
};
pub use random::{RandomSource, SeededSource};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
