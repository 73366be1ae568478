pub mod odds;
pub mod pick;
pub mod standings;

pub use odds::{OddsColumn, OddsRow, OddsTable, DEFAULT_LOTTERY_ODDS};
pub use pick::{FinalDraftOrder, LotteryOutcome, LotteryResult, PickRecord};
pub use standings::{validate_standings, StandingsSlot};
