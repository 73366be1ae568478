pub mod json_api;

pub use json_api::{run_lottery_json, LotteryRequest, LotteryResponse};
