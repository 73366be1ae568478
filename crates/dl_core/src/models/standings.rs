//! Pre-lottery standings input.
//!
//! A `StandingsSlot` is one lottery-eligible team's position before the draw,
//! in reverse-standings order (position 1 = worst record). The `team_id` is
//! display-only; pick ownership is resolved separately against the ledger.

use serde::{Deserialize, Serialize};

use crate::error::{LotteryError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsSlot {
    /// 1-based reverse-standings position (1 = worst record).
    pub original_position: u8,
    /// Opaque team identifier, display only.
    pub team_id: String,
}

impl StandingsSlot {
    pub fn new(original_position: u8, team_id: impl Into<String>) -> Self {
        Self { original_position, team_id: team_id.into() }
    }
}

/// Checks that standings positions are exactly `1..=N`, no gaps, no duplicates.
pub fn validate_standings(standings: &[StandingsSlot]) -> Result<()> {
    if standings.is_empty() {
        return Err(LotteryError::Configuration("standings are empty".to_string()));
    }
    if standings.len() > u8::MAX as usize {
        return Err(LotteryError::Configuration(format!(
            "too many standings slots: {}",
            standings.len()
        )));
    }

    let n = standings.len() as u8;
    let mut seen = vec![false; standings.len()];
    for slot in standings {
        if slot.original_position < 1 || slot.original_position > n {
            return Err(LotteryError::Configuration(format!(
                "standings position {} is outside 1..={}",
                slot.original_position, n
            )));
        }
        let idx = (slot.original_position - 1) as usize;
        if seen[idx] {
            return Err(LotteryError::Configuration(format!(
                "duplicate standings position {}",
                slot.original_position
            )));
        }
        seen[idx] = true;
    }
    // len == n and all positions in range with no duplicates implies no gaps
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots(positions: &[u8]) -> Vec<StandingsSlot> {
        positions
            .iter()
            .map(|&p| StandingsSlot::new(p, format!("team_{:02}", p)))
            .collect()
    }

    #[test]
    fn test_contiguous_standings_are_valid() {
        assert!(validate_standings(&slots(&[1, 2, 3, 4])).is_ok());
        // order of the input vector does not matter
        assert!(validate_standings(&slots(&[3, 1, 4, 2])).is_ok());
    }

    #[test]
    fn test_empty_standings_rejected() {
        assert!(matches!(
            validate_standings(&[]),
            Err(LotteryError::Configuration(_))
        ));
    }

    #[test]
    fn test_gap_rejected() {
        // positions 1,2,4 of 3 slots: 4 is out of range
        assert!(validate_standings(&slots(&[1, 2, 4])).is_err());
    }

    #[test]
    fn test_duplicate_rejected() {
        assert!(validate_standings(&slots(&[1, 2, 2, 4])).is_err());
    }

    #[test]
    fn test_zero_position_rejected() {
        assert!(validate_standings(&slots(&[0, 1, 2])).is_err());
    }
}
