//! Lottery odds configuration.
//!
//! An `OddsTable` is static league configuration: for every standings
//! position, the percentage chance of winning each of the three drawn picks.
//! Each column sums to 100 independently (one-decimal precision, small
//! rounding tolerance). Tables are plain data so a season can version its own.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{LotteryError, Result};

/// Percentages are stored with one-decimal precision; weights are the
/// percentages scaled by 10 so a draw pool can use integer arithmetic.
const WEIGHT_SCALE: f64 = 10.0;

/// Allowed drift of a column sum away from 100.0 (rounding tolerance).
const COLUMN_SUM_TOLERANCE: f64 = 0.5;

/// Which of the three drawn picks a draw is being run for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddsColumn {
    FirstPick,
    SecondPick,
    ThirdPick,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsRow {
    /// Standings position this row applies to (1 = worst record).
    pub position: u8,
    pub first_pick_pct: f64,
    pub second_pick_pct: f64,
    pub third_pick_pct: f64,
}

impl OddsRow {
    pub fn pct(&self, column: OddsColumn) -> f64 {
        match column {
            OddsColumn::FirstPick => self.first_pick_pct,
            OddsColumn::SecondPick => self.second_pick_pct,
            OddsColumn::ThirdPick => self.third_pick_pct,
        }
    }

    /// Integer draw weight for the given column.
    pub fn weight(&self, column: OddsColumn) -> u32 {
        (self.pct(column) * WEIGHT_SCALE).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsTable {
    pub rows: Vec<OddsRow>,
}

impl OddsTable {
    pub fn new(rows: Vec<OddsRow>) -> Self {
        Self { rows }
    }

    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, position: u8) -> Option<&OddsRow> {
        self.rows.iter().find(|r| r.position == position)
    }

    /// Checks per-row percentage ranges and that every column sums to
    /// 100 within the rounding tolerance.
    pub fn validate(&self) -> Result<()> {
        if self.rows.is_empty() {
            return Err(LotteryError::Configuration("odds table is empty".to_string()));
        }

        for row in &self.rows {
            for column in [OddsColumn::FirstPick, OddsColumn::SecondPick, OddsColumn::ThirdPick] {
                let pct = row.pct(column);
                if !(0.0..=100.0).contains(&pct) {
                    return Err(LotteryError::Configuration(format!(
                        "odds for position {} out of range: {}",
                        row.position, pct
                    )));
                }
            }
        }

        for column in [OddsColumn::FirstPick, OddsColumn::SecondPick, OddsColumn::ThirdPick] {
            let sum: f64 = self.rows.iter().map(|r| r.pct(column)).sum();
            if (sum - 100.0).abs() > COLUMN_SUM_TOLERANCE {
                return Err(LotteryError::Configuration(format!(
                    "{:?} odds sum to {:.1}, expected 100.0",
                    column, sum
                )));
            }
        }
        Ok(())
    }
}

/// Default 16-team odds table (league rulebook constant).
///
/// Position 1 is the worst record. Each column sums to exactly 100.0 at
/// one-decimal precision.
pub static DEFAULT_LOTTERY_ODDS: Lazy<OddsTable> = Lazy::new(|| {
    const ROWS: [(f64, f64, f64); 16] = [
        (25.0, 21.5, 17.8),
        (19.9, 18.8, 16.5),
        (15.6, 15.7, 14.8),
        (11.9, 12.6, 12.7),
        (8.8, 9.7, 10.4),
        (6.3, 7.1, 8.0),
        (4.4, 5.0, 5.9),
        (3.0, 3.5, 4.2),
        (2.0, 2.4, 3.0),
        (1.3, 1.6, 2.2),
        (0.7, 0.9, 1.6),
        (0.4, 0.5, 1.1),
        (0.3, 0.3, 0.7),
        (0.2, 0.2, 0.5),
        (0.1, 0.1, 0.4),
        (0.1, 0.1, 0.2),
    ];

    OddsTable::new(
        ROWS.iter()
            .enumerate()
            .map(|(i, &(first, second, third))| OddsRow {
                position: (i + 1) as u8,
                first_pick_pct: first,
                second_pick_pct: second,
                third_pick_pct: third,
            })
            .collect(),
    )
});
