//! Weighted lottery draw over the reverse-standings order.
//!
//! The engine draws the first two picks from weighted pools, applies the
//! league's movement constraints, protects the worst team's floor on the
//! third pick, and hands out the remaining positions deterministically.
//! All randomness flows through an injected [`RandomSource`], so a fixed
//! seed reproduces the draw exactly.

use std::collections::BTreeMap;

use tracing::warn;

use crate::error::{LotteryError, Result};
use crate::models::{validate_standings, LotteryResult, OddsColumn, OddsTable, StandingsSlot};
use crate::random::RandomSource;

/// Maximum number of positions a team may rise via the draw.
pub const MAX_RISE: u8 = 6;

/// The worst-ranked team can never fall below this draft slot.
pub const WORST_TEAM_FLOOR: u8 = 3;

pub struct LotteryDrawEngine;

impl LotteryDrawEngine {
    /// Runs the draw. Emits one result per standings slot; `final_position`
    /// values form a permutation of `1..=N`.
    pub fn run(
        standings: &[StandingsSlot],
        odds: &OddsTable,
        source: &mut dyn RandomSource,
    ) -> Result<Vec<LotteryResult>> {
        validate_standings(standings)?;
        odds.validate()?;
        if standings.len() < 3 {
            return Err(LotteryError::Configuration(format!(
                "lottery needs at least 3 eligible teams, got {}",
                standings.len()
            )));
        }
        if standings.len() != odds.size() {
            return Err(LotteryError::Configuration(format!(
                "standings have {} slots but the odds table has {} rows",
                standings.len(),
                odds.size()
            )));
        }
        let n = standings.len() as u8;
        for position in 1..=n {
            if odds.row(position).is_none() {
                return Err(LotteryError::Configuration(format!(
                    "no odds row for standings position {}",
                    position
                )));
            }
        }

        // original position -> final position
        let mut assigned: BTreeMap<u8, u8> = BTreeMap::new();
        // final position -> taken, index 0 unused
        let mut taken = vec![false; n as usize + 1];

        // First pick: weighted draw over every slot.
        let pool: Vec<u8> = (1..=n).collect();
        let first_winner = draw_weighted(&pool, odds, OddsColumn::FirstPick, source)?;
        let first_final = capped_rise(first_winner, 1);
        assigned.insert(first_winner, first_final);
        taken[first_final as usize] = true;

        // Second pick: first winner leaves the pool, floor is 2.
        let pool: Vec<u8> = (1..=n).filter(|&p| p != first_winner).collect();
        let second_winner = draw_weighted(&pool, odds, OddsColumn::SecondPick, source)?;
        let mut second_final = capped_rise(second_winner, 2);
        if second_final == first_final {
            // collision: the second winner lands one slot behind the first
            second_final += 1;
        }
        assigned.insert(second_winner, second_final);
        taken[second_final as usize] = true;

        // Third pick: floor protection for the worst team. No draw is run.
        let third_assignee = if first_winner == 1 || second_winner == 1 {
            // worst team already drew a top pick; the fallback goes to the
            // lowest remaining standings position
            (1..=n)
                .find(|p| !assigned.contains_key(p))
                .ok_or_else(|| {
                    LotteryError::Configuration("no slot left for the third pick".to_string())
                })?
        } else {
            1
        };
        // At most two positions are taken here, so the lowest free one is <= 3
        // and the worst team's floor holds by construction.
        let third_final = lowest_free(&taken, n);
        assigned.insert(third_assignee, third_final);
        taken[third_final as usize] = true;

        // Remaining slots take the remaining positions, worst record first.
        // Positions already parked below 3 by the movement cap are skipped,
        // which is what displaces later assignments after a collision.
        let free: Vec<u8> = (1..=n).filter(|&f| !taken[f as usize]).collect();
        let rest: Vec<u8> = (1..=n).filter(|p| !assigned.contains_key(p)).collect();
        for (&original, &final_position) in rest.iter().zip(free.iter()) {
            assigned.insert(original, final_position);
        }

        let mut results: Vec<LotteryResult> = assigned
            .iter()
            .map(|(&original, &final_position)| {
                let odds_used = odds.row(original).map(|r| r.first_pick_pct).unwrap_or(0.0);
                LotteryResult::new(original, final_position, odds_used)
            })
            .collect();

        // Defensive check: every final position must be covered. An upstream
        // data gap synthesizes a flagged placeholder instead of failing the run.
        let mut covered = vec![false; n as usize + 1];
        for result in &results {
            covered[result.final_position as usize] = true;
        }
        for final_position in 1..=n {
            if !covered[final_position as usize] {
                warn!(
                    final_position,
                    "no result for final position, synthesizing placeholder"
                );
                results.push(LotteryResult::placeholder(final_position));
            }
        }

        Ok(results)
    }
}

/// Movement cap: a winner rises at most [`MAX_RISE`] positions, and never
/// above the given floor.
fn capped_rise(position: u8, floor: u8) -> u8 {
    let rise = (position - 1).min(MAX_RISE);
    (position - rise).max(floor)
}

fn lowest_free(taken: &[bool], n: u8) -> u8 {
    (1..=n)
        .find(|&f| !taken[f as usize])
        .expect("fewer assignments than positions")
}

/// Draws one standings position from the pool, weighted by the given odds
/// column at one-decimal precision.
fn draw_weighted(
    pool: &[u8],
    odds: &OddsTable,
    column: OddsColumn,
    source: &mut dyn RandomSource,
) -> Result<u8> {
    let weights: Vec<u32> = pool
        .iter()
        .map(|&p| odds.row(p).map(|r| r.weight(column)).unwrap_or(0))
        .collect();
    let total: u32 = weights.iter().sum();
    if total == 0 {
        return Err(LotteryError::Configuration(format!(
            "{:?} draw pool has zero total weight",
            column
        )));
    }

    let roll = source.roll(total);
    let mut cumulative = 0u32;
    for (&position, &weight) in pool.iter().zip(&weights) {
        cumulative += weight;
        if roll < cumulative {
            return Ok(position);
        }
    }
    // roll < total and the weights sum to total, so the loop always returns
    unreachable!("weighted draw fell through its pool")
}
