//! Inline summary figures.
//!
//! Companion numbers for the tables: the total votes in the smallest
//! state set that carries an elector majority, and the composite showing
//! a popular-vote/elector-vote split. Both are pure aggregates over the
//! loaded electorate.

use super::{ReportError, ReportResult};
use crate::model::Electorate;
use crate::reports::tables::MINORITY_WIN_STATES;
use crate::util::{format_number, format_percent};
use serde::Serialize;
use std::fmt;

/// The fixed size of the state collection the boundary indices below
/// assume (50 states plus DC).
const EXPECTED_STATES: usize = 51;

/// A raw vote count paired with its share of the national total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Figure {
    pub value: u64,
    pub share: f64,
}

impl Figure {
    fn of(value: u64, total: u64) -> Figure {
        Figure {
            value,
            share: value as f64 / total as f64,
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", format_number(self.value), format_percent(self.share))
    }
}

fn require_states(electorate: &Electorate) -> ReportResult<()> {
    if electorate.states.len() < EXPECTED_STATES {
        return Err(ReportError::InsufficientStates {
            needed: EXPECTED_STATES,
            have: electorate.states.len(),
        });
    }
    Ok(())
}

/// Strict majorities (`pop / 2 + 1`) for every state, largest first.
fn sorted_majorities(electorate: &Electorate) -> Vec<u64> {
    let mut majorities: Vec<u64> = electorate
        .states
        .iter()
        .map(|s| s.population / 2 + 1)
        .collect();
    majorities.sort_unstable_by(|a, b| b.cmp(a));
    majorities
}

/// Two figures: the sum of the 11 largest per-state majorities (the
/// fewest voters that can carry an elector majority), and the sum of the
/// majorities at ranks 10..=50 (the fewest voters that can swing every
/// remaining contest). The rank-10 overlap comes from the source data
/// analysis and is kept as is.
pub fn minority_win(electorate: &Electorate) -> ReportResult<(Figure, Figure)> {
    require_states(electorate)?;
    let majorities = sorted_majorities(electorate);
    let total = electorate.total_population;

    let winning: u64 = majorities[..MINORITY_WIN_STATES].iter().sum();
    let remaining: u64 = majorities[10..=50].iter().sum();

    Ok((Figure::of(winning, total), Figure::of(remaining, total)))
}

/// The composite demonstrating an elector win without a popular
/// majority: full populations of the 10 most populous states and of the
/// 13th, plus a bare minority (`pop / 2 - 1`) in every other state. The
/// boundary indices (10th and 13th) are fixed; moving them changes the
/// claim the figure demonstrates.
pub fn majority_loss(electorate: &Electorate) -> ReportResult<Figure> {
    require_states(electorate)?;
    let mut populations: Vec<u64> = electorate.states.iter().map(|s| s.population).collect();
    populations.sort_unstable_by(|a, b| b.cmp(a));

    let mut total: u64 = populations[..10].iter().sum::<u64>() + populations[12];
    total += populations[10..12].iter().map(|p| p / 2 - 1).sum::<u64>();
    total += populations[13..=50].iter().map(|p| p / 2 - 1).sum::<u64>();

    Ok(Figure::of(total, electorate.total_population))
}
