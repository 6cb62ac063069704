//! Lazy Markdown table generation.
//!
//! Each function returns a fresh iterator over formatted rows (header
//! lines first), recomputed from the electorate on every call.

use crate::model::Electorate;
use crate::util::{display_name, format_number, format_percent};
use itertools::Itertools;

/// How many states the minority-win table lists: the smallest set assumed
/// to carry an elector majority.
pub const MINORITY_WIN_STATES: usize = 11;

const CITIES_HEADER: [&str; 2] = [
    "|Metro Region|Population|Total Population|Total Share|",
    "|:-----------|---------:|---------------:|----------:|",
];

const MINORITY_WIN_HEADER: [&str; 2] = [
    "|State|Population|Majority|Total Voters|% of pop.|Electors|Total Electors|",
    "|:----|---------:|-------:|-----------:|--------:|-------:|-------------:|",
];

/// Metro areas by population, most populous first, with a running
/// population total and its share of the *national* (state) total.
pub fn top_cities(electorate: &Electorate) -> impl Iterator<Item = String> + '_ {
    let total = electorate.total_population;
    let mut running = 0u64;

    let rows = electorate
        .cities
        .iter()
        .sorted_by(|a, b| b.population.cmp(&a.population))
        .map(move |city| {
            running += city.population;
            format!(
                "|{}|{}|{}|{}|",
                display_name(&city.name),
                format_number(city.population),
                format_number(running),
                format_percent(running as f64 / total as f64),
            )
        });

    CITIES_HEADER.iter().map(|s| s.to_string()).chain(rows)
}

/// The eleven most populous states with, per rank, the smallest strict
/// majority (`pop / 2 + 1`), the running sum of those majorities and its
/// share of the national total, and the running elector count.
pub fn minority_win(electorate: &Electorate) -> impl Iterator<Item = String> + '_ {
    let total = electorate.total_population;
    let mut running_majority = 0u64;
    let mut running_electors = 0u32;

    let rows = electorate
        .states
        .iter()
        .sorted_by(|a, b| b.population.cmp(&a.population))
        .take(MINORITY_WIN_STATES)
        .map(move |state| {
            let majority = state.population / 2 + 1;
            running_majority += majority;
            running_electors += u32::from(state.electors);
            format!(
                "|{}|{}|{}|{}|{}|{}|{}|",
                display_name(&state.name),
                format_number(state.population),
                format_number(majority),
                format_number(running_majority),
                format_percent(running_majority as f64 / total as f64),
                state.electors,
                running_electors,
            )
        });

    MINORITY_WIN_HEADER.iter().map(|s| s.to_string()).chain(rows)
}
