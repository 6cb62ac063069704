//! Dataset loading.
//!
//! The electorate lives in a single TOML file with two tables: `[states]`
//! maps a state name to its population and elector count, `[cities]` maps
//! a metro-area name straight to its population. Underscores in names
//! stand in for spaces and are replaced at render time.

use crate::model::{City, Electorate, State};
use crate::reports::ReportResult;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawDataset {
    states: BTreeMap<String, RawState>,
    cities: BTreeMap<String, u64>,
}

#[derive(Debug, Deserialize)]
struct RawState {
    pop: u64,
    electors: u16,
}

/// Read and parse the dataset file, then derive the national total.
pub fn load(path: &Path) -> ReportResult<Electorate> {
    let content = fs::read_to_string(path)?;
    let raw: RawDataset = toml::from_str(&content)?;

    let states = raw
        .states
        .into_iter()
        .map(|(name, s)| State {
            name,
            population: s.pop,
            electors: s.electors,
        })
        .collect();

    let cities = raw
        .cities
        .into_iter()
        .map(|(name, population)| City { name, population })
        .collect();

    Ok(Electorate::new(states, cities))
}
