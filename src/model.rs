/// A state-level region: population plus its elector allocation.
#[derive(Debug, Clone)]
pub struct State {
    pub name: String,
    pub population: u64,
    pub electors: u16,
}

/// A metro-area region. Cities carry no electors.
#[derive(Debug, Clone)]
pub struct City {
    pub name: String,
    pub population: u64,
}

/// The loaded dataset plus the derived national total, built once at
/// startup and passed by reference into every report function.
#[derive(Debug, Clone)]
pub struct Electorate {
    pub states: Vec<State>,
    pub cities: Vec<City>,
    /// Sum of all *state* populations. City shares are computed against
    /// this total as well; the cross-category ratio is intentional.
    pub total_population: u64,
}

impl Electorate {
    pub fn new(states: Vec<State>, cities: Vec<City>) -> Electorate {
        let total_population = states.iter().map(|s| s.population).sum();
        Electorate {
            states,
            cities,
            total_population,
        }
    }

    /// Total elector count across every state.
    pub fn total_electors(&self) -> u32 {
        self.states.iter().map(|s| u32::from(s.electors)).sum()
    }
}
