//! Running country selection of one dashboard session.
//!
//! Every update event either resets the selection (when the reset button count moved past
//! the stored counter) or merges the picked countries into it.

use serde::{Deserialize, Serialize};

/// Country selected when a session starts.
pub const DEFAULT_COUNTRY: &str = "Egypt, Arab Rep.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredSelection")]
pub struct SelectionState {
    countries: Vec<String>,
    reset_counter: u64,
}

/// Serialized form; deserializing goes through [`SelectionState::new`] so duplicates drop out.
#[derive(Deserialize)]
struct StoredSelection {
    countries: Vec<String>,
    #[serde(default)]
    reset_counter: u64,
}

impl From<StoredSelection> for SelectionState {
    fn from(stored: StoredSelection) -> Self {
        let mut state = SelectionState::new(stored.countries);
        state.reset_counter = stored.reset_counter;
        state
    }
}

/// What an update event did to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Selection cleared; the stored counter is now `counter`.
    Reset { counter: u64 },
    /// `added` new countries were appended.
    Accumulated { added: usize },
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new([DEFAULT_COUNTRY])
    }
}

impl SelectionState {
    /// Start a selection with `countries` (duplicates dropped) and counter 0.
    pub fn new<I, S>(countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut state = Self {
            countries: Vec::new(),
            reset_counter: 0,
        };
        for c in countries {
            state.push(c.into());
        }
        state
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn reset_counter(&self) -> u64 {
        self.reset_counter
    }

    pub fn contains(&self, country: &str) -> bool {
        self.countries.iter().any(|c| c == country)
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Apply one update event and return the resulting state.
    ///
    /// A `reset_signal` strictly greater than the stored counter clears the selection and
    /// ignores `picks` for this event. Otherwise (including a signal equal to the counter)
    /// every picked country not yet selected is appended in order of first appearance.
    pub fn apply(&self, picks: &[Vec<String>], reset_signal: Option<u64>) -> (Self, Transition) {
        if let Some(signal) = reset_signal
            && signal > self.reset_counter
        {
            let next = Self {
                countries: Vec::new(),
                reset_counter: signal,
            };
            return (next, Transition::Reset { counter: signal });
        }

        let mut next = self.clone();
        let before = next.countries.len();
        for country in picks.iter().flatten() {
            next.push(country.clone());
        }
        let added = next.countries.len() - before;
        (next, Transition::Accumulated { added })
    }

    fn push(&mut self, country: String) {
        if !self.contains(&country) {
            self.countries.push(country);
        }
    }
}
