//! The dashboard update handler: selection transition, extraction, summary and chart in one
//! call.
//!
//! ### Example
//! ```no_run
//! use findash::dashboard::{Dashboard, UpdateRequest};
//! use findash::SelectionState;
//!
//! let dashboard = Dashboard::load("Cleaned_Data.csv")?;
//! let state = SelectionState::default();
//! let request = UpdateRequest {
//!     indicator: "Net National Income (USD)".into(),
//!     picks: vec![vec!["Morocco".into()]],
//!     reset_clicks: None,
//! };
//! let (state, response) = dashboard.update(&state, &request)?;
//! assert_eq!(state.countries(), ["Egypt, Arab Rep.", "Morocco"]);
//! println!("{} cards", response.cards.len());
//! # Ok::<(), findash::Error>(())
//! ```

use crate::chart::Figure;
use crate::dataset::IndicatorTable;
use crate::error::Result;
use crate::indicators::Indicator;
use crate::selection::{SelectionState, Transition};
use crate::series::extract_indicator;
use crate::stats::{Summary, summarize};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

/// One user interaction as delivered by a frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    /// Indicator display key, e.g. "Consumer Prices Inflation".
    pub indicator: String,
    /// Current picks of every country group, in group order.
    #[serde(default)]
    pub picks: Vec<Vec<String>>,
    /// How often the reset button has been clicked so far.
    #[serde(default)]
    pub reset_clicks: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub indicator: Indicator,
    pub selection: Vec<String>,
    pub figure: Figure,
    pub cards: Vec<Summary>,
}

/// Read-only access to the indicator table plus the pure update logic.
#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<IndicatorTable>,
}

impl Dashboard {
    pub fn new(table: IndicatorTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Load the table from `path`; failure is fatal for a dashboard process.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        IndicatorTable::load(path).map(Self::new)
    }

    pub fn table(&self) -> &IndicatorTable {
        &self.table
    }

    /// Handle one update event against `state` and return the next state with the view.
    ///
    /// The indicator is validated before anything else; on error the caller keeps `state`.
    pub fn update(
        &self,
        state: &SelectionState,
        request: &UpdateRequest,
    ) -> Result<(SelectionState, UpdateResponse)> {
        let indicator: Indicator = request.indicator.parse().inspect_err(|e| {
            warn!("rejected update: {e}");
        })?;

        let (next, transition) = state.apply(&request.picks, request.reset_clicks);
        match transition {
            Transition::Reset { counter } => debug!("selection reset (counter {counter})"),
            Transition::Accumulated { added } => debug!(
                "selection += {added} ({} total)",
                next.countries().len()
            ),
        }

        let response = self.view(indicator, next.countries());
        Ok((next, response))
    }

    /// Build the chart and cards for `countries` without touching any selection.
    pub fn view(&self, indicator: Indicator, countries: &[String]) -> UpdateResponse {
        let series = extract_indicator(&self.table, indicator, countries);
        let cards = summarize(&series);
        UpdateResponse {
            indicator,
            selection: countries.to_vec(),
            figure: Figure::for_series(indicator, &series),
            cards,
        }
    }
}

/// A dashboard with its own selection, safe to update from several threads.
///
/// Updates are serialized so a reset and a pick arriving together cannot interleave.
#[derive(Debug)]
pub struct Session {
    dashboard: Dashboard,
    state: Mutex<SelectionState>,
}

impl Session {
    pub fn new(dashboard: Dashboard, initial: SelectionState) -> Self {
        Self {
            dashboard,
            state: Mutex::new(initial),
        }
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Snapshot of the current selection.
    pub fn selection(&self) -> SelectionState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `request` to the stored selection; on error the selection is unchanged.
    pub fn update(&self, request: &UpdateRequest) -> Result<UpdateResponse> {
        // the state is only ever replaced whole, so a poisoned lock still guards a valid value
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let (next, response) = self.dashboard.update(&guard, request)?;
        *guard = next;
        Ok(response)
    }
}
