//! findash
//!
//! Library behind a small country financial indicator dashboard: pick one of a fixed set
//! of World Bank indicators and a set of countries, get a line chart and per-country
//! summary cards. Pairs with the `findash` CLI and the `findash-gui` desktop app.
//!
//! ### Features
//! - Load the cleaned indicator table (wide CSV, one column per year) once at startup
//! - Extract year-ordered series per country for one indicator
//! - Per-country min/max (with year) and mean
//! - Session selection with accumulate/reset semantics
//! - Chart-ready figures, SVG/PNG rendering, text cards, CSV/JSON export
//!
//! ### Example
//! ```no_run
//! use findash::{IndicatorTable, Indicator, series, stats};
//!
//! let table = IndicatorTable::load("Cleaned_Data.csv")?;
//! let data = series::extract(&table, "Net National Income (USD)", &["Egypt, Arab Rep."])?;
//! let cards = stats::summarize(&data);
//! let figure = findash::Figure::for_series(Indicator::NetNationalIncomeUsd, &data);
//! findash::viz::plot_figure(&figure, "egypt.svg", 1000, 600, "en")?;
//! println!("{:#?}", cards);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cards;
pub mod chart;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod indicators;
pub mod models;
pub mod regions;
pub mod selection;
pub mod series;
pub mod stats;
pub mod storage;
pub mod viz;

pub use chart::Figure;
pub use dashboard::{Dashboard, Session, UpdateRequest, UpdateResponse};
pub use dataset::IndicatorTable;
pub use error::{Error, Result};
pub use indicators::Indicator;
pub use models::{CountrySeries, Point};
pub use regions::Region;
pub use selection::SelectionState;
