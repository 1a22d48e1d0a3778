use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the indicator table or answering a dashboard request.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested indicator key is not part of the fixed catalogue.
    #[error("unknown indicator: {0:?}")]
    UnknownIndicator(String),

    #[error("failed to read indicator table {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed indicator table: {0}")]
    Csv(#[from] csv::Error),

    #[error("indicator table is missing the {0:?} column")]
    MissingColumn(&'static str),

    /// A key column appears more than once in the header.
    #[error("indicator table has more than one {0:?} column")]
    DuplicateColumn(&'static str),

    /// Two year columns resolve to the same year, e.g. `2000` and `2000 [YR2000]`.
    #[error("indicator table has more than one column for year {0}")]
    DuplicateYearColumn(i32),

    /// A header that is neither a key column nor a year.
    #[error("column {0:?} is not a year (expected YYYY or YYYY [YRYYYY])")]
    InvalidYearColumn(String),

    #[error("invalid value {value:?} for {country} / {indicator} in {year}")]
    InvalidValue {
        country: String,
        indicator: String,
        year: i32,
        value: String,
    },

    /// The same (country, indicator) pair appears on two rows.
    #[error("duplicate row for {country} / {indicator}")]
    DuplicateRow { country: String, indicator: String },

    #[error("indicator table has no rows")]
    EmptyTable,
}

pub type Result<T> = std::result::Result<T, Error>;
