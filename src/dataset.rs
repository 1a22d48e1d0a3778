//! In-memory indicator table loaded once from the cleaned CSV.
//!
//! Expected layout (wide, one row per country and series):
//!
//! ```text
//! Country Name,Series Name,2010,2011,2012
//! "Egypt, Arab Rep.",Adjusted net national income (current US$),1.8e11,2.0e11,..
//! ```
//!
//! Year headers may also use the World Bank export style `2010 [YR2010]`. Optional
//! `Country Code` and `Series Code` columns are ignored. Missing cells are empty, `..`
//! or `nan`.

use crate::error::{Error, Result};
use crate::indicators::Indicator;
use ahash::AHashMap;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{info, warn};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

const COUNTRY_COLUMN: &str = "Country Name";
const SERIES_COLUMN: &str = "Series Name";
const IGNORED_COLUMNS: [&str; 2] = ["Country Code", "Series Code"];

static YEAR_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})(?:\s*\[YR\d{4}\])?$").expect("valid year regex"));

/// Values per year for one (country, indicator) row. Years with missing cells are absent.
pub type YearValues = BTreeMap<i32, f64>;

#[derive(Debug, Clone, Default)]
pub struct IndicatorTable {
    // series name -> country -> year -> value
    rows: AHashMap<String, AHashMap<String, YearValues>>,
    countries: BTreeSet<String>,
    years: BTreeSet<i32>,
}

/// Column positions resolved once from the header row.
struct Layout {
    country: usize,
    series: usize,
    years: Vec<(usize, i32)>,
}

impl IndicatorTable {
    /// Load the table from a CSV file. Any failure here is meant to abort startup.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file)?;
        info!(
            "loaded {} rows ({} observations, {} countries, years {:?}) from {}",
            table.row_count(),
            table.observation_count(),
            table.countries.len(),
            table.year_span(),
            path.display()
        );
        for indicator in table.missing_indicators() {
            warn!(
                "indicator {:?} ({}) has no rows in {}",
                indicator.label(),
                indicator.series_name(),
                path.display()
            );
        }
        Ok(table)
    }

    /// Parse the table from any CSV source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
        let layout = classify_headers(rdr.headers()?)?;

        let mut table = IndicatorTable::default();
        table.years.extend(layout.years.iter().map(|&(_, year)| year));
        for record in rdr.records() {
            table.insert_record(&layout, &record?)?;
        }
        if table.rows.is_empty() {
            return Err(Error::EmptyTable);
        }
        Ok(table)
    }

    fn insert_record(&mut self, layout: &Layout, record: &StringRecord) -> Result<()> {
        // the reader rejects rows whose length differs from the header
        let country = record.get(layout.country).unwrap_or_default();
        let series = record.get(layout.series).unwrap_or_default();

        let mut values = YearValues::new();
        for &(idx, year) in &layout.years {
            let cell = record.get(idx).unwrap_or_default();
            if is_missing(cell) {
                continue;
            }
            let value = cell.parse::<f64>().map_err(|_| Error::InvalidValue {
                country: country.to_string(),
                indicator: series.to_string(),
                year,
                value: cell.to_string(),
            })?;
            if value.is_finite() {
                values.insert(year, value);
            }
        }

        let by_country = self.rows.entry(series.to_string()).or_default();
        if by_country.contains_key(country) {
            return Err(Error::DuplicateRow {
                country: country.to_string(),
                indicator: series.to_string(),
            });
        }
        by_country.insert(country.to_string(), values);
        self.countries.insert(country.to_string());
        Ok(())
    }

    /// Yearly values of `country` for `indicator`, or `None` when the table has no such row.
    ///
    /// A row whose cells are all missing yields `Some` of an empty map.
    pub fn values(&self, indicator: Indicator, country: &str) -> Option<&YearValues> {
        self.rows.get(indicator.series_name())?.get(country)
    }

    pub fn has_indicator(&self, indicator: Indicator) -> bool {
        self.rows.contains_key(indicator.series_name())
    }

    /// Catalogue indicators for which the table has no rows at all.
    pub fn missing_indicators(&self) -> Vec<Indicator> {
        Indicator::ALL
            .into_iter()
            .filter(|i| !self.has_indicator(*i))
            .collect()
    }

    /// All country names, sorted.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.iter().map(String::as_str)
    }

    /// First and last year column, if the table has any.
    pub fn year_span(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }

    pub fn row_count(&self) -> usize {
        self.rows.values().map(|by_country| by_country.len()).sum()
    }

    pub fn observation_count(&self) -> usize {
        self.rows
            .values()
            .flat_map(|by_country| by_country.values())
            .map(BTreeMap::len)
            .sum()
    }
}

fn classify_headers(headers: &StringRecord) -> Result<Layout> {
    let mut country = None;
    let mut series = None;
    let mut years: Vec<(usize, i32)> = Vec::new();
    for (idx, header) in headers.iter().enumerate() {
        match header {
            COUNTRY_COLUMN => set_key_column(&mut country, idx, COUNTRY_COLUMN)?,
            SERIES_COLUMN => set_key_column(&mut series, idx, SERIES_COLUMN)?,
            h if IGNORED_COLUMNS.contains(&h) => {}
            h => {
                let year = YEAR_HEADER
                    .captures(h)
                    .and_then(|c| c[1].parse::<i32>().ok())
                    .ok_or_else(|| Error::InvalidYearColumn(h.to_string()))?;
                // "2000" and "2000 [YR2000]" name the same year
                if years.iter().any(|&(_, y)| y == year) {
                    return Err(Error::DuplicateYearColumn(year));
                }
                years.push((idx, year));
            }
        }
    }
    Ok(Layout {
        country: country.ok_or(Error::MissingColumn(COUNTRY_COLUMN))?,
        series: series.ok_or(Error::MissingColumn(SERIES_COLUMN))?,
        years,
    })
}

fn set_key_column(slot: &mut Option<usize>, idx: usize, name: &'static str) -> Result<()> {
    if slot.replace(idx).is_some() {
        return Err(Error::DuplicateColumn(name));
    }
    Ok(())
}

fn is_missing(cell: &str) -> bool {
    cell.is_empty() || cell == ".." || cell.eq_ignore_ascii_case("nan")
}
