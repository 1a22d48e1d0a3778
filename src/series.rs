use crate::dataset::IndicatorTable;
use crate::error::Result;
use crate::indicators::Indicator;
use crate::models::{CountrySeries, Point};
use std::collections::HashSet;

/// Extract one series per requested country for the indicator with display key `indicator`.
///
/// Countries without a row for that indicator are left out. The result keeps the request
/// order, with repeated countries listed once.
///
/// ### Errors
/// `Error::UnknownIndicator` when `indicator` is not a catalogue key.
pub fn extract<S: AsRef<str>>(
    table: &IndicatorTable,
    indicator: &str,
    countries: &[S],
) -> Result<Vec<CountrySeries>> {
    let indicator: Indicator = indicator.parse()?;
    Ok(extract_indicator(table, indicator, countries))
}

/// Same as [`extract`] for an already validated indicator.
pub fn extract_indicator<S: AsRef<str>>(
    table: &IndicatorTable,
    indicator: Indicator,
    countries: &[S],
) -> Vec<CountrySeries> {
    let mut seen = HashSet::new();
    countries
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|c| seen.insert(*c))
        .filter_map(|country| {
            let values = table.values(indicator, country)?;
            Some(CountrySeries {
                country: country.to_string(),
                points: values
                    .iter()
                    .map(|(&year, &value)| Point { year, value })
                    .collect(),
            })
        })
        .collect()
}
