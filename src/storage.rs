use crate::indicators::Indicator;
use crate::models::CountrySeries;
use anyhow::{Context, Result};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Prefix text cells that a spreadsheet would evaluate as a formula.
fn sanitize_cell(s: &str) -> String {
    match s.chars().next() {
        Some('=' | '+' | '-' | '@') => format!("'{s}"),
        _ => s.to_string(),
    }
}

/// Save extracted series as tidy CSV (`country,indicator,year,value`) with header.
pub fn save_series_csv<P: AsRef<Path>>(
    indicator: Indicator,
    series: &[CountrySeries],
    path: P,
) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;
    wtr.write_record(["country", "indicator", "year", "value"])?;
    let indicator_name = sanitize_cell(indicator.series_name());
    for s in series {
        let country = sanitize_cell(&s.country);
        for p in &s.points {
            wtr.serialize((&country, &indicator_name, p.year, p.value))?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Save any serializable value (typically an update response) as pretty JSON.
pub fn save_json<T: Serialize + ?Sized, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let s = serde_json::to_string_pretty(value)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
