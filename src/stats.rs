use crate::models::{CountrySeries, Point};
use serde::{Deserialize, Serialize};

/// Summary statistics for one country's series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub country: String,
    pub count: usize,
    pub min: Point,
    pub max: Point,
    pub mean: f64,
}

/// Compute per-country min, max (with their years) and mean.
///
/// When an extreme value occurs in several years the earliest year wins. Empty series
/// produce no summary.
pub fn summarize(series: &[CountrySeries]) -> Vec<Summary> {
    series.iter().filter_map(summarize_one).collect()
}

fn summarize_one(series: &CountrySeries) -> Option<Summary> {
    // points are ascending by year, so strict comparisons keep the earliest year on ties
    let mut points = series.points.iter().copied();
    let first = points.next()?;
    let (mut min, mut max, mut sum, mut count) = (first, first, first.value, 1usize);
    for p in points {
        if p.value < min.value {
            min = p;
        }
        if p.value > max.value {
            max = p;
        }
        sum += p.value;
        count += 1;
    }
    Some(Summary {
        country: series.country.clone(),
        count,
        min,
        max,
        mean: sum / count as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(country: &str, pts: &[(i32, f64)]) -> CountrySeries {
        CountrySeries {
            country: country.into(),
            points: pts
                .iter()
                .map(|&(year, value)| Point { year, value })
                .collect(),
        }
    }

    #[test]
    fn ties_pick_earliest_year() {
        let got = summarize(&[series("X", &[(2000, 3.0), (2001, 1.0), (2002, 3.0), (2003, 1.0)])]);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].min, Point { year: 2001, value: 1.0 });
        assert_eq!(got[0].max, Point { year: 2000, value: 3.0 });
        assert_eq!(got[0].mean, 2.0);
        assert_eq!(got[0].count, 4);
    }

    #[test]
    fn empty_series_is_skipped() {
        let got = summarize(&[series("Empty", &[]), series("One", &[(1999, -4.5)])]);
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].country, "One");
        assert_eq!(got[0].min, got[0].max);
    }
}
