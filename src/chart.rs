//! Chart-ready description of the indicator line chart, independent of any renderer.

use crate::indicators::Indicator;
use crate::models::CountrySeries;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceMode {
    Markers,
    LinesMarkers,
}

/// One line of the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub name: String,
    pub mode: TraceMode,
    pub x: Vec<i32>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub legend_title: String,
    pub traces: Vec<Trace>,
}

impl Figure {
    /// Build the figure for `indicator`, one trace per extracted series.
    ///
    /// Traces are lines+markers, except single-year series which get markers only.
    pub fn for_series(indicator: Indicator, series: &[CountrySeries]) -> Self {
        Figure {
            title: indicator.title(),
            x_axis_title: "Years".into(),
            y_axis_title: indicator.unit().unwrap_or_else(|| "Value".into()),
            legend_title: "Countries".into(),
            traces: series
                .iter()
                .map(|s| Trace {
                    name: s.country.clone(),
                    mode: if s.points.len() == 1 {
                        TraceMode::Markers
                    } else {
                        TraceMode::LinesMarkers
                    },
                    x: s.years(),
                    y: s.values(),
                })
                .collect(),
        }
    }

    /// Traces that have at least one point.
    pub fn drawable_traces(&self) -> impl Iterator<Item = &Trace> {
        self.traces.iter().filter(|t| !t.x.is_empty())
    }

    /// Inclusive (min, max) over all years of all traces.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let years = self.traces.iter().flat_map(|t| t.x.iter().copied());
        years.fold(None, |acc, y| match acc {
            None => Some((y, y)),
            Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
        })
    }

    /// Inclusive (min, max) over all values of all traces.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let values = self.traces.iter().flat_map(|t| t.y.iter().copied());
        values.fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    #[test]
    fn titles_follow_the_series_name() {
        let fig = Figure::for_series(Indicator::NetNationalIncomeUsd, &[]);
        assert_eq!(fig.title, "Adjusted Net National Income");
        assert_eq!(fig.y_axis_title, "Current US$");
        assert_eq!(fig.x_axis_title, "Years");
        assert!(fig.traces.is_empty());
        assert_eq!(fig.year_range(), None);

        let fig = Figure::for_series(Indicator::IncomeShareHighest10, &[]);
        assert_eq!(fig.y_axis_title, "Value");
    }

    #[test]
    fn ranges_span_all_traces() {
        let series = vec![
            CountrySeries {
                country: "A".into(),
                points: vec![Point { year: 2001, value: 5.0 }],
            },
            CountrySeries {
                country: "B".into(),
                points: vec![
                    Point { year: 1999, value: -1.0 },
                    Point { year: 2003, value: 2.0 },
                ],
            },
            CountrySeries {
                country: "C".into(),
                points: vec![],
            },
        ];
        let fig = Figure::for_series(Indicator::Unemployment, &series);
        assert_eq!(fig.traces.len(), 3);
        assert_eq!(fig.drawable_traces().count(), 2);
        assert_eq!(fig.year_range(), Some((1999, 2003)));
        assert_eq!(fig.value_range(), Some((-1.0, 5.0)));
        assert_eq!(fig.traces[0].mode, TraceMode::Markers);
        assert_eq!(fig.traces[1].mode, TraceMode::LinesMarkers);
    }
}
