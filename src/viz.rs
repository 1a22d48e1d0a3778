//! Render a [`Figure`] to **SVG** or **PNG** with plotters.
//!
//! - One Office palette colour per country, lines with circular markers
//! - Large magnitudes scaled to thousands/millions/billions/trillions (never percentages)
//! - Locale-aware tick labels
//!
//! The `ab_glyph` text path does not discover OS fonts, so a TrueType font is registered
//! on first use: `FINDASH_FONT` if set, otherwise the first of a few common system paths.

use crate::cards::format_value;
use crate::chart::{Figure, TraceMode};
use crate::config::FONT_PATH_ENV;
use anyhow::{Result, anyhow};
use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT: OnceLock<std::result::Result<PathBuf, String>> = OnceLock::new();

/// Microsoft Office (2013+) chart series palette.
const OFFICE10: [RGBColor; 10] = [
    RGBColor(68, 114, 196),  // blue      (#4472C4)
    RGBColor(237, 125, 49),  // orange    (#ED7D31)
    RGBColor(165, 165, 165), // gray      (#A5A5A5)
    RGBColor(255, 192, 0),   // gold      (#FFC000)
    RGBColor(91, 155, 213),  // light blue(#5B9BD5)
    RGBColor(112, 173, 71),  // green     (#70AD47)
    RGBColor(38, 68, 120),   // dark blue (#264478)
    RGBColor(158, 72, 14),   // dark org. (#9E480E)
    RGBColor(99, 99, 99),    // dark gray (#636363)
    RGBColor(153, 115, 0),   // brownish  (#997300)
];

/// Get a color from the Office palette.
#[inline]
pub fn office_color(idx: usize) -> RGBAColor {
    OFFICE10[idx % OFFICE10.len()].to_rgba()
}

/// Same palette entry as plain RGB, for frontends that do not use plotters.
pub fn office_rgb(idx: usize) -> (u8, u8, u8) {
    let RGBColor(r, g, b) = OFFICE10[idx % OFFICE10.len()];
    (r, g, b)
}

/// Pick a single Y-axis scale and its human label based on the overall magnitude.
/// Returns (scale, label), e.g. (1e6, "millions").
pub fn choose_axis_scale(max_abs: f64) -> (f64, &'static str) {
    if max_abs >= 1.0e12 {
        (1.0e12, "trillions")
    } else if max_abs >= 1.0e9 {
        (1.0e9, "billions")
    } else if max_abs >= 1.0e6 {
        (1.0e6, "millions")
    } else if max_abs >= 1.0e3 {
        (1.0e3, "thousands")
    } else {
        (1.0, "")
    }
}

/// Heuristic: treat percent-like units as non-scalable.
pub fn is_percentage_like(unit: &str) -> bool {
    let u = unit.to_lowercase();
    u.contains('%') || u.contains("percent")
}

/// Register a "sans-serif" font once. Returns the font file used.
pub fn ensure_font_registered() -> Result<&'static Path> {
    FONT.get_or_init(register_first_font)
        .as_ref()
        .map(PathBuf::as_path)
        .map_err(|e| anyhow!("{e}"))
}

fn register_first_font() -> std::result::Result<PathBuf, String> {
    let from_env = std::env::var_os(FONT_PATH_ENV).map(PathBuf::from);
    let candidates = from_env
        .into_iter()
        .chain(FONT_CANDIDATES.iter().map(PathBuf::from));
    for path in candidates {
        let Ok(bytes) = std::fs::read(&path) else {
            continue;
        };
        // plotters keeps the font for the life of the process
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        if plotters::style::register_font("sans-serif", plotters::style::FontStyle::Normal, bytes)
            .is_ok()
        {
            debug!("registered chart font {}", path.display());
            return Ok(path);
        }
    }
    Err(format!(
        "no usable TrueType font found; set {FONT_PATH_ENV} to a .ttf file"
    ))
}

/// Render `figure` to `out_path`. `.svg` selects the SVG backend, anything else PNG.
pub fn plot_figure<P: AsRef<Path>>(
    figure: &Figure,
    out_path: P,
    width: u32,
    height: u32,
    locale_tag: &str,
) -> Result<()> {
    let out_path = out_path.as_ref();
    let (Some((mut min_year, mut max_year)), Some((min_val, max_val))) =
        (figure.year_range(), figure.value_range())
    else {
        return Err(anyhow!("no data to plot"));
    };
    if min_year == max_year {
        min_year -= 1;
        max_year += 1;
    }

    let (scale, scale_label) = if is_percentage_like(&figure.y_axis_title) {
        (1.0, "")
    } else {
        choose_axis_scale(min_val.abs().max(max_val.abs()))
    };
    let (mut lo, mut hi) = (min_val / scale, max_val / scale);
    if (hi - lo).abs() < f64::EPSILON {
        lo -= 1.0;
        hi += 1.0;
    }
    let pad = (hi - lo) * 0.05;
    let y_desc = if scale_label.is_empty() {
        figure.y_axis_title.clone()
    } else {
        format!("{} ({})", figure.y_axis_title, scale_label)
    };

    ensure_font_registered()?;

    let frame = Frame {
        figure,
        years: min_year..max_year,
        values: (lo - pad)..(hi + pad),
        scale,
        y_desc: &y_desc,
        locale_tag,
    };
    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(out_path, (width, height)).into_drawing_area();
        draw_chart(root, &frame)?;
    } else {
        let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
        draw_chart(root, &frame)?;
    }
    Ok(())
}

struct Frame<'a> {
    figure: &'a Figure,
    years: std::ops::Range<i32>,
    values: std::ops::Range<f64>,
    scale: f64,
    y_desc: &'a str,
    locale_tag: &'a str,
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(root: DrawingArea<DB, Shift>, frame: &Frame<'_>) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(&frame.figure.title, ("sans-serif", 24))
        .set_label_area_size(LabelAreaPosition::Left, 80)
        .set_label_area_size(LabelAreaPosition::Bottom, 44)
        .build_cartesian_2d(frame.years.clone(), frame.values.clone())
        .map_err(|e| anyhow!("{:?}", e))?;

    let locale_tag = frame.locale_tag;
    let y_label_fmt = |v: &f64| format_value(*v, locale_tag);
    let x_label_fmt = |y: &i32| y.to_string();
    let x_label_count = ((frame.years.end - frame.years.start + 1) as usize).min(12);

    chart
        .configure_mesh()
        .x_desc(frame.figure.x_axis_title.as_str())
        .y_desc(frame.y_desc)
        .x_labels(x_label_count)
        .y_labels(10)
        .x_label_formatter(&x_label_fmt)
        .y_label_formatter(&y_label_fmt)
        .label_style(("sans-serif", 14))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    for (idx, trace) in frame.figure.drawable_traces().enumerate() {
        let color = office_color(idx);
        let points: Vec<(i32, f64)> = trace
            .x
            .iter()
            .zip(&trace.y)
            .map(|(&x, &y)| (x, y / frame.scale))
            .collect();

        let anno = if trace.mode == TraceMode::Markers {
            chart.draw_series(points.iter().map(|&p| Circle::new(p, 3, color.filled())))
        } else {
            chart.draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
        }
        .map_err(|e| anyhow!("{:?}", e))?;
        anno.label(trace.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2)));

        if trace.mode == TraceMode::LinesMarkers {
            chart
                .draw_series(points.iter().map(|&p| Circle::new(p, 3, color.filled())))
                .map_err(|e| anyhow!("{:?}", e))?;
        }
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.85))
        .label_font(("sans-serif", 14))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}
