//! Text rendering of the per-country summary cards.

use crate::stats::Summary;
use num_format::{Locale, ToFormattedString};

/// Map a user-provided locale tag to a num-format Locale and decimal separator.
/// Supported tags (case-insensitive): "en", "us", "en_US", "de", "de_DE", "german", "fr", "es", "it", "pt", "nl"
pub fn map_locale(tag: &str) -> (&'static Locale, char) {
    match tag.to_lowercase().as_str() {
        "de" | "de_de" | "german" => (&Locale::de, ','),
        "fr" | "fr_fr" => (&Locale::fr, ','),
        "es" | "es_es" => (&Locale::es, ','),
        "it" | "it_it" => (&Locale::it, ','),
        "pt" | "pt_pt" | "pt_br" => (&Locale::pt, ','),
        "nl" | "nl_nl" => (&Locale::nl, ','),
        _ => (&Locale::en, '.'),
    }
}

/// Format a card value.
///
/// Magnitudes of 1000 and above are rounded to whole numbers with thousands separators;
/// smaller ones keep up to 4 decimals with trailing zeros trimmed.
pub fn format_value(v: f64, locale_tag: &str) -> String {
    if !v.is_finite() {
        return "NA".to_string();
    }
    let (locale, dec_sep) = map_locale(locale_tag);
    if v.abs() >= 1000.0 {
        let rounded = v.round();
        if rounded.abs() < i64::MAX as f64 {
            return (rounded as i64).to_formatted_string(locale);
        }
        return group_digits(rounded, locale);
    }
    let s = format!("{:.4}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    let s = if s == "-0" { "0" } else { s };
    if dec_sep == '.' {
        s.to_string()
    } else {
        s.replace('.', &dec_sep.to_string())
    }
}

/// Thousands grouping for whole numbers beyond the `i64` range.
fn group_digits(rounded: f64, locale: &Locale) -> String {
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::new();
    if rounded < 0.0 {
        out.push_str(locale.minus_sign());
    }
    for (i, d) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(locale.separator());
        }
        out.push(d);
    }
    out
}

/// Card lines: country header, max and min with their years, average.
pub fn card_lines(summary: &Summary, locale_tag: &str) -> Vec<String> {
    vec![
        summary.country.clone(),
        format!(
            "Max: {}  Year: {}",
            format_value(summary.max.value, locale_tag),
            summary.max.year
        ),
        format!(
            "Min: {}  Year: {}",
            format_value(summary.min.value, locale_tag),
            summary.min.year
        ),
        format!("Average: {}", format_value(summary.mean, locale_tag)),
    ]
}

/// One card as a newline-separated block.
pub fn render_card(summary: &Summary, locale_tag: &str) -> String {
    card_lines(summary, locale_tag).join("\n")
}

/// All cards under a "Selected Countries" heading, separated by blank lines.
pub fn render_cards(summaries: &[Summary], locale_tag: &str) -> String {
    let mut out = String::from("Selected Countries\n");
    for s in summaries {
        out.push('\n');
        out.push_str(&render_card(s, locale_tag));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    #[test]
    fn values_use_locale_separators() {
        assert_eq!(format_value(222_000_000_000.0, "en"), "222,000,000,000");
        assert_eq!(format_value(222_000_000_000.0, "de"), "222.000.000.000");
        assert_eq!(format_value(9.5, "en"), "9.5");
        assert_eq!(format_value(9.5, "de"), "9,5");
        assert_eq!(format_value(1.0, "en"), "1");
        assert_eq!(format_value(f64::NAN, "en"), "NA");
    }

    #[test]
    fn huge_values_keep_all_digits() {
        assert_eq!(format_value(1e20, "en"), "100,000,000,000,000,000,000");
        assert_eq!(format_value(-1e19, "de"), "-10.000.000.000.000.000.000");
        assert_eq!(format_value(-2_500.4, "en"), "-2,500");
    }

    #[test]
    fn card_lists_extremes_with_years() {
        let s = Summary {
            country: "Morocco".into(),
            count: 3,
            min: Point { year: 2011, value: 0.9 },
            max: Point { year: 2012, value: 1.3 },
            mean: 1.1,
        };
        assert_eq!(
            render_card(&s, "en"),
            "Morocco\nMax: 1.3  Year: 2012\nMin: 0.9  Year: 2011\nAverage: 1.1"
        );
    }
}
