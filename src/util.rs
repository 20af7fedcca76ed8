// Utility helpers for parsing and basic statistics.
//
// This module centralizes the "dirty" CSV/number/date handling plus the
// summary-statistics math so the rest of the code can assume clean, typed
// values.
use crate::types::SummaryStats;
use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};
use std::cmp::Ordering;

/// Parse a string-like value into `f64` while being forgiving about
/// formatting issues that are common in CSV exports (commas, spaces).
///
/// - Accepts `Option<&str>` so callers can pass through optional fields.
/// - Trims whitespace.
/// - Rejects values that contain alphabetic characters.
/// - Strips thousands separators like `","` before parsing.
/// - Returns `None` for anything that cannot be safely parsed.
pub fn parse_f64_safe(s: Option<&str>) -> Option<f64> {
    let s = s?.trim();
    if s.is_empty() {
        return None;
    }
    if s.chars().any(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let s = s.replace(",", "");
    s.parse::<f64>().ok()
}

/// Normalize a branch identifier to canonical text.
///
/// Numeric-looking IDs are canonicalized (`"007"` and `"7"` refer to the
/// same branch) so text equality is stable across source encodings;
/// anything else is kept as trimmed text.
pub fn normalize_branch_id(raw: &str) -> String {
    let s = raw.trim();
    match s.parse::<i64>() {
        Ok(n) => n.to_string(),
        Err(_) => s.to_string(),
    }
}

/// Parse a `YYYY-MM-DD` date, returning `None` for anything else.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Arithmetic mean; returns 0 for an empty slice to avoid NaNs.
pub fn mean(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    let sum: f64 = v.iter().copied().sum();
    sum / v.len() as f64
}

/// Sample standard deviation (n−1 denominator).
///
/// `NaN` for fewer than two values, matching how statistical summaries
/// conventionally report the dispersion of a single observation.
pub fn sample_std(v: &[f64]) -> f64 {
    if v.len() < 2 {
        return f64::NAN;
    }
    let m = mean(v);
    let sum_sq: f64 = v.iter().map(|x| (x - m) * (x - m)).sum();
    (sum_sq / (v.len() as f64 - 1.0)).max(0.0).sqrt()
}

/// Percentile of pre-sorted values using linear interpolation at rank
/// `p/100 * (n-1)`.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted[0];
    }
    let rank = (p / 100.0) * (n - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = (rank.ceil() as usize).min(n - 1);
    let frac = rank - lower as f64;
    if lower == upper {
        sorted[lower]
    } else {
        sorted[lower] + (sorted[upper] - sorted[lower]) * frac
    }
}

/// The eight summary statistics over one numeric column.
pub fn describe(values: &[f64]) -> SummaryStats {
    if values.is_empty() {
        return SummaryStats {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            p50: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        };
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    SummaryStats {
        count: values.len(),
        mean: mean(values),
        std: sample_std(values),
        min: sorted[0],
        p25: percentile(&sorted, 25.0),
        p50: percentile(&sorted, 50.0),
        p75: percentile(&sorted, 75.0),
        max: sorted[sorted.len() - 1],
    }
}

/// Format a floating-point value with:
/// - a fixed number of decimal places, and
/// - locale-aware thousands separators (e.g., `1,234,567.89`).
///
/// Non-finite values render as `NaN`.
pub fn format_number(n: f64, decimals: usize) -> String {
    if !n.is_finite() {
        return "NaN".to_string();
    }
    let neg = n.is_sign_negative();
    let abs_n = n.abs();
    // First, format to a plain fixed-decimal string like `1234567.89`.
    let s = format!("{:.*}", decimals, abs_n);
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    // Use `num-format` to insert commas into the integer portion.
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    } else if decimals > 0 {
        res.push('.');
        res.push_str(&"0".repeat(decimals));
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

/// Thin wrapper around `num-format` for integer-like values, used for
/// counts in console messages (e.g., `9,855 records loaded`).
pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_f64_safe_handles_common_csv_noise() {
        assert_eq!(parse_f64_safe(Some(" 1,234.5 ")), Some(1234.5));
        assert_eq!(parse_f64_safe(Some("10")), Some(10.0));
        assert_eq!(parse_f64_safe(Some("n/a")), None);
        assert_eq!(parse_f64_safe(Some("")), None);
        assert_eq!(parse_f64_safe(None), None);
    }

    #[test]
    fn branch_ids_are_canonical_text() {
        assert_eq!(normalize_branch_id("007"), "7");
        assert_eq!(normalize_branch_id(" 12 "), "12");
        assert_eq!(normalize_branch_id("B-12"), "B-12");
    }

    #[test]
    fn percentile_uses_linear_interpolation() {
        let sorted = [10.0, 20.0, 30.0, 40.0];
        assert_eq!(percentile(&sorted, 25.0), 17.5);
        assert_eq!(percentile(&sorted, 50.0), 25.0);
        assert_eq!(percentile(&sorted, 75.0), 32.5);
        assert_eq!(percentile(&sorted, 0.0), 10.0);
        assert_eq!(percentile(&sorted, 100.0), 40.0);
        assert_eq!(percentile(&[5.0], 75.0), 5.0);
        assert!(percentile(&[], 50.0).is_nan());
    }

    #[test]
    fn sample_std_divides_by_n_minus_one() {
        let v = [10.0, 20.0, 30.0, 40.0];
        let expected = (500.0f64 / 3.0).sqrt();
        assert!((sample_std(&v) - expected).abs() < 1e-12);
        assert!(sample_std(&[42.0]).is_nan());
    }

    #[test]
    fn describe_covers_all_eight_statistics() {
        let stats = describe(&[100.0, 150.0, 200.0, 120.0]);
        assert_eq!(stats.count, 4);
        assert!((stats.mean - 142.5).abs() < 1e-12);
        assert_eq!(stats.min, 100.0);
        assert_eq!(stats.max, 200.0);
        assert!((stats.p25 - 115.0).abs() < 1e-12);
        assert!((stats.p50 - 135.0).abs() < 1e-12);
        assert!((stats.p75 - 162.5).abs() < 1e-12);
        let expected_std = (5675.0f64 / 3.0).sqrt();
        assert!((stats.std - expected_std).abs() < 1e-12);
    }

    #[test]
    fn describe_of_nothing_is_nan_with_zero_count() {
        let stats = describe(&[]);
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
        assert!(stats.max.is_nan());
    }

    #[test]
    fn numbers_render_with_separators_and_decimals() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(-42.0, 2), "-42.00");
        assert_eq!(format_number(f64::NAN, 2), "NaN");
        assert_eq!(format_int(9855usize), "9,855");
    }
}
