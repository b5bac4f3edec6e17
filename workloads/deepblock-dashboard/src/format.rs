//! Formatting helpers for panel values.
//!
//! All helpers are total over missing input: an absent number formats as 0,
//! matching the snapshot contract where any field may be missing.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Abbreviate a USD magnitude with a T/B/M/K suffix.
///
/// Two decimals at or above 1000, zero decimals below.
pub fn abbreviate_usd(value: Option<f64>) -> String {
    let n = value.unwrap_or(0.0);
    if n >= 1e12 {
        format!("{:.2}T", n / 1e12)
    } else if n >= 1e9 {
        format!("{:.2}B", n / 1e9)
    } else if n >= 1e6 {
        format!("{:.2}M", n / 1e6)
    } else if n >= 1e3 {
        format!("{:.2}K", n / 1e3)
    } else {
        format!("{:.0}", n)
    }
}

/// Fixed two-decimal percentage string.
pub fn format_percent(value: Option<f64>) -> String {
    format!("{:.2}%", value.unwrap_or(0.0))
}

/// Group a number with en-US thousands separators.
///
/// At most three fraction digits, trailing zeros dropped, like
/// `toLocaleString("en-US")` on the original snapshots.
pub fn format_grouped(value: Option<f64>) -> String {
    let n = value.unwrap_or(0.0);
    let formatted = format!("{:.3}", n.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));

    let len = int_part.len();
    let mut grouped = String::with_capacity(len + len / 3 + 1);
    if n < 0.0 {
        grouped.push('-');
    }
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let frac = frac_part.trim_end_matches('0');
    if !frac.is_empty() {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

/// Format the "last updated" indicator sentence from a snapshot timestamp.
///
/// Returns `None` when the timestamp does not parse; the caller then leaves
/// the indicator untouched rather than overwriting it with a blank.
pub fn format_last_updated(raw: &str) -> Option<String> {
    let parsed: DateTime<Utc> = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .map(|naive| naive.and_utc())
                .ok()
        })?;

    Some(format!(
        "Última actualización general: {} UTC",
        parsed.format("%d/%m/%Y %H:%M:%S")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    // === abbreviate_usd Tests ===

    #[test]
    fn test_abbreviate_trillions() {
        assert_eq!(abbreviate_usd(Some(1e12)), "1.00T");
        assert_eq!(abbreviate_usd(Some(2_450_000_000_000.0)), "2.45T");
    }

    #[test]
    fn test_abbreviate_billions_millions_thousands() {
        assert_eq!(abbreviate_usd(Some(1e9)), "1.00B");
        assert_eq!(abbreviate_usd(Some(1e6)), "1.00M");
        assert_eq!(abbreviate_usd(Some(1000.0)), "1.00K");
        assert_eq!(abbreviate_usd(Some(1234.5)), "1.23K");
    }

    #[test]
    fn test_abbreviate_just_below_thresholds() {
        assert_eq!(abbreviate_usd(Some(999.0)), "999");
        assert_eq!(abbreviate_usd(Some(999_999.0)), "1000.00K");
        assert_eq!(abbreviate_usd(Some(999_999_999.0)), "1000.00M");
    }

    #[test]
    fn test_abbreviate_missing_is_zero() {
        assert_eq!(abbreviate_usd(None), "0");
    }

    #[test]
    fn test_abbreviate_negative_prints_plain() {
        // Negatives fall through every threshold, same as the upstream
        // numeric coercion.
        assert_eq!(abbreviate_usd(Some(-5_000_000.0)), "-5000000");
    }

    // === format_percent Tests ===

    #[test]
    fn test_percent_two_decimals() {
        assert_eq!(format_percent(Some(52.123)), "52.12%");
        assert_eq!(format_percent(Some(-3.5)), "-3.50%");
        assert_eq!(format_percent(None), "0.00%");
    }

    // === format_grouped Tests ===

    #[test]
    fn test_grouped_integers() {
        assert_eq!(format_grouped(Some(1_000_000.0)), "1,000,000");
        assert_eq!(format_grouped(Some(500.0)), "500");
        assert_eq!(format_grouped(Some(1234.0)), "1,234");
    }

    #[test]
    fn test_grouped_fraction_trimmed() {
        assert_eq!(format_grouped(Some(1234.5)), "1,234.5");
        assert_eq!(format_grouped(Some(1234.5678)), "1,234.568");
    }

    #[test]
    fn test_grouped_missing_and_negative() {
        assert_eq!(format_grouped(None), "0");
        assert_eq!(format_grouped(Some(-42_000.0)), "-42,000");
    }

    // === format_last_updated Tests ===

    #[test]
    fn test_last_updated_rfc3339() {
        let text = format_last_updated("2025-12-04T14:20:00Z").unwrap();
        assert_eq!(
            text,
            "Última actualización general: 04/12/2025 14:20:00 UTC"
        );
    }

    #[test]
    fn test_last_updated_offset_normalized_to_utc() {
        let text = format_last_updated("2025-12-04T14:20:00+02:00").unwrap();
        assert!(text.contains("12:20:00 UTC"));
    }

    #[test]
    fn test_last_updated_naive_fallback() {
        assert!(format_last_updated("2025-12-04 14:20:00").is_some());
    }

    #[test]
    fn test_last_updated_unparseable_is_none() {
        assert!(format_last_updated("hace un rato").is_none());
        assert!(format_last_updated("").is_none());
    }
}
