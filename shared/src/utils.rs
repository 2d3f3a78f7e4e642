//! # Shared Utility Functions
//!
//! Display formatting for money and counts, used by every front end.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_compact_count, format_currency};
//!
//! assert_eq!(format_currency(1234.5), "$1234.50");
//! assert_eq!(format_compact_count(15_300), "15.3K");
//! ```

/// Format an amount as dollars with two decimal places.
///
/// Negative amounts put the sign before the symbol; non-finite input
/// renders as `$0.00`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_currency;
///
/// assert_eq!(format_currency(10.0), "$10.00");
/// assert_eq!(format_currency(-2.5), "-$2.50");
/// ```
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0.00".to_string();
    }
    let formatted = format!("{:.2}", amount.abs());
    // -0.001 rounds to 0.00 and must not print a sign
    if amount < 0.0 && formatted != "0.00" {
        format!("-${}", formatted)
    } else {
        format!("${}", formatted)
    }
}

/// Format a view/follower count compactly.
///
/// Below 1,000 the exact number; below 1,000,000 thousands with one decimal
/// and a `K` suffix; otherwise millions with one decimal and an `M` suffix.
/// Counts that would print as `1000.0K` are shown as `1.0M`.
pub fn format_compact_count(count: u64) -> String {
    if count < 1_000 {
        count.to_string()
    } else if count < 999_950 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    }
}

/// Format a percentage with two decimals and an explicit sign.
///
/// ```rust
/// use shared::utils::format_signed_percentage;
///
/// assert_eq!(format_signed_percentage(50.0), "+50.00%");
/// assert_eq!(format_signed_percentage(-12.345), "-12.35%");
/// ```
pub fn format_signed_percentage(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0.00%".to_string();
    }
    if value > 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

/// Format a video duration in seconds as `m:ss` (or `h:mm:ss`).
pub fn format_duration(seconds: u64) -> String {
    let (h, m, s) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(10.0), "$10.00");
        assert_eq!(format_currency(1234.567), "$1234.57");
        assert_eq!(format_currency(-2.5), "-$2.50");
        assert_eq!(format_currency(-0.001), "$0.00");
        assert_eq!(format_currency(f64::NAN), "$0.00");
    }

    #[test]
    fn test_format_compact_count() {
        assert_eq!(format_compact_count(0), "0");
        assert_eq!(format_compact_count(999), "999");
        assert_eq!(format_compact_count(1_000), "1.0K");
        assert_eq!(format_compact_count(15_300), "15.3K");
        assert_eq!(format_compact_count(999_949), "999.9K");
        // Would round up to "1000.0K"; rolls over instead.
        assert_eq!(format_compact_count(999_950), "1.0M");
        assert_eq!(format_compact_count(1_000_000), "1.0M");
        assert_eq!(format_compact_count(2_450_000), "2.5M");
    }

    #[test]
    fn test_format_signed_percentage() {
        assert_eq!(format_signed_percentage(0.0), "0.00%");
        assert_eq!(format_signed_percentage(f64::INFINITY), "0.00%");
        assert_eq!(format_signed_percentage(-50.0), "-50.00%");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(5), "0:05");
        assert_eq!(format_duration(75), "1:15");
        assert_eq!(format_duration(3_725), "1:02:05");
    }
}
