//! Display formatting for dates and money amounts
//!
//! Both helpers are total: they never fail and never panic. Substituting a
//! placeholder for an absent value (`"-"`, `0`) is the caller's job.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Display pattern for dates, e.g. `Jan, 15 2023`
const DATE_FORMAT: &str = "%b, %d %Y";

/// Format an ISO-8601 date or timestamp as `Mon, DD YYYY`
///
/// Accepts RFC 3339 timestamps (the calendar date is taken as written, not
/// converted to local time), naive `YYYY-MM-DDTHH:MM:SS` timestamps and plain
/// `YYYY-MM-DD` dates. Anything else is returned unchanged.
///
/// # Examples
/// ```
/// use elbi::format::format_date;
/// assert_eq!(format_date("2023-01-15T14:30:00Z"), "Jan, 15 2023");
/// assert_eq!(format_date("2010-07-15"), "Jul, 15 2010");
/// ```
#[must_use]
pub fn format_date(iso8601: &str) -> String {
    let input = iso8601.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return timestamp.date_naive().format(DATE_FORMAT).to_string();
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return timestamp.date().format(DATE_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return date.format(DATE_FORMAT).to_string();
    }

    iso8601.to_string()
}

/// Format an amount with `,` thousands separators and no decimals
///
/// Fractional input is rounded half away from zero. Non-finite input
/// formats as `0`.
///
/// # Examples
/// ```
/// use elbi::format::format_money;
/// assert_eq!(format_money(10000.0), "10,000");
/// assert_eq!(format_money(160_000_000.0), "160,000,000");
/// ```
#[must_use]
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }

    #[allow(clippy::cast_possible_truncation)]
    let rounded = amount.round() as i128;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2023-01-15T14:30:00Z"), "Jan, 15 2023");
    }

    #[test]
    fn test_format_date_keeps_written_calendar_date() {
        // Late evening with a negative offset must not roll over to the next day
        assert_eq!(format_date("2023-01-15T23:30:00-05:00"), "Jan, 15 2023");
    }

    #[test]
    fn test_format_date_plain_date() {
        assert_eq!(format_date("2010-07-15"), "Jul, 15 2010");
        assert_eq!(format_date("1999-12-01"), "Dec, 01 1999");
    }

    #[test]
    fn test_format_date_naive_timestamp() {
        assert_eq!(format_date("2001-03-09T08:00:00"), "Mar, 09 2001");
    }

    #[test]
    fn test_format_date_unparseable_is_passthrough() {
        assert_eq!(format_date("soon"), "soon");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(10000.0), "10,000");
        assert_eq!(format_money(0.0), "0");
        assert_eq!(format_money(999.0), "999");
        assert_eq!(format_money(1000.0), "1,000");
        assert_eq!(format_money(825_532_764.0), "825,532,764");
    }

    #[test]
    fn test_format_money_rounds_half_away_from_zero() {
        assert_eq!(format_money(1234.5), "1,235");
        assert_eq!(format_money(1234.4), "1,234");
        assert_eq!(format_money(-1234.5), "-1,235");
    }

    #[test]
    fn test_format_money_negative_and_non_finite() {
        assert_eq!(format_money(-1_000_000.0), "-1,000,000");
        assert_eq!(format_money(f64::NAN), "0");
        assert_eq!(format_money(f64::INFINITY), "0");
    }
}
