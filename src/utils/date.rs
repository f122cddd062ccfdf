//! Date helpers for CMS date strings.
//!
//! The CMS stores dates as ISO strings, either a bare date (`2026-03-15`) or a
//! full RFC 3339 timestamp. Bare dates are taken as midnight UTC.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Language for formatted date labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateLocale {
    /// `15. mar. 2026`
    #[default]
    #[serde(rename = "da")]
    Danish,
    /// `15 Mar 2026`
    #[serde(rename = "en")]
    English,
}

impl DateLocale {
    const fn month_abbr(self, month: u32) -> &'static str {
        const DA: [&str; 12] = [
            "jan.", "feb.", "mar.", "apr.", "maj", "jun.", "jul.", "aug.", "sep.", "okt.", "nov.",
            "dec.",
        ];
        const EN: [&str; 12] = [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ];
        let index = (month.saturating_sub(1) % 12) as usize;
        match self {
            Self::Danish => DA[index],
            Self::English => EN[index],
        }
    }

    fn day_month(self, date: NaiveDate) -> String {
        match self {
            Self::Danish => format!("{}. {}", date.day(), self.month_abbr(date.month())),
            Self::English => format!("{} {}", date.day(), self.month_abbr(date.month())),
        }
    }
}

/// Parse a CMS date string into an instant.
pub fn parse(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(input) {
        return Some(datetime.with_timezone(&Utc));
    }
    parse_day(input)?.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

/// Calendar day of a CMS date string.
pub fn parse_day(input: &str) -> Option<NaiveDate> {
    let day = input.trim().get(..10)?;
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Danish short date: `15. mar. 2026`. Unparseable input is returned unchanged.
pub fn format_date(input: &str) -> String {
    format_date_in(input, DateLocale::Danish)
}

pub fn format_date_in(input: &str, locale: DateLocale) -> String {
    match parse_day(input) {
        Some(date) => format!("{} {}", locale.day_month(date), date.year()),
        None => input.to_owned(),
    }
}

/// Label for a (possibly multi-day) event.
///
/// `15-16 mar.` when both days fall in the same month of the same year,
/// otherwise both dates in full joined by ` - `.
pub fn format_date_range(start: &str, end: Option<&str>) -> String {
    format_date_range_in(start, end, DateLocale::Danish)
}

pub fn format_date_range_in(start: &str, end: Option<&str>, locale: DateLocale) -> String {
    let Some(end) = end else {
        return format_date_in(start, locale);
    };

    if let (Some(a), Some(b)) = (parse_day(start), parse_day(end))
        && a.year() == b.year()
        && a.month() == b.month()
    {
        return format!("{}-{}", a.day(), locale.day_month(b).replace(". ", " "));
    }

    format!(
        "{} - {}",
        format_date_in(start, locale),
        format_date_in(end, locale)
    )
}

/// Whole days from now until `input`, rounded up. Past dates are negative.
pub fn days_until(input: &str) -> Option<i64> {
    days_until_from(input, Utc::now())
}

pub fn days_until_from(input: &str, now: DateTime<Utc>) -> Option<i64> {
    let diff = (parse(input)? - now).num_milliseconds();
    Some((diff + MS_PER_DAY - 1).div_euclid(MS_PER_DAY))
}

/// Today's date in UTC as `YYYY-MM-DD`, the format range filters compare against.
pub fn today_utc() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_format_date_danish() {
        assert_eq!(format_date("2026-03-15"), "15. mar. 2026");
        assert_eq!(format_date("2026-05-01"), "1. maj 2026");
        assert_eq!(format_date("2025-12-24T10:00:00Z"), "24. dec. 2025");
    }

    #[test]
    fn test_format_date_english() {
        assert_eq!(format_date_in("2026-03-15", DateLocale::English), "15 Mar 2026");
    }

    #[test]
    fn test_format_date_unparseable_passthrough() {
        assert_eq!(format_date("snart"), "snart");
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("2026-13-01"), "2026-13-01");
    }

    #[test]
    fn test_format_date_range() {
        assert_eq!(format_date_range("2026-03-15", None), "15. mar. 2026");
        assert_eq!(format_date_range("2026-03-15", Some("2026-03-16")), "15-16 mar.");
        assert_eq!(
            format_date_range("2026-03-31", Some("2026-04-01")),
            "31. mar. 2026 - 1. apr. 2026"
        );
        // Same month, different year
        assert_eq!(
            format_date_range("2025-03-15", Some("2026-03-16")),
            "15. mar. 2025 - 16. mar. 2026"
        );
    }

    #[test]
    fn test_format_date_range_english() {
        assert_eq!(
            format_date_range_in("2026-05-02", Some("2026-05-03"), DateLocale::English),
            "2-3 May"
        );
    }

    #[test]
    fn test_days_until_rounds_up() {
        let now = at(2026, 3, 14, 12);
        assert_eq!(days_until_from("2026-03-15", now), Some(1));
        assert_eq!(days_until_from("2026-03-20", now), Some(6));
        assert_eq!(days_until_from("2026-03-14", now), Some(0));
    }

    #[test]
    fn test_days_until_past_is_negative() {
        let now = at(2026, 3, 14, 0);
        assert_eq!(days_until_from("2026-03-10", now), Some(-4));
        assert_eq!(days_until_from("2026-03-14", now), Some(0));
    }

    #[test]
    fn test_days_until_unparseable() {
        assert_eq!(days_until_from("tbd", at(2026, 1, 1, 0)), None);
    }

    #[test]
    fn test_parse_timestamp_and_day() {
        assert_eq!(parse("2026-03-15"), Some(at(2026, 3, 15, 0)));
        assert_eq!(parse("2026-03-15T08:00:00Z"), Some(at(2026, 3, 15, 8)));
        assert_eq!(parse("15/03/2026"), None);
    }

    #[test]
    fn test_locale_serde() {
        assert_eq!(
            serde_json::from_str::<DateLocale>("\"en\"").unwrap(),
            DateLocale::English
        );
        assert_eq!(serde_json::to_string(&DateLocale::Danish).unwrap(), "\"da\"");
    }

    #[test]
    fn test_today_utc_shape() {
        let today = today_utc();
        assert_eq!(today.len(), 10);
        assert!(parse_day(&today).is_some());
    }
}
