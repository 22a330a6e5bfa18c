//! Time window resolution
//!
//! All date parsing lives here; the rest of the engine only sees
//! `DateTime<Utc>` bounds. Windows are half-open `[start, end)` with
//! `end` at the next unit boundary, equivalent to inclusive-on-both-ends
//! over the unit's last instant.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, Utc};

use crate::params::TimeRange;

/// Parse a bill date string
///
/// Accepts RFC 3339 (with offset or `Z`), a naive datetime assumed UTC,
/// or a bare `YYYY-MM-DD` taken as midnight UTC.
pub fn parse_bill_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(day_start(date));
    }
    None
}

/// Resolve the `[start, end)` window for a range mode
///
/// `None` means no window: `All`, and `Custom` with a missing bound.
/// Weeks start on Monday.
pub fn resolve_window(
    range: &TimeRange,
    now: DateTime<Utc>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let today = now.date_naive();
    match range {
        TimeRange::All => None,
        TimeRange::Day => Some((day_start(today), day_start(today + Duration::days(1)))),
        TimeRange::Week => {
            let monday = today - Duration::days(today.weekday().num_days_from_monday() as i64);
            Some((day_start(monday), day_start(monday + Duration::days(7))))
        }
        TimeRange::Month => {
            let first = today.with_day(1).unwrap_or(today);
            let next = if first.month() == 12 {
                NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
            }
            .unwrap_or(first);
            Some((day_start(first), day_start(next)))
        }
        TimeRange::Year => {
            let first = NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today);
            let next = NaiveDate::from_ymd_opt(today.year() + 1, 1, 1).unwrap_or(today);
            Some((day_start(first), day_start(next)))
        }
        TimeRange::Custom { start, end } => match (start, end) {
            (Some(s), Some(e)) => Some((day_start(*s), day_start(*e + Duration::days(1)))),
            _ => None,
        },
    }
}

/// Date at 00:00:00 UTC
fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0)
        .unwrap_or_else(|| date.and_time(chrono::NaiveTime::MIN))
        .and_utc()
}
