//! Calendar-day primitives the rest of the timeline is built on.

use chrono::{DateTime, Duration, NaiveDate, TimeZone};

/// Whole calendar days from `a` to `b` (`b - a`). Negative if `b` precedes `a`.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Like [`days_between`], but for instants. Time-of-day is dropped first, so
/// 23:59 on one day and 00:01 on the next are one day apart.
pub fn days_between_instants<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> i64 {
    days_between(a.date_naive(), b.date_naive())
}

/// The calendar date `n` days after `d` (`n` may be negative).
pub fn add_days(d: NaiveDate, n: i64) -> NaiveDate {
    d + Duration::days(n)
}
