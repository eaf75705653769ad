use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

/// Current instant, truncated to microsecond precision so the wire
/// form round-trips losslessly.
pub fn now_utc() -> DateTime<Utc> {
    let now = Utc::now();
    now.with_nanosecond(now.nanosecond() / 1_000 * 1_000)
        .unwrap_or(now)
}

/// Wire form of a post timestamp: ISO-8601 UTC without an offset,
/// microsecond precision. Fixed width keeps the strings
/// lexicographically sortable.
pub fn format_instant(t: &DateTime<Utc>) -> String {
    t.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

/// Parse an ISO-8601 instant from a query parameter or client payload.
///
/// Accepts an offset-bearing form ("2024-05-01T10:00:00Z"), a naive
/// datetime ("2024-05-01T10:00:00.123456", interpreted as UTC), or a
/// bare date (midnight UTC).
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = s.parse::<DateTime<Utc>>() {
        return Some(dt);
    }
    if let Ok(naive) = s.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    if let Ok(date) = s.parse::<NaiveDate>() {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    None
}
