use chrono::{DateTime, Utc};

/// Format an RFC 3339 timestamp as relative time (e.g., "5m", "2h", "3d")
pub fn format_relative_time(timestamp: &str) -> String {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(dt) => format_relative_to(dt.with_timezone(&Utc), Utc::now()),
        Err(_) => String::new(),
    }
}

/// Relative time of `then` as seen from `now`
pub fn format_relative_to(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = (now - then).num_seconds();

    if diff < 0 {
        return "just now".to_string();
    }

    match diff {
        0..=59 => "just now".to_string(),
        60..=3599 => format!("{}m", diff / 60),
        3600..=86399 => format!("{}h", diff / 3600),
        86400..=604799 => format!("{}d", diff / 86400),
        // Older than a week shows the date
        _ => then.format("%b %d").to_string(),
    }
}

/// Format an RFC 3339 timestamp as a calendar date
pub fn format_date(timestamp: &str) -> String {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_default()
}

/// Await `ms` milliseconds on the browser event loop; returns at once off-wasm
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_family = "wasm")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_family = "wasm"))]
    {
        let _ = ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).single().unwrap()
    }

    #[test]
    fn test_relative_buckets() {
        let now = at(1_700_000_000);
        assert_eq!(format_relative_to(at(1_700_000_000 - 30), now), "just now");
        assert_eq!(format_relative_to(at(1_700_000_000 - 300), now), "5m");
        assert_eq!(format_relative_to(at(1_700_000_000 - 7200), now), "2h");
        assert_eq!(format_relative_to(at(1_700_000_000 - 3 * 86400), now), "3d");
        assert_eq!(format_relative_to(at(1_700_000_000 + 60), now), "just now");
    }

    #[test]
    fn test_old_dates_show_calendar_day() {
        let now = at(1_700_000_000);
        // 2023-10-01
        assert_eq!(format_relative_to(at(1_696_118_400), now), "Oct 01");
    }

    #[test]
    fn test_invalid_timestamp() {
        assert_eq!(format_relative_time("yesterday"), "");
        assert_eq!(format_date("2024-02-03T10:00:00Z"), "Feb 03, 2024");
    }
}
