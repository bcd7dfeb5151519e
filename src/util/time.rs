use std::time::{Duration, SystemTime};

use chrono::{DateTime, TimeZone, Utc};

/// Returns the Unix time representation of "now" as a `Duration`.
pub fn now_unix() -> Duration {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap_or_default()
}

/// Converts a number of seconds since the Unix epoch to a UTC date-time.
///
/// Returns `None` if the value is outside the range `chrono` can represent.
pub fn datetime_from_unix(secs: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_opt(secs, 0).single()
}

/// Returns the time left until the given Unix time, or zero if it has already passed.
pub fn until_unix(unix: Duration) -> Duration {
    let now = now_unix();
    // Do not subtract the `Duration`s directly to avoid underflowing.
    if now < unix {
        unix - now
    } else {
        Duration::from_secs(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_unix() {
        let date = datetime_from_unix(1_360_991_702).unwrap();
        assert_eq!(date.to_rfc3339(), "2013-02-16T05:15:02+00:00");
        assert_eq!(datetime_from_unix(0).unwrap().timestamp(), 0);
        assert!(datetime_from_unix(i64::MAX).is_none());
    }

    #[test]
    fn until() {
        assert_eq!(until_unix(Duration::from_secs(0)), Duration::from_secs(0));

        let later = now_unix() + Duration::from_secs(60);
        let left = until_unix(later);
        assert!(left <= Duration::from_secs(60));
        assert!(left > Duration::from_secs(50));
    }
}
