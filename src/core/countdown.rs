//! Limited-offer countdown shown on promotion cards

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};
use std::fmt;

/// Refresh period of a rendered countdown
pub const TICK_MS: u32 = 1000;

/// Time left until an offer ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Running {
        days: i64,
        hours: u8,
        minutes: u8,
        seconds: u8,
    },
    Expired,
}

impl Countdown {
    /// Split `end - now` into whole days/hours/minutes/seconds.
    /// Anything at or past `end` is expired.
    pub fn remaining(end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let left = end - now;
        if left <= TimeDelta::zero() {
            return Countdown::Expired;
        }

        let total = left.num_seconds();
        Countdown::Running {
            days: total / 86_400,
            hours: ((total % 86_400) / 3_600) as u8,
            minutes: ((total % 3_600) / 60) as u8,
            seconds: (total % 60) as u8,
        }
    }

    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Running {
                days,
                hours,
                minutes,
                seconds,
            } => write!(f, "{days}d {hours}h {minutes}m {seconds}s"),
            Countdown::Expired => f.write_str("Offer Expired"),
        }
    }
}

/// Parse a `data-countdown` value: RFC 3339, `YYYY-MM-DDTHH:MM:SS`
/// (read as UTC) or a bare date (midnight UTC)
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn test_running_breakdown() {
        let now = at(2026, 1, 1, 0, 0, 0);
        let end = at(2026, 1, 3, 4, 5, 6);
        let countdown = Countdown::remaining(end, now);
        assert_eq!(
            countdown,
            Countdown::Running {
                days: 2,
                hours: 4,
                minutes: 5,
                seconds: 6
            }
        );
        assert_eq!(countdown.to_string(), "2d 4h 5m 6s");
    }

    #[test]
    fn test_sub_second_remainder_floors() {
        let now = at(2026, 1, 1, 0, 0, 0);
        let end = now + TimeDelta::milliseconds(1500);
        assert_eq!(Countdown::remaining(end, now).to_string(), "0d 0h 0m 1s");
    }

    #[test]
    fn test_expired() {
        let end = at(2026, 1, 1, 0, 0, 0);
        assert!(Countdown::remaining(end, end).is_expired());
        let later = at(2026, 2, 1, 0, 0, 0);
        assert_eq!(Countdown::remaining(end, later).to_string(), "Offer Expired");
    }

    #[test]
    fn test_parse_deadline() {
        assert_eq!(parse_deadline("2026-12-31"), Some(at(2026, 12, 31, 0, 0, 0)));
        assert_eq!(
            parse_deadline("2026-12-31T23:59:59"),
            Some(at(2026, 12, 31, 23, 59, 59))
        );
        assert_eq!(
            parse_deadline("2026-12-31T23:59:59+02:00"),
            Some(at(2026, 12, 31, 21, 59, 59))
        );
        assert_eq!(parse_deadline("soon"), None);
    }
}
