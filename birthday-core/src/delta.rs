//! Signed time remaining until the target.

use chrono::{Duration, NaiveDateTime};

const SECONDS_PER_DAY: i64 = 86_400;

/// Days, hours, minutes and seconds between now and the target.
///
/// `days` is the floor of the signed delta in days, so the sub-day parts
/// are always non-negative: eight hours past the target is
/// `days = -1, hours = 16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeDelta {
    pub days: i64,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeDelta {
    /// `target - now`, truncated down to whole seconds.
    pub fn between(target: NaiveDateTime, now: NaiveDateTime) -> Self {
        Self::from_duration(target - now)
    }

    pub fn from_duration(duration: Duration) -> Self {
        let mut total = duration.num_seconds();
        if duration.subsec_nanos() < 0 {
            total -= 1;
        }
        Self::from_seconds(total)
    }

    pub fn from_seconds(total: i64) -> Self {
        let days = total.div_euclid(SECONDS_PER_DAY);
        let rest = total.rem_euclid(SECONDS_PER_DAY) as u32;
        Self {
            days,
            hours: rest / 3600,
            minutes: (rest / 60) % 60,
            seconds: rest % 60,
        }
    }

    /// The target is behind us.
    pub fn is_past(&self) -> bool {
        self.days < 0
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY
            + i64::from(self.hours) * 3600
            + i64::from(self.minutes) * 60
            + i64::from(self.seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 11, d)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_twelve_hours_before() {
        let delta = TimeDelta::between(at(4, 0, 0, 0), at(3, 12, 0, 0));
        assert_eq!(
            delta,
            TimeDelta {
                days: 0,
                hours: 12,
                minutes: 0,
                seconds: 0
            }
        );
        assert!(!delta.is_past());
    }

    #[test]
    fn test_mixed_components() {
        let delta = TimeDelta::between(at(30, 0, 0, 0), at(1, 10, 20, 30));
        assert_eq!(delta.days, 28);
        assert_eq!(delta.hours, 13);
        assert_eq!(delta.minutes, 39);
        assert_eq!(delta.seconds, 30);
    }

    #[test]
    fn test_past_uses_floor_days() {
        let delta = TimeDelta::between(at(4, 0, 0, 0), at(4, 8, 0, 0));
        assert_eq!(delta.days, -1);
        assert_eq!(delta.hours, 16);
        assert!(delta.is_past());
        assert_eq!(delta.total_seconds(), -8 * 3600);
    }

    #[test]
    fn test_exactly_at_target() {
        let delta = TimeDelta::between(at(4, 0, 0, 0), at(4, 0, 0, 0));
        assert_eq!(delta.total_seconds(), 0);
        assert!(!delta.is_past());
    }

    #[test]
    fn test_subsecond_past_rounds_down() {
        let delta = TimeDelta::from_duration(Duration::milliseconds(-500));
        assert_eq!(delta.days, -1);
        assert_eq!(delta.total_seconds(), -1);
    }

    #[test]
    fn test_subsecond_future_truncates() {
        let delta = TimeDelta::from_duration(Duration::milliseconds(1500));
        assert_eq!(delta.total_seconds(), 1);
    }

    #[test]
    fn test_reconstruction_sweep() {
        let target = at(20, 0, 0, 0);
        let mut now = at(1, 0, 0, 0);
        while now < at(19, 0, 0, 0) {
            let delta = TimeDelta::between(target, now);
            assert!(delta.days >= 0);
            assert!(delta.hours < 24 && delta.minutes < 60 && delta.seconds < 60);
            assert_eq!(delta.total_seconds(), (target - now).num_seconds());
            now += Duration::seconds(7_919);
        }
    }
}
