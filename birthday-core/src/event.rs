//! The birthday being counted down to.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Honoree shown by default.
pub const DEFAULT_FULL_NAME: &str = "Siro Bayón";

/// Age the honoree turns on [`default_date`].
pub const DEFAULT_AGE: u32 = 39;

/// Theme the sonnet is written around.
pub const DEFAULT_THEME: &str = "El viaje a Zaragoza para ver nuestro primer concierto de Metallica en el coche de Laorden. \
Fueron Laorden, Sergio y Siro. A la vuelta, de madrugada, se oía un ruido muy fuerte y extraño en el coche. \
Resultaron ser unos auriculares que pegaban contra la carrocería.";

/// Midnight on 4 November 2023.
pub fn default_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 11, 4)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// A birthday: who, when, how old, and what the poem should be about.
///
/// Built once at startup and never mutated. The countdown keeps its own
/// copy of the (possibly year-advanced) target date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEvent {
    pub full_name: String,
    pub date: NaiveDateTime,
    pub age: u32,
    pub theme: String,
}

impl TargetEvent {
    pub fn new(
        full_name: impl Into<String>,
        date: NaiveDateTime,
        age: u32,
        theme: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            date,
            age,
            theme: theme.into(),
        }
    }

    /// First word of the full name, used in greetings.
    pub fn short_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.full_name)
    }
}

impl Default for TargetEvent {
    fn default() -> Self {
        Self::new(DEFAULT_FULL_NAME, default_date(), DEFAULT_AGE, DEFAULT_THEME)
    }
}

/// Same month, day and time of day `years` later.
///
/// 29 February lands on 28 February when the resulting year is not a leap
/// year. Always computed from the original date, so a leap-day birthday
/// returns to the 29th in the next leap year.
pub fn anniversary(date: NaiveDateTime, years: u32) -> NaiveDateTime {
    let Some(year) = i32::try_from(years)
        .ok()
        .and_then(|n| date.year().checked_add(n))
    else {
        return date;
    };
    date.with_year(year)
        .or_else(|| {
            date.date()
                .with_day(28)
                .and_then(|d| d.with_year(year))
                .map(|d| d.and_time(date.time()))
        })
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_default_event() {
        let event = TargetEvent::default();
        assert_eq!(event.full_name, "Siro Bayón");
        assert_eq!(event.short_name(), "Siro");
        assert_eq!(event.age, 39);
        assert_eq!(event.date, at(2023, 11, 4));
        assert!(event.theme.contains("Metallica"));
    }

    #[test]
    fn test_short_name_single_word() {
        let event = TargetEvent::new("Ana", at(2024, 1, 1), 30, "mar");
        assert_eq!(event.short_name(), "Ana");
    }

    #[test]
    fn test_anniversary_keeps_month_and_day() {
        assert_eq!(anniversary(at(2023, 11, 4), 1), at(2024, 11, 4));
        assert_eq!(anniversary(at(2023, 11, 4), 3), at(2026, 11, 4));
        assert_eq!(anniversary(at(2023, 11, 4), 0), at(2023, 11, 4));
    }

    #[test]
    fn test_anniversary_keeps_time_of_day() {
        let date = at(2023, 11, 4).date().and_hms_opt(18, 30, 0).unwrap();
        let advanced = anniversary(date, 1);
        assert_eq!(advanced.time(), date.time());
        assert_eq!(advanced.year(), 2024);
    }

    #[test]
    fn test_anniversary_leap_day() {
        let leap = at(2024, 2, 29);
        assert_eq!(anniversary(leap, 1), at(2025, 2, 28));
        assert_eq!(anniversary(leap, 3), at(2027, 2, 28));
        assert_eq!(anniversary(leap, 4), at(2028, 2, 29));
    }
}
