//! Countdown/trigger state machine.
//!
//! ```text
//! CountingDown --(days >= 0)--> CountingDown
//! CountingDown --(days < -1)--> advance year, re-evaluate
//! CountingDown --(days == -1)-> JustTriggered --(celebrate)--> Celebrating
//! ```

use chrono::NaiveDateTime;

use crate::delta::TimeDelta;
use crate::event::{anniversary, TargetEvent};

/// Where the machine is in the yearly cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    CountingDown,
    JustTriggered,
    /// Terminal.
    Celebrating,
}

/// What a single tick decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Still waiting; show this much time left.
    Counting(TimeDelta),
    /// The birthday started less than a day ago. Fires once.
    Triggered { age: u32 },
    /// Already triggered; nothing left to count.
    Idle,
}

/// Tracks the target date and fires the trigger exactly once.
#[derive(Debug, Clone)]
pub struct Countdown {
    event: TargetEvent,
    target: NaiveDateTime,
    years_advanced: u32,
    phase: Phase,
}

impl Countdown {
    pub fn new(event: TargetEvent) -> Self {
        let target = event.date;
        Self {
            event,
            target,
            years_advanced: 0,
            phase: Phase::CountingDown,
        }
    }

    pub fn event(&self) -> &TargetEvent {
        &self.event
    }

    /// Current target, after any year advances.
    pub fn target(&self) -> NaiveDateTime {
        self.target
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Age the honoree turns on the current target date.
    pub fn current_age(&self) -> u32 {
        self.event.age + self.years_advanced
    }

    /// Evaluate the machine at `now`.
    ///
    /// Year advances happen inside the same tick, so the caller never waits
    /// on a stale target.
    pub fn tick(&mut self, now: NaiveDateTime) -> Tick {
        if self.phase != Phase::CountingDown {
            return Tick::Idle;
        }

        while self.correct_year(now) {}

        let delta = TimeDelta::between(self.target, now);
        if delta.days == -1 {
            self.phase = Phase::JustTriggered;
            tracing::info!(date = %self.target, age = self.current_age(), "birthday trigger fired");
            return Tick::Triggered {
                age: self.current_age(),
            };
        }
        tracing::trace!(?delta, "counting down");
        Tick::Counting(delta)
    }

    /// Move the target one year forward if it is more than a day in the past.
    ///
    /// Returns whether anything changed.
    pub fn correct_year(&mut self, now: NaiveDateTime) -> bool {
        TimeDelta::between(self.target, now).days < -1 && self.advance()
    }

    /// Enter the terminal celebration phase after the reveal.
    pub fn celebrate(&mut self) {
        if self.phase == Phase::JustTriggered {
            self.phase = Phase::Celebrating;
        }
    }

    /// False when the calendar has no next anniversary to move to.
    fn advance(&mut self) -> bool {
        let previous = self.target;
        let next = anniversary(self.event.date, self.years_advanced + 1);
        if next <= previous {
            return false;
        }
        self.years_advanced += 1;
        self.target = next;
        tracing::info!(from = %previous, to = %self.target, "birthday already passed, advancing target year");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn countdown() -> Countdown {
        Countdown::new(TargetEvent::new("Siro Bayón", at(2023, 11, 4, 0), 39, "Metallica"))
    }

    #[test]
    fn test_counting_down_half_day_before() {
        let mut cd = countdown();
        match cd.tick(at(2023, 11, 3, 12)) {
            Tick::Counting(delta) => {
                assert_eq!(delta.days, 0);
                assert_eq!(delta.hours, 12);
                assert_eq!((delta.minutes, delta.seconds), (0, 0));
            }
            other => panic!("expected counting, got {other:?}"),
        }
        assert_eq!(cd.phase(), Phase::CountingDown);
    }

    #[test]
    fn test_triggers_on_the_day() {
        let mut cd = countdown();
        assert_eq!(cd.tick(at(2023, 11, 4, 8)), Tick::Triggered { age: 39 });
        assert_eq!(cd.phase(), Phase::JustTriggered);
    }

    #[test]
    fn test_exact_target_still_counts() {
        let mut cd = countdown();
        assert!(matches!(cd.tick(at(2023, 11, 4, 0)), Tick::Counting(d) if d.total_seconds() == 0));
    }

    #[test]
    fn test_trigger_fires_once() {
        let mut cd = countdown();
        assert!(matches!(cd.tick(at(2023, 11, 4, 1)), Tick::Triggered { .. }));
        assert_eq!(cd.tick(at(2023, 11, 4, 2)), Tick::Idle);
        cd.celebrate();
        assert_eq!(cd.phase(), Phase::Celebrating);
        assert_eq!(cd.tick(at(2023, 11, 4, 3)), Tick::Idle);
    }

    #[test]
    fn test_late_start_advances_year() {
        let mut cd = countdown();
        // Two days after the birthday: next year's countdown
        match cd.tick(at(2023, 11, 6, 0)) {
            Tick::Counting(delta) => {
                assert!(!delta.is_past());
                assert_eq!(delta.days, 364);
            }
            other => panic!("expected counting, got {other:?}"),
        }
        assert_eq!(cd.target(), at(2024, 11, 4, 0));
        assert_eq!(cd.current_age(), 40);
    }

    #[test]
    fn test_multi_year_gap_advances_repeatedly() {
        let mut cd = countdown();
        assert!(matches!(cd.tick(at(2026, 10, 16, 0)), Tick::Counting(_)));
        assert_eq!(cd.target(), at(2026, 11, 4, 0));
        assert_eq!(cd.current_age(), 42);
    }

    #[test]
    fn test_late_start_on_a_later_birthday_triggers() {
        let mut cd = countdown();
        assert_eq!(cd.tick(at(2025, 11, 4, 20)), Tick::Triggered { age: 41 });
    }

    #[test]
    fn test_correct_year_is_idempotent_when_ahead() {
        let mut cd = countdown();
        assert!(!cd.correct_year(at(2023, 1, 1, 0)));
        assert!(!cd.correct_year(at(2023, 11, 4, 12)));
        assert_eq!(cd.target(), at(2023, 11, 4, 0));

        assert!(cd.correct_year(at(2023, 11, 6, 0)));
        assert_eq!(cd.target(), at(2024, 11, 4, 0));
        assert!(!cd.correct_year(at(2023, 11, 6, 0)));
    }

    #[test]
    fn test_leap_day_returns_to_the_29th() {
        let mut cd = Countdown::new(TargetEvent::new("Ana", at(2024, 2, 29, 0), 30, "mar"));
        assert!(matches!(cd.tick(at(2028, 2, 10, 0)), Tick::Counting(d) if d.days == 19));
        assert_eq!(cd.target(), at(2028, 2, 29, 0));
        assert_eq!(cd.current_age(), 34);
    }

    #[test]
    fn test_leap_day_triggers_on_the_28th_in_common_years() {
        let mut cd = Countdown::new(TargetEvent::new("Ana", at(2024, 2, 29, 0), 30, "mar"));
        assert_eq!(cd.tick(at(2025, 2, 28, 9)), Tick::Triggered { age: 31 });
        assert_eq!(cd.target(), at(2025, 2, 28, 0));
    }

    #[test]
    fn test_sweep_triggers_exactly_once() {
        let mut cd = countdown();
        let mut now = at(2023, 11, 1, 0);
        let mut triggers = 0;
        while now < at(2023, 11, 8, 0) {
            if let Tick::Triggered { .. } = cd.tick(now) {
                triggers += 1;
            }
            now += Duration::minutes(17);
        }
        assert_eq!(triggers, 1);
    }
}
