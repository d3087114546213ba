//! Wall-clock access. Synthesis and the "last updated" stamp read time through
//! [`Clock`] so tests can pin "today".

use time::{Date, OffsetDateTime};

pub trait Clock {
    fn now(&self) -> OffsetDateTime;

    fn today(&self) -> Date {
        self.now().date()
    }
}

/// Local time when the platform can report an offset, UTC otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub OffsetDateTime);

impl FixedClock {
    pub fn new(at: OffsetDateTime) -> Self {
        Self(at)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> OffsetDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn fixed_clock_reports_its_instant() {
        let clock = FixedClock::new(datetime!(2026-03-14 09:26 UTC));
        assert_eq!(clock.now(), datetime!(2026-03-14 09:26 UTC));
        assert_eq!(clock.today(), time::macros::date!(2026-03-14));
    }

    #[test]
    fn system_clock_is_close_to_utc_now() {
        let delta = SystemClock.now() - OffsetDateTime::now_utc();
        assert!(delta.whole_seconds().abs() < 5);
    }
}
