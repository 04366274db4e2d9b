//! Time left until the next quote. A quote day runs from one UTC midnight
//! to the next, and the page reloads once the countdown reaches zero.

use chrono::{DateTime, Days, NaiveTime, Utc};
use std::{fmt, time::Duration};

/// Delay between the countdown hitting zero and the refresh firing.
pub const RELOAD_DELAY: Duration = Duration::from_secs(1);

const MS_PER_HOUR: u64 = 3_600_000;
const MS_PER_MINUTE: u64 = 60_000;
const MS_PER_SECOND: u64 = 1_000;

pub fn next_refresh(now: DateTime<Utc>) -> DateTime<Utc> {
    match now.date_naive().checked_add_days(Days::new(1)) {
        Some(tomorrow) => tomorrow.and_time(NaiveTime::MIN).and_utc(),
        None => now,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Countdown {
    pub fn until_next_refresh(now: DateTime<Utc>) -> Self {
        Self::from_millis((next_refresh(now) - now).num_milliseconds())
    }

    /// Negative input is clamped to zero.
    pub fn from_millis(ms: i64) -> Self {
        let ms = ms.max(0) as u64;
        Self {
            hours: (ms / MS_PER_HOUR) as u32,
            minutes: ((ms % MS_PER_HOUR) / MS_PER_MINUTE) as u32,
            seconds: ((ms % MS_PER_MINUTE) / MS_PER_SECOND) as u32,
        }
    }

    pub fn is_due(&self) -> bool {
        self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Fires once per zero-crossing, even though several one-second ticks may
/// read `00:00:00` before the clock moves into the next day.
#[derive(Debug, Default)]
pub struct ReloadTrigger {
    fired: bool,
}

impl ReloadTrigger {
    pub fn observe(&mut self, countdown: Countdown) -> Option<Duration> {
        if !countdown.is_due() {
            self.fired = false;
            return None;
        }
        if self.fired {
            return None;
        }
        self.fired = true;
        Some(RELOAD_DELAY)
    }
}
