use crate::geometry::Turn;
use chrono::{NaiveTime, Timelike};
use derive_more::{Deref, Display, From, Into};

/// Local time of day to render. Time-zone resolution is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Deref, From, Into)]
pub struct Instant(NaiveTime);

impl Instant {
    pub fn from_hms_milli(hours: u32, minutes: u32, seconds: u32, millis: u32) -> Option<Self> {
        NaiveTime::from_hms_milli_opt(hours, minutes, seconds, millis).map(Self)
    }

    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Option<Self> {
        Self::from_hms_milli(hours, minutes, seconds, 0)
    }

    /// Captures the time of day of any chrono value, e.g. `Local::now()`.
    pub fn of<T: Timelike>(time: &T) -> Self {
        let time = NaiveTime::from_hms_nano_opt(
            time.hour(),
            time.minute(),
            time.second(),
            time.nanosecond(),
        )
        .unwrap_or_default();
        Self(time)
    }

    pub fn hours(&self) -> u32 {
        self.0.hour()
    }

    pub fn minutes(&self) -> u32 {
        self.0.minute()
    }

    pub fn seconds(&self) -> u32 {
        self.0.second()
    }

    /// Millisecond part; a leap-second overflow is folded into the last
    /// millisecond of the second.
    pub fn millis(&self) -> u32 {
        (self.0.nanosecond() / 1_000_000).min(999)
    }
}

/// Positions of the three hands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandTurns {
    pub hours: Turn,
    pub minutes: Turn,
    pub seconds: Turn,
}

impl HandTurns {
    /// Hour and minute hands always sweep; the milliseconds only reach the
    /// hands when `continuous` is set, otherwise the second hand jumps once
    /// per second.
    pub fn at(instant: Instant, continuous: bool) -> Self {
        let millis = if continuous { instant.millis() } else { 0 };

        let seconds = f64::from(instant.seconds()) + f64::from(millis) / 1000.0;
        let minutes = f64::from(instant.minutes()) + seconds / 60.0;
        let hours = f64::from(instant.hours()) + minutes / 60.0;

        Self {
            hours: Turn::new(hours / 12.0),
            minutes: Turn::new(minutes / 60.0),
            seconds: Turn::new(seconds / 60.0),
        }
    }
}
