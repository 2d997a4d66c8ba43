use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp of a bar or a fill. Intraday feeds carry either a bare
/// time-of-day or a full local date-time, and both compare on time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stamp {
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl Stamp {
    /// Localize a UTC instant to the market's wall clock.
    pub fn from_utc(instant: DateTime<Utc>, tz: Tz) -> Self {
        Stamp::DateTime(instant.with_timezone(&tz).naive_local())
    }

    pub fn time_of_day(&self) -> NaiveTime {
        match self {
            Stamp::DateTime(dt) => dt.time(),
            Stamp::Time(t) => *t,
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Stamp::DateTime(dt) => Some(dt.date()),
            Stamp::Time(_) => None,
        }
    }

    /// Whole seconds since midnight (hour*3600 + minute*60 + second).
    /// Sub-second precision is dropped.
    pub fn elapsed_seconds(&self) -> u32 {
        self.time_of_day().num_seconds_from_midnight()
    }

    /// Sort key; bare times sort as if they had no date.
    pub fn sort_key(&self) -> (Option<NaiveDate>, NaiveTime) {
        (self.date(), self.time_of_day())
    }
}

impl From<NaiveTime> for Stamp {
    fn from(t: NaiveTime) -> Self {
        Stamp::Time(t)
    }
}

impl From<NaiveDateTime> for Stamp {
    fn from(dt: NaiveDateTime) -> Self {
        Stamp::DateTime(dt)
    }
}

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stamp::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            Stamp::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
        }
    }
}
