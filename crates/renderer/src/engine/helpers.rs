// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// The number of hours in the delta, as a fraction
pub(crate) fn as_hours(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 / 3600.0
}

/// Midnight at the start of the instant's calendar day
pub(crate) fn floor_to_day(instant: NaiveDateTime) -> NaiveDateTime {
    instant.date().and_time(NaiveTime::MIN)
}

/// The first whole hour at or after the instant (`None` past the last
/// representable hour)
pub(crate) fn ceiling_to_hour(instant: NaiveDateTime) -> Option<NaiveDateTime> {
    let floored = instant.with_minute(0)?.with_second(0)?.with_nanosecond(0)?;
    if floored == instant {
        Some(floored)
    } else {
        floored.checked_add_signed(TimeDelta::hours(1))
    }
}

/// e.g. `09:05`
pub(crate) fn hours_and_minutes(instant: NaiveDateTime) -> String {
    instant.format("%H:%M").to_string()
}
