// SPDX-License-Identifier: MIT

//!
//! The time window type
//!

use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use thiserror::Error;

/// Errors that can arise in relation to a [`TimeWindow`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WindowError {
    /// The end doesn't come after the start
    #[error("Window end `{end}` must be after its start `{start}`")]
    NotIncreasing {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Offsetting the instant leaves the range of representable dates
    #[error("`{0}` can't be offset without leaving the supported range of dates")]
    OutOfRange(NaiveDateTime),
}

/// A half-open span of time, `[start, end)`, where the end is always strictly
/// after the start
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    /// Create a new [`TimeWindow`] if the end is after the start
    pub fn from(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, WindowError> {
        if end > start {
            Ok(Self { start, end })
        } else {
            Err(WindowError::NotIncreasing { start, end })
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// The length of the window (always positive)
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Create the window `[start, start + length)`, failing rather than
    /// overflowing at the ends of the calendar
    pub fn starting_at(start: NaiveDateTime, length: TimeDelta) -> Result<Self, WindowError> {
        let end = start
            .checked_add_signed(length)
            .ok_or(WindowError::OutOfRange(start))?;
        Self::from(start, end)
    }

    /// Whether the instant lies inside the window (the end is excluded)
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn from() {
        assert!(TimeWindow::from(at(10), at(12)).is_ok());
        assert!(TimeWindow::from(at(10), at(10)).is_err());
        assert!(TimeWindow::from(at(12), at(10)).is_err());
    }

    #[test]
    fn contains_is_half_open() {
        let window = TimeWindow::from(at(10), at(12)).unwrap();
        assert!(window.contains(at(10)));
        assert!(window.contains(at(11)));
        assert!(!window.contains(at(12)));
        assert!(!window.contains(at(9)));
        assert_eq!(window.duration(), TimeDelta::hours(2));
    }

    #[test]
    fn starting_at() {
        let window = TimeWindow::starting_at(at(10), TimeDelta::hours(2)).unwrap();
        assert_eq!(window.end(), at(12));
        assert!(TimeWindow::starting_at(at(10), TimeDelta::zero()).is_err());

        let last_day = NaiveDate::MAX.and_hms_opt(10, 0, 0).unwrap();
        assert_eq!(
            TimeWindow::starting_at(last_day, TimeDelta::days(1)),
            Err(WindowError::OutOfRange(last_day))
        );
    }
}
