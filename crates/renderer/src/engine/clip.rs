// SPDX-License-Identifier: MIT

//!
//! Clipping a flight to the part of it a page shows
//!

use chrono::{NaiveDateTime, TimeDelta};
use flight_timeline_core::TimeWindow;
use serde::Serialize;

/// The visible part of a flight on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClippedInterval {
    /// The visible `[start, end)`
    pub span: TimeWindow,

    /// The flight departs before the page starts
    pub clipped_start: bool,

    /// The flight arrives after the page ends
    pub clipped_end: bool,
}

impl ClippedInterval {
    pub fn start(&self) -> NaiveDateTime {
        self.span.start()
    }

    pub fn end(&self) -> NaiveDateTime {
        self.span.end()
    }

    pub fn duration(&self) -> TimeDelta {
        self.span.duration()
    }
}

/// How much of `interval` is displayed inside `window`.  Never negative, and
/// zero when they don't overlap.
pub fn clipped_duration(interval: TimeWindow, window: TimeWindow) -> TimeDelta {
    let mut start = interval.start();
    let mut duration = interval.duration();
    if start < window.start() {
        duration -= window.start() - start;
        start = window.start();
    }
    if start + duration > window.end() {
        duration = window.end() - start;
    }
    duration.max(TimeDelta::zero())
}

/// Clip the interval to the window.  `None` when nothing of it is visible, in
/// which case it must not be drawn on the page.
pub fn clip(interval: TimeWindow, window: TimeWindow) -> Option<ClippedInterval> {
    let duration = clipped_duration(interval, window);
    if duration <= TimeDelta::zero() {
        return None;
    }
    let start = interval.start().max(window.start());
    let span = TimeWindow::from(start, start + duration).ok()?;
    Some(ClippedInterval {
        span,
        clipped_start: interval.start() < window.start(),
        clipped_end: interval.end() > window.end(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + TimeDelta::hours(hour)
    }

    fn window(start: i64, end: i64) -> TimeWindow {
        TimeWindow::from(at(start), at(end)).unwrap()
    }

    #[test]
    fn inside_is_unchanged() {
        let clipped = clip(window(10, 12), window(5, 32)).unwrap();
        assert_eq!(clipped.span, window(10, 12));
        assert!(!clipped.clipped_start);
        assert!(!clipped.clipped_end);
    }

    #[test]
    fn matching_window_is_unchanged() {
        let clipped = clip(window(5, 32), window(5, 32)).unwrap();
        assert_eq!(clipped.span, window(5, 32));
        assert!(!clipped.clipped_start);
        assert!(!clipped.clipped_end);
    }

    #[test]
    fn clips_start() {
        let clipped = clip(window(3, 8), window(5, 32)).unwrap();
        assert_eq!(clipped.span, window(5, 8));
        assert!(clipped.clipped_start);
        assert_eq!(clipped.duration(), TimeDelta::hours(3));
    }

    #[test]
    fn clips_end() {
        let clipped = clip(window(30, 35), window(5, 32)).unwrap();
        assert_eq!(clipped.span, window(30, 32));
        assert!(clipped.clipped_end);
    }

    #[test]
    fn clips_both() {
        let clipped = clip(window(0, 40), window(5, 32)).unwrap();
        assert_eq!(clipped.span, window(5, 32));
        assert!(clipped.clipped_start && clipped.clipped_end);
    }

    #[test]
    fn outside_is_dropped() {
        assert_eq!(clipped_duration(window(1, 4), window(5, 32)), TimeDelta::zero());
        assert_eq!(clipped_duration(window(33, 35), window(5, 32)), TimeDelta::zero());
        assert!(clip(window(1, 5), window(5, 32)).is_none());
        assert!(clip(window(32, 35), window(5, 32)).is_none());
    }

    #[test]
    fn duration_is_bounded_and_shrinks_with_the_window() {
        let flight = window(8, 20);
        let mut previous = flight.duration();
        for narrowing in 0..10 {
            let duration = clipped_duration(flight, window(5 + narrowing, 24 - narrowing));
            assert!(duration >= TimeDelta::zero());
            assert!(duration <= flight.duration());
            assert!(duration <= previous);
            previous = duration;
        }
    }
}
