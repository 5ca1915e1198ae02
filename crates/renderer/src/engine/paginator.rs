// SPDX-License-Identifier: MIT

//!
//! Splitting a multi-day schedule into day pages
//!

use crate::{LayoutError, floor_to_day};
use chrono::{NaiveDateTime, TimeDelta};
use flight_timeline_core::{FlightRecord, TimeWindow, WindowError};
use log::debug;

/// The shape of the day windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    day_offset: TimeDelta,
    window_length: TimeDelta,
    end_trim: TimeDelta,
    step: TimeDelta,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            day_offset: TimeDelta::hours(5),
            window_length: TimeDelta::hours(27),
            end_trim: TimeDelta::minutes(1),
            step: TimeDelta::days(1),
        }
    }
}

impl PaginationParams {
    /// Create new params if each page can show every flight it owns.
    ///
    /// - `day_offset`: how long after midnight a page starts
    /// - `window_length`: how much time a page shows, before `end_trim` is
    ///   taken off its end
    /// - `step`: how far apart consecutive pages start (and so how long the
    ///   stretch of departures each owns)
    pub fn from(
        day_offset: TimeDelta,
        window_length: TimeDelta,
        end_trim: TimeDelta,
        step: TimeDelta,
    ) -> Result<Self, LayoutError> {
        if step <= TimeDelta::zero() || end_trim < TimeDelta::zero() {
            return Err(LayoutError::InvalidPagination);
        }
        if window_length.checked_sub(&end_trim).is_none_or(|shown| shown < step) {
            return Err(LayoutError::InvalidPagination);
        }
        Ok(Self {
            day_offset,
            window_length,
            end_trim,
            step,
        })
    }

    pub fn day_offset(&self) -> TimeDelta {
        self.day_offset
    }

    pub fn window_length(&self) -> TimeDelta {
        self.window_length
    }

    pub fn step(&self) -> TimeDelta {
        self.step
    }
}

/// One page's worth of flights
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlot<'a> {
    /// The span of time the page shows
    pub window: TimeWindow,

    /// The departures the page is responsible for.  These tile the time line
    /// without overlapping, so every flight belongs to exactly one page.
    pub owned: TimeWindow,

    /// The flights departing in `owned`, by departure (ties keep their input
    /// order)
    pub flights: Vec<&'a FlightRecord>,
}

/// Partitions flights into overlapping day windows, choosing each flight's
/// page by its departure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paginator {
    params: PaginationParams,
}

impl Paginator {
    pub fn new(params: PaginationParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> PaginationParams {
        self.params
    }

    /// The page window and owned departures for the day starting at midnight
    /// `day`
    pub fn windows_for_day(&self, day: NaiveDateTime) -> Result<(TimeWindow, TimeWindow), WindowError> {
        let start = day
            .checked_add_signed(self.params.day_offset)
            .ok_or(WindowError::OutOfRange(day))?;
        let window =
            TimeWindow::starting_at(start, self.params.window_length - self.params.end_trim)?;
        let owned = TimeWindow::starting_at(start, self.params.step)?;
        Ok((window, owned))
    }

    /// Every day window, in order, that owns at least one flight.
    ///
    /// Departures are sorted once, then handed out to consecutive days until
    /// none are left.  The first day is the one whose owned stretch holds the
    /// earliest departure.
    pub fn paginate<'a>(&self, flights: &'a [FlightRecord]) -> Result<Vec<PageSlot<'a>>, WindowError> {
        let mut departures: Vec<&FlightRecord> = flights.iter().collect();
        departures.sort_by_key(|flight| flight.departure());
        let Some(earliest) = departures.first().map(|flight| flight.departure()) else {
            return Ok(Vec::new());
        };

        let mut day = earliest
            .checked_sub_signed(self.params.day_offset)
            .map(floor_to_day)
            .ok_or(WindowError::OutOfRange(earliest))?;
        let mut rest = departures.as_slice();
        let mut slots = Vec::new();
        while !rest.is_empty() {
            let (window, owned) = self.windows_for_day(day)?;
            let owned_count = rest
                .iter()
                .take_while(|flight| owned.contains(flight.departure()))
                .count();
            let (selected, remaining) = rest.split_at(owned_count);
            rest = remaining;
            if !selected.is_empty() {
                debug!(
                    "window {} to {} owns {} flights",
                    window.start(),
                    window.end(),
                    selected.len()
                );
                slots.push(PageSlot {
                    window,
                    owned,
                    flights: selected.to_vec(),
                });
            }
            day = day
                .checked_add_signed(self.params.step)
                .ok_or(WindowError::OutOfRange(day))?;
        }
        Ok(slots)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn flight(departure: NaiveDateTime, hours: i64) -> FlightRecord {
        FlightRecord::from("N330QT", departure, departure + TimeDelta::hours(hours)).unwrap()
    }

    #[test]
    fn params_from() {
        assert!(
            PaginationParams::from(
                TimeDelta::hours(5),
                TimeDelta::hours(27),
                TimeDelta::minutes(1),
                TimeDelta::days(1)
            )
            .is_ok()
        );

        // Shorter than the step: some owned departures wouldn't be shown
        assert!(
            PaginationParams::from(
                TimeDelta::hours(5),
                TimeDelta::hours(24),
                TimeDelta::minutes(1),
                TimeDelta::days(1)
            )
            .is_err()
        );
        assert!(
            PaginationParams::from(
                TimeDelta::hours(5),
                TimeDelta::hours(27),
                TimeDelta::zero(),
                TimeDelta::zero()
            )
            .is_err()
        );
    }

    #[test]
    fn window_is_27_hours_from_5am() {
        let paginator = Paginator::default();
        let (window, owned) = paginator.windows_for_day(at(1, 0, 0)).unwrap();
        assert_eq!(window.start(), at(1, 5, 0));
        assert_eq!(window.end(), at(2, 7, 59));
        assert_eq!(owned.end(), at(2, 5, 0));
    }

    #[test]
    fn no_flights_no_pages() {
        assert!(Paginator::default().paginate(&[]).unwrap().is_empty());
    }

    #[test]
    fn single_flight() {
        let flights = [flight(at(1, 10, 0), 2)];
        let slots = Paginator::default().paginate(&flights).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].window.start(), at(1, 5, 0));
        assert_eq!(slots[0].flights, vec![&flights[0]]);
    }

    #[test]
    fn early_departure_belongs_to_previous_day() {
        let flights = [flight(at(2, 4, 0), 1), flight(at(2, 5, 0), 1)];
        let slots = Paginator::default().paginate(&flights).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].window.start(), at(1, 5, 0));
        assert_eq!(slots[0].flights, vec![&flights[0]]);
        assert_eq!(slots[1].window.start(), at(2, 5, 0));
        assert_eq!(slots[1].flights, vec![&flights[1]]);
    }

    #[test]
    fn empty_days_are_skipped() {
        let flights = [flight(at(1, 10, 0), 2), flight(at(4, 10, 0), 2)];
        let slots = Paginator::default().paginate(&flights).unwrap();
        let starts: Vec<NaiveDateTime> = slots.iter().map(|slot| slot.window.start()).collect();
        assert_eq!(starts, vec![at(1, 5, 0), at(4, 5, 0)]);
    }

    #[test]
    fn every_flight_is_selected_exactly_once() {
        // Every 50 minutes for four days, including the overlap hours
        let flights: Vec<FlightRecord> = (0..115)
            .map(|i| flight(at(1, 0, 0) + TimeDelta::minutes(50 * i), 3))
            .collect();
        let slots = Paginator::default().paginate(&flights).unwrap();
        for flight in &flights {
            let count = slots
                .iter()
                .filter(|slot| slot.flights.contains(&flight))
                .count();
            assert_eq!(count, 1, "flight departing {}", flight.departure());
        }
        for slot in &slots {
            for flight in &slot.flights {
                assert!(slot.window.contains(flight.departure()));
            }
        }
    }

    #[test]
    fn negative_day_offset_still_selects_late_departures() {
        let params = PaginationParams::from(
            TimeDelta::hours(-5),
            TimeDelta::hours(27),
            TimeDelta::minutes(1),
            TimeDelta::days(1),
        )
        .unwrap();
        let paginator = Paginator::new(params);

        let flights = [flight(at(1, 22, 0), 1)];
        let slots = paginator.paginate(&flights).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].window.start(), at(1, 19, 0));
        assert_eq!(slots[0].flights, vec![&flights[0]]);

        let flights: Vec<FlightRecord> = (0..60)
            .map(|i| flight(at(1, 0, 0) + TimeDelta::minutes(70 * i), 1))
            .collect();
        let slots = paginator.paginate(&flights).unwrap();
        let selected: usize = slots.iter().map(|slot| slot.flights.len()).sum();
        assert_eq!(selected, flights.len());
    }

    #[test]
    fn slot_flights_are_by_departure_then_input_order() {
        let first = flight(at(1, 12, 0), 1);
        let second = flight(at(1, 10, 0), 2);
        let third = flight(at(1, 10, 0), 1);
        let flights = [first, second, third];
        let slots = Paginator::default().paginate(&flights).unwrap();
        assert_eq!(slots[0].flights, vec![&flights[1], &flights[2], &flights[0]]);
    }

    #[test]
    fn distant_arrival_adds_no_pages() {
        let departure = at(1, 10, 0);
        let flights = [
            flight(departure, 1),
            FlightRecord::from("N331QT", departure, departure + TimeDelta::days(365 * 30)).unwrap(),
        ];
        let slots = Paginator::default().paginate(&flights).unwrap();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].flights.len(), 2);
    }

    #[test]
    fn windows_past_the_calendar_are_errors() {
        let last_day = NaiveDate::MAX.and_hms_opt(10, 0, 0).unwrap();
        let flights = [FlightRecord::from("N330QT", last_day, last_day + TimeDelta::hours(2)).unwrap()];
        assert!(matches!(
            Paginator::default().paginate(&flights),
            Err(WindowError::OutOfRange(_))
        ));

        let first_day = NaiveDate::MIN.and_hms_opt(1, 0, 0).unwrap();
        let flights = [FlightRecord::from("N330QT", first_day, first_day + TimeDelta::hours(2)).unwrap()];
        assert_eq!(
            Paginator::default().paginate(&flights),
            Err(WindowError::OutOfRange(first_day))
        );
    }
}
