// SPDX-License-Identifier: MIT

//!
//! The flight record type
//!

use crate::TimeWindow;
use chrono::{NaiveDateTime, TimeDelta};
use serde::Serialize;
use thiserror::Error;

/// What free text fields hold when the feed leaves them empty.  A single space
/// rather than an empty string so that something is always drawn.
pub const TEXT_PLACEHOLDER: &str = " ";

/// Errors that can arise in relation to a [`FlightRecord`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlightError {
    /// The arrival doesn't come strictly after the departure
    #[error("Flight `{tail}` arrives ({arrival}) before it departs ({departure})")]
    Malformed {
        tail: String,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    },
}

/// One scheduled flight leg.  Immutable once created.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlightRecord {
    /// The aircraft identifier (registration)
    tail: String,

    flight_number: String,
    trip_code: String,
    notes: String,
    crew_note: String,
    origin: String,
    destination: String,

    /// When the leg is scheduled to leave and arrive
    schedule: TimeWindow,
}

impl FlightRecord {
    /// Create a new [`FlightRecord`] if the arrival is after the departure.
    /// All text fields start out as [`TEXT_PLACEHOLDER`].
    pub fn from<S: ToString>(
        tail: S,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
    ) -> Result<Self, FlightError> {
        let tail = tail.to_string();
        let schedule =
            TimeWindow::from(departure, arrival).map_err(|_| FlightError::Malformed {
                tail: tail.clone(),
                departure,
                arrival,
            })?;
        let placeholder = || TEXT_PLACEHOLDER.to_string();
        Ok(Self {
            tail,
            flight_number: placeholder(),
            trip_code: placeholder(),
            notes: placeholder(),
            crew_note: placeholder(),
            origin: placeholder(),
            destination: placeholder(),
            schedule,
        })
    }

    pub fn with_flight_number<S: ToString>(mut self, flight_number: S) -> Self {
        self.flight_number = or_placeholder(flight_number);
        self
    }

    pub fn with_trip_code<S: ToString>(mut self, trip_code: S) -> Self {
        self.trip_code = or_placeholder(trip_code);
        self
    }

    pub fn with_notes<S: ToString>(mut self, notes: S) -> Self {
        self.notes = or_placeholder(notes);
        self
    }

    pub fn with_crew_note<S: ToString>(mut self, crew_note: S) -> Self {
        self.crew_note = or_placeholder(crew_note);
        self
    }

    pub fn with_route<S: ToString, T: ToString>(mut self, origin: S, destination: T) -> Self {
        self.origin = or_placeholder(origin);
        self.destination = or_placeholder(destination);
        self
    }

    pub fn tail(&self) -> &str {
        &self.tail
    }

    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn trip_code(&self) -> &str {
        &self.trip_code
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn crew_note(&self) -> &str {
        &self.crew_note
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn departure(&self) -> NaiveDateTime {
        self.schedule.start()
    }

    pub fn arrival(&self) -> NaiveDateTime {
        self.schedule.end()
    }

    /// The scheduled `[departure, arrival)` interval
    pub fn schedule(&self) -> TimeWindow {
        self.schedule
    }

    /// Scheduled block time (always positive)
    pub fn duration(&self) -> TimeDelta {
        self.schedule.duration()
    }
}

fn or_placeholder<S: ToString>(text: S) -> String {
    let text = text.to_string();
    if text.is_empty() {
        TEXT_PLACEHOLDER.to_string()
    } else {
        text
    }
}
