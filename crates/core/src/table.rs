// SPDX-License-Identifier: MIT

//!
//! The schedule table, as it arrives from the feed, and its conversion into
//! [`FlightRecord`]s
//!

use crate::{DateFormat, DateParser, FlightError, FlightRecord, TEXT_PLACEHOLDER, TableError};
use log::{debug, warn};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Aircraft registration
pub const COLUMN_TAIL: &str = "Reg.";

/// Scheduled time of departure
pub const COLUMN_DEPARTURE: &str = "STD";

/// Scheduled time of arrival
pub const COLUMN_ARRIVAL: &str = "STA";

pub const COLUMN_FLIGHT: &str = "Flight";
pub const COLUMN_TRIP: &str = "Trip";
pub const COLUMN_NOTES: &str = "Notas";

/// Additional crew on the trip
pub const COLUMN_CREW_NOTE: &str = "Tripadi";

pub const COLUMN_ORIGIN: &str = "From";
pub const COLUMN_DESTINATION: &str = "To";

/// Every column that must be present, in the order they are checked
pub const REQUIRED_COLUMNS: [&str; 9] = [
    COLUMN_TAIL,
    COLUMN_DEPARTURE,
    COLUMN_ARRIVAL,
    COLUMN_FLIGHT,
    COLUMN_TRIP,
    COLUMN_NOTES,
    COLUMN_CREW_NOTE,
    COLUMN_ORIGIN,
    COLUMN_DESTINATION,
];

/// The tabular schedule feed: one row per flight leg, keyed by column name
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct FlightTable {
    rows: Vec<Map<String, Value>>,
}

/// The result of reading a [`FlightTable`]
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFlights {
    /// The well-formed flights, in table order
    pub flights: Vec<FlightRecord>,

    /// The format chosen for the departure and arrival columns
    pub formats: (DateFormat, DateFormat),

    /// How many rows were dropped because they don't arrive after departing
    pub malformed_rows: usize,
}

impl FlightTable {
    /// Create a table from rows
    pub fn from_rows(rows: Vec<Map<String, Value>>) -> Self {
        Self { rows }
    }

    /// Read a table from JSON.  Accepts either an array of row objects, or an
    /// object of columns each mapping a row index to a value.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let value: Value =
            serde_json::from_str(json).map_err(|error| TableError::InvalidTable(error.to_string()))?;
        match value {
            Value::Array(rows) => {
                let rows = rows
                    .into_iter()
                    .enumerate()
                    .map(|(i, row)| match row {
                        Value::Object(row) => Ok(row),
                        _ => Err(TableError::InvalidTable(format!("row {i} is not an object"))),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::from_rows(rows))
            }
            Value::Object(columns) => Self::from_columns(columns),
            _ => Err(TableError::InvalidTable(String::from(
                "expected an array of rows or an object of columns",
            ))),
        }
    }

    /// Build rows from `{"column": {"0": value, "1": value}}` (or arrays in
    /// place of the inner objects)
    fn from_columns(columns: Map<String, Value>) -> Result<Self, TableError> {
        let mut rows: BTreeMap<RowIndex, Map<String, Value>> = BTreeMap::new();
        for (column, cells) in columns {
            let cells: Vec<(RowIndex, Value)> = match cells {
                Value::Object(cells) => cells
                    .into_iter()
                    .map(|(index, value)| (RowIndex::from(index), value))
                    .collect(),
                Value::Array(cells) => cells
                    .into_iter()
                    .enumerate()
                    .map(|(index, value)| (RowIndex::Number(index as u64), value))
                    .collect(),
                _ => {
                    return Err(TableError::InvalidTable(format!(
                        "column `{column}` is not an object or array"
                    )));
                }
            };
            for (index, value) in cells {
                rows.entry(index).or_default().insert(column.clone(), value);
            }
        }
        Ok(Self::from_rows(rows.into_values().collect()))
    }

    /// The number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether any row has the column
    pub fn has_column(&self, column: &str) -> bool {
        self.rows.iter().any(|row| row.contains_key(column))
    }

    /// Fail with the first required column that no row has
    pub fn ensure_required_columns(&self) -> Result<(), TableError> {
        match REQUIRED_COLUMNS
            .iter()
            .find(|column| !self.has_column(column))
        {
            Some(column) => Err(TableError::MissingColumn(column.to_string())),
            None => Ok(()),
        }
    }

    /// The text of a cell, or `None` if the cell is absent or `null`
    pub fn cell(&self, row: usize, column: &str) -> Option<String> {
        match self.rows.get(row)?.get(column)? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            Value::Bool(boolean) => Some(boolean.to_string()),
            other => Some(other.to_string()),
        }
    }

    /// The text of a cell, or [`TEXT_PLACEHOLDER`] if it is absent
    pub fn text(&self, row: usize, column: &str) -> String {
        self.cell(row, column)
            .unwrap_or_else(|| TEXT_PLACEHOLDER.to_string())
    }

    /// Every cell in the column
    pub fn column(&self, column: &str) -> Vec<Option<String>> {
        (0..self.len()).map(|row| self.cell(row, column)).collect()
    }

    /// Check the columns, parse both date columns, and build a record per row.
    /// Rows that don't arrive after departing are dropped and counted.
    pub fn parse_flights(&self, parser: &DateParser) -> Result<ParsedFlights, TableError> {
        debug!("parsing {} table rows", self.len());
        self.ensure_required_columns()?;

        let (departure_format, departures) =
            parser.parse_column(COLUMN_DEPARTURE, &self.column(COLUMN_DEPARTURE))?;
        let (arrival_format, arrivals) =
            parser.parse_column(COLUMN_ARRIVAL, &self.column(COLUMN_ARRIVAL))?;

        let mut flights = Vec::with_capacity(self.len());
        let mut malformed_rows = 0;
        for (row, (departure, arrival)) in departures.into_iter().zip(arrivals).enumerate() {
            match FlightRecord::from(self.text(row, COLUMN_TAIL), departure, arrival) {
                Ok(flight) => flights.push(
                    flight
                        .with_flight_number(self.text(row, COLUMN_FLIGHT))
                        .with_trip_code(self.text(row, COLUMN_TRIP))
                        .with_notes(self.text(row, COLUMN_NOTES))
                        .with_crew_note(self.text(row, COLUMN_CREW_NOTE))
                        .with_route(
                            self.text(row, COLUMN_ORIGIN),
                            self.text(row, COLUMN_DESTINATION),
                        ),
                ),
                Err(FlightError::Malformed { tail, .. }) => {
                    warn!("dropping row {row} (`{tail}`): arrival is not after departure");
                    malformed_rows += 1;
                }
            }
        }

        Ok(ParsedFlights {
            flights,
            formats: (departure_format, arrival_format),
            malformed_rows,
        })
    }
}

/// Row keys in column-oriented JSON.  Numeric keys sort numerically, ahead of
/// any others.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum RowIndex {
    Number(u64),
    Other(String),
}

impl From<String> for RowIndex {
    fn from(value: String) -> Self {
        match value.parse::<u64>() {
            Ok(number) => RowIndex::Number(number),
            Err(_) => RowIndex::Other(value),
        }
    }
}
