// SPDX-License-Identifier: MIT

//!
//! Errors raised while reading a schedule table, and the structured form they
//! take when reported back to whoever made the request
//!

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can arise while turning a [`crate::FlightTable`] into
/// [`crate::FlightRecord`]s
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A required column is absent from every row
    #[error("Missing column in input data: `{0}`")]
    MissingColumn(String),

    /// No configured date format parses every value of the column
    #[error("Date conversion error: none of the formats matched column `{column}`")]
    DateFormat { column: String },

    /// The input could not be read as a table at all
    #[error("Table parsing error: {0}")]
    InvalidTable(String),
}

/// How a failed request should be classified
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The input is most likely wrong (missing columns, bad dates, bad JSON)
    BadInput,

    /// The input was readable but nothing could be drawn from it
    NoOutput,
}

/// A failed rendering request, ready to be handed back to the client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub message: String,
    pub kind: FailureKind,
}

impl ValidationFailure {
    pub fn new<S: ToString>(message: S, kind: FailureKind) -> Self {
        Self {
            message: message.to_string(),
            kind,
        }
    }

    /// Whether the failure is most likely down to bad input
    pub fn is_bad_input(&self) -> bool {
        self.kind == FailureKind::BadInput
    }
}

impl From<TableError> for ValidationFailure {
    fn from(value: TableError) -> Self {
        ValidationFailure::new(value, FailureKind::BadInput)
    }
}
