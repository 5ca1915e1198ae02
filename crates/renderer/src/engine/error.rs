// SPDX-License-Identifier: MIT

//!
//! Layout errors
//!

use flight_timeline_core::{FailureKind, TableError, ValidationFailure, WindowError};
use thiserror::Error;

/// Errors that can arise while laying out a schedule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The table is missing columns or has unreadable dates
    #[error(transparent)]
    Table(#[from] TableError),

    /// Not a single page could be produced
    #[error("No flights to draw: every flight is for an unknown aircraft or has a malformed interval")]
    EmptyResult,

    #[error("Page windows must be positive and at least as long as the step between them")]
    InvalidPagination,

    #[error(transparent)]
    Window(#[from] WindowError),
}

impl From<LayoutError> for ValidationFailure {
    fn from(value: LayoutError) -> Self {
        match value {
            LayoutError::Table(error) => error.into(),
            other => ValidationFailure::new(other, FailureKind::NoOutput),
        }
    }
}
