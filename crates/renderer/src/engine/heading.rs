// SPDX-License-Identifier: MIT

//!
//! Headings
//!

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::Debug;

/// The label at the side of a lane
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LaneHeading {
    pub tail: String,
    pub row: usize,
}

/// A labelled tick along the time axis
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TimeTick {
    pub at: NaiveDateTime,

    /// e.g. `13:00`
    pub text: String,
}
