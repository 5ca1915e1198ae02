// SPDX-License-Identifier: MIT

//!
//! Pages
//!

use crate::{LaneHeading, RenderInstruction, TimeTick};
use flight_timeline_core::TimeWindow;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// One page of the chart: a day window and the flights it owns
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    /// 1-based, in chronological order
    pub number: usize,

    pub title: String,

    /// The span of time shown
    pub window: TimeWindow,

    /// One per aircraft, bottom row first
    pub lanes: Vec<LaneHeading>,

    pub ticks: Vec<TimeTick>,

    /// Ordered by row (bottom first), then departure
    pub instructions: Vec<RenderInstruction>,
}

/// Flights that were left off the chart, and why
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LayoutDiagnostics {
    /// Tails not in the fleet, and how many flights each had
    pub unknown_tails: BTreeMap<String, usize>,

    /// Rows whose arrival isn't after their departure
    pub malformed_rows: usize,
}

impl LayoutDiagnostics {
    /// The number of flights left off the chart
    pub fn excluded_flights(&self) -> usize {
        self.unknown_tails.values().sum::<usize>() + self.malformed_rows
    }
}

/// Everything produced for one rendering request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub pages: Vec<Page>,
    pub diagnostics: LayoutDiagnostics,
}

impl Layout {
    /// Every instruction on every page
    pub fn instructions(&self) -> impl Iterator<Item = &RenderInstruction> {
        self.pages.iter().flat_map(|page| page.instructions.iter())
    }
}
