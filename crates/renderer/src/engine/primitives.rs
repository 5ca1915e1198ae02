// SPDX-License-Identifier: MIT

//!
//! Primitives
//!
//! Everything here is positioned in chart space: x is an instant and y is in
//! lane units (row 0 at the bottom, one unit per lane).  Frontends map chart
//! space onto whatever surface they draw on.
//!

use crate::{BoxStyle, ClippedInterval, Lane, colour::Colour};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::Debug;

/// A point in chart space
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Anchor {
    pub x: NaiveDateTime,
    pub y: f64,
}

/// Which part of the text sits on the anchor horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HAlign {
    Left,
    Center,
    Right,
}

/// Which part of the text sits on the anchor vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub colour: Colour,
    pub font_size: f64,
}

/// What a label shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelKind {
    FlightNumber,
    TripCode,
    Notes,
    CrewNote,
    Origin,
    Destination,
    DepartureTime,
    ArrivalTime,
}

/// Information needed to draw one label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelPlacement {
    pub kind: LabelKind,
    pub text: String,
    pub anchor: Anchor,
    pub h_align: HAlign,
    pub v_align: VAlign,

    /// Whether the label is drawn inside the bar
    pub fits_in_bar: bool,

    pub style: TextStyle,
}

/// Information needed to draw a flight's bar
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bar {
    /// The visible part of the flight
    pub interval: ClippedInterval,

    /// The lowest y value of the bar
    pub y: f64,

    pub height: f64,

    pub style: BoxStyle,
}

impl Bar {
    /// The highest y value of the bar
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

/// Everything needed to draw one flight on one page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderInstruction {
    pub tail: String,
    pub lane: Lane,
    pub bar: Bar,
    pub labels: Vec<LabelPlacement>,
}

impl RenderInstruction {
    /// The first label of the kind (if it's drawn)
    pub fn label(&self, kind: LabelKind) -> Option<&LabelPlacement> {
        self.labels.iter().find(|label| label.kind == kind)
    }
}
