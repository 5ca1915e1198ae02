// SPDX-License-Identifier: MIT

//!
//! Colours
//!

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub colour: Colour,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    pub fill_colour: Colour,
    pub border: Option<LineStyle>,
}

/// Alternating lane backgrounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BackgroundColours {
    pub a: Colour,
    pub b: Colour,
}

/// The text colour of each kind of flight label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelColours {
    pub flight_number: Colour,
    pub trip_code: Colour,
    pub notes: Colour,
    pub crew_note: Colour,
    pub route: Colour,
    pub times: Colour,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartColours {
    pub background: BackgroundColours,
    pub grid_line: LineStyle,
    pub bar: BoxStyle,
    pub labels: LabelColours,
    pub heading_text: Colour,
}

impl Default for ChartColours {
    fn default() -> Self {
        let black = Colour::from_rgb(0, 0, 0);
        Self {
            background: BackgroundColours {
                a: Colour::from_rgb(255, 255, 255),
                b: Colour::from_rgb(0xf4, 0xf8, 0xfb),
            },
            grid_line: LineStyle {
                colour: Colour::from_rgb(0xd3, 0xd3, 0xd3),
                thickness: 0.5,
            },
            bar: BoxStyle {
                fill_colour: Colour::from_rgb(0xad, 0xd8, 0xe6),
                border: None,
            },
            labels: LabelColours {
                flight_number: black,
                trip_code: Colour::from_rgb(0, 0, 0xff),
                notes: Colour::from_rgb(0, 0x80, 0),
                crew_note: Colour::from_rgb(0x80, 0, 0x80),
                route: black,
                times: black,
            },
            heading_text: black,
        }
    }
}
