// SPDX-License-Identifier: MIT

//!
//! Points on a drawing surface
//!

use serde::Serialize;
use std::fmt::Debug;

pub type Size = Point;

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Space left around the plot area of a page
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            left: 60.0,
            right: 30.0,
            top: 50.0,
            bottom: 70.0,
        }
    }
}

impl Margins {
    /// The top left and bottom right corners of the plot area on a surface of
    /// the given size
    pub fn plot_area(&self, size: Size) -> (Point, Point) {
        (
            Point {
                x: self.left,
                y: self.top,
            },
            Point {
                x: size.x - self.right,
                y: size.y - self.bottom,
            },
        )
    }
}
