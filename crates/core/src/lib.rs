// SPDX-License-Identifier: MIT

//!
//! *Part of the wider flight timeline project*
//!
//! This crate defines the basic datatypes used across the flight timeline
//! project (layout engine, SVG frontend, command line tool):
//!
//! - [`FlightTable`], the tabular schedule feed as it arrives (one row per
//!   flight leg)
//! - [`DateParser`], which turns the feed's textual timestamps into instants
//! - [`FlightRecord`], one validated leg
//! - [`AircraftOrder`], the fixed fleet ordering that decides lanes
//! - [`TimeWindow`], a half-open span of time
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.
//!

mod date;
mod error;
mod fleet;
mod flight;
mod table;
mod window;

pub use date::*;
pub use error::*;
pub use fleet::*;
pub use flight::*;
pub use table::*;
pub use window::*;
