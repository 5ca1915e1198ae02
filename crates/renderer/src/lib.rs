// SPDX-License-Identifier: MIT

//!
//! *Part of the wider flight timeline project*
//!
//! This crate lays out flight schedules as timeline charts: one horizontal
//! lane per aircraft, one bar per flight, each annotated with its flight
//! number, trip code, notes, crew, and route.
//!
//! The core of the crate is a platform independent engine responsible for:
//!
//! - Assigning flights to lanes by a fixed aircraft ordering
//! - Splitting a multi-day schedule into overlapping day pages
//! - Clipping each bar to its page
//! - Deciding whether each label fits inside its bar, and where it goes if not
//!
//! The engine produces pages of drawing instructions in chart space (time
//! across, lanes up) and doesn't draw anything itself.  The rest of the crate
//! holds frontends that do.  There is currently only one:
//!
//! - SVG, one standalone document per page
//!
//! ## Usage
//!
//! ```no_run
//! use flight_timeline_renderer::{LayoutEngine, frontends::svg::SvgFrontend};
//!
//! let json = std::fs::read_to_string("schedule.json").unwrap();
//! let layout = LayoutEngine::default().render_json(&json, "June").unwrap();
//! let pages = SvgFrontend::default().draw_layout(&layout);
//! ```
//!

pub mod colour;
pub mod engine;
pub mod frontends;

pub use colour::*;
pub use engine::*;
