// SPDX-License-Identifier: MIT

//!
//! Frontends that draw the engine's pages
//!

pub mod svg;
