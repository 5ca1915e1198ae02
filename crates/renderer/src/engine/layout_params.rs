// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{EdgeLabelStrategy, LabelFitter};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Where labels sit relative to their lane, how big they are, and how they
/// are fitted.  Offsets are in lane units, measured up from the lane's centre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParams {
    pub bar_height: f64,
    pub label_font_size: f64,
    pub time_font_size: f64,

    /// Where the flight number goes when it doesn't fit in the bar
    pub flight_number_fallback_offset: f64,

    pub trip_code_offset: f64,
    pub notes_offset: f64,
    pub crew_note_offset: f64,

    /// Origin and destination, when inside the bar
    pub edge_label_offset: f64,

    /// Origin and destination, when displaced
    pub edge_label_fallback_offset: f64,

    pub time_label_offset: f64,

    /// Minutes between ticks on the time axis
    pub tick_interval_minutes: i64,

    pub fitter: LabelFitter,
    pub edge_labels: EdgeLabelStrategy,
    pub title_prefix: String,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            bar_height: 0.2,
            label_font_size: 8.0,
            time_font_size: 6.0,
            flight_number_fallback_offset: -0.2,
            trip_code_offset: 0.35,
            notes_offset: -0.25,
            crew_note_offset: -0.45,
            edge_label_offset: 0.2,
            edge_label_fallback_offset: -0.2,
            time_label_offset: -0.2,
            tick_interval_minutes: 60,
            fitter: LabelFitter::default(),
            edge_labels: EdgeLabelStrategy::default(),
            title_prefix: String::from("Programación de Vuelos QT"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let params: LayoutParams =
            serde_json::from_str(r#"{"edge_labels": "omit", "fitter": {"hours_per_char": 0.05}}"#)
                .unwrap();
        assert_eq!(params.edge_labels, EdgeLabelStrategy::Omit);
        assert_eq!(params.fitter.hours_per_char, 0.05);
        assert_eq!(params.fitter.chars_per_hour, 50.0);
        assert_eq!(params.bar_height, 0.2);
    }
}
