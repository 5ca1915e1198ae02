// SPDX-License-Identifier: MIT

//!
//! Deciding whether a label fits inside a bar, and shortening it when it
//! doesn't
//!

use crate::as_hours;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Appended to labels that have been shortened
pub const ELLIPSIS: &str = "…";

/// What happens to a bar's origin and destination labels
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeLabelStrategy {
    /// Always drawn.  Inside the bar's edge when they fit, below it otherwise.
    #[default]
    Displace,

    /// Drawn inside the bar's edge only when they fit
    Omit,

    /// Always drawn inside the bar's edge, shortened when they don't fit
    Truncate,
}

/// Relates label length to the hours of bar needed to hold it.
///
/// The time axis is the only measure: a label fits when the bar lasts at least
/// `hours_per_char` for every character.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelFitter {
    pub hours_per_char: f64,

    /// How many characters an hour of bar holds when shortening
    pub chars_per_hour: f64,

    /// The share of the bar a shortened label may take up
    pub usable_width: f64,
}

impl Default for LabelFitter {
    fn default() -> Self {
        Self {
            hours_per_char: 0.02,
            chars_per_hour: 50.0,
            usable_width: 0.8,
        }
    }
}

impl LabelFitter {
    /// Whether the label fits in a bar lasting `duration`
    pub fn fits(&self, text: &str, duration: TimeDelta) -> bool {
        as_hours(duration) >= self.hours_per_char * text.chars().count() as f64
    }

    /// The label as is if it fits, otherwise cut to a length proportional to
    /// the bar and marked with an [`ELLIPSIS`].  At least one character is
    /// always kept.
    pub fn truncate(&self, text: &str, duration: TimeDelta) -> String {
        if self.fits(text, duration) {
            return text.to_string();
        }
        let available = (as_hours(duration) * self.usable_width * self.chars_per_hour).floor();
        let max_chars = if available >= 1.0 {
            available as usize
        } else {
            1
        };
        if text.chars().count() <= max_chars {
            return text.to_string();
        }
        let mut truncated: String = text.chars().take(max_chars).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fits() {
        let fitter = LabelFitter::default();

        // 6 characters need 0.12 hours (7.2 minutes)
        assert!(fitter.fits("QT1234", TimeDelta::minutes(8)));
        assert!(!fitter.fits("QT1234", TimeDelta::minutes(7)));
        assert!(fitter.fits("", TimeDelta::zero()));
    }

    #[test]
    fn fits_is_monotonic_in_duration() {
        let fitter = LabelFitter::default();
        let text = "A fairly long note about the flight";
        let mut fitted = false;
        for minutes in 0..120 {
            let fits = fitter.fits(text, TimeDelta::minutes(minutes));
            assert!(fits || !fitted, "stopped fitting at {minutes} minutes");
            fitted = fits;
        }
        assert!(fitted);
    }

    #[test]
    fn truncate_leaves_fitting_labels_alone() {
        let fitter = LabelFitter::default();
        assert_eq!(fitter.truncate("BOG", TimeDelta::hours(1)), "BOG");
    }

    #[test]
    fn truncate_is_proportional_to_the_bar() {
        let fitter = LabelFitter::default();

        // 0.1 hours holds 0.1 * 0.8 * 50 = 4 characters
        assert_eq!(
            fitter.truncate("MEDELLIN", TimeDelta::minutes(6)),
            format!("MEDE{ELLIPSIS}")
        );
    }

    #[test]
    fn truncate_keeps_at_least_one_character() {
        let fitter = LabelFitter::default();
        assert_eq!(
            fitter.truncate("MEDELLIN", TimeDelta::minutes(1)),
            format!("M{ELLIPSIS}")
        );
        assert_eq!(
            fitter.truncate("MEDELLIN", TimeDelta::minutes(-5)),
            format!("M{ELLIPSIS}")
        );

        // Too short to cut any further
        assert_eq!(fitter.truncate("M", TimeDelta::zero()), "M");
    }
}
