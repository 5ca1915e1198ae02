// SPDX-License-Identifier: MIT

//!
//! The fleet (aircraft ordering) type
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// The fleet the schedule feed was originally drawn for.  Used when no other
/// ordering is configured.
pub const DEFAULT_FLEET: [&str; 7] = [
    "N330QT", "N331QT", "N332QT", "N334QT", "N335QT", "N336QT", "N337QT",
];

/// Errors that can arise in relation to an [`AircraftOrder`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    #[error("The fleet must contain at least one aircraft")]
    Empty,

    #[error("Aircraft `{0}` appears more than once in the fleet")]
    Duplicate(String),

    #[error("Aircraft identifiers cannot be empty")]
    EmptyTail,
}

/// The fixed ordering of aircraft that decides which lane each flight is drawn
/// in.  It is configuration, not derived from the schedule, so tails that
/// aren't listed never get a lane.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AircraftOrder(Vec<String>);

impl Default for AircraftOrder {
    fn default() -> Self {
        Self(DEFAULT_FLEET.iter().map(|tail| tail.to_string()).collect())
    }
}

impl AircraftOrder {
    /// Create a new ordering if every tail is non-empty and listed once
    pub fn from<I, S>(tails: I) -> Result<Self, FleetError>
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        let mut ordered: Vec<String> = Vec::new();
        for tail in tails {
            let tail = tail.to_string().trim().to_string();
            if tail.is_empty() {
                return Err(FleetError::EmptyTail);
            }
            if ordered.contains(&tail) {
                return Err(FleetError::Duplicate(tail));
            }
            ordered.push(tail);
        }
        if ordered.is_empty() {
            return Err(FleetError::Empty);
        }
        Ok(Self(ordered))
    }

    /// The position of the tail in the ordering (if it's listed)
    pub fn position(&self, tail: &str) -> Option<usize> {
        self.0.iter().position(|listed| listed == tail)
    }

    pub fn contains(&self, tail: &str) -> bool {
        self.position(tail).is_some()
    }

    /// The number of aircraft (never zero)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn tails(&self) -> &[String] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for AircraftOrder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tails = Vec::<String>::deserialize(deserializer)?;
        AircraftOrder::from(tails).map_err(serde::de::Error::custom)
    }
}
