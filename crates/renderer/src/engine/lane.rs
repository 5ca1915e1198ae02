// SPDX-License-Identifier: MIT

//!
//! Lanes
//!

use crate::LaneHeading;
use flight_timeline_core::AircraftOrder;
use serde::Serialize;
use std::fmt::Debug;

/// Where an aircraft's flights are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Lane {
    /// The aircraft's position in the [`AircraftOrder`]
    pub index: usize,

    /// The display row, counted up from the bottom of the chart.  The order is
    /// reversed for display so the first aircraft is drawn at the top.
    pub row: usize,
}

/// Maps aircraft to lanes using a fixed [`AircraftOrder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneAssigner {
    order: AircraftOrder,
}

impl LaneAssigner {
    pub fn new(order: AircraftOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> &AircraftOrder {
        &self.order
    }

    /// The number of lanes on every page
    pub fn lane_count(&self) -> usize {
        self.order.len()
    }

    /// The tail's lane, or `None` if the aircraft isn't in the fleet
    pub fn lane(&self, tail: &str) -> Option<Lane> {
        self.order.position(tail).map(|index| Lane {
            index,
            row: self.order.len() - 1 - index,
        })
    }

    /// One heading per lane, bottom row first
    pub fn headings(&self) -> Vec<LaneHeading> {
        self.order
            .tails()
            .iter()
            .enumerate()
            .rev()
            .map(|(index, tail)| LaneHeading {
                tail: tail.clone(),
                row: self.order.len() - 1 - index,
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lane() {
        let lanes = LaneAssigner::new(AircraftOrder::default());
        assert_eq!(lanes.lane("N330QT"), Some(Lane { index: 0, row: 6 }));
        assert_eq!(lanes.lane("N337QT"), Some(Lane { index: 6, row: 0 }));
        assert_eq!(lanes.lane("N999XX"), None);
    }

    #[test]
    fn headings() {
        let lanes = LaneAssigner::new(AircraftOrder::from(["A", "B", "C"]).unwrap());
        let headings: Vec<(String, usize)> = lanes
            .headings()
            .into_iter()
            .map(|heading| (heading.tail, heading.row))
            .collect();
        assert_eq!(
            headings,
            vec![
                (String::from("C"), 0),
                (String::from("B"), 1),
                (String::from("A"), 2)
            ]
        );
    }
}
