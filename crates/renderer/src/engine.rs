// SPDX-License-Identifier: MIT

//!
//! The `flight-timeline-renderer` engine
//!

mod clip;
mod colours;
mod error;
mod heading;
mod helpers;
mod label;
mod lane;
mod layout_params;
mod page;
mod paginator;
mod point;
mod primitives;

pub(crate) use helpers::*;

pub use clip::*;
pub use colours::*;
pub use error::*;
pub use heading::*;
pub use label::*;
pub use lane::*;
pub use layout_params::*;
pub use page::*;
pub use paginator::*;
pub use point::*;
pub use primitives::*;

use chrono::{NaiveDateTime, TimeDelta};
use flight_timeline_core::{
    AircraftOrder, DateParser, FlightRecord, FlightTable, TimeWindow, ValidationFailure,
};
use log::{debug, trace, warn};

/// The core `flight-timeline-renderer` engine.  It decides where each flight
/// appears and how it is labelled, producing pages of backend-agnostic
/// drawing instructions (e.g. for the SVG frontend).
///
/// The engine holds only read-only configuration, so one engine can serve any
/// number of requests, and identical input always gives identical output.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    /// Which lane each aircraft's flights go in
    lanes: LaneAssigner,

    /// How the date columns are read
    date_parser: DateParser,

    /// How the schedule is split into pages
    paginator: Paginator,

    /// Label offsets, font sizes, and fitting
    layout_params: LayoutParams,

    colours: ChartColours,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(AircraftOrder::default())
    }
}

impl LayoutEngine {
    /// Create a new engine that draws one lane per aircraft in `order`
    pub fn new(order: AircraftOrder) -> Self {
        Self {
            lanes: LaneAssigner::new(order),
            date_parser: DateParser::default(),
            paginator: Paginator::default(),
            layout_params: LayoutParams::default(),
            colours: ChartColours::default(),
        }
    }

    pub fn aircraft_order(&self) -> &AircraftOrder {
        self.lanes.order()
    }

    pub fn layout_params(&self) -> &LayoutParams {
        &self.layout_params
    }

    pub fn set_layout_params(&mut self, layout_params: LayoutParams) {
        debug!("engine set layout params");
        self.layout_params = layout_params;
    }

    pub fn colours(&self) -> ChartColours {
        self.colours
    }

    pub fn set_colours(&mut self, colours: ChartColours) {
        debug!("engine set colours");
        self.colours = colours;
    }

    pub fn set_date_parser(&mut self, date_parser: DateParser) {
        self.date_parser = date_parser;
    }

    pub fn set_pagination_params(&mut self, params: PaginationParams) {
        self.paginator = Paginator::new(params);
    }

    /// Lay out a request, reporting any failure in its structured form.  No
    /// pages are returned unless every page could be produced.
    pub fn render(&self, table: &FlightTable, title_suffix: &str) -> Result<Layout, ValidationFailure> {
        self.layout_table(table, title_suffix).map_err(|error| {
            warn!("rendering request failed: {error}");
            error.into()
        })
    }

    /// Lay out a table read from JSON (see [`FlightTable::from_json`])
    pub fn render_json(&self, json: &str, title_suffix: &str) -> Result<Layout, ValidationFailure> {
        let table = FlightTable::from_json(json).map_err(ValidationFailure::from)?;
        self.render(&table, title_suffix)
    }

    /// Parse the table's dates and lay out its flights
    pub fn layout_table(&self, table: &FlightTable, title_suffix: &str) -> Result<Layout, LayoutError> {
        let parsed = table.parse_flights(&self.date_parser)?;
        if parsed.malformed_rows > 0 {
            warn!("{} rows have malformed intervals", parsed.malformed_rows);
        }
        let mut layout = self.layout_flights(&parsed.flights, title_suffix)?;
        layout.diagnostics.malformed_rows = parsed.malformed_rows;
        Ok(layout)
    }

    /// Lay out already parsed flights, one page per day window that owns at
    /// least one drawable flight
    pub fn layout_flights(
        &self,
        flights: &[FlightRecord],
        title_suffix: &str,
    ) -> Result<Layout, LayoutError> {
        let mut diagnostics = LayoutDiagnostics::default();

        // Flights for aircraft outside the fleet never get a lane
        let drawable: Vec<FlightRecord> = flights
            .iter()
            .filter(|flight| {
                let known = self.lanes.lane(flight.tail()).is_some();
                if !known {
                    *diagnostics
                        .unknown_tails
                        .entry(flight.tail().to_string())
                        .or_default() += 1;
                }
                known
            })
            .cloned()
            .collect();
        for (tail, count) in &diagnostics.unknown_tails {
            warn!("excluding {count} flights for `{tail}`: not in the fleet");
        }

        let title = format!("{} {}", self.layout_params.title_prefix, title_suffix)
            .trim()
            .to_string();

        let mut pages = Vec::new();
        for slot in self.paginator.paginate(&drawable)? {
            let mut instructions: Vec<RenderInstruction> = slot
                .flights
                .iter()
                .filter_map(|flight| self.instruction(flight, slot.window))
                .collect();
            instructions.sort_by(|a, b| {
                (a.lane.row, a.bar.interval.start()).cmp(&(b.lane.row, b.bar.interval.start()))
            });
            if instructions.is_empty() {
                continue;
            }
            pages.push(Page {
                number: pages.len() + 1,
                title: title.clone(),
                window: slot.window,
                lanes: self.lanes.headings(),
                ticks: self.ticks(slot.window),
                instructions,
            });
        }

        debug!("laid out {} pages", pages.len());
        if pages.is_empty() {
            return Err(LayoutError::EmptyResult);
        }
        Ok(Layout { pages, diagnostics })
    }

    /// Everything needed to draw the flight on the page showing `window`, or
    /// `None` if it isn't drawable there
    pub fn instruction(&self, flight: &FlightRecord, window: TimeWindow) -> Option<RenderInstruction> {
        let lane = self.lanes.lane(flight.tail())?;
        let interval = clip(flight.schedule(), window)?;
        let params = &self.layout_params;
        let row = lane.row as f64;
        let duration = interval.duration();
        let middle = interval.start() + duration / 2;

        let mut labels = Vec::with_capacity(8);

        // Flight number: centred in the bar, or just below it
        let fits = params.fitter.fits(flight.flight_number(), duration);
        let (y, v_align) = if fits {
            (row, VAlign::Middle)
        } else {
            (row + params.flight_number_fallback_offset, VAlign::Top)
        };
        labels.push(self.placement(
            LabelKind::FlightNumber,
            flight.flight_number().to_string(),
            Anchor { x: middle, y },
            (HAlign::Center, v_align),
            fits,
        ));

        // Trip code above, notes and crew below
        labels.push(self.placement(
            LabelKind::TripCode,
            flight.trip_code().to_string(),
            Anchor {
                x: middle,
                y: row + params.trip_code_offset,
            },
            (HAlign::Center, VAlign::Bottom),
            false,
        ));
        labels.push(self.placement(
            LabelKind::Notes,
            flight.notes().to_string(),
            Anchor {
                x: middle,
                y: row + params.notes_offset,
            },
            (HAlign::Center, VAlign::Top),
            false,
        ));
        labels.push(self.placement(
            LabelKind::CrewNote,
            flight.crew_note().to_string(),
            Anchor {
                x: middle,
                y: row + params.crew_note_offset,
            },
            (HAlign::Center, VAlign::Top),
            false,
        ));

        // Route at the bar's edges
        labels.extend(self.edge_label(
            LabelKind::Origin,
            flight.origin(),
            interval.start(),
            row,
            duration,
        ));
        labels.extend(self.edge_label(
            LabelKind::Destination,
            flight.destination(),
            interval.end(),
            row,
            duration,
        ));

        // Scheduled times, even when the bar is clipped
        labels.push(self.placement(
            LabelKind::DepartureTime,
            hours_and_minutes(flight.departure()),
            Anchor {
                x: interval.start(),
                y: row + params.time_label_offset,
            },
            (HAlign::Left, VAlign::Middle),
            false,
        ));
        labels.push(self.placement(
            LabelKind::ArrivalTime,
            hours_and_minutes(flight.arrival()),
            Anchor {
                x: interval.end(),
                y: row + params.time_label_offset,
            },
            (HAlign::Right, VAlign::Middle),
            false,
        ));

        let instruction = RenderInstruction {
            tail: flight.tail().to_string(),
            lane,
            bar: Bar {
                interval,
                y: row - params.bar_height / 2.0,
                height: params.bar_height,
                style: self.colours.bar,
            },
            labels,
        };
        trace!("instruction {instruction:?}");
        Some(instruction)
    }

    /// An origin or destination label.  `x` is the bar edge it hangs off.
    fn edge_label(
        &self,
        kind: LabelKind,
        text: &str,
        x: NaiveDateTime,
        row: f64,
        duration: TimeDelta,
    ) -> Option<LabelPlacement> {
        let params = &self.layout_params;
        let h_align = if kind == LabelKind::Destination {
            HAlign::Right
        } else {
            HAlign::Left
        };
        let inside = Anchor {
            x,
            y: row + params.edge_label_offset,
        };
        if params.fitter.fits(text, duration) {
            return Some(self.placement(kind, text.to_string(), inside, (h_align, VAlign::Middle), true));
        }
        match params.edge_labels {
            EdgeLabelStrategy::Displace => Some(self.placement(
                kind,
                text.to_string(),
                Anchor {
                    x,
                    y: row + params.edge_label_fallback_offset,
                },
                (h_align, VAlign::Top),
                false,
            )),
            EdgeLabelStrategy::Omit => None,
            EdgeLabelStrategy::Truncate => {
                let truncated = params.fitter.truncate(text, duration);
                let fits = params.fitter.fits(&truncated, duration);
                Some(self.placement(kind, truncated, inside, (h_align, VAlign::Middle), fits))
            }
        }
    }

    fn placement(
        &self,
        kind: LabelKind,
        text: String,
        anchor: Anchor,
        (h_align, v_align): (HAlign, VAlign),
        fits_in_bar: bool,
    ) -> LabelPlacement {
        LabelPlacement {
            kind,
            text,
            anchor,
            h_align,
            v_align,
            fits_in_bar,
            style: self.text_style(kind),
        }
    }

    fn text_style(&self, kind: LabelKind) -> TextStyle {
        let colours = self.colours.labels;
        let (colour, font_size) = match kind {
            LabelKind::FlightNumber => (colours.flight_number, self.layout_params.label_font_size),
            LabelKind::TripCode => (colours.trip_code, self.layout_params.label_font_size),
            LabelKind::Notes => (colours.notes, self.layout_params.label_font_size),
            LabelKind::CrewNote => (colours.crew_note, self.layout_params.label_font_size),
            LabelKind::Origin | LabelKind::Destination => {
                (colours.route, self.layout_params.label_font_size)
            }
            LabelKind::DepartureTime | LabelKind::ArrivalTime => {
                (colours.times, self.layout_params.time_font_size)
            }
        };
        TextStyle { colour, font_size }
    }

    /// Ticks on whole hours (or every `tick_interval_minutes`) across the
    /// window
    fn ticks(&self, window: TimeWindow) -> Vec<TimeTick> {
        let interval = TimeDelta::try_minutes(self.layout_params.tick_interval_minutes.max(1))
            .unwrap_or_else(|| window.duration());
        let mut ticks = Vec::new();
        let mut next = ceiling_to_hour(window.start());
        while let Some(at) = next.filter(|at| *at < window.end()) {
            ticks.push(TimeTick {
                at,
                text: hours_and_minutes(at),
            });
            next = at.checked_add_signed(interval);
        }
        ticks
    }
}
