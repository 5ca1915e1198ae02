// SPDX-License-Identifier: MIT

//!
//! Draw pages as standalone SVG documents
//!
//! Chart space (instants across, lane units up) is mapped onto a letter-sized
//! page measured in points.  The lane axis runs from -1 to the number of lanes
//! so that the top and bottom lanes have room for their labels.
//!

use crate::{
    Anchor, Bar, ChartColours, HAlign, LabelPlacement, Layout, Margins, Page, Point, Size, VAlign,
};
use chrono::NaiveDateTime;
use flight_timeline_core::TimeWindow;
use log::debug;
use std::fmt::Write;

/// US letter, portrait, in points
pub const LETTER: Size = Point { x: 612.0, y: 792.0 };

/// Draws [`Page`]s as SVG
#[derive(Debug, Clone, PartialEq)]
pub struct SvgFrontend {
    size: Size,
    margins: Margins,
    colours: ChartColours,
}

impl Default for SvgFrontend {
    fn default() -> Self {
        Self::new(LETTER, Margins::default(), ChartColours::default())
    }
}

impl SvgFrontend {
    pub fn new(size: Size, margins: Margins, colours: ChartColours) -> Self {
        Self {
            size,
            margins,
            colours,
        }
    }

    /// One document per page, in page order
    pub fn draw_layout(&self, layout: &Layout) -> Vec<String> {
        layout.pages.iter().map(|page| self.draw_page(page)).collect()
    }

    /// Draw one page as a standalone SVG document
    pub fn draw_page(&self, page: &Page) -> String {
        debug!("drawing page {} as SVG", page.number);
        let surface = Surface::new(self.size, self.margins, page.window, page.lanes.len());
        let mut svg = String::new();

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif">"#,
            w = self.size.x,
            h = self.size.y,
        );
        let _ = writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            self.colours.background.a.as_hex()
        );

        self.draw_lane_backgrounds(&mut svg, &surface, page);
        self.draw_ticks(&mut svg, &surface, page);
        self.draw_lane_headings(&mut svg, &surface, page);

        for instruction in &page.instructions {
            draw_bar(&mut svg, &surface, &instruction.bar);
            for label in &instruction.labels {
                draw_label(&mut svg, &surface, label);
            }
        }

        // Title
        let _ = writeln!(
            svg,
            r#"  <text x="{:.2}" y="{:.2}" font-size="12" font-weight="bold" fill="{}" text-anchor="middle">{}</text>"#,
            self.size.x / 2.0,
            self.margins.top / 2.0,
            self.colours.heading_text.as_hex(),
            escape_xml(&page.title)
        );

        svg.push_str("</svg>\n");
        svg
    }

    /// Every other lane is shaded
    fn draw_lane_backgrounds(&self, svg: &mut String, surface: &Surface, page: &Page) {
        for heading in page.lanes.iter().filter(|heading| heading.row % 2 == 1) {
            let row = heading.row as f64;
            let top = surface.y(row + 0.5);
            let bottom = surface.y(row - 0.5);
            let _ = writeln!(
                svg,
                r#"  <rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="{}"/>"#,
                surface.min.x,
                top,
                surface.max.x - surface.min.x,
                bottom - top,
                self.colours.background.b.as_hex()
            );
        }
    }

    /// Vertical grid lines, with rotated time labels under the plot area
    fn draw_ticks(&self, svg: &mut String, surface: &Surface, page: &Page) {
        let line = self.colours.grid_line;
        for tick in &page.ticks {
            let x = surface.x(tick.at);
            let _ = writeln!(
                svg,
                r#"  <line x1="{x:.2}" y1="{:.2}" x2="{x:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
                surface.min.y,
                surface.max.y,
                line.colour.as_hex(),
                line.thickness
            );
            let y = surface.max.y + 12.0;
            let _ = writeln!(
                svg,
                r#"  <text x="{x:.2}" y="{y:.2}" font-size="7" fill="{}" text-anchor="end" transform="rotate(-45 {x:.2} {y:.2})">{}</text>"#,
                self.colours.heading_text.as_hex(),
                escape_xml(&tick.text)
            );
        }
    }

    fn draw_lane_headings(&self, svg: &mut String, surface: &Surface, page: &Page) {
        for heading in &page.lanes {
            let _ = writeln!(
                svg,
                r#"  <text x="{:.2}" y="{:.2}" font-size="8" fill="{}" text-anchor="end" dominant-baseline="central">{}</text>"#,
                surface.min.x - 6.0,
                surface.y(heading.row as f64),
                self.colours.heading_text.as_hex(),
                escape_xml(&heading.tail)
            );
        }
    }
}

/// Maps chart space onto the plot area
struct Surface {
    min: Point,
    max: Point,
    window: TimeWindow,
    lane_count: f64,
}

impl Surface {
    fn new(size: Size, margins: Margins, window: TimeWindow, lane_count: usize) -> Self {
        let (min, max) = margins.plot_area(size);
        Self {
            min,
            max,
            window,
            lane_count: lane_count as f64,
        }
    }

    fn x(&self, instant: NaiveDateTime) -> f64 {
        let elapsed = (instant - self.window.start()).num_seconds() as f64;
        let total = self.window.duration().num_seconds() as f64;
        self.min.x + (elapsed / total) * (self.max.x - self.min.x)
    }

    /// Lane units run upwards from -1 (bottom) to the lane count (top)
    fn y(&self, lane_y: f64) -> f64 {
        let fraction = (self.lane_count - lane_y) / (self.lane_count + 1.0);
        self.min.y + fraction * (self.max.y - self.min.y)
    }

    fn point(&self, anchor: Anchor) -> Point {
        Point {
            x: self.x(anchor.x),
            y: self.y(anchor.y),
        }
    }
}

fn draw_bar(svg: &mut String, surface: &Surface, bar: &Bar) {
    let x = surface.x(bar.interval.start());
    let width = surface.x(bar.interval.end()) - x;
    let top = surface.y(bar.max_y());
    let height = surface.y(bar.y) - top;
    let border = match bar.style.border {
        Some(border) => format!(
            r#" stroke="{}" stroke-width="{}""#,
            border.colour.as_hex(),
            border.thickness
        ),
        None => String::new(),
    };
    let _ = writeln!(
        svg,
        r#"  <rect class="bar" x="{x:.2}" y="{top:.2}" width="{width:.2}" height="{height:.2}" fill="{}"{border}/>"#,
        bar.style.fill_colour.as_hex()
    );
}

fn draw_label(svg: &mut String, surface: &Surface, label: &LabelPlacement) {
    let point = surface.point(label.anchor);
    let text_anchor = match label.h_align {
        HAlign::Left => "start",
        HAlign::Center => "middle",
        HAlign::Right => "end",
    };
    let baseline = match label.v_align {
        VAlign::Top => "hanging",
        VAlign::Middle => "central",
        VAlign::Bottom => "text-after-edge",
    };
    let _ = writeln!(
        svg,
        r#"  <text x="{:.2}" y="{:.2}" font-size="{}" fill="{}" text-anchor="{text_anchor}" dominant-baseline="{baseline}">{}</text>"#,
        point.x,
        point.y,
        label.style.font_size,
        label.style.colour.as_hex(),
        escape_xml(&label.text)
    );
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::LayoutEngine;
    use chrono::{NaiveDate, TimeDelta};
    use flight_timeline_core::FlightRecord;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn layout() -> Layout {
        let flight = FlightRecord::from("N330QT", at(10), at(12))
            .unwrap()
            .with_flight_number("QT<1>")
            .with_notes("Fuel & go");
        LayoutEngine::default()
            .layout_flights(&[flight], "June")
            .unwrap()
    }

    #[test]
    fn draws_one_document_per_page() {
        let frontend = SvgFrontend::default();
        let documents = frontend.draw_layout(&layout());
        assert_eq!(documents.len(), 1);
        let svg = &documents[0];
        assert!(svg.starts_with("<svg "));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert_eq!(svg.matches(r#"class="bar""#).count(), 1);
        assert!(svg.contains("N337QT"));
        assert!(svg.contains("Programación de Vuelos QT June"));
    }

    #[test]
    fn escapes_text() {
        let svg = SvgFrontend::default().draw_page(&layout().pages[0]);
        assert!(svg.contains("QT&lt;1&gt;"));
        assert!(svg.contains("Fuel &amp; go"));
        assert!(!svg.contains("QT<1>"));
    }

    #[test]
    fn maps_chart_space_onto_the_plot_area() {
        let window = TimeWindow::from(at(5), at(5) + TimeDelta::hours(27)).unwrap();
        let surface = Surface::new(LETTER, Margins::default(), window, 7);
        assert_eq!(surface.x(at(5)), 60.0);
        assert_eq!(surface.x(at(5) + TimeDelta::hours(27)), 612.0 - 30.0);
        assert_eq!(surface.y(7.0), 50.0);
        assert_eq!(surface.y(-1.0), 792.0 - 70.0);
        assert!(surface.y(6.0) < surface.y(0.0));
    }
}
