// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! *Part of the wider flight timeline project*
//!
//! Lay out a flight schedule as day pages and write them out as JSON or SVG
//!

use clap::{Parser, ValueEnum, builder::PossibleValue};
use flight_timeline_core::{AircraftOrder, DateParser, FailureKind, ValidationFailure};
use flight_timeline_renderer::{
    Colour, EdgeLabelStrategy, Layout, LayoutEngine, frontends::svg::SvgFrontend,
};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, TermLogger, TerminalMode,
};
use std::fs;
use std::path::{Path, PathBuf};

#[macro_use]
extern crate log;
extern crate simplelog;

/// Entry point for the command line layout tool
fn main() {
    let args = Cli::parse();

    // Setup logging
    let config_log = ConfigBuilder::new()
        .add_filter_allow_str("flight_timeline")
        .build();
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(error) = CombinedLogger::init(vec![TermLogger::new(
        level,
        config_log,
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]) {
        eprintln!("Unable to set up logging: {error}");
    }

    if let Err(failure) = run(&args) {
        match serde_json::to_string(&failure) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("Error: {}", failure.message),
        }
        std::process::exit(1);
    }
}

/// Read the request, lay it out, and write the pages
fn run(args: &Cli) -> Result<(), ValidationFailure> {
    let engine = engine(args)?;

    let json = fs::read_to_string(&args.input).map_err(|error| {
        ValidationFailure::new(
            format!("Unable to read {}: {error}", args.input.display()),
            FailureKind::BadInput,
        )
    })?;
    let layout = engine.render_json(&json, &args.title)?;

    let diagnostics = &layout.diagnostics;
    if diagnostics.excluded_flights() > 0 {
        warn!(
            "{} flights excluded ({} malformed rows, unknown aircraft: {:?})",
            diagnostics.excluded_flights(),
            diagnostics.malformed_rows,
            diagnostics.unknown_tails
        );
    }

    fs::create_dir_all(&args.out).map_err(|error| write_failure(&args.out, error))?;
    let written = match args.format {
        OutputFormat::Json => write_json(&layout, &args.out)?,
        OutputFormat::Svg => write_svg(&layout, &args.out)?,
    };
    info!("{} pages written to {}", layout.pages.len(), args.out.display());
    for path in written {
        println!("{}", path.display());
    }

    Ok(())
}

/// Build the engine the options describe
fn engine(args: &Cli) -> Result<LayoutEngine, ValidationFailure> {
    let order = match &args.fleet {
        Some(path) => {
            let json = fs::read_to_string(path).map_err(|error| {
                ValidationFailure::new(
                    format!("Unable to read {}: {error}", path.display()),
                    FailureKind::BadInput,
                )
            })?;
            serde_json::from_str::<AircraftOrder>(&json).map_err(|error| {
                ValidationFailure::new(
                    format!("Invalid fleet in {}: {error}", path.display()),
                    FailureKind::BadInput,
                )
            })?
        }
        None => AircraftOrder::default(),
    };
    debug!("aircraft order: {:?}", order.tails());

    let mut engine = LayoutEngine::new(order);
    engine.set_date_parser(DateParser::default().with_default_year(args.year));

    let mut layout_params = engine.layout_params().clone();
    layout_params.edge_labels = args.edge_labels.into();
    engine.set_layout_params(layout_params);

    if let Some(hex) = &args.bar_colour {
        let fill = Colour::from_hex(hex.as_str())
            .map_err(|error| ValidationFailure::new(error, FailureKind::BadInput))?;
        let mut colours = engine.colours();
        colours.bar.fill_colour = fill;
        engine.set_colours(colours);
    }

    Ok(engine)
}

/// Write the whole layout to `layout.json`
fn write_json(layout: &Layout, dir: &Path) -> Result<Vec<PathBuf>, ValidationFailure> {
    let path = dir.join("layout.json");
    let json = serde_json::to_string_pretty(layout)
        .map_err(|error| ValidationFailure::new(error, FailureKind::NoOutput))?;
    fs::write(&path, json).map_err(|error| write_failure(&path, error))?;
    Ok(vec![path])
}

/// Write each page to its own SVG document
fn write_svg(layout: &Layout, dir: &Path) -> Result<Vec<PathBuf>, ValidationFailure> {
    let frontend = SvgFrontend::default();
    let mut written = Vec::with_capacity(layout.pages.len());
    for page in &layout.pages {
        let path = dir.join(page_file_name(page.number));
        fs::write(&path, frontend.draw_page(page)).map_err(|error| write_failure(&path, error))?;
        written.push(path);
    }
    Ok(written)
}

fn page_file_name(number: usize) -> String {
    format!("page-{number:03}.svg")
}

fn write_failure(path: &Path, error: std::io::Error) -> ValidationFailure {
    ValidationFailure::new(
        format!("Unable to write {}: {error}", path.display()),
        FailureKind::NoOutput,
    )
}

/// Flight timeline CLI args using [clap]
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Lay out a flight schedule as one timeline page per day",
    after_help = "The input is a JSON table with the columns Reg., STD, STA, Flight, Trip, Notas, Tripadi, From, and To"
)]
pub struct Cli {
    /// Path to the schedule JSON (an array of rows, or an object of columns)
    #[arg(long)]
    pub input: PathBuf,

    /// Appended to the title of every page
    #[arg(long, default_value = "")]
    pub title: String,

    /// Directory the output is written to
    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Path to a JSON array of aircraft registrations, top lane first
    #[arg(long)]
    pub fleet: Option<PathBuf>,

    /// What to do with an origin/destination label that doesn't fit its bar
    #[arg(long, value_enum, default_value = "displace")]
    pub edge_labels: EdgeLabels,

    /// Year given to dates that don't state one (e.g. `01Jun 10:00`)
    #[arg(long, default_value_t = flight_timeline_core::DEFAULT_YEAR)]
    pub year: i32,

    /// Bar fill colour as hex (e.g. `#add8e6`)
    #[arg(long)]
    pub bar_colour: Option<String>,

    /// Log debug messages
    #[arg(long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Svg,
}

impl ValueEnum for OutputFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Json, Self::Svg]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            OutputFormat::Json => {
                Some(PossibleValue::new("json").help("Write every page to layout.json"))
            }
            OutputFormat::Svg => {
                Some(PossibleValue::new("svg").help("Write one SVG document per page"))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLabels {
    Displace,
    Omit,
    Truncate,
}

impl ValueEnum for EdgeLabels {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Displace, Self::Omit, Self::Truncate]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            EdgeLabels::Displace => Some(
                PossibleValue::new("displace").help("Move the label below the bar"),
            ),
            EdgeLabels::Omit => Some(PossibleValue::new("omit").help("Leave the label out")),
            EdgeLabels::Truncate => Some(
                PossibleValue::new("truncate").help("Shorten the label to fit, with an ellipsis"),
            ),
        }
    }
}

impl From<EdgeLabels> for EdgeLabelStrategy {
    fn from(value: EdgeLabels) -> Self {
        match value {
            EdgeLabels::Displace => EdgeLabelStrategy::Displace,
            EdgeLabels::Omit => EdgeLabelStrategy::Omit,
            EdgeLabels::Truncate => EdgeLabelStrategy::Truncate,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli() {
        Cli::command().debug_assert();

        let args = Cli::parse_from(["flight-timeline", "--input", "in.json", "--out", "out"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.edge_labels, EdgeLabels::Displace);
        assert_eq!(args.year, 1900);
        assert!(!args.verbose);

        let args = Cli::parse_from([
            "flight-timeline",
            "--input",
            "in.json",
            "--out",
            "out",
            "--format",
            "svg",
            "--edge-labels",
            "truncate",
            "--year",
            "2024",
        ]);
        assert_eq!(args.format, OutputFormat::Svg);
        assert_eq!(
            EdgeLabelStrategy::from(args.edge_labels),
            EdgeLabelStrategy::Truncate
        );
        assert_eq!(args.year, 2024);
    }

    #[test]
    fn page_file_names() {
        assert_eq!(page_file_name(1), "page-001.svg");
        assert_eq!(page_file_name(12), "page-012.svg");
    }

    #[test]
    fn bad_bar_colour() {
        let args = Cli::parse_from([
            "flight-timeline",
            "--input",
            "in.json",
            "--out",
            "out",
            "--bar-colour",
            "blue",
        ]);
        let failure = engine(&args).unwrap_err();
        assert!(failure.is_bad_input());
    }
}
