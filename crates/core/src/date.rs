// SPDX-License-Identifier: MIT

//!
//! Parsing the schedule feed's textual timestamps
//!

use crate::TableError;
use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};

/// The year given to timestamps whose format carries none (e.g. `01Jun
/// 10:00`)
pub const DEFAULT_YEAR: i32 = 1900;

/// A format the schedule feed is known to use for its timestamps.  All are
/// read day-first.
#[rustfmt::skip]
#[derive(derive_more::Display, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// e.g. `01/06/2024 10:00`
    #[display("%d/%m/%Y %H:%M")]
    DayMonthYear,

    /// e.g. `01Jun 10:00` (the year is supplied separately)
    #[display("%d%b %H:%M")]
    DayMonthAbbrev,
}

impl DateFormat {
    /// Every known format, in the order they are tried
    pub const CANDIDATES: [DateFormat; 2] = [DateFormat::DayMonthYear, DateFormat::DayMonthAbbrev];

    /// Parse a single value, returning `None` if it doesn't match the format
    pub fn parse(&self, value: &str, default_year: i32) -> Option<NaiveDateTime> {
        let value = value.trim();
        match self {
            DateFormat::DayMonthYear => NaiveDateTime::parse_from_str(value, &self.to_string()).ok(),
            DateFormat::DayMonthAbbrev => {
                let with_year = format!("{value} {default_year}");
                NaiveDateTime::parse_from_str(&with_year, &format!("{self} %Y")).ok()
            }
        }
    }
}

/// Converts whole columns of timestamps into instants.
///
/// One format is chosen per column: the first candidate that parses every
/// value in the column.  Columns mixing formats across rows are not supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParser {
    formats: Vec<DateFormat>,
    default_year: i32,
}

impl Default for DateParser {
    fn default() -> Self {
        Self {
            formats: DateFormat::CANDIDATES.to_vec(),
            default_year: DEFAULT_YEAR,
        }
    }
}

impl DateParser {
    /// Create a parser that tries the given formats in order
    pub fn new(formats: Vec<DateFormat>) -> Self {
        Self {
            formats,
            default_year: DEFAULT_YEAR,
        }
    }

    /// Set the year used for formats that don't carry one
    pub fn with_default_year(mut self, default_year: i32) -> Self {
        self.default_year = default_year;
        self
    }

    pub fn default_year(&self) -> i32 {
        self.default_year
    }

    pub fn formats(&self) -> &[DateFormat] {
        &self.formats
    }

    /// Parse every value of the named column with the first format that
    /// accepts all of them.  An absent value is rejected by every format.
    pub fn parse_column<S: AsRef<str>>(
        &self,
        column: &str,
        values: &[Option<S>],
    ) -> Result<(DateFormat, Vec<NaiveDateTime>), TableError> {
        for format in &self.formats {
            let parsed: Option<Vec<NaiveDateTime>> = values
                .iter()
                .map(|value| {
                    value
                        .as_ref()
                        .and_then(|value| format.parse(value.as_ref(), self.default_year))
                })
                .collect();
            if let Some(parsed) = parsed {
                debug!("column `{column}` parsed with format `{format}`");
                return Ok((*format, parsed));
            }
        }
        Err(TableError::DateFormat {
            column: column.to_string(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;

    fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn parses_day_first() {
        let parsed = DateFormat::DayMonthYear.parse("01/06/2024 10:00", DEFAULT_YEAR);
        assert_eq!(parsed, Some(instant(2024, 6, 1, 10, 0)));

        // Not month-first
        assert!(DateFormat::DayMonthYear.parse("13/01/2024 10:00", DEFAULT_YEAR).is_some());
        assert!(DateFormat::DayMonthYear.parse("01/13/2024 10:00", DEFAULT_YEAR).is_none());
    }

    #[test]
    fn parses_month_abbreviation_with_default_year() {
        let parsed = DateFormat::DayMonthAbbrev.parse("01Jun 10:00", 2024);
        assert_eq!(parsed, Some(instant(2024, 6, 1, 10, 0)));
        let parsed = DateFormat::DayMonthAbbrev.parse(" 15Dec 23:59 ", DEFAULT_YEAR);
        assert_eq!(parsed, Some(instant(1900, 12, 15, 23, 59)));
    }

    #[test]
    fn displays_the_pattern_it_parses_with() {
        assert_eq!(DateFormat::DayMonthYear.to_string(), "%d/%m/%Y %H:%M");
        assert_eq!(DateFormat::DayMonthAbbrev.to_string(), "%d%b %H:%M");
        for format in DateFormat::CANDIDATES {
            let instant = instant(1900, 6, 1, 10, 0);
            let text = instant.format(&format.to_string()).to_string();
            assert_eq!(format.parse(&text, DEFAULT_YEAR), Some(instant));
        }
    }

    #[test]
    fn column_uses_first_format_that_parses_everything() {
        let parser = DateParser::default().with_default_year(2024);

        let values = [Some("01/06/2024 10:00"), Some("02/06/2024 11:30")];
        let (format, parsed) = parser.parse_column("STD", &values).unwrap();
        assert_eq!(format, DateFormat::DayMonthYear);
        assert_eq!(parsed[1], instant(2024, 6, 2, 11, 30));

        let values = [Some("01Jun 10:00"), Some("02Jun 11:30")];
        let (format, parsed) = parser.parse_column("STD", &values).unwrap();
        assert_eq!(format, DateFormat::DayMonthAbbrev);
        assert_eq!(parsed[0], instant(2024, 6, 1, 10, 0));
    }

    #[test]
    fn mixed_column_is_rejected() {
        let parser = DateParser::default();
        let values = [Some("01/06/2024 10:00"), Some("02Jun 11:30")];
        assert_eq!(
            parser.parse_column("STA", &values),
            Err(TableError::DateFormat {
                column: String::from("STA")
            })
        );
    }

    #[test]
    fn absent_value_is_rejected() {
        let parser = DateParser::default();
        let values = [Some("01/06/2024 10:00"), None];
        assert!(parser.parse_column("STD", &values).is_err());
    }

    #[test]
    fn empty_column_parses() {
        let parser = DateParser::default();
        let values: [Option<&str>; 0] = [];
        let (format, parsed) = parser.parse_column("STD", &values).unwrap();
        assert_eq!(format, DateFormat::DayMonthYear);
        assert!(parsed.is_empty());
    }
}
