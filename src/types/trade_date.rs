use crate::types::errors::ParseError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const UNKNOWN: &str = "Unknown";
const DATE_FORMAT: &str = "%m/%d/%Y";
const DATE_LENGTH: usize = 10;

/// A trade date as it appears in a brokerage export.
///
/// Exports write `Unknown` when the acquisition date was never recorded. That sentinel behaves
/// like the zero date: it sorts before every known date and falls in January.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TradeDate {
    Unknown,
    On(NaiveDate)
}

impl TradeDate {
    pub fn month(&self) -> u32 {
        match self {
            TradeDate::Unknown => 1,
            TradeDate::On(date) => date.month()
        }
    }
}

impl Display for TradeDate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TradeDate::Unknown => write!(formatter, "{UNKNOWN}"),
            TradeDate::On(date) => write!(formatter, "{}", date.format(DATE_FORMAT))
        }
    }
}

impl FromStr for TradeDate {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == UNKNOWN {
            return Ok(TradeDate::Unknown);
        }

        let invalid = |source| ParseError::InvalidDate { value: value.to_string(), source };

        // chrono accepts unpadded fields and short years, exports always write MM/DD/YYYY
        if !has_date_shape(value) {
            return Err(invalid(None));
        }

        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .map(TradeDate::On)
            .map_err(|error| invalid(Some(error)))
    }
}

fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();

    bytes.len() == DATE_LENGTH
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            2 | 5 => *byte == b'/',
            _ => byte.is_ascii_digit()
        })
}
