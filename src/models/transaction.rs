use std::str::FromStr;

use csv::StringRecord;
use serde::Deserialize;

use crate::models::errors::RecordError;
use crate::models::TRANSACTION_FIELD_COUNT;
use crate::types::{parse_amount, TradeDate};

/// Holding period classification of a closed position.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Term {
    ShortTerm,
    LongTerm
}

/// A single closed position read from a brokerage export.
///
/// Transactions are built once by [`Transaction::from_record`] and never changed afterwards.
/// Exactly one of `short_term_net` and `long_term_net` is expected to be non-zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Ticker symbol, never empty.
    pub symbol: String,
    /// Descriptive security name.
    pub security: String,
    /// Number of shares sold.
    pub quantity: f64,
    pub date_acquired: TradeDate,
    /// Sale date, used for ordering and quarter assignment.
    pub date_sold: TradeDate,
    /// Total sale value of the position.
    pub proceeds: f64,
    /// Original purchase cost of the position.
    pub cost_basis: f64,
    pub short_term_net: f64,
    pub long_term_net: f64
}

/// Positional view of a transaction-shaped row before any value is interpreted.
#[derive(Debug, Deserialize)]
struct RawRecord<'a> {
    symbol: &'a str,
    security: &'a str,
    quantity: &'a str,
    date_acquired: &'a str,
    date_sold: &'a str,
    proceeds: &'a str,
    cost_basis: &'a str,
    short_term_net: &'a str,
    long_term_net: &'a str,
    _trailing: &'a str
}

impl Transaction {
    /// Classifies one CSV row, building a transaction when the row is shaped like one.
    ///
    /// # Errors
    /// Returns `RecordError` if:
    /// - The row does not have exactly ten fields (unparsed).
    /// - The symbol cell is empty (unparsed).
    /// - A numeric or date cell of a transaction-shaped row cannot be read.
    pub fn from_record(record: &StringRecord) -> Result<Self, RecordError> {
        if record.len() != TRANSACTION_FIELD_COUNT {
            return Err(RecordError::FieldCount {
                expected: TRANSACTION_FIELD_COUNT,
                field_count: record.len()
            })
        }

        let raw: RawRecord = record.deserialize(None)?;

        if raw.symbol.is_empty() {
            return Err(RecordError::MissingSymbol)
        }

        let amount = |column: &'static str, value: &str| {
            parse_amount(value).map_err(|error| RecordError::invalid_value(column, raw.symbol, error))
        };
        let date = |column: &'static str, value: &str| {
            TradeDate::from_str(value).map_err(|error| RecordError::invalid_value(column, raw.symbol, error))
        };

        Ok(Self {
            symbol: raw.symbol.to_string(),
            security: raw.security.to_string(),
            quantity: amount("quantity", raw.quantity)?,
            date_acquired: date("date acquired", raw.date_acquired)?,
            date_sold: date("date sold", raw.date_sold)?,
            proceeds: amount("proceeds", raw.proceeds)?,
            cost_basis: amount("cost basis", raw.cost_basis)?,
            short_term_net: amount("short term net", raw.short_term_net)?,
            long_term_net: amount("long term net", raw.long_term_net)?
        })
    }

    /// Derives the holding period from the nets.
    ///
    /// A zero short-term net is read as long-term, so a short-term sale that broke exactly even
    /// is reported as long-term.
    pub fn term(&self) -> Term {
        if self.short_term_net == 0.0 {
            Term::LongTerm
        } else {
            Term::ShortTerm
        }
    }

    /// The net gain or loss for this transaction's term.
    pub fn net(&self) -> f64 {
        match self.term() {
            Term::ShortTerm => self.short_term_net,
            Term::LongTerm => self.long_term_net
        }
    }
}
