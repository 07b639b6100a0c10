use crate::types::ParseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Unparsed line: expected [{expected}] fields but found [{field_count}]")]
    FieldCount {
        expected: usize,
        field_count: usize
    },
    #[error("Unparsed line: symbol is empty")]
    MissingSymbol,
    #[error("Record could not be mapped onto transaction columns: {0}")]
    Malformed(#[from] csv::Error),
    #[error("Invalid [{column}] value for symbol [{symbol}]: {source}")]
    InvalidValue {
        column: &'static str,
        symbol: String,
        #[source]
        source: ParseError
    }
}

impl RecordError {
    /// Whether the row simply is not a transaction (headers, blank separators, footers).
    ///
    /// These rows are expected in real exports and are skipped. Every other variant means a
    /// transaction-shaped row carried a value that could not be read.
    pub fn is_unparsed(&self) -> bool {
        matches!(self, RecordError::FieldCount { .. } | RecordError::MissingSymbol)
    }

    pub fn invalid_value(column: &'static str, symbol: &str, source: ParseError) -> Self {
        Self::InvalidValue {
            column,
            symbol: symbol.to_string(),
            source
        }
    }
}
