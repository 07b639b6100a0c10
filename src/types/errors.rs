use std::num::ParseFloatError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Parse error: no number found in [{0}]")]
    MissingNumber(String),
    #[error("Parse error: {0}")]
    ParseFloat(#[from] ParseFloatError),
    #[error("Parse error: cannot parse [{value}] as a MM/DD/YYYY date")]
    InvalidDate {
        value: String,
        #[source]
        source: Option<chrono::ParseError>
    }
}
