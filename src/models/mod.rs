mod errors;
mod transaction;

pub use errors::RecordError;
pub use transaction::{Term, Transaction};

/// Number of cells in a brokerage row that describes a closed position.
pub const TRANSACTION_FIELD_COUNT: usize = 10;
