mod amount;
mod errors;
mod trade_date;

pub use amount::parse_amount;
pub use errors::ParseError;
pub use trade_date::TradeDate;
