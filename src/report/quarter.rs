use crate::models::Transaction;
use crate::types::TradeDate;

pub const QUARTER_COUNT: usize = 4;

const MONTHS_PER_QUARTER: u32 = 3;

/// Calendar quarter of a sale date: January to March is `0`, October to December is `3`.
pub fn quarter_index(date: &TradeDate) -> usize {
    ((date.month() - 1) / MONTHS_PER_QUARTER) as usize
}

/// Sums from positive zero so empty quarters print `0.00` rather than `-0.00`.
pub(crate) fn total(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |sum, value| sum + value)
}

/// Per-quarter totals printed at the end of each quarter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuarterSummary {
    /// 1-indexed quarter number.
    pub number: usize,
    pub short_term_net: f64,
    pub long_term_net: f64
}

#[derive(Debug, Default)]
pub struct Quarter<'a> {
    pub transactions: Vec<&'a Transaction>
}

impl Quarter<'_> {
    pub fn summary(&self, index: usize) -> QuarterSummary {
        QuarterSummary {
            number: index + 1,
            short_term_net: total(self.transactions.iter().map(|transaction| transaction.short_term_net)),
            long_term_net: total(self.transactions.iter().map(|transaction| transaction.long_term_net))
        }
    }
}

/// The four calendar quarters of a report, always present even when empty.
#[derive(Debug, Default)]
pub struct QuarterBuckets<'a> {
    quarters: [Quarter<'a>; QUARTER_COUNT]
}

impl<'a> QuarterBuckets<'a> {
    /// Buckets transactions by sale date. Each quarter keeps the order of `transactions`, so a
    /// slice already sorted by sale date yields chronologically ordered quarters.
    pub fn from_sorted(transactions: &'a [Transaction]) -> Self {
        let mut buckets = Self::default();

        for transaction in transactions {
            buckets.quarters[quarter_index(&transaction.date_sold)].transactions.push(transaction);
        }

        buckets
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Quarter<'a>)> {
        self.quarters.iter().enumerate()
    }
}
