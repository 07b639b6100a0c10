use std::io::{self, Write};

use tracing::debug;

use crate::models::{Term, Transaction};
use crate::report::quarter::{total, QuarterBuckets};
use crate::storage::TransactionStore;

const BANNER: &str = "============ ALL TRANSACTIONS SORTED BY SALE DATE, SPLIT BY QUARTER ============";
const YEAR_BANNER: &str = "============ YEAR SUMMARY ============";

/// Describes the outcome of a sale, e.g. `short term loss of -50.25 USD`.
pub fn gain_phrase(transaction: &Transaction) -> String {
    let term = match transaction.term() {
        Term::ShortTerm => "short term",
        Term::LongTerm => "long term"
    };
    let net = transaction.net();
    let outcome = if net < 0.0 { "loss" } else { "gain" };

    format!("{term} {outcome} of {net:.2} USD")
}

/// Writes the quarterly report for every transaction in the store.
///
/// The store is sorted by sale date first, then the full list is split into calendar quarters.
/// Each quarter lists its sales followed by its short-term and long-term totals, and a closing
/// section summarizes both partitions for the whole file.
pub fn write_report<W: Write>(store: &mut TransactionStore, output: &mut W) -> io::Result<()> {
    store.sort_by_sale_date();

    debug!("Rendering report for {} transactions", store.len());

    let quarters = QuarterBuckets::from_sorted(store.all());

    writeln!(output, "{BANNER}")?;
    writeln!(output)?;

    for (index, quarter) in quarters.iter() {
        for transaction in &quarter.transactions {
            writeln!(
                output,
                "Sold {:.1} shares of {} on {} for a {}",
                transaction.quantity,
                transaction.symbol,
                transaction.date_sold,
                gain_phrase(transaction)
            )?;
        }

        let summary = quarter.summary(index);

        writeln!(
            output,
            "============ End of Quarter {} || Short Term Net: {:.2}, Long Term Net: {:.2}",
            summary.number,
            summary.short_term_net,
            summary.long_term_net
        )?;
        writeln!(output)?;
    }

    write_year_summary(store, output)
}

fn write_year_summary<W: Write>(store: &TransactionStore, output: &mut W) -> io::Result<()> {
    writeln!(output, "{YEAR_BANNER}")?;

    let short_term_net = write_term_summary(output, "Short term", store.short_term())?;
    let long_term_net = write_term_summary(output, "Long term", store.long_term())?;

    writeln!(output, "Total net: {:.2}", short_term_net + long_term_net)
}

fn write_term_summary<W: Write>(output: &mut W, label: &str, transactions: &[Transaction]) -> io::Result<f64> {
    let proceeds = total(transactions.iter().map(|transaction| transaction.proceeds));
    let cost_basis = total(transactions.iter().map(|transaction| transaction.cost_basis));
    let net = total(transactions.iter().map(Transaction::net));

    writeln!(
        output,
        "{label}: {} transactions, proceeds {proceeds:.2}, cost basis {cost_basis:.2}, net {net:.2}",
        transactions.len()
    )?;

    Ok(net)
}
