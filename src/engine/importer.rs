use crate::models::{RecordError, Transaction};
use crate::storage::TransactionStore;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads a brokerage export from disk into a populated store.
///
/// The file handle lives only as long as the reader and is released on every return path.
pub fn import_transactions(path: &Path) -> Result<TransactionStore> {
    let file = File::open(path)
        .with_context(|| format!("Error opening CSV at path: {}", path.display()))?;

    info!("Reading transactions from {}", path.display());

    import_from_reader(BufReader::new(file))
}

/// Drives the CSV reader over every row of an export.
///
/// Rows that are not shaped like a transaction (banners, headers, footers) are logged and
/// skipped. A transaction-shaped row with an unreadable value stops the import, as does a
/// framing error from the CSV reader itself.
pub fn import_from_reader<R: Read>(reader: R) -> Result<TransactionStore> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut store = TransactionStore::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let record = result.context("Error reading CSV")?;
        let line = line_number(&record);

        let classified: Result<Transaction, RecordError> = Transaction::from_record(&record);

        match classified {
            Ok(transaction) => {
                debug!(
                    "Line [{line}] accepted: [{}] ({}) acquired [{}], sold [{}]",
                    transaction.symbol,
                    transaction.security,
                    transaction.date_acquired,
                    transaction.date_sold
                );
                store.insert(transaction);
            }
            Err(error) if error.is_unparsed() => {
                // NOTE: Real exports interleave banners, headers and totals with the data rows
                warn!("Did not parse record at line [{line}]: {record:?} | {error}");
                skipped += 1;
            }
            Err(error) => {
                return Err(error).with_context(|| format!("Invalid transaction at line [{line}]"));
            }
        }
    }

    info!(
        "Imported {} transactions ({} short term, {} long term), skipped {skipped} rows",
        store.len(),
        store.short_term().len(),
        store.long_term().len()
    );

    if store.is_empty() {
        warn!("No transaction rows were found in the export");
    }

    Ok(store)
}

fn line_number(record: &StringRecord) -> u64 {
    record.position().map(|position| position.line()).unwrap_or_default()
}
