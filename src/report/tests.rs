use super::quarter::{quarter_index, Quarter, QuarterBuckets, QUARTER_COUNT};
use super::renderer::gain_phrase;
use super::write_report;

use anyhow::{anyhow, Result};
use std::str::FromStr;

use crate::models::Transaction;
use crate::storage::TransactionStore;
use crate::types::TradeDate;

fn create_transaction(symbol: &str, quantity: f64, date_sold: &str, short_term_net: f64, long_term_net: f64) -> Result<Transaction> {
    Ok(Transaction {
        symbol: symbol.to_string(),
        security: String::new(),
        quantity,
        date_acquired: TradeDate::Unknown,
        date_sold: TradeDate::from_str(date_sold)?,
        proceeds: 1000.0,
        cost_basis: 1000.0 - short_term_net - long_term_net,
        short_term_net,
        long_term_net
    })
}

fn quarters<'a>(buckets: &'a QuarterBuckets<'a>) -> Vec<&'a Quarter<'a>> {
    buckets.iter().map(|(_, quarter)| quarter).collect()
}

fn render(store: &mut TransactionStore) -> Result<String> {
    let mut output = Vec::new();
    write_report(store, &mut output)?;

    Ok(String::from_utf8(output)?)
}

#[test]
fn test_quarter_index_follows_calendar_months() -> Result<()> {
    let test_cases = vec![
        ("01/01/2023", 0),
        ("03/31/2023", 0),
        ("04/01/2023", 1),
        ("06/30/2023", 1),
        ("07/01/2023", 2),
        ("09/30/2023", 2),
        ("10/01/2023", 3),
        ("12/31/2023", 3),
    ];

    for (date, expected_index) in test_cases {
        assert_eq!(quarter_index(&TradeDate::from_str(date)?), expected_index, "date: {date}");
    }

    assert_eq!(quarter_index(&TradeDate::Unknown), 0);

    Ok(())
}

#[test]
fn test_gain_phrase_uses_the_term_of_the_transaction() -> Result<()> {
    assert_eq!(gain_phrase(&create_transaction("A", 1.0, "01/01/2023", -50.25, 0.0)?), "short term loss of -50.25 USD");
    assert_eq!(gain_phrase(&create_transaction("A", 1.0, "01/01/2023", 500.0, 0.0)?), "short term gain of 500.00 USD");
    assert_eq!(gain_phrase(&create_transaction("A", 1.0, "01/01/2023", 0.0, 100.0)?), "long term gain of 100.00 USD");
    assert_eq!(gain_phrase(&create_transaction("A", 1.0, "01/01/2023", 0.0, -100.0)?), "long term loss of -100.00 USD");
    assert_eq!(gain_phrase(&create_transaction("A", 1.0, "01/01/2023", 0.0, 0.0)?), "long term gain of 0.00 USD");

    Ok(())
}

#[test]
fn test_buckets_always_hold_four_quarters_in_sorted_order() -> Result<()> {
    let transactions = vec![
        create_transaction("JAN", 1.0, "01/10/2023", 1.0, 0.0)?,
        create_transaction("FEB", 1.0, "02/10/2023", 1.0, 0.0)?,
        create_transaction("NOV", 1.0, "11/10/2023", 0.0, 1.0)?,
    ];
    let buckets = QuarterBuckets::from_sorted(&transactions);
    let quarters = quarters(&buckets);

    assert_eq!(quarters.len(), QUARTER_COUNT);

    let symbols: Vec<&str> = quarters[0].transactions.iter().map(|transaction| transaction.symbol.as_str()).collect();

    assert_eq!(symbols, vec!["JAN", "FEB"]);
    assert!(quarters[1].transactions.is_empty());
    assert!(quarters[2].transactions.is_empty());
    assert_eq!(quarters[3].transactions.len(), 1);

    Ok(())
}

#[test]
fn test_quarter_summary_adds_both_nets() -> Result<()> {
    let transactions = vec![
        create_transaction("A", 1.0, "04/01/2023", 500.0, 0.0)?,
        create_transaction("B", 1.0, "05/01/2023", -120.5, 0.0)?,
        create_transaction("C", 1.0, "06/01/2023", 0.0, -100.0)?,
    ];
    let buckets = QuarterBuckets::from_sorted(&transactions);
    let summary = quarters(&buckets)[1].summary(1);

    assert_eq!(summary.number, 2);
    assert_eq!(summary.short_term_net, 379.5);
    assert_eq!(summary.long_term_net, -100.0);

    Ok(())
}

#[test]
fn test_report_renders_each_quarter_with_totals() -> Result<()> {
    let mut store = TransactionStore::new();
    store.insert(create_transaction("MSFT", 5.0, "05/10/2023", 0.0, -100.0)?);
    store.insert(create_transaction("AAPL", 10.0, "02/15/2023", 500.0, 0.0)?);

    let report = render(&mut store)?;
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines, vec![
        "============ ALL TRANSACTIONS SORTED BY SALE DATE, SPLIT BY QUARTER ============",
        "",
        "Sold 10.0 shares of AAPL on 02/15/2023 for a short term gain of 500.00 USD",
        "============ End of Quarter 1 || Short Term Net: 500.00, Long Term Net: 0.00",
        "",
        "Sold 5.0 shares of MSFT on 05/10/2023 for a long term loss of -100.00 USD",
        "============ End of Quarter 2 || Short Term Net: 0.00, Long Term Net: -100.00",
        "",
        "============ End of Quarter 3 || Short Term Net: 0.00, Long Term Net: 0.00",
        "",
        "============ End of Quarter 4 || Short Term Net: 0.00, Long Term Net: 0.00",
        "",
        "============ YEAR SUMMARY ============",
        "Short term: 1 transactions, proceeds 1000.00, cost basis 500.00, net 500.00",
        "Long term: 1 transactions, proceeds 1000.00, cost basis 1100.00, net -100.00",
        "Total net: 400.00",
    ]);

    Ok(())
}

#[test]
fn test_report_for_empty_store_still_lists_four_quarters() -> Result<()> {
    let report = render(&mut TransactionStore::new())?;

    assert_eq!(report.matches("End of Quarter").count(), QUARTER_COUNT);
    assert!(!report.contains("Sold "));
    assert!(!report.contains("-0.00"));
    assert!(report.contains("Total net: 0.00"));

    Ok(())
}

#[test]
fn test_report_keeps_input_order_for_same_day_sales() -> Result<()> {
    let mut store = TransactionStore::new();
    store.insert(create_transaction("LATER", 1.0, "08/02/2023", 1.0, 0.0)?);
    store.insert(create_transaction("FIRST", 1.0, "08/01/2023", 1.0, 0.0)?);
    store.insert(create_transaction("SECOND", 1.0, "08/01/2023", 0.0, 1.0)?);

    let report = render(&mut store)?;
    let position = |symbol: &str| report.find(&format!("of {symbol} on")).ok_or_else(|| anyhow!("{symbol} missing from report"));

    assert!(position("FIRST")? < position("SECOND")?);
    assert!(position("SECOND")? < position("LATER")?);

    Ok(())
}

#[test]
fn test_report_rounds_quantity_to_one_decimal() -> Result<()> {
    let mut store = TransactionStore::new();
    store.insert(create_transaction("VTI", 2.46, "10/05/2023", 0.0, 12.3456)?);

    let report = render(&mut store)?;

    assert!(report.contains("Sold 2.5 shares of VTI on 10/05/2023 for a long term gain of 12.35 USD"));
    assert!(report.contains("End of Quarter 4 || Short Term Net: 0.00, Long Term Net: 12.35"));

    Ok(())
}

#[test]
fn test_report_lists_unknown_sale_dates_first_in_quarter_one() -> Result<()> {
    let mut store = TransactionStore::new();
    store.insert(create_transaction("AAPL", 10.0, "01/20/2023", 500.0, 0.0)?);

    let mut unknown = create_transaction("GE", 4.0, "01/20/2023", 0.0, 25.0)?;
    unknown.date_sold = TradeDate::Unknown;
    store.insert(unknown);

    let report = render(&mut store)?;
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[2], "Sold 4.0 shares of GE on Unknown for a long term gain of 25.00 USD");
    assert_eq!(lines[3], "Sold 10.0 shares of AAPL on 01/20/2023 for a short term gain of 500.00 USD");
    assert_eq!(lines[4], "============ End of Quarter 1 || Short Term Net: 500.00, Long Term Net: 25.00");

    Ok(())
}
