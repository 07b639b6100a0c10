use std::env;
use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;

const PROBABILITY_LONG_TERM: f64 = 0.4;
const PROBABILITY_UNKNOWN_ACQUIRED: f64 = 0.05;
const PROBABILITY_NOISE_ROW: f64 = 0.02;
const DATE_FORMAT: &str = "%m/%d/%Y";

const SECURITIES: [(&str, &str); 8] = [
    ("AAPL", "APPLE INC"),
    ("MSFT", "MICROSOFT CORP"),
    ("NVDA", "NVIDIA CORP"),
    ("TSLA", "TESLA INC"),
    ("AMZN", "AMAZON.COM INC"),
    ("VTI", "VANGUARD TOTAL STOCK MARKET ETF"),
    ("SCHD", "SCHWAB US DIVIDEND EQUITY ETF"),
    ("BRK.B", "BERKSHIRE HATHAWAY INC CLASS B")
];

struct GeneratorConfig {
    num_records: usize,
    tax_year: i32,
    output_path: String,
}

impl GeneratorConfig {
    fn from_args() -> Self {
        let args: Vec<String> = env::args().collect();
        let num_records = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1_000);
        let tax_year = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(2023);

        Self {
            num_records,
            tax_year,
            output_path: "samples/generated_export.csv".to_string(),
        }
    }
}

fn main() -> io::Result<()> {
    let config = GeneratorConfig::from_args();

    println!(
        "Generating {} closed lots for tax year {} in {}...",
        config.num_records, config.tax_year, config.output_path
    );

    if let Some(parent) = Path::new(&config.output_path).parent() {
        create_dir_all(parent)?;
    }

    let file = File::create(&config.output_path)?;
    let mut writer = BufWriter::new(file);
    let mut rng = rand::thread_rng();

    writeln!(writer, "\"Realized Gain/Loss - Lot Details for XXXX-1234 as of 01/05/{}\"", config.tax_year + 1)?;
    writeln!(writer)?;
    writeln!(writer, "Symbol,Name,Quantity,Date Acquired,Date Sold,Proceeds,Cost Basis,Short Term Gain/Loss,Long Term Gain/Loss")?;

    let mut short_term_total = 0.0;
    let mut long_term_total = 0.0;

    for _ in 0..config.num_records {
        if rng.gen_bool(PROBABILITY_NOISE_ROW) {
            generate_noise_row(&mut writer, &mut rng)?;
        }

        let (short_term_net, long_term_net) = generate_lot(&mut writer, &mut rng, config.tax_year)?;
        short_term_total += short_term_net;
        long_term_total += long_term_net;
    }

    writeln!(
        writer,
        "\"\",\"Total\",\"--\",\"--\",\"--\",\"--\",\"--\",\"{}\",\"{}\",\"\"",
        format_currency(short_term_total),
        format_currency(long_term_total)
    )?;
    writeln!(writer)?;
    writeln!(writer, "\"Brokerage products are not FDIC insured and may lose value.\"")?;

    writer.flush()?;

    println!("Generation complete.");

    Ok(())
}

fn generate_lot<W: Write, R: Rng>(writer: &mut W, rng: &mut R, tax_year: i32) -> io::Result<(f64, f64)> {
    let (symbol, security) = SECURITIES[rng.gen_range(0..SECURITIES.len())];
    let quantity: f64 = (rng.gen_range(0.1..500.0_f64) * 1000.0).round() / 1000.0;

    let year_start = NaiveDate::from_ymd_opt(tax_year, 1, 1)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, format!("Invalid tax year {tax_year}")))?;
    let date_sold = year_start + Duration::days(rng.gen_range(0..365));
    let long_term = rng.gen_bool(PROBABILITY_LONG_TERM);
    let held_days = if long_term { rng.gen_range(366..3650) } else { rng.gen_range(1..366) };
    let date_acquired = if rng.gen_bool(PROBABILITY_UNKNOWN_ACQUIRED) {
        "Unknown".to_string()
    } else {
        (date_sold - Duration::days(held_days)).format(DATE_FORMAT).to_string()
    };

    let cost_basis = round_cents(quantity * rng.gen_range(5.0..900.0));
    let proceeds = round_cents(cost_basis * rng.gen_range(0.6..1.6));
    let net = round_cents(proceeds - cost_basis);
    let (short_term_net, long_term_net) = if long_term { (0.0, net) } else { (net, 0.0) };

    writeln!(
        writer,
        "\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"{}\",\"\"",
        symbol,
        security,
        quantity,
        date_acquired,
        date_sold.format(DATE_FORMAT),
        format_currency(proceeds),
        format_currency(cost_basis),
        format_placeholder(short_term_net),
        format_placeholder(long_term_net)
    )?;

    Ok((short_term_net, long_term_net))
}

fn generate_noise_row<W: Write, R: Rng>(writer: &mut W, rng: &mut R) -> io::Result<()> {
    let noise_rows = [
        "",
        "\"Wash sale adjustments are included in cost basis.\"",
        "Symbol,Name,Quantity,Date Acquired,Date Sold,Proceeds,Cost Basis,Short Term Gain/Loss,Long Term Gain/Loss",
        "\"\",\"Subtotal\",\"--\",\"--\",\"--\",\"--\",\"--\",\"--\",\"--\",\"\"",
    ];

    let record = noise_rows.choose(rng).copied().unwrap_or_default();
    writeln!(writer, "{}", record)?;

    Ok(())
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn format_placeholder(value: f64) -> String {
    if value == 0.0 {
        "--".to_string()
    } else {
        format_currency(value)
    }
}

/// Formats a dollar value the way brokerage exports do, e.g. `-$1,234.50`.
fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let cents = format!("{:.2}", value.abs());
    let (integer, fraction) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{fraction}")
}
