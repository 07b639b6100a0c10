use crate::types::errors::ParseError;

const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, Copy)]
enum Scan {
    Seeking,
    Integer,
    Point,
    Fraction
}

/// Sanitizes a brokerage cell such as `$1,234.50`, `-$45.00` or `--` into a dollar value.
///
/// Empty cells and the `--` placeholder are treated as zero. Any other cell must contain a
/// numeric run; the sign is taken from a leading `-` on the cell itself.
///
/// # Errors
/// Returns `ParseError` if the cell holds no digits at all.
pub fn parse_amount(value: &str) -> Result<f64, ParseError> {
    let value = value.trim();

    if value.is_empty() || value == PLACEHOLDER {
        return Ok(0.0);
    }

    let value = value.replace(',', "");
    let number = numeric_run(&value)
        .ok_or_else(|| ParseError::MissingNumber(value.clone()))?;
    let magnitude: f64 = number.parse()?;

    if value.starts_with('-') {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Finds the first `digits[.digits]` run. Currency symbols and signs ahead of it are skipped.
fn numeric_run(value: &str) -> Option<&str> {
    let mut state = Scan::Seeking;
    let mut start = 0;
    let mut end = 0;

    for (index, character) in value.char_indices() {
        match (state, character) {
            (Scan::Seeking, '0'..='9') => {
                state = Scan::Integer;
                start = index;
                end = index + 1;
            }
            (Scan::Seeking, _) => {}
            (Scan::Integer, '0'..='9') => end = index + 1,
            (Scan::Integer, '.') => state = Scan::Point,
            (Scan::Point | Scan::Fraction, '0'..='9') => {
                state = Scan::Fraction;
                end = index + 1;
            }
            _ => break
        }
    }

    match state {
        Scan::Seeking => None,
        _ => Some(&value[start..end])
    }
}
