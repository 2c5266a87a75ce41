//! Number to display-string conversion
//!
//! Integral values keep one fractional digit (`8.0`), large and tiny
//! magnitudes switch to `E` notation (`1.0E10`, `1.0E-4`). Everything in
//! between uses the shortest representation that round-trips.

/// Lower bound (inclusive) of plain decimal notation
const PLAIN_MIN: f64 = 1e-3;
/// Upper bound (exclusive) of plain decimal notation
const PLAIN_MAX: f64 = 1e7;

/// Formats a value the way the display shows results
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let magnitude = value.abs();
    if (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        let plain = format!("{value}");
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        scientific(value)
    }
}

fn scientific(value: f64) -> String {
    // `{:e}` yields e.g. "1e10" or "1.5e-4"
    let raw = format!("{value:e}");
    match raw.split_once('e') {
        Some((mantissa, exp)) if mantissa.contains('.') => format!("{mantissa}E{exp}"),
        Some((mantissa, exp)) => format!("{mantissa}.0E{exp}"),
        None => raw,
    }
}

/// Parses typed input or a previously formatted result.
///
/// Returns `None` for anything that is not a number (for example a buffer
/// holding parentheses).
#[must_use]
pub fn parse_number(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    match trimmed {
        "" => None,
        "Infinity" => Some(f64::INFINITY),
        "-Infinity" => Some(f64::NEG_INFINITY),
        _ => trimmed.parse::<f64>().ok(),
    }
}
