//! Number formatting utilities for human-readable display.
//!
//! Prices render as US-dollar currency with two decimals and comma separators,
//! percentages as signed values with two decimals.

/// Adds thousands separators to the integer part of a plain decimal string.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format an f64 with a fixed number of decimals and thousands separators.
pub fn format_with_decimals(amount: f64, decimals: usize) -> String {
    group_thousands(&format!("{:.1$}", normalize_zero(amount), decimals))
}

/// Format a price as US currency, e.g. `$1,234.50` or `-$3.10`.
pub fn format_price(price: f64) -> String {
    let body = format_with_decimals(price.abs(), 2);
    if price < 0.0 && shows_nonzero(&body) {
        format!("-${}", body)
    } else {
        format!("${}", body)
    }
}

/// Format a percentage with an explicit sign, e.g. `+1.23%` or `-0.50%`.
///
/// Anything that rounds to zero prints as `+0.00%`.
pub fn format_percentage(percentage: f64) -> String {
    let body = format!("{:.2}", percentage.abs());
    let sign = if percentage < 0.0 && shows_nonzero(&body) {
        "-"
    } else {
        "+"
    };
    format!("{}{}%", sign, body)
}

/// Whether a rendered number has any non-zero digit.
fn shows_nonzero(rendered: &str) -> bool {
    rendered.chars().any(|c| c.is_ascii_digit() && c != '0')
}

// -0.0 would otherwise print as "-0.00".
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
