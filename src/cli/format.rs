//! Number and currency formatting for Spanish ("es-ES") display.
//!
//! Thousands are grouped with `.` and decimals use `,`. NaN renders as
//! "-"; infinite quantities (a zero-priced fund) render as the infinity
//! sign, matching what the quantity calculator propagates.

/// Formats a number with `decimals` fraction digits in es-ES style.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "-".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.decimals$}", value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut grouped = String::new();
    let digits = int_part.as_bytes();
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit as char);
    }

    let mut result = String::new();
    if value < 0.0 {
        result.push('-');
    }
    result.push_str(&grouped);
    if let Some(frac) = frac_part {
        result.push(',');
        result.push_str(frac);
    }
    result
}

/// Formats a money amount with its currency symbol, 2 decimals.
pub fn format_currency(value: f64, currency: &str) -> String {
    if value.is_nan() {
        return "-".to_string();
    }
    let amount = format_number(value, 2);
    match currency {
        "EUR" => format!("{amount} €"),
        "USD" => format!("{amount} $"),
        other => format!("{amount} {other}"),
    }
}
