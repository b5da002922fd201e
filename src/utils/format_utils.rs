//! Minimal money formatting for display strings.
//!
//! Rich locale-aware formatting belongs to the presentation layer; this
//! covers the `formatted` field on periodized amounts and summary cards.

use rust_decimal::Decimal;

use crate::constants::DISPLAY_DECIMAL_PRECISION;

fn currency_symbol(currency: &str) -> &str {
    match currency {
        "USD" | "AUD" | "CAD" | "NZD" | "SGD" | "HKD" => "$",
        "EUR" => "\u{20ac}",
        "GBP" => "\u{a3}",
        "JPY" | "CNY" => "\u{a5}",
        _ => "",
    }
}

/// Formats a monetary amount with a currency symbol, thousands separators,
/// and two decimal places, e.g. `format_money(dec!(5000), "USD")` gives
/// "$5,000.00". Currencies without a known symbol are prefixed with their
/// code instead, e.g. "CHF 1,500.00".
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp(DISPLAY_DECIMAL_PRECISION);
    let negative = rounded.is_sign_negative();
    let abs = rounded.abs();

    let digits = format!("{:.prec$}", abs, prec = DISPLAY_DECIMAL_PRECISION as usize);
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let symbol = currency_symbol(currency);
    let sign = if negative { "-" } else { "" };
    if symbol.is_empty() {
        format!("{}{} {}.{}", sign, currency, grouped, frac_part)
    } else {
        format!("{}{}{}.{}", sign, symbol, grouped, frac_part)
    }
}
