//! Pure conversion between payment frequencies.
//!
//! Every conversion goes through the annual equivalent: `to_annual`
//! multiplies by a fixed periods-per-year table and `from_annual` divides
//! by it. The table never contains zero, so these functions cannot fail.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::utils::format_money;

use super::{Frequency, PeriodizedAmount};

/// Number of periods in a year for each frequency.
/// Hourly assumes a standard 2080-hour working year.
pub fn periods_per_year(frequency: Frequency) -> Decimal {
    match frequency {
        Frequency::Hourly => dec!(2080),
        Frequency::Daily => dec!(365),
        Frequency::Weekly => dec!(52),
        Frequency::Fortnightly => dec!(26),
        Frequency::Monthly => dec!(12),
        Frequency::Quarterly => dec!(4),
        Frequency::Annually => dec!(1),
        Frequency::Once => dec!(1),
    }
}

/// Converts an amount in the given frequency to its annual equivalent.
pub fn to_annual(amount: Decimal, frequency: Frequency) -> Decimal {
    amount * periods_per_year(frequency)
}

/// Converts an annual amount to the given frequency.
pub fn from_annual(annual_amount: Decimal, frequency: Frequency) -> Decimal {
    annual_amount / periods_per_year(frequency)
}

/// Whole days in one period of the given frequency.
pub fn days_in_period(frequency: Frequency) -> i64 {
    (dec!(365) / periods_per_year(frequency))
        .round()
        .to_i64()
        .unwrap_or(0)
}

/// Builds a `PeriodizedAmount` from an annual amount.
pub fn periodize(annual_amount: Decimal, period: Frequency, currency: &str) -> PeriodizedAmount {
    let value = from_annual(annual_amount, period);
    PeriodizedAmount {
        value,
        period,
        annualized: annual_amount,
        formatted: format_money(value, currency),
    }
}
