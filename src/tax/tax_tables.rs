//! Published tax tables and thresholds.
//!
//! Constants sourced from the ATO resident tax rates, the low income tax
//! offset, the Medicare levy phase-in for singles, and the HELP repayment
//! thresholds for 2024-25.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::TaxBracket;

/// Country identifier for the Australian bracket tables.
pub const COUNTRY_AUSTRALIA: &str = "australia";

/// Country identifier for flat-rate mode.
pub const COUNTRY_SIMPLE: &str = "simple";

/// Low income tax offset: full amount and phase-out bands (2024-25).
pub const LITO_MAX_OFFSET: Decimal = dec!(700);
pub const LITO_FULL_THRESHOLD: Decimal = dec!(37500);
pub const LITO_FIRST_TAPER_END: Decimal = dec!(45000);
pub const LITO_FIRST_TAPER_RATE: Decimal = dec!(0.05);
pub const LITO_SECOND_TAPER_END: Decimal = dec!(66667);
pub const LITO_SECOND_TAPER_RATE: Decimal = dec!(0.015);

/// Medicare levy for singles (2024-25): 2% above the phase-in band,
/// 10% of the excess within it.
pub const MEDICARE_LEVY_RATE: Decimal = dec!(0.02);
pub const MEDICARE_PHASE_IN_LOWER: Decimal = dec!(24276);
pub const MEDICARE_PHASE_IN_UPPER: Decimal = dec!(30345);
pub const MEDICARE_PHASE_IN_RATE: Decimal = dec!(0.10);

/// HELP/HECS repayment ladder (2024-25): (income threshold, rate applied
/// to the whole repayment income). The highest threshold at or below the
/// income determines the rate.
pub const HELP_REPAYMENT_BANDS: [(Decimal, Decimal); 18] = [
    (dec!(54435), dec!(0.01)),
    (dec!(62850), dec!(0.02)),
    (dec!(66620), dec!(0.025)),
    (dec!(70618), dec!(0.03)),
    (dec!(74855), dec!(0.035)),
    (dec!(79346), dec!(0.04)),
    (dec!(84107), dec!(0.045)),
    (dec!(89154), dec!(0.05)),
    (dec!(94503), dec!(0.055)),
    (dec!(100174), dec!(0.06)),
    (dec!(106185), dec!(0.065)),
    (dec!(112556), dec!(0.07)),
    (dec!(119309), dec!(0.075)),
    (dec!(126467), dec!(0.08)),
    (dec!(134056), dec!(0.085)),
    (dec!(142100), dec!(0.09)),
    (dec!(150626), dec!(0.095)),
    (dec!(159663), dec!(0.10)),
];

/// Resident brackets for the given Australian financial year.
/// Unknown years fall back to the 2024-25 (Stage 3) table.
pub fn australian_brackets(financial_year: &str) -> Vec<TaxBracket> {
    match financial_year {
        "2023-24" => vec![
            bracket(dec!(0), Some(dec!(18200)), dec!(0)),
            bracket(dec!(18200), Some(dec!(45000)), dec!(0.19)),
            bracket(dec!(45000), Some(dec!(120000)), dec!(0.325)),
            bracket(dec!(120000), Some(dec!(180000)), dec!(0.37)),
            bracket(dec!(180000), None, dec!(0.45)),
        ],
        // 2024-25 onwards (Stage 3)
        _ => vec![
            bracket(dec!(0), Some(dec!(18200)), dec!(0)),
            bracket(dec!(18200), Some(dec!(45000)), dec!(0.16)),
            bracket(dec!(45000), Some(dec!(135000)), dec!(0.30)),
            bracket(dec!(135000), Some(dec!(190000)), dec!(0.37)),
            bracket(dec!(190000), None, dec!(0.45)),
        ],
    }
}

/// Bracket table for a country, if one is published here.
pub fn brackets_for_country(country: &str, financial_year: Option<&str>) -> Option<Vec<TaxBracket>> {
    match country {
        COUNTRY_AUSTRALIA => Some(australian_brackets(financial_year.unwrap_or(""))),
        _ => None,
    }
}

fn bracket(min: Decimal, max: Option<Decimal>, rate: Decimal) -> TaxBracket {
    TaxBracket {
        min,
        max,
        rate,
        base_amount: None,
    }
}
