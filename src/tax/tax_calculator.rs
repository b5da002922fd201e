//! Progressive tax computation.
//!
//! The bracket walk applies each bracket's marginal rate to the slice of
//! income falling inside it. A bracket carrying a `base_amount` (cumulative
//! tax at its lower bound) short-circuits the walk. Flat-rate mode applies
//! a single percentage to the whole amount.

use rust_decimal::Decimal;

use super::tax_tables::{
    brackets_for_country, COUNTRY_AUSTRALIA, COUNTRY_SIMPLE, HELP_REPAYMENT_BANDS, LITO_FIRST_TAPER_END,
    LITO_FIRST_TAPER_RATE, LITO_FULL_THRESHOLD, LITO_MAX_OFFSET, LITO_SECOND_TAPER_END,
    LITO_SECOND_TAPER_RATE, MEDICARE_LEVY_RATE, MEDICARE_PHASE_IN_LOWER, MEDICARE_PHASE_IN_RATE,
    MEDICARE_PHASE_IN_UPPER,
};
use super::{TaxAssessment, TaxBracket, TaxConfig, TaxResidency};

/// The bracket whose `(min, max]` range contains `income`.
/// Incomes at or below the lowest bound land in the first bracket.
fn containing_bracket(income: Decimal, brackets: &[TaxBracket]) -> Option<&TaxBracket> {
    brackets
        .iter()
        .find(|b| income > b.min && b.max.map_or(true, |max| income <= max))
        .or_else(|| brackets.first())
}

/// Progressive tax on `income` over an ascending bracket table.
pub fn calculate_bracket_tax(income: Decimal, brackets: &[TaxBracket]) -> Decimal {
    if income <= Decimal::ZERO || brackets.is_empty() {
        return Decimal::ZERO;
    }

    if let Some(bracket) = containing_bracket(income, brackets) {
        if let Some(base) = bracket.base_amount {
            return base + (income - bracket.min) * bracket.rate;
        }
    }

    let mut total = Decimal::ZERO;
    for bracket in brackets {
        if income <= bracket.min {
            break;
        }
        let upper = match bracket.max {
            Some(max) => income.min(max),
            None => income,
        };
        total += (upper - bracket.min) * bracket.rate;
    }
    total
}

/// Marginal rate: the rate of the bracket containing `income`, or the flat
/// rate in simple mode.
pub fn marginal_rate(income: Decimal, config: &TaxConfig) -> Decimal {
    match effective_brackets(config) {
        Some(brackets) => containing_bracket(income, &brackets)
            .map(|b| b.rate)
            .unwrap_or(Decimal::ZERO),
        None => config.tax_rate,
    }
}

/// Low income tax offset: full below a threshold, tapered across two bands,
/// zero above the upper threshold. Non-residents are not eligible.
pub fn low_income_offset(taxable_income: Decimal, residency: TaxResidency) -> Decimal {
    if residency == TaxResidency::NonResident {
        return Decimal::ZERO;
    }
    if taxable_income <= LITO_FULL_THRESHOLD {
        return LITO_MAX_OFFSET;
    }
    if taxable_income <= LITO_FIRST_TAPER_END {
        return (LITO_MAX_OFFSET - (taxable_income - LITO_FULL_THRESHOLD) * LITO_FIRST_TAPER_RATE)
            .max(Decimal::ZERO);
    }
    if taxable_income <= LITO_SECOND_TAPER_END {
        let first_reduction = (LITO_FIRST_TAPER_END - LITO_FULL_THRESHOLD) * LITO_FIRST_TAPER_RATE;
        let remaining = LITO_MAX_OFFSET - first_reduction;
        return (remaining - (taxable_income - LITO_FIRST_TAPER_END) * LITO_SECOND_TAPER_RATE)
            .max(Decimal::ZERO);
    }
    Decimal::ZERO
}

/// Medicare levy for singles: zero at or below the lower threshold, 10% of
/// the excess within the phase-in band, then 2% of taxable income.
pub fn medicare_levy(taxable_income: Decimal) -> Decimal {
    if taxable_income <= MEDICARE_PHASE_IN_LOWER {
        return Decimal::ZERO;
    }
    if taxable_income <= MEDICARE_PHASE_IN_UPPER {
        return (taxable_income - MEDICARE_PHASE_IN_LOWER) * MEDICARE_PHASE_IN_RATE;
    }
    taxable_income * MEDICARE_LEVY_RATE
}

/// HELP/HECS repayment: the highest ladder threshold at or below the income
/// sets the rate, applied to the whole repayment income.
pub fn help_repayment(taxable_income: Decimal) -> Decimal {
    let mut rate = Decimal::ZERO;
    for (threshold, band_rate) in HELP_REPAYMENT_BANDS {
        if taxable_income >= threshold {
            rate = band_rate;
        } else {
            break;
        }
    }
    taxable_income * rate
}

/// Full itemized assessment for a taxable income under the given config.
///
/// Offset, Medicare levy, and HELP repayment apply only when the country
/// has them (Australia here); flat-rate and unknown-country configurations
/// get the base amount alone.
pub fn assess(taxable_income: Decimal, config: &TaxConfig) -> TaxAssessment {
    let taxable = taxable_income.max(Decimal::ZERO);
    if taxable.is_zero() {
        return TaxAssessment::zero();
    }

    let base_tax = match effective_brackets(config) {
        Some(brackets) => calculate_bracket_tax(taxable, &brackets),
        None => taxable * config.tax_rate,
    };

    let (offset, levy, help) = if config.country == COUNTRY_AUSTRALIA {
        (
            low_income_offset(taxable, config.residency),
            if config.medicare_exempt {
                Decimal::ZERO
            } else {
                medicare_levy(taxable)
            },
            if config.include_help {
                help_repayment(taxable)
            } else {
                Decimal::ZERO
            },
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    };

    let total = (base_tax + levy + help - offset).max(Decimal::ZERO);

    TaxAssessment {
        taxable_income: taxable,
        base_tax,
        offset,
        medicare_levy: levy,
        help_repayment: help,
        total,
    }
}

/// The bracket table the config resolves to, or `None` for flat-rate mode
/// (simple country, or an unknown country with no custom override).
fn effective_brackets(config: &TaxConfig) -> Option<Vec<TaxBracket>> {
    if config.country == COUNTRY_SIMPLE {
        return None;
    }
    config.custom_brackets.clone().or_else(|| {
        brackets_for_country(&config.country, config.financial_year.as_deref())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::australian_brackets;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn stage3() -> Vec<TaxBracket> {
        australian_brackets("2024-25")
    }

    #[test]
    fn test_zero_income_no_tax() {
        assert_eq!(calculate_bracket_tax(dec!(0), &stage3()), dec!(0));
        assert_eq!(calculate_bracket_tax(dec!(-500), &stage3()), dec!(0));
    }

    #[test]
    fn test_tax_free_threshold() {
        assert_eq!(calculate_bracket_tax(dec!(18200), &stage3()), dec!(0));
        assert_eq!(calculate_bracket_tax(dec!(10000), &stage3()), dec!(0));
    }

    #[test]
    fn test_stage3_bracket_boundaries() {
        // (45000 - 18200) * 0.16
        assert_eq!(calculate_bracket_tax(dec!(45000), &stage3()), dec!(4288));
        // 4288 + (135000 - 45000) * 0.30
        assert_eq!(calculate_bracket_tax(dec!(135000), &stage3()), dec!(31288));
        // 31288 + (190000 - 135000) * 0.37
        assert_eq!(calculate_bracket_tax(dec!(190000), &stage3()), dec!(51638));
        // 51638 + 10000 * 0.45
        assert_eq!(calculate_bracket_tax(dec!(200000), &stage3()), dec!(56138));
    }

    #[test]
    fn test_2023_24_table_differs() {
        let brackets = australian_brackets("2023-24");
        // (45000 - 18200) * 0.19
        assert_eq!(calculate_bracket_tax(dec!(45000), &brackets), dec!(5092));
    }

    #[test]
    fn test_base_amount_short_circuit() {
        let brackets = vec![
            TaxBracket {
                min: dec!(0),
                max: Some(dec!(10000)),
                rate: dec!(0.10),
                base_amount: None,
            },
            TaxBracket {
                min: dec!(10000),
                max: None,
                rate: dec!(0.20),
                base_amount: Some(dec!(1000)),
            },
        ];
        // 1000 + (15000 - 10000) * 0.20
        assert_eq!(calculate_bracket_tax(dec!(15000), &brackets), dec!(2000));
    }

    #[test]
    fn test_marginal_rate_lookup() {
        let config = TaxConfig::australia("2024-25");
        assert_eq!(marginal_rate(dec!(10000), &config), dec!(0));
        assert_eq!(marginal_rate(dec!(18200), &config), dec!(0));
        assert_eq!(marginal_rate(dec!(18201), &config), dec!(0.16));
        assert_eq!(marginal_rate(dec!(100000), &config), dec!(0.30));
        assert_eq!(marginal_rate(dec!(500000), &config), dec!(0.45));
    }

    #[test]
    fn test_marginal_rate_flat_mode() {
        let config = TaxConfig::flat(dec!(0.20));
        assert_eq!(marginal_rate(dec!(100000), &config), dec!(0.20));
    }

    #[test]
    fn test_flat_mode_applies_single_rate() {
        let config = TaxConfig::flat(dec!(0.20));
        assert_eq!(assess(dec!(60000), &config).total, dec!(12000));
    }

    #[test]
    fn test_unknown_country_falls_back_to_flat() {
        let config = TaxConfig {
            country: "atlantis".to_string(),
            tax_rate: dec!(0.10),
            ..Default::default()
        };
        assert_eq!(assess(dec!(50000), &config).total, dec!(5000));
    }

    #[test]
    fn test_custom_brackets_override_table() {
        let config = TaxConfig {
            country: "australia".to_string(),
            custom_brackets: Some(vec![TaxBracket {
                min: dec!(0),
                max: None,
                rate: dec!(0.50),
                base_amount: None,
            }]),
            // High enough that the offset is zero
            ..TaxConfig::australia("2024-25")
        };
        assert_eq!(assess(dec!(100000), &config).base_tax, dec!(50000));
    }

    #[test]
    fn test_lito_full_amount() {
        assert_eq!(low_income_offset(dec!(30000), TaxResidency::Resident), dec!(700));
        assert_eq!(low_income_offset(dec!(37500), TaxResidency::Resident), dec!(700));
    }

    #[test]
    fn test_lito_first_taper() {
        // 700 - (40000 - 37500) * 0.05
        assert_eq!(low_income_offset(dec!(40000), TaxResidency::Resident), dec!(575));
        assert_eq!(low_income_offset(dec!(45000), TaxResidency::Resident), dec!(325));
    }

    #[test]
    fn test_lito_second_taper() {
        // 325 - (50000 - 45000) * 0.015
        assert_eq!(low_income_offset(dec!(50000), TaxResidency::Resident), dec!(250));
    }

    #[test]
    fn test_lito_zero_above_ceiling() {
        assert_eq!(low_income_offset(dec!(70000), TaxResidency::Resident), dec!(0));
    }

    #[test]
    fn test_lito_non_resident_ineligible() {
        assert_eq!(low_income_offset(dec!(30000), TaxResidency::NonResident), dec!(0));
        assert_eq!(low_income_offset(dec!(10), TaxResidency::NonResident), dec!(0));
    }

    #[test]
    fn test_medicare_levy_bands() {
        assert_eq!(medicare_levy(dec!(20000)), dec!(0));
        assert_eq!(medicare_levy(dec!(24276)), dec!(0));
        // (25276 - 24276) * 0.10
        assert_eq!(medicare_levy(dec!(25276)), dec!(100));
        // 2% above the band
        assert_eq!(medicare_levy(dec!(100000)), dec!(2000));
    }

    #[test]
    fn test_help_repayment_ladder() {
        assert_eq!(help_repayment(dec!(50000)), dec!(0));
        // 1% at the first threshold
        assert_eq!(help_repayment(dec!(54435)), dec!(544.35));
        // 10% at the top
        assert_eq!(help_repayment(dec!(200000)), dec!(20000));
    }

    #[test]
    fn test_assessment_total_floor() {
        // Income just above the tax-free threshold: base tax is smaller
        // than the offset, so the total clamps to zero.
        let config = TaxConfig::australia("2024-25");
        let assessment = assess(dec!(19000), &config);
        assert!(assessment.base_tax < assessment.offset);
        assert_eq!(assessment.total, dec!(0));
    }

    #[test]
    fn test_levy_applies_unless_exempt() {
        let config = TaxConfig::australia("2024-25");
        assert_eq!(assess(dec!(85000), &config).medicare_levy, dec!(1700));

        let exempt = TaxConfig {
            medicare_exempt: true,
            ..TaxConfig::australia("2024-25")
        };
        assert_eq!(assess(dec!(85000), &exempt).medicare_levy, dec!(0));
    }

    #[test]
    fn test_assessment_includes_levy_and_help_when_enabled() {
        let config = TaxConfig {
            include_help: true,
            ..TaxConfig::australia("2024-25")
        };
        let assessment = assess(dec!(100000), &config);
        assert_eq!(assessment.medicare_levy, dec!(2000));
        // 5.5% band: the highest threshold at or below 100000 is 94503.
        assert_eq!(assessment.help_repayment, dec!(5500));
        assert_eq!(
            assessment.total,
            assessment.base_tax + dec!(2000) + dec!(5500) - assessment.offset
        );
    }

    proptest! {
        /// tax(a) <= tax(b) whenever a <= b, for a fixed bracket table.
        #[test]
        fn prop_bracket_tax_monotone(a in 0i64..400_000, b in 0i64..400_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let brackets = stage3();
            prop_assert!(
                calculate_bracket_tax(Decimal::from(lo), &brackets)
                    <= calculate_bracket_tax(Decimal::from(hi), &brackets)
            );
        }

        /// The offset is non-increasing in income.
        #[test]
        fn prop_offset_non_increasing(a in 0i64..100_000, b in 0i64..100_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(
                low_income_offset(Decimal::from(lo), TaxResidency::Resident)
                    >= low_income_offset(Decimal::from(hi), TaxResidency::Resident)
            );
        }

        /// The full Australian assessment stays monotone in income.
        #[test]
        fn prop_assessment_monotone(a in 0i64..400_000, b in 0i64..400_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let config = TaxConfig::australia("2024-25");
            prop_assert!(
                assess(Decimal::from(lo), &config).total <= assess(Decimal::from(hi), &config).total
            );
        }
    }
}
