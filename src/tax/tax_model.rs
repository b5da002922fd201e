use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single tax bracket.
///
/// Brackets are half-open slices `(min, max]`; `max == None` means no upper
/// bound. `base_amount`, when present, is the cumulative tax owed at `min`
/// (the "X plus Yc for each $1 over" form published in tax tables) and lets
/// the calculator skip the marginal walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxBracket {
    pub min: Decimal,
    pub max: Option<Decimal>,
    /// Marginal rate as a fraction, e.g. 0.30 for 30%
    pub rate: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_amount: Option<Decimal>,
}

/// Residency status for offset eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaxResidency {
    #[default]
    Resident,
    NonResident,
}

/// Tax configuration supplied by the settings layer.
///
/// `country` selects a bracket table; the value "simple" (or any country
/// without a published table) applies the flat `tax_rate` to the whole
/// amount instead. Unknown countries deliberately fall back to the flat
/// rate rather than erroring so interim UI state keeps rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxConfig {
    pub country: String,
    /// Flat rate as a fraction, used in "simple" mode and as the fallback
    pub tax_rate: Decimal,
    /// Whether deductible deductions reduce taxable income
    pub include_deductions: bool,
    /// Optional override of the country's bracket table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_brackets: Option<Vec<TaxBracket>>,
    #[serde(default)]
    pub residency: TaxResidency,
    /// Financial year for table selection, e.g. "2024-25"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_year: Option<String>,
    /// Medicare levy exemption (Australia only); the levy applies unless
    /// an exemption is requested
    #[serde(default)]
    pub medicare_exempt: bool,
    /// Include HELP/HECS repayment (Australia only)
    #[serde(default)]
    pub include_help: bool,
}

impl Default for TaxConfig {
    fn default() -> Self {
        TaxConfig {
            country: "simple".to_string(),
            tax_rate: Decimal::ZERO,
            include_deductions: true,
            custom_brackets: None,
            residency: TaxResidency::Resident,
            financial_year: None,
            medicare_exempt: false,
            include_help: false,
        }
    }
}

impl TaxConfig {
    /// Flat-rate configuration, e.g. `TaxConfig::flat(dec!(0.20))`.
    pub fn flat(tax_rate: Decimal) -> Self {
        TaxConfig {
            tax_rate,
            ..Default::default()
        }
    }

    /// Australian resident configuration for the given financial year.
    pub fn australia(financial_year: &str) -> Self {
        TaxConfig {
            country: "australia".to_string(),
            financial_year: Some(financial_year.to_string()),
            ..Default::default()
        }
    }
}

/// Itemized result of a tax assessment. All amounts are annual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxAssessment {
    pub taxable_income: Decimal,
    /// Tax from the bracket table or flat rate, before adjustments
    pub base_tax: Decimal,
    /// Low-income offset (subtracted)
    pub offset: Decimal,
    pub medicare_levy: Decimal,
    pub help_repayment: Decimal,
    /// `max(0, base_tax + medicare_levy + help_repayment - offset)`
    pub total: Decimal,
}

impl TaxAssessment {
    pub fn zero() -> Self {
        TaxAssessment {
            taxable_income: Decimal::ZERO,
            base_tax: Decimal::ZERO,
            offset: Decimal::ZERO,
            medicare_levy: Decimal::ZERO,
            help_repayment: Decimal::ZERO,
            total: Decimal::ZERO,
        }
    }
}
