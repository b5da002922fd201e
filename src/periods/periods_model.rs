use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment / display frequency for a monetary amount.
///
/// Unrecognized values deserialize to `Once` (annualization multiplier 1):
/// the converter is deliberately permissive so partially-loaded UI state
/// never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    Hourly,
    Daily,
    Weekly,
    Fortnightly,
    #[default]
    Monthly,
    Quarterly,
    Annually,
    #[serde(other)]
    Once,
}

impl Frequency {
    /// Human-readable label, e.g. for summary cards ("per month").
    pub fn label(&self) -> &'static str {
        match self {
            Frequency::Hourly => "per hour",
            Frequency::Daily => "per day",
            Frequency::Weekly => "per week",
            Frequency::Fortnightly => "per fortnight",
            Frequency::Monthly => "per month",
            Frequency::Quarterly => "per quarter",
            Frequency::Annually => "per year",
            Frequency::Once => "once",
        }
    }
}

/// A monetary amount carried in both the requested display period and its
/// annual equivalent.
///
/// Invariant: `value * periods_per_year(period) == annualized`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodizedAmount {
    /// Amount per display period
    pub value: Decimal,
    /// The display period
    pub period: Frequency,
    /// Annual equivalent of `value`
    pub annualized: Decimal,
    /// Display string, e.g. "$5,000.00"
    pub formatted: String,
}
