use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{SAVINGS_RATE_EXCELLENT, SAVINGS_RATE_GOOD};
use crate::periods::{periodize, Frequency, PeriodizedAmount};
use crate::records::TaxStatus;
use crate::tax::TaxAssessment;

/// Per-source income summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeSourceMetric {
    pub id: String,
    pub source: String,
    pub tax_status: TaxStatus,
    pub gross: PeriodizedAmount,
    /// This source's proportional share of the total tax
    pub tax: PeriodizedAmount,
    pub net: PeriodizedAmount,
    /// Share of total gross income (0-100)
    pub percent_of_total: Decimal,
}

/// Income totals and per-source breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeMetrics {
    pub sources: Vec<IncomeSourceMetric>,
    pub gross: PeriodizedAmount,
    pub tax: PeriodizedAmount,
    pub net: PeriodizedAmount,
}

/// Aggregated expenses for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryExpense {
    pub category: String,
    pub amount: PeriodizedAmount,
    /// Share of total expenses (0-100)
    pub percent_of_total: Decimal,
    /// Share of net income (0-100)
    pub percent_of_net_income: Decimal,
}

/// Expense totals and category breakdown, sorted descending by amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseMetrics {
    pub categories: Vec<CategoryExpense>,
    /// The five largest categories
    pub top_categories: Vec<CategoryExpense>,
    pub total: PeriodizedAmount,
}

/// Tax summary with the itemized assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxMetrics {
    pub taxable_income: PeriodizedAmount,
    pub tax: PeriodizedAmount,
    /// Total tax / gross income, as a fraction
    pub effective_rate: Decimal,
    /// Rate of the bracket containing the taxable income, as a fraction
    pub marginal_rate: Decimal,
    pub assessment: TaxAssessment,
}

/// Qualitative savings-rate rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SavingsStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SavingsStatus {
    /// Rating for a savings rate given in percent of gross income.
    pub fn from_rate(rate: Decimal) -> Self {
        if rate >= SAVINGS_RATE_EXCELLENT {
            SavingsStatus::Excellent
        } else if rate >= SAVINGS_RATE_GOOD {
            SavingsStatus::Good
        } else if rate >= Decimal::ZERO {
            SavingsStatus::Fair
        } else {
            SavingsStatus::Poor
        }
    }
}

/// Savings summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsMetrics {
    /// Net income minus total expenses
    pub amount: PeriodizedAmount,
    /// Savings / gross income, in percent
    pub rate: Decimal,
    pub status: SavingsStatus,
}

/// Complete finance summary for one computation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceMetrics {
    pub income: IncomeMetrics,
    pub expenses: ExpenseMetrics,
    pub tax: TaxMetrics,
    pub savings: SavingsMetrics,
}

impl FinanceMetrics {
    /// Explicit all-zero metrics for empty input. Every ratio is zero
    /// rather than undefined.
    pub fn zero(period: Frequency, currency: &str) -> Self {
        let zero = || periodize(Decimal::ZERO, period, currency);
        FinanceMetrics {
            income: IncomeMetrics {
                sources: Vec::new(),
                gross: zero(),
                tax: zero(),
                net: zero(),
            },
            expenses: ExpenseMetrics {
                categories: Vec::new(),
                top_categories: Vec::new(),
                total: zero(),
            },
            tax: TaxMetrics {
                taxable_income: zero(),
                tax: zero(),
                effective_rate: Decimal::ZERO,
                marginal_rate: Decimal::ZERO,
                assessment: TaxAssessment::zero(),
            },
            savings: SavingsMetrics {
                amount: zero(),
                rate: Decimal::ZERO,
                status: SavingsStatus::Fair,
            },
        }
    }
}
