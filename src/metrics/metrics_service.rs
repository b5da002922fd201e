//! Derivation of finance metrics from raw records.
//!
//! Stages run in dependency order: income (with proportional tax
//! allocation), expenses, tax, savings. Every ratio guards against a zero
//! denominator, so degenerate input produces explicit zeros instead of
//! errors.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::periods::{periodize, to_annual, Frequency};
use crate::records::{Expense, Income, TaxStatus};
use crate::tax::{assess, marginal_rate, TaxConfig};

use super::{
    CategoryExpense, ExpenseMetrics, FinanceMetrics, IncomeMetrics, IncomeSourceMetric,
    SavingsMetrics, SavingsStatus, TaxMetrics,
};

/// Number of categories surfaced in `ExpenseMetrics::top_categories`.
const TOP_CATEGORY_COUNT: usize = 5;

/// `part / whole * 100`, rounded for display; zero when `whole` is not
/// positive.
fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole > Decimal::ZERO {
        (part / whole * dec!(100)).round_dp(2)
    } else {
        Decimal::ZERO
    }
}

/// Computes the full finance summary for one input snapshot.
pub fn compute_finance_metrics(
    incomes: &[Income],
    expenses: &[Expense],
    tax_config: &TaxConfig,
    display_period: Frequency,
    currency: &str,
) -> FinanceMetrics {
    debug!(
        "Computing finance metrics for {} incomes, {} expenses",
        incomes.len(),
        expenses.len()
    );

    if incomes.is_empty() && expenses.is_empty() {
        return FinanceMetrics::zero(display_period, currency);
    }

    // Annualize incomes once; records are immutable for the whole pass.
    let annual_incomes: Vec<(&Income, Decimal)> = incomes
        .iter()
        .map(|income| (income, to_annual(income.amount, income.frequency)))
        .collect();

    let total_gross: Decimal = annual_incomes.iter().map(|(_, annual)| *annual).sum();
    let pre_tax_total: Decimal = annual_incomes
        .iter()
        .filter(|(income, _)| income.tax_status == TaxStatus::PreTax)
        .map(|(_, annual)| *annual)
        .sum();

    // Taxable income: pre-tax income less deductible deductions.
    let deductible: Decimal = if tax_config.include_deductions {
        incomes
            .iter()
            .flat_map(|income| income.deductions.iter())
            .filter(|d| d.is_tax_deductible)
            .map(|d| d.amount)
            .sum()
    } else {
        Decimal::ZERO
    };
    let taxable_income = (pre_tax_total - deductible).max(Decimal::ZERO);

    let assessment = assess(taxable_income, tax_config);
    let total_tax = assessment.total;

    // Income metrics: tax allocated to each pre-tax source in proportion
    // to its share of total pre-tax income.
    let sources: Vec<IncomeSourceMetric> = annual_incomes
        .iter()
        .map(|(income, annual)| {
            let tax_share = if income.tax_status == TaxStatus::PreTax
                && pre_tax_total > Decimal::ZERO
            {
                *annual / pre_tax_total * total_tax
            } else {
                Decimal::ZERO
            };
            IncomeSourceMetric {
                id: income.id.clone(),
                source: income.source.clone(),
                tax_status: income.tax_status,
                gross: periodize(*annual, display_period, currency),
                tax: periodize(tax_share, display_period, currency),
                net: periodize(*annual - tax_share, display_period, currency),
                percent_of_total: percent_of(*annual, total_gross),
            }
        })
        .collect();

    let net_income = total_gross - total_tax;
    let income_metrics = IncomeMetrics {
        sources,
        gross: periodize(total_gross, display_period, currency),
        tax: periodize(total_tax, display_period, currency),
        net: periodize(net_income, display_period, currency),
    };

    // Expense metrics: group by category, sort descending.
    let mut by_category: BTreeMap<&str, Decimal> = BTreeMap::new();
    for expense in expenses {
        *by_category.entry(expense.category.as_str()).or_default() +=
            to_annual(expense.amount, expense.frequency);
    }
    let total_expenses: Decimal = by_category.values().copied().sum();

    let mut categories: Vec<CategoryExpense> = by_category
        .into_iter()
        .map(|(category, annual)| CategoryExpense {
            category: category.to_string(),
            amount: periodize(annual, display_period, currency),
            percent_of_total: percent_of(annual, total_expenses),
            percent_of_net_income: percent_of(annual, net_income),
        })
        .collect();
    categories.sort_by(|a, b| b.amount.annualized.cmp(&a.amount.annualized));
    let top_categories: Vec<CategoryExpense> =
        categories.iter().take(TOP_CATEGORY_COUNT).cloned().collect();

    let expense_metrics = ExpenseMetrics {
        categories,
        top_categories,
        total: periodize(total_expenses, display_period, currency),
    };

    // Tax metrics.
    let effective_rate = if total_gross > Decimal::ZERO {
        (total_tax / total_gross).round_dp(4)
    } else {
        Decimal::ZERO
    };
    let tax_metrics = TaxMetrics {
        taxable_income: periodize(taxable_income, display_period, currency),
        tax: periodize(total_tax, display_period, currency),
        effective_rate,
        marginal_rate: marginal_rate(taxable_income, tax_config),
        assessment,
    };

    // Savings metrics.
    let annual_savings = net_income - total_expenses;
    let savings_rate = if total_gross > Decimal::ZERO {
        (annual_savings / total_gross * dec!(100)).round_dp(2)
    } else {
        Decimal::ZERO
    };
    let savings_metrics = SavingsMetrics {
        amount: periodize(annual_savings, display_period, currency),
        rate: savings_rate,
        status: SavingsStatus::from_rate(savings_rate),
    };

    FinanceMetrics {
        income: income_metrics,
        expenses: expense_metrics,
        tax: tax_metrics,
        savings: savings_metrics,
    }
}
