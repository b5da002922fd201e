use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::periods::Frequency;

/// A spending budget over a recurring period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    pub name: String,
    /// Spending limit per period
    pub amount: Decimal,
    pub period: Frequency,
    /// Expense categories the budget covers; empty means all
    #[serde(default)]
    pub category_ids: Vec<String>,
    pub start_date: NaiveDate,
    pub is_active: bool,
}

/// Current-period spend for a budget, supplied by the budgeting feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgress {
    pub spent_amount: Decimal,
}

/// Derived progress for a single budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetProgressMetrics {
    pub budget_id: String,
    pub name: String,
    /// The period spending limit
    pub limit: Decimal,
    pub spent: Decimal,
    /// `max(0, limit - spent)`
    pub remaining: Decimal,
    /// Spent / limit in percent; 0 when the limit is not positive
    pub utilization_percent: Decimal,
    pub is_exceeded: bool,
    /// Whole days left in the current period
    pub days_remaining: i64,
    /// Linear extrapolation of spend to the end of the period
    pub projected_spend: Decimal,
}

/// Aggregate metrics across all active budgets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetMetrics {
    pub budgets: Vec<BudgetProgressMetrics>,
    pub total_limit: Decimal,
    pub total_spent: Decimal,
    /// Total spent / total limit in percent
    pub overall_utilization: Decimal,
    pub exceeded_count: usize,
    /// Budgets under the on-track utilization threshold and not exceeded
    pub on_track_count: usize,
}
