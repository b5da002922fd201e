//! Budget progress computation.
//!
//! Day math works off whole periods elapsed since the budget's start date:
//! the offset within the current period gives days elapsed, the period
//! length minus that gives days remaining. Projection extrapolates the
//! current daily rate linearly to the end of the period; with no elapsed
//! days (or none remaining) the projection is the spend so far unchanged.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::BUDGET_ON_TRACK_THRESHOLD;
use crate::periods::days_in_period;

use super::{Budget, BudgetMetrics, BudgetProgress, BudgetProgressMetrics};

/// Progress for a single budget as of the given date.
pub fn compute_budget_progress(
    budget: &Budget,
    spent: Decimal,
    as_of: NaiveDate,
) -> BudgetProgressMetrics {
    let limit = budget.amount;
    let remaining = (limit - spent).max(Decimal::ZERO);
    let utilization_percent = if limit > Decimal::ZERO {
        (spent / limit * dec!(100)).round_dp(2)
    } else {
        Decimal::ZERO
    };
    let is_exceeded = spent > limit;

    let period_days = days_in_period(budget.period);
    let days_since_start = (as_of - budget.start_date).num_days().max(0);

    let (days_elapsed, days_remaining) = if period_days > 0 {
        let into_period = days_since_start % period_days;
        (into_period, (period_days - into_period).max(0))
    } else {
        (0, 0)
    };

    let projected_spend = if days_elapsed <= 0 || days_remaining == 0 {
        spent
    } else {
        spent / Decimal::from(days_elapsed) * Decimal::from(period_days)
    };

    BudgetProgressMetrics {
        budget_id: budget.id.clone(),
        name: budget.name.clone(),
        limit,
        spent,
        remaining,
        utilization_percent,
        is_exceeded,
        days_remaining,
        projected_spend,
    }
}

/// Progress for every active budget plus aggregates.
///
/// Budgets without a supplied progress entry count as zero spend; inactive
/// budgets are skipped entirely.
pub fn compute_budget_metrics(
    budgets: &[Budget],
    progresses: &HashMap<String, BudgetProgress>,
    as_of: NaiveDate,
) -> BudgetMetrics {
    debug!("Computing budget metrics for {} budgets", budgets.len());

    let mut result = BudgetMetrics::default();

    for budget in budgets.iter().filter(|b| b.is_active) {
        let spent = progresses
            .get(&budget.id)
            .map(|p| p.spent_amount)
            .unwrap_or(Decimal::ZERO);
        let progress = compute_budget_progress(budget, spent, as_of);

        result.total_limit += progress.limit;
        result.total_spent += progress.spent;
        if progress.is_exceeded {
            result.exceeded_count += 1;
        } else if progress.utilization_percent < BUDGET_ON_TRACK_THRESHOLD {
            result.on_track_count += 1;
        }
        result.budgets.push(progress);
    }

    result.overall_utilization = if result.total_limit > Decimal::ZERO {
        (result.total_spent / result.total_limit * dec!(100)).round_dp(2)
    } else {
        Decimal::ZERO
    };

    result
}
