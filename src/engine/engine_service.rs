//! The metrics engine: one entry point that computes everything, memoized
//! against a fingerprint of the input snapshot.
//!
//! A computation pass is pure and synchronous. The engine caches the most
//! recent result; a repeated call with an identical snapshot returns the
//! cached value without recomputing. Registering a metric or calling
//! [`MetricsEngine::invalidate`] drops the cache.

use std::collections::BTreeMap;
use std::sync::Arc;

use log::{debug, error};
use rust_decimal_macros::dec;

use crate::constants::CATEGORY_COLORS;
use crate::errors::{MetricsError, Result};
use crate::flows::build_flow_graph;
use crate::metrics::{compute_finance_metrics, FinanceMetrics};

use super::{
    compute_input_fingerprint, custom_metrics::topological_order, ComputedMetrics, CustomMetric,
    MetricsInput, PieSlice, SummaryCard, VisualizationData,
};

struct CacheEntry {
    fingerprint: String,
    result: Arc<ComputedMetrics>,
}

/// Computes finance metrics, visualizations, and custom metrics from raw
/// records, memoizing the most recent input snapshot.
#[derive(Default)]
pub struct MetricsEngine {
    metrics: Vec<CustomMetric>,
    /// Indices into `metrics` in dependency order
    order: Vec<usize>,
    cache: Option<CacheEntry>,
    computations: u64,
}

impl MetricsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a custom metric and re-derives the evaluation order.
    ///
    /// Fails on a duplicate id or if the metric would close a dependency
    /// cycle; a failed registration leaves the engine unchanged.
    pub fn register(&mut self, metric: CustomMetric) -> Result<()> {
        if self.metrics.iter().any(|m| m.id == metric.id) {
            return Err(MetricsError::DuplicateMetric(metric.id).into());
        }
        self.metrics.push(metric);
        match topological_order(&self.metrics) {
            Ok(order) => {
                self.order = order;
                self.cache = None;
                Ok(())
            }
            Err(err) => {
                self.metrics.pop();
                Err(err)
            }
        }
    }

    /// Drops the cached result; the next `compute_all` recomputes.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    /// Number of full computation passes performed so far.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// Computes all metrics for the given snapshot, or returns the cached
    /// result when the snapshot is unchanged since the last call.
    pub fn compute_all(&mut self, input: &MetricsInput) -> Arc<ComputedMetrics> {
        let fingerprint = compute_input_fingerprint(
            input.incomes,
            input.expenses,
            input.tax_config,
            input.display_period,
            input.currency,
        );
        if let Some(entry) = &self.cache {
            if entry.fingerprint == fingerprint {
                debug!("Metrics cache hit for fingerprint {}", &fingerprint[..12]);
                return Arc::clone(&entry.result);
            }
        }

        self.computations += 1;
        debug!(
            "Computing metrics: {} incomes, {} expenses",
            input.incomes.len(),
            input.expenses.len()
        );

        let finance = compute_finance_metrics(
            input.incomes,
            input.expenses,
            input.tax_config,
            input.display_period,
            input.currency,
        );
        let visualization = build_visualization(&finance);
        let custom = self.compute_custom_metrics(&finance);

        let result = Arc::new(ComputedMetrics {
            finance,
            visualization,
            custom,
        });
        self.cache = Some(CacheEntry {
            fingerprint,
            result: Arc::clone(&result),
        });
        result
    }

    /// Evaluates the registered metrics in dependency order.
    ///
    /// A failing metric is logged and omitted; metrics depending on an
    /// omitted (or never registered) value are skipped rather than run
    /// against missing input.
    fn compute_custom_metrics(
        &self,
        finance: &FinanceMetrics,
    ) -> BTreeMap<String, serde_json::Value> {
        let mut values = BTreeMap::new();
        for &index in &self.order {
            let metric = &self.metrics[index];
            if let Some(missing) = metric
                .dependencies
                .iter()
                .find(|dep| !values.contains_key(*dep))
            {
                error!(
                    "Skipping custom metric '{}': dependency '{}' has no value",
                    metric.id, missing
                );
                continue;
            }
            match metric.evaluate(finance, &values) {
                Ok(value) => {
                    values.insert(metric.id.clone(), value);
                }
                Err(err) => {
                    error!("Custom metric '{}' failed: {}", metric.id, err);
                }
            }
        }
        values
    }
}

/// Projects the finance metrics into chart-ready structures.
fn build_visualization(finance: &FinanceMetrics) -> VisualizationData {
    let expense_breakdown = finance
        .expenses
        .categories
        .iter()
        .enumerate()
        .map(|(i, category)| PieSlice {
            name: category.category.clone(),
            value: category.amount.value,
            percentage: category.percent_of_total,
            color: CATEGORY_COLORS[i % CATEGORY_COLORS.len()].to_string(),
        })
        .collect();

    let period_label = finance.income.gross.period.label().to_string();
    let summary_cards = vec![
        SummaryCard {
            title: "Gross Income".to_string(),
            value: finance.income.gross.formatted.clone(),
            subtitle: period_label.clone(),
        },
        SummaryCard {
            title: "Tax".to_string(),
            value: finance.tax.tax.formatted.clone(),
            subtitle: format!(
                "{}% effective rate",
                (finance.tax.effective_rate * dec!(100)).round_dp(1)
            ),
        },
        SummaryCard {
            title: "Net Income".to_string(),
            value: finance.income.net.formatted.clone(),
            subtitle: period_label.clone(),
        },
        SummaryCard {
            title: "Expenses".to_string(),
            value: finance.expenses.total.formatted.clone(),
            subtitle: period_label,
        },
        SummaryCard {
            title: "Savings".to_string(),
            value: finance.savings.amount.formatted.clone(),
            subtitle: format!("{}% of gross income", finance.savings.rate),
        },
    ];

    VisualizationData {
        expense_breakdown,
        sankey: build_flow_graph(finance),
        summary_cards,
    }
}
